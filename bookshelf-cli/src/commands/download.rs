//! Download command implementation

use super::fetch_failed;
use anyhow::{Context, Result};
use bookshelf_core::ApiClient;
use indicatif::{ProgressBar, ProgressStyle};

/// Download a book file to `output`
pub async fn download(client: &ApiClient, id: i64, output: &str) -> Result<()> {
    let mut file = tokio::fs::File::create(output)
        .await
        .with_context(|| format!("Failed to create output file: {}", output))?;

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {bytes}/{total_bytes} {msg}")?
            .progress_chars("##-"),
    );

    let result = client
        .download_book(id, &mut file, |done, total| {
            if let Some(total) = total {
                pb.set_length(total);
            }
            pb.set_position(done);
        })
        .await;

    match result {
        Ok(bytes) => {
            pb.finish_with_message("done");
            println!("Downloaded {} bytes to {}", bytes, output);
            Ok(())
        }
        Err(e) => {
            pb.abandon();
            drop(file);
            // Do not leave a truncated file behind
            let _ = tokio::fs::remove_file(output).await;
            Err(fetch_failed("Book download error", e))
        }
    }
}
