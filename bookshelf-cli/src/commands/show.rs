//! Show command implementation

use super::fetch_failed;
use anyhow::Result;
use bookshelf_core::{ApiClient, BookDetailView};

/// Display information about one book
pub async fn show(client: &ApiClient, id: i64, json: bool) -> Result<()> {
    let book = client
        .get_book(id)
        .await
        .map_err(|e| fetch_failed("Book fetch error", e))?;

    let view = BookDetailView::new(&book, |p, f| client.cover_url(p, f), client.download_url(id));

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("Title:       {}", view.title);
    if !view.subtitle.is_empty() {
        println!("Subtitle:    {}", view.subtitle);
    }
    if !view.authors.is_empty() {
        println!("Authors:     {}", view.authors);
    }
    if !view.categories.is_empty() {
        println!("Categories:  {}", view.categories.join(", "));
    }
    print_field("Publisher:  ", view.publisher.as_deref());
    print_field("Published:  ", view.published.as_deref());
    print_field("Edition:    ", view.edition.map(|e| e.to_string()).as_deref());
    print_field("ISBN 10:    ", view.isbn10.as_deref());
    print_field("ISBN 13:    ", view.isbn13.as_deref());
    print_field("ASIN:       ", view.asin.as_deref());
    print_field("Pages:      ", view.pages.map(|p| p.to_string()).as_deref());
    print_field("File size:  ", view.file_size.as_deref());
    if !view.file_types.is_empty() {
        println!("File types:  {}", view.file_types);
    }
    print_field("Cover:      ", view.cover_url.as_deref());
    println!("Download:    {}", view.download_url);

    if !view.description.is_empty() {
        println!();
        for paragraph in &view.description {
            println!("{}\n", paragraph);
        }
    }

    Ok(())
}

fn print_field(label: &str, value: Option<&str>) {
    if let Some(value) = value {
        println!("{} {}", label, value);
    }
}
