//! List command implementation

use super::fetch_failed;
use anyhow::Result;
use bookshelf_core::{ApiClient, BookCard, BookQuery, LookupTable, Notice};
use serde::Serialize;

/// List output
#[derive(Serialize)]
struct ListOutput {
    page: u32,
    total_pages: u32,
    total_elements: u64,
    books: Vec<BookCard>,
}

/// Print one page of books
pub async fn list(client: &ApiClient, query: &BookQuery, json: bool) -> Result<()> {
    // Missing file type names only cost the badges, so keep going
    let file_types = match client.all_file_types().await {
        Ok(table) => table,
        Err(e) => {
            if let Some(notice) = Notice::from_error("File types fetch error", &e) {
                eprintln!("{}: {}", notice.title, notice.message);
            }
            LookupTable::new()
        }
    };

    let page = client
        .list_books(query)
        .await
        .map_err(|e| fetch_failed("Book list fetch error", e))?;

    let books: Vec<BookCard> = page
        .content
        .iter()
        .map(|book| BookCard::new(book, &file_types, |p, f| client.cover_url(p, f)))
        .collect();

    let output = ListOutput {
        page: page.page,
        total_pages: page.total_pages,
        total_elements: page.total_elements,
        books,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if output.books.is_empty() {
        println!("Nothing Found");
        return Ok(());
    }

    for book in &output.books {
        let mut line = format!("{:>6}  {}", book.id, book.title);
        if let Some(edition) = &book.edition_label {
            line.push_str(&format!(" ({})", edition));
        }
        if let Some(published) = &book.published {
            line.push_str(&format!("  [{}]", published));
        }
        if let Some(pages) = book.pages {
            line.push_str(&format!("  {} pages", pages));
        }
        if let Some(size) = &book.file_size {
            line.push_str(&format!("  {}", size));
        }
        if !book.file_types.is_empty() {
            line.push_str(&format!("  {}", book.file_types.join(", ")));
        }
        println!("{}", line);
    }
    println!(
        "\nPage {} of {} ({} books)",
        output.page, output.total_pages, output.total_elements
    );

    Ok(())
}
