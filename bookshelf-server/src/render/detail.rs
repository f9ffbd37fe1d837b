//! Book detail page

use super::{end, layout, raw, start, text_element, void_element, RenderResult};
use bookshelf_core::{BookDetailView, Notice};
use quick_xml::Writer;
use std::io::Write;

/// Render one book, or an empty shell carrying `notices` when it could not be loaded
pub fn detail_page(book: Option<&BookDetailView>, notices: &[Notice]) -> RenderResult<String> {
    let title = book.map_or("Book", |b| b.title.as_str());
    layout(title, notices, |writer| {
        start(writer, "nav", &[])?;
        start(writer, "p", &[])?;
        start(writer, "a", &[("href", "/books")])?;
        raw(writer, "&larr; All books")?;
        end(writer, "a")?;
        end(writer, "p")?;
        end(writer, "nav")?;

        start(writer, "main", &[])?;
        if let Some(book) = book {
            write_detail(writer, book)?;
        }
        end(writer, "main")
    })
}

fn write_detail<W: Write>(writer: &mut Writer<W>, book: &BookDetailView) -> RenderResult {
    start(writer, "div", &[("class", "detail")])?;

    if let Some(url) = &book.cover_url {
        start(writer, "div", &[])?;
        void_element(writer, "img", &[("src", url.as_str()), ("alt", "book cover")])?;
        end(writer, "div")?;
    }

    start(writer, "div", &[("class", "paper")])?;
    text_element(writer, "h3", &[], &book.title)?;
    text_element(writer, "h5", &[], &book.subtitle)?;
    void_element(writer, "hr", &[])?;
    start(writer, "p", &[])?;
    text_element(writer, "em", &[], &book.authors)?;
    end(writer, "p")?;

    start(writer, "div", &[])?;
    for category in &book.categories {
        text_element(writer, "span", &[("class", "badge outline")], category)?;
    }
    end(writer, "div")?;

    start(writer, "div", &[("class", "facts")])?;
    write_facts(
        writer,
        &[
            ("Publisher", book.publisher.clone()),
            ("Published", book.published.clone()),
            ("Edition", book.edition.map(|e| e.to_string())),
        ],
    )?;
    write_facts(
        writer,
        &[
            ("ISBN 10", book.isbn10.clone()),
            ("ISBN 13", book.isbn13.clone()),
            ("ASIN", book.asin.clone()),
        ],
    )?;
    write_facts(
        writer,
        &[
            ("Page count", book.pages.map(|p| p.to_string())),
            ("File size", book.file_size.clone()),
            ("File Types", Some(book.file_types.clone())),
        ],
    )?;
    end(writer, "div")?;

    start(writer, "p", &[])?;
    text_element(
        writer,
        "a",
        &[("href", book.download_url.as_str()), ("download", "")],
        "Download",
    )?;
    end(writer, "p")?;

    void_element(writer, "hr", &[])?;
    if !book.description.is_empty() {
        start(writer, "details", &[("open", "open")])?;
        text_element(writer, "summary", &[], "Description")?;
        for paragraph in &book.description {
            text_element(writer, "p", &[], paragraph)?;
        }
        end(writer, "details")?;
    }

    end(writer, "div")?;
    end(writer, "div")
}

fn write_facts<W: Write>(writer: &mut Writer<W>, facts: &[(&str, Option<String>)]) -> RenderResult {
    start(writer, "ul", &[])?;
    for (label, value) in facts {
        let line = format!("{}: {}", label, value.as_deref().unwrap_or(""));
        text_element(writer, "li", &[], &line)?;
    }
    end(writer, "ul")
}
