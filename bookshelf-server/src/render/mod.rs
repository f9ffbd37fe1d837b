//! HTML rendering
//!
//! Pages are written as quick-xml events. Text and attribute values go through
//! `BytesText::new` / `push_attribute`, which escape them; only static markup
//! is written pre-escaped through [`raw`].

mod detail;
mod list;

pub use detail::detail_page;
pub use list::{list_page, ListPage};

use bookshelf_core::Notice;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;

pub type HtmlWriter = Writer<Cursor<Vec<u8>>>;

/// Result of rendering a page or fragment
pub type RenderResult<T = ()> = Result<T, quick_xml::Error>;

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #f8f9fa; color: #212529; }
header { height: 60px; display: flex; align-items: center; gap: 1rem; padding: 0 1rem; background: #fff; border-bottom: 1px solid #dee2e6; }
header a { color: inherit; text-decoration: none; font-weight: 600; }
.shell { display: flex; }
nav { width: 300px; padding: 1rem; background: #fff; border-right: 1px solid #dee2e6; min-height: calc(100vh - 61px); box-sizing: border-box; }
nav h4 { text-align: center; color: #868e96; margin: 1rem 0 .5rem; font-weight: 400; }
nav input[type=search], nav select { width: 100%; box-sizing: border-box; padding: .4rem; }
main { flex: 1; padding: 1rem; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1rem; }
.card { background: #fff; border: 1px solid #dee2e6; border-radius: 8px; padding: .75rem; }
.card img { display: block; margin: 15px auto 0; height: 220px; max-width: 100%; object-fit: contain; }
.card .title { height: 50px; overflow: hidden; margin: .5rem 0; }
.badge { display: inline-block; padding: 0 .5rem; border-radius: 1rem; font-size: .75rem; margin: 0 .25rem .25rem 0; background: #e7f5ff; color: #1c7ed6; }
.badge.outline { background: transparent; border: 1px solid currentColor; }
.indicator { display: block; text-align: center; font-size: .75rem; color: #fff; background: #228be6; border-radius: 1rem; width: fit-content; margin: 0 auto; padding: 0 .5rem; }
.empty { background: #fff; padding: 2rem; text-align: center; }
.pagination { display: flex; justify-content: center; gap: .25rem; margin-top: 1rem; }
.pagination a, .pagination span { padding: .25rem .6rem; border: 1px solid #dee2e6; border-radius: 4px; text-decoration: none; color: inherit; }
.pagination .current { background: #228be6; color: #fff; }
.detail { display: flex; gap: 1rem; flex-wrap: wrap; }
.detail img { height: 400px; width: auto; object-fit: contain; border-radius: 8px; }
.paper { flex: 1; min-width: 300px; background: #fff; border-radius: 8px; padding: .75rem; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
.facts { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); }
.toasts { position: fixed; bottom: 1rem; right: 1rem; display: flex; flex-direction: column; gap: .5rem; }
.toast { background: #fff; border: 1px solid #dee2e6; border-left: 4px solid #fa5252; border-radius: 4px; padding: .5rem .75rem; min-width: 250px; }
.toast strong { display: block; }
"#;

/// Open `name` with `attrs`
pub(crate) fn start<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    attrs: &[(&str, &str)],
) -> RenderResult {
    let mut elem = BytesStart::new(name);
    for attr in attrs {
        elem.push_attribute(*attr);
    }
    writer.write_event(Event::Start(elem))?;
    Ok(())
}

pub(crate) fn end<W: std::io::Write>(writer: &mut Writer<W>, name: &str) -> RenderResult {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Write `<name attrs>content</name>` with `content` escaped
pub(crate) fn text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    attrs: &[(&str, &str)],
    content: &str,
) -> RenderResult {
    start(writer, name, attrs)?;
    text(writer, content)?;
    end(writer, name)
}

/// Write a void element such as `img` or `input`
pub(crate) fn void_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    attrs: &[(&str, &str)],
) -> RenderResult {
    let mut elem = BytesStart::new(name);
    for attr in attrs {
        elem.push_attribute(*attr);
    }
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

pub(crate) fn text<W: std::io::Write>(writer: &mut Writer<W>, content: &str) -> RenderResult {
    writer.write_event(Event::Text(BytesText::new(content)))?;
    Ok(())
}

/// Write static markup as is
pub(crate) fn raw<W: std::io::Write>(writer: &mut Writer<W>, markup: &str) -> RenderResult {
    writer.write_event(Event::Text(BytesText::from_escaped(markup)))?;
    Ok(())
}

/// Write the application shell around whatever `body` writes into the shell
/// (navbar and `main`)
pub(crate) fn layout<F>(title: &str, notices: &[Notice], body: F) -> RenderResult<String>
where
    F: FnOnce(&mut HtmlWriter) -> RenderResult,
{
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    writer.write_event(Event::DocType(BytesText::from_escaped("html")))?;
    start(&mut writer, "html", &[("lang", "en")])?;

    start(&mut writer, "head", &[])?;
    void_element(&mut writer, "meta", &[("charset", "utf-8")])?;
    void_element(
        &mut writer,
        "meta",
        &[
            ("name", "viewport"),
            ("content", "width=device-width, initial-scale=1"),
        ],
    )?;
    text_element(&mut writer, "title", &[], title)?;
    start(&mut writer, "style", &[])?;
    raw(&mut writer, STYLE)?;
    end(&mut writer, "style")?;
    end(&mut writer, "head")?;

    start(&mut writer, "body", &[])?;
    start(&mut writer, "header", &[])?;
    start(&mut writer, "a", &[("href", "/"), ("aria-label", "bookshelf")])?;
    raw(&mut writer, "&#128218; Bookshelf")?;
    end(&mut writer, "a")?;
    end(&mut writer, "header")?;

    start(&mut writer, "div", &[("class", "shell")])?;
    body(&mut writer)?;
    end(&mut writer, "div")?;

    write_notices(&mut writer, notices)?;
    end(&mut writer, "body")?;
    end(&mut writer, "html")?;

    let html = writer.into_inner().into_inner();
    Ok(String::from_utf8(html).unwrap_or_default())
}

fn write_notices<W: std::io::Write>(writer: &mut Writer<W>, notices: &[Notice]) -> RenderResult {
    if notices.is_empty() {
        return Ok(());
    }

    start(writer, "div", &[("class", "toasts")])?;
    for notice in notices {
        start(writer, "div", &[("class", "toast"), ("role", "alert")])?;
        text_element(writer, "strong", &[], &notice.title)?;
        text(writer, &notice.message)?;
        end(writer, "div")?;
    }
    end(writer, "div")
}

/// Page for unknown routes and unparsable ids
pub fn not_found_page() -> RenderResult<String> {
    layout("Not found", &[], |writer| {
        start(writer, "main", &[])?;
        start(writer, "div", &[("class", "empty")])?;
        text_element(writer, "p", &[], "Page not found")?;
        start(writer, "p", &[])?;
        text_element(writer, "a", &[("href", "/")], "Back to the catalog")?;
        end(writer, "p")?;
        end(writer, "div")?;
        end(writer, "main")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment<F>(write: F) -> String
    where
        F: FnOnce(&mut HtmlWriter) -> RenderResult,
    {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        write(&mut writer).unwrap();
        String::from_utf8(writer.into_inner().into_inner()).unwrap()
    }

    #[test]
    fn test_text_and_attributes_are_escaped() {
        let html = fragment(|w| {
            text_element(
                w,
                "a",
                &[("title", "\"O'Reilly\" & co")],
                "<b>Rust & Go</b>",
            )
        });
        assert!(html.contains("title=\"&quot;O&apos;Reilly&quot; &amp; co\""));
        assert!(html.contains(">&lt;b&gt;Rust &amp; Go&lt;/b&gt;</a>"));
    }

    #[test]
    fn test_layout_renders_notices() {
        let html = layout(
            "Books",
            &[Notice::error("Book list fetch error", "size <= 100")],
            |w| text_element(w, "main", &[], "body"),
        )
        .unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Books</title>"));
        assert!(html.contains("<main>body</main>"));
        assert!(html.contains(
            "<div class=\"toast\" role=\"alert\"><strong>Book list fetch error</strong>size &lt;= 100"
        ));
    }

    #[test]
    fn test_layout_without_notices() {
        let html = layout("Books", &[], |_| Ok(())).unwrap();
        assert!(!html.contains("toasts"));
        assert!(html.ends_with("</body></html>"));
    }

    #[test]
    fn test_not_found_page() {
        let html = not_found_page().unwrap();
        assert!(html.contains("<p>Page not found</p>"));
    }
}
