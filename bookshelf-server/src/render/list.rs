//! Book list page: search navbar, card grid and pagination

use super::{end, layout, raw, start, text, text_element, void_element, RenderResult};
use bookshelf_core::{BookCard, CatalogState, LookupTable, Notice, PageLink, SortOrder};
use quick_xml::Writer;
use std::io::Write;

/// Pages shown at either end of the pagination control
const BOUNDARIES: u32 = 2;
/// Pages shown on each side of the current page
const SIBLINGS: u32 = 2;

const SYNC_PUBLISHERS: &str = "function syncPublishers(s){s.form.publishers.value=\
     Array.from(s.selectedOptions).map(o=>o.value).join(',');s.form.submit();}";

pub struct ListPage<'a> {
    pub catalog: &'a CatalogState,
    pub cards: &'a [BookCard],
    pub publishers: &'a LookupTable,
    pub notices: &'a [Notice],
}

pub fn list_page(page: &ListPage<'_>) -> RenderResult<String> {
    layout("Books", page.notices, |writer| {
        write_navbar(writer, page.catalog, page.publishers)?;

        start(writer, "main", &[])?;
        if page.cards.is_empty() {
            start(writer, "div", &[("class", "empty")])?;
            start(writer, "p", &[])?;
            raw(writer, "&#128533; Nothing Found &#128270;")?;
            end(writer, "p")?;
            end(writer, "div")?;
        } else {
            start(writer, "div", &[("class", "grid")])?;
            for card in page.cards {
                write_card(writer, card)?;
            }
            end(writer, "div")?;
            write_pagination(writer, page.catalog)?;
        }
        end(writer, "main")
    })
}

/// Search form; submitting it always lands on page 1
fn write_navbar<W: Write>(
    writer: &mut Writer<W>,
    catalog: &CatalogState,
    publishers: &LookupTable,
) -> RenderResult {
    let filters = &catalog.filters;
    start(writer, "nav", &[])?;
    start(writer, "form", &[("method", "get"), ("action", "/books/1")])?;

    text_element(writer, "h4", &[], "Search")?;
    void_element(
        writer,
        "input",
        &[
            ("type", "search"),
            ("name", "q"),
            ("placeholder", "Search..."),
            ("value", filters.search_term.as_str()),
        ],
    )?;

    text_element(writer, "h4", &[], "Sort")?;
    start(
        writer,
        "select",
        &[("name", "sort"), ("onchange", "this.form.submit()")],
    )?;
    for order in SortOrder::ALL {
        let mut attrs = vec![("value", order.as_query())];
        if order == filters.sort {
            attrs.push(("selected", "selected"));
        }
        text_element(writer, "option", &attrs, order.label())?;
    }
    end(writer, "select")?;

    text_element(writer, "h4", &[], "Filters")?;
    text_element(writer, "label", &[], "Publishers")?;
    if publishers.is_empty() {
        text_element(writer, "p", &[], "Nothing found...")?;
    } else {
        // Selected ids are sent back as one comma-separated `publishers` value
        start(
            writer,
            "select",
            &[
                ("multiple", "multiple"),
                ("size", "8"),
                ("onchange", "syncPublishers(this)"),
            ],
        )?;
        for (id, name) in publishers.sorted_by_name() {
            let value = id.to_string();
            let mut attrs = vec![("value", value.as_str())];
            if filters.publisher_ids.contains(&id) {
                attrs.push(("selected", "selected"));
            }
            text_element(writer, "option", &attrs, name)?;
        }
        end(writer, "select")?;
    }

    let ids: Vec<String> = filters.publisher_ids.iter().map(|id| id.to_string()).collect();
    let ids = ids.join(",");
    void_element(
        writer,
        "input",
        &[("type", "hidden"), ("name", "publishers"), ("value", ids.as_str())],
    )?;
    start(writer, "p", &[])?;
    text_element(writer, "button", &[("type", "submit")], "Apply")?;
    end(writer, "p")?;
    end(writer, "form")?;

    start(writer, "script", &[])?;
    raw(writer, SYNC_PUBLISHERS)?;
    end(writer, "script")?;
    end(writer, "nav")
}

fn write_card<W: Write>(writer: &mut Writer<W>, card: &BookCard) -> RenderResult {
    start(writer, "div", &[("class", "card")])?;

    match &card.subtitle {
        Some(subtitle) => start(writer, "div", &[("title", subtitle.as_str())])?,
        None => start(writer, "div", &[])?,
    }
    if let Some(published) = &card.published {
        text_element(writer, "span", &[("class", "indicator")], published)?;
    }
    start(writer, "a", &[("href", card.href.as_str())])?;
    match &card.cover_url {
        Some(url) => void_element(writer, "img", &[("src", url.as_str()), ("alt", "book cover")])?,
        None => text_element(writer, "div", &[("class", "empty")], "No cover")?,
    }
    end(writer, "a")?;
    if let Some(edition) = &card.edition_label {
        text_element(writer, "span", &[("class", "indicator")], edition)?;
    }
    end(writer, "div")?;

    start(writer, "div", &[("class", "title")])?;
    text_element(writer, "a", &[("href", card.href.as_str())], &card.title)?;
    end(writer, "div")?;

    start(writer, "div", &[])?;
    if let Some(pages) = card.pages {
        text_element(writer, "span", &[("class", "badge")], &format!("{} pages", pages))?;
    }
    if let Some(size) = &card.file_size {
        text_element(writer, "span", &[("class", "badge")], size)?;
    }
    end(writer, "div")?;

    start(writer, "div", &[])?;
    for file_type in &card.file_types {
        text_element(writer, "span", &[("class", "badge outline")], file_type)?;
    }
    end(writer, "div")?;

    end(writer, "div")
}

fn write_pagination<W: Write>(writer: &mut Writer<W>, catalog: &CatalogState) -> RenderResult {
    let links = catalog.page_links(BOUNDARIES, SIBLINGS);
    if links.len() <= 1 {
        return Ok(());
    }

    start(writer, "div", &[("class", "pagination")])?;
    if catalog.has_previous() {
        let href = catalog.href(catalog.page - 1);
        start(writer, "a", &[("href", href.as_str()), ("rel", "prev")])?;
        raw(writer, "&lsaquo;")?;
        end(writer, "a")?;
    }
    for link in links {
        match link {
            PageLink::Page {
                number,
                href,
                current: true,
            } => {
                start(
                    writer,
                    "a",
                    &[
                        ("href", href.as_str()),
                        ("class", "current"),
                        ("aria-current", "page"),
                    ],
                )?;
                text(writer, &number.to_string())?;
                end(writer, "a")?;
            }
            PageLink::Page { number, href, .. } => {
                text_element(writer, "a", &[("href", href.as_str())], &number.to_string())?;
            }
            PageLink::Gap => {
                start(writer, "span", &[])?;
                raw(writer, "&hellip;")?;
                end(writer, "span")?;
            }
        }
    }
    if catalog.has_next() {
        let href = catalog.href(catalog.page + 1);
        start(writer, "a", &[("href", href.as_str()), ("rel", "next")])?;
        raw(writer, "&rsaquo;")?;
        end(writer, "a")?;
    }
    end(writer, "div")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::{LookupItem, ResponsePage, RouteParams};

    fn card(id: i64, title: &str) -> BookCard {
        BookCard {
            id,
            title: title.to_string(),
            subtitle: Some("A \"quoted\" subtitle".to_string()),
            pages: Some(228),
            edition_label: Some("2nd Edition".to_string()),
            published: Some("May 2022".to_string()),
            file_size: Some("52.9 Mb".to_string()),
            file_types: vec!["pdf".to_string()],
            cover_url: Some("http://api.test/v1/covers/oreilly/a.jpg".to_string()),
            href: format!("/book/{}", id),
        }
    }

    fn catalog(page: u32, total_pages: u32) -> CatalogState {
        let mut state = CatalogState::from_route(
            Some(&page.to_string()),
            &RouteParams {
                q: Some("rust".to_string()),
                sort: None,
                publishers: Some("2".to_string()),
            },
        );
        state.apply(&ResponsePage::<()> {
            page,
            size: 10,
            total_pages,
            total_elements: 0,
            content: Vec::new(),
        });
        state
    }

    #[test]
    fn test_cards_and_pagination() {
        let publishers: LookupTable = [
            LookupItem {
                id: 1,
                name: "Apress".to_string(),
            },
            LookupItem {
                id: 2,
                name: "Manning".to_string(),
            },
        ]
        .into_iter()
        .collect();
        let cards = vec![card(1, "Programming <Rust>")];
        let catalog = catalog(2, 3);

        let html = list_page(&ListPage {
            catalog: &catalog,
            cards: &cards,
            publishers: &publishers,
            notices: &[],
        })
        .unwrap();

        assert!(html.contains("Programming &lt;Rust&gt;"));
        assert!(html.contains("title=\"A &quot;quoted&quot; subtitle\""));
        assert!(html.contains("<span class=\"badge\">228 pages</span>"));
        assert!(html.contains("<option value=\"2\" selected=\"selected\">Manning</option>"));
        assert!(html.contains("<option value=\"1\">Apress</option>"));
        assert!(html.contains("<option value=\"updated_at,desc\" selected=\"selected\">"));
        assert!(html.contains("value=\"rust\""));
        assert!(html.contains("name=\"publishers\" value=\"2\""));
        assert!(html.contains("href=\"/books/1?q=rust&amp;publishers=2\" rel=\"prev\""));
        assert!(html.contains("aria-current=\"page\">2</a>"));
        assert!(html.contains("href=\"/books/3?q=rust&amp;publishers=2\" rel=\"next\""));
    }

    #[test]
    fn test_script_is_not_escaped() {
        let catalog = catalog(1, 1);
        let html = list_page(&ListPage {
            catalog: &catalog,
            cards: &[],
            publishers: &LookupTable::new(),
            notices: &[],
        })
        .unwrap();
        assert!(html.contains("map(o=>o.value).join(',')"));
    }

    #[test]
    fn test_empty_list() {
        let catalog = catalog(1, 0);
        let html = list_page(&ListPage {
            catalog: &catalog,
            cards: &[],
            publishers: &LookupTable::new(),
            notices: &[],
        })
        .unwrap();
        assert!(html.contains("Nothing Found"));
        assert!(html.contains("<p>Nothing found...</p>"));
        assert!(!html.contains("class=\"pagination\""));
    }
}
