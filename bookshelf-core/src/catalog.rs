//! Listing state kept in the URL
//!
//! The list page is addressed as `/books/{page}?q=..&sort=..&publishers=1,2`.
//! [`CatalogState`] parses that route, turns it into a [`BookQuery`], adopts the
//! page numbers the server reports back, and renders links for the pagination
//! control. Changing any filter always starts over at the first page.

use crate::api::{BookQuery, FIRST_PAGE};
use crate::config::DEFAULT_PAGE_SIZE;
use crate::types::{ResponsePage, SortOrder};
use serde::{Deserialize, Serialize};

/// Search box, sort select and publisher multi-select
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub search_term: String,
    pub sort: SortOrder,
    pub publisher_ids: Vec<i64>,
}

/// Raw query parameters of a list route
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteParams {
    pub q: Option<String>,
    pub sort: Option<String>,
    /// Comma-separated publisher ids
    pub publishers: Option<String>,
}

/// One entry of the pagination control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageLink {
    Page { number: u32, href: String, current: bool },
    Gap,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogState {
    pub filters: SearchFilters,
    pub page: u32,
    pub page_size: u32,
    /// Last value reported by the server, 0 until the first response
    pub total_pages: u32,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            filters: SearchFilters::default(),
            page: FIRST_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            total_pages: 0,
        }
    }
}

impl CatalogState {
    /// Rebuild state from a `/books/{page}` route. Anything unparsable falls back
    /// to its default.
    pub fn from_route(page: Option<&str>, params: &RouteParams) -> Self {
        let page = page
            .and_then(|p| p.trim().parse::<u32>().ok())
            .unwrap_or(FIRST_PAGE)
            .max(FIRST_PAGE);

        let sort = params
            .sort
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        let publisher_ids = params
            .publishers
            .as_deref()
            .map(parse_id_list)
            .unwrap_or_default();

        Self {
            filters: SearchFilters {
                search_term: params.q.clone().unwrap_or_default(),
                sort,
                publisher_ids,
            },
            page,
            ..Self::default()
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Replace the filters and go back to the first page
    pub fn with_filters(mut self, filters: SearchFilters) -> Self {
        self.filters = filters;
        self.page = FIRST_PAGE;
        self
    }

    /// Move to `page`, clamped to the known page range
    pub fn go_to(&mut self, page: u32) {
        let last = self.total_pages.max(FIRST_PAGE);
        self.page = page.clamp(FIRST_PAGE, last);
    }

    /// Adopt the page number and page count the server reported
    pub fn apply<T>(&mut self, response: &ResponsePage<T>) {
        self.page = response.page.max(FIRST_PAGE);
        self.total_pages = response.total_pages;
    }

    pub fn to_query(&self) -> BookQuery {
        BookQuery::new()
            .page(self.page)
            .size(self.page_size)
            .sort(self.filters.sort)
            .search(self.filters.search_term.clone())
            .publishers(self.filters.publisher_ids.iter().copied())
    }

    /// Link to `page` carrying the current filters. Default filters are omitted.
    pub fn href(&self, page: u32) -> String {
        let mut params = Vec::new();
        if !self.filters.search_term.is_empty() {
            params.push(format!("q={}", urlencoding::encode(&self.filters.search_term)));
        }
        if self.filters.sort != SortOrder::default() {
            params.push(format!(
                "sort={}",
                urlencoding::encode(self.filters.sort.as_query())
            ));
        }
        if !self.filters.publisher_ids.is_empty() {
            let ids: Vec<String> = self
                .filters
                .publisher_ids
                .iter()
                .map(|id| id.to_string())
                .collect();
            params.push(format!("publishers={}", urlencoding::encode(&ids.join(","))));
        }

        if params.is_empty() {
            format!("/books/{}", page)
        } else {
            format!("/books/{}?{}", page, params.join("&"))
        }
    }

    /// Pagination control: `boundaries` pages at each end, `siblings` pages on
    /// either side of the current one, gaps in between
    pub fn page_links(&self, boundaries: u32, siblings: u32) -> Vec<PageLink> {
        let total = self.total_pages;
        if total == 0 {
            return Vec::new();
        }

        let current = self.page.clamp(FIRST_PAGE, total);
        let mut ranges = vec![(
            current.saturating_sub(siblings).max(FIRST_PAGE),
            current.saturating_add(siblings).min(total),
        )];
        if boundaries > 0 {
            ranges.push((FIRST_PAGE, boundaries.min(total)));
            ranges.push((total - boundaries.min(total) + 1, total));
        }
        ranges.sort_unstable();

        let mut links = Vec::new();
        // Last page emitted, 0 before the first
        let mut shown = 0u32;
        for (start, end) in ranges {
            if end <= shown {
                continue;
            }
            let start = start.max(shown + 1);
            if start > shown + 1 {
                links.push(PageLink::Gap);
            }
            for n in start..=end {
                links.push(PageLink::Page {
                    number: n,
                    href: self.href(n),
                    current: n == current,
                });
            }
            shown = end;
        }
        if shown < total {
            links.push(PageLink::Gap);
        }
        links
    }

    pub fn has_previous(&self) -> bool {
        self.page > FIRST_PAGE
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Parse `"1, 2,x,3"` into `[1, 2, 3]`, dropping anything that is not an id
fn parse_id_list(raw: &str) -> Vec<i64> {
    raw.split(',')
        .filter_map(|s| s.trim().parse::<i64>().ok())
        .collect()
}
