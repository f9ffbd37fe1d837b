//! Book list and detail pages

use super::{html_page, PageResponse};
use crate::render::{self, ListPage};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
};
use bookshelf_core::{
    BookCard, BookDetailView, BookshelfError, CatalogState, LookupTable, Notice, RouteParams,
};

/// Query parameters of a list route; a query string that does not decode
/// (e.g. a repeated key) is treated as absent
fn route_params(query: Option<Query<RouteParams>>) -> RouteParams {
    query.map(|Query(params)| params).unwrap_or_default()
}

/// `/` and `/books`
pub async fn list_first_page(
    State(state): State<AppState>,
    query: Option<Query<RouteParams>>,
) -> PageResponse {
    let params = route_params(query);
    let catalog = CatalogState::from_route(None, &params).with_page_size(state.page_size);
    render_list(&state, catalog).await
}

/// `/books/{page}`
pub async fn list_page(
    State(state): State<AppState>,
    Path(page): Path<String>,
    query: Option<Query<RouteParams>>,
) -> PageResponse {
    if page.parse::<u32>().is_err() {
        return html_page(StatusCode::NOT_FOUND, render::not_found_page());
    }
    let params = route_params(query);

    let catalog = CatalogState::from_route(Some(&page), &params).with_page_size(state.page_size);
    render_list(&state, catalog).await
}

async fn render_list(state: &AppState, mut catalog: CatalogState) -> PageResponse {
    let mut notices = Vec::new();

    let file_types = lookup_or_notice(state.file_types().await, "File types fetch error", &mut notices);
    let publishers = lookup_or_notice(state.publishers().await, "Publishers fetch error", &mut notices);

    let books = match state.catalog.list_books(&catalog.to_query()).await {
        Ok(page) => {
            catalog.apply(&page);
            page.content
        }
        Err(e) => {
            notices.extend(Notice::from_error("Book list fetch error", &e));
            Vec::new()
        }
    };

    let cards: Vec<BookCard> = books
        .iter()
        .map(|book| BookCard::new(book, &file_types, |p, f| state.catalog.cover_url(p, f)))
        .collect();

    tracing::debug!(
        page = catalog.page,
        total_pages = catalog.total_pages,
        books = cards.len(),
        "Rendering book list"
    );

    let rendered = render::list_page(&ListPage {
        catalog: &catalog,
        cards: &cards,
        publishers: &publishers,
        notices: &notices,
    });
    html_page(StatusCode::OK, rendered)
}

fn lookup_or_notice(
    result: bookshelf_core::Result<LookupTable>,
    title: &str,
    notices: &mut Vec<Notice>,
) -> LookupTable {
    result.unwrap_or_else(|e| {
        notices.extend(Notice::from_error(title, &e));
        LookupTable::new()
    })
}

/// `/book/{id}`
pub async fn book_page(State(state): State<AppState>, Path(id): Path<String>) -> PageResponse {
    let id = match id.parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            tracing::error!("Can not fetch a book with id: {}", id);
            return html_page(StatusCode::NOT_FOUND, render::not_found_page());
        }
    };

    match state.catalog.get_book(id).await {
        Ok(book) => {
            let view = BookDetailView::new(
                &book,
                |p, f| state.catalog.cover_url(p, f),
                state.catalog.download_url(id),
            );
            html_page(StatusCode::OK, render::detail_page(Some(&view), &[]))
        }
        Err(e) => {
            let status = failure_status(&e);
            let notices: Vec<Notice> = Notice::from_error("Book fetch error", &e).into_iter().collect();
            html_page(status, render::detail_page(None, &notices))
        }
    }
}

/// Status for a page whose main fetch failed: the service's own status for API
/// errors, 502 for everything else
fn failure_status(err: &BookshelfError) -> StatusCode {
    match err {
        BookshelfError::Api { status, .. } => {
            StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        _ => StatusCode::BAD_GATEWAY,
    }
}
