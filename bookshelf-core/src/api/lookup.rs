//! Exhaustive fetch of paginated lookup endpoints

use super::query::FIRST_PAGE;
use crate::error::Result;
use crate::types::{LookupItem, LookupTable, ResponsePage};
use std::future::Future;

pub const PUBLISHER_PAGE_SIZE: u32 = 50;
pub const FILE_TYPE_PAGE_SIZE: u32 = 100;

/// Walk pages `1..=total_pages`, merging each into one table.
///
/// Stops after the page whose number reaches `total_pages`, on an empty page, or
/// on the first failed page (whose error is returned).
pub async fn collect_lookup<F, Fut>(page_size: u32, mut fetch: F) -> Result<LookupTable>
where
    F: FnMut(u32, u32) -> Fut,
    Fut: Future<Output = Result<ResponsePage<LookupItem>>>,
{
    let mut table = LookupTable::new();
    let mut page = FIRST_PAGE;

    loop {
        let response = fetch(page, page_size).await?;
        let done = page >= response.total_pages || response.is_empty();
        tracing::debug!(
            page,
            total_pages = response.total_pages,
            items = response.content.len(),
            "Fetched lookup page"
        );

        table.extend(response.content);
        if done {
            break;
        }
        page += 1;
    }

    Ok(table)
}
