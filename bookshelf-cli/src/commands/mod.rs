//! CLI command implementations

mod download;
mod list;
mod lookups;
mod show;

pub use download::download;
pub use list::list;
pub use lookups::{file_types, publishers, sorts};
pub use show::show;

use bookshelf_core::{BookshelfError, Notice};

/// Turn a failed fetch into the error reported on exit. Service errors carry
/// the joined server messages under `title`.
fn fetch_failed(title: &str, err: BookshelfError) -> anyhow::Error {
    match Notice::from_error(title, &err) {
        Some(notice) => anyhow::anyhow!("{}: {}", notice.title, notice.message),
        None => anyhow::Error::new(err).context(title.to_string()),
    }
}
