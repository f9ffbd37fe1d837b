//! Data transfer types mirroring the library service's JSON shapes

mod book;
mod lookup;
mod page;
mod sort;

pub use book::{BookDetail, BookSummary};
pub use lookup::{FileType, LookupItem, LookupTable, Publisher};
pub use page::{ApiErrors, DataEnvelope, FieldError, ResponsePage};
pub use sort::{ParseSortOrderError, SortOrder};
