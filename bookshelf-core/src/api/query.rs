//! Query-string construction for `/v1/books`

use crate::config::DEFAULT_PAGE_SIZE;
use crate::types::SortOrder;

/// Pages are numbered from 1
pub const FIRST_PAGE: u32 = 1;

/// Parameters of a book listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookQuery {
    pub page: u32,
    pub size: u32,
    pub sort: SortOrder,
    pub search_term: String,
    pub publisher_ids: Vec<i64>,
}

impl Default for BookQuery {
    fn default() -> Self {
        Self {
            page: FIRST_PAGE,
            size: DEFAULT_PAGE_SIZE,
            sort: SortOrder::default(),
            search_term: String::new(),
            publisher_ids: Vec::new(),
        }
    }
}

impl BookQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page 0 is treated as the first page
    pub fn page(mut self, page: u32) -> Self {
        self.page = page.max(FIRST_PAGE);
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = size.max(1);
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn publishers(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.publisher_ids = ids.into_iter().collect();
        self
    }

    /// Query pairs in wire order: `page`, `size`, `sort`, `query`, then one
    /// `publisher_ids` pair per selected publisher
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
            ("sort", self.sort.as_query().to_string()),
            ("query", self.search_term.clone()),
        ];
        pairs.extend(
            self.publisher_ids
                .iter()
                .map(|id| ("publisher_ids", id.to_string())),
        );
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pairs() {
        let pairs = BookQuery::new().size(1).to_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page", "1".to_string()),
                ("size", "1".to_string()),
                ("sort", "updated_at,desc".to_string()),
                ("query", String::new()),
            ]
        );
    }

    #[test]
    fn test_page_zero_is_first_page() {
        assert_eq!(BookQuery::new().page(0).page, FIRST_PAGE);
        assert_eq!(BookQuery::new().size(0).size, 1);
    }

    #[test]
    fn test_publishers_are_repeated() {
        let pairs = BookQuery::new().publishers([4, 9]).to_pairs();
        let publishers: Vec<&str> = pairs
            .iter()
            .filter(|(k, _)| *k == "publisher_ids")
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(publishers, vec!["4", "9"]);
    }
}
