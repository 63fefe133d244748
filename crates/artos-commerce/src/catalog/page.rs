//! Paginated result pages.

use serde::{Deserialize, Serialize};

/// A bounded page of items plus pagination metadata.
///
/// Pages are 1-indexed; `current_page` and `total_pages` are at least 1
/// even for an empty catalog. A failed fetch is represented by
/// [`Page::empty`], structurally identical to a zero-product store --
/// callers cannot (and are not meant to) tell the two apart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page (1-indexed).
    pub current_page: u32,
    /// Total number of pages (at least 1).
    pub total_pages: u32,
    /// Total number of items across all pages.
    pub total_items: u64,
    /// Requested page size.
    pub items_per_page: u32,
}

impl<T> Page<T> {
    /// Create a page, clamping the page counters to their minimum of 1.
    pub fn new(
        items: Vec<T>,
        current_page: u32,
        total_pages: u32,
        total_items: u64,
        items_per_page: u32,
    ) -> Self {
        Self {
            items,
            current_page: current_page.max(1),
            total_pages: total_pages.max(1),
            total_items,
            items_per_page,
        }
    }

    /// The canonical fallback for a failed or empty fetch.
    pub fn empty(items_per_page: u32) -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            total_pages: 1,
            total_items: 0,
            items_per_page,
        }
    }

    /// Check if this page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether a later page exists.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Whether an earlier page exists.
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page_is_canonical_fallback() {
        let page: Page<i32> = Page::empty(9);
        assert!(page.is_empty());
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_items, 0);
        assert_eq!(page.items_per_page, 9);
        assert!(!page.has_next());
        assert!(!page.has_prev());
    }

    #[test]
    fn test_middle_page_navigation() {
        let page = Page::new(vec![1, 2, 3], 2, 5, 45, 10);
        assert!(page.has_next());
        assert!(page.has_prev());
        assert_eq!(page.len(), 3);
    }

    #[test]
    fn test_last_page_has_no_next() {
        let page = Page::new(vec![1], 5, 5, 41, 10);
        assert!(!page.has_next());
        assert!(page.has_prev());
    }

    #[test]
    fn test_page_counters_clamped_to_one() {
        let page: Page<i32> = Page::new(Vec::new(), 0, 0, 0, 10);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_page_deserializes_camel_case() {
        let json = r#"{
            "items": [],
            "currentPage": 2,
            "totalPages": 3,
            "totalItems": 25,
            "itemsPerPage": 9
        }"#;
        let page: Page<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.current_page, 2);
        assert_eq!(page.items_per_page, 9);
    }
}
