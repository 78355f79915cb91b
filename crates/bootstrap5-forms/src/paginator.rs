//! Pagination.
//!
//! Provides [`Paginator`] and [`Page`]. Pagination controls only need a
//! page's number and the page count, so [`Page`] serializes cleanly into a
//! template context.
//!
//! # Examples
//!
//! ```
//! use bootstrap5_forms::paginator::Paginator;
//!
//! let items: Vec<i32> = (1..=100).collect();
//! let paginator = Paginator::new(items, 10);
//! assert_eq!(paginator.num_pages(), 10);
//!
//! let page = paginator.page(1).unwrap();
//! assert_eq!(page.object_list.len(), 10);
//! assert!(page.has_next());
//! assert!(!page.has_previous());
//! ```

use std::ops::RangeInclusive;

use bootstrap5_core::error::{BootstrapError, BootstrapResult};
use serde::{Deserialize, Serialize};

/// Splits a collection of objects into pages.
#[derive(Debug, Clone)]
pub struct Paginator<T> {
    object_list: Vec<T>,
    per_page: usize,
    orphans: usize,
    allow_empty_first_page: bool,
}

impl<T: Clone> Paginator<T> {
    /// Creates a new `Paginator` with the given objects and page size.
    pub fn new(object_list: Vec<T>, per_page: usize) -> Self {
        Self {
            object_list,
            per_page: per_page.max(1),
            orphans: 0,
            allow_empty_first_page: true,
        }
    }

    /// Sets the number of orphans.
    ///
    /// A last page with no more than `orphans` items is folded into the
    /// previous page.
    #[must_use]
    pub const fn orphans(mut self, orphans: usize) -> Self {
        self.orphans = orphans;
        self
    }

    /// Sets whether the first page is allowed to be empty.
    #[must_use]
    pub const fn allow_empty_first_page(mut self, allow: bool) -> Self {
        self.allow_empty_first_page = allow;
        self
    }

    /// Returns the total number of objects.
    pub fn count(&self) -> usize {
        self.object_list.len()
    }

    /// Returns the total number of pages.
    pub fn num_pages(&self) -> usize {
        let count = self.count();
        if count == 0 {
            return usize::from(self.allow_empty_first_page);
        }
        let hits = count.saturating_sub(self.orphans).max(1);
        hits.div_ceil(self.per_page)
    }

    /// Returns the range of valid page numbers (1-indexed, inclusive).
    pub fn page_range(&self) -> RangeInclusive<usize> {
        1..=self.num_pages()
    }

    /// Returns the requested page (1-indexed).
    pub fn page(&self, number: usize) -> BootstrapResult<Page<T>> {
        if number == 0 {
            return Err(BootstrapError::InvalidPage(
                "That page number is less than 1".to_string(),
            ));
        }
        let num_pages = self.num_pages();
        if number > num_pages {
            return Err(BootstrapError::InvalidPage(
                "That page contains no results".to_string(),
            ));
        }
        let start = (number - 1) * self.per_page;
        let end = if number == num_pages {
            self.count()
        } else {
            (start + self.per_page).min(self.count())
        };
        Ok(Page {
            object_list: self.object_list[start..end].to_vec(),
            number,
            num_pages,
        })
    }

    /// Returns the requested page, clamping out-of-range numbers.
    pub fn get_page(&self, number: usize) -> Page<T> {
        let num_pages = self.num_pages();
        let target = number.clamp(1, num_pages.max(1));
        self.page(target).unwrap_or_else(|_| Page {
            object_list: Vec::new(),
            number: target,
            num_pages,
        })
    }
}

/// A single page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The objects on this page.
    #[serde(default)]
    pub object_list: Vec<T>,
    /// The 1-based page number.
    pub number: usize,
    /// The total number of pages.
    pub num_pages: usize,
}

impl<T> Page<T> {
    /// Creates a page without objects, for rendering controls only.
    pub const fn new(number: usize, num_pages: usize) -> Self {
        Self {
            object_list: Vec::new(),
            number,
            num_pages,
        }
    }

    /// Returns `true` if there is a next page.
    pub const fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    /// Returns `true` if there is a previous page.
    pub const fn has_previous(&self) -> bool {
        self.number > 1
    }

    /// The next page number.
    pub const fn next_page_number(&self) -> Option<usize> {
        if self.has_next() {
            Some(self.number + 1)
        } else {
            None
        }
    }

    /// The previous page number.
    pub const fn previous_page_number(&self) -> Option<usize> {
        if self.has_previous() {
            Some(self.number - 1)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_pages() {
        let p = Paginator::new((1..=4).collect::<Vec<_>>(), 2);
        assert_eq!(p.num_pages(), 2);
        assert_eq!(p.page_range(), 1..=2);
        let p = Paginator::new(Vec::<i32>::new(), 10);
        assert_eq!(p.num_pages(), 1);
        let p = Paginator::new(Vec::<i32>::new(), 10).allow_empty_first_page(false);
        assert_eq!(p.num_pages(), 0);
    }

    #[test]
    fn test_orphans() {
        let p = Paginator::new((1..=11).collect::<Vec<_>>(), 5).orphans(1);
        assert_eq!(p.num_pages(), 2);
        assert_eq!(p.page(2).unwrap().object_list.len(), 6);
    }

    #[test]
    fn test_page_errors() {
        let p = Paginator::new(vec![1, 2, 3], 2);
        assert!(p.page(0).is_err());
        assert!(p.page(3).is_err());
        assert_eq!(p.page(2).unwrap().object_list, vec![3]);
    }

    #[test]
    fn test_get_page_clamps() {
        let p = Paginator::new(vec![1, 2, 3], 2);
        assert_eq!(p.get_page(0).number, 1);
        assert_eq!(p.get_page(9).number, 2);
    }

    #[test]
    fn test_page_navigation() {
        let page: Page<()> = Page::new(2, 3);
        assert_eq!(page.next_page_number(), Some(3));
        assert_eq!(page.previous_page_number(), Some(1));
        let last: Page<()> = Page::new(3, 3);
        assert_eq!(last.next_page_number(), None);
    }

    #[test]
    fn test_page_deserialize_without_objects() {
        let page: Page<serde_json::Value> =
            serde_json::from_value(serde_json::json!({"number": 2, "num_pages": 5})).unwrap();
        assert_eq!(page.number, 2);
        assert!(page.object_list.is_empty());
    }
}
