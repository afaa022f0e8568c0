// SPDX-License-Identifier: MPL-2.0
//! Search newtypes.
//!
//! Type-safe wrappers that make an empty query or a page number of zero
//! unrepresentable.

use std::fmt;

/// Number of images requested per page. Fixed by the UI contract.
pub const RESULTS_PER_PAGE: u32 = 20;

// =============================================================================
// SearchQuery
// =============================================================================

/// Search text committed by the user or a category shortcut.
///
/// Always trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Parses raw input, returning `None` for empty or whitespace-only text.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Returns the query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// PageNumber
// =============================================================================

/// A 1-based result page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(u32);

impl PageNumber {
    /// The first page.
    pub const FIRST: Self = Self(1);

    /// Creates a page number, raising zero to the first page.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.max(1))
    }

    /// Returns the raw page number.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns true on the first page.
    #[must_use]
    pub fn is_first(self) -> bool {
        self.0 == 1
    }

    /// The page after this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// The page before this one, or `None` on the first page.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        if self.is_first() {
            None
        } else {
            Some(Self(self.0 - 1))
        }
    }

    /// Clamps the page so it never exceeds `max(total, 1)`.
    #[must_use]
    pub fn clamp_to(self, total: TotalPages) -> Self {
        Self(self.0.min(total.value().max(1)))
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// TotalPages
// =============================================================================

/// Page count reported by the remote service for the current query.
///
/// Zero is valid (no results) and only bounds the pagination controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TotalPages(u32);

impl TotalPages {
    /// Wraps a page count.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw count.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns true if a page exists after `page`.
    #[must_use]
    pub fn has_page_after(self, page: PageNumber) -> bool {
        page.value() < self.0
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_query_rejects_blank_input() {
        assert!(SearchQuery::parse("").is_none());
        assert!(SearchQuery::parse("   ").is_none());
        assert!(SearchQuery::parse("\t\n").is_none());
    }

    #[test]
    fn search_query_trims_surrounding_whitespace() {
        let query = SearchQuery::parse("  red fox ").expect("query should parse");
        assert_eq!(query.as_str(), "red fox");
        assert_eq!(query.to_string(), "red fox");
    }

    #[test]
    fn page_number_zero_becomes_first_page() {
        assert_eq!(PageNumber::new(0), PageNumber::FIRST);
        assert!(PageNumber::default().is_first());
    }

    #[test]
    fn page_number_previous_stops_at_first() {
        assert_eq!(PageNumber::FIRST.previous(), None);
        assert_eq!(PageNumber::new(3).previous(), Some(PageNumber::new(2)));
    }

    #[test]
    fn page_number_next_increments_by_one() {
        assert_eq!(PageNumber::new(4).next().value(), 5);
    }

    #[test]
    fn page_number_clamps_to_total_pages() {
        assert_eq!(PageNumber::new(7).clamp_to(TotalPages::new(3)).value(), 3);
        assert_eq!(PageNumber::new(2).clamp_to(TotalPages::new(0)).value(), 1);
        assert_eq!(PageNumber::new(2).clamp_to(TotalPages::new(9)).value(), 2);
    }

    #[test]
    fn total_pages_bounds_next_page() {
        let total = TotalPages::new(2);
        assert!(total.has_page_after(PageNumber::FIRST));
        assert!(!total.has_page_after(PageNumber::new(2)));
        assert!(!TotalPages::default().has_page_after(PageNumber::FIRST));
    }
}
