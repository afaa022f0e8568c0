// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Search**: Remote endpoint and shortcut categories
//! - **Thumbnails**: Grid tile size and in-memory cache bounds
//! - **Diagnostics**: Event buffer size

// ==========================================================================
// Search Defaults
// ==========================================================================

/// Photo search endpoint queried when the config does not override it.
pub const DEFAULT_API_URL: &str = "https://api.unsplash.com/search/photos";

/// Category shortcuts shown under the search field.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["nature", "birds", "cats", "shoes"];

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Default edge length of a grid tile (in logical pixels).
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 200;

/// Minimum grid tile size.
pub const MIN_THUMBNAIL_SIZE: u32 = 80;

/// Maximum grid tile size.
pub const MAX_THUMBNAIL_SIZE: u32 = 400;

/// Default number of decoded thumbnails kept in memory.
/// Holds a handful of pages so paging back does not re-download.
pub const DEFAULT_THUMBNAIL_CACHE_ENTRIES: usize = 120;

/// Minimum thumbnail cache entries (one full page).
pub const MIN_THUMBNAIL_CACHE_ENTRIES: usize = 20;

/// Maximum thumbnail cache entries.
pub const MAX_THUMBNAIL_CACHE_ENTRIES: usize = 500;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events retained.
pub const DEFAULT_DIAGNOSTICS_CAPACITY: usize =
    crate::domain::diagnostics::buffer_capacity_bounds::DEFAULT;
