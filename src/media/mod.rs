// SPDX-License-Identifier: MPL-2.0
//! Image media handling for the results grid.

pub mod thumbnail_cache;

pub use thumbnail_cache::{ThumbnailCache, ThumbnailStats};
