// SPDX-License-Identifier: MPL-2.0
//! Search domain types.
//!
//! This module provides pure domain types for photo search:
//! - [`SearchQuery`]: Validated, non-empty search text
//! - [`PageNumber`] / [`TotalPages`]: 1-based pagination values
//! - [`Image`] / [`SearchResults`]: One page of results returned by the service
//! - [`RequestStatus`]: Phase of the most recent fetch attempt

mod newtypes;
mod types;

pub use newtypes::{PageNumber, SearchQuery, TotalPages, RESULTS_PER_PAGE};
pub use types::{Image, ImageId, RequestStatus, SearchResults};
