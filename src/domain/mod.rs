// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It depends on nothing but `std` so it can be tested in isolation.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`search`]: Search types ([`SearchQuery`](search::SearchQuery),
//!   [`PageNumber`](search::PageNumber), [`Image`](search::Image),
//!   [`RequestStatus`](search::RequestStatus))

pub mod diagnostics;
pub mod search;
