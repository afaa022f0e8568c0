// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`search`]: Remote photo search and thumbnail download
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so adapters can be shared behind an `Arc`
//! - Methods return boxed futures, keeping the traits dyn-compatible
//! - Callers wrap the futures in Iced `Task`s

pub mod search;

pub use search::{ApiCredential, BoxFuture, ImageSearch, SearchError, SearchRequest};
