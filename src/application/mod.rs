// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`session`]: The search session controller and its presentation snapshot
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer drives the session and renders its snapshot
//!
//! # Example
//!
//! ```ignore
//! use iced_image_search::application::session::SearchSession;
//!
//! let mut session = SearchSession::default();
//! session.set_pending_query("cats");
//! if let Some(ticket) = session.submit_search() {
//!     // hand the ticket's request to an `ImageSearch` adapter
//! }
//! ```

pub mod port;
pub mod session;
