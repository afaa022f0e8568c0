// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! - [`unsplash`]: Photo search over HTTP (implements [`ImageSearch`])
//!
//! [`ImageSearch`]: crate::application::port::ImageSearch

pub mod unsplash;

pub use unsplash::{credential_from_env, UnsplashClient};
