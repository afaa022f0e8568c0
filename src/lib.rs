// SPDX-License-Identifier: MPL-2.0
//! `iced_image_search` is a small photo search client built with the Iced GUI
//! framework.
//!
//! It queries the Unsplash search API, shows one page of thumbnails at a
//! time, and offers category shortcuts and previous/next pagination. The
//! search flow itself lives in [`application::session`] and has no UI or
//! network dependency, so it can be driven directly from tests.

#![doc(html_root_url = "https://docs.rs/iced_image_search/0.1.0")]

pub mod app;
pub mod application;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;

pub use app::config;
