// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Elm-style "state down, messages up": components render from borrowed
//! state and emit messages for the application root to handle.
//!
//! - [`search`] - The search screen and its parts
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod search;
pub mod styles;
pub mod theming;
pub mod widgets;
