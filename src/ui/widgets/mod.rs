// SPDX-License-Identifier: MPL-2.0
//! Custom Iced widgets.

pub mod animated_spinner;

pub use animated_spinner::AnimatedSpinner;
