// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern: state
//! owns its data, `update` returns effects, `view` is a pure function.
//!
//! - [`gallery`] - Avatar grid, per-tile actions and the preview overlay
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering

pub mod design_tokens;
pub mod gallery;
pub mod icons;
pub mod notifications;
pub mod styles;
pub mod theming;
