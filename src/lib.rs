// SPDX-License-Identifier: MPL-2.0
//! `avatar_gallery` is a desktop avatar gallery built with the Iced GUI framework.
//!
//! It shows a grid of avatars loaded from a bundled catalog. Each tile can copy
//! its image URL or download the image, and a preview overlay shows a larger
//! version. Localization uses Fluent, preferences live in a TOML file.

pub mod app;
pub mod catalog;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

pub use app::config;
