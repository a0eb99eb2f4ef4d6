// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Locale resolution from `--lang`, `settings.toml`, then the OS locale
//! - Embedded `.ftl` files, extended by an optional `--i18n-dir`
//! - Fallback to `en-US` when a key is missing in the active locale

pub mod fluent;
