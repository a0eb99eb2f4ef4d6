// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::gallery;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Copy feedback, long press and toast expiry
    /// Result of the save dialog and file write for a download.
    FileSaved(Result<Option<PathBuf>, Error>),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional JSON catalog replacing the bundled one.
    pub catalog: Option<PathBuf>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `AVATAR_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Where to write the diagnostics report when the window closes.
    pub diagnostics_out: Option<PathBuf>,
}
