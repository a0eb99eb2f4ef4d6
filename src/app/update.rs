// SPDX-License-Identifier: MPL-2.0
//! Update logic and side-effect execution for the application.
//!
//! The gallery never performs I/O itself. It returns an [`Effect`], and this
//! module turns each effect into an asynchronous [`Task`] whose result comes
//! back as a gallery message.

use super::Message;
use crate::config::MAX_IMAGE_BYTES;
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, ErrorType};
use crate::error::{FetchError, Result};
use crate::media::{self, DownloadedImage};
use crate::ui::gallery::{self, Effect};
use crate::ui::notifications::{self, Notification};
use iced::Task;
use std::path::{Path, PathBuf};

/// Mutable application state needed while handling a message.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut gallery::State,
    pub notifications: &'a mut notifications::Manager,
    pub diagnostics: &'a DiagnosticsHandle,
    pub http: Option<&'a reqwest::Client>,
}

/// Forwards a message to the gallery and runs the effect it returns.
pub fn handle_gallery_message(ctx: &mut UpdateContext<'_>, message: gallery::Message) -> Task<Message> {
    let effect = ctx.gallery.update(message);
    run_effect(effect, ctx.http)
}

/// Handles the outcome of the save dialog.
pub fn handle_file_saved(
    ctx: &mut UpdateContext<'_>,
    result: Result<Option<PathBuf>>,
) -> Task<Message> {
    match result {
        Ok(Some(path)) => {
            ctx.notifications.push(
                Notification::success("notification-download-saved")
                    .with_arg("file", display_file_name(&path)),
            );
        }
        // Cancelled by the user
        Ok(None) => {}
        Err(error) => {
            ctx.diagnostics.log_error(ErrorEvent::new(
                ErrorType::FileSave,
                error.to_string(),
            ));
        }
    }
    Task::none()
}

/// Converts a gallery effect into the task that performs it.
pub fn run_effect(effect: Effect, http: Option<&reqwest::Client>) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::CopyToClipboard { index, url } => Task::perform(
            async move { write_clipboard(&url) },
            move |result| Message::Gallery(gallery::Message::ClipboardWritten { index, result }),
        ),
        Effect::Download {
            index,
            url,
            file_name,
        } => {
            let client = http.cloned();
            Task::perform(
                async move { fetch(client, url).await },
                move |result| {
                    Message::Gallery(gallery::Message::DownloadFetched {
                        index,
                        file_name,
                        result,
                    })
                },
            )
        }
        Effect::SaveFile(image) => Task::perform(save(image), Message::FileSaved),
        Effect::FetchImages(urls) => Task::batch(urls.into_iter().map(|url| {
            let client = http.cloned();
            let reported = url.clone();
            Task::perform(async move { fetch(client, url).await }, move |result| {
                Message::Gallery(gallery::Message::ImageFetched {
                    url: reported,
                    result,
                })
            })
        })),
    }
}

/// Writes `text` to the system clipboard as plain text.
fn write_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

async fn fetch(client: Option<reqwest::Client>, url: String) -> std::result::Result<Vec<u8>, FetchError> {
    let Some(client) = client else {
        return Err(FetchError::Request("HTTP client unavailable".to_string()));
    };
    media::fetch_image(&client, &url, MAX_IMAGE_BYTES).await
}

async fn save(image: DownloadedImage) -> Result<Option<PathBuf>> {
    media::save_with_dialog(image).await
}

fn display_file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
