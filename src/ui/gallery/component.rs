// SPDX-License-Identifier: MPL-2.0
//! Gallery component encapsulating state and update logic.
//!
//! The component never performs I/O itself. Clipboard writes, downloads and
//! image fetches leave as [`Effect`]s; the app shell runs them and reports
//! back through [`Message`]s.

use super::copy_feedback::CopyFeedback;
use super::grid;
use super::policy::{ClickTarget, DismissPolicy, OpenTrigger};
use super::press::PressState;
use crate::catalog::{AvatarRecord, Catalog};
use crate::config::{
    clamp_tile_size, GalleryConfig, DEFAULT_INITIAL_BATCH, DEFAULT_TILE_SIZE, LAZY_BATCH_SIZE,
};
use crate::diagnostics::{
    DiagnosticsHandle, ErrorEvent, ErrorType, UserAction, WarningEvent, WarningType,
};
use crate::error::{Error, FetchError};
use crate::media::DownloadedImage;
use iced::widget::image;
use iced::Size;
use std::collections::HashMap;
use std::time::Instant;

/// Banner image shown above the grid.
pub const HERO_IMAGE_URL: &str = "https://tabler.io/img/avatars/hero.png";

/// Load state of one image URL.
#[derive(Debug, Clone)]
pub enum ImageState {
    Loading,
    Loaded(image::Handle),
    Failed,
}

/// Part of the scrollable page currently on screen, in logical pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VisibleArea {
    /// Distance scrolled from the top of the page.
    pub offset_y: f32,
    pub width: f32,
    pub height: f32,
}

impl VisibleArea {
    /// Pixel distance from the top of the page to the bottom of the screen.
    fn bottom(&self) -> f32 {
        let offset = if self.offset_y.is_finite() {
            self.offset_y.max(0.0)
        } else {
            0.0
        };
        offset + self.height
    }
}

/// Behavior switches resolved from `[gallery]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub dismiss_policy: DismissPolicy,
    pub open_trigger: OpenTrigger,
    pub lazy_loading: bool,
    pub initial_batch: usize,
    pub tile_size: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dismiss_policy: DismissPolicy::default(),
            open_trigger: OpenTrigger::default(),
            lazy_loading: true,
            initial_batch: DEFAULT_INITIAL_BATCH,
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn from_config(config: &GalleryConfig) -> Self {
        let defaults = Self::default();
        Self {
            dismiss_policy: config.dismiss_policy.unwrap_or(defaults.dismiss_policy),
            open_trigger: config.open_trigger.unwrap_or(defaults.open_trigger),
            lazy_loading: config.lazy_loading.unwrap_or(defaults.lazy_loading),
            initial_batch: config
                .initial_batch
                .unwrap_or(defaults.initial_batch)
                .max(1),
            tile_size: clamp_tile_size(config.tile_size.unwrap_or(defaults.tile_size)),
        }
    }
}

/// Messages handled by the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    /// Copy button of a tile (or of the preview) was pressed.
    CopyUrl(usize),
    /// The shell finished the clipboard write for `index`.
    ClipboardWritten {
        index: usize,
        result: Result<(), Error>,
    },
    /// Download button of a tile (or of the preview) was pressed.
    Download(usize),
    /// The shell finished fetching bytes for a download.
    DownloadFetched {
        index: usize,
        file_name: String,
        result: Result<Vec<u8>, FetchError>,
    },
    OpenPreview(usize),
    ClosePreview,
    /// A click landed inside the open preview.
    PreviewClicked(ClickTarget),
    /// Pointer went down on a tile image (long-press mode).
    TilePressed(usize),
    /// Pointer went up on a tile image (long-press mode).
    TileReleased(usize),
    /// Pointer left a tile image (long-press mode).
    TileExited(usize),
    /// The shell finished fetching a tile or hero image.
    ImageFetched {
        url: String,
        result: Result<Vec<u8>, FetchError>,
    },
    /// The page was scrolled; carries what is now on screen.
    Scrolled(VisibleArea),
    /// The window was opened or resized to `Size`.
    Resized(Size),
    Tick(Instant),
    EscapePressed,
}

/// Side effects requested by the gallery.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Write `url` to the system clipboard, then report `ClipboardWritten`.
    CopyToClipboard { index: usize, url: String },
    /// Fetch `url`, then report `DownloadFetched`.
    Download {
        index: usize,
        url: String,
        file_name: String,
    },
    /// Ask the user where to save the fetched bytes.
    SaveFile(DownloadedImage),
    /// Fetch each URL, then report `ImageFetched` per URL.
    FetchImages(Vec<String>),
}

/// Complete gallery state.
pub struct State {
    catalog: Catalog,
    settings: Settings,
    copy_feedback: CopyFeedback,
    selected: Option<usize>,
    press: PressState,
    images: HashMap<String, ImageState>,
    /// Number of leading records whose images have been requested.
    requested: usize,
    /// Last known visible area, once the window has reported a size.
    visible: Option<VisibleArea>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl State {
    #[must_use]
    pub fn new(catalog: Catalog, settings: Settings) -> Self {
        Self {
            catalog,
            settings,
            copy_feedback: CopyFeedback::default(),
            selected: None,
            press: PressState::default(),
            images: HashMap::new(),
            requested: 0,
            visible: None,
            diagnostics: None,
        }
    }

    /// Sets the handle used to report actions and failures.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Index of the record shown in the preview, if open.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn selected_record(&self) -> Option<&AvatarRecord> {
        self.selected.and_then(|index| self.catalog.get(index))
    }

    /// Index of the tile currently showing copy confirmation.
    #[must_use]
    pub fn confirmed_index(&self) -> Option<usize> {
        self.copy_feedback.confirmed_index()
    }

    #[must_use]
    pub fn is_copied(&self, index: usize) -> bool {
        self.copy_feedback.is_confirmed(index)
    }

    /// Catalog index the preview's copy control refers to: the first record
    /// sharing the selected record's URL.
    #[must_use]
    pub fn preview_copy_index(&self) -> Option<usize> {
        let record = self.selected_record()?;
        self.catalog.position_by_url(&record.url)
    }

    #[must_use]
    pub fn pressed_index(&self) -> Option<usize> {
        self.press.pressed_index()
    }

    #[must_use]
    pub fn image(&self, url: &str) -> Option<&ImageState> {
        self.images.get(url)
    }

    /// Number of leading records whose images were requested so far.
    #[must_use]
    pub fn requested_count(&self) -> usize {
        self.requested
    }

    /// Returns whether a timer is pending and the tick must keep running.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.copy_feedback.is_pending() || self.press.is_pressing()
    }

    /// Marks the hero image and the first batch of tiles as loading.
    ///
    /// Returns the URLs to fetch; duplicates are listed once.
    pub fn initial_image_requests(&mut self) -> Vec<String> {
        let mut urls = Vec::new();
        if self.mark_loading(HERO_IMAGE_URL) {
            urls.push(HERO_IMAGE_URL.to_string());
        }

        let first_batch = if self.settings.lazy_loading {
            self.settings.initial_batch
        } else {
            self.catalog.len()
        };
        urls.extend(self.request_up_to(first_batch));
        urls
    }

    pub fn update(&mut self, message: Message) -> Effect {
        self.update_at(message, Instant::now())
    }

    /// Applies `message` as if it happened at `now`.
    pub fn update_at(&mut self, message: Message, now: Instant) -> Effect {
        match message {
            Message::CopyUrl(index) => {
                let Some(record) = self.catalog.get(index) else {
                    return Effect::None;
                };
                let url = record.url.clone();
                self.log_action(UserAction::CopyUrl { index });
                Effect::CopyToClipboard { index, url }
            }
            Message::ClipboardWritten { index, result } => {
                match result {
                    Ok(()) => self.copy_feedback.confirm(index, now),
                    Err(error) => {
                        self.log_error(ErrorType::ClipboardWrite, error.to_string());
                    }
                }
                Effect::None
            }
            Message::Download(index) => {
                let Some(record) = self.catalog.get(index) else {
                    return Effect::None;
                };
                let file_name = record.download_file_name();
                let url = record.url.clone();
                self.log_action_with_details(UserAction::DownloadImage { index }, file_name.clone());
                Effect::Download {
                    index,
                    url,
                    file_name,
                }
            }
            Message::DownloadFetched {
                index,
                file_name,
                result,
            } => match result {
                Ok(bytes) => Effect::SaveFile(DownloadedImage { file_name, bytes }),
                Err(error) => {
                    self.log_error(
                        ErrorType::ImageFetch,
                        format!("download of record {index} failed: {error}"),
                    );
                    Effect::None
                }
            },
            Message::OpenPreview(index) => {
                self.open_preview(index);
                Effect::None
            }
            Message::ClosePreview | Message::EscapePressed => {
                self.close_preview();
                Effect::None
            }
            Message::PreviewClicked(target) => {
                if self.settings.dismiss_policy.dismisses(target) {
                    self.close_preview();
                }
                Effect::None
            }
            Message::TilePressed(index) => {
                if self.settings.open_trigger == OpenTrigger::LongPress
                    && self.selected.is_none()
                    && index < self.catalog.len()
                {
                    self.press.begin(index, now);
                }
                Effect::None
            }
            Message::TileReleased(index) | Message::TileExited(index) => {
                if let Some(index) = self.press.release(index, now) {
                    self.open_preview(index);
                }
                Effect::None
            }
            Message::ImageFetched { url, result } => {
                let state = match result {
                    Ok(bytes) => ImageState::Loaded(image::Handle::from_bytes(bytes)),
                    Err(error) => {
                        self.log_warning(
                            WarningType::ImageUnavailable,
                            format!("{url}: {error}"),
                        );
                        ImageState::Failed
                    }
                };
                self.images.insert(url, state);
                Effect::None
            }
            Message::Scrolled(area) => {
                self.visible = Some(area);
                self.request_visible()
            }
            Message::Resized(size) => {
                let offset_y = self.visible.map_or(0.0, |area| area.offset_y);
                self.visible = Some(VisibleArea {
                    offset_y,
                    width: size.width,
                    height: size.height,
                });
                self.request_visible()
            }
            Message::Tick(now) => {
                self.copy_feedback.tick(now);
                if let Some(index) = self.press.poll(now) {
                    self.open_preview(index);
                }
                Effect::None
            }
        }
    }

    fn open_preview(&mut self, index: usize) {
        if index >= self.catalog.len() {
            return;
        }
        self.press.reset();
        self.selected = Some(index);
        self.log_action(UserAction::OpenPreview { index });
    }

    fn close_preview(&mut self) {
        if self.selected.take().is_some() {
            self.log_action(UserAction::ClosePreview);
        }
    }

    /// Requests every tile up to the last visible one plus a lookahead batch.
    fn request_visible(&mut self) -> Effect {
        if !self.settings.lazy_loading || self.requested >= self.catalog.len() {
            return Effect::None;
        }
        let Some(area) = self.visible else {
            return Effect::None;
        };
        let tile_size = self.settings.tile_size;
        let columns = grid::columns_for_page(area.width, tile_size);
        let end = grid::tiles_above(area.bottom(), columns, tile_size).saturating_add(LAZY_BATCH_SIZE);

        let urls = self.request_up_to(end);
        if urls.is_empty() {
            Effect::None
        } else {
            Effect::FetchImages(urls)
        }
    }

    /// Extends the requested range to `end` records and returns URLs not
    /// fetched before.
    fn request_up_to(&mut self, end: usize) -> Vec<String> {
        let end = end.min(self.catalog.len());
        let start = self.requested;
        self.requested = self.requested.max(end);

        let urls: Vec<String> = self.catalog.records()[start.min(end)..end]
            .iter()
            .map(|record| record.url.clone())
            .collect();

        urls.into_iter()
            .filter(|url| self.mark_loading(url))
            .collect()
    }

    /// Returns `false` if `url` is already known.
    fn mark_loading(&mut self, url: &str) -> bool {
        if self.images.contains_key(url) {
            return false;
        }
        self.images.insert(url.to_string(), ImageState::Loading);
        true
    }

    fn log_action(&self, action: UserAction) {
        if let Some(handle) = &self.diagnostics {
            handle.log_action(action);
        }
    }

    fn log_action_with_details(&self, action: UserAction, details: String) {
        if let Some(handle) = &self.diagnostics {
            handle.log_action_with_details(action, Some(details));
        }
    }

    fn log_warning(&self, warning_type: WarningType, message: String) {
        if let Some(handle) = &self.diagnostics {
            handle.log_warning(WarningEvent::new(warning_type, message));
        }
    }

    fn log_error(&self, error_type: ErrorType, message: String) {
        if let Some(handle) = &self.diagnostics {
            handle.log_error(ErrorEvent::new(error_type, message));
        }
    }
}
