// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the gallery.
//!
//! The `App` struct wires together the gallery component, localization,
//! toasts and diagnostics, and translates gallery effects into side effects
//! like clipboard writes, HTTP fetches and file saves.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::catalog::Catalog;
use crate::diagnostics::{BufferCapacity, DiagnosticsCollector, ErrorEvent, ErrorType, WarningType};
use crate::i18n::fluent::I18n;
use crate::media;
use crate::ui::gallery;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: gallery::State,
    theme_mode: ThemeMode,
    /// Shared HTTP client; `None` if the TLS backend failed to initialize.
    http: Option<reqwest::Client>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
    /// Report destination given with `--diagnostics-out`.
    diagnostics_out: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("records", &self.gallery.catalog().len())
            .field("selected", &self.gallery.selected())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 420;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings.
///
/// Close requests are handled by the application so the diagnostics report
/// can be written before the window goes away.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed once and
    // any later call starts from defaults.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Toast for a settings file that could not be read.
#[must_use]
pub fn config_notification(key: &str) -> notifications::Notification {
    notifications::Notification::warning(key).with_warning_type(WarningType::ConfigurationIssue)
}

/// Toast for a catalog that could not be loaded as requested.
///
/// Stays until dismissed and is recorded as a catalog error.
#[must_use]
pub fn catalog_notification(key: &str) -> notifications::Notification {
    notifications::Notification::error(key).with_error_type(ErrorType::Catalog)
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            gallery: gallery::State::new(Catalog::default(), gallery::Settings::default()),
            theme_mode: ThemeMode::System,
            http: None,
            notifications: notifications::Manager::new(),
            diagnostics: DiagnosticsCollector::default(),
            diagnostics_out: None,
        }
    }
}

impl App {
    /// Loads configuration and the catalog, then starts fetching the hero
    /// image and the first batch of tiles.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);
        let (catalog, catalog_warning) = Catalog::load(flags.catalog.as_deref());

        let capacity = config
            .diagnostics
            .buffer_capacity
            .map(BufferCapacity::new)
            .unwrap_or_default();
        let diagnostics = DiagnosticsCollector::new(capacity);

        let mut app = App {
            i18n,
            gallery: gallery::State::new(catalog, gallery::Settings::from_config(&config.gallery)),
            theme_mode: config.general.theme_mode,
            diagnostics,
            diagnostics_out: flags.diagnostics_out,
            ..Self::default()
        };

        let handle = app.diagnostics.handle();
        app.gallery.set_diagnostics(handle.clone());
        app.notifications.set_diagnostics(handle);

        match media::build_client() {
            Ok(client) => app.http = Some(client),
            Err(error) => app
                .diagnostics
                .log_error(ErrorEvent::new(ErrorType::ImageFetch, error.to_string())),
        }

        if let Some(key) = config_warning {
            app.notifications.push(config_notification(&key));
        }
        if let Some(key) = catalog_warning {
            app.notifications.push(catalog_notification(&key));
        }

        let urls = app.gallery.initial_image_requests();
        let task = if urls.is_empty() {
            Task::none()
        } else {
            update::run_effect(gallery::Effect::FetchImages(urls), app.http.as_ref())
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.gallery.needs_tick(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.diagnostics.process_pending();

        let handle = self.diagnostics.handle();
        let mut ctx = update::UpdateContext {
            gallery: &mut self.gallery,
            notifications: &mut self.notifications,
            diagnostics: &handle,
            http: self.http.as_ref(),
        };

        match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                // Tick notification manager to handle auto-dismiss
                ctx.notifications.tick(now);
                update::handle_gallery_message(&mut ctx, gallery::Message::Tick(now))
            }
            Message::FileSaved(result) => update::handle_file_saved(&mut ctx, result),
            Message::WindowCloseRequested(id) => {
                self.export_diagnostics();
                window::close(id)
            }
        }
    }

    /// Writes the diagnostics report if `--diagnostics-out` was given.
    fn export_diagnostics(&mut self) {
        self.diagnostics.process_pending();
        let Some(path) = self.diagnostics_out.as_ref() else {
            return;
        };
        if let Err(error) = self.diagnostics.export_to_file(path) {
            eprintln!("Failed to write diagnostics report: {error}");
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AvatarRecord, Gender};
    use crate::diagnostics::{DiagnosticEventKind, UserAction};
    use std::time::{Duration, Instant};
    use tempfile::tempdir;

    fn app_with_two_records() -> App {
        let catalog = Catalog::new(vec![
            AvatarRecord::new("Jane Doe", "https://x/a.jpg", Gender::Female),
            AvatarRecord::new("Bo", "https://x/b.jpg", Gender::Male),
        ]);
        let mut app = App {
            gallery: gallery::State::new(catalog, gallery::Settings::default()),
            ..App::default()
        };
        let handle = app.diagnostics.handle();
        app.gallery.set_diagnostics(handle.clone());
        app.notifications.set_diagnostics(handle);
        app
    }

    #[test]
    fn default_window_allows_close_interception() {
        let settings = window_settings();
        assert!(!settings.exit_on_close_request);
        assert!(settings.min_size.is_some());
    }

    #[test]
    fn title_is_localized_window_title() {
        let app = App::default();
        assert_eq!(app.title(), app.i18n.tr("window-title"));
    }

    #[test]
    fn gallery_messages_are_forwarded() {
        let mut app = app_with_two_records();
        let _ = app.update(Message::Gallery(gallery::Message::OpenPreview(1)));
        assert_eq!(app.gallery.selected(), Some(1));

        let _ = app.update(Message::Gallery(gallery::Message::EscapePressed));
        assert_eq!(app.gallery.selected(), None);
    }

    #[test]
    fn user_actions_reach_the_collector() {
        let mut app = app_with_two_records();
        let _ = app.update(Message::Gallery(gallery::Message::OpenPreview(0)));
        // Pending events are drained at the start of the next update.
        let _ = app.update(Message::Tick(Instant::now()));

        assert!(app.diagnostics.iter().any(|event| matches!(
            &event.kind,
            DiagnosticEventKind::UserAction {
                action: UserAction::OpenPreview { index: 0 },
                ..
            }
        )));
    }

    #[test]
    fn window_size_requests_visible_tiles() {
        let mut app = app_with_two_records();
        assert_eq!(app.gallery.requested_count(), 0);

        let _ = app.update(Message::Gallery(gallery::Message::Resized(iced::Size::new(
            1024.0, 760.0,
        ))));
        assert_eq!(app.gallery.requested_count(), 2);
    }

    #[test]
    fn catalog_toast_is_a_persistent_catalog_error() {
        let toast = catalog_notification("notification-catalog-load-error");
        assert_eq!(toast.severity(), notifications::Severity::Error);
        assert_eq!(toast.error_type(), Some(ErrorType::Catalog));
        assert_eq!(
            config_notification("notification-config-load-error").warning_type(),
            Some(WarningType::ConfigurationIssue)
        );
    }

    #[test]
    fn tick_clears_copy_confirmation() {
        let mut app = app_with_two_records();
        let start = Instant::now();
        let _ = app.gallery.update_at(
            gallery::Message::ClipboardWritten {
                index: 0,
                result: Ok(()),
            },
            start,
        );
        assert!(app.gallery.is_copied(0));

        let _ = app.update(Message::Tick(start + Duration::from_millis(2000)));
        assert!(!app.gallery.is_copied(0));
    }

    #[test]
    fn close_request_exports_report() {
        let dir = tempdir().expect("temp dir");
        let out = dir.path().join("report.json");
        let mut app = app_with_two_records();
        app.diagnostics_out = Some(out.clone());

        let _ = app.update(Message::Gallery(gallery::Message::OpenPreview(1)));
        app.export_diagnostics();

        let content = std::fs::read_to_string(&out).expect("report written");
        assert!(content.contains("open_preview"));
    }

    #[test]
    fn subscription_builds_when_idle() {
        let app = App::default();
        let _ = app.subscription();
        assert!(!app.gallery.needs_tick());
    }
}
