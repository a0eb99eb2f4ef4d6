// SPDX-License-Identifier: MPL-2.0
//! End-to-end gallery interactions driven through the public component API.

use avatar_gallery::catalog::{AvatarRecord, Catalog, Gender};
use avatar_gallery::diagnostics::{DiagnosticEventKind, DiagnosticsCollector, ErrorType};
use avatar_gallery::error::{Error, FetchError};
use avatar_gallery::media::DownloadedImage;
use avatar_gallery::ui::gallery::{
    ClickTarget, DismissPolicy, Effect, ImageState, Message, OpenTrigger, Settings, State,
    VisibleArea, HERO_IMAGE_URL,
};
use std::time::{Duration, Instant};

fn jane_and_bo() -> Catalog {
    Catalog::new(vec![
        AvatarRecord::new("Jane Doe", "https://x/a.jpg", Gender::Female),
        AvatarRecord::new("Bo", "https://x/b.jpg", Gender::Male),
    ])
}

fn settings(dismiss_policy: DismissPolicy, open_trigger: OpenTrigger) -> Settings {
    Settings {
        dismiss_policy,
        open_trigger,
        ..Settings::default()
    }
}

#[test]
fn copy_confirms_then_clears_and_download_names_file() {
    let mut state = State::new(jane_and_bo(), Settings::default());
    let t0 = Instant::now();

    let effect = state.update_at(Message::CopyUrl(0), t0);
    assert_eq!(
        effect,
        Effect::CopyToClipboard {
            index: 0,
            url: "https://x/a.jpg".into()
        }
    );
    // Nothing is confirmed until the clipboard write succeeds.
    assert_eq!(state.confirmed_index(), None);

    let _ = state.update_at(
        Message::ClipboardWritten {
            index: 0,
            result: Ok(()),
        },
        t0,
    );
    assert_eq!(state.confirmed_index(), Some(0));
    assert!(state.needs_tick());

    let _ = state.update_at(Message::Tick(t0 + Duration::from_millis(1999)), t0);
    assert_eq!(state.confirmed_index(), Some(0));
    let _ = state.update_at(Message::Tick(t0 + Duration::from_millis(2000)), t0);
    assert_eq!(state.confirmed_index(), None);

    let effect = state.update(Message::Download(1));
    assert_eq!(
        effect,
        Effect::Download {
            index: 1,
            url: "https://x/b.jpg".into(),
            file_name: "bo.png".into(),
        }
    );

    let effect = state.update(Message::DownloadFetched {
        index: 1,
        file_name: "bo.png".into(),
        result: Ok(vec![0x89, 0x50]),
    });
    assert_eq!(
        effect,
        Effect::SaveFile(DownloadedImage {
            file_name: "bo.png".into(),
            bytes: vec![0x89, 0x50],
        })
    );
}

#[test]
fn newer_copy_replaces_pending_confirmation() {
    let mut state = State::new(jane_and_bo(), Settings::default());
    let t0 = Instant::now();
    let written = |index| Message::ClipboardWritten {
        index,
        result: Ok(()),
    };

    let _ = state.update_at(written(0), t0);
    let _ = state.update_at(written(1), t0 + Duration::from_millis(1500));
    assert!(!state.is_copied(0));
    assert!(state.is_copied(1));

    // The first copy's deadline no longer applies.
    let _ = state.update_at(Message::Tick(t0 + Duration::from_millis(2100)), t0);
    assert!(state.is_copied(1));
    let _ = state.update_at(Message::Tick(t0 + Duration::from_millis(3500)), t0);
    assert_eq!(state.confirmed_index(), None);
}

#[test]
fn failed_clipboard_and_fetch_are_logged_only() {
    let mut collector = DiagnosticsCollector::default();
    let mut state = State::new(jane_and_bo(), Settings::default());
    state.set_diagnostics(collector.handle());

    let _ = state.update(Message::ClipboardWritten {
        index: 0,
        result: Err(Error::Clipboard("no display".into())),
    });
    let effect = state.update(Message::DownloadFetched {
        index: 1,
        file_name: "bo.png".into(),
        result: Err(FetchError::Status(404)),
    });

    assert_eq!(effect, Effect::None);
    assert_eq!(state.confirmed_index(), None);

    collector.process_pending();
    let errors: Vec<ErrorType> = collector
        .iter()
        .filter_map(|event| match &event.kind {
            DiagnosticEventKind::Error { event } => Some(event.error_type),
            _ => None,
        })
        .collect();
    assert_eq!(errors, vec![ErrorType::ClipboardWrite, ErrorType::ImageFetch]);
}

#[test]
fn backdrop_only_keeps_preview_open_on_content_click() {
    let mut state = State::new(
        jane_and_bo(),
        settings(DismissPolicy::BackdropOnly, OpenTrigger::Click),
    );

    let _ = state.update(Message::OpenPreview(1));
    assert_eq!(state.selected_record().map(|r| r.name.as_str()), Some("Bo"));

    let _ = state.update(Message::PreviewClicked(ClickTarget::Content));
    assert_eq!(state.selected(), Some(1));

    let _ = state.update(Message::PreviewClicked(ClickTarget::Backdrop));
    assert_eq!(state.selected(), None);
}

#[test]
fn any_click_closes_preview_from_content() {
    let mut state = State::new(
        jane_and_bo(),
        settings(DismissPolicy::AnyClick, OpenTrigger::Click),
    );

    let _ = state.update(Message::OpenPreview(0));
    let _ = state.update(Message::PreviewClicked(ClickTarget::Content));
    assert_eq!(state.selected(), None);
}

#[test]
fn escape_and_close_button_always_close() {
    let mut state = State::new(jane_and_bo(), Settings::default());

    let _ = state.update(Message::OpenPreview(0));
    let _ = state.update(Message::EscapePressed);
    assert_eq!(state.selected(), None);

    let _ = state.update(Message::OpenPreview(0));
    let _ = state.update(Message::ClosePreview);
    assert_eq!(state.selected(), None);
}

#[test]
fn long_press_opens_preview_at_threshold() {
    let mut state = State::new(
        jane_and_bo(),
        settings(DismissPolicy::BackdropOnly, OpenTrigger::LongPress),
    );
    let t0 = Instant::now();

    let _ = state.update_at(Message::TilePressed(1), t0);
    assert_eq!(state.pressed_index(), Some(1));

    let _ = state.update_at(Message::Tick(t0 + Duration::from_millis(299)), t0);
    assert_eq!(state.selected(), None);

    let _ = state.update_at(Message::Tick(t0 + Duration::from_millis(300)), t0);
    assert_eq!(state.selected(), Some(1));
    assert_eq!(state.pressed_index(), None);
}

#[test]
fn hold_released_between_ticks_still_opens() {
    let mut state = State::new(
        jane_and_bo(),
        settings(DismissPolicy::BackdropOnly, OpenTrigger::LongPress),
    );
    let t0 = Instant::now();

    let _ = state.update_at(Message::TilePressed(0), t0);
    let _ = state.update_at(Message::Tick(t0 + Duration::from_millis(250)), t0);
    let _ = state.update_at(Message::TileReleased(0), t0 + Duration::from_millis(340));
    let _ = state.update_at(Message::Tick(t0 + Duration::from_millis(350)), t0);

    assert_eq!(state.selected(), Some(0));
}

#[test]
fn scrollbar_jump_loads_tiles_on_screen() {
    let records = (0..400)
        .map(|i| {
            AvatarRecord::new(
                format!("Person {i}"),
                format!("https://x/{i}.jpg"),
                Gender::Female,
            )
        })
        .collect();
    let mut state = State::new(Catalog::new(records), Settings::default());
    let _ = state.initial_image_requests();
    assert!(state.image("https://x/200.jpg").is_none());

    // Default tiles are 180px; 50 rows of four sit above record 200.
    let _ = state.update(Message::Scrolled(VisibleArea {
        offset_y: 50.0 * 252.0,
        width: 1024.0,
        height: 760.0,
    }));

    assert!(matches!(state.image("https://x/200.jpg"), Some(ImageState::Loading)));
    assert!(state.image("https://x/399.jpg").is_none());
}

#[test]
fn releasing_before_threshold_does_not_open() {
    let mut state = State::new(
        jane_and_bo(),
        settings(DismissPolicy::BackdropOnly, OpenTrigger::LongPress),
    );
    let t0 = Instant::now();

    let _ = state.update_at(Message::TilePressed(0), t0);
    let _ = state.update_at(Message::TileReleased(0), t0 + Duration::from_millis(299));
    let _ = state.update_at(Message::Tick(t0 + Duration::from_millis(500)), t0);

    assert_eq!(state.selected(), None);
    assert!(!state.needs_tick());
}

#[test]
fn failed_image_becomes_placeholder_without_retry() {
    let mut state = State::new(
        jane_and_bo(),
        Settings {
            lazy_loading: false,
            ..Settings::default()
        },
    );

    let urls = state.initial_image_requests();
    assert_eq!(
        urls,
        vec![
            HERO_IMAGE_URL.to_string(),
            "https://x/a.jpg".to_string(),
            "https://x/b.jpg".to_string(),
        ]
    );
    assert!(matches!(state.image("https://x/a.jpg"), Some(ImageState::Loading)));

    let _ = state.update(Message::ImageFetched {
        url: "https://x/a.jpg".into(),
        result: Err(FetchError::Status(404)),
    });
    assert!(matches!(state.image("https://x/a.jpg"), Some(ImageState::Failed)));

    // Everything was requested up front, scrolling asks for nothing more.
    let bottom = VisibleArea {
        offset_y: 10_000.0,
        width: 1024.0,
        height: 760.0,
    };
    assert_eq!(state.update(Message::Scrolled(bottom)), Effect::None);
    assert!(state.initial_image_requests().is_empty());
}
