// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are small inline SVG documents drawn in black; callers tint them
//! with [`tinted`] so the same glyph works on light surfaces, dark surfaces
//! and the dimmed preview backdrop. Handles are cached using `OnceLock`.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `clipboard` not `copy_url`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function returning a widget over a cached handle.
macro_rules! define_icon {
    ($name:ident, $source:ident, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| Handle::from_memory($source.as_bytes()));
            Svg::new(handle.clone())
        }
    };
}

const CLIPBOARD_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><rect x="8" y="8" width="12" height="12" rx="2"/><path d="M16 8V6a2 2 0 0 0-2-2H6a2 2 0 0 0-2 2v8a2 2 0 0 0 2 2h2"/></svg>"#;

const CLIPBOARD_CHECK_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><rect x="8" y="8" width="12" height="12" rx="2"/><path d="M16 8V6a2 2 0 0 0-2-2H6a2 2 0 0 0-2 2v8a2 2 0 0 0 2 2h2"/><path d="M11 14l2 2l4-4"/></svg>"#;

const ARROW_DOWN_TRAY_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M4 17v2a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-2"/><path d="M7 11l5 5l5-5"/><path d="M12 4v12"/></svg>"#;

const CROSS_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M18 6L6 18"/><path d="M6 6l12 12"/></svg>"#;

const CHECKMARK_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M5 12l5 5l10-10"/></svg>"#;

const WARNING_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M12 9v4"/><path d="M10.363 3.591l-8.106 13.534a1.914 1.914 0 0 0 1.636 2.871h16.214a1.914 1.914 0 0 0 1.636-2.87l-8.106-13.536a1.914 1.914 0 0 0-3.274 0z"/><path d="M12 16h.01"/></svg>"#;

const PHOTO_OFF_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M15 8h.01"/><path d="M7 3h11a3 3 0 0 1 3 3v11"/><path d="M18.5 18.5a3 3 0 0 1-2.5 1.5H6a3 3 0 0 1-3-3V6c0-.9.4-1.7 1-2.2"/><path d="M3 16l5-5c.9-.9 2-.9 3 0l5 5"/><path d="M3 3l18 18"/></svg>"#;

define_icon!(
    clipboard,
    CLIPBOARD_SVG,
    "Clipboard icon: two overlapping sheets."
);
define_icon!(
    clipboard_check,
    CLIPBOARD_CHECK_SVG,
    "Clipboard with check mark: copy confirmed."
);
define_icon!(
    arrow_down_tray,
    ARROW_DOWN_TRAY_SVG,
    "Arrow pointing down into a tray."
);
define_icon!(cross, CROSS_SVG, "Cross icon: X shape.");
define_icon!(checkmark, CHECKMARK_SVG, "Checkmark icon.");
define_icon!(warning, WARNING_SVG, "Warning icon: exclamation triangle.");
define_icon!(
    photo_off,
    PHOTO_OFF_SVG,
    "Crossed-out picture: image unavailable."
);

/// Creates an icon with specified dimensions.
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Paints every stroke of the icon with `color`.
pub fn tinted<'a>(icon: Svg<'a>, color: Color) -> Svg<'a> {
    icon.style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}

/// Paints the icon with the theme's text color.
pub fn themed<'a>(icon: Svg<'a>) -> Svg<'a> {
    icon.style(|theme: &Theme, _status| svg::Style {
        color: Some(theme.palette().text),
    })
}
