// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card holding one avatar tile.
///
/// Derived from the active Iced `Theme` background so tiles read well in
/// both light and dark modes.
pub fn tile(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::LG.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        shadow: shadow::SM,
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

/// Name strip under a tile image.
pub fn name_bar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Area shown while an image is loading or after it failed.
pub fn placeholder(theme: &Theme) -> container::Style {
    let is_dark = theme.extended_palette().is_dark;

    container::Style {
        background: Some(Background::Color(if is_dark {
            palette::GRAY_700
        } else {
            palette::GRAY_100
        })),
        text_color: Some(palette::GRAY_400),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Panel framing the previewed image and its actions.
pub fn preview_card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}
