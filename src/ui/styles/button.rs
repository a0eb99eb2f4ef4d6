// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Square icon button laid over a tile image (copy, download).
///
/// When `confirmed` is true the button switches to the success color so the
/// copy confirmation stays visible for its whole display time.
pub fn tile_action(confirmed: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = if confirmed {
            match status {
                button::Status::Hovered => palette::SUCCESS_500,
                _ => Color {
                    a: opacity::OVERLAY_PRESSED,
                    ..palette::SUCCESS_500
                },
            }
        } else {
            let alpha = match status {
                button::Status::Hovered => opacity::OVERLAY_HOVER,
                button::Status::Pressed => opacity::OVERLAY_PRESSED,
                _ => opacity::OVERLAY_MEDIUM,
            };
            Color { a: alpha, ..BLACK }
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                color: if confirmed { WHITE } else { Color::TRANSPARENT },
                width: if confirmed { border::WIDTH_SM } else { 0.0 },
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        }
    }
}

/// Labelled action button under the previewed image.
pub fn preview_action(confirmed: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (base, hover, edge) = if confirmed {
            (palette::SUCCESS_500, palette::SUCCESS_500, WHITE)
        } else {
            (
                palette::PRIMARY_500,
                palette::PRIMARY_400,
                palette::PRIMARY_600,
            )
        };

        let background = match status {
            button::Status::Hovered => hover,
            button::Status::Disabled => palette::GRAY_400,
            _ => base,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                color: edge,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: if matches!(status, button::Status::Hovered) {
                shadow::MD
            } else {
                shadow::SM
            },
            snap: true,
        }
    }
}

/// Round translucent button on dark overlays (preview close control).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                color: Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..WHITE
                },
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}
