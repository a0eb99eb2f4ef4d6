// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles for the icon-only tile buttons.

use crate::ui::design_tokens::{palette, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Tooltip surface contrasting with the active theme.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let (background, text_color) = if theme.extended_palette().is_dark {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_900, palette::GRAY_100)
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: Color {
                a: 0.3,
                ..palette::GRAY_400
            },
        },
        shadow: shadow::SM,
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip showing `tip`.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::CAPTION))
        .padding(spacing::XXS)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XXS)
}
