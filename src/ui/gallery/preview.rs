// SPDX-License-Identifier: MPL-2.0
//! Full-window preview of the selected record.
//!
//! Layers, bottom to top: the dimmed backdrop, the centered card and the
//! close control. The card and the backdrop report clicks separately so the
//! dismiss policy can tell them apart.

use super::component::{Message, State};
use super::policy::ClickTarget;
use super::tile::picture;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::styles::tooltip::styled as with_tooltip;
use iced::widget::{button, column, container, mouse_area, opaque, row, stack, text, tooltip};
use iced::{alignment, Element, Length};

/// Returns the overlay, or `None` when no record is selected.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Option<Element<'a, Message>> {
    let index = state.selected()?;
    let record = state.selected_record()?;
    let copy_index = state.preview_copy_index().unwrap_or(index);
    let copied = state.is_copied(copy_index);

    let copy_label = if copied {
        i18n.tr("preview-copied-button")
    } else {
        i18n.tr("preview-copy-button")
    };
    let copy_button = labelled_button(
        if copied {
            icons::clipboard_check()
        } else {
            icons::clipboard()
        },
        copy_label,
        Message::CopyUrl(copy_index),
        copied,
    );
    let download_button = labelled_button(
        icons::arrow_down_tray(),
        i18n.tr("preview-download-button"),
        Message::Download(index),
        false,
    );

    let card = container(
        column![
            picture(
                state.image(&record.url),
                sizing::PREVIEW_IMAGE,
                i18n
            ),
            text(&record.name).size(typography::TITLE_MD),
            row![copy_button, download_button].spacing(spacing::SM),
        ]
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center),
    )
    .padding(spacing::LG)
    .style(styles::container::preview_card);

    let content = mouse_area(card).on_press(Message::PreviewClicked(ClickTarget::Content));

    let backdrop = mouse_area(
        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::PreviewClicked(ClickTarget::Backdrop));

    let close_button = button(icons::tinted(
        icons::sized(icons::cross(), sizing::ICON_MD),
        palette::WHITE,
    ))
    .padding(spacing::XS)
    .on_press(Message::ClosePreview)
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    ));

    let close_layer = container(with_tooltip(
        close_button,
        i18n.tr("preview-close-tooltip"),
        tooltip::Position::Left,
    ))
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Right)
    .padding(spacing::MD);

    Some(opaque(stack![backdrop, close_layer]))
}

fn labelled_button<'a>(
    icon: iced::widget::svg::Svg<'a>,
    label: String,
    on_press: Message,
    confirmed: bool,
) -> button::Button<'a, Message> {
    button(
        row![
            icons::tinted(icons::sized(icon, sizing::ICON_SM), palette::WHITE),
            text(label).size(typography::BODY),
        ]
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center),
    )
    .padding([spacing::XS, spacing::MD])
    .on_press(on_press)
    .style(styles::button::preview_action(confirmed))
}
