// SPDX-License-Identifier: MPL-2.0
//! A single gallery tile: image, name, copy and download buttons.

use super::component::{ImageState, Message, State};
use super::policy::OpenTrigger;
use crate::catalog::AvatarRecord;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::styles::tooltip::styled as with_tooltip;
use iced::widget::{button, column, container, image, mouse_area, row, stack, text, tooltip};
use iced::{alignment, mouse, ContentFit, Element, Length};

/// Inner padding of a tile card.
pub const TILE_PADDING: f32 = spacing::XS;

pub fn view<'a>(
    state: &'a State,
    index: usize,
    record: &'a AvatarRecord,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let size = state.settings().tile_size;

    let trigger = mouse_area(picture(state.image(&record.url), size, i18n))
        .interaction(mouse::Interaction::Pointer);
    let trigger = match state.settings().open_trigger {
        OpenTrigger::Click => trigger.on_press(Message::OpenPreview(index)),
        OpenTrigger::LongPress => trigger
            .on_press(Message::TilePressed(index))
            .on_release(Message::TileReleased(index))
            .on_exit(Message::TileExited(index)),
    };

    let copied = state.is_copied(index);
    let copy_button = action_button(
        if copied {
            icons::clipboard_check()
        } else {
            icons::clipboard()
        },
        Message::CopyUrl(index),
        copied,
    );
    let copy_tip = if copied {
        i18n.tr("tile-copied-tooltip")
    } else {
        i18n.tr("tile-copy-tooltip")
    };
    let download_button = action_button(icons::arrow_down_tray(), Message::Download(index), false);

    let actions = row![
        with_tooltip(copy_button, copy_tip, tooltip::Position::Bottom),
        with_tooltip(
            download_button,
            i18n.tr("tile-download-tooltip"),
            tooltip::Position::Bottom
        ),
    ]
    .spacing(spacing::XXS);

    let mut layers = stack![
        trigger,
        container(actions)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(spacing::XS),
    ]
    .width(Length::Fixed(size))
    .height(Length::Fixed(size));

    if state.pressed_index() == Some(index) {
        layers = layers.push(
            container(
                container(text(i18n.tr("tile-hold-hint")).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::overlay::badge(radius::FULL)),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Left)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::XS),
        );
    }

    let name_bar = container(text(&record.name).size(typography::BODY))
        .width(Length::Fixed(size))
        .height(Length::Fixed(sizing::NAME_BAR_HEIGHT))
        .align_y(alignment::Vertical::Center)
        .padding([0.0, spacing::XS])
        .style(styles::container::name_bar);

    container(column![layers, name_bar].spacing(spacing::XS))
        .padding(TILE_PADDING)
        .style(styles::container::tile)
        .into()
}

/// Image area of a tile, or a placeholder while loading or after a failure.
pub fn picture<'a>(
    image_state: Option<&ImageState>,
    size: f32,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    match image_state {
        Some(ImageState::Loaded(handle)) => image(handle.clone())
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(ImageState::Failed) => placeholder(
            column![
                icons::tinted(icons::sized(icons::photo_off(), sizing::ICON_LG), palette::GRAY_400),
                text(i18n.tr("image-unavailable")).size(typography::CAPTION),
            ]
            .spacing(spacing::XXS)
            .align_x(alignment::Horizontal::Center)
            .into(),
            size,
        ),
        Some(ImageState::Loading) | None => placeholder(
            text(i18n.tr("image-loading"))
                .size(typography::CAPTION)
                .into(),
            size,
        ),
    }
}

fn placeholder<'a>(content: Element<'a, Message>, size: f32) -> Element<'a, Message> {
    container(content)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .center_x(Length::Fixed(size))
        .center_y(Length::Fixed(size))
        .style(styles::container::placeholder)
        .into()
}

fn action_button<'a>(
    icon: iced::widget::svg::Svg<'a>,
    on_press: Message,
    confirmed: bool,
) -> button::Button<'a, Message> {
    button(
        container(icons::tinted(
            icons::sized(icon, sizing::ICON_SM),
            palette::WHITE,
        ))
        .center_x(Length::Fill)
        .center_y(Length::Fill),
    )
    .width(Length::Fixed(sizing::ACTION_BUTTON))
    .height(Length::Fixed(sizing::ACTION_BUTTON))
    .padding(0)
    .on_press(on_press)
    .style(styles::button::tile_action(confirmed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AvatarRecord, Catalog, Gender};
    use crate::ui::gallery::component::Settings;
    use std::time::Instant;

    fn state_with(trigger: OpenTrigger) -> State {
        let catalog = Catalog::new(vec![
            AvatarRecord::new("Jane Doe", "https://x/a.jpg", Gender::Female),
            AvatarRecord::new("Bo", "https://x/b.jpg", Gender::Male),
        ]);
        State::new(
            catalog,
            Settings {
                open_trigger: trigger,
                ..Settings::default()
            },
        )
    }

    #[test]
    fn view_borrows_state_and_record() {
        let state = state_with(OpenTrigger::Click);
        let i18n = I18n::default();
        let record = &state.catalog().records()[0];
        let _element: Element<'_, Message> = view(&state, 0, record, &i18n);
    }

    #[test]
    fn view_renders_copied_and_pressed_tiles() {
        let mut state = state_with(OpenTrigger::LongPress);
        let now = Instant::now();
        let _ = state.update_at(
            Message::ClipboardWritten {
                index: 1,
                result: Ok(()),
            },
            now,
        );
        let _ = state.update_at(Message::TilePressed(1), now);
        assert_eq!(state.pressed_index(), Some(1));

        let i18n = I18n::default();
        let record = &state.catalog().records()[1];
        let _element: Element<'_, Message> = view(&state, 1, record, &i18n);
    }

    #[test]
    fn picture_covers_every_image_state() {
        let i18n = I18n::default();
        let _ = picture(None, 180.0, &i18n);
        let _ = picture(Some(&ImageState::Loading), 180.0, &i18n);
        let _ = picture(Some(&ImageState::Failed), 180.0, &i18n);
    }
}
