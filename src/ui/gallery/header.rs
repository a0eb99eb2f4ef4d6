// SPDX-License-Identifier: MPL-2.0
//! Page header: hero banner, title with the avatar count, description.

use super::component::{ImageState, Message, State, HERO_IMAGE_URL};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{column, container, image, text};
use iced::{alignment, ContentFit, Element, Length};

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let count = state.catalog().len().to_string();
    let title = text(i18n.tr_with_args("gallery-title", &[("count", count.as_str())]))
        .size(typography::TITLE_LG);
    let description = text(i18n.tr("gallery-description")).size(typography::BODY_LG);

    let mut header = column![].spacing(spacing::SM).align_x(alignment::Horizontal::Center);

    match state.image(HERO_IMAGE_URL) {
        Some(ImageState::Loaded(handle)) => {
            header = header.push(
                image(handle.clone())
                    .height(Length::Fixed(sizing::HERO_HEIGHT))
                    .content_fit(ContentFit::Contain),
            );
        }
        Some(ImageState::Loading) => {
            header = header.push(
                container(text(i18n.tr("image-loading")).size(typography::CAPTION))
                    .width(Length::Fixed(sizing::HERO_HEIGHT))
                    .height(Length::Fixed(sizing::HERO_HEIGHT))
                    .center_x(Length::Fixed(sizing::HERO_HEIGHT))
                    .center_y(Length::Fixed(sizing::HERO_HEIGHT))
                    .style(styles::container::placeholder),
            );
        }
        // A missing banner is dropped rather than shown as broken.
        Some(ImageState::Failed) | None => {}
    }

    header = header.push(title).push(description);

    if state.catalog().is_empty() {
        header = header.push(text(i18n.tr("gallery-empty")).size(typography::BODY));
    }

    container(header).center_x(Length::Fill).into()
}
