// SPDX-License-Identifier: MPL-2.0
//! Avatar gallery: grid of tiles with copy-URL and download actions, and a
//! preview overlay.
//!
//! State and update logic live in [`component`]; the remaining modules are
//! pure view functions over that state.

pub mod component;
pub mod copy_feedback;
pub mod grid;
pub mod header;
pub mod policy;
pub mod press;
pub mod preview;
pub mod tile;

pub use component::{Effect, ImageState, Message, Settings, State, VisibleArea, HERO_IMAGE_URL};
pub use policy::{ClickTarget, DismissPolicy, OpenTrigger};

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use iced::widget::{column, responsive, scrollable, stack};
use iced::{Element, Length};

/// Renders the scrollable page and, when open, the preview above it.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let tile_size = state.settings().tile_size;

    let page = responsive(move |size| {
        let columns = grid::columns_for_page(size.width, tile_size);

        let content = column![header::view(state, i18n), grid::view(state, columns, i18n)]
            .spacing(spacing::XL)
            .padding(grid::PAGE_PADDING)
            .width(Length::Fill);

        scrollable(content)
            .on_scroll(|viewport| {
                let bounds = viewport.bounds();
                Message::Scrolled(VisibleArea {
                    offset_y: viewport.absolute_offset().y,
                    width: bounds.width,
                    height: bounds.height,
                })
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    });

    match preview::view(state, i18n) {
        Some(overlay) => stack![page, overlay].into(),
        None => page.into(),
    }
}
