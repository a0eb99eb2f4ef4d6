// SPDX-License-Identifier: MPL-2.0
//! Grid layout: one tile per catalog record, wrapped into rows.

use super::component::{Message, State};
use super::tile;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use iced::widget::{container, Column, Row};
use iced::{Element, Length};

/// Gap between tiles, both horizontally and vertically.
pub const TILE_GAP: f32 = spacing::MD;

/// Padding around the scrollable page content.
pub const PAGE_PADDING: f32 = spacing::LG;

/// Number of tiles that fit side by side in `available_width`.
///
/// Always at least one, so narrow windows still show a single column.
#[must_use]
pub fn column_count(available_width: f32, tile_width: f32, gap: f32) -> usize {
    if !available_width.is_finite() || tile_width <= 0.0 || available_width < tile_width {
        return 1;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let fitted = ((available_width + gap) / (tile_width + gap)).floor() as usize;
    fitted.max(1)
}

/// Width taken by one tile card, padding included.
#[must_use]
pub fn tile_outer_width(tile_size: f32) -> f32 {
    tile_size + 2.0 * tile::TILE_PADDING
}

/// Height taken by one tile card: image, name bar and padding.
#[must_use]
pub fn tile_outer_height(tile_size: f32) -> f32 {
    tile_size + spacing::XS + sizing::NAME_BAR_HEIGHT + 2.0 * tile::TILE_PADDING
}

/// Number of grid columns for a page of `page_width`.
#[must_use]
pub fn columns_for_page(page_width: f32, tile_size: f32) -> usize {
    column_count(
        page_width - 2.0 * PAGE_PADDING,
        tile_outer_width(tile_size),
        TILE_GAP,
    )
}

/// Number of leading tiles whose row starts above `bottom`, measured in
/// pixels from the top of the page.
///
/// The header is counted as grid space, so the estimate never falls short
/// of what is actually on screen.
#[must_use]
pub fn tiles_above(bottom: f32, columns: usize, tile_size: f32) -> usize {
    if bottom.is_nan() || bottom <= 0.0 {
        return 0;
    }
    if bottom.is_infinite() {
        return usize::MAX;
    }
    let pitch = tile_outer_height(tile_size) + TILE_GAP;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rows = (bottom / pitch).ceil() as usize;
    rows.saturating_mul(columns.max(1))
}

/// Renders the catalog as rows of `columns` tiles.
pub fn view<'a>(state: &'a State, columns: usize, i18n: &'a I18n) -> Element<'a, Message> {
    let columns = columns.max(1);

    let rows = state
        .catalog()
        .records()
        .chunks(columns)
        .enumerate()
        .map(|(row_index, chunk)| -> Element<'a, Message> {
            let tiles = chunk.iter().enumerate().map(|(offset, record)| {
                tile::view(state, row_index * columns + offset, record, i18n)
            });
            Row::with_children(tiles).spacing(TILE_GAP).into()
        });

    container(Column::with_children(rows).spacing(TILE_GAP))
        .center_x(Length::Fill)
        .into()
}
