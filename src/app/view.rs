// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery fills the window; toasts float above it.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::notifications::{Manager, Toast};
use iced::widget::{container, stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
    pub notifications: &'a Manager,
}

/// Renders the gallery with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = container(gallery::view(ctx.gallery, ctx.i18n).map(Message::Gallery))
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    stack![content, toasts].into()
}
