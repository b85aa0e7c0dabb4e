// SPDX-License-Identifier: MPL-2.0
//! App screen overlay.
//!
//! Slides up over home while opening and back down while closing. The
//! position comes from the eased progress the view-state machine reports.

use crate::shell::{ScreenId, Visibility};
use crate::ui::catalog::app_meta;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::Vertical;
use iced::widget::{button, container, text, Column, Row, Space};
use iced::{Color, Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    BackPressed(ScreenId),
}

pub struct ViewContext<'a> {
    pub id: &'a ScreenId,
    pub visibility: Visibility,
    /// Eased transition progress; may overshoot `[0, 1]` on elastic curves.
    pub progress: f32,
    pub window_height: f32,
    /// Live downward drag toward a dismiss; the active card follows it.
    pub pull: f32,
    pub colors: &'a ColorScheme,
}

/// Distance from the top of the window to the card, in pixels.
///
/// `pull` only moves an active card; closing cards follow their animation.
#[must_use]
pub fn slide_offset(visibility: Visibility, progress: f32, height: f32, pull: f32) -> f32 {
    let (hidden_fraction, pull) = match visibility {
        Visibility::Active => (1.0 - progress, pull.max(0.0)),
        Visibility::Closing => (progress, 0.0),
        Visibility::Hidden => (1.0, 0.0),
    };
    (hidden_fraction * height + pull).clamp(0.0, height.max(0.0))
}

/// Card opacity for the same transition.
#[must_use]
pub fn card_alpha(visibility: Visibility, progress: f32) -> f32 {
    let alpha = match visibility {
        Visibility::Active => progress,
        Visibility::Closing => 1.0 - progress,
        Visibility::Hidden => 0.0,
    };
    alpha.clamp(0.0, 1.0)
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let meta = app_meta(ctx.id);
    let offset = slide_offset(ctx.visibility, ctx.progress, ctx.window_height, ctx.pull);
    let alpha = card_alpha(ctx.visibility, ctx.progress);

    let mut back = button(text("‹ Back").size(typography::BODY))
        .style(styles::button::chrome(Color::WHITE));
    if ctx.visibility == Visibility::Active {
        back = back.on_press(Message::BackPressed(ctx.id.clone()));
    }

    let header = container(
        Column::new()
            .push(back)
            .push(
                Row::new()
                    .push(text(meta.glyph).size(typography::TITLE_LG))
                    .push(text(meta.label).size(typography::TITLE_LG))
                    .spacing(spacing::SM)
                    .align_y(Vertical::Center),
            )
            .spacing(spacing::MD),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::app_header(meta.accent));

    let body = Column::new()
        .push(text(meta.blurb).size(typography::BODY))
        .push(
            text("Swipe sideways to switch apps, pull down from the top to close.")
                .size(typography::CAPTION)
                .color(ctx.colors.text_secondary),
        )
        .spacing(spacing::SM)
        .padding(spacing::LG);

    let card = container(Column::new().push(header).push(body))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::app_surface(ctx.colors, alpha));

    Column::new()
        .push(Space::new().height(Length::Fixed(offset)))
        .push(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
