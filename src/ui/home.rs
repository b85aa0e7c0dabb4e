// SPDX-License-Identifier: MPL-2.0
//! Home screen: status bar plus the app icon grid over the wallpaper.

use crate::config::Wallpaper;
use crate::shell::ScreenId;
use crate::ui::catalog::app_meta;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, scrollable, text, Column, Row, Space};
use iced::{Element, Length, Size};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    IconPressed(ScreenId),
    SettingsPressed,
}

pub struct ViewContext<'a> {
    pub apps: &'a [ScreenId],
    pub columns: usize,
    pub wallpaper: Wallpaper,
    pub colors: &'a ColorScheme,
    /// An app covers home; the grid must not scroll underneath it.
    pub scroll_locked: bool,
}

/// Landscape when the window is wider than it is tall.
#[must_use]
pub fn is_landscape(size: Size) -> bool {
    size.width > size.height
}

#[must_use]
pub fn columns_for(size: Size) -> usize {
    if is_landscape(size) {
        sizing::GRID_COLUMNS_LANDSCAPE
    } else {
        sizing::GRID_COLUMNS_PORTRAIT
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let label_color = ctx.colors.text_on_wallpaper;

    let status_bar = Row::new()
        .push(text("One UI").size(typography::CAPTION).color(label_color))
        .push(Space::new().width(Length::Fill))
        .push(
            button(text("⚙").size(typography::TITLE_MD))
                .on_press(Message::SettingsPressed)
                .style(styles::button::chrome(label_color)),
        )
        .align_y(Vertical::Center)
        .height(Length::Fixed(sizing::STATUS_BAR_HEIGHT))
        .padding([0.0, spacing::MD]);

    let mut grid = Column::new().spacing(spacing::LG).padding(spacing::LG);
    for chunk in ctx.apps.chunks(ctx.columns.max(1)) {
        let mut row = Row::new().spacing(spacing::MD);
        for id in chunk {
            row = row.push(icon(id, label_color));
        }
        for _ in chunk.len()..ctx.columns {
            row = row.push(Space::new().width(Length::Fill));
        }
        grid = grid.push(row);
    }

    let body: Element<'_, Message> = if ctx.scroll_locked {
        grid.into()
    } else {
        scrollable(grid).height(Length::Fill).into()
    };

    container(Column::new().push(status_bar).push(body))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::wallpaper(ctx.wallpaper))
        .into()
}

fn icon(id: &ScreenId, label_color: iced::Color) -> Element<'_, Message> {
    let meta = app_meta(id);

    let tile = container(text(meta.glyph).size(sizing::ICON_GLYPH))
        .width(Length::Fixed(sizing::ICON_TILE))
        .height(Length::Fixed(sizing::ICON_TILE))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::icon_tile(meta.accent));

    let content = Column::new()
        .push(tile)
        .push(text(meta.label).size(typography::CAPTION).color(label_color))
        .spacing(spacing::XS)
        .align_x(Horizontal::Center);

    button(content)
        .on_press(Message::IconPressed(id.clone()))
        .style(styles::button::app_icon)
        .width(Length::Fill)
        .into()
}
