use ratatui::style::{Color, Modifier, Style};

pub(super) const UI_MARGIN: u16 = 1;
pub(super) const HEADER_HEIGHT: u16 = 3;
pub(super) const FOOTER_HEIGHT: u16 = 1;
pub(super) const COUNTRY_LIST_WIDTH: u16 = 28;
pub(super) const CARDS_HEIGHT: u16 = 4;
pub(super) const CHART_MIN_HEIGHT: u16 = 10;
pub(super) const BOTTOM_HEIGHT: u16 = 8;
pub(super) const CHART_COL_LEFT: u16 = 50;
pub(super) const CHART_COL_RIGHT: u16 = 50;
pub(super) const GAUGE_COL: u16 = 40;
pub(super) const PROFILE_COL: u16 = 60;
pub(super) const CHART_BG_RGB: (u8, u8, u8) = (0x0a, 0x0a, 0x0a);
pub(super) const PANEL_BORDER_RGB: (u8, u8, u8) = (0xe5, 0xe7, 0xeb);
pub(super) const PANEL_TEXT_RGB: (u8, u8, u8) = (0xff, 0xff, 0xff);
pub(super) const PANEL_MUTED_RGB: (u8, u8, u8) = (0xd1, 0xd5, 0xdb);
pub(super) const ACCENT_CASES_RGB: (u8, u8, u8) = (0x38, 0xbd, 0xf8);
pub(super) const ACCENT_AVERAGE_RGB: (u8, u8, u8) = (0xff, 0xa9, 0x4d);
pub(super) const ACCENT_DEATHS_RGB: (u8, u8, u8) = (0xef, 0x44, 0x44);
pub(super) const ACCENT_VACCINE_RGB: (u8, u8, u8) = (0x22, 0xc5, 0x5e);
pub(super) const ACCENT_PROGRESS_RGB: (u8, u8, u8) = (0x22, 0xd3, 0xee);
pub(super) const ACCENT_PROFILE_RGB: (u8, u8, u8) = (0xa7, 0x8b, 0xfa);
pub(super) const ACCENT_SELECTED_RGB: (u8, u8, u8) = (0x80, 0x4c, 0xff);

pub(super) fn style_color(no_color: bool, color: Color) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().fg(color)
    }
}

pub(super) const fn rgb(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub(super) fn panel_block_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default()
            .bg(rgb(CHART_BG_RGB))
            .fg(rgb(PANEL_TEXT_RGB))
    }
}

pub(super) fn panel_border_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().fg(rgb(PANEL_BORDER_RGB))
    }
}

pub(super) fn panel_title_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().fg(rgb(PANEL_TEXT_RGB))
    }
}

pub(super) fn axis_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().fg(rgb(PANEL_MUTED_RGB))
    }
}

pub(super) fn app_background_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().bg(rgb(CHART_BG_RGB))
    }
}

/// Highlighted list row; reversed video when colors are off so it stays visible.
pub(super) fn selected_style(no_color: bool) -> Style {
    if no_color {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
            .bg(rgb(ACCENT_SELECTED_RGB))
            .fg(rgb(PANEL_TEXT_RGB))
            .add_modifier(Modifier::BOLD)
    }
}
