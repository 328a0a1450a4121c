use ratatui::{
    layout::{Constraint, Direction, Layout},
    prelude::{Backend, Frame},
    widgets::Block,
};

use crate::metrics::DashboardView;
use crate::ui::model::DashboardState;

use super::charts::render_charts;
use super::panels::{
    render_cards, render_country_list, render_footer, render_header, render_profile,
    render_vaccination,
};
use super::theme::{
    BOTTOM_HEIGHT, CARDS_HEIGHT, CHART_MIN_HEIGHT, COUNTRY_LIST_WIDTH, FOOTER_HEIGHT,
    GAUGE_COL, HEADER_HEIGHT, PROFILE_COL, UI_MARGIN, app_background_style,
};

pub fn draw_frame<B: Backend>(
    f: &mut Frame<'_, B>,
    state: &DashboardState,
    view: Option<&DashboardView<'_>>,
) {
    let size = f.size();
    f.render_widget(
        Block::default().style(app_background_style(state.no_color)),
        size,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(UI_MARGIN)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(CHART_MIN_HEIGHT),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(size);
    let (header_chunk, body_chunk, footer_chunk) = match rows.as_ref() {
        [a, b, c] => (a, b, c),
        _ => return,
    };

    render_header(f, state, view, *header_chunk);
    render_footer(f, state, *footer_chunk);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(COUNTRY_LIST_WIDTH), Constraint::Min(0)])
        .split(*body_chunk);
    let (list_chunk, main_chunk) = match columns.as_ref() {
        [a, b] => (a, b),
        _ => return,
    };

    render_country_list(f, state, *list_chunk);

    let Some(view) = view else {
        return;
    };

    let main_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CARDS_HEIGHT),
            Constraint::Min(CHART_MIN_HEIGHT),
            Constraint::Length(BOTTOM_HEIGHT),
        ])
        .split(*main_chunk);
    let (cards_chunk, chart_chunk, bottom_chunk) = match main_rows.as_ref() {
        [a, b, c] => (a, b, c),
        _ => return,
    };

    render_cards(f, state, view, *cards_chunk);
    render_charts(f, state, view, *chart_chunk);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(GAUGE_COL),
            Constraint::Percentage(PROFILE_COL),
        ])
        .split(*bottom_chunk);
    let (gauge_chunk, profile_chunk) = match bottom.as_ref() {
        [a, b] => (a, b),
        _ => return,
    };

    render_vaccination(f, state, view, *gauge_chunk);
    render_profile(f, state, view, *profile_chunk);
}
