use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::{Backend, Frame, text},
    text::Span,
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap, block::Title},
};

use crate::dataset::Observation;
use crate::metrics::{DashboardView, GAUGE_REFERENCE_PERCENT};
use crate::summary::format::{
    NO_DATA, format_count, format_delta, format_opt_count, format_opt_percent,
};
use crate::summary::profile_lines;
use crate::ui::model::DashboardState;

use super::theme::{
    ACCENT_CASES_RGB, ACCENT_DEATHS_RGB, ACCENT_PROFILE_RGB, ACCENT_PROGRESS_RGB,
    ACCENT_VACCINE_RGB, PANEL_MUTED_RGB, panel_block_style, panel_border_style,
    panel_title_style, rgb, selected_style, style_color,
};

const KEY_HINTS: &str = concat!(
    "Up/Down country | [ ] start | { } end | r reset | ",
    "t lines/points | m average | e export | q quit"
);

fn panel<'a>(title: impl Into<Title<'a>>, no_color: bool) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(panel_block_style(no_color))
        .border_style(panel_border_style(no_color))
        .title_style(panel_title_style(no_color))
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

pub(super) fn render_header<B: Backend>(
    f: &mut Frame<'_, B>,
    state: &DashboardState,
    view: Option<&DashboardView<'_>>,
    area: Rect,
) {
    let muted = style_color(state.no_color, rgb(PANEL_MUTED_RGB));
    let title = text::Line::from(vec![
        Span::styled(
            format!("covidash v{}", env!("CARGO_PKG_VERSION")),
            style_color(state.no_color, rgb(ACCENT_PROGRESS_RGB)),
        ),
        Span::styled(" | COVID-19 dashboard", muted),
    ]);

    let country = state.country().unwrap_or(NO_DATA);
    let selection = text::Line::from(format!(
        "Country: {}   Range: {} to {}   Records: {}   Latest: {}",
        country,
        state.range.start,
        state.range.end,
        view.map_or(0, |view| view.series.len()),
        view.and_then(|view| view.snapshot.date())
            .map_or_else(|| "no data".to_owned(), |date| date.to_string()),
    ));
    let toggles = text::Line::from(Span::styled(
        format!(
            "Trend fill: {}   Moving average: {} ({} days)",
            on_off(state.options.show_trends),
            on_off(state.options.moving_average),
            state.options.rolling_window
        ),
        muted,
    ));

    f.render_widget(
        Paragraph::new(vec![title, selection, toggles]).style(panel_block_style(state.no_color)),
        area,
    );
}

pub(super) fn render_footer<B: Backend>(f: &mut Frame<'_, B>, state: &DashboardState, area: Rect) {
    let line = state.status.as_deref().map_or_else(
        || Span::styled(KEY_HINTS, style_color(state.no_color, rgb(PANEL_MUTED_RGB))),
        |status| {
            Span::styled(
                status.to_owned(),
                style_color(state.no_color, rgb(ACCENT_VACCINE_RGB)),
            )
        },
    );
    f.render_widget(Paragraph::new(text::Line::from(line)), area);
}

pub(super) fn render_country_list<B: Backend>(
    f: &mut Frame<'_, B>,
    state: &DashboardState,
    area: Rect,
) {
    let items: Vec<ListItem<'_>> = state
        .countries
        .iter()
        .map(|country| ListItem::new(country.as_str()))
        .collect();
    let list = List::new(items)
        .block(panel(
            format!("Countries ({})", state.countries.len()),
            state.no_color,
        ))
        .highlight_style(selected_style(state.no_color))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if !state.countries.is_empty() {
        list_state.select(Some(state.selected));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}

pub(super) fn render_cards<B: Backend>(
    f: &mut Frame<'_, B>,
    state: &DashboardState,
    view: &DashboardView<'_>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(area);

    let field = |observation| view.snapshot.field(observation).as_option();
    let cards = [
        (
            "Total Cases",
            format_opt_count(field(Observation::TotalCases)),
            ACCENT_CASES_RGB,
        ),
        (
            "Total Deaths",
            format_opt_count(field(Observation::TotalDeaths)),
            ACCENT_DEATHS_RGB,
        ),
        (
            "New Cases",
            format_opt_count(field(Observation::NewCases)),
            ACCENT_CASES_RGB,
        ),
        (
            "Vaccination Rate",
            format_opt_percent(view.gauge.rate, 1),
            ACCENT_VACCINE_RGB,
        ),
    ];

    for ((title, value, accent), chunk) in cards.into_iter().zip(chunks.iter()) {
        let card = Paragraph::new(text::Line::from(Span::styled(
            value,
            style_color(state.no_color, rgb(accent)),
        )))
        .block(panel(title, state.no_color));
        f.render_widget(card, *chunk);
    }
}

pub(super) fn render_vaccination<B: Backend>(
    f: &mut Frame<'_, B>,
    state: &DashboardState,
    view: &DashboardView<'_>,
    area: Rect,
) {
    let block = panel("Vaccination Progress", state.no_color);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);
    let (gauge_chunk, detail_chunk) = match rows.as_ref() {
        [a, b] => (a, b),
        _ => return,
    };

    let (ratio, label) = match (view.gauge.rate, view.gauge.delta) {
        (Some(rate), Some(delta)) => (
            (rate / 100.0).clamp(0.0, 1.0),
            format!(
                "{:.1}% ({} vs {:.0}%)",
                rate,
                format_delta(delta),
                GAUGE_REFERENCE_PERCENT
            ),
        ),
        _ => (0.0, NO_DATA.to_owned()),
    };
    let gauge = Gauge::default()
        .gauge_style(style_color(state.no_color, rgb(ACCENT_VACCINE_RGB)))
        .ratio(ratio)
        .label(label);
    f.render_widget(gauge, *gauge_chunk);

    let mut lines = Vec::with_capacity(3);
    if view.gauge.reached_threshold {
        lines.push(text::Line::from("Target of 90% reached"));
    }
    match view.vaccination {
        Some(split) => {
            lines.push(text::Line::from(format!(
                "Vaccinated: {}",
                format_count(split.vaccinated)
            )));
            lines.push(text::Line::from(format!(
                "Unvaccinated: {}",
                format_count(split.unvaccinated)
            )));
        }
        None => lines.push(text::Line::from(format!(
            "Vaccinated / Unvaccinated: {}",
            NO_DATA
        ))),
    }
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        *detail_chunk,
    );
}

pub(super) fn render_profile<B: Backend>(
    f: &mut Frame<'_, B>,
    state: &DashboardState,
    view: &DashboardView<'_>,
    area: Rect,
) {
    let accent = style_color(state.no_color, rgb(ACCENT_PROFILE_RGB));
    let lines: Vec<text::Line<'_>> = profile_lines(view)
        .into_iter()
        .map(|line| text::Line::from(Span::styled(line, accent)))
        .collect();
    f.render_widget(
        Paragraph::new(lines)
            .block(panel("Country Profile", state.no_color))
            .wrap(Wrap { trim: false }),
        area,
    );
}
