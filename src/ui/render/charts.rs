use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::{Backend, Frame},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, GraphType, Paragraph},
};

use crate::charts::series::{
    Point, date_label, derived_points, observation_points, segments, value_range, x_range,
};
use crate::dataset::Observation;
use crate::metrics::DashboardView;
use crate::summary::format::format_count;
use crate::ui::model::DashboardState;

use super::theme::{
    ACCENT_AVERAGE_RGB, ACCENT_CASES_RGB, ACCENT_DEATHS_RGB, CHART_COL_LEFT, CHART_COL_RIGHT,
    axis_style, panel_block_style, panel_border_style, panel_title_style, rgb, style_color,
};

struct ChartLine {
    name: String,
    color: (u8, u8, u8),
    graph_type: GraphType,
    segments: Vec<Vec<Point>>,
}

struct PreparedChart {
    title: String,
    y_title: &'static str,
    lines: Vec<ChartLine>,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
    x_labels: Vec<String>,
    y_labels: Vec<String>,
}

pub fn render_charts<B: Backend>(
    f: &mut Frame<'_, B>,
    state: &DashboardState,
    view: &DashboardView<'_>,
    area: Rect,
) {
    if view.is_empty() {
        let notice = Paragraph::new(format!(
            "No data for {} in the selected range.",
            view.selection.entity
        ))
        .block(
            Block::default()
                .title("Trends")
                .borders(Borders::ALL)
                .style(panel_block_style(state.no_color))
                .border_style(panel_border_style(state.no_color))
                .title_style(panel_title_style(state.no_color)),
        );
        f.render_widget(notice, area);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(CHART_COL_LEFT),
            Constraint::Percentage(CHART_COL_RIGHT),
        ])
        .split(area);
    let (cases_chunk, cfr_chunk) = match columns.as_ref() {
        [a, b] => (a, b),
        _ => return,
    };

    render_prepared(f, state, &cases_chart(view), *cases_chunk);
    render_prepared(f, state, &cfr_chart(view), *cfr_chunk);
}

fn cases_chart(view: &DashboardView<'_>) -> PreparedChart {
    let new_cases = observation_points(view, Observation::NewCases);
    let graph_type = if view.options.show_trends {
        GraphType::Line
    } else {
        GraphType::Scatter
    };
    let mut lines = vec![ChartLine {
        name: "New Cases".to_owned(),
        color: ACCENT_CASES_RGB,
        graph_type,
        segments: segments(&new_cases),
    }];
    if let Some(window) = view.derived.rolling_window {
        let average = derived_points(view, |point| point.new_cases_average);
        lines.push(ChartLine {
            name: format!("{}-day avg", window),
            color: ACCENT_AVERAGE_RGB,
            graph_type: GraphType::Line,
            segments: segments(&average),
        });
    }

    prepare(
        view,
        format!("{}: Daily New Cases", view.selection.entity),
        "Cases",
        lines,
        format_count,
    )
}

fn cfr_chart(view: &DashboardView<'_>) -> PreparedChart {
    let cfr = derived_points(view, |point| point.case_fatality_ratio);
    let lines = vec![ChartLine {
        name: "CFR %".to_owned(),
        color: ACCENT_DEATHS_RGB,
        graph_type: GraphType::Line,
        segments: segments(&cfr),
    }];
    prepare(
        view,
        "Case Fatality Rate (%)".to_owned(),
        "CFR %",
        lines,
        |value| format!("{value:.2}"),
    )
}

fn prepare(
    view: &DashboardView<'_>,
    title: String,
    y_title: &'static str,
    lines: Vec<ChartLine>,
    y_label: fn(f64) -> String,
) -> PreparedChart {
    let axis_points = observation_points(view, Observation::NewCases);
    let x = x_range(&axis_points);
    let y = value_range(
        lines
            .iter()
            .flat_map(|line| line.segments.iter().flatten().map(|(_, y)| *y)),
    );

    let x_labels = view.first_date().map_or_else(Vec::new, |first| {
        let mid = (x.start + x.end) / 2.0;
        vec![
            date_label(first, x.start.max(0.0)),
            date_label(first, mid),
            date_label(first, x.end - 0.5),
        ]
    });
    let y_labels = vec![
        y_label(y.start),
        y_label((y.start + y.end) / 2.0),
        y_label(y.end),
    ];

    PreparedChart {
        title,
        y_title,
        lines,
        x_bounds: [x.start, x.end],
        y_bounds: [y.start, y.end],
        x_labels,
        y_labels,
    }
}

fn render_prepared<B: Backend>(
    f: &mut Frame<'_, B>,
    state: &DashboardState,
    chart: &PreparedChart,
    area: Rect,
) {
    let mut datasets = Vec::new();
    for line in &chart.lines {
        for (idx, segment) in line.segments.iter().enumerate() {
            let mut dataset = ratatui::widgets::Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(line.graph_type)
                .style(style_color(state.no_color, rgb(line.color)))
                .data(segment);
            if idx == 0 {
                dataset = dataset.name(line.name.as_str());
            }
            datasets.push(dataset);
        }
    }

    let widget = Chart::new(datasets)
        .style(panel_block_style(state.no_color))
        .block(
            Block::default()
                .title(chart.title.as_str())
                .borders(Borders::ALL)
                .style(panel_block_style(state.no_color))
                .border_style(panel_border_style(state.no_color))
                .title_style(panel_title_style(state.no_color)),
        )
        .x_axis(
            Axis::default()
                .title("Date")
                .style(axis_style(state.no_color))
                .bounds(chart.x_bounds)
                .labels(chart.x_labels.iter().map(|label| Span::raw(label.as_str())).collect()),
        )
        .y_axis(
            Axis::default()
                .title(chart.y_title)
                .style(axis_style(state.no_color))
                .bounds(chart.y_bounds)
                .labels(chart.y_labels.iter().map(|label| Span::raw(label.as_str())).collect()),
        );
    f.render_widget(widget, area);
}
