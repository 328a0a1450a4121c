use chrono::{Days, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::dataset::Dataset;
use crate::metrics::{DashboardView, DateRange, Selection, ViewOptions, compute};

/// Rows skipped by PageUp/PageDown in the country list.
pub(crate) const PAGE_STEP: usize = 10;
/// Days moved by the range keys.
pub(crate) const RANGE_STEP_DAYS: i64 = 7;

/// Interactive state of the dashboard. Each key press mutates it and the
/// view is rebuilt from scratch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    pub countries: Vec<String>,
    pub selected: usize,
    pub range: DateRange,
    pub default_range: DateRange,
    pub options: ViewOptions,
    pub no_color: bool,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Continue,
    Quit,
    ExportCharts,
}

impl DashboardState {
    #[must_use]
    pub fn new(
        countries: Vec<String>,
        country: &str,
        range: DateRange,
        default_range: DateRange,
        options: ViewOptions,
    ) -> Self {
        let selected = countries
            .iter()
            .position(|candidate| candidate == country)
            .unwrap_or(0);
        Self {
            countries,
            selected,
            range,
            default_range,
            options,
            no_color: false,
            status: None,
        }
    }

    #[must_use]
    pub const fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.countries.get(self.selected).map(String::as_str)
    }

    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.country()
            .map(|country| Selection::new(country, Some(self.range)))
    }

    /// Rebuilds the view for the current selection.
    #[must_use]
    pub fn view<'data>(&self, dataset: &'data Dataset) -> Option<DashboardView<'data>> {
        self.selection()
            .map(|selection| compute(dataset, &selection, self.options))
    }

    fn select(&mut self, index: usize) {
        let last = self.countries.len().saturating_sub(1);
        self.selected = index.min(last);
    }

    fn move_selection(&mut self, step: usize, forward: bool) {
        let target = if forward {
            self.selected.saturating_add(step)
        } else {
            self.selected.saturating_sub(step)
        };
        self.select(target);
    }

    fn shift_start(&mut self, days: i64) {
        self.range.start = shift_date(self.range.start, days);
    }

    fn shift_end(&mut self, days: i64) {
        self.range.end = shift_date(self.range.end, days);
    }
}

fn shift_date(date: NaiveDate, days: i64) -> NaiveDate {
    let step = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        date.checked_add_days(step)
    } else {
        date.checked_sub_days(step)
    };
    shifted.unwrap_or(date)
}

/// Applies one key press to `state`.
///
/// The range keys may invert the range; the engine then reports no data
/// instead of clamping.
pub fn handle_key(state: &mut DashboardState, key: KeyEvent) -> UiAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return UiAction::Quit;
    }

    match key.code {
        KeyCode::Char('q' | 'Q') => return UiAction::Quit,
        KeyCode::Char('e') => return UiAction::ExportCharts,
        KeyCode::Up => state.move_selection(1, false),
        KeyCode::Down => state.move_selection(1, true),
        KeyCode::PageUp => state.move_selection(PAGE_STEP, false),
        KeyCode::PageDown => state.move_selection(PAGE_STEP, true),
        KeyCode::Home => state.select(0),
        KeyCode::End => state.select(usize::MAX),
        KeyCode::Char('t') => state.options.show_trends = !state.options.show_trends,
        KeyCode::Char('m') => state.options.moving_average = !state.options.moving_average,
        KeyCode::Char('[') => state.shift_start(-RANGE_STEP_DAYS),
        KeyCode::Char(']') => state.shift_start(RANGE_STEP_DAYS),
        KeyCode::Char('{') => state.shift_end(-RANGE_STEP_DAYS),
        KeyCode::Char('}') => state.shift_end(RANGE_STEP_DAYS),
        KeyCode::Char('r') => state.range = state.default_range,
        _ => return UiAction::Continue,
    }
    state.status = None;
    UiAction::Continue
}
