use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, prelude::Backend};

use crate::charts::write_charts;
use crate::dataset::Dataset;
use crate::error::AppResult;
use crate::metrics::DashboardView;
use crate::ui::model::{DashboardState, UiAction, handle_key};

use super::frame::draw_frame;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub trait UiActions {
    /// Initializes the terminal for UI rendering.
    ///
    /// # Errors
    ///
    /// Returns an error when terminal setup fails.
    fn setup_terminal() -> AppResult<Terminal<CrosstermBackend<io::Stdout>>>;
    fn cleanup();
    fn render<B: Backend>(
        terminal: &mut Terminal<B>,
        state: &DashboardState,
        view: Option<&DashboardView<'_>>,
    );
}

pub struct Ui;

impl UiActions for Ui {
    fn setup_terminal() -> AppResult<Terminal<CrosstermBackend<io::Stdout>>> {
        enable_raw_mode()?;
        if let Err(err) = execute!(io::stdout(), EnterAlternateScreen) {
            disable_raw_mode().ok();
            return Err(err.into());
        }

        let backend = CrosstermBackend::new(io::stdout());
        match Terminal::new(backend) {
            Ok(mut terminal) => {
                if let Err(err) = terminal.clear() {
                    Self::cleanup();
                    return Err(err.into());
                }
                Ok(terminal)
            }
            Err(err) => {
                Self::cleanup();
                Err(err.into())
            }
        }
    }

    fn cleanup() {
        disable_raw_mode().ok();
        execute!(io::stdout(), LeaveAlternateScreen).ok();
    }

    fn render<B: Backend>(
        terminal: &mut Terminal<B>,
        state: &DashboardState,
        view: Option<&DashboardView<'_>>,
    ) {
        if let Err(err) = terminal.draw(|f| draw_frame(f, state, view)) {
            tracing::error!("Failed to render UI: {}", err);
        }
    }
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        Ui::cleanup();
    }
}

/// Runs the interactive dashboard until the user quits.
///
/// # Errors
///
/// Returns an error when the terminal cannot be set up or terminal events
/// cannot be read. Chart export failures are reported in the status line.
pub fn run_dashboard(
    dataset: &Dataset,
    mut state: DashboardState,
    charts_path: &Path,
) -> AppResult<()> {
    let mut terminal = Ui::setup_terminal()?;
    let _guard = TerminalGuard;

    let mut view = state.view(dataset);
    loop {
        Ui::render(&mut terminal, &state, view.as_ref());

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match handle_key(&mut state, key) {
            UiAction::Quit => break,
            UiAction::ExportCharts => {
                state.status = Some(export_status(view.as_ref(), charts_path));
                // Export logs to stderr, which shares the screen.
                terminal.clear()?;
            }
            UiAction::Continue => {}
        }
        view = state.view(dataset);
    }

    Ok(())
}

fn export_status(view: Option<&DashboardView<'_>>, charts_path: &Path) -> String {
    let Some(view) = view else {
        return "Nothing to export".to_owned();
    };
    match write_charts(view, charts_path) {
        Ok(written) if written.is_empty() => {
            format!("No data for {}; nothing exported", view.selection.entity)
        }
        Ok(written) => format!(
            "Exported {} charts to {}",
            written.len(),
            charts_path.display()
        ),
        Err(err) => {
            tracing::error!("Chart export failed: {}", err);
            format!("Chart export failed: {}", err)
        }
    }
}
