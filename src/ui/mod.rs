//! Interactive terminal dashboard.
mod model;
mod render;


pub use model::{DashboardState, UiAction, handle_key};
pub use render::{Ui, UiActions, draw_frame, run_dashboard};
