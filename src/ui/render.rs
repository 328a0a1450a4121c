mod charts;
mod frame;
mod lifecycle;
mod panels;
mod theme;

pub use frame::draw_frame;
pub use lifecycle::{Ui, UiActions, run_dashboard};
