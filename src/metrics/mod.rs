//! Filtering and derived-metric computation between the dataset and the renderers.
//!
//! Every function here is a pure function of its inputs. Missing data never
//! produces an error: it surfaces as `None` or as a presence flag so callers
//! can render "no data" distinctly from a real zero.
mod derive;
mod filter;
mod selection;
mod snapshot;
mod view;


pub use derive::{
    DEFAULT_ROLLING_WINDOW, DerivedPoint, DerivedSeries, case_fatality_ratio, derive,
    derive_ratio, rolling_average, vaccination_rate,
};
pub use filter::{FilteredSeries, filter};
pub use selection::{DateRange, Selection, ViewOptions};
pub use snapshot::{Snapshot, SnapshotField, snapshot};
pub use view::{
    CountryProfile, DashboardView, GAUGE_REFERENCE_PERCENT, GAUGE_THRESHOLD_PERCENT,
    VaccinationBreakdown, VaccinationGauge, compute, country_profile, vaccination_breakdown,
    vaccination_gauge,
};
