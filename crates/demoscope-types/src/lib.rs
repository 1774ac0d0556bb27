// Types layer - schema of the dataset snapshot consumed by every other crate.
// Holds no I/O and no rendering concerns; the loaders live in demoscope-runtime.

mod country;
mod status;

pub use country::{Country, CountryDocument, Episode, RecentEvent, TrendPoint};
pub use status::{Severity, StatusIndicator};
