// Engine module - pure derivation logic between the dataset snapshot (types)
// and the CLI presentation. Nothing in this crate performs I/O or touches the
// terminal; every function here is a projection from data to a description.

pub mod choropleth;
pub mod criteria;
mod derive;
pub mod format;
pub mod trend;

pub use choropleth::{country_name_for_id, status_fill, Rgb, NO_DATA_FILL, TRACKED_COUNTRY_IDS};
pub use criteria::{Criteria, SortKey, SortOrder, StatusFilter};
pub use derive::derive;
pub use trend::{build_trend_chart, TrendChart, TrendDirection};
