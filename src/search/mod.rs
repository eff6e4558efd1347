//! Filter/Search Engine.
//!
//! [`search`] derives the visible subset of a catalog from a
//! [`FilterCriteria`]. It is a pure function: the same inputs always give the
//! same records, in catalog order.

mod criteria;
mod engine;
mod season;

pub use criteria::{Choice, FilterCriteria, SeasonChoice};
pub use engine::{results_summary, search, search_with, DEFAULT_MIN_QUERY_CHARS};
pub use season::{Season, ALL_SEASONS_LABEL, SEASON_LABELS};
