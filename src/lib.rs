//! Core of a regional insect guide.
//!
//! The crate holds the logic behind the guide's pages and leaves rendering to
//! the caller: a read-only [`Catalog`] of species, a pure [`search`] over it,
//! a persisted [`FavoritesLedger`] and [`ThemePreference`], and a paced
//! multiple-choice [`QuizEngine`]. [`Site`] bundles them into one
//! application-state object.
//!
//! ```ignore
//! use insect_atlas::{InMemoryStore, InsectId, Site};
//!
//! let mut site = Site::embedded(InMemoryStore::new())?;
//! site.set_query("коров");
//! assert_eq!(site.visible().len(), 1);
//!
//! site.toggle_favorite(InsectId(3))?;
//! site.quiz_mut().start();
//! ```

mod catalog;
mod config;
mod error;
mod favorites;
mod quiz;
mod search;
mod site;
mod storage;
mod theme;

pub use catalog::{
    Catalog, CatalogError, CatalogStatistics, InsectId, InsectRecord, MapPoint, EXPORT_FILE_NAME,
};
pub use config::{ConfigError, SiteConfig};
pub use error::Error;
pub use favorites::{decode_favorites, encode_favorites, FavoritesLedger, DEFAULT_FAVORITES_KEY};
pub use quiz::{
    AdvanceTarget, AdvanceTimer, AnswerOutcome, PendingAdvance, QuestionRecord, QuizBank,
    QuizEngine, QuizError, QuizPhase, QuizProgress, QuizResult, ResultTier, ScoreTiers,
    DEFAULT_ADVANCE_DELAY,
};
pub use search::{
    results_summary, search, search_with, Choice, FilterCriteria, Season, SeasonChoice,
    ALL_SEASONS_LABEL, DEFAULT_MIN_QUERY_CHARS, SEASON_LABELS,
};
pub use site::Site;
pub use storage::{InMemoryStore, JsonFileStore, KeyValueStore, StoreError};
pub use theme::{Theme, ThemePreference, DEFAULT_THEME_KEY};
