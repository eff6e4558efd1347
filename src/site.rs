//! Application state handed to the presentation layer.

use crate::catalog::{Catalog, InsectId, InsectRecord};
use crate::config::SiteConfig;
use crate::error::Error;
use crate::favorites::FavoritesLedger;
use crate::quiz::{AdvanceTarget, PendingAdvance, QuizBank, QuizEngine, QuizError, QuizPhase};
use crate::search::{self, Choice, FilterCriteria, SeasonChoice};
use crate::storage::{KeyValueStore, StoreError};
use crate::theme::{Theme, ThemePreference};

/// Everything the pages need, owned in one place.
///
/// Handlers mutate state and return; the caller re-reads what it renders
/// (`visible`, `favorites`, `quiz`, ...) afterwards. The store is cloned into
/// the favorites ledger and the theme preference, so pass something that
/// shares its storage on clone (`InMemoryStore`, `Arc<JsonFileStore>`).
pub struct Site<S> {
    config: SiteConfig,
    catalog: Catalog,
    criteria: FilterCriteria,
    favorites: FavoritesLedger<S>,
    theme: ThemePreference<S>,
    quiz: QuizEngine,
}

impl<S: KeyValueStore + Clone> Site<S> {
    pub fn new(config: SiteConfig, catalog: Catalog, bank: QuizBank, store: S) -> Self {
        let favorites =
            FavoritesLedger::load_with_key(store.clone(), config.favorites_key.as_str());
        let theme = ThemePreference::load_with_key(store, config.theme_key.as_str());
        let quiz = QuizEngine::new(bank)
            .with_advance_delay(config.advance_delay())
            .with_tiers(config.tiers);

        Site {
            config,
            catalog,
            criteria: FilterCriteria::default(),
            favorites,
            theme,
            quiz,
        }
    }

    /// Site over the bundled catalog and question bank.
    pub fn embedded(store: S) -> Result<Self, Error> {
        Self::embedded_with_config(SiteConfig::default(), store)
    }

    pub fn embedded_with_config(config: SiteConfig, store: S) -> Result<Self, Error> {
        let catalog = Catalog::embedded()?;
        let bank = QuizBank::embedded()?;
        Ok(Self::new(config, catalog, bank, store))
    }
}

impl<S: KeyValueStore> Site<S> {
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    // Filters

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria.query = query.into();
    }

    pub fn set_type_filter(&mut self, value: &str) {
        self.criteria.kind = Choice::parse(value);
    }

    pub fn set_rarity_filter(&mut self, value: &str) {
        self.criteria.rarity = Choice::parse(value);
    }

    pub fn set_season(&mut self, label: &str) {
        self.criteria.season = SeasonChoice::parse(label);
    }

    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    /// Cards to show under the current criteria.
    pub fn visible(&self) -> Vec<&InsectRecord> {
        search::search_with(&self.catalog, &self.criteria, self.config.min_query_chars)
    }

    pub fn results_summary(&self) -> String {
        search::results_summary(self.visible().len())
    }

    /// Record for the detail view.
    pub fn details(&self, id: InsectId) -> Option<&InsectRecord> {
        self.catalog.get(id)
    }

    // Favorites

    pub fn is_favorite(&self, id: InsectId) -> bool {
        self.favorites.is_favorite(id)
    }

    pub fn toggle_favorite(&mut self, id: InsectId) -> Result<bool, StoreError> {
        self.favorites.toggle(id)
    }

    pub fn favorites(&self) -> Vec<&InsectRecord> {
        self.favorites.list(&self.catalog)
    }

    // Theme

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn toggle_theme(&mut self) -> Result<Theme, StoreError> {
        self.theme.toggle()
    }

    // Quiz

    pub fn quiz(&self) -> &QuizEngine {
        &self.quiz
    }

    pub fn quiz_mut(&mut self) -> &mut QuizEngine {
        &mut self.quiz
    }
}

impl<S: KeyValueStore> AdvanceTarget for Site<S> {
    fn advance_pending(&mut self, pending: PendingAdvance) -> Result<QuizPhase, QuizError> {
        self.quiz.advance_pending(pending)
    }
}
