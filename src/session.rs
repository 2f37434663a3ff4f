use std::sync::Arc;

use crate::api::{MealDbClient, RecipeApi};
use crate::cache::KeyPolicy;
use crate::config::FinderConfig;
use crate::controllers::{DetailController, SearchController, SuggestController};
use crate::error::SearchError;
use crate::model::{RecipeDetail, RecipeSummary, Suggestion};

/// One search experience: a single API client shared by the full-search,
/// suggestion and detail controllers, each with its own state and cache.
pub struct RecipeSession {
    search: SearchController,
    suggest: SuggestController,
    detail: DetailController,
}

impl RecipeSession {
    pub fn new(api: Arc<dyn RecipeApi>, config: &FinderConfig) -> Self {
        let policy = KeyPolicy::from_normalize(config.normalize_keys);
        Self {
            search: SearchController::new(Arc::clone(&api), policy),
            suggest: SuggestController::new(Arc::clone(&api), policy, config.debounce()),
            detail: DetailController::new(api),
        }
    }

    /// Session talking to TheMealDB as configured.
    pub fn from_config(config: &FinderConfig) -> Result<Self, SearchError> {
        let client = MealDbClient::new(config)?;
        Ok(Self::new(Arc::new(client), config))
    }

    pub fn search(&self) -> &SearchController {
        &self.search
    }

    pub fn suggest(&self) -> &SuggestController {
        &self.suggest
    }

    pub fn detail(&self) -> &DetailController {
        &self.detail
    }

    /// Keystroke in the search field.
    pub fn type_query(&self, text: &str) {
        self.suggest.on_input(text);
    }

    /// Form submit: close the suggestion panel and run a full search.
    pub async fn submit(&self, query: &str) -> Result<Vec<RecipeSummary>, SearchError> {
        self.suggest.hide();
        self.search.search(query).await
    }

    /// Pick a suggestion and search for its exact name straight away.
    pub async fn select_suggestion(
        &self,
        suggestion: &Suggestion,
    ) -> Result<Vec<RecipeSummary>, SearchError> {
        self.suggest.select(suggestion);
        self.search.search(&suggestion.name).await
    }

    pub async fn open_recipe(&self, id: &str) -> Result<RecipeDetail, SearchError> {
        self.detail.open(id).await
    }

    /// Cancel pending lookups before the session goes away.
    pub fn teardown(&self) {
        self.suggest.teardown();
        self.detail.close();
    }
}
