use log::{debug, error};
use std::sync::{Arc, Mutex};

use crate::api::RecipeApi;
use crate::cache::{KeyPolicy, QueryCache};
use crate::controllers::{lock, Tracked};
use crate::error::{SearchError, EMPTY_QUERY_MESSAGE, NO_RESULTS_MESSAGE};
use crate::model::RecipeSummary;

/// How the last settled search ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Results(Vec<RecipeSummary>),
    /// The API answered but nothing matched
    NoResults,
    /// Validation or transport failure, with the text to show
    Failed(String),
}

/// What the results page renders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchView {
    pub query: String,
    pub loading: bool,
    pub outcome: Option<SearchOutcome>,
}

impl SearchView {
    fn settled(query: &str, outcome: SearchOutcome) -> Self {
        SearchView {
            query: query.to_string(),
            loading: false,
            outcome: Some(outcome),
        }
    }

    fn from_results(query: &str, results: &[RecipeSummary]) -> Self {
        let outcome = if results.is_empty() {
            SearchOutcome::NoResults
        } else {
            SearchOutcome::Results(results.to_vec())
        };
        Self::settled(query, outcome)
    }

    pub fn results(&self) -> &[RecipeSummary] {
        match &self.outcome {
            Some(SearchOutcome::Results(results)) => results,
            _ => &[],
        }
    }

    /// Informational or error text, if any
    pub fn message(&self) -> Option<&str> {
        match &self.outcome {
            Some(SearchOutcome::NoResults) => Some(NO_RESULTS_MESSAGE),
            Some(SearchOutcome::Failed(message)) => Some(message),
            _ => None,
        }
    }
}

/// Full search: cache lookup, then remote fetch, then view update.
///
/// Overlapping calls are allowed; only the most recently issued one
/// writes the view.
pub struct SearchController {
    api: Arc<dyn RecipeApi>,
    cache: Mutex<QueryCache<Vec<RecipeSummary>>>,
    state: Mutex<Tracked<SearchView>>,
}

impl SearchController {
    pub fn new(api: Arc<dyn RecipeApi>, policy: KeyPolicy) -> Self {
        Self {
            api,
            cache: Mutex::new(QueryCache::new("search", policy)),
            state: Mutex::new(Tracked::default()),
        }
    }

    pub fn view(&self) -> SearchView {
        lock(&self.state).view.clone()
    }

    pub fn cached_queries(&self) -> usize {
        lock(&self.cache).len()
    }

    /// Run a search for `query`.
    ///
    /// A blank query fails with `ValidationError` without touching the cache
    /// or the network. Zero matches is `Ok` with an empty list and is cached;
    /// transport failures are not. The returned value is always this call's
    /// own result, even when a newer search has since taken over the view.
    pub async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, SearchError> {
        if query.trim().is_empty() {
            let mut state = lock(&self.state);
            state.issue();
            state.view = SearchView::settled(
                query,
                SearchOutcome::Failed(EMPTY_QUERY_MESSAGE.to_string()),
            );
            return Err(SearchError::ValidationError);
        }

        let cached = lock(&self.cache).get(query);
        if let Some(results) = cached {
            let mut state = lock(&self.state);
            state.issue();
            state.view = SearchView::from_results(query, &results);
            return Ok(results);
        }

        let generation = {
            let mut state = lock(&self.state);
            let generation = state.issue();
            state.view = SearchView {
                query: query.to_string(),
                loading: true,
                outcome: None,
            };
            generation
        };
        debug!(
            "Searching {} for {:?} (request {})",
            self.api.api_name(),
            query,
            generation
        );

        match self.api.search_by_name(query).await {
            Ok(records) => {
                let results: Vec<RecipeSummary> =
                    records.iter().map(RecipeSummary::from).collect();
                lock(&self.cache).put(query, results.clone());

                let applied = lock(&self.state).apply_if_current(generation, |view| {
                    *view = SearchView::from_results(query, &results)
                });
                if !applied {
                    debug!("Discarding stale results for {:?} (request {})", query, generation);
                }
                Ok(results)
            }
            Err(err) => {
                error!("Error fetching recipes for {:?}: {}", query, err);
                lock(&self.state).apply_if_current(generation, |view| {
                    *view = SearchView::settled(
                        query,
                        SearchOutcome::Failed(err.user_message().to_string()),
                    )
                });
                Err(err)
            }
        }
    }
}
