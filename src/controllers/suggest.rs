use log::{debug, warn};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::api::RecipeApi;
use crate::cache::{KeyPolicy, QueryCache};
use crate::controllers::{lock, Tracked};
use crate::debounce::Debouncer;
use crate::model::Suggestion;

/// The suggestion panel under the search field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestView {
    /// Current text of the search field
    pub query: String,
    pub visible: bool,
    pub suggestions: Vec<Suggestion>,
}

struct SuggestShared {
    api: Arc<dyn RecipeApi>,
    cache: Mutex<QueryCache<Vec<Suggestion>>>,
    state: Mutex<Tracked<SuggestView>>,
}

impl SuggestShared {
    async fn fetch(&self, query: &str, generation: u64) -> Vec<Suggestion> {
        let cached = lock(&self.cache).get(query);
        let suggestions = match cached {
            Some(suggestions) => suggestions,
            None => match self.api.search_by_name(query).await {
                Ok(records) => {
                    let suggestions: Vec<Suggestion> =
                        records.iter().map(Suggestion::from).collect();
                    lock(&self.cache).put(query, suggestions.clone());
                    suggestions
                }
                Err(err) => {
                    // Suggestions are best-effort; never surface this
                    warn!("Suggestion lookup for {:?} failed: {}", query, err);
                    Vec::new()
                }
            },
        };

        let applied = lock(&self.state).apply_if_current(generation, |view| {
            view.suggestions = suggestions.clone();
        });
        if !applied {
            debug!("Discarding stale suggestions for {:?}", query);
        }
        suggestions
    }
}

/// Keystroke-driven suggestions, debounced and cached separately from full
/// search.
pub struct SuggestController {
    shared: Arc<SuggestShared>,
    debouncer: Mutex<Debouncer>,
    delay: Duration,
}

impl SuggestController {
    pub fn new(api: Arc<dyn RecipeApi>, policy: KeyPolicy, delay: Duration) -> Self {
        Self {
            shared: Arc::new(SuggestShared {
                api,
                cache: Mutex::new(QueryCache::new("suggest", policy)),
                state: Mutex::new(Tracked::default()),
            }),
            debouncer: Mutex::new(Debouncer::new()),
            delay,
        }
    }

    pub fn view(&self) -> SuggestView {
        lock(&self.shared.state).view.clone()
    }

    pub fn is_pending(&self) -> bool {
        lock(&self.debouncer).is_pending()
    }

    /// Handle the search field changing to `query`.
    ///
    /// Blank input hides and clears the panel right away. Anything else shows
    /// the panel now and schedules a lookup after the debounce delay. Must be
    /// called from within a tokio runtime.
    pub fn on_input(&self, query: &str) {
        let mut debouncer = lock(&self.debouncer);
        if query.trim().is_empty() {
            debouncer.cancel();
            let mut state = lock(&self.shared.state);
            state.issue();
            state.view = SuggestView {
                query: query.to_string(),
                visible: false,
                suggestions: Vec::new(),
            };
            return;
        }

        let generation = {
            let mut state = lock(&self.shared.state);
            let generation = state.issue();
            state.view.query = query.to_string();
            state.view.visible = true;
            generation
        };

        let shared = Arc::clone(&self.shared);
        let query = query.to_string();
        debouncer.schedule(self.delay, async move {
            shared.fetch(&query, generation).await;
        });
    }

    /// Look up suggestions for `query` now, bypassing the debounce.
    pub async fn fetch_suggestions(&self, query: &str) -> Vec<Suggestion> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let generation = lock(&self.shared.state).issue();
        self.shared.fetch(query, generation).await
    }

    /// Take a suggestion: the field becomes its name and the panel closes.
    pub fn select(&self, suggestion: &Suggestion) {
        lock(&self.debouncer).cancel();
        let mut state = lock(&self.shared.state);
        state.issue();
        state.view = SuggestView {
            query: suggestion.name.clone(),
            visible: false,
            suggestions: Vec::new(),
        };
    }

    /// Close the panel without changing the field text.
    pub fn hide(&self) {
        lock(&self.debouncer).cancel();
        let mut state = lock(&self.shared.state);
        state.issue();
        state.view.visible = false;
    }

    /// Stop any pending lookup and ignore any still in flight.
    pub fn teardown(&self) {
        lock(&self.debouncer).cancel();
        lock(&self.shared.state).issue();
    }
}
