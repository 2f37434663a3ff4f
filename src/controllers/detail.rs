use log::{debug, error};
use std::sync::{Arc, Mutex};

use crate::api::RecipeApi;
use crate::controllers::{lock, Tracked};
use crate::error::{SearchError, DETAIL_FAILED_MESSAGE, RECIPE_NOT_FOUND_MESSAGE};
use crate::model::RecipeDetail;
use crate::navigator::StepNavigator;

/// The recipe detail page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailView {
    #[default]
    Closed,
    Loading {
        id: String,
    },
    Ready {
        recipe: Box<RecipeDetail>,
        navigator: StepNavigator,
    },
    NotFound {
        id: String,
    },
    Failed {
        id: String,
    },
}

impl DetailView {
    pub fn recipe(&self) -> Option<&RecipeDetail> {
        match self {
            DetailView::Ready { recipe, .. } => Some(recipe.as_ref()),
            _ => None,
        }
    }

    pub fn navigator(&self) -> Option<&StepNavigator> {
        match self {
            DetailView::Ready { navigator, .. } => Some(navigator),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DetailView::Loading { .. })
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            DetailView::NotFound { .. } => Some(RECIPE_NOT_FOUND_MESSAGE),
            DetailView::Failed { .. } => Some(DETAIL_FAILED_MESSAGE),
            _ => None,
        }
    }
}

/// Loads one recipe by id and tracks the reader's place in its steps.
///
/// Each `open` builds a fresh navigator at step 0. Only the most recent
/// `open` may write the view.
pub struct DetailController {
    api: Arc<dyn RecipeApi>,
    state: Mutex<Tracked<DetailView>>,
}

impl DetailController {
    pub fn new(api: Arc<dyn RecipeApi>) -> Self {
        Self {
            api,
            state: Mutex::new(Tracked::default()),
        }
    }

    pub fn view(&self) -> DetailView {
        lock(&self.state).view.clone()
    }

    pub async fn open(&self, id: &str) -> Result<RecipeDetail, SearchError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(SearchError::ValidationError);
        }

        let generation = {
            let mut state = lock(&self.state);
            let generation = state.issue();
            state.view = DetailView::Loading { id: id.to_string() };
            generation
        };
        debug!("Looking up recipe {} (request {})", id, generation);

        let (result, view) = match self.api.lookup_by_id(id).await {
            Ok(Some(record)) => {
                let recipe = RecipeDetail::from(record);
                let navigator = StepNavigator::new(recipe.steps());
                let view = DetailView::Ready {
                    recipe: Box::new(recipe.clone()),
                    navigator,
                };
                (Ok(recipe), view)
            }
            Ok(None) => (
                Err(SearchError::NotFoundError(id.to_string())),
                DetailView::NotFound { id: id.to_string() },
            ),
            Err(err) => {
                error!("Error fetching recipe {}: {}", id, err);
                (Err(err), DetailView::Failed { id: id.to_string() })
            }
        };

        if !lock(&self.state).apply_if_current(generation, |current| *current = view) {
            debug!("Discarding stale lookup for recipe {}", id);
        }
        result
    }

    /// Leave the detail page; any lookup still running is ignored.
    pub fn close(&self) {
        let mut state = lock(&self.state);
        state.issue();
        state.view = DetailView::Closed;
    }

    pub fn next_step(&self) -> bool {
        self.with_navigator(StepNavigator::next)
    }

    pub fn prev_step(&self) -> bool {
        self.with_navigator(StepNavigator::prev)
    }

    pub fn go_to_step(&self, index: usize) -> bool {
        self.with_navigator(|navigator| navigator.go_to(index))
    }

    fn with_navigator(&self, step: impl FnOnce(&mut StepNavigator) -> bool) -> bool {
        let mut state = lock(&self.state);
        match &mut state.view {
            DetailView::Ready { navigator, .. } => step(navigator),
            _ => false,
        }
    }
}
