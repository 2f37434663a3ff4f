mod mealdb;

pub use mealdb::MealDbClient;

use async_trait::async_trait;

use crate::error::SearchError;
use crate::model::MealRecord;

/// The remote recipe database
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Get the backend name (e.g., "themealdb")
    fn api_name(&self) -> &str;

    /// Recipes whose name matches the fragment, in the order the API returns
    /// them. No matches is `Ok` with an empty list.
    async fn search_by_name(&self, name: &str) -> Result<Vec<MealRecord>, SearchError>;

    /// A single recipe by exact id, or `None` when the id is unknown.
    async fn lookup_by_id(&self, id: &str) -> Result<Option<MealRecord>, SearchError>;
}
