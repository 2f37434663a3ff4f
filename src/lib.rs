pub mod api;
pub mod cache;
pub mod config;
pub mod controllers;
pub mod debounce;
pub mod error;
pub mod instructions;
pub mod model;
pub mod navigator;
pub mod session;
pub mod youtube;

pub use api::{MealDbClient, RecipeApi};
pub use cache::{KeyPolicy, QueryCache};
pub use config::FinderConfig;
pub use controllers::{
    DetailController, DetailView, SearchController, SearchOutcome, SearchView, SuggestController,
    SuggestView,
};
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use error::SearchError;
pub use instructions::{parse_instructions, InstructionStep};
pub use model::{Ingredient, MealRecord, RecipeDetail, RecipeSummary, Suggestion};
pub use navigator::StepNavigator;
pub use session::RecipeSession;
pub use youtube::extract_video_id;

use log::debug;

/// Search TheMealDB by name using configuration from file and environment.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), recipe_finder::SearchError> {
/// let recipes = recipe_finder::search_recipes("chicken").await?;
/// for recipe in recipes {
///     println!("{} {}", recipe.id, recipe.name);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_recipes(query: &str) -> Result<Vec<RecipeSummary>, SearchError> {
    let config = FinderConfig::load()?;
    let session = RecipeSession::from_config(&config)?;
    session.search().search(query).await
}

/// Fetch one recipe by id.
pub async fn load_recipe(id: &str) -> Result<RecipeDetail, SearchError> {
    let config = FinderConfig::load()?;
    let session = RecipeSession::from_config(&config)?;
    let recipe = session.open_recipe(id).await?;
    debug!("{:#?}", recipe);
    Ok(recipe)
}
