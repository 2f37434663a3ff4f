use thiserror::Error;

/// Message shown when a search is submitted without any text
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search term.";
/// Message shown when a search succeeded but matched nothing
pub const NO_RESULTS_MESSAGE: &str = "No recipes found. Please try a different search term.";
/// Message shown when the recipe search could not be fetched
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to fetch recipes. Please try again.";
/// Message shown when a recipe id does not exist
pub const RECIPE_NOT_FOUND_MESSAGE: &str = "Recipe not found.";
/// Message shown when a recipe's details could not be fetched
pub const DETAIL_FAILED_MESSAGE: &str = "Failed to fetch recipe details. Please try again.";

/// Errors that can occur while searching or loading recipes
#[derive(Error, Debug)]
pub enum SearchError {
    /// The query was empty or whitespace only
    #[error("{}", EMPTY_QUERY_MESSAGE)]
    ValidationError,

    /// Transport or decoding failure talking to the recipe API
    #[error("Failed to fetch: {0}")]
    FetchError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The request was valid but nothing matched
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::FetchError(Box::new(err))
    }
}

impl SearchError {
    /// Build a fetch error from a plain description.
    pub fn fetch(message: impl Into<String>) -> Self {
        let message: String = message.into();
        SearchError::FetchError(message.into())
    }

    /// Text to show the user for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::ValidationError => EMPTY_QUERY_MESSAGE,
            SearchError::NotFoundError(_) => RECIPE_NOT_FOUND_MESSAGE,
            SearchError::FetchError(_) | SearchError::ConfigError(_) => SEARCH_FAILED_MESSAGE,
        }
    }

    /// Whether a retry could succeed without the user changing anything.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SearchError::FetchError(_))
    }
}
