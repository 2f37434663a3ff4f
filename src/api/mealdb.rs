use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::api::RecipeApi;
use crate::config::FinderConfig;
use crate::error::SearchError;
use crate::model::{MealRecord, MealsResponse};

/// TheMealDB over HTTP
pub struct MealDbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl MealDbClient {
    /// Create a new client from configuration
    pub fn new(config: &FinderConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("recipe-finder/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(MealDbClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        MealDbClient {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    async fn get_meals(
        &self,
        endpoint: &str,
        param: (&str, &str),
    ) -> Result<Vec<MealRecord>, SearchError> {
        let url = format!("{}/{}/{}", self.base_url, self.api_key, endpoint);
        debug!("GET {} {}={:?}", url, param.0, param.1);

        let response = self
            .client
            .get(&url)
            .query(&[param])
            .send()
            .await?
            .error_for_status()?;

        let body: MealsResponse = response.json().await?;
        Ok(body.meals.unwrap_or_default())
    }
}

#[async_trait]
impl RecipeApi for MealDbClient {
    fn api_name(&self) -> &str {
        "themealdb"
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<MealRecord>, SearchError> {
        self.get_meals("search.php", ("s", name)).await
    }

    async fn lookup_by_id(&self, id: &str) -> Result<Option<MealRecord>, SearchError> {
        let meals = self.get_meals("lookup.php", ("i", id)).await?;
        Ok(meals.into_iter().next())
    }
}
