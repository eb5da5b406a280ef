use log::{debug, warn};
use reqwest::blocking::Client;
use std::time::Duration;

use crate::config::{FinderConfig, DEFAULT_BASE_URL};
use crate::model::{MealLookup, MealRecord, MealsEnvelope, RecipeDetail, RecipeSummary};
use crate::FinderError;

const DEFAULT_USER_AGENT: &str = concat!("recipe-finder/", env!("CARGO_PKG_VERSION"));

/// The calls the interactive front end needs from a recipe backend
pub trait RecipeSource {
    /// Names matching `query`, or the single "No recipe found." placeholder
    fn search_by_name(&self, query: &str) -> Result<Vec<RecipeSummary>, FinderError>;

    /// Detail and image of the first meal matching `query`
    fn lookup(&self, query: &str) -> Result<Option<MealLookup>, FinderError>;

    /// A random meal; `None` when the API returned no meals
    fn fetch_random(&self) -> Result<Option<MealLookup>, FinderError>;

    /// Raw bytes of a thumbnail image
    fn fetch_image(&self, url: &str) -> Result<Vec<u8>, FinderError>;
}

/// Blocking client for TheMealDB JSON API
#[derive(Debug, Clone)]
pub struct MealDbClient {
    http: Client,
    base_url: String,
}

/// Builder for configuring a [`MealDbClient`]
#[derive(Debug, Default)]
pub struct MealDbClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl MealDbClientBuilder {
    /// Point the client at another API root (a mirror or a test server)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a request timeout; without one the reqwest default applies
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<MealDbClient, FinderError> {
        let mut http = Client::builder()
            .user_agent(self.user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()));
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(MealDbClient {
            http: http.build()?,
            base_url,
        })
    }
}

impl MealDbClient {
    pub fn builder() -> MealDbClientBuilder {
        MealDbClientBuilder::default()
    }

    pub fn new() -> Result<Self, FinderError> {
        Self::builder().build()
    }

    pub fn from_config(config: &FinderConfig) -> Result<Self, FinderError> {
        let mut builder = Self::builder().base_url(&config.base_url);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET an endpoint and parse the `{"meals": ...}` envelope.
    fn get_envelope(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<MealsEnvelope, FinderError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} {:?}", url, query);

        let body = self
            .http
            .get(&url)
            .query(query)
            .send()?
            .error_for_status()?
            .text()?;

        let envelope: MealsEnvelope = serde_json::from_str(&body).map_err(|e| {
            warn!("Unexpected response from {}: {}", url, e);
            FinderError::MalformedResponse(e)
        })?;
        Ok(envelope)
    }

    /// Meals from an endpoint; null or absent `meals` becomes empty.
    fn get_meals(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Vec<MealRecord>, FinderError> {
        Ok(self.get_envelope(endpoint, query)?.into_meals())
    }

    fn search(&self, query: &str) -> Result<Vec<MealRecord>, FinderError> {
        self.get_meals("search.php", &[("s", query)])
    }

    /// Search meals by name, in API order.
    ///
    /// Only a null or absent `meals` field yields the placeholder; an empty
    /// array yields an empty list.
    pub fn search_by_name(&self, query: &str) -> Result<Vec<RecipeSummary>, FinderError> {
        let envelope = self.get_envelope("search.php", &[("s", query)])?;
        let Some(meals) = envelope.meals else {
            debug!("No meals for {:?}", query);
            return Ok(vec![RecipeSummary::placeholder()]);
        };
        Ok(meals
            .into_iter()
            .map(|meal| RecipeSummary::new(meal.name))
            .collect())
    }

    /// Detail of the first meal matching `query`. Issues its own search.
    pub fn fetch_details(&self, query: &str) -> Result<Option<RecipeDetail>, FinderError> {
        Ok(self.search(query)?.first().map(RecipeDetail::from))
    }

    /// Thumbnail URL of the first meal matching `query`, or an empty string.
    pub fn fetch_image_url(&self, query: &str) -> Result<String, FinderError> {
        Ok(self
            .search(query)?
            .first()
            .map(|meal| meal.image_ref().url)
            .unwrap_or_default())
    }

    /// Detail and image of the first match from one search round trip.
    pub fn lookup(&self, query: &str) -> Result<Option<MealLookup>, FinderError> {
        Ok(self.search(query)?.first().map(MealLookup::from))
    }

    pub fn fetch_random(&self) -> Result<Option<MealLookup>, FinderError> {
        let meals = self.get_meals("random.php", &[])?;
        if meals.is_empty() {
            warn!("Random endpoint returned no meals");
        }
        Ok(meals.first().map(MealLookup::from))
    }

    pub fn fetch_image(&self, url: &str) -> Result<Vec<u8>, FinderError> {
        debug!("GET image {}", url);
        let bytes = self.http.get(url).send()?.error_for_status()?.bytes()?;
        Ok(bytes.to_vec())
    }
}

impl RecipeSource for MealDbClient {
    fn search_by_name(&self, query: &str) -> Result<Vec<RecipeSummary>, FinderError> {
        MealDbClient::search_by_name(self, query)
    }

    fn lookup(&self, query: &str) -> Result<Option<MealLookup>, FinderError> {
        MealDbClient::lookup(self, query)
    }

    fn fetch_random(&self) -> Result<Option<MealLookup>, FinderError> {
        MealDbClient::fetch_random(self)
    }

    fn fetch_image(&self, url: &str) -> Result<Vec<u8>, FinderError> {
        MealDbClient::fetch_image(self, url)
    }
}
