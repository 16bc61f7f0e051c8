use crate::domain::{
    ApiError, Person, PersonCollection, ResourceKind, Starship, StarshipCollection, SwapiProvider,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;

// Thin wrapper around reqwest for SWAPI calls.
#[derive(Clone)]
pub struct SwapiClient {
    http: Client,
    base_url: String,
}

#[derive(Debug)]
pub enum SwapiClientError {
    Transport(reqwest::Error),
    Upstream { status: StatusCode },
    Decode(reqwest::Error),
}

impl fmt::Display for SwapiClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapiClientError::Transport(err) => write!(f, "swapi transport error: {err}"),
            SwapiClientError::Upstream { status } => write!(f, "swapi upstream error {status}"),
            SwapiClientError::Decode(err) => write!(f, "swapi response decode error: {err}"),
        }
    }
}

impl std::error::Error for SwapiClientError {}

impl SwapiClient {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let base_url: String = base_url.into();

        Ok(Self {
            http: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // GET `{base_url}{resource}` and decode the body into `T`.
    async fn fetch<T>(&self, resource: &str) -> Result<T, SwapiClientError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, resource);
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(SwapiClientError::Transport)?;
        let status = res.status();

        if !status.is_success() {
            return Err(SwapiClientError::Upstream { status });
        }

        res.json::<T>().await.map_err(SwapiClientError::Decode)
    }
}

// Reduce a client failure to the local taxonomy. Only an upstream 404 keeps
// its meaning; everything else becomes an internal error.
fn classify(err: SwapiClientError, not_found: ApiError) -> ApiError {
    if matches!(err, SwapiClientError::Upstream { status } if status == StatusCode::NOT_FOUND) {
        tracing::debug!(error = %err, "swapi resource not found.");
        return not_found;
    }

    tracing::warn!(error = %err, "swapi request failed.");
    ApiError::internal()
}

#[async_trait]
impl SwapiProvider for SwapiClient {
    async fn get_starship(&self, id: i64) -> Result<Starship, ApiError> {
        self.fetch(&format!("/starships/{id}/"))
            .await
            .map_err(|err| classify(err, ApiError::not_found(ResourceKind::Starship, id)))
    }

    async fn get_starships(&self) -> Result<StarshipCollection, ApiError> {
        let not_found = ApiError::collection_not_found(ResourceKind::Starships);
        let collection: StarshipCollection = self
            .fetch("/starships/")
            .await
            .map_err(|err| classify(err, not_found.clone()))?;

        // An empty listing is reported as a missing collection.
        if collection.count == 0 || collection.results.is_empty() {
            return Err(not_found);
        }
        Ok(collection)
    }

    async fn get_person(&self, id: i64) -> Result<Person, ApiError> {
        self.fetch(&format!("/people/{id}/"))
            .await
            .map_err(|err| classify(err, ApiError::not_found(ResourceKind::People, id)))
    }

    async fn get_people(&self) -> Result<PersonCollection, ApiError> {
        let not_found = ApiError::collection_not_found(ResourceKind::Peoples);
        let collection: PersonCollection = self
            .fetch("/people/")
            .await
            .map_err(|err| classify(err, not_found.clone()))?;

        if collection.count == 0 || collection.results.is_empty() {
            return Err(not_found);
        }
        Ok(collection)
    }
}
