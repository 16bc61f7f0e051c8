use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::{Person, PersonCollection, Starship, StarshipCollection};
use crate::domain::errors::ApiError;

// Port for the upstream Star Wars data source.
// Handlers and use cases depend on this trait, not on the reqwest client.
#[async_trait]
pub trait SwapiProvider: Send + Sync {
    async fn get_starship(&self, id: i64) -> Result<Starship, ApiError>;
    async fn get_starships(&self) -> Result<StarshipCollection, ApiError>;
    async fn get_person(&self, id: i64) -> Result<Person, ApiError>;
    async fn get_people(&self) -> Result<PersonCollection, ApiError>;
}

// Lets shared providers (including `Arc<dyn SwapiProvider>`) be injected directly.
#[async_trait]
impl<T> SwapiProvider for Arc<T>
where
    T: SwapiProvider + ?Sized,
{
    async fn get_starship(&self, id: i64) -> Result<Starship, ApiError> {
        (**self).get_starship(id).await
    }

    async fn get_starships(&self) -> Result<StarshipCollection, ApiError> {
        (**self).get_starships().await
    }

    async fn get_person(&self, id: i64) -> Result<Person, ApiError> {
        (**self).get_person(id).await
    }

    async fn get_people(&self) -> Result<PersonCollection, ApiError> {
        (**self).get_people().await
    }
}
