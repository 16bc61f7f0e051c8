use crate::domain::entities::{Person, PersonCollection, Starship, StarshipCollection};
use crate::domain::errors::ApiError;
use crate::domain::ports::SwapiProvider;

// Read-only lookups with the upstream provider injected.
// Results and errors pass through unmodified.
#[derive(Clone)]
pub struct LookupService<P> {
    provider: P,
}

impl<P> LookupService<P>
where
    P: SwapiProvider,
{
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub async fn get_starship(&self, id: i64) -> Result<Starship, ApiError> {
        self.provider.get_starship(id).await
    }

    pub async fn get_starships(&self) -> Result<StarshipCollection, ApiError> {
        self.provider.get_starships().await
    }

    pub async fn get_person(&self, id: i64) -> Result<Person, ApiError> {
        self.provider.get_person(id).await
    }

    pub async fn get_people(&self) -> Result<PersonCollection, ApiError> {
        self.provider.get_people().await
    }
}
