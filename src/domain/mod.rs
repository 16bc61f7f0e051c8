// Domain layer: resource records, error taxonomy and the upstream port.

pub mod entities;
pub mod errors;
pub mod ports;

pub use entities::{Person, PersonCollection, Starship, StarshipCollection};
pub use errors::{ApiError, ErrorType, ResourceKind};
pub use ports::SwapiProvider;
