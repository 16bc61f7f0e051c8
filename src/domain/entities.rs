use serde::{Deserialize, Serialize};

// The same structs decode the upstream payload and encode our response.
// Field order here is the JSON output order.

// Starship record as exposed by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Starship {
    pub name: String,
    pub model: String,
    pub starship_class: String,
    pub manufacturer: String,
    pub cost_in_credits: String,
    pub length: String,
    pub crew: String,
    pub passengers: String,
    pub max_atmosphering_speed: String,
    pub hyperdrive_rating: String,
    #[serde(rename = "MGLT")]
    pub mglt: String,
    pub cargo_capacity: String,
    pub consumables: String,
    #[serde(default)]
    pub films: Vec<String>,
    // Unset pilots serialize as null, not [].
    #[serde(default)]
    pub pilots: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarshipCollection {
    pub count: u64,
    pub results: Vec<Starship>,
}

// Person record as exposed by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub birth_year: String,
    pub eye_color: String,
    pub gender: String,
    pub hair_color: String,
    pub height: String,
    pub mass: String,
    pub skin_color: String,
    pub homeworld: String,
    #[serde(default)]
    pub films: Vec<String>,
    #[serde(default)]
    pub species: Vec<String>,
    #[serde(default)]
    pub starships: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonCollection {
    pub count: u64,
    pub results: Vec<Person>,
}
