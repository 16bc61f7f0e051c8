use crate::domain::{Person, PersonCollection};
use crate::interface_adapters::handlers::{ErrorReply, map_lookup_error, parse_id};
use crate::interface_adapters::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};

#[tracing::instrument(name = "get_person", skip_all, fields(id = %id))]
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Person>, ErrorReply> {
    let id = parse_id(&id)?;

    let person = state.lookup.get_person(id).await.map_err(map_lookup_error)?;

    tracing::debug!(person = %person.name, "person found.");
    Ok(Json(person))
}

#[tracing::instrument(name = "get_people", skip_all)]
pub async fn get_people(
    State(state): State<AppState>,
) -> Result<Json<PersonCollection>, ErrorReply> {
    let people = state.lookup.get_people().await.map_err(map_lookup_error)?;

    tracing::debug!(count = people.count, "people listed.");
    Ok(Json(people))
}
