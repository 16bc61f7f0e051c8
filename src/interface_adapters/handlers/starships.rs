use crate::domain::{Starship, StarshipCollection};
use crate::interface_adapters::handlers::{ErrorReply, map_lookup_error, parse_id};
use crate::interface_adapters::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};

#[tracing::instrument(name = "get_starship", skip_all, fields(id = %id))]
pub async fn get_starship(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Starship>, ErrorReply> {
    let id = parse_id(&id)?;

    let starship = state
        .lookup
        .get_starship(id)
        .await
        .map_err(map_lookup_error)?;

    tracing::debug!(starship = %starship.name, "starship found.");
    Ok(Json(starship))
}

#[tracing::instrument(name = "get_starships", skip_all)]
pub async fn get_starships(
    State(state): State<AppState>,
) -> Result<Json<StarshipCollection>, ErrorReply> {
    let starships = state
        .lookup
        .get_starships()
        .await
        .map_err(map_lookup_error)?;

    tracing::debug!(count = starships.count, "starships listed.");
    Ok(Json(starships))
}
