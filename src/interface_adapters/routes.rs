use crate::interface_adapters::handlers::people::{get_people, get_person};
use crate::interface_adapters::handlers::starships::{get_starship, get_starships};
use crate::interface_adapters::middleware;
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::get};

pub const API_PREFIX: &str = "/api/v1";

pub fn app(state: AppState) -> Router {
    // Wire the HTTP routes to their handlers.
    let api = Router::new()
        .route("/starship/{id}", get(get_starship))
        .route("/starships", get(get_starships))
        .route("/people/{id}", get(get_person))
        .route("/peoples", get(get_people));

    middleware::apply(Router::new().nest(API_PREFIX, api).with_state(state))
}
