// Shared bootstrapping for integration tests: a stub SWAPI upstream and the
// real server wired to it, both on ephemeral ports.
use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use swapi_server::interface_adapters::clients::SwapiClient;
use swapi_server::interface_adapters::state::AppState;

pub struct Stack {
    // Base URL of the server under test.
    pub base_url: String,
    // Number of requests the stub upstream has answered.
    pub upstream_hits: Arc<AtomicUsize>,
}

impl Stack {
    pub fn upstream_calls(&self) -> usize {
        self.upstream_hits.load(Ordering::SeqCst)
    }
}

pub fn death_star() -> Value {
    json!({
        "name": "Death Star",
        "model": "DS-1 Orbital Battle Station",
        "manufacturer": "Imperial Department of Military Research, Sienar Fleet Systems",
        "cost_in_credits": "1000000000000",
        "length": "120000",
        "max_atmosphering_speed": "n/a",
        "crew": "342953",
        "passengers": "843342",
        "cargo_capacity": "1000000000000",
        "consumables": "3 years",
        "hyperdrive_rating": "4.0",
        "MGLT": "10",
        "starship_class": "Deep Space Mobile Battlestation",
        "films": ["https://swapi.dev/api/films/1/"],
        "created": "2014-12-10T16:36:50.509000Z",
        "edited": "2014-12-20T21:26:24.783000Z",
        "url": "https://swapi.dev/api/starships/9/"
    })
}

pub fn luke() -> Value {
    json!({
        "name": "Luke Skywalker",
        "height": "172",
        "mass": "77",
        "hair_color": "blond",
        "skin_color": "fair",
        "eye_color": "blue",
        "birth_year": "19BBY",
        "gender": "male",
        "homeworld": "https://swapi.dev/api/planets/1/",
        "films": [
            "https://swapi.dev/api/films/1/",
            "https://swapi.dev/api/films/2/",
            "https://swapi.dev/api/films/3/",
            "https://swapi.dev/api/films/6/"
        ],
        "species": [],
        "vehicles": ["https://swapi.dev/api/vehicles/14/"],
        "starships": [
            "https://swapi.dev/api/starships/12/",
            "https://swapi.dev/api/starships/22/"
        ],
        "url": "https://swapi.dev/api/people/1/"
    })
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not found" }))).into_response()
}

// Starship 9 and person 1 exist; starship 66 answers 503; the people listing
// is empty.
fn upstream_stub(hits: Arc<AtomicUsize>) -> Router {
    Router::new()
        .route(
            "/api/starships/{id}/",
            get(
                |State(hits): State<Arc<AtomicUsize>>, Path(id): Path<String>| async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    match id.as_str() {
                        "9" => Json(death_star()).into_response(),
                        "66" => StatusCode::SERVICE_UNAVAILABLE.into_response(),
                        _ => not_found(),
                    }
                },
            ),
        )
        .route(
            "/api/starships/",
            get(|State(hits): State<Arc<AtomicUsize>>| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                Json(json!({
                    "count": 1,
                    "next": null,
                    "previous": null,
                    "results": [death_star()]
                }))
            }),
        )
        .route(
            "/api/people/{id}/",
            get(
                |State(hits): State<Arc<AtomicUsize>>, Path(id): Path<String>| async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    match id.as_str() {
                        "1" => Json(luke()).into_response(),
                        _ => not_found(),
                    }
                },
            ),
        )
        .route(
            "/api/people/",
            get(|State(hits): State<Arc<AtomicUsize>>| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                Json(json!({ "count": 0, "next": null, "previous": null, "results": [] }))
            }),
        )
        .with_state(hits)
}

async fn bind_ephemeral() -> (tokio::net::TcpListener, String) {
    // Bind to an ephemeral port to avoid collisions with local services.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    (listener, format!("http://{addr}"))
}

// Start the stub upstream and the server under test on the current runtime.
pub async fn spawn_stack() -> Stack {
    let upstream_hits = Arc::new(AtomicUsize::new(0));

    let (upstream_listener, upstream_url) = bind_ephemeral().await;
    let stub = upstream_stub(upstream_hits.clone());
    tokio::spawn(async move {
        axum::serve(upstream_listener, stub)
            .await
            .expect("stub upstream failed");
    });

    let client = SwapiClient::new(format!("{upstream_url}/api/"), Some(Duration::from_secs(5)))
        .expect("build swapi client");
    let (listener, base_url) = bind_ephemeral().await;
    tokio::spawn(async move {
        swapi_server::serve(listener, AppState::new(Arc::new(client)))
            .await
            .expect("server failed");
    });

    Stack {
        base_url,
        upstream_hits,
    }
}
