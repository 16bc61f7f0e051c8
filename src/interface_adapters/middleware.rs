use crate::domain::ApiError;
use crate::interface_adapters::handlers::error_response;
use axum::{
    Router,
    body::Body,
    http::Request,
    response::{IntoResponse, Response},
};
use std::any::Any;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

// Request id, request logging and panic recovery around the whole router.
// The last layer added is the outermost one.
pub fn apply(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

fn request_span(request: &Request<Body>) -> tracing::Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

// A panicking handler answers like any other internal failure.
fn panic_response(_payload: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("request handler panicked.");
    error_response(&ApiError::internal()).into_response()
}
