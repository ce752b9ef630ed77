//! API HTTP
//!
//! Este módulo monta el router de axum. Todas las peticiones caen en un único
//! handler que quita el prefijo de la API y delega en `RequestDispatcher`.

use axum::{
    body::{Body, Bytes},
    extract::{Query, State},
    http::{Method, Request, Uri},
    response::{IntoResponse, Response},
    Router,
};
use std::collections::HashMap;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing::{Level, Span};

use crate::middleware::cors::cors_layer;
use crate::routes::DispatchRequest;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Crear el router principal de la API
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .fallback(dispatch)
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    tracing::span!(
                        Level::INFO,
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    tracing::debug!("📥 Petición recibida: {} {}", request.method(), request.uri());
                })
                .on_response(|response: &Response, latency: Duration, _span: &Span| {
                    tracing::debug!(
                        "📤 Respuesta enviada: status={} latency={:.2}ms",
                        response.status(),
                        latency.as_secs_f64() * 1000.0
                    );
                }),
        )
        .with_state(state)
}

/// Handler único: traduce la petición HTTP a `DispatchRequest`
async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    query: Option<Query<Vec<(String, String)>>>,
    body: Bytes,
) -> Response {
    let full_path = uri.path();

    let Some(path) = state.strip_api_prefix(full_path) else {
        return AppError::not_found(full_path).into_response();
    };

    let request = DispatchRequest {
        method,
        path: path.to_string(),
        query: first_values(query.map(|Query(pairs)| pairs).unwrap_or_default()),
        body,
    };

    state.dispatcher.handle(request).into_response()
}

/// Con claves repetidas en la query gana el primer valor
fn first_values(pairs: Vec<(String, String)>) -> HashMap<String, String> {
    let mut query = HashMap::with_capacity(pairs.len());
    for (key, value) in pairs {
        query.entry(key).or_insert(value);
    }
    query
}
