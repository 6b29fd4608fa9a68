//! Library surface of the Pokédex HTTP server.
//!
//! Holds the application state, the error-to-response mapping, and the
//! router so integration tests can drive the full HTTP surface against an
//! in-process server.

pub mod handlers;
pub mod views;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};
use tower_http::{
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::warn;
use uuid::Uuid;

use pokedex_core::CollectionStore;
use pokedex_provider::PokeApiClient;

/// Generates time-ordered UUIDv7 request correlation IDs.
///
/// UUIDv7 embeds a Unix timestamp, so IDs sort chronologically — useful for
/// log correlation and debugging.
#[derive(Clone, Default)]
pub struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// In-memory collection of captured Pokémon.
    pub store: CollectionStore,
    /// Shared PokéAPI client (one connection pool for the process).
    pub provider: Arc<PokeApiClient>,
}

impl AppState {
    pub fn new(store: CollectionStore, provider: PokeApiClient) -> Self {
        Self {
            store,
            provider: Arc::new(provider),
        }
    }
}

/// Build the application router.
///
/// `STATIC_DIR` points at the stylesheet directory; defaults to the crate's
/// bundled `static/`.
pub fn build_router(state: AppState) -> Router {
    let static_dir = std::env::var("STATIC_DIR")
        .unwrap_or_else(|_| concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_string());

    Router::new()
        .route("/", get(handlers::pokemon::index))
        .route("/capturar/:species", post(handlers::pokemon::capture_pokemon))
        .route("/pokemones", get(handlers::pokemon::list_pokemon))
        .route("/pokemon/:id", get(handlers::pokemon::show_pokemon))
        .route("/eliminar/:id", get(handlers::pokemon::release_pokemon))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .with_state(state)
}

// =============================================================================
// ERROR HANDLING
// =============================================================================

/// Error type returned by HTTP handlers.
///
/// Each variant carries the internal detail for logs; the rendered page shows
/// fixed user-facing copy per variant.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    UpstreamUnavailable(String),
    UpstreamMalformed(String),
    Internal(String),
}

impl From<pokedex_core::Error> for ApiError {
    fn from(err: pokedex_core::Error) -> Self {
        match err {
            pokedex_core::Error::SpeciesNotFound(species) => {
                ApiError::NotFound(format!("species {}", species))
            }
            pokedex_core::Error::PokemonNotFound(id) => ApiError::NotFound(format!("record {}", id)),
            pokedex_core::Error::UpstreamUnavailable(msg) => ApiError::UpstreamUnavailable(msg),
            pokedex_core::Error::UpstreamMalformed(msg) => ApiError::UpstreamMalformed(msg),
            pokedex_core::Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, detail, message) = match self {
            ApiError::NotFound(detail) => {
                (StatusCode::NOT_FOUND, detail, "Pokémon NO encontrado.")
            }
            ApiError::BadRequest(detail) => {
                (StatusCode::BAD_REQUEST, detail, "Identificador inválido.")
            }
            ApiError::UpstreamUnavailable(detail) => (
                StatusCode::BAD_GATEWAY,
                detail,
                "No se pudo contactar a la PokéAPI.",
            ),
            ApiError::UpstreamMalformed(detail) => (
                StatusCode::BAD_GATEWAY,
                detail,
                "La PokéAPI devolvió una respuesta inesperada.",
            ),
            ApiError::Internal(detail) => {
                (StatusCode::INTERNAL_SERVER_ERROR, detail, "Algo salió mal =(")
            }
        };

        if status.is_server_error() {
            warn!(status = %status, error = %detail, "Request failed");
        }

        (status, Html(views::message_page(message))).into_response()
    }
}
