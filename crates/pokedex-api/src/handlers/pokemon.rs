//! Capture, query, and release HTTP handlers.

use axum::extract::{Path, State};
use axum::response::Html;
use tracing::{debug, info};
use uuid::Uuid;

use pokedex_core::Pokemon;

use crate::{views, ApiError, AppState};

/// Landing page.
pub async fn index() -> Html<String> {
    Html(views::index_page())
}

/// Capture a Pokémon: fetch it from the provider, normalize, store, render.
///
/// Exactly one record is appended on success; a provider failure at either
/// fetch step stores nothing.
pub async fn capture_pokemon(
    State(state): State<AppState>,
    Path(species): Path<String>,
) -> Result<Html<String>, ApiError> {
    let profile = state.provider.fetch_species(&species).await?;
    let pokemon = Pokemon::new(profile);

    info!(
        species = %species,
        record_id = %pokemon.id,
        name = %pokemon.name,
        "Pokemon captured"
    );

    state.store.insert(pokemon.clone()).await;
    Ok(Html(views::pokemon_page(&pokemon)))
}

/// List every captured Pokémon in capture order.
pub async fn list_pokemon(State(state): State<AppState>) -> Html<String> {
    let records = state.store.all().await;
    debug!(result_count = records.len(), "Listing collection");
    Html(views::collection_page(&records))
}

/// Show one captured Pokémon by its local id.
pub async fn show_pokemon(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let id = parse_record_id(&id)?;
    let pokemon = state
        .store
        .get(id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("record {}", id)))?;
    Ok(Html(views::pokemon_page(&pokemon)))
}

/// Release (remove) a captured Pokémon by its local id.
pub async fn release_pokemon(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let id = parse_record_id(&id)?;
    let released = state
        .store
        .remove(id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("record {}", id)))?;

    info!(record_id = %released.id, name = %released.name, "Pokemon released");
    Ok(Html(views::message_page(
        "El Pokémon ha sido liberado con éxito",
    )))
}

fn parse_record_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::BadRequest(format!("not a record id: {}", raw)))
}
