//! PokéAPI provider client.
//!
//! Fetches species data with a two-step lookup: the species resource itself,
//! then the first type slot's type resource for a localized display name.
//! Raw integer measures (decimeters / hectograms) are normalized to meters /
//! kilograms before the profile leaves this crate.

use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info, warn};

use pokedex_core::{defaults, normalize_measure, Error, Result, SpeciesProfile};

/// Default PokéAPI endpoint.
pub const DEFAULT_POKEAPI_URL: &str = defaults::POKEAPI_URL;

/// Default display language for type names.
pub const DEFAULT_LANGUAGE: &str = defaults::DISPLAY_LANGUAGE;

/// Timeout for provider requests (seconds).
pub const REQUEST_TIMEOUT_SECS: u64 = defaults::PROVIDER_TIMEOUT_SECS;

/// PokéAPI client.
///
/// Owns the process-wide pooled HTTP client; created once at startup and
/// shared by every capture through application state.
pub struct PokeApiClient {
    client: Client,
    base_url: String,
    language: String,
    timeout_secs: u64,
}

impl PokeApiClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::with_config(
            DEFAULT_POKEAPI_URL.to_string(),
            DEFAULT_LANGUAGE.to_string(),
        )
    }

    /// Create a new client with a custom endpoint and display language.
    pub fn with_config(base_url: String, language: String) -> Self {
        let timeout_secs = std::env::var("POKEDEX_PROVIDER_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(REQUEST_TIMEOUT_SECS);

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        info!(
            "Initializing PokéAPI client: url={}, language={}",
            base_url, language
        );

        Self {
            client,
            base_url,
            language,
            timeout_secs,
        }
    }

    /// Create from environment variables.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("POKEAPI_BASE").unwrap_or_else(|_| DEFAULT_POKEAPI_URL.to_string());
        let language =
            std::env::var("POKEDEX_LANGUAGE").unwrap_or_else(|_| DEFAULT_LANGUAGE.to_string());

        Self::with_config(base_url, language)
    }

    /// Display language configured for type names.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Fetch a species by numeric id or name and normalize it.
    ///
    /// The identifier's shape is not validated; the provider accepts both
    /// forms. Two outbound calls on the happy path: the species resource and
    /// the first type slot's type resource.
    pub async fn fetch_species(&self, identifier: &str) -> Result<SpeciesProfile> {
        let start = Instant::now();
        let url = format!("{}/{}", self.base_url, identifier);

        debug!(species = identifier, "Fetching species from provider");

        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(self.timeout_secs))
            .send()
            .await
            .map_err(|e| Error::UpstreamUnavailable(format!("Request failed: {}", e)))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::SpeciesNotFound(identifier.to_string()));
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::UpstreamUnavailable(format!(
                "PokéAPI returned {}: {}",
                status, body
            )));
        }

        let species: SpeciesResponse = response
            .json()
            .await
            .map_err(|e| Error::UpstreamMalformed(format!("Invalid species payload: {}", e)))?;

        let image = species
            .sprites
            .other
            .official_artwork
            .front_default
            .clone()
            .ok_or_else(|| {
                Error::UpstreamMalformed(format!(
                    "Species {} has no official artwork",
                    identifier
                ))
            })?;

        let slot = species.types.first().ok_or_else(|| {
            Error::UpstreamMalformed(format!("Species {} has no type slots", identifier))
        })?;
        let type_name = self.fetch_type_name(&slot.type_ref).await?;

        let profile = SpeciesProfile {
            species_id: species.id,
            name: species.name,
            type_name,
            height: normalize_measure(species.height),
            weight: normalize_measure(species.weight),
            image,
        };

        info!(
            species = identifier,
            species_id = profile.species_id,
            duration_ms = start.elapsed().as_millis() as u64,
            "Species fetched"
        );

        Ok(profile)
    }

    /// Follow a type slot's resource URL and pick the display name for the
    /// configured language.
    async fn fetch_type_name(&self, type_ref: &NamedResource) -> Result<String> {
        debug!(url = %type_ref.url, "Fetching type resource");

        let response = self
            .client
            .get(&type_ref.url)
            .timeout(Duration::from_secs(self.timeout_secs))
            .send()
            .await
            .map_err(|e| Error::UpstreamUnavailable(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::UpstreamUnavailable(format!(
                "PokéAPI returned {}: {}",
                status, body
            )));
        }

        let type_data: TypeResponse = response
            .json()
            .await
            .map_err(|e| Error::UpstreamMalformed(format!("Invalid type payload: {}", e)))?;

        Ok(select_type_name(
            &type_data.names,
            &self.language,
            &type_ref.name,
        ))
    }
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the localized name matching `language`, falling back to English and
/// finally to the type's canonical slot name.
///
/// Localized entries are matched by language code, never by list position:
/// the provider documents no ordering for the `names` array.
fn select_type_name(names: &[LocalizedName], language: &str, canonical: &str) -> String {
    if let Some(entry) = names.iter().find(|n| n.language.name == language) {
        return entry.name.clone();
    }
    if let Some(entry) = names
        .iter()
        .find(|n| n.language.name == defaults::FALLBACK_LANGUAGE)
    {
        warn!(
            language = language,
            "Display language missing from type payload, falling back to English"
        );
        return entry.name.clone();
    }
    warn!(
        language = language,
        type_name = canonical,
        "No localized name available, using canonical type name"
    );
    canonical.to_string()
}

// =============================================================================
// PROVIDER PAYLOADS
// =============================================================================

#[derive(Debug, Deserialize)]
struct SpeciesResponse {
    id: i64,
    name: String,
    /// Raw weight in hectograms.
    weight: i64,
    /// Raw height in decimeters.
    height: i64,
    sprites: Sprites,
    types: Vec<TypeSlot>,
}

#[derive(Debug, Deserialize)]
struct Sprites {
    other: OtherSprites,
}

#[derive(Debug, Deserialize)]
struct OtherSprites {
    #[serde(rename = "official-artwork")]
    official_artwork: OfficialArtwork,
}

#[derive(Debug, Deserialize)]
struct OfficialArtwork {
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    #[serde(rename = "type")]
    type_ref: NamedResource,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct TypeResponse {
    names: Vec<LocalizedName>,
}

#[derive(Debug, Deserialize)]
struct LocalizedName {
    name: String,
    language: LanguageRef,
}

#[derive(Debug, Deserialize)]
struct LanguageRef {
    name: String,
}
