//! Error types for the Pokédex service.

use thiserror::Error;

/// Result type alias using the Pokédex Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for Pokédex operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Captured Pokémon not found in the collection
    #[error("Pokemon not found: {0}")]
    PokemonNotFound(uuid::Uuid),

    /// Species unknown to the upstream provider (404 from PokéAPI)
    #[error("Species not found: {0}")]
    SpeciesNotFound(String),

    /// Provider unreachable or returned a non-success status
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Provider payload could not be parsed or is missing required fields
    #[error("Upstream malformed: {0}")]
    UpstreamMalformed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::UpstreamUnavailable(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::UpstreamMalformed(e.to_string())
    }
}
