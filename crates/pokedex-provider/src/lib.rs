//! # pokedex-provider
//!
//! PokéAPI client for the Pokédex service.
//!
//! This crate provides:
//! - A pooled HTTP client wrapper for the public PokéAPI
//! - Typed payload structs for the species and type resources
//! - Unit normalization (provider integers to meters/kilograms)
//! - Localized type-name resolution by language code
//!
//! # Example
//!
//! ```rust,no_run
//! use pokedex_provider::PokeApiClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = PokeApiClient::from_env();
//!     let profile = client.fetch_species("25").await.unwrap();
//!     println!("{} ({})", profile.name, profile.type_name);
//! }
//! ```

pub mod pokeapi;

// Re-export core types
pub use pokedex_core::{Error, Result, SpeciesProfile};

pub use pokeapi::PokeApiClient;
