//! # pokedex-core
//!
//! Core types and abstractions for the Pokédex service.
//!
//! This crate provides the captured-Pokémon data model, the in-memory
//! collection store, the shared error taxonomy, and default constants that
//! the other Pokédex crates depend on.

pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod store;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::{normalize_measure, Pokemon, SpeciesProfile};
pub use store::CollectionStore;
