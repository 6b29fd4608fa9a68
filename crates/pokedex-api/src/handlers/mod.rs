//! Handler modules for pokedex-api.

pub mod pokemon;
