//! Core data models for the Pokédex service.
//!
//! These types are shared across all Pokédex crates and represent the
//! captured-Pokémon domain entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::defaults;

/// A captured Pokémon as stored in the collection.
///
/// `id` is assigned locally at capture time and is distinct from the
/// provider's numeric `species_id`. Records are immutable once stored;
/// the only mutation the collection supports is removal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: Uuid,
    pub species_id: i64,
    pub name: String,
    /// Localized display type (first type slot only).
    #[serde(rename = "type")]
    pub type_name: String,
    /// Height in meters.
    pub height: f64,
    /// Weight in kilograms.
    pub weight: f64,
    /// Official-artwork front image URL.
    pub image: String,
    pub captured_at_utc: DateTime<Utc>,
}

impl Pokemon {
    /// Build a record from a normalized provider fetch, assigning local
    /// identity and the capture timestamp.
    pub fn new(profile: SpeciesProfile) -> Self {
        Self {
            id: Uuid::new_v4(),
            species_id: profile.species_id,
            name: profile.name,
            type_name: profile.type_name,
            height: profile.height,
            weight: profile.weight,
            image: profile.image,
            captured_at_utc: Utc::now(),
        }
    }
}

/// Normalized species data returned by the provider client, before local
/// identity is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesProfile {
    pub species_id: i64,
    pub name: String,
    pub type_name: String,
    /// Height in meters.
    pub height: f64,
    /// Weight in kilograms.
    pub weight: f64,
    pub image: String,
}

/// Convert a raw provider measure (decimeters or hectograms) to display
/// units, rounded to 2 decimals.
pub fn normalize_measure(raw: i64) -> f64 {
    (raw as f64 * defaults::UNIT_SCALE * 100.0).round() / 100.0
}
