//! Centralized default constants for the Pokédex service.
//!
//! **This module is the single source of truth** for shared default values.
//! All crates reference these constants instead of defining their own
//! magic numbers.

// =============================================================================
// PROVIDER (PokéAPI)
// =============================================================================

/// Default PokéAPI species endpoint base URL.
pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2/pokemon";

/// Display language for localized type names.
///
/// The provider returns type names in every supported language; this selects
/// which one is shown to the user.
pub const DISPLAY_LANGUAGE: &str = "es";

/// Fallback language when the display language is absent from a payload.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Timeout for provider requests (seconds).
pub const PROVIDER_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// UNITS
// =============================================================================

/// Scale factor from provider integer units (decimeters / hectograms) to
/// meters / kilograms.
pub const UNIT_SCALE: f64 = 0.1;

// =============================================================================
// SERVER
// =============================================================================

/// Default bind host.
pub const HOST: &str = "0.0.0.0";

/// Default bind port.
pub const PORT: u16 = 3000;
