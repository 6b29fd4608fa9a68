//! Structured logging field name constants for the Pokédex service.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log tooling can query by standardized names across every subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Lifecycle events (startup, shutdown), operation completions |
//! | DEBUG | Decision points, intermediate values, config choices |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "api", "provider", "store"
pub const SUBSYSTEM: &str = "subsystem";

/// Logical operation name.
/// Examples: "capture", "release", "fetch_species", "fetch_type"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Species identifier sent to the provider (numeric id or name).
pub const SPECIES: &str = "species";

/// Local UUID of a captured record.
pub const RECORD_ID: &str = "record_id";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of records returned by a collection read.
pub const RESULT_COUNT: &str = "result_count";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Boolean success/failure indicator.
pub const SUCCESS: &str = "success";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
