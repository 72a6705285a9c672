//! # Core Type Definitions
//!
//! Error types shared by the ring vocabulary (`DropRingError`).

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur when resolving ring vocabulary.
///
/// - No silent failures
/// - Use `Result<T, DropRingError>` for fallible operations
/// - The vocabulary never panics; every accessor except name lookup is total
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DropRingError {
    /// The supplied name matches none of the ring names (case-sensitive).
    #[error("Unknown ring member: {0:?}")]
    UnknownMember(String),
}

// =============================================================================
// TESTS
// =============================================================================
