//! # dropring-core
//!
//! The ring vocabulary of the drop machine.
//!
//! The machine has three concentric rings. Each [`Ring`] carries a stable
//! index and a fixed number of drop positions:
//!
//! ```
//! use dropring_core::Ring;
//!
//! assert_eq!(Ring::Outer.drop_count(), 13);
//! assert_eq!("INNER".parse::<Ring>().map(Ring::index), Ok(1));
//! ```
//!
//! ## Architectural Constraints
//!
//! - Closed: exactly three rings, none can be added at runtime
//! - Immutable: every attribute is a compile-time constant
//! - Pure: no I/O, no shared state, safe to read from any thread
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`Ring`] using the
//!   canonical upper-case names

// =============================================================================
// MODULES
// =============================================================================

pub mod ring;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use ring::{INNER_DROP_COUNT, MIDDLE_DROP_COUNT, OUTER_DROP_COUNT, Ring};
pub use types::DropRingError;
