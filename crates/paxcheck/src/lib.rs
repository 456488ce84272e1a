//! Paxcheck — age-range validation for pax (participant-type) definitions
//! on bookable travel products.
//!
//! ## Crate layout
//! - `core`: entry types, the shape/overlap validation pipeline, and the
//!   per-code issue report.
//!
//! The `prelude` module mirrors the surface used by form-layer code.

pub use paxcheck_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use paxcheck_core::{Error, MAX_PAX_AGE};

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::prelude::*;
    pub use serde::{Deserialize, Serialize};
}
