//! Core engine for Paxcheck: pax entry types, the shape and overlap
//! validation pipeline, and the per-code issue report consumed by form UIs.

// public exports are one module level down
pub mod error;
pub mod issue;
pub mod report;
pub mod types;
pub mod validate;
pub mod validator;

pub use error::Error;
pub use thiserror::Error as ThisError;

///
/// CONSTANTS
///

/// Highest age a bounded pax range may reference.
///
/// Ranges are closed integer intervals inside `[0, MAX_PAX_AGE]`. A product
/// with no upper age restriction uses an all-ages entry instead of a range
/// ending here.
pub const MAX_PAX_AGE: u8 = 99;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors or internals are re-exported here.
///

pub mod prelude {
    pub use crate::{
        issue::{Issue, PathSegment},
        report::{CodeReport, map_issues_to_codes},
        types::{AgeBand, AgeRange, ExperiencePax, Pax, PaxEntry, PaxType},
        validate::{validate_experience_pax, validate_pax_list},
    };
}
