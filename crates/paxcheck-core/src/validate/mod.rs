pub mod overlap;
pub mod shape;


pub use overlap::{EXEMPT_PAX_CODES, detect_overlaps, is_exempt_code};
pub use shape::validate_entry;

use crate::{
    ThisError,
    issue::{Issue, Issues},
    types::{ExperiencePax, Pax, PaxEntry},
};

///
/// ValidateError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ValidateError {
    #[error("validation failed with {} issue(s)", .0.len())]
    ValidationFailed(Vec<Issue>),
}

impl ValidateError {
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        match self {
            Self::ValidationFailed(issues) => issues,
        }
    }
}

///
/// validate_pax_list
///
/// Run the full pipeline over a pax list: per-entry shape validation, then
/// overlap detection over the entries that passed. All issues are collected
/// in emission order; nothing fails fast, except that shape-rejected
/// entries are invisible to overlap detection.
///

pub fn validate_pax_list(list: &[PaxEntry]) -> Result<Vec<Pax>, ValidateError> {
    let mut issues = Issues::new();

    if list.is_empty() {
        issues.add_root("required");
        return Err(ValidateError::ValidationFailed(issues.into_vec()));
    }

    // Survivors keep their index in the unfiltered list; issue paths must
    // reference the caller's list, not a compacted one.
    let mut validated = Vec::with_capacity(list.len());
    for (index, entry) in list.iter().enumerate() {
        if let Some(pax) = shape::validate_entry(index, entry, &mut issues) {
            validated.push((index, pax));
        }
    }

    overlap::detect_overlaps(&validated, &mut issues);

    if issues.is_empty() {
        Ok(validated.into_iter().map(|(_, pax)| pax).collect())
    } else {
        Err(ValidateError::ValidationFailed(issues.into_vec()))
    }
}

///
/// validate_experience_pax
///
/// Convenience over [`validate_pax_list`] for the form-layer envelope.
///

pub fn validate_experience_pax(input: &ExperiencePax) -> Result<Vec<Pax>, ValidateError> {
    validate_pax_list(&input.pax_list)
}
