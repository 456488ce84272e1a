use crate::{ThisError, validate::ValidateError};

///
/// Error
///
/// Top-level error for the crate. Stage errors wrap transparently so
/// callers can match on the stage enums directly.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Validate(#[from] ValidateError),
}

///
/// TESTS
///
