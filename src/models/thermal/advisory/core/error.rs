use thiserror::Error;

use crate::support::units::InvalidUnitError;

/// Errors that can occur while classifying a tagged temperature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdvisoryError {
    /// The unit tag was not recognized.
    #[error(transparent)]
    InvalidUnit(#[from] InvalidUnitError),
}
