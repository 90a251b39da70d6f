use std::ops::RangeInclusive;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RangeError>;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum RangeError {
    /// The requested range is empty or leaves the index range the structure was built over.
    #[error("range {requested:?} is out of bounds for {valid:?}")]
    OutOfBounds {
        requested: RangeInclusive<i64>,
        valid: RangeInclusive<i64>,
    },
}
