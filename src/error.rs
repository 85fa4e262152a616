// src/error.rs

//! Error type shared by every fallible grid operation.

#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};
use thiserror::Error;

/// Grid operation errors.
///
/// The discriminants are stable numeric codes, aligned with the error
/// numbering of the reference hexagonal indexing library where a counterpart
/// exists.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum GridError {
  /// The operation failed but a more specific error is not available.
  #[error("operation failed")]
  Failed = 1,
  /// Argument was outside of acceptable range (e.g. a direction digit).
  #[error("argument was outside of acceptable range")]
  Domain = 2,
  /// Latitude or longitude arguments were outside of acceptable range.
  #[error("latitude or longitude was outside of acceptable range")]
  LatLngDomain = 3,
  /// Resolution argument was outside of acceptable range.
  #[error("resolution was outside of acceptable range")]
  ResDomain = 4,
  /// Cell argument was not valid, or a malformed digit was met mid-walk.
  #[error("cell argument was not valid")]
  CellInvalid = 5,
  /// Pentagon distortion was encountered that has no defined answer.
  #[error("pentagon distortion was encountered")]
  Pentagon = 9,
  /// Resolutions of the arguments were incompatible, e.g. a parent finer
  /// than its child.
  #[error("resolution argument was incompatible")]
  ResMismatch = 12,
  /// A caller-provided buffer was too small.
  #[error("capacity of the provided buffer was exceeded")]
  CapacityExceeded = 14,
  /// A numeric intermediate was NaN or infinite.
  #[error("numeric computation produced a non-finite value")]
  NonFinite = 16,
}

impl GridError {
  /// Stable numeric code of this error.
  pub fn code(self) -> u32 {
    self as u32
  }
}

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn codes_are_stable() {
    assert_eq!(GridError::Failed.code(), 1);
    assert_eq!(GridError::CellInvalid.code(), 5);
    assert_eq!(GridError::Pentagon.code(), 9);
    assert_eq!(GridError::ResMismatch.code(), 12);
    assert_eq!(GridError::CapacityExceeded.code(), 14);
  }

  #[test]
  fn messages_are_human_readable() {
    assert_eq!(GridError::Pentagon.to_string(), "pentagon distortion was encountered");
    assert_eq!(
      GridError::ResDomain.to_string(),
      "resolution was outside of acceptable range"
    );
  }
}
