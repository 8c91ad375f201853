//! Errors reported while constructing IR entities.

use thiserror::Error;

/// The error type of all fallible constructors in this crate.
///
/// Every error is raised at construction time, so no partially valid
/// type, binding or instruction can be observed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  /// An explicit local name that looks like an implicit local ID.
  #[error("invalid local name `{0}`: bare unsigned integers are reserved for implicit IDs")]
  InvalidName(String),

  /// Parameters that can not form a valid type.
  #[error("invalid type: {0}")]
  InvalidType(String),

  /// Removing the name of an appended definition that has no implicit ID.
  #[error("definition `{0}` has no implicit ID and can not be unnamed")]
  NameRequired(String),

  /// Setting the body of a named structure that already has one.
  #[error("body of structure `{0}` is already defined")]
  StructRedefined(String),

  /// Operands that can not form a valid instruction.
  #[error("invalid operand: {0}")]
  InvalidOperand(String),
}

/// Result type of fallible constructors.
pub type Result<T> = std::result::Result<T, Error>;
