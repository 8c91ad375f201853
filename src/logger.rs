//! Diagnostic logger.
//!
//! Messages go to stderr with a colored severity label. Enabling the
//! `no-logger` feature turns off printing, errors are still returned.

use crate::error::{Error, Result};

#[cfg(not(feature = "no-logger"))]
use colored::*;

/// Logs the given error, then returns it.
#[cfg(not(feature = "no-logger"))]
pub fn log_error<T>(error: Error) -> Result<T> {
  eprintln!("{}: {}", "error".bright_red(), error);
  Err(error)
}

/// Logs the given error, then returns it.
#[cfg(feature = "no-logger")]
pub fn log_error<T>(error: Error) -> Result<T> {
  Err(error)
}

/// Logs a warning.
#[cfg(not(feature = "no-logger"))]
pub fn log_warning(message: &str) {
  eprintln!("{}: {}", "warning".yellow(), message);
}

/// Logs a warning.
#[cfg(feature = "no-logger")]
pub fn log_warning(_: &str) {}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn error_is_returned() {
    let ret: Result<()> = log_error(Error::InvalidName("0".into()));
    assert_eq!(ret, Err(Error::InvalidName("0".into())));
  }
}
