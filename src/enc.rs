//! Encoding of identifiers into their textual IR form.
//!
//! Names are printed bare when they match the simple identifier grammar
//! (`[a-zA-Z$._][a-zA-Z$._0-9]*`) or consist of decimal digits only (the
//! form of implicit IDs). All other names are quoted, with every byte
//! outside printable ASCII, and every `"` or `\`, written as `\XX`.
//!
//! # Examples
//!
//! ```
//! use llir::enc;
//!
//! assert_eq!(enc::local("foo"), "%foo");
//! assert_eq!(enc::local("42"), "%42");
//! assert_eq!(enc::local("my var"), "%\"my var\"");
//! assert_eq!(enc::global("main"), "@main");
//! ```

use std::borrow::Cow;
use std::fmt::{self, Write};

/// Prefix character of an identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Sigil {
  /// Local identifiers (`%`): values in functions, named types.
  Local,
  /// Global identifiers (`@`): global variables and functions.
  Global,
}

impl fmt::Display for Sigil {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Sigil::Local => f.write_char('%'),
      Sigil::Global => f.write_char('@'),
    }
  }
}

/// Encodes the given name as a local identifier.
pub fn local(name: &str) -> String {
  encode(Sigil::Local, name)
}

/// Encodes the given name as a global identifier.
pub fn global(name: &str) -> String {
  encode(Sigil::Global, name)
}

/// Encodes the given name with the given sigil.
pub fn encode(sigil: Sigil, name: &str) -> String {
  format!("{}{}", sigil, escape_ident(name))
}

/// Returns the part of the identifier token after the sigil,
/// quoting and escaping the name if necessary.
pub fn escape_ident(name: &str) -> Cow<str> {
  if is_ident(name) || is_local_id(name) {
    return Cow::Borrowed(name);
  }
  let mut s = String::with_capacity(name.len() + 2);
  s.push('"');
  for b in name.bytes() {
    if is_plain(b) {
      s.push(b as char);
    } else {
      // writing to a `String` never fails
      let _ = write!(s, "\\{:02X}", b);
    }
  }
  s.push('"');
  Cow::Owned(s)
}

/// Checks if the given name matches the simple identifier grammar.
pub fn is_ident(name: &str) -> bool {
  let mut bytes = name.bytes();
  match bytes.next() {
    Some(b) if is_ident_head(b) => bytes.all(|b| is_ident_head(b) || b.is_ascii_digit()),
    _ => false,
  }
}

/// Checks if the given name is a bare unsigned integer,
/// which is the form of implicit local IDs.
pub fn is_local_id(name: &str) -> bool {
  !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit())
}

/// Checks if the given byte can start a simple identifier.
fn is_ident_head(b: u8) -> bool {
  b.is_ascii_alphabetic() || matches!(b, b'$' | b'.' | b'_')
}

/// Checks if the given byte can appear unescaped in a quoted name.
fn is_plain(b: u8) -> bool {
  matches!(b, 0x20..=0x7e) && b != b'"' && b != b'\\'
}
