//! Library for building and printing typed, LLVM-style IR.
//!
//! The library models the building blocks of the IR in memory: types,
//! values, value-producing instructions and the local definitions that
//! name their results. Everything can be printed back to its canonical
//! text form, which is accepted by LLVM IR parsers.
//!
//! # Example
//!
//! ```
//! use llir::ir::*;
//! use llir::ir::instructions::{Binary, BinaryOp};
//! use llir::ir::values::Integer;
//!
//! assert_eq!(Type::get_int(32)?.to_string(), "i32");
//!
//! let add = Binary::new(BinaryOp::Add, Integer::get_i32(13), Integer::get_i32(29))?;
//! let def = LocalDef::new("foo", add)?;
//! assert_eq!(def.to_string(), "%foo = add i32 13, 29");
//!
//! // bare unsigned integers are reserved for implicit IDs
//! let sub = Binary::new(BinaryOp::Sub, Integer::get_i32(1), Integer::get_i32(1))?;
//! assert!(LocalDef::new("1", sub).is_err());
//! # Ok::<(), llir::error::Error>(())
//! ```
//!
//! # Features
//!
//! * `no-logger`: disables the logger. Errors are still returned to the
//!   caller, but no diagnostics are printed to stderr.
//!
//! # References
//!
//! The type system and text form follow the
//! [LLVM language reference](https://llvm.org/docs/LangRef.html).

pub mod enc;
pub mod error;
pub mod ir;
pub mod logger;
