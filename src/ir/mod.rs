//! The core part of the IR.
//!
//! This module provides in-memory form IR related implementations,
//! including:
//!
//! * Types of IR values ([`Type`]).
//! * Values ([`Value`]), constants and instruction capabilities
//!   ([`ValueInst`], [`EffectInst`]).
//! * A small set of instructions ([`instructions`]).
//! * Local definitions ([`LocalDef`]), which name the results of
//!   value-producing instructions.
//! * Instruction sequences ([`Body`]) and their implicit local ID
//!   counters ([`LocalIdCounter`]).
//!
//! # Example
//!
//! Here is an instruction sequence in text form:
//!
//! ```text
//! %0 = add i32 13, 29
//! %ans = mul i32 %0, 2
//! store i32 %ans, i32* @result
//! ```
//!
//! You can build it like this:
//!
//! ```
//! use llir::ir::*;
//! use llir::ir::instructions::{Binary, BinaryOp, Store};
//! use llir::ir::values::{GlobalRef, Integer};
//!
//! let mut body = Body::new();
//!
//! let add = Binary::new(BinaryOp::Add, Integer::get_i32(13), Integer::get_i32(29))?;
//! let sum = body.push_def(LocalDef::new("", add)?);
//! let sum = body.def(sum).unwrap().clone();
//!
//! let mul = Binary::new(BinaryOp::Mul, sum, Integer::get_i32(2))?;
//! let ans = body.push_def(LocalDef::new("ans", mul)?);
//! let ans = body.def(ans).unwrap().clone();
//!
//! let result = GlobalRef::new("result", Type::get_pointer(Type::get_i32())?);
//! body.push_inst(Store::new(ans, result)?);
//!
//! assert_eq!(
//!   body.to_string(),
//!   "  %0 = add i32 13, 29\n  %ans = mul i32 %0, 2\n  store i32 %ans, i32* @result\n",
//! );
//! # Ok::<(), llir::error::Error>(())
//! ```

pub mod body;
pub mod idman;
pub mod instructions;
pub mod local;
pub mod types;
pub mod values;

pub use body::{Body, Inst, Stmt};
pub use idman::{LocalId, LocalIdCounter};
pub use local::LocalDef;
pub use types::{FloatKind, StructType, Type, TypeKind};
pub use values::{EffectInst, Value, ValueInst, ValueRc};
