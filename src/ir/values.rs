//! Values ([`Value`]) and instruction capabilities ([`ValueInst`],
//! [`EffectInst`]), together with constants that can be used as operands.

use crate::enc;
use crate::error::{Error, Result};
use crate::ir::types::Type;
use crate::logger::log_error;
use std::fmt;
use std::rc::Rc;

/// A value that can appear as an operand of instructions.
///
/// Values are immutable once constructed: neither the type nor the
/// operand form changes afterwards, except that local definitions can be
/// renamed explicitly.
pub trait Value {
  /// Returns the type of the value.
  fn ty(&self) -> Type;

  /// Returns the form of the value when used as an operand,
  /// e.g. `%foo`, `@main` or `42`.
  fn operand(&self) -> String;
}

/// Shared reference of [`Value`]s.
///
/// Operands are shared by all of their users, so instructions hold
/// operands by `ValueRc` rather than by value.
pub type ValueRc = Rc<dyn Value>;

/// Returns the operand form of the given value prefixed by its type,
/// e.g. `i32 42`.
pub fn typed_operand(value: &dyn Value) -> String {
  format!("{} {}", value.ty(), value.operand())
}

/// An instruction that produces a value.
///
/// The [`Display`](fmt::Display) implementation prints the instruction
/// itself, without the name of the result, e.g. `add i32 13, 29`.
pub trait ValueInst: fmt::Display {
  /// Returns the type of the result.
  fn ret_type(&self) -> Type;
}

/// An instruction that produces no usable value, e.g. `store`.
///
/// Instructions of this kind can neither be named nor used as operands.
pub trait EffectInst: fmt::Display {}

/// Integer constant.
pub struct Integer {
  ty: Type,
  value: i64,
}

impl Integer {
  /// Creates an integer constant of the given integer type.
  ///
  /// The value is accepted if it fits in the bit width of the type as
  /// either a signed or an unsigned integer, e.g. `-128..=255` for `i8`.
  /// Fails if the type is not an integer type, or the value is out of
  /// range.
  pub fn new(ty: Type, value: i64) -> Result<ValueRc> {
    let bits = match ty.int_bits() {
      Some(bits) => bits,
      None => {
        return log_error(Error::InvalidType(format!(
          "integer constant of non-integer type `{}`",
          ty
        )))
      }
    };
    if bits < 64 && !(i64::MIN >> (64 - bits)..=i64::MAX >> (63 - bits)).contains(&value) {
      return log_error(Error::InvalidOperand(format!(
        "integer `{}` is out of the range of type `{}`",
        value, ty
      )));
    }
    Ok(Rc::new(Self { ty, value }))
  }

  /// Creates an `i32` constant.
  pub fn get_i32(value: i32) -> ValueRc {
    Rc::new(Self {
      ty: Type::get_i32(),
      value: value.into(),
    })
  }

  /// Creates an `i1` constant.
  pub fn get_bool(value: bool) -> ValueRc {
    Rc::new(Self {
      ty: Type::get_i1(),
      value: value.into(),
    })
  }

  /// Returns the integer value.
  pub fn value(&self) -> i64 {
    self.value
  }
}

impl Value for Integer {
  fn ty(&self) -> Type {
    self.ty.clone()
  }

  fn operand(&self) -> String {
    match self.ty.int_bits() {
      Some(1) => (self.value != 0).to_string(),
      _ => self.value.to_string(),
    }
  }
}

/// Checks if constants of the given type can be created.
fn check_const_type(ty: &Type, what: &str) -> Result<()> {
  if ty.is_first_class() && !ty.is_label() {
    Ok(())
  } else {
    log_error(Error::InvalidType(format!("{} of type `{}`", what, ty)))
  }
}

/// Undefined value.
pub struct Undef {
  ty: Type,
}

impl Undef {
  /// Creates an undefined value of the given type.
  ///
  /// Fails if the type is `void`, `label` or a function type.
  pub fn new(ty: Type) -> Result<ValueRc> {
    check_const_type(&ty, "undefined value")?;
    Ok(Rc::new(Self { ty }))
  }
}

impl Value for Undef {
  fn ty(&self) -> Type {
    self.ty.clone()
  }

  fn operand(&self) -> String {
    "undef".into()
  }
}

/// Zero initializer.
pub struct ZeroInit {
  ty: Type,
}

impl ZeroInit {
  /// Creates a zero initializer of the given type.
  ///
  /// Fails if the type is `void`, `label` or a function type.
  pub fn new(ty: Type) -> Result<ValueRc> {
    check_const_type(&ty, "zero initializer")?;
    Ok(Rc::new(Self { ty }))
  }
}

impl Value for ZeroInit {
  fn ty(&self) -> Type {
    self.ty.clone()
  }

  fn operand(&self) -> String {
    "zeroinitializer".into()
  }
}

/// Null pointer constant.
pub struct Null {
  ty: Type,
}

impl Null {
  /// Creates a null pointer of the given pointer type.
  ///
  /// Fails if the type is not a pointer type.
  pub fn new(ty: Type) -> Result<ValueRc> {
    if !ty.is_pointer() {
      return log_error(Error::InvalidType(format!(
        "null pointer of non-pointer type `{}`",
        ty
      )));
    }
    Ok(Rc::new(Self { ty }))
  }
}

impl Value for Null {
  fn ty(&self) -> Type {
    self.ty.clone()
  }

  fn operand(&self) -> String {
    "null".into()
  }
}

/// Reference to a global variable or function, e.g. `@main`.
///
/// The definition of the referenced global lives outside of this crate,
/// the reference only records its name and type.
pub struct GlobalRef {
  name: String,
  ty: Type,
}

impl GlobalRef {
  /// Creates a reference to the global with the given name and type.
  pub fn new(name: &str, ty: Type) -> ValueRc {
    Rc::new(Self {
      name: name.into(),
      ty,
    })
  }

  /// Returns the name of the referenced global.
  pub fn name(&self) -> &str {
    &self.name
  }
}

impl Value for GlobalRef {
  fn ty(&self) -> Type {
    self.ty.clone()
  }

  fn operand(&self) -> String {
    enc::global(&self.name)
  }
}
