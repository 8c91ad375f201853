//! A small set of instructions: binary operations ([`Binary`]),
//! function calls ([`Call`]) and memory stores ([`Store`]).
//!
//! Instructions only compute the types they need to print themselves,
//! they do not check whether operand types suit the operator. They do
//! reject `void`-typed operands, since results of `void`-typed
//! instructions have no name to refer to.

use crate::error::{Error, Result};
use crate::ir::types::{Type, TypeKind};
use crate::ir::values::{typed_operand, EffectInst, ValueInst, ValueRc};
use crate::logger::log_error;
use std::fmt;

/// Binary operators.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BinaryOp {
  /// Integer addition.
  Add,
  /// Integer subtraction.
  Sub,
  /// Integer multiplication.
  Mul,
  /// Unsigned division.
  UDiv,
  /// Signed division.
  SDiv,
  /// Unsigned remainder.
  URem,
  /// Signed remainder.
  SRem,
  /// Shift left.
  Shl,
  /// Logical shift right.
  LShr,
  /// Arithmetic shift right.
  AShr,
  /// Bitwise AND.
  And,
  /// Bitwise OR.
  Or,
  /// Bitwise XOR.
  Xor,
  /// Floating-point addition.
  FAdd,
  /// Floating-point subtraction.
  FSub,
  /// Floating-point multiplication.
  FMul,
  /// Floating-point division.
  FDiv,
  /// Floating-point remainder.
  FRem,
}

impl fmt::Display for BinaryOp {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(match self {
      BinaryOp::Add => "add",
      BinaryOp::Sub => "sub",
      BinaryOp::Mul => "mul",
      BinaryOp::UDiv => "udiv",
      BinaryOp::SDiv => "sdiv",
      BinaryOp::URem => "urem",
      BinaryOp::SRem => "srem",
      BinaryOp::Shl => "shl",
      BinaryOp::LShr => "lshr",
      BinaryOp::AShr => "ashr",
      BinaryOp::And => "and",
      BinaryOp::Or => "or",
      BinaryOp::Xor => "xor",
      BinaryOp::FAdd => "fadd",
      BinaryOp::FSub => "fsub",
      BinaryOp::FMul => "fmul",
      BinaryOp::FDiv => "fdiv",
      BinaryOp::FRem => "frem",
    })
  }
}

/// Binary operation, e.g. `add i32 13, 29`.
pub struct Binary {
  op: BinaryOp,
  lhs: ValueRc,
  rhs: ValueRc,
}

impl Binary {
  /// Creates a binary operation.
  ///
  /// The type of the result is the type of `lhs`. Fails if any operand
  /// is `void`-typed.
  pub fn new(op: BinaryOp, lhs: ValueRc, rhs: ValueRc) -> Result<Self> {
    check_operand(&lhs)?;
    check_operand(&rhs)?;
    Ok(Self { op, lhs, rhs })
  }

  /// Returns the operator.
  pub fn op(&self) -> BinaryOp {
    self.op
  }

  /// Returns the left-hand side operand.
  pub fn lhs(&self) -> &ValueRc {
    &self.lhs
  }

  /// Returns the right-hand side operand.
  pub fn rhs(&self) -> &ValueRc {
    &self.rhs
  }
}

impl ValueInst for Binary {
  fn ret_type(&self) -> Type {
    self.lhs.ty()
  }
}

impl fmt::Display for Binary {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(
      f,
      "{} {}, {}",
      self.op,
      typed_operand(self.lhs.as_ref()),
      self.rhs.operand()
    )
  }
}

/// Function call, e.g. `call i32 @getint()`.
pub struct Call {
  callee: ValueRc,
  func_ty: Type,
  args: Vec<ValueRc>,
}

impl Call {
  /// Creates a function call.
  ///
  /// Fails if the callee is neither a function nor a pointer to function,
  /// or any argument is `void`-typed.
  pub fn new(callee: ValueRc, args: Vec<ValueRc>) -> Result<Self> {
    let callee_ty = callee.ty();
    let func_ty = match callee_ty.pointee() {
      Some(ty) if ty.is_function() => ty.clone(),
      _ if callee_ty.is_function() => callee_ty.clone(),
      _ => {
        return log_error(Error::InvalidOperand(format!(
          "callee `{}` of type `{}` is not a function",
          callee.operand(),
          callee_ty
        )))
      }
    };
    for arg in &args {
      check_operand(arg)?;
    }
    Ok(Self {
      callee,
      func_ty,
      args,
    })
  }

  /// Returns the callee.
  pub fn callee(&self) -> &ValueRc {
    &self.callee
  }

  /// Returns the arguments.
  pub fn args(&self) -> &[ValueRc] {
    &self.args
  }
}

impl ValueInst for Call {
  fn ret_type(&self) -> Type {
    match self.func_ty.kind() {
      TypeKind::Function { ret, .. } => ret.clone(),
      _ => unreachable!(),
    }
  }
}

impl fmt::Display for Call {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    // variadic callees must be called with the full function type
    let variadic = matches!(self.func_ty.kind(), TypeKind::Function { variadic: true, .. });
    if variadic {
      write!(f, "call {} ", self.func_ty)?;
    } else {
      write!(f, "call {} ", self.ret_type())?;
    }
    write!(f, "{}(", self.callee.operand())?;
    for (i, arg) in self.args.iter().enumerate() {
      if i != 0 {
        write!(f, ", ")?;
      }
      write!(f, "{}", typed_operand(arg.as_ref()))?;
    }
    write!(f, ")")
  }
}

/// Memory store, e.g. `store i32 0, i32* %ret`.
pub struct Store {
  value: ValueRc,
  dest: ValueRc,
}

impl Store {
  /// Creates a memory store.
  ///
  /// Fails if the stored value is `void`-typed, or the destination is
  /// not a pointer.
  pub fn new(value: ValueRc, dest: ValueRc) -> Result<Self> {
    check_operand(&value)?;
    if !dest.ty().is_pointer() {
      return log_error(Error::InvalidOperand(format!(
        "store destination `{}` is not a pointer",
        dest.operand()
      )));
    }
    Ok(Self { value, dest })
  }

  /// Returns the stored value.
  pub fn value(&self) -> &ValueRc {
    &self.value
  }

  /// Returns the destination.
  pub fn dest(&self) -> &ValueRc {
    &self.dest
  }
}

impl EffectInst for Store {}

impl fmt::Display for Store {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(
      f,
      "store {}, {}",
      typed_operand(self.value.as_ref()),
      typed_operand(self.dest.as_ref())
    )
  }
}

/// Checks if the given value can be used as an operand.
fn check_operand(value: &ValueRc) -> Result<()> {
  if value.ty().is_void() {
    log_error(Error::InvalidOperand(format!(
      "`{}` is void-typed and can not be used as an operand",
      value.operand()
    )))
  } else {
    Ok(())
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::ir::local::LocalDef;
  use crate::ir::values::{GlobalRef, Integer, Null};
  use std::rc::Rc;

  fn void_result() -> ValueRc {
    let ty = Type::get_function(vec![], Type::get_void(), false).unwrap();
    let f = GlobalRef::new("f", Type::get_pointer(ty).unwrap());
    Rc::new(LocalDef::new("r", Call::new(f, vec![]).unwrap()).unwrap())
  }

  #[test]
  fn print_binary() {
    let add = Binary::new(BinaryOp::Add, Integer::get_i32(13), Integer::get_i32(29)).unwrap();
    assert_eq!(add.to_string(), "add i32 13, 29");
    assert_eq!(add.ret_type(), Type::get_i32());
    let shr = Binary::new(BinaryOp::AShr, Integer::get_i32(-8), Integer::get_i32(1)).unwrap();
    assert_eq!(shr.to_string(), "ashr i32 -8, 1");
  }

  #[test]
  fn print_call() {
    let ty = Type::get_function(vec![Type::get_i32()], Type::get_void(), false).unwrap();
    let putint = GlobalRef::new("putint", Type::get_pointer(ty).unwrap());
    let call = Call::new(putint, vec![Integer::get_i32(1)]).unwrap();
    assert_eq!(call.to_string(), "call void @putint(i32 1)");
    assert!(call.ret_type().is_void());

    let i8p = Type::get_pointer(Type::get_i8()).unwrap();
    let ty = Type::get_function(vec![i8p.clone()], Type::get_i32(), true).unwrap();
    let printf = GlobalRef::new("printf", ty);
    let call = Call::new(printf, vec![Null::new(i8p).unwrap(), Integer::get_i32(2)]).unwrap();
    assert_eq!(
      call.to_string(),
      "call i32 (i8*, ...) @printf(i8* null, i32 2)"
    );
    assert_eq!(call.ret_type(), Type::get_i32());
  }

  #[test]
  fn call_non_function() {
    let g = GlobalRef::new("x", Type::get_i32());
    assert!(matches!(
      Call::new(g, vec![]),
      Err(Error::InvalidOperand(_))
    ));
  }

  #[test]
  fn print_store() {
    let p = GlobalRef::new("x", Type::get_pointer(Type::get_i32()).unwrap());
    let store = Store::new(Integer::get_i32(0), p.clone()).unwrap();
    assert_eq!(store.to_string(), "store i32 0, i32* @x");
    assert!(Store::new(p, Integer::get_i32(0)).is_err());
  }

  #[test]
  fn void_operands() {
    let one = Integer::get_i32(1);
    assert!(matches!(
      Binary::new(BinaryOp::Add, void_result(), one.clone()),
      Err(Error::InvalidOperand(_))
    ));
    assert!(matches!(
      Binary::new(BinaryOp::Add, one.clone(), void_result()),
      Err(Error::InvalidOperand(_))
    ));

    let p = GlobalRef::new("g", Type::get_pointer(Type::get_i32()).unwrap());
    assert!(matches!(
      Store::new(void_result(), p),
      Err(Error::InvalidOperand(_))
    ));

    let ty = Type::get_function(vec![Type::get_i32()], Type::get_i32(), false).unwrap();
    let g = GlobalRef::new("g", Type::get_pointer(ty).unwrap());
    assert!(matches!(
      Call::new(g.clone(), vec![void_result()]),
      Err(Error::InvalidOperand(_))
    ));
    assert!(Call::new(g, vec![one]).is_ok());
  }
}
