//! Types of IR values ([`Type`] and [`TypeKind`]).
//!
//! Types are immutable values shared through [`Rc`]. Two types compare
//! equal when they have the same structure, no matter where and when they
//! were constructed. The only exception is named structures, which compare
//! by their names, so that recursive structures can be defined and compared
//! without infinite recursion.

use crate::enc;
use crate::error::{Error, Result};
use crate::logger::log_error;
use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Kind of type.
#[derive(PartialEq, Eq, Hash, Debug)]
pub enum TypeKind {
  /// Void type, the type of instructions that produce no value.
  Void,
  /// Label type, the type of basic blocks.
  Label,
  /// Integer type with the given bit width.
  Int(u32),
  /// Floating-point type.
  Float(FloatKind),
  /// Pointer type (with pointee type).
  Pointer(Type),
  /// Vector type (with element type and length).
  Vector(Type, usize),
  /// Array type (with element type and length).
  Array(Type, usize),
  /// Structure type.
  Struct(StructType),
  /// Function type.
  Function {
    ret: Type,
    params: Vec<Type>,
    variadic: bool,
  },
}

impl fmt::Display for TypeKind {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      TypeKind::Void => write!(f, "void"),
      TypeKind::Label => write!(f, "label"),
      TypeKind::Int(bits) => write!(f, "i{}", bits),
      TypeKind::Float(kind) => write!(f, "{}", kind),
      TypeKind::Pointer(elem) => write!(f, "{}*", elem),
      TypeKind::Vector(elem, len) => write!(f, "<{} x {}>", len, elem),
      TypeKind::Array(elem, len) => write!(f, "[{} x {}]", len, elem),
      TypeKind::Struct(s) => match s.name() {
        Some(name) => write!(f, "{}", enc::local(name)),
        None => s.fmt_body(f),
      },
      TypeKind::Function {
        ret,
        params,
        variadic,
      } => {
        write!(f, "{} (", ret)?;
        for (i, param) in params.iter().enumerate() {
          if i != 0 {
            write!(f, ", ")?;
          }
          write!(f, "{}", param)?;
        }
        if *variadic {
          if !params.is_empty() {
            write!(f, ", ")?;
          }
          write!(f, "...")?;
        }
        write!(f, ")")
      }
    }
  }
}

/// Kind of floating-point type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FloatKind {
  /// 16-bit IEEE floating point (`half`).
  Half,
  /// 32-bit IEEE floating point (`float`).
  Float,
  /// 64-bit IEEE floating point (`double`).
  Double,
  /// 128-bit IEEE floating point with 112-bit mantissa (`fp128`).
  Fp128,
  /// 80-bit x87 extended floating point (`x86_fp80`).
  X86Fp80,
  /// 128-bit floating point made of two 64-bit values (`ppc_fp128`).
  PpcFp128,
}

impl FloatKind {
  /// Returns the keyword of the floating-point kind.
  pub fn keyword(self) -> &'static str {
    match self {
      FloatKind::Half => "half",
      FloatKind::Float => "float",
      FloatKind::Double => "double",
      FloatKind::Fp128 => "fp128",
      FloatKind::X86Fp80 => "x86_fp80",
      FloatKind::PpcFp128 => "ppc_fp128",
    }
  }

  /// Returns the bit width of the floating-point kind.
  pub fn bits(self) -> u32 {
    match self {
      FloatKind::Half => 16,
      FloatKind::Float => 32,
      FloatKind::Double => 64,
      FloatKind::X86Fp80 => 80,
      FloatKind::Fp128 | FloatKind::PpcFp128 => 128,
    }
  }
}

impl fmt::Display for FloatKind {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.keyword())
  }
}

/// Structure type.
///
/// An anonymous structure is identified by its fields and packedness.
/// A named structure is identified by its name only, it starts out
/// opaque and receives its body by [`StructType::set_body`].
///
/// A named structure whose body refers to itself forms a reference
/// cycle, it will not be freed until the end of the program.
pub struct StructType {
  name: Option<String>,
  body: RefCell<Option<StructBody>>,
}

#[derive(PartialEq, Eq, Hash)]
struct StructBody {
  fields: Vec<Type>,
  packed: bool,
}

impl StructType {
  /// Returns the name of the structure, `None` if anonymous.
  pub fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }

  /// Checks if the structure has no body yet.
  pub fn is_opaque(&self) -> bool {
    self.body.borrow().is_none()
  }

  /// Checks if the structure is packed.
  pub fn is_packed(&self) -> bool {
    self.body.borrow().as_ref().map_or(false, |b| b.packed)
  }

  /// Returns the field types, empty if the structure is opaque.
  pub fn fields(&self) -> Vec<Type> {
    self
      .body
      .borrow()
      .as_ref()
      .map_or_else(Vec::new, |b| b.fields.clone())
  }

  /// Sets the body of an opaque named structure.
  ///
  /// Fails if the structure already has a body, or any field type
  /// can not be a structure field. A structure can only refer to
  /// itself through pointers, so fields that contain the structure
  /// itself by value are rejected.
  pub fn set_body(&self, fields: Vec<Type>, packed: bool) -> Result<()> {
    if !self.is_opaque() {
      return log_error(Error::StructRedefined(self.name.clone().unwrap_or_default()));
    }
    check_fields(&fields)?;
    if let Some(name) = &self.name {
      if let Some(field) = fields.iter().find(|f| f.contains_struct(name)) {
        return log_error(Error::InvalidType(format!(
          "field `{}` makes structure `{}` recursive",
          field,
          enc::local(name)
        )));
      }
    }
    *self.body.borrow_mut() = Some(StructBody { fields, packed });
    Ok(())
  }

  /// Writes the body (`{ ... }`, `<{ ... }>` or `opaque`).
  fn fmt_body(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let body = self.body.borrow();
    let body = match body.as_ref() {
      Some(body) => body,
      None => return write!(f, "opaque"),
    };
    if body.packed {
      write!(f, "<")?;
    }
    if body.fields.is_empty() {
      write!(f, "{{}}")?;
    } else {
      write!(f, "{{ ")?;
      for (i, field) in body.fields.iter().enumerate() {
        if i != 0 {
          write!(f, ", ")?;
        }
        write!(f, "{}", field)?;
      }
      write!(f, " }}")?;
    }
    if body.packed {
      write!(f, ">")?;
    }
    Ok(())
  }
}

impl PartialEq for StructType {
  fn eq(&self, other: &Self) -> bool {
    match (&self.name, &other.name) {
      (Some(l), Some(r)) => l == r,
      (None, None) => *self.body.borrow() == *other.body.borrow(),
      _ => false,
    }
  }
}

impl Eq for StructType {}

impl Hash for StructType {
  fn hash<H: Hasher>(&self, state: &mut H) {
    match &self.name {
      Some(name) => name.hash(state),
      None => self.body.borrow().hash(state),
    }
  }
}

impl fmt::Debug for StructType {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match &self.name {
      Some(name) => write!(f, "StructType({})", enc::local(name)),
      None => {
        write!(f, "StructType(")?;
        self.fmt_body(f)?;
        write!(f, ")")
      }
    }
  }
}

/// Types of IR values.
#[derive(Clone, Eq)]
pub struct Type(Rc<TypeKind>);

impl Type {
  /// Maximum bit width of integer types.
  pub const MAX_INT_BITS: u32 = (1 << 23) - 1;

  /// Creates a type from the given kind without any check.
  fn new(kind: TypeKind) -> Type {
    Type(Rc::new(kind))
  }

  /// Returns a `void` type.
  pub fn get_void() -> Type {
    Type::new(TypeKind::Void)
  }

  /// Returns a `label` type.
  pub fn get_label() -> Type {
    Type::new(TypeKind::Label)
  }

  /// Returns an integer type with the given bit width.
  ///
  /// Fails if the width is zero or larger than [`Type::MAX_INT_BITS`].
  pub fn get_int(bits: u32) -> Result<Type> {
    if bits == 0 || bits > Self::MAX_INT_BITS {
      return log_error(Error::InvalidType(format!(
        "integer bit width must be in 1..={}, found {}",
        Self::MAX_INT_BITS,
        bits
      )));
    }
    Ok(Type::new(TypeKind::Int(bits)))
  }

  /// Returns an `i1` type.
  pub fn get_i1() -> Type {
    Type::new(TypeKind::Int(1))
  }

  /// Returns an `i8` type.
  pub fn get_i8() -> Type {
    Type::new(TypeKind::Int(8))
  }

  /// Returns an `i16` type.
  pub fn get_i16() -> Type {
    Type::new(TypeKind::Int(16))
  }

  /// Returns an `i32` type.
  pub fn get_i32() -> Type {
    Type::new(TypeKind::Int(32))
  }

  /// Returns an `i64` type.
  pub fn get_i64() -> Type {
    Type::new(TypeKind::Int(64))
  }

  /// Returns a floating-point type of the given kind.
  pub fn get_float(kind: FloatKind) -> Type {
    Type::new(TypeKind::Float(kind))
  }

  /// Returns a pointer type.
  ///
  /// Fails if the pointee type is `void` or `label`.
  pub fn get_pointer(elem: Type) -> Result<Type> {
    if elem.is_void() || elem.is_label() {
      return log_error(Error::InvalidType(format!(
        "pointer to `{}` is not allowed",
        elem
      )));
    }
    Ok(Type::new(TypeKind::Pointer(elem)))
  }

  /// Returns a vector type.
  ///
  /// Fails if the length is zero or the element type is not an
  /// integer, floating-point or pointer type.
  pub fn get_vector(elem: Type, len: usize) -> Result<Type> {
    if len == 0 {
      return log_error(Error::InvalidType("vector length must be positive".into()));
    }
    if !(elem.is_int() || elem.is_float() || elem.is_pointer()) {
      return log_error(Error::InvalidType(format!(
        "invalid vector element type `{}`",
        elem
      )));
    }
    Ok(Type::new(TypeKind::Vector(elem, len)))
  }

  /// Returns an array type.
  ///
  /// Fails if the element type is `void`, `label` or a function type.
  pub fn get_array(elem: Type, len: usize) -> Result<Type> {
    if !elem.is_sized_elem() {
      return log_error(Error::InvalidType(format!(
        "invalid array element type `{}`",
        elem
      )));
    }
    Ok(Type::new(TypeKind::Array(elem, len)))
  }

  /// Returns an anonymous structure type.
  ///
  /// Fails if any field type is `void`, `label` or a function type.
  pub fn get_struct(fields: Vec<Type>, packed: bool) -> Result<Type> {
    check_fields(&fields)?;
    Ok(Type::new(TypeKind::Struct(StructType {
      name: None,
      body: RefCell::new(Some(StructBody { fields, packed })),
    })))
  }

  /// Returns an opaque named structure type.
  ///
  /// Use [`StructType::set_body`] to define its fields. Fails if the
  /// name is empty.
  pub fn get_named_struct(name: &str) -> Result<Type> {
    if name.is_empty() {
      return log_error(Error::InvalidType(
        "name of structure must not be empty".into(),
      ));
    }
    Ok(Type::new(TypeKind::Struct(StructType {
      name: Some(name.into()),
      body: RefCell::new(None),
    })))
  }

  /// Returns a function type.
  ///
  /// Fails if the return type is `label` or a function type, or any
  /// parameter type is `void`, `label` or a function type.
  pub fn get_function(params: Vec<Type>, ret: Type, variadic: bool) -> Result<Type> {
    if ret.is_label() || ret.is_function() {
      return log_error(Error::InvalidType(format!(
        "invalid function return type `{}`",
        ret
      )));
    }
    if let Some(param) = params.iter().find(|p| !p.is_sized_elem()) {
      return log_error(Error::InvalidType(format!(
        "invalid function parameter type `{}`",
        param
      )));
    }
    Ok(Type::new(TypeKind::Function {
      ret,
      params,
      variadic,
    }))
  }

  /// Returns a reference to the kind of the current type.
  pub fn kind(&self) -> &TypeKind {
    &self.0
  }

  /// Checks if the current type is `void`.
  pub fn is_void(&self) -> bool {
    matches!(self.kind(), TypeKind::Void)
  }

  /// Checks if the current type is `label`.
  pub fn is_label(&self) -> bool {
    matches!(self.kind(), TypeKind::Label)
  }

  /// Checks if the current type is an integer type.
  pub fn is_int(&self) -> bool {
    matches!(self.kind(), TypeKind::Int(_))
  }

  /// Checks if the current type is a floating-point type.
  pub fn is_float(&self) -> bool {
    matches!(self.kind(), TypeKind::Float(_))
  }

  /// Checks if the current type is a pointer type.
  pub fn is_pointer(&self) -> bool {
    matches!(self.kind(), TypeKind::Pointer(_))
  }

  /// Checks if the current type is a function type.
  pub fn is_function(&self) -> bool {
    matches!(self.kind(), TypeKind::Function { .. })
  }

  /// Checks if values of the current type can be produced by
  /// instructions, i.e. the type is neither `void` nor a function type.
  pub fn is_first_class(&self) -> bool {
    !self.is_void() && !self.is_function()
  }

  /// Returns the bit width if the current type is an integer type.
  pub fn int_bits(&self) -> Option<u32> {
    match self.kind() {
      TypeKind::Int(bits) => Some(*bits),
      _ => None,
    }
  }

  /// Returns the kind if the current type is a floating-point type.
  pub fn float_kind(&self) -> Option<FloatKind> {
    match self.kind() {
      TypeKind::Float(kind) => Some(*kind),
      _ => None,
    }
  }

  /// Returns the pointee type if the current type is a pointer type.
  pub fn pointee(&self) -> Option<&Type> {
    match self.kind() {
      TypeKind::Pointer(elem) => Some(elem),
      _ => None,
    }
  }

  /// Returns the structure if the current type is a structure type.
  pub fn as_struct(&self) -> Option<&StructType> {
    match self.kind() {
      TypeKind::Struct(s) => Some(s),
      _ => None,
    }
  }

  /// Returns the type definition of a named structure, e.g.
  ///
  /// ```text
  /// %node = type { i32, %node* }
  /// ```
  ///
  /// Returns `None` if the current type is not a named structure.
  pub fn definition(&self) -> Option<String> {
    let s = self.as_struct()?;
    let name = s.name()?;
    Some(format!("{} = type {}", enc::local(name), StructBodyDisplay(s)))
  }

  /// Checks if the current type contains the named structure by value,
  /// i.e. not through a pointer.
  fn contains_struct(&self, name: &str) -> bool {
    match self.kind() {
      TypeKind::Array(elem, _) | TypeKind::Vector(elem, _) => elem.contains_struct(name),
      TypeKind::Struct(s) => {
        s.name() == Some(name) || s.fields().iter().any(|f| f.contains_struct(name))
      }
      _ => false,
    }
  }

  /// Checks if the current type can be used as an element of
  /// arrays or structures.
  fn is_sized_elem(&self) -> bool {
    !self.is_void() && !self.is_label() && !self.is_function()
  }
}

impl PartialEq for Type {
  fn eq(&self, other: &Self) -> bool {
    Rc::ptr_eq(&self.0, &other.0) || self.0 == other.0
  }
}

impl Hash for Type {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.0.hash(state)
  }
}

impl fmt::Display for Type {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    self.0.fmt(f)
  }
}

impl fmt::Debug for Type {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    fmt::Display::fmt(self, f)
  }
}

/// Displays the body of a structure, even if it is named.
struct StructBodyDisplay<'a>(&'a StructType);

impl fmt::Display for StructBodyDisplay<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    self.0.fmt_body(f)
  }
}

/// Checks if all the given types can be structure fields.
fn check_fields(fields: &[Type]) -> Result<()> {
  match fields.iter().find(|f| !f.is_sized_elem()) {
    Some(field) => log_error(Error::InvalidType(format!(
      "invalid structure field type `{}`",
      field
    ))),
    None => Ok(()),
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use std::collections::HashSet;

  fn all_kinds() -> Vec<Type> {
    let node = Type::get_named_struct("node").unwrap();
    vec![
      Type::get_void(),
      Type::get_label(),
      Type::get_i32(),
      Type::get_float(FloatKind::Double),
      Type::get_pointer(Type::get_i8()).unwrap(),
      Type::get_vector(Type::get_i32(), 4).unwrap(),
      Type::get_array(Type::get_i32(), 4).unwrap(),
      Type::get_struct(vec![Type::get_i32()], false).unwrap(),
      node,
      Type::get_function(vec![], Type::get_void(), false).unwrap(),
    ]
  }

  #[test]
  fn print_basic_types() {
    assert_eq!(format!("{}", Type::get_void()), "void");
    assert_eq!(format!("{}", Type::get_label()), "label");
    assert_eq!(format!("{}", Type::get_int(32).unwrap()), "i32");
    assert_eq!(format!("{}", Type::get_int(1).unwrap()), "i1");
    assert_eq!(format!("{}", Type::get_i64()), "i64");
    let floats = [
      (FloatKind::Half, "half"),
      (FloatKind::Float, "float"),
      (FloatKind::Double, "double"),
      (FloatKind::Fp128, "fp128"),
      (FloatKind::X86Fp80, "x86_fp80"),
      (FloatKind::PpcFp128, "ppc_fp128"),
    ];
    for (kind, s) in floats {
      assert_eq!(format!("{}", Type::get_float(kind)), s);
    }
  }

  #[test]
  fn print_derived_types() {
    let i32p = Type::get_pointer(Type::get_i32()).unwrap();
    assert_eq!(format!("{}", i32p), "i32*");
    let arr = Type::get_array(i32p.clone(), 10).unwrap();
    assert_eq!(format!("{}", arr), "[10 x i32*]");
    let vec = Type::get_vector(Type::get_float(FloatKind::Float), 4).unwrap();
    assert_eq!(format!("{}", vec), "<4 x float>");
    let st = Type::get_struct(vec![Type::get_i8(), arr], false).unwrap();
    assert_eq!(format!("{}", st), "{ i8, [10 x i32*] }");
    let packed = Type::get_struct(vec![Type::get_i8(), Type::get_i32()], true).unwrap();
    assert_eq!(format!("{}", packed), "<{ i8, i32 }>");
    let empty = Type::get_struct(vec![], false).unwrap();
    assert_eq!(format!("{}", empty), "{}");
    let func = Type::get_function(vec![Type::get_i32(), i32p], Type::get_void(), false).unwrap();
    assert_eq!(format!("{}", func), "void (i32, i32*)");
    let printf = Type::get_function(
      vec![Type::get_pointer(Type::get_i8()).unwrap()],
      Type::get_i32(),
      true,
    )
    .unwrap();
    assert_eq!(format!("{}", printf), "i32 (i8*, ...)");
    let only_va = Type::get_function(vec![], Type::get_void(), true).unwrap();
    assert_eq!(format!("{}", only_va), "void (...)");
    let fp = Type::get_pointer(printf).unwrap();
    assert_eq!(format!("{}", fp), "i32 (i8*, ...)*");
  }

  #[test]
  fn equality_is_structural() {
    assert_eq!(Type::get_int(32).unwrap(), Type::get_i32());
    assert_ne!(Type::get_i32(), Type::get_i64());
    assert_eq!(
      Type::get_float(FloatKind::Half),
      Type::get_float(FloatKind::Half)
    );
    assert_ne!(
      Type::get_float(FloatKind::Fp128),
      Type::get_float(FloatKind::PpcFp128)
    );
    assert_eq!(Type::get_void(), Type::get_void());
    assert_eq!(Type::get_label(), Type::get_label());
    let a = Type::get_array(Type::get_i8(), 3).unwrap();
    let b = Type::get_array(Type::get_i8(), 3).unwrap();
    let c = Type::get_array(Type::get_i8(), 4).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(
      Type::get_vector(Type::get_i8(), 3).unwrap(),
      Type::get_array(Type::get_i8(), 3).unwrap()
    );
    let s1 = Type::get_struct(vec![Type::get_i8()], false).unwrap();
    let s2 = Type::get_struct(vec![Type::get_i8()], false).unwrap();
    let s3 = Type::get_struct(vec![Type::get_i8()], true).unwrap();
    assert_eq!(s1, s2);
    assert_ne!(s1, s3);
    let f1 = Type::get_function(vec![Type::get_i8()], Type::get_void(), false).unwrap();
    let f2 = Type::get_function(vec![Type::get_i8()], Type::get_void(), true).unwrap();
    assert_ne!(f1, f2);
  }

  #[test]
  fn equality_laws() {
    let lhs = all_kinds();
    let rhs = all_kinds();
    for (i, t) in lhs.iter().enumerate() {
      assert_eq!(t, t);
      for (j, u) in rhs.iter().enumerate() {
        assert_eq!(t == u, i == j, "`{}` vs `{}`", t, u);
        assert_eq!(t == u, u == t);
      }
    }
  }

  #[test]
  fn equal_types_hash_equally() {
    let set: HashSet<Type> = all_kinds().into_iter().chain(all_kinds()).collect();
    assert_eq!(set.len(), all_kinds().len());
  }

  #[test]
  fn named_structs() {
    let node = Type::get_named_struct("node").unwrap();
    let s = node.as_struct().unwrap();
    assert!(s.is_opaque());
    assert_eq!(node.definition().unwrap(), "%node = type opaque");
    let next = Type::get_pointer(node.clone()).unwrap();
    s.set_body(vec![Type::get_i32(), next], false).unwrap();
    assert!(!s.is_opaque());
    assert_eq!(s.fields().len(), 2);
    assert_eq!(format!("{}", node), "%node");
    assert_eq!(node.definition().unwrap(), "%node = type { i32, %node* }");
    assert_eq!(
      s.set_body(vec![], false),
      Err(Error::StructRedefined("node".into()))
    );

    // nominal equality
    let other = Type::get_named_struct("node").unwrap();
    assert_eq!(node, other);
    let anon = Type::get_struct(s.fields(), false).unwrap();
    assert_ne!(node, anon);
    assert_ne!(node, Type::get_named_struct("list").unwrap());

    let quoted = Type::get_named_struct("struct.my pair").unwrap();
    assert_eq!(format!("{}", quoted), "%\"struct.my pair\"");
    assert_eq!(Type::get_i32().definition(), None);
  }

  #[test]
  fn recursion_only_through_pointers() {
    let node = Type::get_named_struct("node").unwrap();
    let s = node.as_struct().unwrap();
    assert!(matches!(
      s.set_body(vec![Type::get_i32(), node.clone()], false),
      Err(Error::InvalidType(_))
    ));
    let arr = Type::get_array(node.clone(), 2).unwrap();
    assert!(s.set_body(vec![arr], false).is_err());
    let wrapped = Type::get_struct(vec![Type::get_i8(), node.clone()], false).unwrap();
    assert!(s.set_body(vec![wrapped], true).is_err());
    // a rejected body leaves the structure opaque
    assert!(s.is_opaque());

    // mutual recursion by value
    let pair = Type::get_named_struct("pair").unwrap();
    pair
      .as_struct()
      .unwrap()
      .set_body(vec![Type::get_i32(), node.clone()], false)
      .unwrap();
    assert!(s.set_body(vec![pair], false).is_err());

    let next = Type::get_pointer(node.clone()).unwrap();
    let arr = Type::get_array(next, 2).unwrap();
    s.set_body(vec![arr], false).unwrap();
    assert_eq!(node.definition().unwrap(), "%node = type { [2 x %node*] }");
  }

  #[test]
  fn invalid_types() {
    assert!(matches!(Type::get_int(0), Err(Error::InvalidType(_))));
    assert!(Type::get_int(Type::MAX_INT_BITS).is_ok());
    assert!(Type::get_int(Type::MAX_INT_BITS + 1).is_err());
    assert!(Type::get_pointer(Type::get_void()).is_err());
    assert!(Type::get_pointer(Type::get_label()).is_err());
    assert!(Type::get_array(Type::get_void(), 1).is_err());
    assert!(Type::get_array(Type::get_i8(), 0).is_ok());
    assert!(Type::get_vector(Type::get_i8(), 0).is_err());
    assert!(Type::get_vector(Type::get_array(Type::get_i8(), 2).unwrap(), 2).is_err());
    assert!(Type::get_struct(vec![Type::get_label()], false).is_err());
    assert!(Type::get_named_struct("").is_err());
    assert!(Type::get_function(vec![Type::get_void()], Type::get_void(), false).is_err());
    assert!(Type::get_function(vec![], Type::get_label(), false).is_err());
  }

  #[test]
  fn printing_is_stable() {
    for ty in all_kinds() {
      assert_eq!(ty.to_string(), ty.to_string());
    }
  }
}
