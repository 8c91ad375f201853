//! Local definitions ([`LocalDef`]), which bind names to the results of
//! value-producing instructions.

use crate::enc;
use crate::error::{Error, Result};
use crate::ir::idman::LocalId;
use crate::ir::types::Type;
use crate::ir::values::{Value, ValueInst};
use crate::logger::{log_error, log_warning};
use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::fmt;

/// A local definition, e.g.
///
/// ```text
/// %foo = add i32 13, 29
/// ```
///
/// The definition owns its instruction. It is named either explicitly,
/// or implicitly by an ID (`%0`, `%1`, ...) that the owning
/// [`Body`](crate::ir::body::Body) assigns when the definition is
/// appended to it.
///
/// Definitions of `void`-typed instructions are printed without a name,
/// even if one is given.
pub struct LocalDef {
  name: RefCell<String>,
  id: Cell<Option<LocalId>>,
  appended: Cell<bool>,
  inst: Box<dyn ValueInst>,
}

impl LocalDef {
  /// Creates a new local definition of the given instruction.
  /// An empty name means the definition is unnamed.
  ///
  /// Fails with [`Error::InvalidName`] if the name is a bare unsigned
  /// integer, which is reserved for implicit IDs.
  pub fn new<I>(name: &str, inst: I) -> Result<Self>
  where
    I: ValueInst + 'static,
  {
    check_name(name)?;
    let def = Self {
      name: RefCell::new(name.into()),
      id: Cell::new(None),
      appended: Cell::new(false),
      inst: Box::new(inst),
    };
    def.check_void_name();
    Ok(def)
  }

  /// Returns the explicit name, empty if the definition is unnamed.
  pub fn name(&self) -> String {
    self.name.borrow().clone()
  }

  /// Renames the definition. The instruction is not affected.
  ///
  /// Fails with [`Error::InvalidName`] if the name is a bare unsigned
  /// integer, in which case the current name is kept.
  ///
  /// A non-void definition that was appended with an explicit name
  /// never receives an implicit ID, so removing its name fails with
  /// [`Error::NameRequired`].
  pub fn set_name(&self, name: &str) -> Result<()> {
    check_name(name)?;
    if name.is_empty()
      && self.appended.get()
      && self.id.get().is_none()
      && !self.ty().is_void()
    {
      return log_error(Error::NameRequired(enc::local(&self.name.borrow())));
    }
    *self.name.borrow_mut() = name.into();
    self.check_void_name();
    Ok(())
  }

  /// Returns the instruction whose result is defined.
  pub fn value_inst(&self) -> &dyn ValueInst {
    self.inst.as_ref()
  }

  /// Returns the implicit ID, `None` if no ID has been assigned.
  pub fn local_id(&self) -> Option<LocalId> {
    self.id.get()
  }

  /// Assigns the implicit ID.
  pub(in crate::ir) fn assign_id(&self, id: LocalId) {
    debug_assert!(self.id.get().is_none(), "local ID is already assigned");
    self.id.set(Some(id));
  }

  /// Marks the definition as appended to a body.
  pub(in crate::ir) fn mark_appended(&self) {
    self.appended.set(true);
  }

  /// Checks if an implicit ID is needed, i.e. the definition is unnamed
  /// and produces a non-void value.
  pub(in crate::ir) fn needs_id(&self) -> bool {
    self.name.borrow().is_empty() && !self.ty().is_void() && self.id.get().is_none()
  }

  /// Returns the name used when printing, which is the explicit name
  /// if any, otherwise the implicit ID if assigned, otherwise empty.
  fn ident(&self) -> Cow<str> {
    let name = self.name.borrow();
    if !name.is_empty() {
      Cow::Owned(name.clone())
    } else if let Some(id) = self.id.get() {
      Cow::Owned(id.to_string())
    } else {
      Cow::Borrowed("")
    }
  }

  /// Warns about names that will never be printed.
  fn check_void_name(&self) {
    let name = self.name.borrow();
    if !name.is_empty() && self.ty().is_void() {
      log_warning(&format!(
        "name `{}` of void-typed instruction `{}` is ignored",
        enc::local(&name),
        self.inst
      ));
    }
  }
}

impl Value for LocalDef {
  fn ty(&self) -> Type {
    self.inst.ret_type()
  }

  /// Returns the encoded local name. An unnamed definition that has not
  /// been appended to any body yields `%""`.
  fn operand(&self) -> String {
    enc::local(&self.ident())
  }
}

impl fmt::Display for LocalDef {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let ident = self.ident();
    if self.ty().is_void() || ident.is_empty() {
      write!(f, "{}", self.inst)
    } else {
      write!(f, "{} = {}", enc::local(&ident), self.inst)
    }
  }
}

/// Checks if the given name can be used as an explicit local name.
fn check_name(name: &str) -> Result<()> {
  if enc::is_local_id(name) {
    log_error(Error::InvalidName(name.into()))
  } else {
    Ok(())
  }
}
