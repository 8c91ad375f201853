//! Instruction sequences ([`Body`]) under construction, and the
//! instruction list ([`InstList`]) that stores their order.

use crate::ir::idman::LocalIdCounter;
use crate::ir::local::LocalDef;
use crate::ir::values::EffectInst;
use key_node_list::{impl_node, KeyNodeList};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// A handle of an instruction in a [`Body`].
///
/// Handles are unique within the body that created them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Inst(u32);

/// A statement in a [`Body`].
pub enum Stmt {
  /// Local definition of a value-producing instruction.
  Def(Rc<LocalDef>),
  /// Instruction that produces no value.
  Effect(Box<dyn EffectInst>),
}

impl fmt::Display for Stmt {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Stmt::Def(def) => write!(f, "{}", def),
      Stmt::Effect(inst) => write!(f, "{}", inst),
    }
  }
}

/// Instruction list, stores the order of all instructions in a body.
///
/// Instruction list is a [`KeyNodeList`], with the key is [`Inst`],
/// and the node is [`InstNode`].
pub type InstList = KeyNodeList<Inst, InstNode>;

/// The node in [`InstList`].
pub struct InstNode {
  prev: Option<Inst>,
  next: Option<Inst>,
}

impl_node!(InstNode { Key = Inst, prev = prev, next = next });

impl From<()> for InstNode {
  fn from(_: ()) -> Self {
    Self {
      prev: None,
      next: None,
    }
  }
}

/// An instruction sequence under construction, e.g. a function body.
///
/// `Body` owns its statements and the [`LocalIdCounter`] that names
/// unnamed definitions. Implicit IDs are assigned when definitions are
/// appended, so they always follow the order of appending.
///
/// # Examples
///
/// ```
/// use llir::ir::body::Body;
/// use llir::ir::instructions::{Binary, BinaryOp};
/// use llir::ir::local::LocalDef;
/// use llir::ir::values::Integer;
///
/// let mut body = Body::new();
/// let add = Binary::new(BinaryOp::Add, Integer::get_i32(13), Integer::get_i32(29)).unwrap();
/// let sum = body.push_def(LocalDef::new("", add).unwrap());
/// let sum = body.def(sum).unwrap().clone();
/// let mul = Binary::new(BinaryOp::Mul, sum, Integer::get_i32(2)).unwrap();
/// body.push_def(LocalDef::new("ans", mul).unwrap());
/// assert_eq!(body.to_string(), "  %0 = add i32 13, 29\n  %ans = mul i32 %0, 2\n");
/// ```
pub struct Body {
  insts: InstList,
  stmts: HashMap<Inst, Stmt>,
  next_inst: u32,
  local_ids: LocalIdCounter,
}

impl Body {
  /// Creates a new empty body.
  pub fn new() -> Self {
    Self {
      insts: InstList::new(),
      stmts: HashMap::new(),
      next_inst: 0,
      local_ids: LocalIdCounter::new(),
    }
  }

  /// Appends a local definition to the end of the body. Returns the
  /// handle of the appended instruction.
  ///
  /// An unnamed definition of a non-void value receives the next
  /// implicit ID of the current body.
  pub fn push_def(&mut self, def: LocalDef) -> Inst {
    if def.needs_id() {
      def.assign_id(self.local_ids.next_id());
    }
    def.mark_appended();
    self.push_stmt(Stmt::Def(Rc::new(def)))
  }

  /// Appends an instruction that produces no value to the end of the
  /// body. Returns the handle of the appended instruction.
  pub fn push_inst<I>(&mut self, inst: I) -> Inst
  where
    I: EffectInst + 'static,
  {
    self.push_stmt(Stmt::Effect(Box::new(inst)))
  }

  fn push_stmt(&mut self, stmt: Stmt) -> Inst {
    let inst = Inst(self.next_inst);
    self.next_inst += 1;
    let pushed = self.insts.push_key_back(inst).is_ok();
    debug_assert!(pushed, "instruction handle is already in the list");
    self.stmts.insert(inst, stmt);
    inst
  }

  /// Returns a reference to the statement of the given instruction,
  /// `None` if the instruction is not in the current body.
  pub fn stmt(&self, inst: Inst) -> Option<&Stmt> {
    self.stmts.get(&inst)
  }

  /// Returns a reference to the local definition of the given
  /// instruction, `None` if the instruction is not in the current body
  /// or is not a local definition.
  ///
  /// The returned definition can be cloned and used as an operand.
  pub fn def(&self, inst: Inst) -> Option<&Rc<LocalDef>> {
    match self.stmts.get(&inst) {
      Some(Stmt::Def(def)) => Some(def),
      _ => None,
    }
  }

  /// Removes the given instruction from the body. Returns the removed
  /// statement, `None` if the instruction is not in the current body.
  ///
  /// The implicit ID of a removed definition is not reused.
  pub fn remove(&mut self, inst: Inst) -> Option<Stmt> {
    self.insts.remove(&inst)?;
    self.stmts.remove(&inst)
  }

  /// Returns a reference to the instruction list.
  pub fn insts(&self) -> &InstList {
    &self.insts
  }

  /// Returns an iterator over all statements in order.
  pub fn stmts(&self) -> impl Iterator<Item = &Stmt> {
    self.insts.keys().filter_map(move |inst| self.stmts.get(inst))
  }

  /// Returns the number of instructions in the body.
  pub fn len(&self) -> usize {
    self.insts.len()
  }

  /// Checks if the body is empty.
  pub fn is_empty(&self) -> bool {
    self.insts.is_empty()
  }

  /// Returns a reference to the local ID counter.
  pub fn local_ids(&self) -> &LocalIdCounter {
    &self.local_ids
  }
}

impl Default for Body {
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for Body {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    for stmt in self.stmts() {
      writeln!(f, "  {}", stmt)?;
    }
    Ok(())
  }
}
