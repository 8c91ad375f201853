/// Type of implicit local IDs.
pub type LocalId = u32;

/// Allocator of implicit local IDs (`%0`, `%1`, ...).
///
/// Every instruction sequence owns one counter. IDs start from 0 and
/// are handed out in increasing order, an ID is never handed out twice.
/// There is no way to reset a counter, a new sequence comes with a new
/// counter instead.
#[derive(Debug, Default)]
pub struct LocalIdCounter {
  next: LocalId,
}

impl LocalIdCounter {
  /// Creates a new counter starting from 0.
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns the next available ID, then advances the counter.
  pub fn next_id(&mut self) -> LocalId {
    let id = self.next;
    self.next += 1;
    id
  }

  /// Returns the next available ID without advancing the counter.
  pub fn peek(&self) -> LocalId {
    self.next
  }
}
