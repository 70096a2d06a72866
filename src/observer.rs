//! Observer: the consumer side of a multi-value stream.

/// Consumer of a multi-value stream.
///
/// `error` and `complete` consume the observer: a stream emits at most one
/// terminal event, and afterwards no more values can be delivered.
///
/// `is_finished` is checked by sources (like `from_iter`) before each
/// emission, so a stream stops producing elements once a failure has been
/// signalled downstream.
pub trait Observer<Item, Err> {
  /// Receive the next value.
  fn next(&mut self, value: Item);

  /// Receive the terminal failure.
  fn error(self, err: Err);

  /// Receive the terminal completion.
  fn complete(self);

  /// Whether this observer already saw a terminal event and will accept no
  /// more values.
  fn is_finished(&self) -> bool;
}
