use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::{error::Panicked, observable::Observable, observer::Observer};

/// Terminal observer built from a next and an error callback.
///
/// The next callback runs inside the open error channel: a panic raised in it
/// is captured and redirected to the error callback, after which the observer
/// reports itself finished and upstream sources stop emitting. The error
/// callback fires at most once.
pub struct ObserverErr<N, E> {
  next: N,
  error: Option<E>,
}

impl<Item, Err, N, E> Observer<Item, Err> for ObserverErr<N, E>
where
  N: FnMut(Item),
  E: FnOnce(Err),
  Err: From<Panicked>,
{
  fn next(&mut self, value: Item) {
    let next = &mut self.next;
    if let Err(payload) = catch_unwind(AssertUnwindSafe(|| next(value))) {
      if let Some(error) = self.error.take() {
        error(Panicked::new(payload).into());
      }
    }
  }

  fn error(mut self, err: Err) {
    if let Some(error) = self.error.take() {
      error(err);
    }
  }

  fn complete(self) {}

  fn is_finished(&self) -> bool { self.error.is_none() }
}

/// Invokes an execution of an observable and registers the two terminal
/// callbacks of the demonstration contract.
pub trait SubscribeErr<Item, Err, N, E> {
  type Unsub;

  fn subscribe_err(self, next: N, error: E) -> Self::Unsub;
}

impl<S, Item, Err, N, E> SubscribeErr<Item, Err, N, E> for S
where
  S: Observable<Item, Err, ObserverErr<N, E>>,
  N: FnMut(Item),
  E: FnOnce(Err),
  Err: From<Panicked>,
{
  type Unsub = S::Unsub;

  fn subscribe_err(self, next: N, error: E) -> Self::Unsub {
    self.actual_subscribe(ObserverErr { next, error: Some(error) })
  }
}

#[cfg(test)]
mod test {
  use crate::prelude::*;

  #[test]
  fn panic_in_next_callback_redirects_to_error() {
    let mut failed = None;
    observable::of(0).subscribe_err(|_: i32| panic!("我擦"), |e: RxError| failed = Some(e));
    assert_eq!(failed, Some(RxError::new("我擦")));
  }

  #[test]
  fn error_callback_fires_at_most_once() {
    let mut errors = 0;
    observable::from_iter(0..10).subscribe_err(|_| panic!("each"), |_: RxError| errors += 1);
    assert_eq!(errors, 1);
  }
}
