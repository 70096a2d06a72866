use crate::single::{Single, SingleObserver};

/// Terminal single observer built from a success and an error callback.
pub struct ObserverSingle<N, E> {
  success: N,
  error: E,
}

impl<Item, Err, N, E> SingleObserver<Item, Err> for ObserverSingle<N, E>
where
  N: FnOnce(Item),
  E: FnOnce(Err),
{
  fn success(self, value: Item) { (self.success)(value) }

  fn error(self, err: Err) { (self.error)(err) }
}

/// Invokes an execution of a single and registers the two terminal callbacks.
///
/// The success callback runs after the single has already resolved: the error
/// channel is closed by then, so a panic raised inside it is not redirected
/// to the error callback. It unwinds out of `subscribe` and becomes the
/// caller's problem. Do failure-prone work in a `map` stage instead.
pub trait SubscribeSingle<Item, Err, N, E> {
  type Unsub;

  fn subscribe(self, success: N, error: E) -> Self::Unsub;
}

impl<S, Item, Err, N, E> SubscribeSingle<Item, Err, N, E> for S
where
  S: Single<Item, Err, ObserverSingle<N, E>>,
  N: FnOnce(Item),
  E: FnOnce(Err),
{
  type Unsub = S::Unsub;

  fn subscribe(self, success: N, error: E) -> Self::Unsub {
    self.actual_subscribe(ObserverSingle { success, error })
  }
}
