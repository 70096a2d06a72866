use crate::single::{Single, SingleExt, SingleObserver};

/// Maps any upstream failure to a default value: the failure is absorbed and
/// the single resolves successfully.
pub struct OnErrorReturnSingle<S, F> {
  source: S,
  func: F,
}

impl<S, F> OnErrorReturnSingle<S, F> {
  pub fn new(source: S, func: F) -> Self { OnErrorReturnSingle { source, func } }
}

impl<Item, Err, O, S, F> Single<Item, Err, O> for OnErrorReturnSingle<S, F>
where
  O: SingleObserver<Item, Err>,
  S: Single<Item, Err, OnErrorReturnSingleObserver<O, F>>,
  F: FnOnce(Err) -> Item,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    self
      .source
      .actual_subscribe(OnErrorReturnSingleObserver { observer, func: self.func })
  }
}

impl<S, F> SingleExt for OnErrorReturnSingle<S, F> {}

pub struct OnErrorReturnSingleObserver<O, F> {
  observer: O,
  func: F,
}

impl<Item, Err, O, F> SingleObserver<Item, Err> for OnErrorReturnSingleObserver<O, F>
where
  O: SingleObserver<Item, Err>,
  F: FnOnce(Err) -> Item,
{
  fn success(self, value: Item) { self.observer.success(value) }

  fn error(self, err: Err) { self.observer.success((self.func)(err)) }
}

/// [`OnErrorReturnSingle`] with the default value fixed up front.
pub struct OnErrorReturnItemSingle<S, Item> {
  source: S,
  value: Item,
}

impl<S, Item> OnErrorReturnItemSingle<S, Item> {
  pub fn new(source: S, value: Item) -> Self { OnErrorReturnItemSingle { source, value } }
}

impl<Item, Err, O, S> Single<Item, Err, O> for OnErrorReturnItemSingle<S, Item>
where
  O: SingleObserver<Item, Err>,
  S: Single<Item, Err, OnErrorReturnItemSingleObserver<O, Item>>,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    self
      .source
      .actual_subscribe(OnErrorReturnItemSingleObserver { observer, value: self.value })
  }
}

impl<S, Item> SingleExt for OnErrorReturnItemSingle<S, Item> {}

pub struct OnErrorReturnItemSingleObserver<O, Item> {
  observer: O,
  value: Item,
}

impl<Item, Err, O> SingleObserver<Item, Err> for OnErrorReturnItemSingleObserver<O, Item>
where
  O: SingleObserver<Item, Err>,
{
  fn success(self, value: Item) { self.observer.success(value) }

  fn error(self, _err: Err) { self.observer.success(self.value) }
}

#[cfg(test)]
mod test {
  use crate::prelude::*;

  #[test]
  fn absorbs_failure_into_default() {
    let mut got = None;
    single::just(0)
      .map(|v: i32| if v == 0 { panic!("我擦") } else { 1 })
      .on_error_return(|_: RxError| 2)
      .subscribe(|v| got = Some(v), |_: RxError| unreachable!());
    assert_eq!(got, Some(2));
  }

  #[test]
  fn return_item_shorthand_matches() {
    let mut got = None;
    single::just(0)
      .map(|v: i32| if v == 0 { panic!("我擦") } else { 1 })
      .on_error_return_item(2)
      .subscribe(|v| got = Some(v), |_: RxError| unreachable!());
    assert_eq!(got, Some(2));
  }

  #[test]
  fn success_passes_through_untouched() {
    let mut got = None;
    single::just(5)
      .on_error_return_item(2)
      .subscribe(|v| got = Some(v), |_: RxError| unreachable!());
    assert_eq!(got, Some(5));
  }
}
