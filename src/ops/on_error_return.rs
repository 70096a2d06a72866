use crate::{
  observable::{Observable, ObservableExt},
  observer::Observer,
};

/// Maps any upstream failure to a fixed value: the failure is absorbed and
/// the downstream observer sees the value followed by a completion.
pub struct OnErrorReturnOp<S, F> {
  source: S,
  func: F,
}

impl<S, F> OnErrorReturnOp<S, F> {
  pub fn new(source: S, func: F) -> Self { OnErrorReturnOp { source, func } }
}

impl<Item, Err, O, S, F> Observable<Item, Err, O> for OnErrorReturnOp<S, F>
where
  O: Observer<Item, Err>,
  S: Observable<Item, Err, OnErrorReturnObserver<O, F>>,
  F: FnOnce(Err) -> Item,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    self
      .source
      .actual_subscribe(OnErrorReturnObserver { observer, func: self.func })
  }
}

impl<S, F> ObservableExt for OnErrorReturnOp<S, F> {}

pub struct OnErrorReturnObserver<O, F> {
  observer: O,
  func: F,
}

impl<Item, Err, O, F> Observer<Item, Err> for OnErrorReturnObserver<O, F>
where
  O: Observer<Item, Err>,
  F: FnOnce(Err) -> Item,
{
  fn next(&mut self, value: Item) { self.observer.next(value); }

  fn error(self, err: Err) {
    let OnErrorReturnObserver { mut observer, func } = self;
    observer.next(func(err));
    observer.complete();
  }

  fn complete(self) { self.observer.complete(); }

  fn is_finished(&self) -> bool { self.observer.is_finished() }
}

/// [`OnErrorReturnOp`] with the default value fixed up front.
pub struct OnErrorReturnItemOp<S, Item> {
  source: S,
  value: Item,
}

impl<S, Item> OnErrorReturnItemOp<S, Item> {
  pub fn new(source: S, value: Item) -> Self { OnErrorReturnItemOp { source, value } }
}

impl<Item, Err, O, S> Observable<Item, Err, O> for OnErrorReturnItemOp<S, Item>
where
  O: Observer<Item, Err>,
  S: Observable<Item, Err, OnErrorReturnItemObserver<O, Item>>,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    self
      .source
      .actual_subscribe(OnErrorReturnItemObserver { observer, value: self.value })
  }
}

impl<S, Item> ObservableExt for OnErrorReturnItemOp<S, Item> {}

pub struct OnErrorReturnItemObserver<O, Item> {
  observer: O,
  value: Item,
}

impl<Item, Err, O> Observer<Item, Err> for OnErrorReturnItemObserver<O, Item>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) { self.observer.next(value); }

  fn error(self, _err: Err) {
    let OnErrorReturnItemObserver { mut observer, value } = self;
    observer.next(value);
    observer.complete();
  }

  fn complete(self) { self.observer.complete(); }

  fn is_finished(&self) -> bool { self.observer.is_finished() }
}

#[cfg(test)]
mod test {
  use crate::prelude::*;

  #[test]
  fn absorbs_failure_into_default() {
    let mut got = vec![];
    observable::from_iter(0..5)
      .map(|v: i32| if v == 3 { panic!("broken") } else { v })
      .on_error_return(|_: RxError| 99)
      .subscribe_err(|v| got.push(v), |_: RxError| unreachable!());

    assert_eq!(got, vec![0, 1, 2, 99]);
  }

  #[test]
  fn return_item_shorthand_matches() {
    let mut got = vec![];
    observable::throw_err(RxError::new("down"))
      .on_error_return_item(2)
      .subscribe_err(|v| got.push(v), |_: RxError| unreachable!());

    assert_eq!(got, vec![2]);
  }
}
