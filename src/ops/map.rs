use std::{
  marker::PhantomData,
  panic::{catch_unwind, AssertUnwindSafe},
};

use crate::{
  error::Panicked,
  observable::{Observable, ObservableExt},
  observer::Observer,
};

/// Observable transform stage.
///
/// The closure runs while the error channel is still open, so a panic inside
/// it becomes a normal channel failure: the downstream observer receives
/// `error`, and the upstream source sees `is_finished` and stops emitting.
pub struct MapOp<S, F, A> {
  source: S,
  func: F,
  _p: PhantomData<A>,
}

impl<S, F, A> MapOp<S, F, A> {
  pub fn new(source: S, func: F) -> Self { MapOp { source, func, _p: PhantomData } }
}

impl<A, B, Err, O, S, F> Observable<B, Err, O> for MapOp<S, F, A>
where
  O: Observer<B, Err>,
  S: Observable<A, Err, MapObserver<O, F>>,
  F: FnMut(A) -> B,
  Err: From<Panicked>,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    self
      .source
      .actual_subscribe(MapObserver { observer: Some(observer), func: self.func })
  }
}

impl<S, F, A> ObservableExt for MapOp<S, F, A> {}

pub struct MapObserver<O, F> {
  observer: Option<O>,
  func: F,
}

impl<Item, B, Err, O, F> Observer<Item, Err> for MapObserver<O, F>
where
  O: Observer<B, Err>,
  F: FnMut(Item) -> B,
  Err: From<Panicked>,
{
  fn next(&mut self, value: Item) {
    let func = &mut self.func;
    match catch_unwind(AssertUnwindSafe(|| func(value))) {
      Ok(mapped) => {
        if let Some(observer) = &mut self.observer {
          observer.next(mapped);
        }
      }
      Err(payload) => {
        if let Some(observer) = self.observer.take() {
          observer.error(Panicked::new(payload).into());
        }
      }
    }
  }

  fn error(self, err: Err) {
    if let Some(observer) = self.observer {
      observer.error(err);
    }
  }

  fn complete(self) {
    if let Some(observer) = self.observer {
      observer.complete();
    }
  }

  fn is_finished(&self) -> bool { self.observer.as_ref().is_none_or(|o| o.is_finished()) }
}
