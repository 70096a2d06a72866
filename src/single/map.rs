use std::{
  marker::PhantomData,
  panic::{catch_unwind, AssertUnwindSafe},
};

use crate::{
  error::Panicked,
  single::{Single, SingleExt, SingleObserver},
};

/// Single transform stage.
///
/// Runs before the single resolves: a panic in the closure is captured and
/// becomes the single's failure. This is the recommended place to turn a
/// status-code check into a stream failure.
pub struct MapSingle<S, F, A> {
  source: S,
  func: F,
  _p: PhantomData<A>,
}

impl<S, F, A> MapSingle<S, F, A> {
  pub fn new(source: S, func: F) -> Self { MapSingle { source, func, _p: PhantomData } }
}

impl<A, B, Err, O, S, F> Single<B, Err, O> for MapSingle<S, F, A>
where
  O: SingleObserver<B, Err>,
  S: Single<A, Err, MapSingleObserver<O, F>>,
  F: FnOnce(A) -> B,
  Err: From<Panicked>,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    self
      .source
      .actual_subscribe(MapSingleObserver { observer, func: self.func })
  }
}

impl<S, F, A> SingleExt for MapSingle<S, F, A> {}

pub struct MapSingleObserver<O, F> {
  observer: O,
  func: F,
}

impl<Item, B, Err, O, F> SingleObserver<Item, Err> for MapSingleObserver<O, F>
where
  O: SingleObserver<B, Err>,
  F: FnOnce(Item) -> B,
  Err: From<Panicked>,
{
  fn success(self, value: Item) {
    let MapSingleObserver { observer, func } = self;
    match catch_unwind(AssertUnwindSafe(move || func(value))) {
      Ok(mapped) => observer.success(mapped),
      Err(payload) => observer.error(Panicked::new(payload).into()),
    }
  }

  fn error(self, err: Err) { self.observer.error(err) }
}
