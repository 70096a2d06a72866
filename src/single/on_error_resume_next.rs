use crate::single::{Single, SingleExt, SingleObserver};

/// Failure-substitution stage for singles.
///
/// On upstream failure the closure builds a replacement single and the
/// downstream observer is subscribed to it. Useful for falling back to a
/// backup source when the primary fails; returning `throw_err(err)` re-raises
/// the failure unchanged.
pub struct ResumeNextSingle<S, F> {
  source: S,
  func: F,
}

impl<S, F> ResumeNextSingle<S, F> {
  pub fn new(source: S, func: F) -> Self { ResumeNextSingle { source, func } }
}

impl<Item, Err, O, S, S2, F> Single<Item, Err, O> for ResumeNextSingle<S, F>
where
  O: SingleObserver<Item, Err>,
  S: Single<Item, Err, ResumeNextSingleObserver<O, F>>,
  S2: Single<Item, Err, O>,
  F: FnOnce(Err) -> S2,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    self
      .source
      .actual_subscribe(ResumeNextSingleObserver { observer, func: self.func })
  }
}

impl<S, F> SingleExt for ResumeNextSingle<S, F> {}

pub struct ResumeNextSingleObserver<O, F> {
  observer: O,
  func: F,
}

impl<Item, Err, O, F, S2> SingleObserver<Item, Err> for ResumeNextSingleObserver<O, F>
where
  O: SingleObserver<Item, Err>,
  F: FnOnce(Err) -> S2,
  S2: Single<Item, Err, O>,
{
  fn success(self, value: Item) { self.observer.success(value) }

  fn error(self, err: Err) {
    (self.func)(err).actual_subscribe(self.observer);
  }
}
