use crate::{
  observable::{Observable, ObservableExt},
  observer::Observer,
};

/// Failure-substitution stage.
///
/// On upstream failure the closure builds a replacement observable and the
/// downstream observer is subscribed to it. The replacement must be of the
/// same stream kind as the upstream; the `S2: Observable` bound makes handing
/// back anything else a type error.
pub struct ResumeNextOp<S, F> {
  source: S,
  func: F,
}

impl<S, F> ResumeNextOp<S, F> {
  pub fn new(source: S, func: F) -> Self { ResumeNextOp { source, func } }
}

impl<Item, Err, O, S, S2, F> Observable<Item, Err, O> for ResumeNextOp<S, F>
where
  O: Observer<Item, Err>,
  S: Observable<Item, Err, ResumeNextObserver<O, F>>,
  S2: Observable<Item, Err, O>,
  F: FnOnce(Err) -> S2,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    self
      .source
      .actual_subscribe(ResumeNextObserver { observer, func: self.func })
  }
}

impl<S, F> ObservableExt for ResumeNextOp<S, F> {}

pub struct ResumeNextObserver<O, F> {
  observer: O,
  func: F,
}

impl<Item, Err, O, F, S2> Observer<Item, Err> for ResumeNextObserver<O, F>
where
  O: Observer<Item, Err>,
  F: FnOnce(Err) -> S2,
  S2: Observable<Item, Err, O>,
{
  fn next(&mut self, value: Item) { self.observer.next(value); }

  fn error(self, err: Err) {
    // The replacement resolves synchronously; its unsubscriber is already
    // spent when actual_subscribe returns.
    (self.func)(err).actual_subscribe(self.observer);
  }

  fn complete(self) { self.observer.complete(); }

  fn is_finished(&self) -> bool { self.observer.is_finished() }
}

#[cfg(test)]
mod test {
  use crate::prelude::*;

  #[test]
  fn substitution_can_recover() {
    let mut got = vec![];
    observable::from_iter(0..4)
      .map(|v: i32| if v == 2 { panic!("broken") } else { v })
      .on_error_resume_next(|_: RxError| observable::from_iter(10..12))
      .subscribe_err(|v| got.push(v), |_: RxError| unreachable!());

    assert_eq!(got, vec![0, 1, 10, 11]);
  }

  #[test]
  fn re_raising_keeps_the_failure_terminal() {
    let mut emitted = 0;
    let mut failed = None;
    observable::from_iter(0..100)
      .map(|v: i32| if v == 0 { panic!("我擦") } else { -v })
      .on_error_resume_next(|e: RxError| observable::throw_err(e))
      .subscribe_err(|_| emitted += 1, |e| failed = Some(e));

    assert_eq!(emitted, 0);
    assert_eq!(failed, Some(RxError::new("我擦")));
  }
}
