use crate::{
  observable::{Observable, ObservableExt},
  observer::Observer,
};

/// Creates an observable that signals a failure immediately, emitting no
/// values.
pub fn throw_err<Err>(error: Err) -> ThrowObservable<Err> { ThrowObservable(error) }

#[derive(Clone)]
pub struct ThrowObservable<Err>(Err);

impl<Item, Err, O> Observable<Item, Err, O> for ThrowObservable<Err>
where
  O: Observer<Item, Err>,
{
  type Unsub = ();

  fn actual_subscribe(self, observer: O) -> Self::Unsub { observer.error(self.0) }
}

impl<Err> ObservableExt for ThrowObservable<Err> {}

#[cfg(test)]
mod test {
  use crate::prelude::*;

  #[test]
  fn signals_failure_only() {
    let mut failed = None;
    observable::throw_err(RxError::new("down"))
      .subscribe_err(|_: i32| unreachable!(), |e| failed = Some(e));
    assert_eq!(failed, Some(RxError::new("down")));
  }
}
