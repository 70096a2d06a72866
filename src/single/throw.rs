use crate::single::{Single, SingleExt, SingleObserver};

/// Creates a single that resolves with the failure given.
pub fn throw_err<Err>(error: Err) -> ThrowSingle<Err> { ThrowSingle(error) }

#[derive(Clone)]
pub struct ThrowSingle<Err>(Err);

impl<Item, Err, O> Single<Item, Err, O> for ThrowSingle<Err>
where
  O: SingleObserver<Item, Err>,
{
  type Unsub = ();

  fn actual_subscribe(self, observer: O) -> Self::Unsub { observer.error(self.0) }
}

impl<Err> SingleExt for ThrowSingle<Err> {}
