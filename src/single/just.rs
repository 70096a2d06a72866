use crate::single::{Single, SingleExt, SingleObserver};

/// Creates a single that resolves successfully with the value given.
pub fn just<Item>(value: Item) -> JustSingle<Item> { JustSingle(value) }

#[derive(Clone)]
pub struct JustSingle<Item>(Item);

impl<Item, Err, O> Single<Item, Err, O> for JustSingle<Item>
where
  O: SingleObserver<Item, Err>,
{
  type Unsub = ();

  fn actual_subscribe(self, observer: O) -> Self::Unsub { observer.success(self.0) }
}

impl<Item> SingleExt for JustSingle<Item> {}
