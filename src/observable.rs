//! Multi-value streams: zero or more values followed by one terminal event.
//!
//! The error channel of an observable stays open for the entire lifetime of a
//! subscription. A panic raised while transforming or delivering any element
//! is captured and redirected to the failure callback, and no further
//! elements are emitted afterwards.

mod from_iter;
mod of;
mod subscribe_err;
mod throw;

pub use from_iter::{from_iter, ObservableIter};
pub use of::{of, OfObservable};
pub use subscribe_err::{ObserverErr, SubscribeErr};
pub use throw::{throw_err, ThrowObservable};

use crate::{
  observer::Observer,
  ops::{
    map::MapOp,
    on_error_resume_next::ResumeNextOp,
    on_error_return::{OnErrorReturnItemOp, OnErrorReturnOp},
  },
};

/// A multi-value stream that `O` can subscribe to.
pub trait Observable<Item, Err, O: Observer<Item, Err>> {
  type Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub;
}

/// Chaining methods available on every observable.
///
/// All type parameters live on the methods, so a chained call introduces no
/// inference variable the chain itself cannot resolve.
pub trait ObservableExt: Sized {
  /// Transform every element with `f`.
  ///
  /// `f` runs inside the open error channel: if it panics, the panic is
  /// captured and delivered to the failure callback, and the stream stops.
  fn map<A, B, F>(self, f: F) -> MapOp<Self, F, A>
  where
    F: FnMut(A) -> B,
  {
    MapOp::new(self, f)
  }

  /// On failure, switch to the observable returned by `f`.
  ///
  /// The substitute must be an observable as well; handing back a stream of
  /// another cardinality kind does not type-check.
  fn on_error_resume_next<Err, S2, F>(self, f: F) -> ResumeNextOp<Self, F>
  where
    F: FnOnce(Err) -> S2,
  {
    ResumeNextOp::new(self, f)
  }

  /// On failure, emit `f(err)` and complete.
  fn on_error_return<Item, Err, F>(self, f: F) -> OnErrorReturnOp<Self, F>
  where
    F: FnOnce(Err) -> Item,
  {
    OnErrorReturnOp::new(self, f)
  }

  /// Shorthand for [`ObservableExt::on_error_return`] with a fixed value.
  fn on_error_return_item<Item>(self, value: Item) -> OnErrorReturnItemOp<Self, Item> {
    OnErrorReturnItemOp::new(self, value)
  }
}
