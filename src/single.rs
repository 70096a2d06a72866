//! Single-value streams: exactly one terminal event, success or failure.
//!
//! A single commits to its success path irrevocably the moment the value is
//! produced. Transform and recovery stages run before that commitment, so
//! they still sit inside the open error channel; the subscriber's success
//! callback does not. A panic raised there is an escaped fault the stream
//! cannot redirect.

mod just;
mod map;
mod on_error_resume_next;
mod on_error_return;
mod subscribe;
mod throw;

pub use just::{just, JustSingle};
pub use map::{MapSingle, MapSingleObserver};
pub use on_error_resume_next::{ResumeNextSingle, ResumeNextSingleObserver};
pub use on_error_return::{
  OnErrorReturnItemSingle, OnErrorReturnItemSingleObserver, OnErrorReturnSingle,
  OnErrorReturnSingleObserver,
};
pub use subscribe::{ObserverSingle, SubscribeSingle};
pub use throw::{throw_err, ThrowSingle};

/// Consumer of a single-value stream: exactly one of the two methods is
/// invoked, exactly once.
pub trait SingleObserver<Item, Err> {
  fn success(self, value: Item);

  fn error(self, err: Err);
}

/// A single-value stream that `O` can subscribe to.
pub trait Single<Item, Err, O: SingleObserver<Item, Err>> {
  type Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub;
}

/// Chaining methods available on every single.
///
/// All type parameters live on the methods, so a chained call introduces no
/// inference variable the chain itself cannot resolve.
pub trait SingleExt: Sized {
  /// Transform the success value with `f`.
  ///
  /// `f` runs before the single resolves, so a panic inside it is still a
  /// channel failure and reaches the error callback. Returning an error
  /// value from `f` does not fail the stream: the value travels the success
  /// path as ordinary data.
  fn map<A, B, F>(self, f: F) -> MapSingle<Self, F, A>
  where
    F: FnOnce(A) -> B,
  {
    MapSingle::new(self, f)
  }

  /// On failure, switch to the single returned by `f`.
  ///
  /// The substitute must itself be a single; the `S2: Single` bound on the
  /// subscription makes a substitute of another stream kind a type error.
  fn on_error_resume_next<Err, S2, F>(self, f: F) -> ResumeNextSingle<Self, F>
  where
    F: FnOnce(Err) -> S2,
  {
    ResumeNextSingle::new(self, f)
  }

  /// On failure, resolve successfully with `f(err)` instead.
  fn on_error_return<Item, Err, F>(self, f: F) -> OnErrorReturnSingle<Self, F>
  where
    F: FnOnce(Err) -> Item,
  {
    OnErrorReturnSingle::new(self, f)
  }

  /// Shorthand for [`SingleExt::on_error_return`] with a fixed value.
  fn on_error_return_item<Item>(self, value: Item) -> OnErrorReturnItemSingle<Self, Item> {
    OnErrorReturnItemSingle::new(self, value)
  }
}
