pub use crate::{
  catalog::{Case, Outcome},
  error::{Panicked, RxError},
  observable::{self, Observable, ObservableExt, SubscribeErr},
  observer::Observer,
  ops,
  single::{self, Single, SingleExt, SingleObserver, SubscribeSingle},
};
