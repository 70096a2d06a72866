//! The pipeline catalog: nine self-contained demonstration cases.
//!
//! Each case builds a short pipeline, subscribes to it with a success and a
//! failure callback, logs what the callbacks receive (log target
//! `"catalog"`), and reports the terminal outcome. Cases share no state and
//! can be re-run; the same selection always produces the same outcome.

use std::{
  cell::RefCell,
  fmt,
  panic::{catch_unwind, AssertUnwindSafe},
};

use tracing::{debug, error};

use crate::{
  error::{Panicked, RxError},
  observable::{self, ObservableExt as _, SubscribeErr as _},
  single::{self, SingleExt as _, SubscribeSingle as _},
};

const FAULT: &str = "我擦";

/// The recommended shape for turning a status-code check into a stream
/// failure: fault inside the transform, while the error channel is open.
fn fail_on_zero(status: i32) -> i32 {
  if status == 0 {
    panic!("{FAULT}");
  }
  1
}

fn negate_fail_on_zero(v: i32) -> i32 {
  if v == 0 {
    panic!("{FAULT}");
  }
  -v
}

/// One selectable demonstration case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Case {
  /// Single: a panic inside the success callback escapes the stream.
  SuccessCallbackPanic,
  /// Observable: a panic inside the next callback reaches the failure
  /// callback.
  NextCallbackPanic,
  /// Single: a transform returning an error value delivers it as data.
  MapReturnsErrorValue,
  /// Single: a transform that panics fails the stream.
  MapPanics,
  /// Single: a substitution stage re-raising the failure.
  ResumeNextReraises,
  /// Single: failure mapped to a default value.
  ReturnOnError,
  /// Single: same as above via the fixed-item shorthand.
  ReturnItemOnError,
  /// Observable range: the transform panics on the first element, emission
  /// stops.
  RangeMapPanics,
  /// Observable range: substitution re-raises, emission stops the same way.
  RangeResumeNextReraises,
}

/// Terminal state of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  /// The success callback received a number.
  Value(i32),
  /// The success callback received an error-shaped value as ordinary data.
  ErrValue(RxError),
  /// The failure callback fired.
  Failed(RxError),
  /// A panic escaped the pipeline's error channel and was only stopped by
  /// the umbrella handler around the run.
  Crashed(String),
}

impl fmt::Display for Outcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Outcome::Value(v) => write!(f, "succeeded with {v}"),
      Outcome::ErrValue(e) => write!(f, "succeeded with error-shaped value \"{e}\""),
      Outcome::Failed(e) => write!(f, "failed with \"{e}\""),
      Outcome::Crashed(msg) => write!(f, "crashed: \"{msg}\" escaped the error channel"),
    }
  }
}

impl Case {
  /// All cases in selection order.
  pub const ALL: [Case; 9] = [
    Case::SuccessCallbackPanic,
    Case::NextCallbackPanic,
    Case::MapReturnsErrorValue,
    Case::MapPanics,
    Case::ResumeNextReraises,
    Case::ReturnOnError,
    Case::ReturnItemOnError,
    Case::RangeMapPanics,
    Case::RangeResumeNextReraises,
  ];

  /// Maps a selection index in `0..=8` to its case.
  pub fn from_index(index: usize) -> Option<Case> { Case::ALL.get(index).copied() }

  pub fn index(self) -> usize { self as usize }

  pub fn label(self) -> &'static str {
    match self {
      Case::SuccessCallbackPanic => "Single: panic in the success callback (escapes the stream)",
      Case::NextCallbackPanic => "Observable: panic in the next callback (redirected to onError)",
      Case::MapReturnsErrorValue => "Single: map returns an error value (delivered as data)",
      Case::MapPanics => "Single: map panics (fails the stream)",
      Case::ResumeNextReraises => "Single: onErrorResumeNext re-raises the failure",
      Case::ReturnOnError => "Single: onErrorReturn substitutes a default value",
      Case::ReturnItemOnError => "Single: onErrorReturnItem shorthand",
      Case::RangeMapPanics => "Observable range: map panics, emission stops",
      Case::RangeResumeNextReraises => {
        "Observable range: onErrorResumeNext re-raises, emission stops"
      }
    }
  }

  /// Runs the case and reports its terminal state.
  ///
  /// The run is wrapped in `catch_unwind`, standing in for whatever umbrella
  /// fault handler the host provides: a panic that escaped the stream's
  /// error channel surfaces as [`Outcome::Crashed`] instead of aborting the
  /// caller.
  pub fn run(self) -> Outcome {
    match catch_unwind(AssertUnwindSafe(|| self.execute())) {
      Ok(Some(outcome)) => outcome,
      // Every pipeline resolves synchronously during subscribe, so the only
      // way to end up here is a fault that bypassed both recording closures.
      Ok(None) => {
        error!(target: "catalog", "pipeline ended without a terminal event");
        Outcome::Crashed(String::from("pipeline ended without a terminal event"))
      }
      Err(payload) => {
        let panicked = Panicked::new(payload);
        error!(target: "catalog", "escaped fault: {}", panicked.message());
        Outcome::Crashed(panicked.message().to_owned())
      }
    }
  }

  fn execute(self) -> Option<Outcome> {
    let outcome = RefCell::new(None);
    match self {
      Case::SuccessCallbackPanic => {
        single::just(0).subscribe(
          |_v: i32| panic!("{FAULT}"),
          |e: RxError| {
            error!(target: "catalog", "{e}");
            *outcome.borrow_mut() = Some(Outcome::Failed(e));
          },
        );
      }
      Case::NextCallbackPanic => {
        observable::of(0).subscribe_err(
          |_v: i32| panic!("{FAULT}"),
          |e: RxError| {
            error!(target: "catalog", "{e}");
            *outcome.borrow_mut() = Some(Outcome::Failed(e));
          },
        );
      }
      Case::MapReturnsErrorValue => {
        single::just(0).map(|_v: i32| RxError::new(FAULT)).subscribe(
          |v: RxError| {
            debug!(target: "catalog", "{v}");
            *outcome.borrow_mut() = Some(Outcome::ErrValue(v));
          },
          |e: RxError| {
            error!(target: "catalog", "{e}");
            *outcome.borrow_mut() = Some(Outcome::Failed(e));
          },
        );
      }
      Case::MapPanics => {
        single::just(0).map(fail_on_zero).subscribe(
          |v| {
            debug!(target: "catalog", "{v}");
            *outcome.borrow_mut() = Some(Outcome::Value(v));
          },
          |e: RxError| {
            error!(target: "catalog", "{e}");
            *outcome.borrow_mut() = Some(Outcome::Failed(e));
          },
        );
      }
      Case::ResumeNextReraises => {
        single::just(0)
          .map(fail_on_zero)
          .on_error_resume_next(|e: RxError| single::throw_err(e))
          .subscribe(
            |v| {
              debug!(target: "catalog", "{v}");
              *outcome.borrow_mut() = Some(Outcome::Value(v));
            },
            |e: RxError| {
              error!(target: "catalog", "{e}");
              *outcome.borrow_mut() = Some(Outcome::Failed(e));
            },
          );
      }
      Case::ReturnOnError => {
        single::just(0)
          .map(fail_on_zero)
          .on_error_return(|_: RxError| 2)
          .subscribe(
            |v| {
              debug!(target: "catalog", "{v}");
              *outcome.borrow_mut() = Some(Outcome::Value(v));
            },
            |e: RxError| {
              error!(target: "catalog", "{e}");
              *outcome.borrow_mut() = Some(Outcome::Failed(e));
            },
          );
      }
      Case::ReturnItemOnError => {
        single::just(0).map(fail_on_zero).on_error_return_item(2).subscribe(
          |v| {
            debug!(target: "catalog", "{v}");
            *outcome.borrow_mut() = Some(Outcome::Value(v));
          },
          |e: RxError| {
            error!(target: "catalog", "{e}");
            *outcome.borrow_mut() = Some(Outcome::Failed(e));
          },
        );
      }
      Case::RangeMapPanics => {
        observable::from_iter(0..100).map(negate_fail_on_zero).subscribe_err(
          |v| debug!(target: "catalog", "{v}"),
          |e: RxError| {
            error!(target: "catalog", "{e}");
            *outcome.borrow_mut() = Some(Outcome::Failed(e));
          },
        );
      }
      Case::RangeResumeNextReraises => {
        observable::from_iter(0..100)
          .map(negate_fail_on_zero)
          .on_error_resume_next(|e: RxError| observable::throw_err(e))
          .subscribe_err(
            |v| debug!(target: "catalog", "{v}"),
            |e: RxError| {
              error!(target: "catalog", "{e}");
              *outcome.borrow_mut() = Some(Outcome::Failed(e));
            },
          );
      }
    }
    outcome.into_inner()
  }
}
