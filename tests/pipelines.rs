//! Integration tests for whole pipelines.
//!
//! Exercises operator chains end to end and pins down where a fault raised in
//! user code surfaces for each stream kind.

use std::panic::{catch_unwind, AssertUnwindSafe};

use rx_pitfalls::prelude::*;

#[test]
fn chained_operators_infer_their_types_from_the_chain() {
  // no turbofish, no closure annotations beyond the error callback
  let mut got = None;
  single::just(1)
    .map(|v| v + 1)
    .map(|v| v * 3)
    .subscribe(|v| got = Some(v), |_: RxError| unreachable!());
  assert_eq!(got, Some(6));

  let mut seen = vec![];
  observable::from_iter(1..=3)
    .map(|v| v * 2)
    .map(|v| v + 1)
    .subscribe_err(|v| seen.push(v), |_: RxError| unreachable!());
  assert_eq!(seen, vec![3, 5, 7]);
}

#[test]
fn observable_stops_emitting_after_a_transform_fault() {
  let mut seen = vec![];
  let mut failed = None;

  observable::from_iter(0..100)
    .map(|v: i32| if v == 0 { panic!("我擦") } else { -v })
    .subscribe_err(|v| seen.push(v), |e: RxError| failed = Some(e));

  assert!(seen.is_empty());
  assert_eq!(failed, Some(RxError::new("我擦")));
}

#[test]
fn observable_fault_midway_keeps_earlier_elements() {
  let mut seen = vec![];
  let mut failed = None;

  observable::from_iter(0..100)
    .map(|v: i32| if v == 5 { panic!("我擦") } else { -v })
    .subscribe_err(|v| seen.push(v), |e: RxError| failed = Some(e));

  assert_eq!(seen, vec![0, -1, -2, -3, -4]);
  assert_eq!(failed, Some(RxError::new("我擦")));
}

#[test]
fn next_callback_fault_is_redirected_and_stops_the_stream() {
  let mut hits = 0;
  let mut failed = None;

  observable::from_iter(0..100).subscribe_err(
    |v: i32| {
      hits += 1;
      if v == 2 {
        panic!("我擦");
      }
    },
    |e: RxError| failed = Some(e),
  );

  assert_eq!(hits, 3);
  assert_eq!(failed, Some(RxError::new("我擦")));
}

#[test]
fn success_callback_fault_escapes_the_single() {
  let mut error_fired = false;

  let escaped = catch_unwind(AssertUnwindSafe(|| {
    single::just(0).subscribe(|_v: i32| panic!("我擦"), |_: RxError| error_fired = true);
  }));

  let payload = escaped.unwrap_err();
  assert_eq!(Panicked::new(payload).message(), "我擦");
  assert!(!error_fired);
}

#[test]
fn error_value_returned_from_map_travels_the_success_path() {
  let mut got = None;

  single::just(0)
    .map(|_status: i32| RxError::new("我擦"))
    .subscribe(|v| got = Some(v), |_: RxError| unreachable!());

  assert_eq!(got, Some(RxError::new("我擦")));
}

#[test]
fn on_error_return_absorbs_the_failure() {
  let mut got = None;

  single::just(0)
    .map(|status: i32| if status == 0 { panic!("我擦") } else { 1 })
    .on_error_return(|_: RxError| 2)
    .subscribe(|v| got = Some(v), |_: RxError| unreachable!());

  assert_eq!(got, Some(2));
}

#[test]
fn resume_next_re_raise_stays_terminal_for_both_kinds() {
  let mut single_failed = None;
  single::just(0)
    .map(|status: i32| if status == 0 { panic!("我擦") } else { 1 })
    .on_error_resume_next(|e: RxError| single::throw_err(e))
    .subscribe(|_| unreachable!(), |e: RxError| single_failed = Some(e));
  assert_eq!(single_failed, Some(RxError::new("我擦")));

  let mut emitted = 0;
  let mut stream_failed = None;
  observable::from_iter(0..100)
    .map(|v: i32| if v == 0 { panic!("我擦") } else { -v })
    .on_error_resume_next(|e: RxError| observable::throw_err(e))
    .subscribe_err(|_| emitted += 1, |e| stream_failed = Some(e));
  assert_eq!(emitted, 0);
  assert_eq!(stream_failed, Some(RxError::new("我擦")));
}

#[test]
fn resume_next_can_switch_to_a_backup_source() {
  let mut seen = vec![];

  observable::from_iter(0..10)
    .map(|v: i32| if v == 3 { panic!("primary down") } else { v })
    .on_error_resume_next(|_: RxError| observable::from_iter(100..103))
    .subscribe_err(|v| seen.push(v), |_: RxError| unreachable!());

  assert_eq!(seen, vec![0, 1, 2, 100, 101, 102]);
}

#[test]
fn catalog_reports_the_documented_outcome_for_every_case() {
  use Outcome::*;

  let outcomes: Vec<Outcome> = Case::ALL.into_iter().map(Case::run).collect();
  assert_eq!(
    outcomes,
    vec![
      Crashed("我擦".into()),
      Failed(RxError::new("我擦")),
      ErrValue(RxError::new("我擦")),
      Failed(RxError::new("我擦")),
      Failed(RxError::new("我擦")),
      Value(2),
      Value(2),
      Failed(RxError::new("我擦")),
      Failed(RxError::new("我擦")),
    ]
  );
}

#[test]
fn catalog_selection_covers_exactly_nine_cases() {
  assert_eq!(Case::ALL.len(), 9);
  assert!(Case::from_index(9).is_none());
  for ix in 0..9 {
    let case = Case::from_index(ix);
    assert_eq!(case.map(Case::index), Some(ix));
  }
}
