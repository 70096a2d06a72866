use crate::{
  observable::{Observable, ObservableExt},
  observer::Observer,
};

/// Creates an observable that produces values from an iterator.
///
/// Completes when all elements have been emitted. Before every emission the
/// observer's `is_finished` is checked, so a downstream failure stops the
/// iteration: once a failure callback has fired, no element with a later
/// emission order is ever delivered.
///
/// # Examples
///
/// ```
/// use rx_pitfalls::prelude::*;
///
/// let mut sum = 0;
/// observable::from_iter(0..10).subscribe_err(|v| sum += v, |_: RxError| {});
/// assert_eq!(sum, 45);
/// ```
pub fn from_iter<Iter>(iter: Iter) -> ObservableIter<Iter>
where
  Iter: IntoIterator,
{
  ObservableIter(iter)
}

#[derive(Clone)]
pub struct ObservableIter<Iter>(Iter);

impl<Iter, Err, O> Observable<Iter::Item, Err, O> for ObservableIter<Iter>
where
  Iter: IntoIterator,
  O: Observer<Iter::Item, Err>,
{
  type Unsub = ();

  fn actual_subscribe(self, mut observer: O) -> Self::Unsub {
    for value in self.0 {
      if observer.is_finished() {
        return;
      }
      observer.next(value);
    }
    observer.complete();
  }
}

impl<Iter> ObservableExt for ObservableIter<Iter> {}

#[cfg(test)]
mod test {
  use crate::prelude::*;

  #[test]
  fn from_range() {
    let mut hit_count = 0;
    observable::from_iter(0..100).subscribe_err(|_| hit_count += 1, |_: RxError| unreachable!());
    assert_eq!(hit_count, 100);
  }

  #[test]
  fn from_vec() {
    let mut hit_count = 0;
    observable::from_iter(vec![0; 100])
      .subscribe_err(|_| hit_count += 1, |_: RxError| unreachable!());
    assert_eq!(hit_count, 100);
  }

  #[test]
  fn stops_when_the_next_callback_faults() {
    let mut hit_count = 0;
    let mut failed = None;
    observable::from_iter(0..100).subscribe_err(
      |v| {
        hit_count += 1;
        if v == 2 {
          panic!("boom");
        }
      },
      |e: RxError| failed = Some(e),
    );

    // elements 0 and 1, then the faulting 2; nothing afterwards
    assert_eq!(hit_count, 3);
    assert_eq!(failed, Some(RxError::new("boom")));
  }
}
