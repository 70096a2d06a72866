//! A catalog of error-propagation pitfalls in synchronous reactive pipelines.
//!
//! The crate provides two stream kinds with deliberately different failure
//! surfaces, a handful of operators, and a catalog of nine runnable cases
//! ([`catalog::Case`]) that demonstrate where a fault raised inside user code
//! ends up.
//!
//! The contract in one table:
//!
//! | fault site | channel open? | result |
//! |---|---|---|
//! | `map` closure (single or observable) | yes | failure callback fires |
//! | next callback of an observable | yes | failure callback fires, emission stops |
//! | success callback of a single | no | panic escapes `subscribe` |
//!
//! A transform that *returns* an error value instead of panicking does not
//! fail anything: the value travels the success path as ordinary data.
//!
//! ```
//! use rx_pitfalls::prelude::*;
//!
//! let mut got = None;
//! single::just(0)
//!   .map(|status: i32| if status == 0 { panic!("bad status") } else { 1 })
//!   .on_error_return(|_: RxError| 2)
//!   .subscribe(|v| got = Some(v), |_: RxError| unreachable!());
//! assert_eq!(got, Some(2));
//! ```

pub mod catalog;
pub mod error;
pub mod observable;
pub mod observer;
pub mod ops;
pub mod prelude;
pub mod single;

pub use prelude::*;
