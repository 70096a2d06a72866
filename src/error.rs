//! Error values carried by pipelines.
//!
//! Two shapes matter here: [`RxError`], the ordinary message-carrying error
//! value that travels a pipeline's failure channel, and [`Panicked`], the raw
//! payload of a panic captured inside a stage before it is converted into the
//! pipeline's error type.

use std::any::Any;
use std::fmt;

/// Payload of a panic captured inside a pipeline stage.
///
/// Stages that run user closures while the error channel is still open catch
/// unwinds and hand the payload over as a `Panicked`, which the pipeline's
/// error type must know how to absorb (`Err: From<Panicked>`).
pub struct Panicked(Box<dyn Any + Send + 'static>);

impl Panicked {
  pub fn new(payload: Box<dyn Any + Send + 'static>) -> Self { Panicked(payload) }

  /// The panic message, when the payload is the usual `&str` or `String`.
  pub fn message(&self) -> &str {
    if let Some(s) = self.0.downcast_ref::<&'static str>() {
      s
    } else if let Some(s) = self.0.downcast_ref::<String>() {
      s
    } else {
      "panic payload of unknown type"
    }
  }
}

impl fmt::Debug for Panicked {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Panicked").field(&self.message()).finish()
  }
}

/// The error value flowing through demonstration pipelines: a message string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RxError {
  message: String,
}

impl RxError {
  pub fn new(message: impl Into<String>) -> Self { RxError { message: message.into() } }

  pub fn message(&self) -> &str { &self.message }
}

impl From<Panicked> for RxError {
  fn from(panicked: Panicked) -> Self { RxError::new(panicked.message()) }
}
