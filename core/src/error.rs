use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

use thiserror::Error;

/// Which unchecked access was performed on the wrong alternative.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum AccessErrorKind {
  /// A value was required from an absent [`Option`](crate::option::Option).
  ValueExpected,
  /// A success value was required from a failed [`Result`](crate::result::Result).
  SuccessExpected,
  /// A failure value was required from a successful [`Result`](crate::result::Result).
  FailureExpected,
}

impl AccessErrorKind {
  #[inline]
  pub const fn default_message(&self) -> &'static str {
    match self {
      AccessErrorKind::ValueExpected => "Some(_) expected, None found",
      AccessErrorKind::SuccessExpected => "Ok(_) expected, Err(_) found",
      AccessErrorKind::FailureExpected => "Err(_) expected, Ok(_) found",
    }
  }
}

impl Display for AccessErrorKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    let name = match self {
      AccessErrorKind::ValueExpected => "value expected",
      AccessErrorKind::SuccessExpected => "success expected",
      AccessErrorKind::FailureExpected => "failure expected",
    };
    f.write_str(name)
  }
}

/// Signal raised by an unchecked access (`unwrap`, `expect`, dereference, ...) on the wrong alternative of a container.
///
/// Unchecked accessors panic with this error as the panic payload, so it can be recovered with
/// [`std::panic::catch_unwind`] and [downcast](std::any::Any::downcast). The `try_` accessors return it instead.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
#[error("{message}")]
pub struct AccessError {
  kind: AccessErrorKind,
  message: Cow<'static, str>,
}

impl AccessError {
  #[inline]
  pub fn new(kind: AccessErrorKind) -> Self {
    Self { kind, message: Cow::Borrowed(kind.default_message()) }
  }

  #[inline]
  pub fn with_message(kind: AccessErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
    Self { kind, message: message.into() }
  }

  #[inline]
  pub fn value_expected() -> Self { Self::new(AccessErrorKind::ValueExpected) }
  #[inline]
  pub fn success_expected() -> Self { Self::new(AccessErrorKind::SuccessExpected) }
  #[inline]
  pub fn failure_expected() -> Self { Self::new(AccessErrorKind::FailureExpected) }


  #[inline]
  pub fn kind(&self) -> AccessErrorKind { self.kind }

  #[inline]
  pub fn message(&self) -> &str { &self.message }


  /// Raise this error: log it and panic with it as the payload.
  #[cold]
  #[track_caller]
  pub(crate) fn raise(self) -> ! {
    #[cfg(feature = "tracing")] {
      let location = std::panic::Location::caller();
      tracing::error!(kind = %self.kind, %location, "{}", self.message);
    }
    std::panic::panic_any(self)
  }
}



/// Run `f`, which must raise, and return the raised error.
#[cfg(test)]
#[track_caller]
pub(crate) fn catch_access_error<R>(f: impl FnOnce() -> R) -> AccessError {
  use std::panic::{catch_unwind, AssertUnwindSafe};

  match catch_unwind(AssertUnwindSafe(f)) {
    Ok(_) => panic!("expected an access error to be raised"),
    Err(payload) => match payload.downcast::<AccessError>() {
      Ok(error) => *error,
      Err(_) => panic!("panic payload is not an access error"),
    },
  }
}
