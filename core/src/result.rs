use std::fmt::{self, Display, Formatter};
use std::ops::{BitAnd, BitOr, Deref};

use crate::error::{AccessError, AccessErrorKind};
use crate::option::Option;
use crate::tag::ResultTag;

/// Exactly one of a success value `T` or a failure value `E`.
///
/// Every combinator that transforms one side passes the other side through untouched, and never calls a function given
/// for the side that is not held.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Result<T, E> {
  Success(T),
  Failure(E),
}

impl<T, E> Result<T, E> {
  /// Creates a result on the side that `tag` selects.
  ///
  /// ```
  /// use resopt_core::prelude::*;
  ///
  /// let ok: Result<u16, &str> = Result::tagged(SUCCESS, 8080);
  /// let err: Result<u16, &str> = Result::tagged(FAILURE, "no port");
  /// assert!(ok.is_success() && err.is_failure());
  /// ```
  #[inline]
  pub fn tagged<G: ResultTag<T, E>>(tag: G, value: G::Value) -> Self {
    tag.complete(value)
  }


  #[inline]
  pub const fn is_success(&self) -> bool {
    matches!(self, Self::Success(_))
  }

  #[inline]
  pub const fn is_failure(&self) -> bool {
    !self.is_success()
  }

  #[inline]
  pub fn is_success_and(self, predicate: impl FnOnce(T) -> bool) -> bool {
    match self {
      Self::Success(value) => predicate(value),
      Self::Failure(_) => false,
    }
  }

  #[inline]
  pub fn is_failure_and(self, predicate: impl FnOnce(E) -> bool) -> bool {
    match self {
      Self::Success(_) => false,
      Self::Failure(error) => predicate(error),
    }
  }


  #[inline]
  pub const fn as_ref(&self) -> Result<&T, &E> {
    match self {
      Self::Success(value) => Result::Success(value),
      Self::Failure(error) => Result::Failure(error),
    }
  }

  #[inline]
  pub fn as_mut(&mut self) -> Result<&mut T, &mut E> {
    match self {
      Self::Success(value) => Result::Success(value),
      Self::Failure(error) => Result::Failure(error),
    }
  }


  #[inline]
  pub fn and<U>(self, other: Result<U, E>) -> Result<U, E> {
    match self {
      Self::Success(_) => other,
      Self::Failure(error) => Result::Failure(error),
    }
  }

  #[inline]
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<U, E> {
    match self {
      Self::Success(value) => f(value),
      Self::Failure(error) => Result::Failure(error),
    }
  }


  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Result<U, E> {
    match self {
      Self::Success(value) => Result::Success(f(value)),
      Self::Failure(error) => Result::Failure(error),
    }
  }

  #[inline]
  pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Result<T, F> {
    match self {
      Self::Success(value) => Result::Success(value),
      Self::Failure(error) => Result::Failure(f(error)),
    }
  }

  /// Maps the success value with `f`, or returns `default` as is on failure.
  #[inline]
  pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Self::Success(value) => f(value),
      Self::Failure(_) => default,
    }
  }

  #[inline]
  pub fn map_or_else<U>(self, on_failure: impl FnOnce(E) -> U, on_success: impl FnOnce(T) -> U) -> U {
    match self {
      Self::Success(value) => on_success(value),
      Self::Failure(error) => on_failure(error),
    }
  }

  #[inline]
  pub fn match_with<R>(self, on_success: impl FnOnce(T) -> R, on_failure: impl FnOnce(E) -> R) -> R {
    match self {
      Self::Success(value) => on_success(value),
      Self::Failure(error) => on_failure(error),
    }
  }


  #[inline]
  pub fn or<F>(self, other: Result<T, F>) -> Result<T, F> {
    match self {
      Self::Success(value) => Result::Success(value),
      Self::Failure(_) => other,
    }
  }

  #[inline]
  pub fn or_else<F>(self, f: impl FnOnce(E) -> Result<T, F>) -> Result<T, F> {
    match self {
      Self::Success(value) => Result::Success(value),
      Self::Failure(error) => f(error),
    }
  }


  /// Converts into an option holding the success value, discarding a failure.
  #[inline]
  pub fn ok(self) -> Option<T> {
    match self {
      Self::Success(value) => Option::Present(value),
      Self::Failure(_) => Option::Absent,
    }
  }

  /// Converts into an option holding the failure value, discarding a success.
  #[inline]
  pub fn err(self) -> Option<E> {
    match self {
      Self::Success(_) => Option::Absent,
      Self::Failure(error) => Option::Present(error),
    }
  }


  #[inline]
  pub fn inspect(self, action: impl FnOnce(&T)) -> Self {
    if let Self::Success(value) = &self {
      action(value);
    }
    self
  }

  #[inline]
  pub fn inspect_err(self, action: impl FnOnce(&E)) -> Self {
    if let Self::Failure(error) = &self {
      action(error);
    }
    self
  }

  /// Calls exactly one of `on_success` and `on_failure`, and returns the result unchanged.
  #[inline]
  pub fn inspect_all(self, on_success: impl FnOnce(&T), on_failure: impl FnOnce(&E)) -> Self {
    match &self {
      Self::Success(value) => on_success(value),
      Self::Failure(error) => on_failure(error),
    }
    self
  }


  /// Returns the success value, or raises [`AccessErrorKind::SuccessExpected`] on failure.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T {
    match self {
      Self::Success(value) => value,
      Self::Failure(_) => AccessError::success_expected().raise(),
    }
  }

  #[inline]
  #[track_caller]
  pub fn expect(self, message: &str) -> T {
    match self {
      Self::Success(value) => value,
      Self::Failure(_) => AccessError::with_message(AccessErrorKind::SuccessExpected, message.to_owned()).raise(),
    }
  }

  /// Returns the failure value, or raises [`AccessErrorKind::FailureExpected`] on success.
  #[inline]
  #[track_caller]
  pub fn unwrap_err(self) -> E {
    match self {
      Self::Success(_) => AccessError::failure_expected().raise(),
      Self::Failure(error) => error,
    }
  }

  #[inline]
  #[track_caller]
  pub fn expect_err(self, message: &str) -> E {
    match self {
      Self::Success(_) => AccessError::with_message(AccessErrorKind::FailureExpected, message.to_owned()).raise(),
      Self::Failure(error) => error,
    }
  }

  #[inline]
  pub fn try_unwrap(self) -> std::result::Result<T, AccessError> {
    match self {
      Self::Success(value) => Ok(value),
      Self::Failure(_) => Err(AccessError::success_expected()),
    }
  }

  #[inline]
  pub fn try_unwrap_err(self) -> std::result::Result<E, AccessError> {
    match self {
      Self::Success(_) => Err(AccessError::failure_expected()),
      Self::Failure(error) => Ok(error),
    }
  }

  #[inline]
  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Self::Success(value) => value,
      Self::Failure(_) => default,
    }
  }

  #[inline]
  pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T {
    match self {
      Self::Success(value) => value,
      Self::Failure(error) => f(error),
    }
  }

  #[inline]
  pub fn unwrap_or_default(self) -> T where
    T: Default
  {
    self.unwrap_or_else(|_| T::default())
  }
}


impl<T, E> Deref for Result<T, E> {
  type Target = T;

  /// Borrows the success value, raising like [`Result::unwrap`] on failure.
  #[inline]
  #[track_caller]
  fn deref(&self) -> &T {
    match self {
      Self::Success(value) => value,
      Self::Failure(_) => AccessError::success_expected().raise(),
    }
  }
}

impl<T, E> From<&Result<T, E>> for bool {
  #[inline]
  fn from(result: &Result<T, E>) -> Self { result.is_success() }
}

impl<T, U, E> BitAnd<Result<U, E>> for Result<T, E> {
  type Output = Result<U, E>;
  #[inline]
  fn bitand(self, other: Result<U, E>) -> Result<U, E> { self.and(other) }
}

impl<T, E, F> BitOr<Result<T, F>> for Result<T, E> {
  type Output = Result<T, F>;
  #[inline]
  fn bitor(self, other: Result<T, F>) -> Result<T, F> { self.or(other) }
}

impl<T: Display, E: Display> Display for Result<T, E> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::Success(value) => write!(f, "Ok({})", value),
      Self::Failure(error) => write!(f, "Err({})", error),
    }
  }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
  #[inline]
  fn from(result: std::result::Result<T, E>) -> Self {
    match result {
      Ok(value) => Self::Success(value),
      Err(error) => Self::Failure(error),
    }
  }
}

impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
  #[inline]
  fn from(result: Result<T, E>) -> Self {
    match result {
      Result::Success(value) => Ok(value),
      Result::Failure(error) => Err(error),
    }
  }
}
