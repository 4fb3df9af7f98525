//! Operations on containers whose held value is itself a container.

use crate::option::Option;
use crate::result::Result;

impl<T, E> Result<Option<T>, E> {
  /// Swaps a result of an option into an option of a result.
  ///
  /// A success holding an absent option becomes absent; every other case becomes present.
  #[inline]
  pub fn transpose(self) -> Option<Result<T, E>> {
    match self {
      Result::Success(Option::Absent) => Option::Absent,
      Result::Success(Option::Present(value)) => Option::Present(Result::Success(value)),
      Result::Failure(error) => Option::Present(Result::Failure(error)),
    }
  }
}

impl<T, E> Option<Result<T, E>> {
  /// Swaps an option of a result into a result of an option; the inverse of [`Result::transpose`].
  #[inline]
  pub fn transpose(self) -> Result<Option<T>, E> {
    match self {
      Option::Absent => Result::Success(Option::Absent),
      Option::Present(Result::Success(value)) => Result::Success(Option::Present(value)),
      Option::Present(Result::Failure(error)) => Result::Failure(error),
    }
  }
}

impl<T, E> Result<Result<T, E>, E> {
  /// Collapses one level of nesting. Both levels must share the failure type.
  #[inline]
  pub fn flatten(self) -> Result<T, E> {
    match self {
      Result::Success(inner) => inner,
      Result::Failure(error) => Result::Failure(error),
    }
  }
}
