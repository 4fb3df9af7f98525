//! Inert markers that pick a side of a container at the call site.

use crate::option::Option;
use crate::result::Result;

/// Selects the success side of a [`Result`].
#[derive(Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct SuccessTag;

/// Selects the failure side of a [`Result`].
#[derive(Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct FailureTag;

/// Stands for an absent [`Option`] of any element type. Converts into `Option<T>` for every `T` and compares equal to
/// exactly the absent options.
#[derive(Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct AbsentTag;

/// Compares equal to exactly the present options, regardless of the held value.
#[derive(Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct PresentTag;

pub const SUCCESS: SuccessTag = SuccessTag;
pub const FAILURE: FailureTag = FailureTag;
pub const ABSENT: AbsentTag = AbsentTag;
pub const PRESENT: PresentTag = PresentTag;


/// A tag that statically knows which side of `Result<T, E>` its value fills.
///
/// Used by [`Result::tagged`]; `SUCCESS` takes a `T` and `FAILURE` takes an `E`.
pub trait ResultTag<T, E> {
  type Value;

  fn complete(self, value: Self::Value) -> Result<T, E>;
}

impl<T, E> ResultTag<T, E> for SuccessTag {
  type Value = T;

  #[inline]
  fn complete(self, value: T) -> Result<T, E> { Result::Success(value) }
}

impl<T, E> ResultTag<T, E> for FailureTag {
  type Value = E;

  #[inline]
  fn complete(self, value: E) -> Result<T, E> { Result::Failure(value) }
}


impl<T> From<AbsentTag> for Option<T> {
  #[inline]
  fn from(_: AbsentTag) -> Self { Option::Absent }
}

impl<T> PartialEq<AbsentTag> for Option<T> {
  #[inline]
  fn eq(&self, _: &AbsentTag) -> bool { self.is_absent() }
}
impl<T> PartialEq<Option<T>> for AbsentTag {
  #[inline]
  fn eq(&self, other: &Option<T>) -> bool { other.is_absent() }
}

impl<T> PartialEq<PresentTag> for Option<T> {
  #[inline]
  fn eq(&self, _: &PresentTag) -> bool { self.is_present() }
}
impl<T> PartialEq<Option<T>> for PresentTag {
  #[inline]
  fn eq(&self, other: &Option<T>) -> bool { other.is_present() }
}
