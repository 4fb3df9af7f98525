use std::fmt::{self, Display, Formatter};
use std::mem;
use std::ops::{BitAnd, BitOr, BitXor, Deref};

use crate::error::{AccessError, AccessErrorKind};
use crate::matcher::OptionMatcher;
use crate::result::Result;

/// Zero or one value of type `T`.
///
/// Combinators take `self` by value and produce a new option; use [`as_ref`](Self::as_ref) to run them on a borrow.
/// Only [`replace`](Self::replace), [`take`](Self::take), and [`take_if`](Self::take_if) mutate in place.
///
/// An `Option<Option<T>>` is a well-formed value, but there are no operations specific to that shape.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Option<T> {
  Absent,
  Present(T),
}

impl<T> Default for Option<T> {
  #[inline]
  fn default() -> Self { Self::Absent }
}

impl<T> Option<T> {
  #[inline]
  pub const fn is_present(&self) -> bool {
    matches!(self, Self::Present(_))
  }

  #[inline]
  pub const fn is_absent(&self) -> bool {
    !self.is_present()
  }

  /// Returns `true` if present and the value satisfies `predicate`.
  #[inline]
  pub fn is_present_and(self, predicate: impl FnOnce(T) -> bool) -> bool {
    match self {
      Self::Present(value) => predicate(value),
      Self::Absent => false,
    }
  }

  /// Returns `true` if absent, or present and the value satisfies `predicate`.
  #[inline]
  pub fn is_absent_or(self, predicate: impl FnOnce(T) -> bool) -> bool {
    match self {
      Self::Present(value) => predicate(value),
      Self::Absent => true,
    }
  }


  #[inline]
  pub const fn as_ref(&self) -> Option<&T> {
    match self {
      Self::Present(value) => Option::Present(value),
      Self::Absent => Option::Absent,
    }
  }

  #[inline]
  pub fn as_mut(&mut self) -> Option<&mut T> {
    match self {
      Self::Present(value) => Option::Present(value),
      Self::Absent => Option::Absent,
    }
  }


  /// Returns `other` if present, otherwise absent. `other` is returned as is, so an absent `other` stays absent.
  #[inline]
  pub fn and<U>(self, other: Option<U>) -> Option<U> {
    match self {
      Self::Present(_) => other,
      Self::Absent => Option::Absent,
    }
  }

  #[inline]
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Option<U>) -> Option<U> {
    match self {
      Self::Present(value) => f(value),
      Self::Absent => Option::Absent,
    }
  }

  /// Keeps the value only if it satisfies `predicate`.
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    if let Self::Present(value) = self {
      if predicate(&value) {
        return Self::Present(value);
      }
    }
    Self::Absent
  }

  /// Calls `action` with a reference to the value if present, and returns the option unchanged.
  #[inline]
  pub fn inspect(self, action: impl FnOnce(&T)) -> Self {
    if let Self::Present(value) = &self {
      action(value);
    }
    self
  }


  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Option<U> {
    match self {
      Self::Present(value) => Option::Present(f(value)),
      Self::Absent => Option::Absent,
    }
  }

  /// Maps the value with `f`, or substitutes `default` if absent. Unlike [`Result::map_or`], the outcome stays wrapped:
  /// the returned option is always present.
  #[inline]
  pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> Option<U> {
    match self {
      Self::Present(value) => Option::Present(f(value)),
      Self::Absent => Option::Present(default),
    }
  }

  /// Like [`map_or`](Self::map_or), but computes the substitute lazily.
  #[inline]
  pub fn map_or_else<U>(self, default: impl FnOnce() -> U, f: impl FnOnce(T) -> U) -> Option<U> {
    match self {
      Self::Present(value) => Option::Present(f(value)),
      Self::Absent => Option::Present(default()),
    }
  }


  /// Runs `on_present` with the value, or `on_absent`, and returns what the branch returned.
  #[inline]
  pub fn match_with<R>(self, on_present: impl FnOnce(T) -> R, on_absent: impl FnOnce() -> R) -> R {
    match self {
      Self::Present(value) => on_present(value),
      Self::Absent => on_absent(),
    }
  }

  /// Binds the present branch of a match; the absent branch is given to [`OptionMatcher::absent`], which runs one of
  /// the two. Nothing runs before that call.
  ///
  /// ```
  /// use resopt_core::prelude::*;
  ///
  /// let doubled = present(21).present(|x| x * 2).absent(|| 0);
  /// assert_eq!(doubled, 42);
  /// ```
  #[inline]
  pub fn present<R, F: FnOnce(T) -> R>(self, on_present: F) -> OptionMatcher<T, F> {
    OptionMatcher::new(self, on_present)
  }


  #[inline]
  pub fn ok_or<E>(self, error: E) -> Result<T, E> {
    match self {
      Self::Present(value) => Result::Success(value),
      Self::Absent => Result::Failure(error),
    }
  }

  #[inline]
  pub fn ok_or_else<E>(self, error: impl FnOnce() -> E) -> Result<T, E> {
    match self {
      Self::Present(value) => Result::Success(value),
      Self::Absent => Result::Failure(error()),
    }
  }


  #[inline]
  pub fn or(self, other: Self) -> Self {
    match self {
      Self::Present(value) => Self::Present(value),
      Self::Absent => other,
    }
  }

  #[inline]
  pub fn or_else(self, f: impl FnOnce() -> Self) -> Self {
    match self {
      Self::Present(value) => Self::Present(value),
      Self::Absent => f(),
    }
  }

  /// Present if exactly one of `self` and `other` is present.
  #[inline]
  pub fn xor(self, other: Self) -> Self {
    match (self, other) {
      (Self::Present(value), Self::Absent) | (Self::Absent, Self::Present(value)) => Self::Present(value),
      _ => Self::Absent,
    }
  }


  /// Stores `value` in place and returns what was held before.
  #[inline]
  pub fn replace(&mut self, value: T) -> Self {
    mem::replace(self, Self::Present(value))
  }

  /// Moves the value out, leaving `self` absent.
  #[inline]
  pub fn take(&mut self) -> Self {
    mem::replace(self, Self::Absent)
  }

  /// Moves the value out if it satisfies `predicate`; otherwise leaves the value in place and returns absent.
  ///
  /// `predicate` gets mutable access, so changes it makes to a value that is not taken are kept.
  #[inline]
  pub fn take_if(&mut self, predicate: impl FnOnce(&mut T) -> bool) -> Self {
    if self.as_mut().is_present_and(predicate) {
      self.take()
    } else {
      Self::Absent
    }
  }


  /// Returns the value, or raises [`AccessErrorKind::ValueExpected`] if absent.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T {
    match self {
      Self::Present(value) => value,
      Self::Absent => AccessError::value_expected().raise(),
    }
  }

  /// Returns the value, or raises [`AccessErrorKind::ValueExpected`] carrying `message` if absent.
  #[inline]
  #[track_caller]
  pub fn expect(self, message: &str) -> T {
    match self {
      Self::Present(value) => value,
      Self::Absent => AccessError::with_message(AccessErrorKind::ValueExpected, message.to_owned()).raise(),
    }
  }

  /// Returns the value, or the [`AccessError`] that [`unwrap`](Self::unwrap) would raise.
  #[inline]
  pub fn try_unwrap(self) -> std::result::Result<T, AccessError> {
    match self {
      Self::Present(value) => Ok(value),
      Self::Absent => Err(AccessError::value_expected()),
    }
  }

  #[inline]
  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Self::Present(value) => value,
      Self::Absent => default,
    }
  }

  #[inline]
  pub fn unwrap_or_else(self, default: impl FnOnce() -> T) -> T {
    match self {
      Self::Present(value) => value,
      Self::Absent => default(),
    }
  }

  #[inline]
  pub fn unwrap_or_default(self) -> T where
    T: Default
  {
    self.unwrap_or_else(T::default)
  }


  #[inline]
  pub fn zip<U>(self, other: Option<U>) -> Option<(T, U)> {
    self.zip_with(other, |a, b| (a, b))
  }

  #[inline]
  pub fn zip_with<U, R>(self, other: Option<U>, f: impl FnOnce(T, U) -> R) -> Option<R> {
    match (self, other) {
      (Self::Present(a), Option::Present(b)) => Option::Present(f(a, b)),
      _ => Option::Absent,
    }
  }
}

impl<T: Clone> Option<&T> {
  #[inline]
  pub fn cloned(self) -> Option<T> {
    self.map(T::clone)
  }
}

impl<T: Copy> Option<&T> {
  #[inline]
  pub fn copied(self) -> Option<T> {
    self.map(|value| *value)
  }
}


impl<T> Deref for Option<T> {
  type Target = T;

  /// Borrows the value, raising like [`Option::unwrap`] if absent.
  #[inline]
  #[track_caller]
  fn deref(&self) -> &T {
    match self {
      Self::Present(value) => value,
      Self::Absent => AccessError::value_expected().raise(),
    }
  }
}

impl<T> From<&Option<T>> for bool {
  #[inline]
  fn from(option: &Option<T>) -> Self { option.is_present() }
}

impl<T, U> BitAnd<Option<U>> for Option<T> {
  type Output = Option<U>;
  #[inline]
  fn bitand(self, other: Option<U>) -> Option<U> { self.and(other) }
}

impl<T> BitOr for Option<T> {
  type Output = Self;
  #[inline]
  fn bitor(self, other: Self) -> Self { self.or(other) }
}

impl<T> BitXor for Option<T> {
  type Output = Self;
  #[inline]
  fn bitxor(self, other: Self) -> Self { self.xor(other) }
}

impl<T: Display> Display for Option<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::Present(value) => write!(f, "Ok({})", value),
      Self::Absent => f.write_str("None"),
    }
  }
}

impl<T> From<std::option::Option<T>> for Option<T> {
  #[inline]
  fn from(option: std::option::Option<T>) -> Self {
    match option {
      Some(value) => Self::Present(value),
      None => Self::Absent,
    }
  }
}

impl<T> From<Option<T>> for std::option::Option<T> {
  #[inline]
  fn from(option: Option<T>) -> Self {
    match option {
      Option::Present(value) => Some(value),
      Option::Absent => None,
    }
  }
}


#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use pretty_assertions::assert_eq;
  use quickcheck_macros::quickcheck;

  use crate::error::catch_access_error;
  use crate::prelude::*;

  #[test]
  fn presence() {
    let a = present(42);
    let b: Option<i32> = absent();

    assert!(a.is_present());
    assert!(!a.is_absent());
    assert!(b.is_absent());
    assert!(!b.is_present());
    assert!(bool::from(&a));
    assert!(!bool::from(&b));
  }

  #[test]
  fn presence_predicates() {
    assert!(present(42).is_present_and(|x| x > 0));
    assert!(!present(42).is_present_and(|x| x < 0));
    assert!(!absent::<i32>().is_present_and(|_| true));

    assert!(absent::<i32>().is_absent_or(|_| false));
    assert!(present(42).is_absent_or(|x| x == 42));
    assert!(!present(42).is_absent_or(|x| x == 69));
  }

  #[test]
  fn and() {
    assert_eq!(present(42).and(present(69)), present(69));
    assert_eq!(present(42).and(absent::<i32>()), absent());
    assert_eq!(absent::<i32>().and(present(69)), absent());
    assert_eq!(absent::<i32>().and(absent::<i32>()), absent());

    assert_eq!(present(42) & present("a"), present("a"));
    assert_eq!(absent::<i32>() & present("a"), absent());
  }

  #[test]
  fn and_then() {
    let half = |x: i32| if x % 2 == 0 { present(x / 2) } else { absent() };

    assert_eq!(present(42).and_then(half), present(21));
    assert_eq!(present(21).and_then(half), absent());
    assert_eq!(absent::<i32>().and_then(half), absent());
  }

  #[test]
  fn filter() {
    assert_eq!(present(42).filter(|x| *x > 0), present(42));
    assert_eq!(present(42).filter(|x| *x < 0), absent());
    assert_eq!(absent::<i32>().filter(|_| true), absent());
  }

  #[test]
  fn inspect_calls_action_only_when_present() {
    let seen = Cell::new(0);

    let a = present(42).inspect(|x| seen.set(*x));
    assert_eq!(seen.get(), 42);
    assert_eq!(a, present(42));

    let b = absent::<i32>().inspect(|_| seen.set(-1));
    assert_eq!(seen.get(), 42);
    assert_eq!(b, absent());
  }

  #[test]
  fn map() {
    assert_eq!(present(21).map(|x| x * 2), present(42));
    assert_eq!(present(42).map(|x| x.to_string()), present("42".to_owned()));
    assert_eq!(absent::<i32>().map(|x| x * 2), absent());
  }

  #[test]
  fn map_or_stays_wrapped() {
    assert_eq!(present(21).map_or(0, |x| x * 2), present(42));
    assert_eq!(absent::<i32>().map_or(0, |x| x * 2), present(0));
    assert_eq!(absent::<i32>().map_or_else(|| -1, |x| x * 2), present(-1));
    assert_eq!(present(21).map_or_else(|| -1, |x| x * 2), present(42));
  }

  #[test]
  fn match_with() {
    assert_eq!(present(42).match_with(|x| x + 1, || 0), 43);
    assert_eq!(absent::<i32>().match_with(|x| x + 1, || 0), 0);
  }

  #[test]
  fn ok_or() {
    assert_eq!(present(42).ok_or("none"), success(42));
    assert_eq!(absent::<i32>().ok_or("none"), failure("none"));

    let called = Cell::new(false);
    assert_eq!(present(42).ok_or_else(|| { called.set(true); "none" }), success(42));
    assert!(!called.get());
    assert_eq!(absent::<i32>().ok_or_else(|| "none"), failure("none"));
  }

  #[test]
  fn or() {
    assert_eq!(present(42).or(present(69)), present(42));
    assert_eq!(present(42).or(absent()), present(42));
    assert_eq!(absent::<i32>().or(present(69)), present(69));
    assert_eq!(absent::<i32>().or(absent()), absent());

    assert_eq!(absent::<i32>() | present(69), present(69));
    assert_eq!(absent::<i32>().or_else(|| present(69)), present(69));
    assert_eq!(present(42).or_else(|| present(69)), present(42));
  }

  #[test]
  fn xor() {
    assert_eq!(present(42).xor(absent()), present(42));
    assert_eq!(absent::<i32>().xor(present(69)), present(69));
    assert_eq!(present(42).xor(present(69)), absent());
    assert_eq!(absent::<i32>().xor(absent()), absent());

    assert_eq!(present(42) ^ absent(), present(42));
  }

  #[test]
  fn replace() {
    let mut a = present(42);
    assert_eq!(a.replace(69), present(42));
    assert_eq!(a, present(69));

    let mut b: Option<i32> = absent();
    assert_eq!(b.replace(69), absent());
    assert_eq!(b, present(69));
  }

  #[test]
  fn take_twice() {
    let mut a = present(42);
    assert_eq!(a.take(), present(42));
    assert_eq!(a, absent());
    assert_eq!(a.take(), absent());
    assert_eq!(a, absent());
  }

  #[test]
  fn take_if() {
    let mut a = present(42);
    assert_eq!(a.take_if(|x| *x < 0), absent());
    assert_eq!(a, present(42));
    assert_eq!(a.take_if(|x| *x > 0), present(42));
    assert_eq!(a, absent());

    let mut b: Option<i32> = absent();
    assert_eq!(b.take_if(|_| true), absent());
    assert_eq!(b, absent());
  }

  #[test]
  fn take_if_keeps_changes_to_a_value_left_in_place() {
    let mut a = present(41);
    let taken = a.take_if(|x| {
      *x += 1;
      *x % 2 == 1
    });
    assert_eq!(taken, absent());
    assert_eq!(a, present(42));

    assert_eq!(a.take_if(|x| { *x += 1; true }), present(43));
    assert_eq!(a, absent());
  }

  /// Not `Clone` or `Copy`: every operation below must move it.
  #[derive(PartialEq, Debug)]
  struct Handle(String);

  #[test]
  fn move_only_values_flow_through_combinators() {
    let mapped = present(Handle("a".to_owned())).map(|Handle(name)| Handle(name + "b"));
    assert_eq!(mapped, present(Handle("ab".to_owned())));

    let chained = mapped.and_then(|handle| if handle.0.is_empty() { absent() } else { present(handle) });
    assert_eq!(chained, present(Handle("ab".to_owned())));

    let mut slot = chained;
    assert_eq!(slot.replace(Handle("c".to_owned())), present(Handle("ab".to_owned())));
    assert_eq!(slot.take(), present(Handle("c".to_owned())));
    assert_eq!(slot.take(), absent());

    let handle = present(Handle("d".to_owned())).ok_or::<()>(()).unwrap();
    assert_eq!(handle, Handle("d".to_owned()));
  }

  #[test]
  fn unwrap() {
    assert_eq!(present(42).unwrap(), 42);
    assert_eq!(present(42).expect("should be present"), 42);

    let error = catch_access_error(|| absent::<i32>().unwrap());
    assert_eq!(error.kind(), AccessErrorKind::ValueExpected);
    assert_eq!(error.message(), "Some(_) expected, None found");

    let error = catch_access_error(|| absent::<i32>().expect("port must be set"));
    assert_eq!(error.kind(), AccessErrorKind::ValueExpected);
    assert_eq!(error.message(), "port must be set");
  }

  #[test]
  fn try_unwrap() {
    assert_eq!(present(42).try_unwrap(), Ok(42));
    assert_eq!(absent::<i32>().try_unwrap(), Err(AccessError::value_expected()));
  }

  #[test]
  fn unwrap_or() {
    assert_eq!(present(42).unwrap_or(69), 42);
    assert_eq!(absent::<i32>().unwrap_or(69), 69);
    assert_eq!(absent::<i32>().unwrap_or_else(|| 69), 69);
    assert_eq!(absent::<String>().unwrap_or_default(), String::new());
  }

  #[test]
  fn zip() {
    assert_eq!(present(42).zip(present(69)), present((42, 69)));
    assert_eq!(present(42).zip(absent::<i32>()), absent());
    assert_eq!(absent::<i32>().zip(present(69)), absent());
    assert_eq!(present(42).zip_with(present(69), |a, b| a + b), present(111));
  }

  #[test]
  fn deref_routes_through_unwrap() {
    let a = present(String::from("hello"));
    assert_eq!(a.len(), 5);
    assert_eq!(*present(42), 42);

    let b: Option<String> = absent();
    let error = catch_access_error(|| b.len());
    assert_eq!(error.kind(), AccessErrorKind::ValueExpected);
  }

  #[test]
  fn borrowing_combinators_leave_the_receiver_intact() {
    let a = present(String::from("hello"));
    assert_eq!(a.as_ref().map(|s| s.len()), present(5));
    assert_eq!(a.as_ref().cloned(), present(String::from("hello")));
    assert_eq!(present(42).as_ref().copied(), present(42));
    assert_eq!(a, present(String::from("hello")));

    let mut b = present(1);
    if let Option::Present(value) = b.as_mut() {
      *value += 1;
    }
    assert_eq!(b, present(2));
  }

  #[test]
  fn display() {
    assert_eq!(present(42).to_string(), "Ok(42)");
    assert_eq!(present(42).to_string(), success::<i32, &str>(42).to_string());
    assert_eq!(present("port").to_string(), "Ok(port)");
    assert_eq!(absent::<i32>().to_string(), "None");
  }

  #[test]
  fn std_conversions() {
    assert_eq!(Option::from(Some(42)), present(42));
    assert_eq!(Option::<i32>::from(None), absent());
    let a: std::option::Option<i32> = present(42).into();
    let b: std::option::Option<i32> = absent::<i32>().into();
    assert_eq!(a, Some(42));
    assert_eq!(b, None);
  }

  #[test]
  fn nested_options_keep_their_layers() {
    let inner_absent: Option<Option<i32>> = present(absent());
    assert!(inner_absent.is_present());
    assert_eq!(inner_absent.unwrap(), absent());
    assert_ne!(present(absent::<i32>()), absent());
  }

  #[quickcheck]
  fn presence_is_exclusive(value: std::option::Option<i32>) -> bool {
    let option = Option::from(value);
    option.is_absent() == !option.is_present()
  }

  #[quickcheck]
  fn present_unwraps_to_its_value(value: i32) -> bool {
    present(value).is_present() && present(value).unwrap() == value
  }

  #[quickcheck]
  fn xor_is_commutative(a: std::option::Option<i32>, b: std::option::Option<i32>) -> bool {
    let (a, b) = (Option::from(a), Option::from(b));
    a.xor(b) == b.xor(a)
  }

  #[quickcheck]
  fn take_leaves_absent(value: std::option::Option<String>) -> bool {
    let mut option = Option::from(value.clone());
    option.take() == Option::from(value) && option.is_absent() && option.take().is_absent()
  }
}
