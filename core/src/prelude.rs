//! Factory functions and the names needed to use the containers.
//!
//! The factories return the fully typed container. Whatever they do not fix (the error type of [`success`], the element
//! type of [`absent`], ...) is inferred where the value is used; use a turbofish where there is nothing to infer from.
//!
//! ```
//! use resopt_core::prelude::*;
//!
//! fn parse_port(text: &str) -> Result<u16, String> {
//!   match text.parse() {
//!     Ok(port) => success(port),
//!     Err(_) => failure(format!("'{}' is not a port", text)),
//!   }
//! }
//!
//! assert_eq!(parse_port("8080").ok(), present(8080));
//! assert_eq!(parse_port("http").ok(), absent());
//! ```

pub use crate::error::{AccessError, AccessErrorKind};
pub use crate::matcher::OptionMatcher;
pub use crate::option::Option;
pub use crate::result::Result;
pub use crate::tag::{ABSENT, AbsentTag, FAILURE, FailureTag, PRESENT, PresentTag, ResultTag, SUCCESS, SuccessTag};

#[inline]
pub fn present<T>(value: T) -> Option<T> {
  Option::Present(value)
}

#[inline]
pub const fn absent<T>() -> Option<T> {
  Option::Absent
}

#[inline]
pub fn success<T, E>(value: T) -> Result<T, E> {
  Result::Success(value)
}

#[inline]
pub fn failure<T, E>(error: E) -> Result<T, E> {
  Result::Failure(error)
}
