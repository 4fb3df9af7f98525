use crate::option::Option;

/// Second half of a two-call match on an [`Option`], created by [`Option::present`].
///
/// Holds the option and the present branch; [`absent`](Self::absent) supplies the other branch and runs exactly one of
/// them. The matcher is consumed by that call, so it cannot run twice.
#[must_use = "a matcher runs no branch until `absent` is called"]
pub struct OptionMatcher<T, F> {
  option: Option<T>,
  on_present: F,
}

impl<T, F> OptionMatcher<T, F> {
  #[inline]
  pub(crate) fn new(option: Option<T>, on_present: F) -> Self {
    Self { option, on_present }
  }

  /// Runs the present branch with the held value, or `on_absent` if there is none.
  #[inline]
  pub fn absent<R>(self, on_absent: impl FnOnce() -> R) -> R where
    F: FnOnce(T) -> R
  {
    self.option.match_with(self.on_present, on_absent)
  }
}
