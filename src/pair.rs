use crate::{Error, Result};

/// The two-slot view of a [`Result`]: exactly one of the two is `Some`.
pub type Pair<T> = (Option<T>, Option<Error>);

/// Success, without running anything.
pub fn ok<T>(value: T) -> Result<T> {
    Ok(value)
}

/// Failure, without running anything.
///
/// An [`Error`] is passed through as is, a message (`&str`, `String`)
/// becomes a new one, and a [`BoxError`](crate::BoxError) becomes its source.
///
/// ```
/// let invalid: unthrow::Result<()> = unthrow::fail("Invalid email format");
/// assert_eq!(invalid.unwrap_err().message(), "Invalid email format");
/// ```
pub fn fail<T>(error: impl Into<Error>) -> Result<T> {
    Err(error.into())
}

/// Splits a [`Result`] into its [`Pair`].
///
/// ```
/// use unthrow::IntoPair;
///
/// let (value, error) = unthrow::attempt(|| 5).into_pair();
/// assert_eq!(value, Some(5));
/// assert!(error.is_none());
/// ```
pub trait IntoPair<T> {
    fn into_pair(self) -> Pair<T>;
}

impl<T> IntoPair<T> for Result<T> {
    fn into_pair(self) -> Pair<T> {
        match self {
            Ok(value) => (Some(value), None),
            Err(error) => (None, Some(error)),
        }
    }
}
