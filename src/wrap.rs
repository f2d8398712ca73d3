//! The synchronous boundary.

use std::panic::{self, AssertUnwindSafe};

use crate::{error::unwound, Callable, Result};

/// Wraps `f` so that calling it returns a [`Result`] instead of panicking.
///
/// ```
/// use unthrow::{throw, wrap};
///
/// fn divide(a: f64, b: f64) -> f64 {
///     if b == 0.0 {
///         throw("Division by zero");
///     }
///     a / b
/// }
///
/// let divide = wrap(divide);
/// assert_eq!(divide.call((10.0, 4.0)).unwrap(), 2.5);
/// assert_eq!(divide.call((10.0, 0.0)).unwrap_err().message(), "Division by zero");
/// ```
pub fn wrap<F>(f: F) -> Wrapped<F> {
    Wrapped { f }
}

/// A function behind a panic boundary, see [`wrap`].
#[derive(Clone, Copy, Debug)]
pub struct Wrapped<F> {
    f: F,
}

impl<F> Wrapped<F> {
    /// Calls the wrapped function with `args` (a tuple, one entry per argument).
    ///
    /// Never panics: whatever the call unwinds with is normalized into the `Err` slot.
    pub fn call<Args>(&self, args: Args) -> Result<<F as Callable<Args>>::Output>
    where
        F: Callable<Args>,
    {
        let f = &self.f;
        panic::catch_unwind(AssertUnwindSafe(move || f.call_with(args))).map_err(unwound)
    }

    pub fn into_inner(self) -> F {
        self.f
    }
}

/// Runs `f` once, right now, behind a panic boundary.
///
/// Same outcome as `wrap(f).call(())`, but `f` may be `FnOnce`.
///
/// ```
/// let parsed = unthrow::attempt(|| "42".parse::<u32>().unwrap());
/// assert_eq!(parsed.unwrap(), 42);
///
/// let parsed = unthrow::attempt(|| "forty-two".parse::<u32>().unwrap());
/// assert!(parsed.is_err());
/// ```
pub fn attempt<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(unwound)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{throw, Error};
    use std::cell::RefCell;

    fn add(a: i32, b: i32) -> i32 {
        a + b
    }

    fn divide(a: i32, b: i32) -> i32 {
        if b == 0 {
            throw(Error::msg("Division by zero"));
        }
        a / b
    }

    #[test]
    fn returns_the_value() {
        assert_eq!(wrap(add).call((2, 3)).unwrap(), 5);
        assert_eq!(wrap(divide).call((10, 2)).unwrap(), 5);
    }

    #[test]
    fn thrown_errors_keep_their_message() {
        let error = wrap(divide).call((10, 0)).unwrap_err();
        assert_eq!(error.message(), "Division by zero");
    }

    #[test]
    fn thrown_errors_keep_their_source() {
        let read = wrap(|path: &str| -> Vec<u8> {
            throw(Error::new(std::io::Error::new(std::io::ErrorKind::NotFound, path.to_string())))
        });

        let error = read.call(("/nowhere",)).unwrap_err();
        assert_eq!(error.message(), "/nowhere");
        assert_eq!(error.downcast_ref::<std::io::Error>().unwrap().kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn panics_are_normalized() {
        let error = wrap(|| -> u8 { panic!("plain {}", "panic") }).call(()).unwrap_err();
        assert_eq!(error.message(), "plain panic");

        let error = wrap(|| -> u8 { std::panic::panic_any(404u16) }).call(()).unwrap_err();
        assert_eq!(error.message(), "404");

        let error = wrap(|a: u8, b: u8| a / b).call((1, 0)).unwrap_err();
        assert_eq!(error.message(), "attempt to divide by zero");
    }

    #[test]
    fn forwards_arguments() {
        let seen = RefCell::new(Vec::new());
        let record = wrap(|a: u8, b: &str, c: char| seen.borrow_mut().push((a, b.to_string(), c)));

        record.call((1, "two", '3')).unwrap();
        assert_eq!(*seen.borrow(), vec![(1, "two".to_string(), '3')]);
    }

    #[test]
    fn wrapped_is_reusable() {
        let add = wrap(add);
        assert_eq!(add.call((1, 1)).unwrap(), 2);
        assert!(wrap(divide).call((1, 0)).is_err());
        assert_eq!(add.call((2, 2)).unwrap(), 4);
        assert_eq!(add.into_inner()(3, 3), 6);
    }

    #[test]
    fn attempt_runs_once() {
        let name = String::from("once");
        let moved = attempt(move || name);
        assert_eq!(moved.unwrap(), "once");

        let error = attempt(|| -> () { throw("Invalid email format") }).unwrap_err();
        assert_eq!(error.message(), "Invalid email format");
    }

    #[test]
    fn attempt_matches_wrap() {
        let f = || -> i32 { panic!("same") };
        assert_eq!(attempt(f).unwrap_err(), wrap(f).call(()).unwrap_err());
        assert_eq!(attempt(|| add(2, 3)).unwrap(), wrap(add).call((2, 3)).unwrap());
    }
}
