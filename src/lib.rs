//! Catch panics at a call boundary, and hand them back as ordinary [`Result`]s.
//!
//! Four ways in:
//!
//! |                  | reusable          | one-off             |
//! |------------------|-------------------|---------------------|
//! | synchronous      | [`wrap`]          | [`attempt`]         |
//! | asynchronous     | [`wrap_async`]    | [`attempt_async`]   |
//!
//! plus [`ok`] and [`fail`] to build results directly.
//!
//! Whatever the call unwinds with is normalized into an [`Error`], see [`Error::from_panic`].
//! To raise an [`Error`] that should arrive unchanged on the other side, [`throw`] it.
//!
//! ```
//! use unthrow::{throw, wrap, IntoPair};
//!
//! fn divide(a: i32, b: i32) -> i32 {
//!     if b == 0 {
//!         throw("Division by zero");
//!     }
//!     a / b
//! }
//!
//! let (value, error) = wrap(divide).call((10, 0)).into_pair();
//! assert!(value.is_none());
//! assert_eq!(error.unwrap().message(), "Division by zero");
//! ```
//!
//! Caveats: nothing can be caught with `panic = "abort"`, and the panic hook
//! (by default: a line on stderr) still runs before the boundary is reached.
//! Silencing it is up to the application, via [`std::panic::set_hook`].
//!
//! With one of the `log-*` features, every caught panic is logged at `debug` level.

delog::generate_macros!();

mod callable;
pub use callable::Callable;
mod error;
pub use error::{throw, BoxError, Error, Result};
mod future;
pub use future::{attempt_async, wrap_async, Attempt, WrappedAsync};
mod pair;
pub use pair::{fail, ok, IntoPair, Pair};
mod wrap;
pub use wrap::{attempt, wrap, Wrapped};
