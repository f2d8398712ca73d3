//! The asynchronous boundary.

use core::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures::future::{self, CatchUnwind, Either, FutureExt, Map, Ready};

use crate::{error::unwound, Callable, Result};

/// Wraps an `async` function so that calling it resolves to a [`Result`] instead of panicking.
///
/// ```
/// use unthrow::wrap_async;
///
/// async fn fetch(id: &str) -> String {
///     if id.is_empty() {
///         panic!("Network error");
///     }
///     format!("record {}", id)
/// }
///
/// let fetch = wrap_async(fetch);
/// futures::executor::block_on(async {
///     assert_eq!(fetch.call(("123",)).await.unwrap(), "record 123");
///     assert_eq!(fetch.call(("",)).await.unwrap_err().message(), "Network error");
/// });
/// ```
pub fn wrap_async<F>(f: F) -> WrappedAsync<F> {
    WrappedAsync { f }
}

/// An `async` function behind a panic boundary, see [`wrap_async`].
#[derive(Clone, Copy, Debug)]
pub struct WrappedAsync<F> {
    f: F,
}

impl<F> WrappedAsync<F> {
    /// Calls the wrapped function with `args` right away, returning its future behind the boundary.
    ///
    /// Panics while creating the future and while polling it both end up in the `Err` slot.
    pub fn call<Args>(&self, args: Args) -> Attempt<<F as Callable<Args>>::Output>
    where
        F: Callable<Args>,
        <F as Callable<Args>>::Output: Future,
    {
        let f = &self.f;
        start(move || f.call_with(args))
    }

    pub fn into_inner(self) -> F {
        self.f
    }
}

/// Starts the future `f` returns, right now, behind a panic boundary.
///
/// ```
/// let answer = unthrow::attempt_async(|| async { 42 });
/// assert_eq!(futures::executor::block_on(answer).unwrap(), 42);
/// ```
pub fn attempt_async<Fut, F>(f: F) -> Attempt<Fut>
where
    Fut: Future,
    F: FnOnce() -> Fut,
{
    start(f)
}

/// Normalization at the poll-time boundary.
type Normalize<T> = fn(std::thread::Result<T>) -> Result<T>;

/// Future for [`WrappedAsync::call`] and [`attempt_async`].
///
/// Either the started future behind [`CatchUnwind`], or the error from starting it.
/// Polls the inner future in place: it is ready exactly when the inner future is.
///
/// Like any `futures` combinator, it panics when polled again after completion.
pub type Attempt<Fut> = Either<
    Map<CatchUnwind<AssertUnwindSafe<Fut>>, Normalize<<Fut as Future>::Output>>,
    Ready<Result<<Fut as Future>::Output>>,
>;

fn normalize<T>(outcome: std::thread::Result<T>) -> Result<T> {
    outcome.map_err(unwound)
}

fn start<Fut, F>(f: F) -> Attempt<Fut>
where
    Fut: Future,
    F: FnOnce() -> Fut,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(future) => AssertUnwindSafe(future)
            .catch_unwind()
            .map(normalize as Normalize<Fut::Output>)
            .left_future(),
        Err(payload) => future::ready(Err(unwound(payload))).right_future(),
    }
}
