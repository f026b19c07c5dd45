//! Asynchronous execution context.
//!
//! [`Deferred<A, E>`] describes a computation that resolves at an
//! unspecified future point. Nothing executes when a pipeline is built:
//! `map`/`flat_map` register continuations, and the whole chain runs only
//! when [`Deferred::run`] is awaited (or bridged synchronously with
//! [`Deferred::run_blocking`]).
//!
//! # Examples
//!
//! ```rust,ignore
//! use polycall::context::{Context, Deferred};
//!
//! #[tokio::main]
//! async fn main() {
//!     let pipeline: Deferred<i32, String> = Deferred::resolved(20)
//!         .map(|n| n + 1)
//!         .flat_map(|n| Deferred::resolved(n * 2));
//!     assert_eq!(pipeline.run().await, Ok(42));
//! }
//! ```

use std::future::Future;

use futures::future::BoxFuture;

use super::contract::Context;

/// An asynchronous computation context.
///
/// `Deferred<A, E>` wraps a deferred asynchronous computation producing
/// either a value of type `A` or a typed error of type `E`. The
/// computation is not started until [`run`](Deferred::run) is awaited;
/// until then the value is pending and combinators only compose the
/// eventual work.
///
/// A raised error propagates to the first continuation that observes the
/// resolved context; continuations registered after the error branch is
/// taken are never invoked.
pub struct Deferred<A, E> {
    /// The wrapped computation, deferred behind a thunk so that building
    /// a pipeline performs no work.
    run_deferred: Box<dyn FnOnce() -> BoxFuture<'static, Result<A, E>> + Send>,
}

// =============================================================================
// Constructors
// =============================================================================

impl<A, E> Deferred<A, E>
where
    A: Send + 'static,
    E: Send + 'static,
{
    /// Creates a `Deferred` from a closure returning a future.
    ///
    /// The closure is not invoked until [`run`](Deferred::run) is awaited.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use polycall::context::Deferred;
    ///
    /// let deferred: Deferred<i32, String> = Deferred::new(|| async { Ok(42) });
    /// ```
    pub fn new<F, Fut>(step: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<A, E>> + Send + 'static,
    {
        Self {
            run_deferred: Box::new(move || Box::pin(step())),
        }
    }

    /// Creates a `Deferred` from an existing future.
    ///
    /// The future should not have been polled yet.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Result<A, E>> + Send + 'static,
    {
        Self {
            run_deferred: Box::new(move || Box::pin(future)),
        }
    }

    /// Creates an already-resolved `Deferred` holding `value`.
    pub fn resolved(value: A) -> Self {
        Self::new(move || async move { Ok(value) })
    }

    /// Creates an already-failed `Deferred` holding `error`.
    pub fn failed(error: E) -> Self {
        Self::new(move || async move { Err(error) })
    }
}

// =============================================================================
// Execution
// =============================================================================

impl<A, E> Deferred<A, E> {
    /// Executes the deferred computation and resolves it to a two-branch
    /// `Result`.
    ///
    /// This is the only way to observe the wrapped outcome from async
    /// code. The continuations registered through `map`/`flat_map` execute
    /// wherever the returned future is polled, which may be a different
    /// thread than the one that built the pipeline.
    ///
    /// # Errors
    ///
    /// Returns `Err(E)` if the computation resolves to the error branch.
    pub async fn run(self) -> Result<A, E> {
        (self.run_deferred)().await
    }

    /// Executes the deferred computation, blocking the current thread
    /// until it resolves.
    ///
    /// Outside a tokio runtime this uses a lazily-initialized global
    /// runtime. Inside a multi-thread runtime it uses
    /// `tokio::task::block_in_place` with the caller's handle, preserving
    /// the runtime context.
    ///
    /// # Errors
    ///
    /// Returns `Err(E)` if the computation resolves to the error branch.
    ///
    /// # Panics
    ///
    /// Panics when called from within a current-thread tokio runtime
    /// (`block_in_place` is unsupported there — await [`run`](Self::run)
    /// instead), or if the global runtime cannot be constructed.
    pub fn run_blocking(self) -> Result<A, E> {
        runtime::block_on(self.run())
    }
}

// =============================================================================
// Result Conversion
// =============================================================================

impl<A, E> From<Result<A, E>> for Deferred<A, E>
where
    A: Send + 'static,
    E: Send + 'static,
{
    /// Lifts an already-resolved result; the branch was decided before
    /// the deferred computation is ever polled.
    fn from(result: Result<A, E>) -> Self {
        Self::new(move || async move { result })
    }
}

// =============================================================================
// Context Implementation
// =============================================================================

impl<A, E> Context<E> for Deferred<A, E>
where
    A: Send + 'static,
    E: Send + 'static,
{
    type Value = A;

    type WithValue<B>
        = Deferred<B, E>
    where
        B: Send + 'static;

    fn map<B, F>(self, function: F) -> Deferred<B, E>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        Deferred::new(move || async move { self.run().await.map(function) })
    }

    fn pure<B>(value: B) -> Deferred<B, E>
    where
        B: Send + 'static,
    {
        Deferred::resolved(value)
    }

    fn flat_map<B, F>(self, function: F) -> Deferred<B, E>
    where
        F: FnOnce(A) -> Deferred<B, E> + Send + 'static,
        B: Send + 'static,
    {
        Deferred::new(move || async move {
            match self.run().await {
                Ok(value) => function(value).run().await,
                Err(error) => Err(error),
            }
        })
    }

    fn raise_error<B>(error: E) -> Deferred<B, E>
    where
        B: Send + 'static,
    {
        Deferred::failed(error)
    }

    fn catch_error<F>(self, handler: F) -> Self
    where
        F: FnOnce(E) -> Self + Send + 'static,
    {
        Self::new(move || async move {
            match self.run().await {
                Ok(value) => Ok(value),
                Err(error) => handler(error).run().await,
            }
        })
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<A, E> std::fmt::Display for Deferred<A, E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<Deferred>")
    }
}

// =============================================================================
// Runtime Bridge
// =============================================================================

mod runtime {
    use std::future::Future;
    use std::sync::LazyLock;

    use tokio::runtime::{Builder, Handle, Runtime, RuntimeFlavor};

    /// Global runtime backing `run_blocking` calls made outside any
    /// tokio runtime. Initialized lazily, never dropped.
    static GLOBAL_RUNTIME: LazyLock<Runtime> = LazyLock::new(|| {
        Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("failed to create the global polycall runtime")
    });

    pub(super) fn block_on<F: Future>(future: F) -> F::Output {
        match Handle::try_current() {
            Ok(handle) => match handle.runtime_flavor() {
                RuntimeFlavor::MultiThread => {
                    tokio::task::block_in_place(|| handle.block_on(future))
                }
                _ => panic!(
                    "Deferred::run_blocking cannot execute inside a current-thread runtime; \
                     await `run` instead"
                ),
            },
            Err(_) => GLOBAL_RUNTIME.block_on(future),
        }
    }
}
