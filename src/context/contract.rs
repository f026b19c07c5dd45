//! The composable-context contract.
//!
//! This module defines the [`Context`] trait: the minimal algebraic
//! structure a wrapper type must provide so that "blocking result",
//! "asynchronous result", and similar shapes can be treated uniformly.
//!
//! # Background
//!
//! Rust has no native higher-kinded types, so the trait cannot abstract
//! over `Immediate<_, E>` and `Deferred<_, E>` as type constructors
//! directly. Instead it uses a Generic Associated Type: each implementor
//! names the same constructor applied to a different element type through
//! [`Context::WithValue`].
//!
//! Every closure and element type carries `Send + 'static` bounds. An
//! asynchronous implementation moves values and continuations across await
//! points that may hop threads, and a trait without those bounds could
//! only ever be satisfied by synchronous wrappers.

/// A computation context: a wrapper holding either a value or a typed
/// error, with defined sequencing operations.
///
/// `Context<E>` abstracts over execution strategies. An implementor fixes
/// *when* the wrapped computation resolves (immediately, or at some future
/// point); the trait fixes *what* the operations mean, so callers compose
/// against one vocabulary.
///
/// # Laws
///
/// All implementations must satisfy:
///
/// ## Identity
///
/// Sequencing through `pure` returns an equivalent context:
///
/// ```text
/// ma.flat_map(Ctx::pure) == ma
/// ```
///
/// ## Left Identity
///
/// Lifting a value and sequencing is the same as applying the function:
///
/// ```text
/// Ctx::pure(a).flat_map(f) == f(a)
/// ```
///
/// ## Associativity
///
/// Sequencing can be reassociated:
///
/// ```text
/// ma.flat_map(f).flat_map(g) == ma.flat_map(|x| f(x).flat_map(g))
/// ```
///
/// ## Error Short-Circuit
///
/// A raised error propagates unchanged and never invokes a continuation:
///
/// ```text
/// Ctx::raise_error(e).map(f)      == Ctx::raise_error(e)
/// Ctx::raise_error(e).flat_map(f) == Ctx::raise_error(e)
/// ```
///
/// # Examples
///
/// ```rust
/// use polycall::context::{Context, Immediate};
///
/// fn describe<Ctx>(input: Ctx) -> Ctx::WithValue<String>
/// where
///     Ctx: Context<String, Value = i32>,
/// {
///     input.flat_map(|n| {
///         if n >= 0 {
///             Ctx::pure(format!("got {n}"))
///         } else {
///             Ctx::raise_error("negative input".to_string())
///         }
///     })
/// }
///
/// let good = describe(Immediate::Resolved(7));
/// assert_eq!(good.run(), Ok("got 7".to_string()));
///
/// let bad = describe(Immediate::Resolved(-1));
/// assert_eq!(bad.run(), Err("negative input".to_string()));
/// ```
///
/// # Construction from resolved results
///
/// Every context is constructible at its own element type from an
/// already-resolved two-branch result (`Self: From<Result<Value, E>>`).
/// This is what lets invoker implementations stay generic over the
/// context they target: a precomputed outcome lifts into whichever
/// context the client was built with via `Ctx::from(result)`.
pub trait Context<E>: Sized
where
    E: Send + 'static,
    Self: From<Result<Self::Value, E>>,
{
    /// The element type this context is currently applied to.
    type Value: Send + 'static;

    /// The same context constructor applied to a different element type.
    ///
    /// For `Immediate<i32, E>`, `WithValue<String>` is
    /// `Immediate<String, E>`. The bound guarantees the result is itself a
    /// context over the same error type, so transformations chain.
    type WithValue<B>: Context<E, Value = B>
    where
        B: Send + 'static;

    /// Transforms the held value, preserving the error branch unchanged.
    ///
    /// Applied to an error-context, this returns an equivalent
    /// error-context and never invokes `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polycall::context::{Context, Immediate};
    ///
    /// let doubled: Immediate<i32, String> = Immediate::Resolved(21).map(|n| n * 2);
    /// assert_eq!(doubled, Immediate::Resolved(42));
    /// ```
    fn map<B, F>(self, function: F) -> Self::WithValue<B>
    where
        F: FnOnce(Self::Value) -> B + Send + 'static,
        B: Send + 'static;

    /// Lifts a plain value into a successful context.
    ///
    /// `pure` is the identity element for sequencing: sequencing `pure(a)`
    /// through `f` equals `f(a)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polycall::context::{Context, Immediate};
    ///
    /// let lifted: Immediate<i32, String> = <Immediate<(), String>>::pure(42);
    /// assert_eq!(lifted, Immediate::Resolved(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithValue<B>
    where
        B: Send + 'static;

    /// Sequences a dependent computation.
    ///
    /// If `self` holds a value, `function` is invoked exactly once with it
    /// and its result becomes the final context. If `self` is an error,
    /// `function` is not invoked and the same error propagates unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polycall::context::{Context, Immediate};
    ///
    /// let chained: Immediate<i32, String> =
    ///     Immediate::Resolved(5).flat_map(|n| Immediate::Resolved(n * 2));
    /// assert_eq!(chained, Immediate::Resolved(10));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithValue<B>
    where
        F: FnOnce(Self::Value) -> Self::WithValue<B> + Send + 'static,
        B: Send + 'static;

    /// Constructs an already-failed context carrying `error`.
    ///
    /// Subsequent `map`/`flat_map` over the result short-circuit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polycall::context::{Context, Immediate};
    ///
    /// let failed: Immediate<i32, String> =
    ///     <Immediate<i32, String>>::raise_error("boom".to_string());
    /// assert_eq!(failed, Immediate::Failed("boom".to_string()));
    /// ```
    fn raise_error<B>(error: E) -> Self::WithValue<B>
    where
        B: Send + 'static;

    /// Recovers from the error branch.
    ///
    /// If `self` is an error, `handler` is applied to it and its result
    /// replaces the context. If `self` holds a value, `handler` is not
    /// invoked and the context is returned unchanged.
    ///
    /// # Laws
    ///
    /// ```text
    /// Ctx::raise_error(e).catch_error(h) == h(e)
    /// Ctx::pure(a).catch_error(h)        == Ctx::pure(a)
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polycall::context::{Context, Immediate};
    ///
    /// let recovered: Immediate<i32, String> = Immediate::Failed("err".to_string())
    ///     .catch_error(|e| Immediate::Resolved(e.len() as i32));
    /// assert_eq!(recovered, Immediate::Resolved(3));
    /// ```
    fn catch_error<F>(self, handler: F) -> Self
    where
        F: FnOnce(E) -> Self + Send + 'static;

    /// Lifts a two-branch `Result` into the context.
    ///
    /// `Ok` becomes a successful context, `Err` a raised error. This is
    /// the lift the generic client applies to every decode outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polycall::context::{Context, Immediate};
    ///
    /// let ok: Immediate<i32, String> = <Immediate<(), String>>::from_result(Ok(1));
    /// assert_eq!(ok, Immediate::Resolved(1));
    ///
    /// let err: Immediate<i32, String> =
    ///     <Immediate<(), String>>::from_result(Err("no".to_string()));
    /// assert_eq!(err, Immediate::Failed("no".to_string()));
    /// ```
    fn from_result<B>(result: Result<B, E>) -> Self::WithValue<B>
    where
        B: Send + 'static,
    {
        match result {
            Ok(value) => Self::pure(value),
            Err(error) => Self::raise_error(error),
        }
    }
}
