//! Synchronous execution context.
//!
//! [`Immediate<A, E>`] resolves on the calling thread before any
//! constructor or combinator returns: it is always already either a value
//! or an error. It is the context to plug into the generic client when the
//! caller wants plain blocking calls.

use super::contract::Context;

/// A synchronous, failable computation context.
///
/// `Immediate<A, E>` holds exactly one of a resolved value of type `A` or
/// a typed error of type `E`. Once constructed, the branch never changes.
///
/// # Examples
///
/// ```rust
/// use polycall::context::{Context, Immediate};
///
/// let resolved: Immediate<i32, String> = Immediate::Resolved(42);
/// assert!(resolved.is_resolved());
///
/// let outcome = resolved.map(|n| n + 1).run();
/// assert_eq!(outcome, Ok(43));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Immediate<A, E> {
    /// The computation produced a value.
    Resolved(A),
    /// The computation failed with a typed error.
    Failed(E),
}

impl<A, E> Immediate<A, E> {
    // =========================================================================
    // Branch Checking
    // =========================================================================

    /// Returns `true` if this context holds a value.
    #[inline]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Returns `true` if this context holds an error.
    #[inline]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polycall::context::Immediate;
    ///
    /// let resolved: Immediate<i32, String> = Immediate::Resolved(42);
    /// assert_eq!(resolved.resolved_ref(), Some(&42));
    /// assert_eq!(resolved.failed_ref(), None);
    /// ```
    #[inline]
    pub const fn resolved_ref(&self) -> Option<&A> {
        match self {
            Self::Resolved(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    /// Returns a reference to the error if present.
    #[inline]
    pub const fn failed_ref(&self) -> Option<&E> {
        match self {
            Self::Resolved(_) => None,
            Self::Failed(error) => Some(error),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the context by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polycall::context::Immediate;
    ///
    /// let resolved: Immediate<i32, String> = Immediate::Resolved(42);
    /// let rendered = resolved.fold(|n| n.to_string(), |e| e);
    /// assert_eq!(rendered, "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_resolved: F, on_failed: G) -> T
    where
        F: FnOnce(A) -> T,
        G: FnOnce(E) -> T,
    {
        match self {
            Self::Resolved(value) => on_resolved(value),
            Self::Failed(error) => on_failed(error),
        }
    }

    /// Resolves the context into a two-branch `Result`.
    ///
    /// For the synchronous context this is a plain conversion: the branch
    /// was decided when the context was constructed.
    ///
    /// # Errors
    ///
    /// Returns `Err(E)` if the context holds an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polycall::context::Immediate;
    ///
    /// let failed: Immediate<i32, String> = Immediate::Failed("boom".to_string());
    /// assert_eq!(failed.run(), Err("boom".to_string()));
    /// ```
    #[inline]
    pub fn run(self) -> Result<A, E> {
        match self {
            Self::Resolved(value) => Ok(value),
            Self::Failed(error) => Err(error),
        }
    }
}

// =============================================================================
// Result Conversions
// =============================================================================

impl<A, E> From<Result<A, E>> for Immediate<A, E> {
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Resolved(value),
            Err(error) => Self::Failed(error),
        }
    }
}

// =============================================================================
// Context Implementation
// =============================================================================

impl<A, E> Context<E> for Immediate<A, E>
where
    A: Send + 'static,
    E: Send + 'static,
{
    type Value = A;

    type WithValue<B>
        = Immediate<B, E>
    where
        B: Send + 'static;

    #[inline]
    fn map<B, F>(self, function: F) -> Immediate<B, E>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        match self {
            Self::Resolved(value) => Immediate::Resolved(function(value)),
            Self::Failed(error) => Immediate::Failed(error),
        }
    }

    #[inline]
    fn pure<B>(value: B) -> Immediate<B, E>
    where
        B: Send + 'static,
    {
        Immediate::Resolved(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Immediate<B, E>
    where
        F: FnOnce(A) -> Immediate<B, E> + Send + 'static,
        B: Send + 'static,
    {
        match self {
            Self::Resolved(value) => function(value),
            Self::Failed(error) => Immediate::Failed(error),
        }
    }

    #[inline]
    fn raise_error<B>(error: E) -> Immediate<B, E>
    where
        B: Send + 'static,
    {
        Immediate::Failed(error)
    }

    #[inline]
    fn catch_error<F>(self, handler: F) -> Self
    where
        F: FnOnce(E) -> Self + Send + 'static,
    {
        match self {
            Self::Resolved(value) => Self::Resolved(value),
            Self::Failed(error) => handler(error),
        }
    }
}
