//! Execution contexts for effect-polymorphic calls.
//!
//! A *context* is a wrapper type representing a value that may be pending,
//! present, or replaced by a typed error. The [`Context`] trait defines the
//! minimal operations a wrapper must support for the generic client to run
//! calls inside it, and this module ships one implementation per execution
//! strategy:
//!
//! - [`Immediate`]: synchronous — the call resolves on the calling thread
//!   before `run` returns.
//! - [`Deferred`]: asynchronous — the call yields a future and resolves
//!   when that future is polled (requires the `async` feature).
//!
//! Both satisfy the same algebraic contract, so code written against
//! [`Context`] behaves identically regardless of which one is plugged in.
//!
//! # Examples
//!
//! ```rust
//! use polycall::context::{Context, Immediate};
//!
//! let pipeline: Immediate<String, String> = Immediate::Resolved(21)
//!     .map(|n| n * 2)
//!     .flat_map(|n| Immediate::Resolved(n.to_string()));
//! assert_eq!(pipeline.run(), Ok("42".to_string()));
//! ```

// =============================================================================
// Contract
// =============================================================================

mod contract;

pub use contract::Context;

// =============================================================================
// Implementations
// =============================================================================

mod immediate;

pub use immediate::Immediate;

#[cfg(feature = "async")]
mod deferred;

#[cfg(feature = "async")]
pub use deferred::Deferred;
