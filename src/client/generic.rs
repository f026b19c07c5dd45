//! The generic client factory.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::codec::{Decode, Encode};
use crate::context::{Context, Immediate};
use crate::wire::WireValue;

#[cfg(feature = "async")]
use crate::context::Deferred;

use super::error::CallError;
use super::invoke::Invoke;
use super::operation::Operation;

/// A generic API client bound to one invoker, one execution context type,
/// and one error type.
///
/// Context and error types are fixed at construction and cannot change
/// afterwards; swapping the execution strategy means constructing another
/// client (possibly over the same shared invoker). The client itself holds
/// no mutable state — it is a factory for [`Operation`] descriptors, each
/// of which borrows the invoker through a shared handle.
///
/// # Examples
///
/// ```rust
/// use polycall::prelude::*;
///
/// let invoker = |request: WireValue, _operation: &str| -> Immediate<WireValue, CallError> {
///     Immediate::Resolved(request)
/// };
///
/// let client: BlockingClient<_> = Client::new(invoker);
/// let echo = client.operation::<WireValue, WireValue>("echo");
/// assert_eq!(echo.name(), "echo");
/// ```
pub struct Client<Ctx, E, V> {
    invoker: Arc<V>,
    _strategy: PhantomData<fn() -> (Ctx, E)>,
}

/// A [`Client`] running operations in the synchronous [`Immediate`]
/// context.
pub type BlockingClient<V, E = CallError> = Client<Immediate<WireValue, E>, E, V>;

/// A [`Client`] running operations in the asynchronous [`Deferred`]
/// context.
#[cfg(feature = "async")]
pub type DeferredClient<V, E = CallError> = Client<Deferred<WireValue, E>, E, V>;

impl<Ctx, E, V> Client<Ctx, E, V>
where
    Ctx: Context<E, Value = WireValue>,
    E: Send + 'static,
    V: Invoke<Ctx, E>,
{
    /// Creates a client owning the given invoker.
    pub fn new(invoker: V) -> Self {
        Self::from_shared(Arc::new(invoker))
    }

    /// Creates a client over an invoker that is already shared.
    ///
    /// Use this when several clients (for example a blocking and a
    /// deferred one over context-polymorphic invoker types) should reuse
    /// one connection configuration.
    pub fn from_shared(invoker: Arc<V>) -> Self {
        Self {
            invoker,
            _strategy: PhantomData,
        }
    }

    /// Builds the named, typed operation descriptor for call name `name`.
    ///
    /// The encode capability for `I` and the decode capability for `O`
    /// must exist at this call site — a missing codec is a compile error,
    /// never a run-time one. Construction is cheap and side-effect-free:
    /// repeated calls with the same name are always safe and yield
    /// independent descriptors.
    pub fn operation<I, O>(&self, name: &str) -> Operation<Ctx, E, V, I, O>
    where
        I: Encode,
        O: Decode<E> + Send + 'static,
    {
        Operation::new(name.to_owned(), Arc::clone(&self.invoker))
    }
}

impl<Ctx, E, V> Clone for Client<Ctx, E, V> {
    fn clone(&self) -> Self {
        Self {
            invoker: Arc::clone(&self.invoker),
            _strategy: PhantomData,
        }
    }
}

impl<Ctx, E, V> std::fmt::Debug for Client<Ctx, E, V> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Client").finish_non_exhaustive()
    }
}
