//! Named, typed call descriptors.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::codec::{Decode, Encode};
use crate::context::Context;
use crate::wire::WireValue;

use super::invoke::Invoke;

/// An immutable descriptor of one remote call: an operation name plus the
/// input and output types it exchanges.
///
/// Operations are created by [`Client::operation`](super::Client::operation)
/// and carry no mutable state; cloning one shares the underlying invoker.
/// Each [`run`](Operation::run) invocation is an independent computation —
/// nothing is shared across invocations besides the read-only invoker, so
/// operations may be driven concurrently from any thread.
pub struct Operation<Ctx, E, V, I, O> {
    name: String,
    invoker: Arc<V>,
    _call: PhantomData<fn(I) -> (Ctx, E, O)>,
}

impl<Ctx, E, V, I, O> Operation<Ctx, E, V, I, O> {
    pub(super) fn new(name: String, invoker: Arc<V>) -> Self {
        Self {
            name,
            invoker,
            _call: PhantomData,
        }
    }

    /// The operation name sent to the invoker with every request.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<Ctx, E, V, I, O> Operation<Ctx, E, V, I, O>
where
    Ctx: Context<E, Value = WireValue>,
    E: Send + 'static,
    V: Invoke<Ctx, E>,
    I: Encode,
    O: Decode<E> + Send + 'static,
{
    /// Runs the operation with the given input.
    ///
    /// The input is encoded, handed to the invoker together with the
    /// operation name, and the wrapped response is decoded inside the
    /// context: a decoded value is lifted with `pure`, a decode failure
    /// with `raise_error`. The result is a single context value — either
    /// the typed output or a propagated typed error, with no intermediate
    /// state observable from outside.
    ///
    /// Whether this blocks until resolved or returns a pending value is
    /// decided entirely by the context type the client was built with.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polycall::prelude::*;
    ///
    /// let invoker = |request: WireValue, _operation: &str| -> Immediate<WireValue, CallError> {
    ///     Immediate::Resolved(request)
    /// };
    /// let client: BlockingClient<_> = Client::new(invoker);
    /// let echo = client.operation::<WireValue, WireValue>("echo");
    ///
    /// let outcome = echo.run(WireValue::element("Ping"));
    /// assert_eq!(outcome.run(), Ok(WireValue::element("Ping")));
    /// ```
    pub fn run(&self, input: I) -> Ctx::WithValue<O> {
        let request = input.encode();
        let wrapped = self.invoker.invoke(request, &self.name);
        wrapped.flat_map(|response| Ctx::from_result(O::decode(response)))
    }
}

impl<Ctx, E, V, I, O> Clone for Operation<Ctx, E, V, I, O> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            invoker: Arc::clone(&self.invoker),
            _call: PhantomData,
        }
    }
}

impl<Ctx, E, V, I, O> std::fmt::Debug for Operation<Ctx, E, V, I, O> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Operation")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
