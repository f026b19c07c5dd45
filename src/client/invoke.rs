//! The invoker protocol.

use crate::context::Context;
use crate::wire::WireValue;

/// Capability to perform the actual remote or local execution of a call.
///
/// The invoker is the only component permitted to interact with the
/// outside world, and the core treats its internals as opaque. The one
/// contract it must honor: every call resolves the returned context to a
/// response value or to a raised error of type `E` — it never throws an
/// unmodeled failure past the context, and it never hangs outside the
/// context's own scheduling.
///
/// An invoker is generic over which context it targets, matching the
/// client it is attached to: the same configuration can back a blocking
/// client and a deferred one.
///
/// # Examples
///
/// ```rust
/// use polycall::client::{CallError, Invoke};
/// use polycall::context::Immediate;
/// use polycall::wire::WireValue;
///
/// /// Answers every operation with a canned document.
/// struct Canned(WireValue);
///
/// impl Invoke<Immediate<WireValue, CallError>, CallError> for Canned {
///     fn invoke(
///         &self,
///         _request: WireValue,
///         _operation: &str,
///     ) -> Immediate<WireValue, CallError> {
///         Immediate::Resolved(self.0.clone())
///     }
/// }
///
/// let canned = Canned(WireValue::element("OrderList"));
/// let response = canned.invoke(WireValue::element("Order"), "getOrderList");
/// assert_eq!(response.run(), Ok(WireValue::element("OrderList")));
/// ```
pub trait Invoke<Ctx, E>
where
    Ctx: Context<E, Value = WireValue>,
    E: Send + 'static,
{
    /// Executes the named operation with the given wire request, returning
    /// the wire response wrapped in the caller's context type.
    fn invoke(&self, request: WireValue, operation: &str) -> Ctx;
}

/// Closures invoke directly; handy for test doubles returning
/// precomputed contexts.
///
/// # Examples
///
/// ```rust
/// use polycall::client::{CallError, Invoke};
/// use polycall::context::Immediate;
/// use polycall::wire::WireValue;
///
/// let echo = |request: WireValue, _operation: &str| -> Immediate<WireValue, CallError> {
///     Immediate::Resolved(request)
/// };
///
/// let response = echo.invoke(WireValue::element("Ping"), "echo");
/// assert_eq!(response.run(), Ok(WireValue::element("Ping")));
/// ```
impl<Ctx, E, F> Invoke<Ctx, E> for F
where
    F: Fn(WireValue, &str) -> Ctx,
    Ctx: Context<E, Value = WireValue>,
    E: Send + 'static,
{
    #[inline]
    fn invoke(&self, request: WireValue, operation: &str) -> Ctx {
        self(request, operation)
    }
}
