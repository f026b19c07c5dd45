//! The generic, effect-polymorphic client.
//!
//! [`Client`] composes the three lower layers: given a chosen execution
//! context, a chosen error type, and a concrete [`Invoke`] implementation,
//! it produces one [`Operation`] per call name. Running an operation
//! performs serialize → invoke → decode → lift-into-context, with every
//! failure expressed as a typed error inside the context:
//!
//! ```text
//! domain input ─encode→ wire value ─invoke→ Ctx<wire value>
//!              ─flat_map(decode)→ Ctx<domain output | typed error>
//! ```
//!
//! Retries, timeouts, and caching are deliberately not part of this layer;
//! they belong to the invoker or to a wrapping policy layer.
//!
//! # Examples
//!
//! ```rust
//! use polycall::prelude::*;
//!
//! let invoker = |_request: WireValue, _operation: &str| -> Immediate<WireValue, CallError> {
//!     Immediate::Resolved(WireValue::element("OrderList"))
//! };
//!
//! let client: BlockingClient<_> = Client::new(invoker);
//! let list_orders = client.operation::<WireValue, WireValue>("getOrderList");
//!
//! let outcome = list_orders.run(WireValue::element("Order").with_attribute("UserId", "0001"));
//! assert_eq!(outcome.run(), Ok(WireValue::element("OrderList")));
//! ```

// =============================================================================
// Errors
// =============================================================================

mod error;

pub use error::CallError;

// =============================================================================
// Invoker Protocol
// =============================================================================

mod invoke;

pub use invoke::Invoke;

// =============================================================================
// Client and Operations
// =============================================================================

mod generic;
mod operation;

pub use generic::{BlockingClient, Client};
pub use operation::Operation;

#[cfg(feature = "async")]
pub use generic::DeferredClient;
