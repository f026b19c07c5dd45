//! # polycall
//!
//! An effect-polymorphic API client: describe a remote call once — name,
//! input type, output type — and execute it under different execution
//! strategies without duplicating the call logic.
//!
//! ## Overview
//!
//! The crate is built from four small layers:
//!
//! - **Execution contexts** ([`context`]): the [`Context`](context::Context)
//!   trait gives any wrapper type the four operations the client needs
//!   (`map`, `pure`, `flat_map`, `raise_error`), with
//!   [`Immediate`](context::Immediate) for synchronous calls and
//!   [`Deferred`](context::Deferred) for asynchronous ones.
//! - **Wire values** ([`wire`]): [`WireValue`](wire::WireValue), the opaque
//!   structured document exchanged with an invoker.
//! - **Codecs** ([`codec`]): [`Encode`](codec::Encode) and
//!   [`Decode`](codec::Decode), the typed serialization contract between
//!   domain values and wire values.
//! - **Client** ([`client`]): [`Client`](client::Client) turns an
//!   [`Invoke`](client::Invoke) implementation into named, typed
//!   [`Operation`](client::Operation)s that run inside the chosen context.
//!
//! ## Feature Flags
//!
//! - `async` (default): the [`Deferred`](context::Deferred) context and its
//!   tokio-backed blocking bridge
//! - `serde`: serde derives on [`WireValue`](wire::WireValue) and
//!   [`CallError`](client::CallError)
//!
//! ## Example
//!
//! ```rust
//! use polycall::prelude::*;
//!
//! // An invoker that echoes the request back; real invokers perform the
//! // actual transport call and resolve the context themselves.
//! let invoker = |request: WireValue, operation: &str| -> Immediate<WireValue, CallError> {
//!     assert_eq!(operation, "echo");
//!     Immediate::Resolved(request)
//! };
//!
//! let client: BlockingClient<_> = Client::new(invoker);
//! let echo = client.operation::<WireValue, WireValue>("echo");
//!
//! let outcome = echo.run(WireValue::element("Ping"));
//! assert_eq!(outcome.run(), Ok(WireValue::element("Ping")));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use polycall::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::*;
    pub use crate::codec::*;
    pub use crate::context::*;
    pub use crate::wire::*;
}

pub mod client;
pub mod codec;
pub mod context;
pub mod wire;
