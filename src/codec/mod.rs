//! The typed serialization contract.
//!
//! Two independent capability traits bridge domain values and the wire
//! format:
//!
//! - [`Encode`]: domain value → [`WireValue`](crate::wire::WireValue),
//!   total and pure.
//! - [`Decode`]: [`WireValue`](crate::wire::WireValue) → domain value or
//!   typed error, exposed as a two-branch `Result` so the client can lift
//!   either branch into its execution context uniformly.
//!
//! Each implementation is statically associated with exactly one domain
//! type; which instance applies is resolved by the requested type when an
//! operation is constructed, never at run time from the data shape. A
//! missing instance is a compile error at the
//! [`Client::operation`](crate::client::Client::operation) call site.

mod decode;
mod encode;

pub use decode::Decode;
pub use encode::Encode;
