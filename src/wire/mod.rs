//! Opaque structured documents exchanged with an invoker.
//!
//! The only type crossing the invoker boundary is [`WireValue`]: a tree of
//! named elements with attributes, children, and optional text. The client
//! core passes wire values through without interpreting them; giving them
//! meaning is the job of [`Encode`](crate::codec::Encode) and
//! [`Decode`](crate::codec::Decode) implementations on domain types.

mod value;

pub use value::WireValue;
