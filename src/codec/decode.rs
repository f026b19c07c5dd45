//! The decode capability.

use crate::wire::WireValue;

/// Capability to decode a wire document into a domain value.
///
/// Decoding is total in the sense that every outcome is expressed through
/// the returned `Result`: malformed input becomes a typed error of type
/// `E`, never a panic or other unmodeled abrupt failure. The two-branch
/// shape lets the generic client lift either branch into its execution
/// context uniformly.
///
/// # Examples
///
/// ```rust
/// use polycall::client::CallError;
/// use polycall::codec::Decode;
/// use polycall::wire::WireValue;
///
/// #[derive(Debug, PartialEq)]
/// struct OrderCount(usize);
///
/// impl Decode<CallError> for OrderCount {
///     fn decode(wire: WireValue) -> Result<Self, CallError> {
///         if wire.name() == "OrderList" {
///             Ok(Self(wire.children().len()))
///         } else {
///             Err(CallError::malformed(format!(
///                 "expected OrderList, got {}",
///                 wire.name()
///             )))
///         }
///     }
/// }
///
/// let wire = WireValue::element("OrderList").with_child(WireValue::element("Order"));
/// assert_eq!(OrderCount::decode(wire), Ok(OrderCount(1)));
///
/// let other = WireValue::element("Unexpected");
/// assert!(OrderCount::decode(other).is_err());
/// ```
pub trait Decode<E>: Sized {
    /// Attempts to decode a wire document into this type.
    ///
    /// # Errors
    ///
    /// Returns a typed error of type `E` when the document does not match
    /// the expected shape.
    fn decode(wire: WireValue) -> Result<Self, E>;
}

/// Identity decoding: a wire value needs no parsing.
impl<E> Decode<E> for WireValue {
    #[inline]
    fn decode(wire: WireValue) -> Result<Self, E> {
        Ok(wire)
    }
}
