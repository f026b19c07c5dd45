//! The encode capability.

use crate::wire::WireValue;

/// Capability to encode a domain value into the wire format.
///
/// `encode` is total: it must not fail. If a concrete representation has
/// failure states, represent them inside the produced document rather
/// than panicking or aborting.
///
/// # Examples
///
/// ```rust
/// use polycall::codec::Encode;
/// use polycall::wire::WireValue;
///
/// struct OrderListRequest {
///     user_id: String,
/// }
///
/// impl Encode for OrderListRequest {
///     fn encode(&self) -> WireValue {
///         WireValue::element("Order").with_attribute("UserId", self.user_id.clone())
///     }
/// }
///
/// let request = OrderListRequest { user_id: "0001".to_string() };
/// assert_eq!(request.encode().to_string(), r#"<Order UserId="0001"/>"#);
/// ```
pub trait Encode {
    /// Encodes this value into a wire document.
    fn encode(&self) -> WireValue;
}

/// Identity encoding: a wire value is already in wire format.
impl Encode for WireValue {
    #[inline]
    fn encode(&self) -> WireValue {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_value_encodes_to_itself() {
        let value = WireValue::element("Ping").with_attribute("Seq", "1");
        assert_eq!(value.encode(), value);
    }
}
