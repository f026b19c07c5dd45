//! The wire value document model.

use std::fmt::{self, Write as _};

use static_assertions::assert_impl_all;

/// An opaque structured document value: a named element carrying ordered
/// attributes, child elements, and optional text content.
///
/// Wire values are immutable once produced — the builder methods consume
/// and return the value, and nothing mutates one in place afterwards.
/// Attribute order is preserved and significant for equality.
///
/// # Examples
///
/// ```rust
/// use polycall::wire::WireValue;
///
/// let request = WireValue::element("Order").with_attribute("UserId", "0001");
/// assert_eq!(request.name(), "Order");
/// assert_eq!(request.attribute("UserId"), Some("0001"));
/// assert_eq!(request.to_string(), r#"<Order UserId="0001"/>"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WireValue {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<WireValue>,
    text: Option<String>,
}

impl WireValue {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an empty element with the given name.
    pub fn element(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Appends an attribute, preserving insertion order.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Appends a child element.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Sets the text content, replacing any previous text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// The element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up the first attribute with the given key.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates over all attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// All child elements in document order.
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Looks up the first child with the given element name.
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|child| child.name == name)
    }

    /// The text content, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

/// Writes `raw` with the four markup metacharacters escaped.
fn escape(raw: &str, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
    for character in raw.chars() {
        match character {
            '<' => formatter.write_str("&lt;")?,
            '>' => formatter.write_str("&gt;")?,
            '&' => formatter.write_str("&amp;")?,
            '"' => formatter.write_str("&quot;")?,
            other => formatter.write_char(other)?,
        }
    }
    Ok(())
}

impl fmt::Display for WireValue {
    /// Renders the document as XML-like markup.
    ///
    /// This is a diagnostic rendering: the concrete byte-level encoding a
    /// transport uses is an external concern and is not defined here.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<{}", self.name)?;
        for (key, value) in &self.attributes {
            write!(formatter, " {key}=\"")?;
            escape(value, formatter)?;
            formatter.write_str("\"")?;
        }
        if self.children.is_empty() && self.text.is_none() {
            return formatter.write_str("/>");
        }
        formatter.write_str(">")?;
        if let Some(text) = &self.text {
            escape(text, formatter)?;
        }
        for child in &self.children {
            write!(formatter, "{child}")?;
        }
        write!(formatter, "</{}>", self.name)
    }
}

// Wire values cross thread boundaries inside deferred contexts.
assert_impl_all!(WireValue: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn element_starts_empty() {
        let value = WireValue::element("Order");
        assert_eq!(value.name(), "Order");
        assert_eq!(value.attributes().count(), 0);
        assert!(value.children().is_empty());
        assert_eq!(value.text(), None);
    }

    #[rstest]
    fn attribute_lookup_finds_first_match() {
        let value = WireValue::element("Order")
            .with_attribute("UserId", "0001")
            .with_attribute("UserId", "0002");
        assert_eq!(value.attribute("UserId"), Some("0001"));
        assert_eq!(value.attribute("Missing"), None);
    }

    #[rstest]
    fn child_lookup_finds_by_name() {
        let value = WireValue::element("OrderList")
            .with_child(WireValue::element("Order").with_attribute("Id", "1"))
            .with_child(WireValue::element("Meta"));
        assert_eq!(value.child("Order").and_then(|c| c.attribute("Id")), Some("1"));
        assert!(value.child("Missing").is_none());
    }

    #[rstest]
    #[case(WireValue::element("Order"), "<Order/>")]
    #[case(
        WireValue::element("Order").with_attribute("UserId", "0001"),
        r#"<Order UserId="0001"/>"#
    )]
    #[case(
        WireValue::element("Note").with_text("a < b"),
        "<Note>a &lt; b</Note>"
    )]
    #[case(
        WireValue::element("OrderList").with_child(WireValue::element("Order")),
        "<OrderList><Order/></OrderList>"
    )]
    fn display_renders_markup(#[case] value: WireValue, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn display_escapes_attribute_values() {
        let value = WireValue::element("Note").with_attribute("Quote", r#"say "hi" & go"#);
        assert_eq!(
            value.to_string(),
            r#"<Note Quote="say &quot;hi&quot; &amp; go"/>"#
        );
    }

    #[rstest]
    fn attribute_order_is_significant_for_equality() {
        let first = WireValue::element("E")
            .with_attribute("A", "1")
            .with_attribute("B", "2");
        let second = WireValue::element("E")
            .with_attribute("B", "2")
            .with_attribute("A", "1");
        assert_ne!(first, second);
        assert_eq!(first.clone(), first);
    }
}
