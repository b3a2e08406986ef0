//! Control widgets and the attribute-string builder.

mod controls;

pub use controls::{Checkbox, Input, RadioGroup, Select, Textarea};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::fields::AttrValue;

/// Ordered HTML attributes of a control.
///
/// Attributes render in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Attributes {
    /// Attribute values keyed by name.
    pub attrs: IndexMap<String, AttrValue>,
}

impl Attributes {
    /// Creates empty attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute. An existing key keeps its position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Gets an attribute.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.get(key)
    }

    /// Returns whether no attributes are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Returns the attributes rendered on a control.
    ///
    /// `value` is dropped since controls carry the resolved value
    /// themselves; `placeholder` is injected when given.
    #[must_use]
    pub fn for_control(&self, placeholder: Option<&str>) -> Self {
        let mut attrs = self.clone();
        attrs.attrs.shift_remove("value");
        if let Some(placeholder) = placeholder {
            attrs.set("placeholder", placeholder);
        }
        attrs
    }

    /// Renders attributes as an HTML attribute string.
    ///
    /// Empty strings render as bare attributes, `true` as `"1"`, and
    /// `false` attributes are left out.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.attrs
            .iter()
            .filter_map(|(k, v)| match v {
                AttrValue::Bool(false) => None,
                AttrValue::Text(s) if s.is_empty() => Some(html_escape(k)),
                other => Some(format!(
                    r#"{}="{}""#,
                    html_escape(k),
                    html_escape(&other.as_value())
                )),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Trait for controls that render a field's markup.
pub trait Widget: Send + Sync {
    /// Renders the control.
    ///
    /// # Arguments
    /// * `name` - The field name (used for the name attribute)
    /// * `value` - The resolved field value
    /// * `attrs` - Control attributes
    fn render(&self, name: &str, value: &str, attrs: &Attributes) -> String;
}

/// Escapes HTML special characters.
#[must_use]
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Compares a field value with a choice value.
///
/// Strings match when equal, or when both parse as finite numbers with the
/// same value (`"1"`, `"01"` and `"1.0"` all match each other).
#[must_use]
pub fn loose_eq(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    match (parse_number(a), parse_number(b)) {
        (Some(x), Some(y)) => (x - y).abs() < f64::EPSILON * x.abs().max(y.abs()).max(1.0),
        _ => false,
    }
}

fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Returns whether a field value counts as set: anything but `""` and `"0"`.
#[must_use]
pub fn is_truthy(value: &str) -> bool {
    !value.is_empty() && value != "0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("\"test\""), "&quot;test&quot;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
    }

    #[test]
    fn test_attributes_in_insertion_order() {
        let attrs = Attributes::new()
            .with("class", "form-control")
            .with("id", "my-input")
            .with("data-x", "1");
        assert_eq!(
            attrs.to_html(),
            r#"class="form-control" id="my-input" data-x="1""#
        );
    }

    #[test]
    fn test_attribute_value_forms() {
        let attrs = Attributes::new()
            .with("autofocus", "")
            .with("required", true)
            .with("disabled", false)
            .with("maxlength", 20_i64);
        assert_eq!(attrs.to_html(), r#"autofocus required="1" maxlength="20""#);
    }

    #[test]
    fn test_for_control() {
        let attrs = Attributes::new()
            .with("class", "form-control")
            .with("value", "x");
        let control = attrs.for_control(Some("Your name"));
        assert_eq!(
            control.to_html(),
            r#"class="form-control" placeholder="Your name""#
        );
    }

    #[test]
    fn test_for_control_replaces_placeholder_in_place() {
        let attrs = Attributes::new()
            .with("placeholder", "old")
            .with("class", "c");
        let control = attrs.for_control(Some("new"));
        assert_eq!(control.to_html(), r#"placeholder="new" class="c""#);
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let attrs = Attributes::new().with("title", r#"say "hi""#);
        assert_eq!(attrs.to_html(), r#"title="say &quot;hi&quot;""#);
    }

    #[test]
    fn test_loose_eq() {
        assert!(loose_eq("us", "us"));
        assert!(loose_eq("1", "1.0"));
        assert!(loose_eq("01", "1"));
        assert!(!loose_eq("us", "ca"));
        assert!(!loose_eq("", "0"));
        assert!(!loose_eq("1", "one"));
        assert!(!loose_eq("inf", "inf.0"));
    }

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy("1"));
        assert!(is_truthy("yes"));
        assert!(!is_truthy(""));
        assert!(!is_truthy("0"));
    }
}
