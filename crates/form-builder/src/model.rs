//! Model binding.
//!
//! A bound model supplies field values by name. Any type that can look up a
//! property by field name qualifies; implementations are provided for
//! string maps and for JSON objects, and any `Serialize` type can be bound
//! through [`FormRenderer::bind`](crate::FormRenderer::bind).

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;
use serde_json::Value;

/// A source of field values keyed by field name.
pub trait FormModel: Send + Sync {
    /// Returns the value of the named property, or `None` if the model has
    /// no such property.
    ///
    /// An existing but empty property must return `Some("")`: it still
    /// takes precedence over the field's static value.
    fn field_value(&self, name: &str) -> Option<String>;
}

impl<S: BuildHasher + Send + Sync> FormModel for HashMap<String, String, S> {
    fn field_value(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl FormModel for BTreeMap<String, String> {
    fn field_value(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<S: BuildHasher + Send + Sync> FormModel for IndexMap<String, String, S> {
    fn field_value(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl FormModel for Value {
    /// A `null` property counts as unset, so the field's static value
    /// applies. `false` and `""` are set.
    fn field_value(&self, name: &str) -> Option<String> {
        match self.as_object()?.get(name)? {
            Value::Null => None,
            value => Some(scalar_to_string(value)),
        }
    }
}

/// Renders a JSON value the way it reads inside a form control.
fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Bool(true) => "1".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
