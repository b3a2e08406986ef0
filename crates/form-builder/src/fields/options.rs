//! Field rendering options.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::form::FormRenderer;
use crate::widgets::Attributes;

/// Ordered mapping of choice value to display label.
pub type Choices = IndexMap<String, String>;

/// Label configuration for a field.
///
/// In declarations a label is either a string or `false`. `false` keeps the
/// label out even where a field would otherwise get one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawLabel")]
pub enum LabelOption {
    /// Render a label with this text.
    Text(String),
    /// Never render a label.
    Suppressed,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLabel {
    Text(String),
    Flag(bool),
}

impl TryFrom<RawLabel> for LabelOption {
    type Error = String;

    fn try_from(raw: RawLabel) -> Result<Self, Self::Error> {
        match raw {
            RawLabel::Text(text) => Ok(Self::Text(text)),
            RawLabel::Flag(false) => Ok(Self::Suppressed),
            RawLabel::Flag(true) => Err("label must be a string or false".to_string()),
        }
    }
}

/// An HTML attribute value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// A boolean flag. `true` renders as `"1"`, `false` omits the attribute.
    Bool(bool),
    /// A number, rendered in decimal form.
    Number(serde_json::Number),
    /// A plain string. The empty string renders as a bare attribute.
    Text(String),
}

impl AttrValue {
    /// Returns the value as it reads when used as a field value.
    #[must_use]
    pub fn as_value(&self) -> String {
        match self {
            Self::Bool(true) => "1".to_string(),
            Self::Bool(false) => String::new(),
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_value())
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<u64> for AttrValue {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

/// An option slot that only carries a CSS class (`wrapper`, `errors`,
/// `label_attr`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassAttr {
    /// CSS class; rendered as `class=""` when absent.
    pub class: Option<String>,
}

impl ClassAttr {
    /// Creates a class slot.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: Some(class.into()),
        }
    }

    /// Returns the class, or an empty string.
    #[must_use]
    pub fn class(&self) -> &str {
        self.class.as_deref().unwrap_or("")
    }
}

/// Form attributes applied to an embedded form before it is rendered.
///
/// Only these four options exist. Declarations with any other key are
/// rejected when parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmbedOptions {
    /// Overrides the nested form's method.
    pub method: Option<String>,
    /// Overrides the nested form's URL.
    pub url: Option<String>,
    /// Overrides the nested form's CSS class.
    #[serde(rename = "class")]
    pub css_class: Option<String>,
    /// Overrides the nested form's CSRF token.
    #[serde(alias = "csrf")]
    pub csrf_token: Option<String>,
}

impl EmbedOptions {
    /// Creates empty embed options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the method override.
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Sets the URL override.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the CSS class override.
    #[must_use]
    pub fn css_class(mut self, class: impl Into<String>) -> Self {
        self.css_class = Some(class.into());
        self
    }

    /// Sets the CSRF token override.
    #[must_use]
    pub fn csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }
}

/// Rendering options of a field. Every member is optional.
///
/// Deserializing rejects unknown keys. The nested `form` is not
/// deserializable here; declarations build it from a nested form
/// declaration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldOptions {
    /// Label text or suppression.
    pub label: Option<LabelOption>,
    /// Attributes of the `<label>` element.
    pub label_attr: ClassAttr,
    /// Attributes of the control. `value` is the static field value.
    pub attr: Attributes,
    /// Placeholder, injected into the control attributes.
    pub placeholder: Option<String>,
    /// Wraps the field in a `<div>` when present.
    pub wrapper: Option<ClassAttr>,
    /// Choices for radio and select fields.
    pub choices: Choices,
    /// Leading blank option of a select.
    pub empty_value: Option<String>,
    /// Appends a hidden error slot when present.
    pub errors: Option<ClassAttr>,
    /// Nested form of a `form` field.
    #[serde(skip)]
    pub form: Option<Arc<FormRenderer>>,
    /// Overrides applied to the nested form.
    pub form_options: EmbedOptions,
}

impl FieldOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label text.
    #[must_use]
    pub fn label(mut self, text: impl Into<String>) -> Self {
        self.label = Some(LabelOption::Text(text.into()));
        self
    }

    /// Suppresses the label.
    #[must_use]
    pub fn no_label(mut self) -> Self {
        self.label = Some(LabelOption::Suppressed);
        self
    }

    /// Sets the label class.
    #[must_use]
    pub fn label_class(mut self, class: impl Into<String>) -> Self {
        self.label_attr = ClassAttr::new(class);
        self
    }

    /// Sets a control attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attr.set(key, value);
        self
    }

    /// Sets the static field value (`attr.value`).
    #[must_use]
    pub fn value(self, value: impl Into<AttrValue>) -> Self {
        self.attr("value", value)
    }

    /// Sets the placeholder.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    /// Wraps the field in a `<div>` with the given class.
    #[must_use]
    pub fn wrapper(mut self, class: impl Into<String>) -> Self {
        self.wrapper = Some(ClassAttr::new(class));
        self
    }

    /// Adds a choice.
    #[must_use]
    pub fn choice(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.choices.insert(value.into(), label.into());
        self
    }

    /// Adds several choices, keeping their order.
    #[must_use]
    pub fn choices<V, L>(mut self, choices: impl IntoIterator<Item = (V, L)>) -> Self
    where
        V: Into<String>,
        L: Into<String>,
    {
        self.choices
            .extend(choices.into_iter().map(|(v, l)| (v.into(), l.into())));
        self
    }

    /// Sets the blank leading option of a select.
    #[must_use]
    pub fn empty_value(mut self, label: impl Into<String>) -> Self {
        self.empty_value = Some(label.into());
        self
    }

    /// Appends a hidden error slot with the given class.
    #[must_use]
    pub fn errors(mut self, class: impl Into<String>) -> Self {
        self.errors = Some(ClassAttr::new(class));
        self
    }

    /// Sets the nested form of a `form` field.
    #[must_use]
    pub fn form(mut self, form: impl Into<Arc<FormRenderer>>) -> Self {
        self.form = Some(form.into());
        self
    }

    /// Sets the overrides applied to the nested form.
    #[must_use]
    pub fn form_options(mut self, options: EmbedOptions) -> Self {
        self.form_options = options;
        self
    }
}
