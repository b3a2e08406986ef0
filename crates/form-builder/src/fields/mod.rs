//! Field definitions.
//!
//! A field is a name, a [`FieldType`] tag and a bag of [`FieldOptions`].
//! The type decides which control is rendered; the options carry labels,
//! classes, attributes, choices and the nested form for embedded fields.

mod options;

use std::fmt;

use serde::Deserialize;

pub use options::{AttrValue, Choices, ClassAttr, EmbedOptions, FieldOptions, LabelOption};

/// The type tag of a field.
///
/// Tags outside the supported set are kept verbatim as
/// [`FieldType::Unknown`]. Such fields still get their wrapper, label and
/// error slot, but no control markup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum FieldType {
    /// `<input type="text">`.
    Text,
    /// `<input type="password">`.
    Password,
    /// `<input type="submit">`.
    Submit,
    /// `<input type="number">`.
    Number,
    /// `<input type="hidden">`, never labelled.
    Hidden,
    /// `<textarea>`.
    Textarea,
    /// A single checkbox posting `1`.
    Checkbox,
    /// One radio input per choice.
    Radio,
    /// A `<select>` with one option per choice.
    Select,
    /// Another form rendered inline.
    Form,
    /// Any unrecognized tag.
    Unknown(String),
}

impl FieldType {
    /// Returns the tag as written in declarations and `type` attributes.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Submit => "submit",
            Self::Number => "number",
            Self::Hidden => "hidden",
            Self::Textarea => "textarea",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Select => "select",
            Self::Form => "form",
            Self::Unknown(tag) => tag,
        }
    }

    /// Returns whether this type renders as a plain `<input>` element.
    #[must_use]
    pub const fn is_input(&self) -> bool {
        matches!(
            self,
            Self::Text | Self::Password | Self::Submit | Self::Number | Self::Hidden
        )
    }
}

impl From<&str> for FieldType {
    fn from(tag: &str) -> Self {
        match tag {
            "text" => Self::Text,
            "password" => Self::Password,
            "submit" => Self::Submit,
            "number" => Self::Number,
            "hidden" => Self::Hidden,
            "textarea" => Self::Textarea,
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            "select" => Self::Select,
            "form" => Self::Form,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered field: its type and rendering options.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Field name, used for the `name` attribute and label `for`.
    pub name: String,
    /// Field type.
    pub field_type: FieldType,
    /// Rendering options.
    pub options: FieldOptions,
}

impl FieldSpec {
    /// Creates a new field spec.
    pub fn new(
        name: impl Into<String>,
        field_type: impl Into<FieldType>,
        options: FieldOptions,
    ) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            options,
        }
    }

    /// Returns the label text, if a label should be rendered.
    ///
    /// Hidden fields never get a label.
    #[must_use]
    pub fn label_text(&self) -> Option<&str> {
        if self.field_type == FieldType::Hidden {
            return None;
        }
        match &self.options.label {
            Some(LabelOption::Text(text)) => Some(text),
            Some(LabelOption::Suppressed) | None => None,
        }
    }
}
