//! JSON form declarations.
//!
//! A declaration describes a whole form as data:
//!
//! ```json
//! {
//!   "method": "PATCH",
//!   "url": "/profile",
//!   "class": "my-form",
//!   "csrf": "token123",
//!   "fields": [
//!     {"name": "name", "type": "text", "label": "Name",
//!      "attr": {"class": "form-control"}},
//!     {"name": "address", "type": "form",
//!      "form": {"fields": [{"name": "street", "type": "text"}]},
//!      "form_options": {"method": "PUT"}}
//!   ]
//! }
//! ```
//!
//! Field entries take the same options as [`FieldOptions`]. A `form` entry
//! holds a nested declaration and recurses. Unknown keys are rejected at
//! every level: form, field and `form_options`.

use serde::Deserialize;
use tracing::debug;

use crate::error::{FormError, Result};
use crate::fields::{Choices, ClassAttr, EmbedOptions, FieldOptions, FieldType, LabelOption};
use crate::form::FormRenderer;
use crate::widgets::Attributes;

/// A declarative description of a form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormDeclaration {
    /// HTTP method, `POST` when absent.
    pub method: Option<String>,
    /// Form action URL.
    pub url: Option<String>,
    /// CSS class of the `<form>` element.
    #[serde(rename = "class")]
    pub css_class: Option<String>,
    /// CSRF token to echo.
    pub csrf: Option<String>,
    /// Fields in render order.
    pub fields: Vec<FieldDeclaration>,
}

/// A declarative description of one field.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDeclaration {
    /// Field name.
    pub name: String,
    /// Field type tag.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Label text, or `false` to suppress it.
    #[serde(default)]
    pub label: Option<LabelOption>,
    /// Attributes of the `<label>` element.
    #[serde(default)]
    pub label_attr: ClassAttr,
    /// Control attributes.
    #[serde(default)]
    pub attr: Attributes,
    /// Placeholder text.
    #[serde(default)]
    pub placeholder: Option<String>,
    /// Wrapper `<div>`.
    #[serde(default)]
    pub wrapper: Option<ClassAttr>,
    /// Radio and select choices.
    #[serde(default)]
    pub choices: Choices,
    /// Blank leading option of a select.
    #[serde(default)]
    pub empty_value: Option<String>,
    /// Hidden error slot.
    #[serde(default)]
    pub errors: Option<ClassAttr>,
    /// Nested form of a `form` field.
    #[serde(default)]
    pub form: Option<Box<FormDeclaration>>,
    /// Overrides applied to the nested form.
    #[serde(default)]
    pub form_options: EmbedOptions,
}

impl FormDeclaration {
    /// Parses a declaration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Declaration`] if the JSON is malformed or does
    /// not describe a form.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(FormError::Declaration)
    }

    /// Builds the renderer described by this declaration.
    #[must_use]
    pub fn into_renderer(self) -> FormRenderer {
        let mut form = FormRenderer::new();

        if let Some(method) = self.method {
            form = form.method(method);
        }
        if let Some(url) = self.url {
            form = form.url(url);
        }
        if let Some(class) = self.css_class {
            form = form.css_class(class);
        }
        if let Some(token) = self.csrf {
            form = form.csrf(token);
        }

        debug!(fields = self.fields.len(), "building form from declaration");
        for field in self.fields {
            let (name, field_type, options) = field.into_parts();
            form = form.add(name, field_type, options);
        }

        form
    }
}

impl FieldDeclaration {
    /// Splits the declaration into name, type and options, building any
    /// nested form.
    #[must_use]
    pub fn into_parts(self) -> (String, FieldType, FieldOptions) {
        let options = FieldOptions {
            label: self.label,
            label_attr: self.label_attr,
            attr: self.attr,
            placeholder: self.placeholder,
            wrapper: self.wrapper,
            choices: self.choices,
            empty_value: self.empty_value,
            errors: self.errors,
            form: self.form.map(|nested| nested.into_renderer().into()),
            form_options: self.form_options,
        };
        (self.name, self.field_type, options)
    }
}

impl FormRenderer {
    /// Builds a renderer from a JSON declaration.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Declaration`] if the declaration cannot be
    /// parsed.
    pub fn from_json(json: &str) -> Result<Self> {
        FormDeclaration::from_json(json).map(FormDeclaration::into_renderer)
    }
}
