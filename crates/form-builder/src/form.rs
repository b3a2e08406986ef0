//! The form renderer.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{FormError, Result};
use crate::fields::{AttrValue, EmbedOptions, FieldOptions, FieldSpec, FieldType};
use crate::model::FormModel;
use crate::widgets::{html_escape, Attributes, Checkbox, Input, RadioGroup, Select, Textarea, Widget};

/// Form-level attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormAttributes {
    /// HTTP method as entered. Compared case-insensitively.
    pub method: String,
    /// Form action URL.
    pub url: String,
    /// CSS class of the `<form>` element.
    pub class: String,
}

impl Default for FormAttributes {
    fn default() -> Self {
        Self {
            method: "POST".to_string(),
            url: String::new(),
            class: String::new(),
        }
    }
}

impl FormAttributes {
    /// Returns a copy with the embed overrides applied.
    #[must_use]
    pub fn overridden_by(&self, options: &EmbedOptions) -> Self {
        Self {
            method: options.method.clone().unwrap_or_else(|| self.method.clone()),
            url: options.url.clone().unwrap_or_else(|| self.url.clone()),
            class: options
                .css_class
                .clone()
                .unwrap_or_else(|| self.class.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RenderMode {
    /// A complete form with its `<form>` tags, CSRF field and submits.
    Standalone,
    /// Bare field controls for inclusion in a parent form.
    Embedded,
}

/// Builds and renders an HTML form.
///
/// Fields render in the order they were added. A field of type
/// [`FieldType::Form`] renders another renderer inline, without its
/// `<form>` tags, CSRF field or submit controls, at any nesting depth.
///
/// # Example
///
/// ```rust
/// use form_builder::{FieldOptions, FormRenderer};
///
/// let form = FormRenderer::new()
///     .add(
///         "name",
///         "text",
///         FieldOptions::new().label("Name").attr("class", "form-control"),
///     )
///     .method("PATCH")
///     .url("/profile")
///     .csrf("token123");
///
/// let html = form.render();
/// assert!(html.starts_with(r#"<form method="POST" action="/profile""#));
/// assert!(html.contains(r#"name="_method" value="PATCH""#));
/// assert!(html.contains(r#"name="_token" value="token123""#));
/// ```
#[derive(Clone, Default)]
pub struct FormRenderer {
    fields: IndexMap<String, FieldSpec>,
    attributes: FormAttributes,
    model: Option<Arc<dyn FormModel>>,
    csrf: Option<String>,
}

impl fmt::Debug for FormRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormRenderer")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .field("attributes", &self.attributes)
            .field("model", &self.model.is_some())
            .field("csrf", &self.csrf.is_some())
            .finish()
    }
}

impl FormRenderer {
    /// Creates an empty form with method `POST`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, replacing any field of the same name in place.
    #[must_use]
    pub fn add(
        mut self,
        name: impl Into<String>,
        field_type: impl Into<FieldType>,
        options: FieldOptions,
    ) -> Self {
        let spec = FieldSpec::new(name, field_type, options);
        let name = spec.name.clone();
        if self.fields.insert(name.clone(), spec).is_some() {
            debug!(field = %name, "field redefined, keeping the latest definition");
        }
        self
    }

    /// Returns the field registered under `name`.
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.get(name)
    }

    /// Returns all fields in render order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.values()
    }

    /// Returns the form-level attributes.
    #[must_use]
    pub const fn attributes(&self) -> &FormAttributes {
        &self.attributes
    }

    /// Returns the configured CSRF token.
    #[must_use]
    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf.as_deref()
    }

    /// Sets the HTTP method. Anything but GET and POST is spoofed.
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.attributes.method = method.into();
        self
    }

    /// Sets the form action URL.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.attributes.url = url.into();
        self
    }

    /// Sets the CSS class of the `<form>` element.
    #[must_use]
    pub fn css_class(mut self, class: impl Into<String>) -> Self {
        self.attributes.class = class.into();
        self
    }

    /// Binds a model supplying field values.
    #[must_use]
    pub fn model(mut self, model: impl FormModel + 'static) -> Self {
        self.model = Some(Arc::new(model));
        self
    }

    /// Binds an already shared model.
    #[must_use]
    pub fn shared_model(mut self, model: Arc<dyn FormModel>) -> Self {
        self.model = Some(model);
        self
    }

    /// Binds any serializable value as the model.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Serialize`] if the value cannot be serialized,
    /// and [`FormError::InvalidModel`] if it does not serialize to an
    /// object.
    pub fn bind<T: Serialize + ?Sized>(self, model: &T) -> Result<Self> {
        let value = serde_json::to_value(model).map_err(FormError::Serialize)?;
        if !value.is_object() {
            return Err(FormError::InvalidModel(json_kind(&value).to_string()));
        }
        Ok(self.model(value))
    }

    /// Sets the CSRF token echoed in a hidden `_token` field.
    #[must_use]
    pub fn csrf(mut self, token: impl Into<String>) -> Self {
        self.csrf = Some(token.into());
        self
    }

    /// Renders the complete form.
    #[must_use]
    pub fn render(&self) -> String {
        trace!(
            fields = self.fields.len(),
            method = %self.attributes.method,
            "rendering form"
        );
        let mut html = self.render_form_open();
        html.push_str(&self.render_csrf_field());
        for name in self.fields.keys() {
            html.push_str(&self.render_field_in(name, RenderMode::Standalone));
        }
        html.push_str(&self.render_form_close());
        html
    }

    /// Renders a single field. Unknown names render as an empty string.
    #[must_use]
    pub fn render_field(&self, name: &str) -> String {
        self.render_field_in(name, RenderMode::Standalone)
    }

    /// Renders the opening `<form>` tag and the `_method` field if needed.
    #[must_use]
    pub fn render_form_open(&self) -> String {
        let method = self.attributes.method.to_uppercase();
        let verb = if method == "GET" { "GET" } else { "POST" };
        let mut html = format!(
            "<form method=\"{verb}\" action=\"{}\" class=\"{}\">\n",
            html_escape(&self.attributes.url),
            html_escape(&self.attributes.class)
        );
        html.push_str(&method_spoof_field(&method));
        html
    }

    /// Renders the closing `</form>` tag.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn render_form_close(&self) -> String {
        "</form>\n".to_string()
    }

    /// Renders the hidden `_token` field, or nothing without a token.
    #[must_use]
    pub fn render_csrf_field(&self) -> String {
        match self.csrf.as_deref() {
            Some(token) if !token.is_empty() => format!(
                "<input type=\"hidden\" name=\"_token\" value=\"{}\">\n",
                html_escape(token)
            ),
            _ => String::new(),
        }
    }

    /// Renders this form for inclusion inside a field of another form.
    ///
    /// The overrides apply to this render only. The output has no `<form>`
    /// tags, no CSRF field and no submit controls; a `_method` field is
    /// kept when the effective method needs one.
    #[must_use]
    pub fn render_embedded(&self, options: &EmbedOptions) -> String {
        let attributes = self.attributes.overridden_by(options);
        trace!(
            fields = self.fields.len(),
            method = %attributes.method,
            "rendering embedded form"
        );
        let mut html = method_spoof_field(&attributes.method.to_uppercase());
        for name in self.fields.keys() {
            html.push_str(&self.render_field_in(name, RenderMode::Embedded));
        }
        html.trim().to_string()
    }

    /// Resolves the current value of a field.
    ///
    /// A bound model wins whenever it has the property, even if empty;
    /// otherwise the field's static `attr.value` is used.
    #[must_use]
    pub fn field_value(&self, name: &str) -> String {
        if let Some(value) = self.model.as_ref().and_then(|m| m.field_value(name)) {
            return value;
        }
        self.fields
            .get(name)
            .and_then(|field| field.options.attr.get("value"))
            .map(AttrValue::as_value)
            .unwrap_or_default()
    }

    fn render_field_in(&self, name: &str, mode: RenderMode) -> String {
        let Some(field) = self.fields.get(name) else {
            trace!(field = name, "no such field");
            return String::new();
        };
        let options = &field.options;
        let mut html = String::new();

        if let Some(wrapper) = &options.wrapper {
            html.push_str(&format!(
                "<div class=\"{}\">\n",
                html_escape(wrapper.class())
            ));
        }

        if let Some(label) = field.label_text() {
            html.push_str(&format!(
                "<label class=\"{}\" for=\"{}\">{}</label>\n",
                html_escape(options.label_attr.class()),
                html_escape(name),
                html_escape(label)
            ));
        }

        let attrs = options.attr.for_control(options.placeholder.as_deref());
        let value = self.field_value(name);
        html.push_str(&render_control(field, &value, &attrs, mode));

        if let Some(errors) = &options.errors {
            html.push_str(&format!(
                "<div style=\"display: none\" class=\"{}\"></div>\n",
                html_escape(errors.class())
            ));
        }

        if options.wrapper.is_some() {
            html.push_str("</div>\n");
        }

        html
    }
}

fn render_control(field: &FieldSpec, value: &str, attrs: &Attributes, mode: RenderMode) -> String {
    let name = field.name.as_str();
    let options = &field.options;

    match &field.field_type {
        FieldType::Submit if mode == RenderMode::Embedded => String::new(),
        FieldType::Text
        | FieldType::Password
        | FieldType::Submit
        | FieldType::Number
        | FieldType::Hidden => Input::new(field.field_type.as_str()).render(name, value, attrs),
        FieldType::Textarea => Textarea.render(name, value, attrs),
        FieldType::Checkbox => Checkbox.render(name, value, attrs),
        FieldType::Radio => RadioGroup::new(&options.choices).render(name, value, attrs),
        FieldType::Select => {
            Select::new(&options.choices, options.empty_value.as_deref()).render(name, value, attrs)
        }
        FieldType::Form => match &options.form {
            Some(nested) => {
                let mut html = nested.render_embedded(&options.form_options);
                if !html.is_empty() {
                    html.push('\n');
                }
                html
            }
            None => {
                debug!(field = name, "form field has no nested form");
                String::new()
            }
        },
        FieldType::Unknown(tag) => {
            debug!(field = name, field_type = %tag, "unsupported field type, no control rendered");
            String::new()
        }
    }
}

/// Renders the hidden `_method` field for verbs HTML forms cannot send.
fn method_spoof_field(method: &str) -> String {
    if method == "GET" || method == "POST" {
        String::new()
    } else {
        format!(
            "<input type=\"hidden\" name=\"_method\" value=\"{}\">\n",
            html_escape(method)
        )
    }
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_field() {
        let form = FormRenderer::new().add(
            "name",
            "text",
            FieldOptions::new().label("Name").attr("class", "form-control"),
        );

        let html = form.render();
        assert!(html.contains(r#"name="name""#));
        assert!(html.contains(r#"type="text""#));
        assert!(html.contains(r#"class="form-control""#));
    }

    #[test]
    fn test_add_overwrites_in_place() {
        let form = FormRenderer::new()
            .add("a", "text", FieldOptions::new())
            .add("b", "text", FieldOptions::new())
            .add("a", "textarea", FieldOptions::new());

        let names: Vec<&str> = form.fields().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(form.get_field("a").unwrap().field_type, FieldType::Textarea);
    }

    #[test]
    fn test_get_missing_field() {
        let form = FormRenderer::new();
        assert!(form.get_field("nope").is_none());
        assert_eq!(form.render_field("nope"), "");
    }

    #[test]
    fn test_form_attributes() {
        let form = FormRenderer::new()
            .method("POST")
            .url("/submit")
            .css_class("my-form");

        let html = form.render();
        assert!(html.contains(r#"<form method="POST""#));
        assert!(html.contains(r#"action="/submit""#));
        assert!(html.contains(r#"class="my-form""#));
    }

    #[test]
    fn test_get_method_is_case_insensitive() {
        let form = FormRenderer::new().method("get");
        assert_eq!(
            form.render_form_open(),
            "<form method=\"GET\" action=\"\" class=\"\">\n"
        );
    }

    #[test]
    fn test_method_spoofing() {
        let form = FormRenderer::new().method("patch");
        let html = form.render();
        assert!(html.starts_with(r#"<form method="POST""#));
        assert_eq!(html.matches(r#"name="_method" value="PATCH""#).count(), 1);
    }

    #[test]
    fn test_csrf_token() {
        let html = FormRenderer::new().csrf("test_token").render();
        assert_eq!(html.matches(r#"name="_token" value="test_token""#).count(), 1);
    }

    #[test]
    fn test_empty_csrf_token_is_omitted() {
        let html = FormRenderer::new().csrf("").render();
        assert!(!html.contains("_token"));
    }

    #[test]
    fn test_model_binding() {
        let form = FormRenderer::new()
            .model(json!({"name": "John Doe"}))
            .add("name", "text", FieldOptions::new().value("static"));

        let html = form.render();
        assert!(html.contains(r#"value="John Doe""#));
        assert!(!html.contains("static"));
    }

    #[test]
    fn test_empty_model_value_wins() {
        let form = FormRenderer::new()
            .model(json!({"name": ""}))
            .add("name", "text", FieldOptions::new().value("static"));
        assert_eq!(form.field_value("name"), "");
    }

    #[test]
    fn test_null_model_value_falls_back_to_static_value() {
        let form = FormRenderer::new()
            .model(json!({"name": null}))
            .add("name", "text", FieldOptions::new().value("static"));
        assert_eq!(
            form.render_field("name"),
            "<input type=\"text\" name=\"name\" value=\"static\">\n"
        );
    }

    #[test]
    fn test_bound_none_keeps_configured_default() {
        #[derive(Serialize)]
        struct Profile {
            name: String,
            country: Option<String>,
        }

        let form = FormRenderer::new()
            .bind(&Profile {
                name: "Ada".to_string(),
                country: None,
            })
            .unwrap()
            .add("name", "text", FieldOptions::new().value("Anonymous"))
            .add(
                "country",
                "select",
                FieldOptions::new()
                    .value("uk")
                    .choices([("us", "United States"), ("uk", "United Kingdom")]),
            );

        assert_eq!(form.field_value("name"), "Ada");
        assert!(form
            .render_field("country")
            .contains(r#"<option value="uk" selected>United Kingdom</option>"#));
    }

    #[test]
    fn test_static_value_fallback() {
        let form = FormRenderer::new()
            .model(json!({"other": "x"}))
            .add("count", "number", FieldOptions::new().value(3_i64));
        assert_eq!(form.field_value("count"), "3");
        assert_eq!(form.field_value("missing"), "");
    }

    #[test]
    fn test_bind_serializable_model() {
        #[derive(Serialize)]
        struct User {
            name: String,
            admin: bool,
        }

        let form = FormRenderer::new()
            .bind(&User {
                name: "Ada".to_string(),
                admin: true,
            })
            .unwrap()
            .add("name", "text", FieldOptions::new())
            .add("admin", "checkbox", FieldOptions::new());

        assert!(form.render_field("name").contains(r#"value="Ada""#));
        assert!(form.render_field("admin").contains("checked"));
    }

    #[test]
    fn test_bind_rejects_non_object() {
        let err = FormRenderer::new().bind(&vec![1, 2]).unwrap_err();
        assert!(matches!(err, FormError::InvalidModel(_)));
    }

    #[test]
    fn test_unknown_type_keeps_decorations() {
        let form = FormRenderer::new().add(
            "when",
            "datetime",
            FieldOptions::new()
                .label("When")
                .wrapper("mb-3")
                .errors("invalid"),
        );

        assert_eq!(
            form.render_field("when"),
            "<div class=\"mb-3\">\n\
             <label class=\"\" for=\"when\">When</label>\n\
             <div style=\"display: none\" class=\"invalid\"></div>\n\
             </div>\n"
        );
    }

    #[test]
    fn test_embedded_render_drops_submit() {
        let nested = FormRenderer::new()
            .csrf("inner")
            .add("street", "text", FieldOptions::new())
            .add("save", "submit", FieldOptions::new().value("Save"));

        let html = nested.render_embedded(&EmbedOptions::new());
        assert_eq!(html, r#"<input type="text" name="street" value="">"#);
    }

    #[test]
    fn test_embedded_render_applies_method_override() {
        let nested = FormRenderer::new().add("street", "text", FieldOptions::new());
        let html = nested.render_embedded(&EmbedOptions::new().method("put"));
        assert!(html.starts_with(r#"<input type="hidden" name="_method" value="PUT">"#));
        assert_eq!(nested.attributes().method, "POST");
    }
}
