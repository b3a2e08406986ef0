#![allow(dead_code)]

use form_builder::{EmbedOptions, FieldOptions, FormRenderer};

/// An address form, usable standalone or embedded.
pub fn address_form() -> FormRenderer {
    FormRenderer::new()
        .url("/address")
        .csrf("address_token")
        .add(
            "street",
            "text",
            FieldOptions::new().label("Street").attr("class", "form-control"),
        )
        .add("zip", "number", FieldOptions::new().label("Zip"))
        .add("save_address", "submit", FieldOptions::new().value("Save"))
}

/// A profile form embedding the address form.
pub fn profile_form() -> FormRenderer {
    FormRenderer::new()
        .url("/profile")
        .csrf("profile_token")
        .add("name", "text", FieldOptions::new().label("Name"))
        .add(
            "address",
            "form",
            FieldOptions::new()
                .form(address_form())
                .form_options(EmbedOptions::new().url("/ignored")),
        )
        .add("save", "submit", FieldOptions::new().value("Save"))
}

/// Renders a single field of a form holding only that field.
pub fn render_one(name: &str, field_type: &str, options: FieldOptions) -> String {
    FormRenderer::new()
        .add(name, field_type, options)
        .render_field(name)
}

/// Counts occurrences of `needle` in `haystack`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
