//! # form-builder
//!
//! A fluent builder that renders HTML `<form>` markup from declarative field
//! descriptions.
//!
//! This crate provides:
//! - A [`FormRenderer`] holding ordered fields and form attributes
//! - Text, password, number, hidden, submit, textarea, checkbox, radio and
//!   select controls
//! - Model binding through [`FormModel`] or any `Serialize` value
//! - Forms embedded in fields of other forms, recursively
//! - JSON form declarations
//!
//! ## Quick Start
//!
//! ```rust
//! use form_builder::{FieldOptions, FormRenderer};
//!
//! let form = FormRenderer::new()
//!     .add(
//!         "name",
//!         "text",
//!         FieldOptions::new()
//!             .label("Name")
//!             .attr("class", "form-control"),
//!     )
//!     .add(
//!         "country",
//!         "select",
//!         FieldOptions::new()
//!             .label("Country")
//!             .choices([("us", "United States"), ("ca", "Canada")])
//!             .empty_value("Choose..."),
//!     )
//!     .add("save", "submit", FieldOptions::new().value("Save"))
//!     .url("/submit")
//!     .csrf("token123");
//!
//! let html = form.render();
//! assert!(html.contains(r#"<input type="text" name="name" value="" class="form-control">"#));
//!
//! // Or one field on its own
//! let country = form.render_field("country");
//! assert!(country.starts_with(r#"<label class="" for="country">Country</label>"#));
//! ```
//!
//! ## Model Binding
//!
//! ```rust
//! use form_builder::{FieldOptions, FormRenderer};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct User {
//!     name: String,
//! }
//!
//! let form = FormRenderer::new()
//!     .bind(&User { name: "John Doe".into() })
//!     .unwrap()
//!     .add("name", "text", FieldOptions::new().value("ignored"));
//!
//! assert!(form.render_field("name").contains(r#"value="John Doe""#));
//! ```
//!
//! ## Embedded Forms
//!
//! ```rust
//! use form_builder::{EmbedOptions, FieldOptions, FormRenderer};
//!
//! let address = FormRenderer::new()
//!     .csrf("ignored-when-embedded")
//!     .add("street", "text", FieldOptions::new());
//!
//! let profile = FormRenderer::new().add(
//!     "address",
//!     "form",
//!     FieldOptions::new()
//!         .form(address)
//!         .form_options(EmbedOptions::new().method("PUT")),
//! );
//!
//! let html = profile.render_field("address");
//! assert!(html.contains(r#"name="street""#));
//! assert!(!html.contains("<form"));
//! assert!(!html.contains("_token"));
//! ```

mod declaration;
mod error;
pub mod fields;
mod form;
pub mod model;
pub mod widgets;

pub use declaration::{FieldDeclaration, FormDeclaration};
pub use error::{FormError, Result};
pub use fields::{EmbedOptions, FieldOptions, FieldSpec, FieldType};
pub use form::{FormAttributes, FormRenderer};
pub use model::FormModel;
