//! Contact form example.
//!
//! Builds a form with every common control, renders it whole and then
//! field by field.
//!
//! ```sh
//! cargo run -p form-builder --example contact_form -- --verbose
//! cargo run -p form-builder --example contact_form -- --field name --field country
//! ```

use clap::Parser;
use form_builder::{EmbedOptions, FieldOptions, FormRenderer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Renders a sample contact form.
#[derive(Parser)]
#[command(name = "contact_form")]
#[command(about, long_about = None)]
struct Cli {
    /// Enable trace-level renderer logs.
    #[arg(short, long)]
    verbose: bool,

    /// Fields to render individually after the full form.
    #[arg(short, long = "field", value_name = "NAME")]
    fields: Vec<String>,
}

fn address_form() -> FormRenderer {
    FormRenderer::new()
        .add(
            "street",
            "text",
            FieldOptions::new()
                .label("Street")
                .attr("class", "form-control"),
        )
        .add(
            "city",
            "text",
            FieldOptions::new().label("City").attr("class", "form-control"),
        )
        .add("save_address", "submit", FieldOptions::new().value("Save"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::TRACE
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let form = FormRenderer::new()
        .add(
            "name",
            "text",
            FieldOptions::new().label("Name").attr("class", "form-control"),
        )
        .add(
            "email",
            "text",
            FieldOptions::new()
                .label("Email")
                .attr("class", "form-control")
                .placeholder("you@example.com"),
        )
        .add(
            "description",
            "textarea",
            FieldOptions::new()
                .label("Description")
                .attr("class", "form-control"),
        )
        .add(
            "agree",
            "checkbox",
            FieldOptions::new()
                .label("I agree to the terms")
                .attr("class", "form-check-input"),
        )
        .add(
            "gender",
            "radio",
            FieldOptions::new()
                .label("Gender")
                .attr("class", "form-check-input")
                .choices([("male", "Male"), ("female", "Female"), ("other", "Other")]),
        )
        .add(
            "country",
            "select",
            FieldOptions::new()
                .label("Country")
                .attr("class", "form-control")
                .empty_value("Choose...")
                .choices([
                    ("us", "United States"),
                    ("ca", "Canada"),
                    ("uk", "United Kingdom"),
                ]),
        )
        .add(
            "address",
            "form",
            FieldOptions::new()
                .label("Address")
                .wrapper("nested-form")
                .form(address_form())
                .form_options(EmbedOptions::new().method("PUT")),
        )
        .add("send", "submit", FieldOptions::new().value("Send"))
        .method("POST")
        .url("/submit")
        .css_class("my-form")
        .csrf("example_token");

    info!("rendering complete form");
    println!("{}", form.render());

    let names: Vec<String> = if cli.fields.is_empty() {
        form.fields().map(|field| field.name.clone()).collect()
    } else {
        cli.fields
    };

    info!(count = names.len(), "rendering individual fields");
    for name in &names {
        print!("{}", form.render_field(name));
    }

    Ok(())
}
