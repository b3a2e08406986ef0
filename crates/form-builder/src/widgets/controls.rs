//! Per-type control markup.

use super::{html_escape, is_truthy, loose_eq, Attributes, Widget};
use crate::fields::Choices;

/// Joins tag parts with single spaces, skipping empty ones.
fn join_parts(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// A single `<input>` element of a fixed type.
#[derive(Debug, Clone, Copy)]
pub struct Input<'a> {
    /// The HTML input type.
    pub input_type: &'a str,
}

impl<'a> Input<'a> {
    /// Creates an input widget.
    #[must_use]
    pub const fn new(input_type: &'a str) -> Self {
        Self { input_type }
    }
}

impl Widget for Input<'_> {
    fn render(&self, name: &str, value: &str, attrs: &Attributes) -> String {
        let parts = join_parts(&[
            &format!(r#"type="{}""#, html_escape(self.input_type)),
            &format!(r#"name="{}""#, html_escape(name)),
            &format!(r#"value="{}""#, html_escape(value)),
            &attrs.to_html(),
        ]);
        format!("<input {parts}>\n")
    }
}

/// A `<textarea>` holding the value as content.
#[derive(Debug, Clone, Copy, Default)]
pub struct Textarea;

impl Widget for Textarea {
    fn render(&self, name: &str, value: &str, attrs: &Attributes) -> String {
        let parts = join_parts(&[&format!(r#"name="{}""#, html_escape(name)), &attrs.to_html()]);
        format!("<textarea {parts}>{}</textarea>\n", html_escape(value))
    }
}

/// A checkbox posting `1`, checked when the value is truthy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Checkbox;

impl Widget for Checkbox {
    fn render(&self, name: &str, value: &str, attrs: &Attributes) -> String {
        let checked = if is_truthy(value) { "checked" } else { "" };
        let parts = join_parts(&[
            r#"type="checkbox""#,
            &format!(r#"name="{}""#, html_escape(name)),
            r#"value="1""#,
            checked,
            &attrs.to_html(),
        ]);
        format!("<input {parts}>\n")
    }
}

/// One radio input and adjacent label per choice.
#[derive(Debug, Clone, Copy)]
pub struct RadioGroup<'a> {
    /// Available choices.
    pub choices: &'a Choices,
}

impl<'a> RadioGroup<'a> {
    /// Creates a radio group over the given choices.
    #[must_use]
    pub const fn new(choices: &'a Choices) -> Self {
        Self { choices }
    }
}

impl Widget for RadioGroup<'_> {
    fn render(&self, name: &str, value: &str, attrs: &Attributes) -> String {
        let name = html_escape(name);
        let extra = attrs.to_html();
        let mut html = String::new();

        for (opt_value, label) in self.choices {
            let checked = if loose_eq(opt_value, value) {
                "checked"
            } else {
                ""
            };
            let opt_value = html_escape(opt_value);
            let parts = join_parts(&[
                r#"type="radio""#,
                &format!(r#"name="{name}""#),
                &format!(r#"value="{opt_value}""#),
                checked,
                &extra,
            ]);
            html.push_str(&format!("<input {parts}>\n"));
            html.push_str(&format!(
                "<label for=\"{name}_{opt_value}\">{}</label>\n",
                html_escape(label)
            ));
        }

        html
    }
}

/// A `<select>` with an optional blank option and one option per choice.
#[derive(Debug, Clone, Copy)]
pub struct Select<'a> {
    /// Available choices.
    pub choices: &'a Choices,
    /// Label of the blank leading option.
    pub empty_value: Option<&'a str>,
}

impl<'a> Select<'a> {
    /// Creates a select over the given choices.
    #[must_use]
    pub const fn new(choices: &'a Choices, empty_value: Option<&'a str>) -> Self {
        Self {
            choices,
            empty_value,
        }
    }
}

impl Widget for Select<'_> {
    fn render(&self, name: &str, value: &str, attrs: &Attributes) -> String {
        let parts = join_parts(&[&format!(r#"name="{}""#, html_escape(name)), &attrs.to_html()]);
        let mut html = format!("<select {parts}>\n");

        if let Some(empty) = self.empty_value {
            html.push_str(&format!(
                "<option value=\"\">{}</option>\n",
                html_escape(empty)
            ));
        }

        for (opt_value, label) in self.choices {
            let selected = if loose_eq(opt_value, value) {
                "selected"
            } else {
                ""
            };
            let opt_attrs = join_parts(&[&format!(r#"value="{}""#, html_escape(opt_value)), selected]);
            html.push_str(&format!(
                "<option {opt_attrs}>{}</option>\n",
                html_escape(label)
            ));
        }

        html.push_str("</select>\n");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices() -> Choices {
        [("us", "United States"), ("ca", "Canada")]
            .into_iter()
            .map(|(v, l)| (v.to_string(), l.to_string()))
            .collect()
    }

    #[test]
    fn test_input() {
        let attrs = Attributes::new().with("class", "form-control");
        let html = Input::new("text").render("name", "John", &attrs);
        assert_eq!(
            html,
            "<input type=\"text\" name=\"name\" value=\"John\" class=\"form-control\">\n"
        );
    }

    #[test]
    fn test_input_without_attrs() {
        let html = Input::new("hidden").render("id", "7", &Attributes::new());
        assert_eq!(html, "<input type=\"hidden\" name=\"id\" value=\"7\">\n");
    }

    #[test]
    fn test_input_escapes_value() {
        let html = Input::new("text").render("q", "<b>", &Attributes::new());
        assert!(html.contains(r#"value="&lt;b&gt;""#));
    }

    #[test]
    fn test_textarea() {
        let html = Textarea.render("content", "Hello", &Attributes::new().with("rows", 4_i64));
        assert_eq!(html, "<textarea name=\"content\" rows=\"4\">Hello</textarea>\n");
    }

    #[test]
    fn test_checkbox() {
        let checked = Checkbox.render("agree", "1", &Attributes::new());
        assert_eq!(
            checked,
            "<input type=\"checkbox\" name=\"agree\" value=\"1\" checked>\n"
        );

        let unchecked = Checkbox.render("agree", "0", &Attributes::new());
        assert!(!unchecked.contains("checked"));
    }

    #[test]
    fn test_radio_group() {
        let choices = choices();
        let html = RadioGroup::new(&choices).render("country", "ca", &Attributes::new());
        assert_eq!(
            html,
            "<input type=\"radio\" name=\"country\" value=\"us\">\n\
             <label for=\"country_us\">United States</label>\n\
             <input type=\"radio\" name=\"country\" value=\"ca\" checked>\n\
             <label for=\"country_ca\">Canada</label>\n"
        );
    }

    #[test]
    fn test_radio_group_without_choices() {
        let choices = Choices::new();
        let html = RadioGroup::new(&choices).render("x", "", &Attributes::new());
        assert!(html.is_empty());
    }

    #[test]
    fn test_select() {
        let choices = choices();
        let html = Select::new(&choices, Some("Pick one")).render(
            "country",
            "us",
            &Attributes::new().with("class", "form-select"),
        );
        assert_eq!(
            html,
            "<select name=\"country\" class=\"form-select\">\n\
             <option value=\"\">Pick one</option>\n\
             <option value=\"us\" selected>United States</option>\n\
             <option value=\"ca\">Canada</option>\n\
             </select>\n"
        );
    }

    #[test]
    fn test_select_numeric_match() {
        let choices: Choices = [("1".to_string(), "One".to_string())].into_iter().collect();
        let html = Select::new(&choices, None).render("n", "1.0", &Attributes::new());
        assert!(html.contains(r#"<option value="1" selected>One</option>"#));
    }
}
