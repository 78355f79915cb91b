//! Small markup blocks for errors and help text.

use bootstrap5_core::html::escape;

/// One feedback `<div>` per error message.
///
/// `invalid-feedback` is only shown by Bootstrap next to an `.is-invalid`
/// control, so without server-side validation the messages use
/// `text-danger` instead. `always_visible` adds `d-block` for widgets whose
/// inputs are not siblings of the feedback.
pub fn field_errors_html(errors: &[String], server_side_validation: bool, always_visible: bool) -> String {
    let class = match (server_side_validation, always_visible) {
        (false, _) => "text-danger",
        (true, false) => "invalid-feedback",
        (true, true) => "invalid-feedback d-block",
    };
    errors
        .iter()
        .map(|error| format!("<div class=\"{class}\">{}</div>", escape(error)))
        .collect()
}

/// The `form-text` help block, or nothing for empty help.
pub fn help_text_html(help_text: &str) -> String {
    if help_text.is_empty() {
        String::new()
    } else {
        format!("<div class=\"form-text\">{}</div>", escape(help_text))
    }
}

/// A `text-danger` block listing form or formset errors.
pub fn errors_block_html(errors: &[String]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let items: String = errors
        .iter()
        .map(|error| format!("<div>{}</div>", escape(error)))
        .collect();
    format!("<div class=\"text-danger\">{items}</div>")
}
