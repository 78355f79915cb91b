//! Stand-alone components: alerts, buttons and labels.
//!
//! Content is inserted as-is. Callers escape untrusted text first.

use bootstrap5_core::css::merge_css_classes;
use bootstrap5_core::error::{BootstrapError, BootstrapResult, ALERT_TYPES};
use bootstrap5_core::html::{render_tag, Attrs};
use bootstrap5_core::size::{get_size_class, parse_size, Size};
use serde::{Deserialize, Serialize};

const CLOSE_BUTTON: &str = r#"<button aria-label="Close" class="btn-close" data-bs-dismiss="alert" type="button"></button>"#;

/// Renders a Bootstrap alert.
///
/// # Examples
///
/// ```
/// use bootstrap5_render::components::render_alert;
///
/// assert_eq!(
///     render_alert("Saved.", "success", false, "").unwrap(),
///     r#"<div class="alert alert-success" role="alert">Saved.</div>"#
/// );
/// ```
pub fn render_alert(
    content: &str,
    alert_type: &str,
    dismissible: bool,
    extra_classes: &str,
) -> BootstrapResult<String> {
    if !ALERT_TYPES.contains(&alert_type) {
        return Err(BootstrapError::InvalidAlertType(alert_type.to_string()));
    }
    let alert_class = format!("alert alert-{alert_type}");
    let (dismiss_class, button) = if dismissible {
        ("alert-dismissible fade show", CLOSE_BUTTON)
    } else {
        ("", "")
    };
    let attrs = Attrs::new()
        .with(
            "class",
            merge_css_classes([alert_class.as_str(), dismiss_class, extra_classes]),
        )
        .with("role", "alert");
    Ok(render_tag("div", &attrs, &format!("{content}{button}"), true))
}

/// Button parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonOptions {
    /// `submit`, `reset`, `button`, `link` or nothing.
    pub button_type: Option<String>,
    /// Defaults to `btn-primary`.
    pub button_class: Option<String>,
    pub button_outline: bool,
    pub size: Option<String>,
    /// Turns the button into an `<a role="button">`.
    pub href: Option<String>,
    pub name: Option<String>,
    pub value: Option<String>,
    pub title: Option<String>,
    pub id: Option<String>,
    pub extra_classes: Option<String>,
}

impl ButtonOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn button_type(mut self, button_type: impl Into<String>) -> Self {
        self.button_type = Some(button_type.into());
        self
    }

    #[must_use]
    pub fn button_class(mut self, button_class: impl Into<String>) -> Self {
        self.button_class = Some(button_class.into());
        self
    }

    #[must_use]
    pub const fn outline(mut self, outline: bool) -> Self {
        self.button_outline = outline;
        self
    }

    #[must_use]
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    #[must_use]
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

fn outline_class(button_class: &str) -> String {
    match button_class.strip_prefix("btn-") {
        Some(rest) if !rest.starts_with("outline-") => format!("btn-outline-{rest}"),
        _ => button_class.to_string(),
    }
}

/// Renders a `<button>`, or an `<a role="button">` when `href` is set.
pub fn render_button(content: &str, options: &ButtonOptions) -> BootstrapResult<String> {
    let size = parse_size(options.size.as_deref().unwrap_or_default(), Size::Md)?;
    let mut button_class = options
        .button_class
        .clone()
        .unwrap_or_else(|| "btn-primary".to_string());
    if options.button_outline {
        button_class = outline_class(&button_class);
    }
    let size_class = get_size_class(size, "btn", Some(Size::Md));

    let mut attrs = Attrs::new();
    attrs.insert(
        "class",
        merge_css_classes([
            "btn",
            button_class.as_str(),
            size_class.as_str(),
            options.extra_classes.as_deref().unwrap_or_default(),
        ]),
    );

    let button_type = options.button_type.as_deref().unwrap_or_default();
    match button_type {
        "" | "link" => {}
        "submit" | "reset" | "button" => attrs.insert("type", button_type),
        other => return Err(BootstrapError::InvalidButtonType(other.to_string())),
    }

    let tag = if let Some(href) = &options.href {
        if !matches!(button_type, "" | "link") {
            return Err(BootstrapError::HrefNotAllowed(button_type.to_string()));
        }
        attrs.insert("href", href.as_str());
        attrs.set_default("role", "button");
        "a"
    } else {
        "button"
    };

    for (name, value) in [
        ("id", &options.id),
        ("name", &options.name),
        ("value", &options.value),
        ("title", &options.title),
    ] {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            attrs.insert(name, value);
        }
    }

    Ok(render_tag(tag, &attrs, content, true))
}

/// Renders a `<label>`.
pub fn render_label(
    content: &str,
    label_for: Option<&str>,
    label_class: Option<&str>,
    label_title: Option<&str>,
) -> String {
    let mut attrs = Attrs::new();
    for (name, value) in [("for", label_for), ("class", label_class), ("title", label_title)] {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            attrs.insert(name, value);
        }
    }
    render_tag("label", &attrs, content, true)
}
