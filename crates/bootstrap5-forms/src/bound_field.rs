//! Bound fields: form fields paired with their value, errors and form state.
//!
//! A [`BoundField`] owns a snapshot of everything a renderer needs, including
//! the form-level flags in [`FormState`], so it can be rendered on its own or
//! passed through a template context.

use bootstrap5_core::html::{escape, Attrs};
use serde::{Deserialize, Serialize};

use crate::widgets::{ChoiceStyle, FieldValue, Widget};

const fn default_true() -> bool {
    true
}

/// Form-level flags a field needs when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    /// The form received data.
    #[serde(default)]
    pub is_bound: bool,
    /// The form may be submitted empty (extra formset forms).
    #[serde(default)]
    pub empty_permitted: bool,
    /// Emit `required` on widgets of required fields.
    #[serde(default = "default_true")]
    pub use_required_attribute: bool,
    /// Form-level error class override.
    #[serde(default)]
    pub error_css_class: Option<String>,
    /// Form-level required class override.
    #[serde(default)]
    pub required_css_class: Option<String>,
    /// Form-level class for bound fields without errors.
    #[serde(default)]
    pub bound_css_class: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            is_bound: false,
            empty_permitted: false,
            use_required_attribute: true,
            error_css_class: None,
            required_css_class: None,
            bound_css_class: None,
        }
    }
}

/// A form field bound to data and validation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundField {
    /// The field name.
    pub name: String,
    /// The name attribute, with the form prefix applied.
    pub html_name: String,
    /// Human-readable label.
    pub label: String,
    /// Help text.
    #[serde(default)]
    pub help_text: String,
    /// Whether the field is required.
    #[serde(default = "default_true")]
    pub required: bool,
    /// Whether the field is disabled.
    #[serde(default)]
    pub disabled: bool,
    /// The widget used for rendering.
    pub widget: Widget,
    /// The value to display.
    #[serde(default)]
    pub value: Option<FieldValue>,
    /// The initial value.
    #[serde(default)]
    pub initial: Option<FieldValue>,
    /// Validation error messages.
    #[serde(default)]
    pub errors: Vec<String>,
    /// Snapshot of the owning form's state.
    #[serde(default)]
    pub form: FormState,
}

impl BoundField {
    /// Returns the auto-generated HTML `id` for this field.
    pub fn auto_id(&self) -> String {
        format!("id_{}", self.html_name)
    }

    /// The id the label should point at, if any.
    pub fn id_for_label(&self) -> Option<String> {
        let id = self
            .widget
            .attrs
            .get_str("id")
            .unwrap_or_else(|| self.auto_id());
        self.widget.id_for_label(&id)
    }

    /// Returns `true` if the widget is hidden.
    pub fn is_hidden(&self) -> bool {
        self.widget.is_hidden()
    }

    /// Returns `true` if this field has any errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The `required`/`disabled` attributes the form adds to `widget`.
    pub fn build_widget_attrs(&self, widget: &Widget) -> Attrs {
        let mut attrs = Attrs::new();
        if self.required
            && self.form.use_required_attribute
            && widget.use_required_attribute(self.initial.as_ref())
        {
            attrs.insert("required", true);
        }
        if self.disabled {
            attrs.insert("disabled", true);
        }
        attrs
    }

    /// Renders the field's own widget.
    pub fn as_widget(&self, extra_attrs: Option<&Attrs>, style: ChoiceStyle) -> String {
        self.render_widget(&self.widget, extra_attrs, style)
    }

    /// Renders `widget` in place of the field's widget, as this field.
    ///
    /// Renderers use this to render an adjusted copy of the widget without
    /// touching the field itself.
    pub fn render_widget(
        &self,
        widget: &Widget,
        extra_attrs: Option<&Attrs>,
        style: ChoiceStyle,
    ) -> String {
        let mut attrs = extra_attrs.cloned().unwrap_or_default();
        attrs.update(&self.build_widget_attrs(widget));
        if !widget.attrs.contains("id") {
            attrs.set_default("id", self.auto_id());
        }
        widget.render(&self.html_name, self.value.as_ref(), &attrs, style)
    }

    /// Renders a plain `<label>` for this field.
    pub fn label_tag(&self) -> String {
        let label = escape(&self.label);
        match self.id_for_label() {
            Some(id) => format!(r#"<label for="{id}">{label}</label>"#),
            None => format!("<label>{label}</label>"),
        }
    }

    /// Renders the error list as Django's `<ul class="errorlist">`.
    pub fn errors_as_ul(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        let items: String = self
            .errors
            .iter()
            .map(|e| format!("<li>{}</li>", escape(e)))
            .collect();
        format!(r#"<ul class="errorlist">{items}</ul>"#)
    }
}
