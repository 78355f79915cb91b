//! Forms: ordered field definitions plus data and errors.
//!
//! Validation happens elsewhere; a [`Form`] here is the already-validated
//! state a page wants to show, built with a small builder API.
//!
//! # Examples
//!
//! ```
//! use bootstrap5_forms::form::{Field, Form};
//! use bootstrap5_forms::widgets::{Widget, WidgetKind};
//!
//! let form = Form::new()
//!     .with_field(Field::new("subject", Widget::new(WidgetKind::TextInput)))
//!     .bind([("subject", "Hello")])
//!     .with_error("subject", "Too short.");
//!
//! let field = form.field("subject").unwrap();
//! assert_eq!(field.errors, vec!["Too short.".to_string()]);
//! ```

use std::collections::BTreeMap;

use bootstrap5_core::error::{BootstrapError, BootstrapResult};
use bootstrap5_core::text::pretty_name;
use serde::{Deserialize, Serialize};

use crate::bound_field::{BoundField, FormState};
use crate::widgets::{FieldValue, Widget, WidgetKind};

/// Key under which form-wide errors are stored.
pub const NON_FIELD_ERRORS: &str = "__all__";

const fn default_true() -> bool {
    true
}

/// A field definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// The field name.
    pub name: String,
    /// Explicit label; defaults to the prettified name.
    #[serde(default)]
    pub label: Option<String>,
    /// Help text.
    #[serde(default)]
    pub help_text: String,
    /// Whether a value is required.
    #[serde(default = "default_true")]
    pub required: bool,
    /// Whether the field is disabled.
    #[serde(default)]
    pub disabled: bool,
    /// The widget.
    pub widget: Widget,
    /// Initial value for unbound forms.
    #[serde(default)]
    pub initial: Option<FieldValue>,
}

impl Field {
    /// Creates a required field.
    pub fn new(name: impl Into<String>, widget: Widget) -> Self {
        Self {
            name: name.into(),
            label: None,
            help_text: String::new(),
            required: true,
            disabled: false,
            widget,
            initial: None,
        }
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = help_text.into();
        self
    }

    /// Sets whether the field is required.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets whether the field is disabled.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the initial value.
    #[must_use]
    pub fn initial(mut self, value: impl Into<FieldValue>) -> Self {
        self.initial = Some(value.into());
        self
    }
}

/// A form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Form {
    /// Field definitions in display order.
    pub fields: Vec<Field>,
    /// Name prefix (`{prefix}-{name}`).
    pub prefix: Option<String>,
    /// Whether the form received data.
    pub is_bound: bool,
    /// Submitted data keyed by field name.
    pub data: BTreeMap<String, FieldValue>,
    /// Errors keyed by field name; form-wide errors under [`NON_FIELD_ERRORS`].
    pub errors: BTreeMap<String, Vec<String>>,
    /// The form may be left empty.
    pub empty_permitted: bool,
    /// Emit `required` attributes.
    pub use_required_attribute: bool,
    /// Error class override.
    pub error_css_class: Option<String>,
    /// Required class override.
    pub required_css_class: Option<String>,
    /// Bound class override.
    pub bound_css_class: Option<String>,
}

impl Default for Form {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            prefix: None,
            is_bound: false,
            data: BTreeMap::new(),
            errors: BTreeMap::new(),
            empty_permitted: false,
            use_required_attribute: true,
            error_css_class: None,
            required_css_class: None,
            bound_css_class: None,
        }
    }
}

impl Form {
    /// Creates an empty, unbound form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field.
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Sets the prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Binds the form to data keyed by field name.
    #[must_use]
    pub fn bind<K, V, I>(mut self, data: I) -> Self
    where
        K: AsRef<str>,
        V: Into<FieldValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.is_bound = true;
        for (name, value) in data {
            self.data.insert(name.as_ref().to_string(), value.into());
        }
        self
    }

    /// Records an error on a field.
    #[must_use]
    pub fn with_error(mut self, field: &str, message: impl Into<String>) -> Self {
        self.add_error(Some(field), message);
        self
    }

    /// Records a form-wide error.
    #[must_use]
    pub fn with_non_field_error(mut self, message: impl Into<String>) -> Self {
        self.add_error(None, message);
        self
    }

    /// Records an error; `None` means form-wide.
    pub fn add_error(&mut self, field: Option<&str>, message: impl Into<String>) {
        self.errors
            .entry(field.unwrap_or(NON_FIELD_ERRORS).to_string())
            .or_default()
            .push(message.into());
    }

    /// Sets `empty_permitted`.
    #[must_use]
    pub const fn empty_permitted(mut self, empty_permitted: bool) -> Self {
        self.empty_permitted = empty_permitted;
        self
    }

    /// Sets `use_required_attribute`.
    #[must_use]
    pub const fn use_required_attribute(mut self, value: bool) -> Self {
        self.use_required_attribute = value;
        self
    }

    /// Sets the form's error, required and bound classes.
    #[must_use]
    pub fn css_classes(
        mut self,
        error_css_class: Option<&str>,
        required_css_class: Option<&str>,
        bound_css_class: Option<&str>,
    ) -> Self {
        self.error_css_class = error_css_class.map(str::to_string);
        self.required_css_class = required_css_class.map(str::to_string);
        self.bound_css_class = bound_css_class.map(str::to_string);
        self
    }

    /// Returns `name` with the prefix applied.
    pub fn add_prefix(&self, name: &str) -> String {
        match &self.prefix {
            Some(p) => format!("{p}-{name}"),
            None => name.to_string(),
        }
    }

    /// Form-wide errors.
    pub fn non_field_errors(&self) -> &[String] {
        self.errors
            .get(NON_FIELD_ERRORS)
            .map_or(&[], Vec::as_slice)
    }

    /// Returns `true` if any field or form-wide error is recorded.
    pub fn has_errors(&self) -> bool {
        self.errors.values().any(|e| !e.is_empty())
    }

    fn state(&self) -> FormState {
        FormState {
            is_bound: self.is_bound,
            empty_permitted: self.empty_permitted,
            use_required_attribute: self.use_required_attribute,
            error_css_class: self.error_css_class.clone(),
            required_css_class: self.required_css_class.clone(),
            bound_css_class: self.bound_css_class.clone(),
        }
    }

    fn bind_field(&self, field: &Field, state: &FormState) -> BoundField {
        let html_name = self.add_prefix(&field.name);
        let value = if self.is_bound {
            match self.data.get(&field.name) {
                Some(v) => Some(v.clone()),
                None if field.widget.kind == WidgetKind::CheckboxInput => {
                    Some(FieldValue::Bool(false))
                }
                None if field.widget.kind.is_file() => field.initial.clone(),
                None => None,
            }
        } else {
            field.initial.clone()
        };
        BoundField {
            name: field.name.clone(),
            html_name,
            label: field
                .label
                .clone()
                .unwrap_or_else(|| pretty_name(&field.name)),
            help_text: field.help_text.clone(),
            required: field.required,
            disabled: field.disabled,
            widget: field.widget.clone(),
            value,
            initial: field.initial.clone(),
            errors: self.errors.get(&field.name).cloned().unwrap_or_default(),
            form: state.clone(),
        }
    }

    /// All fields, bound to the form's data and errors.
    pub fn bound_fields(&self) -> Vec<BoundField> {
        let state = self.state();
        self.fields
            .iter()
            .map(|f| self.bind_field(f, &state))
            .collect()
    }

    /// The bound field called `name`.
    pub fn field(&self, name: &str) -> BootstrapResult<BoundField> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| self.bind_field(f, &self.state()))
            .ok_or_else(|| BootstrapError::FieldNotFound(name.to_string()))
    }

    /// Bound fields with hidden widgets.
    pub fn hidden_fields(&self) -> Vec<BoundField> {
        self.bound_fields()
            .into_iter()
            .filter(BoundField::is_hidden)
            .collect()
    }

    /// Bound fields with visible widgets.
    pub fn visible_fields(&self) -> Vec<BoundField> {
        self.bound_fields()
            .into_iter()
            .filter(|f| !f.is_hidden())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact_form() -> Form {
        Form::new()
            .with_field(Field::new("subject", Widget::new(WidgetKind::TextInput)).help_text("my_help_text"))
            .with_field(Field::new("cc_myself", Widget::new(WidgetKind::CheckboxInput)).required(false))
            .with_field(Field::new("secret", Widget::new(WidgetKind::HiddenInput)).initial("A"))
    }

    #[test]
    fn test_builder_field() {
        let f = Field::new("first_name", Widget::new(WidgetKind::TextInput))
            .label("Name")
            .required(false)
            .disabled(true)
            .initial("x");
        assert_eq!(f.label.as_deref(), Some("Name"));
        assert!(!f.required);
        assert!(f.disabled);
        assert_eq!(f.initial, Some(FieldValue::from("x")));
    }

    #[test]
    fn test_bound_fields_unbound() {
        let form = contact_form();
        let fields = form.bound_fields();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].label, "Subject");
        assert_eq!(fields[1].label, "Cc myself");
        assert_eq!(fields[2].value, Some(FieldValue::from("A")));
        assert!(!fields[0].form.is_bound);
    }

    #[test]
    fn test_bind_with_prefix() {
        let form = contact_form()
            .with_prefix("contact")
            .bind([("subject", "Hi")]);
        let subject = form.field("subject").unwrap();
        assert_eq!(subject.html_name, "contact-subject");
        assert_eq!(subject.value, Some(FieldValue::from("Hi")));
        assert!(subject.form.is_bound);
        assert_eq!(
            form.field("cc_myself").unwrap().value,
            Some(FieldValue::Bool(false))
        );
        assert_eq!(form.field("secret").unwrap().value, None);
    }

    #[test]
    fn test_errors() {
        let form = contact_form()
            .with_error("subject", "Required.")
            .with_non_field_error("Whole form is wrong.");
        assert!(form.has_errors());
        assert_eq!(form.non_field_errors(), ["Whole form is wrong.".to_string()]);
        assert_eq!(form.field("subject").unwrap().errors, vec!["Required.".to_string()]);
    }

    #[test]
    fn test_field_not_found() {
        let err = contact_form().field("nope").unwrap_err();
        assert_eq!(err, BootstrapError::FieldNotFound("nope".to_string()));
    }

    #[test]
    fn test_hidden_and_visible() {
        let form = contact_form();
        assert_eq!(form.hidden_fields().len(), 1);
        assert_eq!(form.visible_fields().len(), 2);
    }

    #[test]
    fn test_state_propagates() {
        let form = contact_form()
            .empty_permitted(true)
            .use_required_attribute(false)
            .css_classes(Some("err"), Some("req"), None);
        let f = form.field("subject").unwrap();
        assert!(f.form.empty_permitted);
        assert!(!f.form.use_required_attribute);
        assert_eq!(f.form.error_css_class.as_deref(), Some("err"));
        assert_eq!(f.form.required_css_class.as_deref(), Some("req"));
        assert_eq!(f.form.bound_css_class, None);
    }

    #[test]
    fn test_serde_roundtrip() {
        let form = contact_form().bind([("subject", "Hi")]).with_error("subject", "x");
        let value = serde_json::to_value(&form).unwrap();
        let back: Form = serde_json::from_value(value).unwrap();
        assert_eq!(back, form);
    }
}
