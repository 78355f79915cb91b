//! Formsets: several copies of a form on one page.
//!
//! A [`FormSet`] prefixes each form as `{prefix}-{index}` and carries the
//! management data (TOTAL_FORMS, INITIAL_FORMS, MIN_NUM_FORMS,
//! MAX_NUM_FORMS) that the server needs to reassemble a submission.

use serde::{Deserialize, Serialize};

use crate::form::{Field, Form};
use crate::widgets::{ChoiceStyle, Widget, WidgetKind};

/// The default formset prefix.
pub const DEFAULT_PREFIX: &str = "form";

/// The default upper bound on forms.
pub const DEFAULT_MAX_NUM: usize = 1000;

const TOTAL_FORMS: &str = "TOTAL_FORMS";
const INITIAL_FORMS: &str = "INITIAL_FORMS";
const MIN_NUM_FORMS: &str = "MIN_NUM_FORMS";
const MAX_NUM_FORMS: &str = "MAX_NUM_FORMS";

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

const fn default_max_num() -> usize {
    DEFAULT_MAX_NUM
}

/// A collection of related forms managed together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSet {
    /// The individual forms.
    #[serde(default)]
    pub forms: Vec<Form>,
    /// Name prefix shared by the management form and the forms.
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// How many of the forms edit existing objects.
    #[serde(default)]
    pub initial_forms: usize,
    /// Minimum number of forms.
    #[serde(default)]
    pub min_num: usize,
    /// Maximum number of forms.
    #[serde(default = "default_max_num")]
    pub max_num: usize,
    /// Errors about the formset as a whole.
    #[serde(default)]
    pub non_form_errors: Vec<String>,
    /// Whether the formset received data.
    #[serde(default)]
    pub is_bound: bool,
}

impl FormSet {
    /// Creates a formset around `forms` with the default prefix.
    pub fn new(forms: Vec<Form>) -> Self {
        let is_bound = forms.iter().any(|f| f.is_bound);
        let mut formset = Self {
            forms,
            prefix: default_prefix(),
            initial_forms: 0,
            min_num: 0,
            max_num: DEFAULT_MAX_NUM,
            non_form_errors: Vec::new(),
            is_bound,
        };
        formset.apply_prefixes();
        formset
    }

    fn apply_prefixes(&mut self) {
        for (i, form) in self.forms.iter_mut().enumerate() {
            form.prefix = Some(format!("{}-{i}", self.prefix));
        }
    }

    /// Sets the prefix and re-prefixes the forms.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self.apply_prefixes();
        self
    }

    /// Sets the number of initial forms.
    #[must_use]
    pub const fn with_initial_forms(mut self, initial_forms: usize) -> Self {
        self.initial_forms = initial_forms;
        self
    }

    /// Sets the minimum number of forms.
    #[must_use]
    pub const fn with_min_num(mut self, min_num: usize) -> Self {
        self.min_num = min_num;
        self
    }

    /// Sets the maximum number of forms.
    #[must_use]
    pub const fn with_max_num(mut self, max_num: usize) -> Self {
        self.max_num = max_num;
        self
    }

    /// Records a formset-wide error.
    #[must_use]
    pub fn with_non_form_error(mut self, message: impl Into<String>) -> Self {
        self.non_form_errors.push(message.into());
        self
    }

    /// Number of forms rendered.
    pub fn total_form_count(&self) -> usize {
        self.forms.len()
    }

    /// The management form: four hidden fields under the formset prefix.
    pub fn management_form(&self) -> Form {
        let hidden = |name: &str, value: usize| {
            Field::new(name, Widget::new(WidgetKind::HiddenInput)).initial(value.to_string())
        };
        Form::new()
            .with_prefix(self.prefix.clone())
            .with_field(hidden(TOTAL_FORMS, self.total_form_count()))
            .with_field(hidden(INITIAL_FORMS, self.initial_forms))
            .with_field(hidden(MIN_NUM_FORMS, self.min_num))
            .with_field(hidden(MAX_NUM_FORMS, self.max_num))
    }

    /// Renders the management form's hidden inputs.
    pub fn management_form_html(&self) -> String {
        self.management_form()
            .bound_fields()
            .iter()
            .map(|f| f.as_widget(None, ChoiceStyle::Default))
            .collect()
    }
}
