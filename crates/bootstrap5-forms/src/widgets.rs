//! Widgets: the HTML controls a field renders as.
//!
//! A [`Widget`] is plain data (a [`WidgetKind`], attributes, choices and,
//! for composite widgets, sub-widgets) so that it can travel through a
//! template context and be adjusted by renderers before rendering. The
//! default markup follows Django's own widget templates, with attributes
//! emitted in name order.

use std::fmt;

use bootstrap5_core::css::merge_css_classes;
use bootstrap5_core::html::{escape, render_tag, Attrs};
use serde::{Deserialize, Serialize};

/// Enumerates the built-in widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetKind {
    /// `<input type="text">`.
    TextInput,
    /// `<input type="number">`.
    NumberInput,
    /// `<input type="email">`.
    EmailInput,
    /// `<input type="url">`.
    UrlInput,
    /// `<input type="password">`, never echoes its value.
    PasswordInput,
    /// `<input type="hidden">`.
    HiddenInput,
    /// One hidden input per value.
    MultipleHiddenInput,
    /// `<textarea>`.
    Textarea,
    /// Text input for dates.
    DateInput,
    /// Text input for date and time.
    DateTimeInput,
    /// Text input for times.
    TimeInput,
    /// `<input type="checkbox">`.
    CheckboxInput,
    /// `<select>`.
    Select,
    /// `<select>` with Unknown/Yes/No.
    NullBooleanSelect,
    /// `<select multiple>`.
    SelectMultiple,
    /// A list of radio buttons.
    RadioSelect,
    /// Radio buttons rendered as a Bootstrap button group.
    RadioSelectButtonGroup,
    /// A list of checkboxes.
    CheckboxSelectMultiple,
    /// `<input type="file">`.
    FileInput,
    /// `<input type="file">` with a clear checkbox for the current file.
    ClearableFileInput,
    /// A date input and a time input.
    SplitDateTimeWidget,
    /// Month, day and year selects.
    SelectDateWidget,
    /// Read-only summary of a password hash.
    ReadOnlyPasswordHash,
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl WidgetKind {
    /// The `type` of the `<input>` this widget renders, if it renders one.
    pub const fn default_input_type(self) -> Option<&'static str> {
        match self {
            Self::TextInput | Self::DateInput | Self::DateTimeInput | Self::TimeInput => {
                Some("text")
            }
            Self::NumberInput => Some("number"),
            Self::EmailInput => Some("email"),
            Self::UrlInput => Some("url"),
            Self::PasswordInput => Some("password"),
            Self::HiddenInput | Self::MultipleHiddenInput => Some("hidden"),
            Self::CheckboxInput | Self::CheckboxSelectMultiple => Some("checkbox"),
            Self::RadioSelect | Self::RadioSelectButtonGroup => Some("radio"),
            Self::FileInput | Self::ClearableFileInput => Some("file"),
            Self::Textarea
            | Self::Select
            | Self::NullBooleanSelect
            | Self::SelectMultiple
            | Self::SplitDateTimeWidget
            | Self::SelectDateWidget
            | Self::ReadOnlyPasswordHash => None,
        }
    }

    /// `TextInput` and the date/time inputs built on it.
    pub const fn is_text_input(self) -> bool {
        matches!(
            self,
            Self::TextInput | Self::DateInput | Self::DateTimeInput | Self::TimeInput
        )
    }

    /// Widgets that accept a `placeholder` attribute.
    pub const fn accepts_placeholder(self) -> bool {
        self.is_text_input()
            || matches!(
                self,
                Self::Textarea
                    | Self::NumberInput
                    | Self::EmailInput
                    | Self::UrlInput
                    | Self::PasswordInput
            )
    }

    /// `<select>` based widgets.
    pub const fn is_select(self) -> bool {
        matches!(
            self,
            Self::Select | Self::NullBooleanSelect | Self::SelectMultiple
        )
    }

    /// Widgets rendering one input per choice.
    pub const fn is_choice_set(self) -> bool {
        matches!(
            self,
            Self::RadioSelect | Self::RadioSelectButtonGroup | Self::CheckboxSelectMultiple
        )
    }

    /// File upload widgets.
    pub const fn is_file(self) -> bool {
        matches!(self, Self::FileInput | Self::ClearableFileInput)
    }

    /// Widgets composed of sub-widgets.
    pub const fn is_multi_widget(self) -> bool {
        matches!(self, Self::SplitDateTimeWidget | Self::SelectDateWidget)
    }

    /// Hidden widgets.
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::HiddenInput | Self::MultipleHiddenInput)
    }
}

/// A single `value`/`label` choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Submitted value.
    pub value: String,
    /// Displayed label.
    pub label: String,
}

impl Choice {
    /// Creates a choice.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A choice or a named group of choices (`<optgroup>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChoiceEntry {
    /// A single option.
    Option(Choice),
    /// A labelled group of options.
    Group {
        /// Group label.
        group: String,
        /// Options in the group.
        options: Vec<Choice>,
    },
}

impl ChoiceEntry {
    /// Builds a group from `(value, label)` pairs.
    pub fn group<'a>(
        label: impl Into<String>,
        options: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        Self::Group {
            group: label.into(),
            options: options
                .into_iter()
                .map(|(v, l)| Choice::new(v, l))
                .collect(),
        }
    }
}

impl From<(&str, &str)> for ChoiceEntry {
    fn from((value, label): (&str, &str)) -> Self {
        Self::Option(Choice::new(value, label))
    }
}

/// A field value as the widget sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Checkbox state.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Text value.
    Text(String),
    /// Several values (multiple selects, multi-widgets).
    List(Vec<String>),
}

impl FieldValue {
    /// Text form of a scalar value. Lists have none.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Bool(true) => Some("True".to_string()),
            Self::Bool(false) => Some("False".to_string()),
            Self::Int(i) => Some(i.to_string()),
            Self::Text(s) => Some(s.clone()),
            Self::List(_) => None,
        }
    }

    /// Whether `choice` is one of the selected values.
    pub fn contains(&self, choice: &str) -> bool {
        match self {
            Self::List(values) => values.iter().any(|v| v == choice),
            other => other.as_text().is_some_and(|v| v == choice),
        }
    }

    /// Checkbox truthiness.
    pub fn is_checked(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Text(s) => !s.is_empty(),
            Self::List(values) => !values.is_empty(),
        }
    }

    /// `true` for empty text and empty lists.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::List(values) => values.is_empty(),
            Self::Bool(_) | Self::Int(_) => false,
        }
    }

    /// The `index`-th part of a multi-widget value.
    pub fn part(&self, index: usize) -> Option<Self> {
        match self {
            Self::List(values) => values.get(index).cloned().map(Self::Text),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(values: Vec<&str>) -> Self {
        Self::List(values.into_iter().map(str::to_string).collect())
    }
}

/// How choice sets (radio and checkbox lists) are marked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChoiceStyle {
    /// Django's plain `<div><label><input>..</label></div>` list.
    #[default]
    Default,
    /// Bootstrap `form-check` blocks, optionally inline.
    FormCheck {
        /// Add `form-check-inline`.
        inline: bool,
    },
    /// Bootstrap `btn-group` with `btn-check` inputs.
    ButtonGroup,
}

/// A widget instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Widget {
    /// The widget type.
    pub kind: WidgetKind,
    /// HTML attributes. A `type` entry overrides the input type.
    #[serde(default)]
    pub attrs: Attrs,
    /// Choices for select and choice-set widgets.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<ChoiceEntry>,
    /// Parts of a composite widget.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subwidgets: Vec<Self>,
}

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Widget {
    /// Creates a widget of `kind` with its stock defaults.
    pub fn new(kind: WidgetKind) -> Self {
        let mut widget = Self {
            kind,
            attrs: Attrs::new(),
            choices: Vec::new(),
            subwidgets: Vec::new(),
        };
        match kind {
            WidgetKind::Textarea => {
                widget.attrs.insert("cols", "40");
                widget.attrs.insert("rows", "10");
            }
            WidgetKind::NullBooleanSelect => {
                widget.choices = vec![
                    ("unknown", "Unknown").into(),
                    ("true", "Yes").into(),
                    ("false", "No").into(),
                ];
            }
            WidgetKind::SplitDateTimeWidget => {
                widget.subwidgets = vec![
                    Self::new(WidgetKind::DateInput),
                    Self::new(WidgetKind::TimeInput),
                ];
            }
            WidgetKind::SelectDateWidget => {
                widget.subwidgets = Self::date_selects(std::iter::empty());
            }
            _ => {}
        }
        widget
    }

    /// A date widget of three selects offering `years`.
    pub fn select_date(years: impl IntoIterator<Item = i32>) -> Self {
        let mut widget = Self::new(WidgetKind::SelectDateWidget);
        widget.subwidgets = Self::date_selects(years);
        widget
    }

    fn date_selects(years: impl IntoIterator<Item = i32>) -> Vec<Self> {
        let months: Vec<ChoiceEntry> = MONTHS
            .iter()
            .enumerate()
            .map(|(i, m)| ChoiceEntry::Option(Choice::new((i + 1).to_string(), *m)))
            .collect();
        let days: Vec<ChoiceEntry> = (1..=31)
            .map(|d| ChoiceEntry::Option(Choice::new(d.to_string(), d.to_string())))
            .collect();
        let years: Vec<ChoiceEntry> = years
            .into_iter()
            .map(|y| ChoiceEntry::Option(Choice::new(y.to_string(), y.to_string())))
            .collect();
        [months, days, years]
            .into_iter()
            .map(|choices| Self::new(WidgetKind::Select).with_choices(choices))
            .collect()
    }

    /// Sets an attribute.
    #[must_use]
    pub fn with_attr(mut self, name: &str, value: impl Into<bootstrap5_core::AttrValue>) -> Self {
        self.attrs.insert(name, value);
        self
    }

    /// Replaces the choices.
    #[must_use]
    pub fn with_choices<I, C>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ChoiceEntry>,
    {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }

    /// The input type, honouring a `type` attribute override.
    pub fn input_type(&self) -> Option<String> {
        let default = self.kind.default_input_type()?;
        Some(self.attrs.get_str("type").unwrap_or_else(|| default.to_string()))
    }

    /// Whether the widget renders as hidden input(s).
    pub fn is_hidden(&self) -> bool {
        self.kind.is_hidden() || self.input_type().as_deref() == Some("hidden")
    }

    /// Whether a `required` attribute may be emitted.
    pub fn use_required_attribute(&self, initial: Option<&FieldValue>) -> bool {
        if self.is_hidden() {
            return false;
        }
        match self.kind {
            WidgetKind::CheckboxSelectMultiple => false,
            WidgetKind::Select | WidgetKind::NullBooleanSelect => {
                matches!(self.choices.first(), Some(ChoiceEntry::Option(c)) if c.value.is_empty())
            }
            WidgetKind::ClearableFileInput => initial.map_or(true, FieldValue::is_empty),
            _ => true,
        }
    }

    /// The id a `<label for>` should target, if any.
    pub fn id_for_label(&self, id: &str) -> Option<String> {
        if id.is_empty() {
            return None;
        }
        match self.kind {
            WidgetKind::RadioSelect
            | WidgetKind::RadioSelectButtonGroup
            | WidgetKind::CheckboxSelectMultiple
            | WidgetKind::SplitDateTimeWidget
            | WidgetKind::ReadOnlyPasswordHash => None,
            WidgetKind::SelectDateWidget => Some(format!("{id}_month")),
            _ => Some(id.to_string()),
        }
    }

    fn subwidget_suffix(&self, index: usize) -> String {
        match (self.kind, index) {
            (WidgetKind::SelectDateWidget, 0) => "month".to_string(),
            (WidgetKind::SelectDateWidget, 1) => "day".to_string(),
            (WidgetKind::SelectDateWidget, 2) => "year".to_string(),
            _ => index.to_string(),
        }
    }

    /// Renders the widget.
    ///
    /// `extra_attrs` are laid over the widget's own attributes.
    pub fn render(
        &self,
        name: &str,
        value: Option<&FieldValue>,
        extra_attrs: &Attrs,
        style: ChoiceStyle,
    ) -> String {
        let mut attrs = self.attrs.clone();
        attrs.update(extra_attrs);

        match self.kind {
            WidgetKind::PasswordInput | WidgetKind::FileInput => {
                self.render_input(name, None, attrs)
            }
            WidgetKind::ClearableFileInput => self.render_clearable_file(name, value, attrs),
            WidgetKind::CheckboxInput => self.render_checkbox(name, value, attrs),
            WidgetKind::MultipleHiddenInput => self.render_multiple_hidden(name, value, &attrs),
            WidgetKind::Textarea => {
                attrs.insert("name", name);
                let content = value.and_then(FieldValue::as_text).unwrap_or_default();
                render_tag("textarea", &attrs, &escape(&content), true)
            }
            WidgetKind::Select | WidgetKind::NullBooleanSelect | WidgetKind::SelectMultiple => {
                self.render_select(name, value, attrs)
            }
            WidgetKind::RadioSelectButtonGroup => {
                self.render_choice_set(name, value, &attrs, ChoiceStyle::ButtonGroup)
            }
            WidgetKind::RadioSelect | WidgetKind::CheckboxSelectMultiple => {
                self.render_choice_set(name, value, &attrs, style)
            }
            WidgetKind::SplitDateTimeWidget | WidgetKind::SelectDateWidget => {
                self.render_subwidgets(name, value, &attrs, style)
            }
            WidgetKind::ReadOnlyPasswordHash => {
                let summary = value
                    .and_then(FieldValue::as_text)
                    .filter(|v| !v.is_empty())
                    .map_or_else(|| "No password set.".to_string(), |v| escape(&v));
                render_tag("div", &attrs, &summary, true)
            }
            _ => {
                let text = value.and_then(FieldValue::as_text);
                self.render_input(name, text, attrs)
            }
        }
    }

    fn render_input(&self, name: &str, value: Option<String>, mut attrs: Attrs) -> String {
        attrs.insert("type", self.input_type().unwrap_or_else(|| "text".to_string()));
        attrs.insert("name", name);
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            attrs.insert("value", value);
        }
        render_tag("input", &attrs, "", false)
    }

    fn render_checkbox(&self, name: &str, value: Option<&FieldValue>, mut attrs: Attrs) -> String {
        if value.is_some_and(FieldValue::is_checked) {
            attrs.insert("checked", true);
        }
        let text = match value {
            Some(FieldValue::Text(s)) => Some(s.clone()),
            Some(FieldValue::Int(i)) => Some(i.to_string()),
            _ => None,
        };
        self.render_input(name, text, attrs)
    }

    fn render_multiple_hidden(&self, name: &str, value: Option<&FieldValue>, attrs: &Attrs) -> String {
        let values = match value {
            Some(FieldValue::List(values)) => values.clone(),
            Some(other) => other.as_text().into_iter().collect(),
            None => Vec::new(),
        };
        let id = attrs.get_str("id");
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| {
                let mut input_attrs = attrs.clone();
                if let Some(id) = &id {
                    input_attrs.insert("id", format!("{id}_{i}"));
                }
                self.render_input(name, Some(v), input_attrs)
            })
            .collect()
    }

    fn render_clearable_file(
        &self,
        name: &str,
        value: Option<&FieldValue>,
        attrs: Attrs,
    ) -> String {
        let input = self.render_input(name, None, attrs.clone());
        let Some(current) = value.and_then(FieldValue::as_text).filter(|v| !v.is_empty()) else {
            return input;
        };
        let checkbox_name = format!("{name}-clear");
        let checkbox_id = format!("{checkbox_name}_id");
        let mut clear = String::new();
        if !attrs.contains("required") {
            let checkbox_attrs = Attrs::new()
                .with("type", "checkbox")
                .with("name", checkbox_name.as_str())
                .with("id", checkbox_id.as_str())
                .with("disabled", attrs.contains("disabled"));
            clear = format!(
                " {}<label for=\"{checkbox_id}\">Clear</label>",
                render_tag("input", &checkbox_attrs, "", false)
            );
        }
        let current = escape(&current);
        format!("Currently: <a href=\"{current}\">{current}</a>{clear}<br>Change: {input}")
    }

    fn render_select(&self, name: &str, value: Option<&FieldValue>, mut attrs: Attrs) -> String {
        attrs.insert("name", name);
        if self.kind == WidgetKind::SelectMultiple {
            attrs.insert("multiple", true);
        }
        let selected = |choice: &Choice| match (self.kind, value) {
            (WidgetKind::NullBooleanSelect, v) => null_boolean_key(v) == choice.value,
            (_, Some(v)) => v.contains(&choice.value),
            (_, None) => false,
        };
        let option = |choice: &Choice| {
            let option_attrs = Attrs::new()
                .with("value", choice.value.as_str())
                .with("selected", selected(choice));
            render_tag("option", &option_attrs, &escape(&choice.label), true)
        };
        let mut content = String::new();
        for entry in &self.choices {
            match entry {
                ChoiceEntry::Option(choice) => content.push_str(&option(choice)),
                ChoiceEntry::Group { group, options } => {
                    let inner: String = options.iter().map(option).collect();
                    let group_attrs = Attrs::new().with("label", group.as_str());
                    content.push_str(&render_tag("optgroup", &group_attrs, &inner, true));
                }
            }
        }
        render_tag("select", &attrs, &content, true)
    }

    fn render_choice_set(
        &self,
        name: &str,
        value: Option<&FieldValue>,
        attrs: &Attrs,
        style: ChoiceStyle,
    ) -> String {
        let id = attrs.get_str("id");
        let input_type = self.input_type().unwrap_or_else(|| "radio".to_string());
        let mut input_attrs = attrs.clone();
        input_attrs.remove("id");
        input_attrs.insert("type", input_type);
        input_attrs.insert("name", name);

        let option = |choice: &Choice, index: &str| {
            let mut attrs = input_attrs.clone();
            attrs.insert("value", choice.value.as_str());
            if value.is_some_and(|v| v.contains(&choice.value)) {
                attrs.insert("checked", true);
            }
            let option_id = id.as_ref().map(|id| format!("{id}_{index}"));
            if let Some(option_id) = &option_id {
                attrs.insert("id", option_id.as_str());
            }
            let label_for = option_id
                .as_ref()
                .map(|id| format!(" for=\"{id}\""))
                .unwrap_or_default();
            let label = escape(&choice.label);
            match style {
                ChoiceStyle::Default => format!(
                    "<div><label{label_for}>{}{label}</label></div>",
                    render_tag("input", &attrs, "", false)
                ),
                ChoiceStyle::FormCheck { inline } => {
                    let class = attrs.get_str("class").unwrap_or_default();
                    attrs.insert("class", merge_css_classes(["form-check-input", class.as_str()]));
                    let wrapper = if inline {
                        "form-check form-check-inline"
                    } else {
                        "form-check"
                    };
                    format!(
                        "<div class=\"{wrapper}\">{}<label class=\"form-check-label\"{label_for}>{label}</label></div>",
                        render_tag("input", &attrs, "", false)
                    )
                }
                ChoiceStyle::ButtonGroup => {
                    let class = attrs.get_str("class").unwrap_or_default();
                    attrs.insert("class", merge_css_classes(["btn-check", class.as_str()]));
                    attrs.insert("autocomplete", "off");
                    format!(
                        "{}<label class=\"btn btn-outline-primary\"{label_for}>{label}</label>",
                        render_tag("input", &attrs, "", false)
                    )
                }
            }
        };

        let mut content = String::new();
        for (index, entry) in self.choices.iter().enumerate() {
            match entry {
                ChoiceEntry::Option(choice) => content.push_str(&option(choice, &index.to_string())),
                ChoiceEntry::Group { group, options } => {
                    let inner: String = options
                        .iter()
                        .enumerate()
                        .map(|(sub, choice)| option(choice, &format!("{index}_{sub}")))
                        .collect();
                    if style == ChoiceStyle::ButtonGroup {
                        content.push_str(&inner);
                    } else {
                        content.push_str(&format!(
                            "<div><label>{}</label>{inner}</div>",
                            escape(group)
                        ));
                    }
                }
            }
        }

        let mut container = Attrs::new();
        if let Some(id) = &id {
            container.insert("id", id.as_str());
        }
        match style {
            ChoiceStyle::ButtonGroup => {
                container.insert("class", "btn-group");
                container.insert("role", "group");
            }
            ChoiceStyle::Default => {
                if let Some(class) = attrs.get_str("class") {
                    container.insert("class", class);
                }
            }
            ChoiceStyle::FormCheck { .. } => {}
        }
        render_tag("div", &container, &content, true)
    }

    fn render_subwidgets(
        &self,
        name: &str,
        value: Option<&FieldValue>,
        attrs: &Attrs,
        style: ChoiceStyle,
    ) -> String {
        let id = attrs.get_str("id");
        self.subwidgets
            .iter()
            .enumerate()
            .map(|(i, widget)| {
                let suffix = self.subwidget_suffix(i);
                let mut sub_attrs = attrs.clone();
                if let Some(id) = &id {
                    sub_attrs.insert("id", format!("{id}_{suffix}"));
                }
                let sub_value = value.and_then(|v| v.part(i));
                widget.render(
                    &format!("{name}_{suffix}"),
                    sub_value.as_ref(),
                    &sub_attrs,
                    style,
                )
            })
            .collect()
    }
}

fn null_boolean_key(value: Option<&FieldValue>) -> &'static str {
    match value {
        Some(FieldValue::Bool(true)) => "true",
        Some(FieldValue::Bool(false)) => "false",
        Some(FieldValue::Text(s)) => match s.as_str() {
            "true" | "True" | "2" => "true",
            "false" | "False" | "3" => "false",
            _ => "unknown",
        },
        _ => "unknown",
    }
}
