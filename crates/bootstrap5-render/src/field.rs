//! The field renderer.
//!
//! [`FieldRenderer`] decorates a copy of the field's widget with Bootstrap
//! classes and a placeholder, renders it, and wraps the result with the
//! label, errors and help text the layout asks for. The bound field itself
//! is never modified.

use bootstrap5_core::css::merge_css_classes;
use bootstrap5_core::error::BootstrapResult;
use bootstrap5_core::html::escape;
use bootstrap5_core::logging::render_span;
use bootstrap5_core::settings::Bootstrap5Settings;
use bootstrap5_core::text::strip_tags;
use bootstrap5_forms::bound_field::BoundField;
use bootstrap5_forms::widgets::{ChoiceStyle, Widget, WidgetKind};

use crate::base::BaseRenderer;
use crate::components::render_label;
use crate::options::{RenderOptions, ShowLabel};
use crate::snippets::{field_errors_html, help_text_html};

/// Input types styled as `form-control`.
const FORM_CONTROL_INPUT_TYPES: &[&str] = &[
    "text",
    "number",
    "email",
    "url",
    "tel",
    "password",
    "search",
    "date",
    "datetime-local",
    "time",
    "month",
    "week",
];

const ADDON_KEYS: [&str; 4] = [
    "addon_before",
    "addon_after",
    "addon_before_class",
    "addon_after_class",
];

/// Whether `widget` renders as a `form-control`.
pub fn is_form_control(widget: &Widget) -> bool {
    match widget.kind {
        WidgetKind::Textarea => true,
        kind if kind.accepts_placeholder() => widget
            .input_type()
            .is_some_and(|t| FORM_CONTROL_INPUT_TYPES.contains(&t.as_str())),
        _ => false,
    }
}

/// The base class for a widget and the prefix its size class uses.
fn widget_base_class(widget: &Widget) -> (&'static str, Option<&'static str>) {
    let input_type = widget.input_type().unwrap_or_default();
    match widget.kind {
        WidgetKind::ReadOnlyPasswordHash => ("form-control-static", None),
        kind if kind.is_select() => ("form-select", Some("form-select")),
        WidgetKind::CheckboxInput => ("form-check-input", None),
        kind if kind.is_file() => ("form-control", None),
        _ if input_type == "color" => ("form-control form-control-color", None),
        _ if input_type == "range" => ("form-range", None),
        _ if is_form_control(widget) => ("form-control", Some("form-control")),
        _ => ("", None),
    }
}

fn div(class: &str, content: &str) -> String {
    if class.is_empty() {
        format!("<div>{content}</div>")
    } else {
        format!("<div class=\"{class}\">{content}</div>")
    }
}

/// Wraps each select of a `SelectDateWidget` in a grid cell.
fn wrap_date_selects(html: &str) -> String {
    let cells: String = html
        .split_inclusive("</select>")
        .map(|select| div("col-4", select))
        .collect();
    div("row django_bootstrap5-multi-input", &cells)
}

/// Renders one bound field.
#[derive(Debug, Clone)]
pub struct FieldRenderer<'a> {
    base: BaseRenderer,
    field: &'a BoundField,
    widget: Widget,
    label: String,
    placeholder: String,
    addon_before: String,
    addon_after: String,
    addon_before_class: String,
    addon_after_class: String,
    error_css_class: String,
    required_css_class: String,
    success_css_class: String,
    form_check_class: String,
}

impl<'a> FieldRenderer<'a> {
    /// Resolves the options for `field`.
    pub fn new(
        field: &'a BoundField,
        options: &RenderOptions,
        settings: &Bootstrap5Settings,
    ) -> BootstrapResult<Self> {
        let base = BaseRenderer::new(options, settings)?;

        let mut widget = field.widget.clone();
        let mut addons = ADDON_KEYS.map(|key| widget.attrs.remove(key));
        let [before, after, before_class, after_class] = [
            &options.addon_before,
            &options.addon_after,
            &options.addon_before_class,
            &options.addon_after_class,
        ];
        let mut addon = |index: usize, option: &Option<String>, default: &str| {
            option
                .clone()
                .or_else(|| addons[index].take())
                .unwrap_or_else(|| default.to_string())
        };
        let addon_before = addon(0, before, "");
        let addon_after = addon(1, after, "");
        let addon_before_class = addon(2, before_class, "input-group-text");
        let addon_after_class = addon(3, after_class, "input-group-text");

        let label = options.label.clone().unwrap_or_else(|| field.label.clone());
        let placeholder = options
            .placeholder
            .clone()
            .or_else(|| settings.set_placeholder.then(|| label.clone()))
            .map(|p| strip_tags(&p))
            .unwrap_or_default();

        let form = &field.form;
        let error_css_class = options
            .error_css_class
            .clone()
            .or_else(|| form.error_css_class.clone())
            .unwrap_or_else(|| settings.error_css_class.clone());
        let required_css_class = if form.empty_permitted {
            String::new()
        } else {
            options
                .required_css_class
                .clone()
                .or_else(|| form.required_css_class.clone())
                .unwrap_or_else(|| settings.required_css_class.clone())
        };
        let success_css_class = options
            .bound_css_class
            .clone()
            .or_else(|| form.bound_css_class.clone())
            .unwrap_or_else(|| settings.success_css_class.clone());

        Ok(Self {
            base,
            field,
            widget,
            label,
            placeholder,
            addon_before,
            addon_after,
            addon_before_class,
            addon_after_class,
            error_css_class,
            required_css_class,
            success_css_class,
            form_check_class: options
                .form_check_class
                .clone()
                .unwrap_or_else(|| "form-check".to_string()),
        })
    }

    fn has_errors(&self) -> bool {
        self.field.has_errors()
    }

    fn is_bound(&self) -> bool {
        self.field.form.is_bound
    }

    /// The error or success class for the current state.
    fn state_class(&self) -> &str {
        if self.has_errors() {
            &self.error_css_class
        } else if self.is_bound() {
            &self.success_css_class
        } else {
            ""
        }
    }

    fn validation_class(&self) -> &'static str {
        if !self.base.server_side_validation {
            ""
        } else if self.has_errors() {
            "is-invalid"
        } else if self.is_bound() {
            "is-valid"
        } else {
            ""
        }
    }

    fn add_class_attrs(&self, widget: &mut Widget) {
        let (base_class, size_prefix) = widget_base_class(widget);
        let size_class = size_prefix
            .map(|prefix| self.base.get_size_class(prefix))
            .unwrap_or_default();
        let existing = widget.attrs.get_str("class").unwrap_or_default();
        let classes = merge_css_classes([
            base_class,
            existing.as_str(),
            size_class.as_str(),
            self.state_class(),
            self.validation_class(),
        ]);
        if classes.is_empty() {
            widget.attrs.remove("class");
        } else {
            widget.attrs.insert("class", classes);
        }
    }

    fn add_placeholder_attrs(&self, widget: &mut Widget) {
        if !self.base.set_placeholder
            || !widget.kind.accepts_placeholder()
            || widget.attrs.contains("placeholder")
            || self.placeholder.is_empty()
        {
            return;
        }
        widget.attrs.insert("placeholder", self.placeholder.as_str());
    }

    /// A copy of the widget with classes and placeholder applied.
    pub fn prepared_widget(&self) -> Widget {
        let mut widget = self.widget.clone();
        if widget.kind.is_multi_widget() {
            let outer_class = widget.attrs.remove("class").unwrap_or_default();
            for sub in &mut widget.subwidgets {
                if !outer_class.is_empty() {
                    let existing = sub.attrs.get_str("class").unwrap_or_default();
                    sub.attrs.insert(
                        "class",
                        merge_css_classes([existing.as_str(), outer_class.as_str()]),
                    );
                }
                self.add_class_attrs(sub);
                self.add_placeholder_attrs(sub);
            }
        } else {
            self.add_class_attrs(&mut widget);
            self.add_placeholder_attrs(&mut widget);
        }
        widget
    }

    fn widget_html(&self, widget: &Widget) -> String {
        let style = ChoiceStyle::FormCheck {
            inline: self.base.checkbox_layout == "inline",
        };
        let html = self.field.render_widget(widget, None, style);
        if widget.kind == WidgetKind::SelectDateWidget {
            wrap_date_selects(&html)
        } else {
            html
        }
    }

    fn is_input_group(&self, widget: &Widget) -> bool {
        let kind = widget.kind;
        (!self.addon_before.is_empty() || !self.addon_after.is_empty())
            && (kind.is_text_input()
                || kind.is_select()
                || matches!(
                    kind,
                    WidgetKind::PasswordInput | WidgetKind::NumberInput | WidgetKind::EmailInput
                ))
    }

    fn can_float(&self, widget: &Widget) -> bool {
        self.base.is_floating()
            && (is_form_control(widget)
                || matches!(widget.kind, WidgetKind::Select | WidgetKind::NullBooleanSelect))
            && !self.is_input_group(widget)
    }

    fn input_group_html(&self, field_html: &str, errors: &str) -> String {
        let addon = |class: &str, content: &str| {
            if content.is_empty() {
                String::new()
            } else {
                format!("<span class=\"{class}\">{content}</span>")
            }
        };
        let validation = if self.base.server_side_validation && self.has_errors() {
            "has-validation"
        } else {
            ""
        };
        div(
            &merge_css_classes(["input-group", validation]),
            &format!(
                "{}{field_html}{}{errors}",
                addon(&self.addon_before_class, &self.addon_before),
                addon(&self.addon_after_class, &self.addon_after),
            ),
        )
    }

    fn errors_html(&self, widget: &Widget) -> String {
        let always_visible = widget.kind.is_choice_set() || widget.kind.is_multi_widget();
        field_errors_html(
            &self.field.errors,
            self.base.server_side_validation,
            always_visible,
        )
    }

    fn help_html(&self) -> String {
        if self.base.show_help {
            help_text_html(&self.field.help_text)
        } else {
            String::new()
        }
    }

    fn label_class(&self, is_checkbox: bool) -> String {
        if self.base.show_label == ShowLabel::Hidden {
            return "visually-hidden".to_string();
        }
        let layout_class = if is_checkbox {
            "form-check-label".to_string()
        } else if self.base.is_inline() {
            "visually-hidden".to_string()
        } else if self.base.is_horizontal() {
            merge_css_classes(["col-form-label", self.base.horizontal_label_class.as_str()])
        } else {
            "form-label".to_string()
        };
        merge_css_classes([layout_class.as_str(), self.base.label_class.as_str()])
    }

    fn label_html(&self, is_checkbox: bool) -> String {
        if self.base.show_label == ShowLabel::Skip {
            return String::new();
        }
        let class = self.label_class(is_checkbox);
        let label_for = self.field.id_for_label();
        render_label(
            &escape(&self.label),
            label_for.as_deref(),
            Some(class.as_str()),
            None,
        )
    }

    fn field_class(&self) -> &str {
        if self.base.field_class.is_empty() && self.base.is_horizontal() {
            &self.base.horizontal_field_class
        } else {
            &self.base.field_class
        }
    }

    fn wrap_field(&self, content: String) -> String {
        match self.field_class() {
            "" => content,
            class => div(class, &content),
        }
    }

    fn form_check_classes(&self) -> String {
        merge_css_classes([
            self.form_check_class.as_str(),
            if self.base.checkbox_style == "switch" {
                "form-switch"
            } else {
                ""
            },
            if self.base.checkbox_layout == "inline" {
                "form-check-inline"
            } else {
                ""
            },
        ])
    }

    fn wrapper_classes(&self, floating: bool) -> String {
        let mut classes: Vec<&str> = if self.base.is_inline() {
            vec!["col-12", self.base.inline_wrapper_class.as_str()]
        } else if self.base.is_horizontal() {
            vec![self.base.wrapper_class.as_str(), "row"]
        } else {
            vec![self.base.wrapper_class.as_str()]
        };
        if floating {
            classes.push("form-floating");
        }
        classes.push(self.state_class());
        if self.field.required {
            classes.push(self.required_css_class.as_str());
        }
        merge_css_classes(classes)
    }

    /// Renders the field.
    pub fn render(&self) -> String {
        let _span = render_span("field", &self.field.html_name).entered();
        if self.base.is_excluded(&self.field.name) {
            tracing::debug!(field = %self.field.name, "field excluded from rendering");
            return String::new();
        }
        if self.field.is_hidden() {
            return self.field.as_widget(None, ChoiceStyle::Default);
        }

        let widget = self.prepared_widget();
        let field_html = self.widget_html(&widget);
        let is_checkbox = widget.kind == WidgetKind::CheckboxInput;
        let floating = self.can_float(&widget);
        let errors = self.errors_html(&widget);
        let help = self.help_html();
        let label = self.label_html(is_checkbox);

        let (label, content) = if is_checkbox {
            let check = div(
                &self.form_check_classes(),
                &format!("{field_html}{label}{errors}{help}"),
            );
            let content = if self.base.is_horizontal() {
                div(
                    &merge_css_classes([
                        self.field_class(),
                        self.base.horizontal_field_offset_class.as_str(),
                    ]),
                    &check,
                )
            } else {
                self.wrap_field(check)
            };
            (String::new(), content)
        } else {
            let (field_html, errors) = if self.is_input_group(&widget) {
                (self.input_group_html(&field_html, &errors), String::new())
            } else {
                (field_html, errors)
            };
            if floating {
                (String::new(), format!("{field_html}{label}{errors}{help}"))
            } else {
                (label, self.wrap_field(format!("{field_html}{errors}{help}")))
            }
        };

        div(&self.wrapper_classes(floating), &format!("{label}{content}"))
    }
}
