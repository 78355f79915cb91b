//! The Tera functions and the `bootstrap_setting` filter.
//!
//! Every HTML-producing function is a plain `fn(&Bootstrap5, &Args)` wrapped
//! in [`HtmlFunction`], which marks its output safe so Tera does not escape
//! it a second time.

use std::collections::HashMap;

use bootstrap5_core::error::{BootstrapError, BootstrapResult};
use bootstrap5_core::html::escape;
use bootstrap5_core::logging::render_span;
use bootstrap5_core::utils::url_replace_param;
use bootstrap5_forms::{BoundField, Form, FormSet, Message, Page};
use bootstrap5_render::{
    render_button, render_label, Bootstrap5, ButtonOptions, PaginationOptions, RenderOptions,
};
use serde_json::Value;

use crate::args::{self, Args};

/// Signature of the functions behind [`HtmlFunction`].
pub type RenderFn = fn(&Bootstrap5, &Args) -> BootstrapResult<String>;

/// The HTML functions, by template name.
pub const HTML_FUNCTIONS: &[(&str, RenderFn)] = &[
    ("bootstrap_css", bootstrap_css),
    ("bootstrap_javascript", bootstrap_javascript),
    ("bootstrap_alert", bootstrap_alert),
    ("bootstrap_button", bootstrap_button),
    ("bootstrap_label", bootstrap_label),
    ("bootstrap_field", bootstrap_field),
    ("bootstrap_form", bootstrap_form),
    ("bootstrap_form_errors", bootstrap_form_errors),
    ("bootstrap_formset", bootstrap_formset),
    ("bootstrap_formset_errors", bootstrap_formset_errors),
    ("bootstrap_messages", bootstrap_messages),
    ("bootstrap_pagination", bootstrap_pagination),
    ("bootstrap_url_replace_param", bootstrap_url_replace_param),
];

fn tera_error(name: &str, err: &BootstrapError) -> tera::Error {
    tracing::warn!(function = name, error = %err, "bootstrap5 template function failed");
    tera::Error::msg(err.to_string())
}

/// A Tera function returning HTML.
pub struct HtmlFunction {
    name: &'static str,
    context: Bootstrap5,
    render: RenderFn,
}

impl HtmlFunction {
    pub const fn new(name: &'static str, context: Bootstrap5, render: RenderFn) -> Self {
        Self {
            name,
            context,
            render,
        }
    }
}

impl tera::Function for HtmlFunction {
    fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let _span = render_span("function", self.name).entered();
        (self.render)(&self.context, args)
            .map(Value::String)
            .map_err(|err| tera_error(self.name, &err))
    }

    fn is_safe(&self) -> bool {
        true
    }
}

/// `bootstrap_setting(name="...")`: the raw setting value, or null.
pub struct SettingFunction {
    context: Bootstrap5,
}

impl SettingFunction {
    pub const fn new(context: Bootstrap5) -> Self {
        Self { context }
    }
}

impl tera::Function for SettingFunction {
    fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let name = args::required_string(args, "name")
            .map_err(|err| tera_error("bootstrap_setting", &err))?;
        Ok(self.context.setting(&name).unwrap_or(Value::Null))
    }
}

/// `{{ "name" | bootstrap_setting }}`.
pub struct SettingFilter {
    context: Bootstrap5,
}

impl SettingFilter {
    pub const fn new(context: Bootstrap5) -> Self {
        Self { context }
    }
}

impl tera::Filter for SettingFilter {
    fn filter(&self, value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
        let Some(name) = value.as_str() else {
            return Err(tera::Error::msg(
                "Filter `bootstrap_setting` expects a setting name",
            ));
        };
        Ok(self.context.setting(name).unwrap_or(Value::Null))
    }
}

/// The `content` argument, escaped unless `safe=true` was passed.
fn content(args: &Args) -> BootstrapResult<String> {
    let content = args::required_string(args, "content")?;
    Ok(if args::flag(args, "safe", false) {
        content
    } else {
        escape(&content)
    })
}

fn bootstrap_css(context: &Bootstrap5, _args: &Args) -> BootstrapResult<String> {
    Ok(context.css())
}

fn bootstrap_javascript(context: &Bootstrap5, _args: &Args) -> BootstrapResult<String> {
    Ok(context.javascript())
}

fn bootstrap_alert(context: &Bootstrap5, args: &Args) -> BootstrapResult<String> {
    let alert_type = args::string(args, "alert_type").unwrap_or_else(|| "info".to_string());
    context.render_alert(
        &content(args)?,
        &alert_type,
        args::flag(args, "dismissible", true),
        &args::string(args, "extra_classes").unwrap_or_default(),
    )
}

fn bootstrap_button(_context: &Bootstrap5, args: &Args) -> BootstrapResult<String> {
    let options: ButtonOptions = args::options(args, &["content", "safe"])?;
    render_button(&content(args)?, &options)
}

fn bootstrap_label(_context: &Bootstrap5, args: &Args) -> BootstrapResult<String> {
    Ok(render_label(
        &content(args)?,
        args::string(args, "label_for").as_deref(),
        args::string(args, "label_class").as_deref(),
        args::string(args, "label_title").as_deref(),
    ))
}

/// Accepts `field=<bound field>` or `form=<form>, name="<field name>"`.
fn bootstrap_field(context: &Bootstrap5, args: &Args) -> BootstrapResult<String> {
    let field: BoundField = if args.contains_key("field") {
        args::object(args, "field", "BoundField")?
    } else {
        let form: Form = args::object(args, "form", "Form")?;
        form.field(&args::required_string(args, "name")?)?
    };
    let options: RenderOptions = args::options(args, &["field", "form", "name"])?;
    context.render_field(&field, &options)
}

fn bootstrap_form(context: &Bootstrap5, args: &Args) -> BootstrapResult<String> {
    let form: Form = args::object(args, "form", "Form")?;
    let options: RenderOptions = args::options(args, &["form"])?;
    context.render_form(&form, &options)
}

fn bootstrap_form_errors(context: &Bootstrap5, args: &Args) -> BootstrapResult<String> {
    let form: Form = args::object(args, "form", "Form")?;
    let error_type = args::string(args, "type").unwrap_or_else(|| "all".to_string());
    let options: RenderOptions = args::options(args, &["form", "type"])?;
    context.render_form_errors(&form, &error_type, &options)
}

fn bootstrap_formset(context: &Bootstrap5, args: &Args) -> BootstrapResult<String> {
    let formset: FormSet = args::object(args, "formset", "Formset")?;
    let options: RenderOptions = args::options(args, &["formset"])?;
    context.render_formset(&formset, &options)
}

fn bootstrap_formset_errors(context: &Bootstrap5, args: &Args) -> BootstrapResult<String> {
    let formset: FormSet = args::object(args, "formset", "Formset")?;
    let options: RenderOptions = args::options(args, &["formset"])?;
    context.render_formset_errors(&formset, &options)
}

/// Renders `messages`; absent or null means no messages.
fn bootstrap_messages(context: &Bootstrap5, args: &Args) -> BootstrapResult<String> {
    let messages: Vec<Message> = match args.get("messages") {
        None | Some(Value::Null) => Vec::new(),
        Some(_) => args::object(args, "messages", "message list")?,
    };
    context.render_messages(&messages)
}

fn bootstrap_pagination(context: &Bootstrap5, args: &Args) -> BootstrapResult<String> {
    let page: Page<Value> = args::object(args, "page", "Page")?;
    let options: PaginationOptions = args::options(args, &["page"])?;
    context.render_pagination(&page, &options)
}

/// The URL with `name` replaced by `value`, or removed when `value` is
/// absent. Returned attribute-escaped.
fn bootstrap_url_replace_param(_context: &Bootstrap5, args: &Args) -> BootstrapResult<String> {
    let url = args::required_string(args, "url")?;
    let name = args::required_string(args, "name")?;
    let value = args::string(args, "value");
    Ok(escape(&url_replace_param(&url, &name, value.as_deref())))
}

#[cfg(test)]
mod tests {
    use bootstrap5_core::settings::Bootstrap5Settings;
    use serde_json::json;
    use tera::{Filter, Function};

    use super::*;

    fn context() -> Bootstrap5 {
        Bootstrap5::new(Bootstrap5Settings::default())
    }

    fn args(value: Value) -> Args {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_every_function_listed_once() {
        let mut names: Vec<&str> = HTML_FUNCTIONS.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), HTML_FUNCTIONS.len());
        assert!(names.iter().all(|name| name.starts_with("bootstrap_")));
    }

    #[test]
    fn test_alert_escapes_content() {
        let html = bootstrap_alert(
            &context(),
            &args(json!({"content": "foo<br>bar", "dismissible": false})),
        )
        .unwrap();
        assert_eq!(
            html,
            r#"<div class="alert alert-info" role="alert">foo&lt;br&gt;bar</div>"#
        );
    }

    #[test]
    fn test_alert_safe_content() {
        let html = bootstrap_alert(
            &context(),
            &args(json!({"content": "foo<br>bar", "dismissible": false, "safe": true})),
        )
        .unwrap();
        assert_eq!(html, r#"<div class="alert alert-info" role="alert">foo<br>bar</div>"#);
    }

    #[test]
    fn test_button_options() {
        let html = bootstrap_button(
            &context(),
            &args(json!({"content": "Go", "button_type": "submit", "size": "lg"})),
        )
        .unwrap();
        assert_eq!(
            html,
            r#"<button class="btn btn-primary btn-lg" type="submit">Go</button>"#
        );
    }

    #[test]
    fn test_field_from_form_and_name() {
        let form = Form::new().with_field(bootstrap5_forms::Field::new(
            "subject",
            bootstrap5_forms::Widget::new(bootstrap5_forms::WidgetKind::TextInput),
        ));
        let html = bootstrap_field(
            &context(),
            &args(json!({"form": form, "name": "subject", "show_label": "skip"})),
        )
        .unwrap();
        assert_eq!(
            html,
            r#"<div class="mb-3"><input class="form-control" id="id_subject" name="subject" placeholder="Subject" required type="text"></div>"#
        );
    }

    #[test]
    fn test_field_unknown_name() {
        let form = Form::new();
        let err = bootstrap_field(&context(), &args(json!({"form": form, "name": "nope"})))
            .unwrap_err();
        assert_eq!(err, BootstrapError::FieldNotFound("nope".to_string()));
    }

    #[test]
    fn test_formset_invalid_argument() {
        let err = bootstrap_formset(&context(), &args(json!({"formset": 42}))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Parameter \"formset\" should contain a valid Django Formset."
        );
    }

    #[test]
    fn test_messages_absent() {
        assert_eq!(bootstrap_messages(&context(), &Args::new()).unwrap(), "");
    }

    #[test]
    fn test_url_replace_param_escaped() {
        let html = bootstrap_url_replace_param(
            &context(),
            &args(json!({"url": "/list?a=1", "name": "page", "value": 2})),
        )
        .unwrap();
        assert_eq!(html, "/list?a=1&amp;page=2");
        let html = bootstrap_url_replace_param(
            &context(),
            &args(json!({"url": "/list?a=1&page=2", "name": "page"})),
        )
        .unwrap();
        assert_eq!(html, "/list?a=1");
    }

    #[test]
    fn test_html_function_is_safe() {
        let function = HtmlFunction::new("bootstrap_css", context(), bootstrap_css);
        assert!(function.is_safe());
        let value = function.call(&Args::new()).unwrap();
        assert!(value.as_str().unwrap().starts_with("<link "));
    }

    #[test]
    fn test_setting_function_and_filter() {
        let function = SettingFunction::new(context());
        assert!(!function.is_safe());
        assert_eq!(
            function.call(&args(json!({"name": "wrapper_class"}))).unwrap(),
            json!("mb-3")
        );
        assert_eq!(
            function.call(&args(json!({"name": "no_such_setting"}))).unwrap(),
            Value::Null
        );
        let filter = SettingFilter::new(context());
        assert_eq!(
            filter.filter(&json!("javascript_in_head"), &Args::new()).unwrap(),
            json!(false)
        );
        assert!(filter.filter(&json!(1), &Args::new()).is_err());
    }
}
