//! Integration tests for the Tera template library.
//!
//! Templates are rendered end to end: host objects go into a `tera::Context`,
//! the `bootstrap_*` functions read them back and the output is compared as
//! HTML.

use std::error::Error as _;

use bootstrap5_core::settings::Bootstrap5Settings;
use bootstrap5_forms::{Field, Form, FormSet, Message, MessageLevel, Page, Widget, WidgetKind};
use bootstrap5_render::Bootstrap5;
use bootstrap5_tags::{bootstrap5_tera, BASE_TEMPLATE};
use tera::Context;

// ============================================================================
// Shared helpers
// ============================================================================

fn render_with(settings: Bootstrap5Settings, source: &str, context: &Context) -> tera::Result<String> {
    let mut tera = bootstrap5_tera(&Bootstrap5::new(settings)).unwrap();
    tera.add_raw_template("page.html", source)?;
    tera.render("page.html", context)
}

fn render(source: &str, context: &Context) -> String {
    render_with(Bootstrap5Settings::default(), source, context).unwrap()
}

/// The error message together with every source in its chain.
fn error_chain(err: &tera::Error) -> String {
    let mut messages = vec![err.to_string()];
    let mut source = err.source();
    while let Some(inner) = source {
        messages.push(inner.to_string());
        source = inner.source();
    }
    messages.join("\n")
}

fn login_form() -> Form {
    Form::new()
        .with_field(Field::new("username", Widget::new(WidgetKind::TextInput)))
        .with_field(Field::new("password", Widget::new(WidgetKind::PasswordInput)))
}

// ============================================================================
// Base template
// ============================================================================

#[test]
fn test_base_template_blocks() {
    let source = format!(
        concat!(
            r#"{{% extends "{}" %}}"#,
            "{{% block bootstrap5_title %}}test_bootstrap5_title{{% endblock bootstrap5_title %}}",
            "{{% block bootstrap5_content %}}test_bootstrap5_content{{% endblock bootstrap5_content %}}"
        ),
        BASE_TEMPLATE
    );
    let html = render(&source, &Context::new());
    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
    assert!(html.contains("<title>test_bootstrap5_title</title>"));
    assert!(html.contains("test_bootstrap5_content"));
    assert!(html.contains("bootstrap.min.css"));
    let script = html.find("<script ").unwrap();
    assert!(script > html.find("<body>").unwrap());
}

#[test]
fn test_base_template_javascript_in_head() {
    let settings = Bootstrap5Settings {
        javascript_in_head: true,
        ..Bootstrap5Settings::default()
    };
    let source = format!(r#"{{% extends "{BASE_TEMPLATE}" %}}"#);
    let html = render_with(settings, &source, &Context::new()).unwrap();
    assert!(html.find("<script ").unwrap() < html.find("</head>").unwrap());
    assert_eq!(html.matches("<script ").count(), 1);
}

#[test]
fn test_base_template_language() {
    let mut context = Context::new();
    context.insert("LANGUAGE_CODE", "nl");
    let html = render(&format!(r#"{{% extends "{BASE_TEMPLATE}" %}}"#), &context);
    assert!(html.contains(r#"<html lang="nl">"#));
}

// ============================================================================
// Forms and fields
// ============================================================================

#[test]
fn test_bootstrap_form_from_context() {
    let mut context = Context::new();
    context.insert("form", &login_form());
    let html = render(r#"{{ bootstrap_form(form=form, show_label=false) }}"#, &context);
    assert_eq!(
        html,
        [
            concat!(
                r#"<div class="mb-3"><label class="visually-hidden" for="id_username">Username</label>"#,
                r#"<input class="form-control" id="id_username" name="username" placeholder="Username" required type="text"></div>"#
            ),
            concat!(
                r#"<div class="mb-3"><label class="visually-hidden" for="id_password">Password</label>"#,
                r#"<input class="form-control" id="id_password" name="password" placeholder="Password" required type="password"></div>"#
            ),
        ]
        .join("\n")
    );
}

#[test]
fn test_bootstrap_field_by_name_and_object() {
    let form = login_form();
    let mut context = Context::new();
    context.insert("form", &form);
    context.insert("field", &form.field("username").unwrap());
    let by_name = render(r#"{{ bootstrap_field(form=form, name="username") }}"#, &context);
    let by_object = render(r"{{ bootstrap_field(field=field) }}", &context);
    assert_eq!(by_name, by_object);
    assert!(by_name.starts_with(r#"<div class="mb-3"><label class="form-label" for="id_username">"#));
}

#[test]
fn test_bootstrap_form_errors_types() {
    let form = login_form()
        .bind([("username", "ann")])
        .with_error("password", "This field is required.")
        .with_non_field_error("Invalid login.");
    let mut context = Context::new();
    context.insert("form", &form);
    assert_eq!(
        render(r#"{{ bootstrap_form_errors(form=form, type="non_fields") }}"#, &context),
        r#"<div class="text-danger"><div>Invalid login.</div></div>"#
    );
    assert_eq!(
        render(r"{{ bootstrap_form_errors(form=form) }}", &context),
        r#"<div class="text-danger"><div>This field is required.</div><div>Invalid login.</div></div>"#
    );
}

#[test]
fn test_invalid_form_argument() {
    let mut context = Context::new();
    context.insert("form", "not a form");
    let err = render_with(
        Bootstrap5Settings::default(),
        r"{{ bootstrap_form(form=form) }}",
        &context,
    )
    .unwrap_err();
    assert!(error_chain(&err).contains("Parameter \"form\" should contain a valid Django Form."));
}

#[test]
fn test_invalid_layout_propagates() {
    let mut context = Context::new();
    context.insert("form", &login_form());
    let err = render_with(
        Bootstrap5Settings::default(),
        r#"{{ bootstrap_form(form=form, layout="sideways") }}"#,
        &context,
    )
    .unwrap_err();
    assert!(error_chain(&err).contains("Invalid value \"sideways\" for parameter \"layout\""));
}

#[test]
fn test_bootstrap_formset() {
    let item = Form::new().with_field(Field::new("title", Widget::new(WidgetKind::TextInput)));
    let mut context = Context::new();
    context.insert("formset", &FormSet::new(vec![item]));
    let html = render(r#"{{ bootstrap_formset(formset=formset, layout="floating") }}"#, &context);
    assert!(html.starts_with(r#"<input id="id_form-TOTAL_FORMS" name="form-TOTAL_FORMS" type="hidden" value="1">"#));
    assert!(html.contains(r#"<div class="mb-3 form-floating"><input class="form-control" id="id_form-0-title""#));
}

// ============================================================================
// Components, messages, pagination and settings
// ============================================================================

#[test]
fn test_alert_content_escaping() {
    let mut context = Context::new();
    context.insert("value", "foo<br>bar");
    assert_eq!(
        render(r"{{ bootstrap_alert(content=value, dismissible=false) }}", &context),
        r#"<div class="alert alert-info" role="alert">foo&lt;br&gt;bar</div>"#
    );
    assert_eq!(
        render(r"{{ bootstrap_alert(content=value, dismissible=false, safe=true) }}", &context),
        r#"<div class="alert alert-info" role="alert">foo<br>bar</div>"#
    );
}

#[test]
fn test_alert_invalid_type() {
    let err = render_with(
        Bootstrap5Settings::default(),
        r#"{{ bootstrap_alert(content="x", alert_type="nope") }}"#,
        &Context::new(),
    )
    .unwrap_err();
    assert!(error_chain(&err).contains("Value \"nope\" is not a valid alert type."));
}

#[test]
fn test_button_link() {
    assert_eq!(
        render(
            r#"{{ bootstrap_button(content="Docs", href="/docs?a=1&b=2", button_class="btn-secondary") }}"#,
            &Context::new()
        ),
        r#"<a class="btn btn-secondary" href="/docs?a=1&amp;b=2" role="button">Docs</a>"#
    );
}

#[test]
fn test_label() {
    assert_eq!(
        render(
            r#"{{ bootstrap_label(content="Email", label_for="id_email", label_class="form-label") }}"#,
            &Context::new()
        ),
        r#"<label class="form-label" for="id_email">Email</label>"#
    );
}

#[test]
fn test_messages() {
    let mut context = Context::new();
    context.insert(
        "messages",
        &vec![Message::new(MessageLevel::Info, "Welcome back")],
    );
    assert_eq!(
        render(r"{{ bootstrap_messages(messages=messages) }}", &context),
        concat!(
            r#"<div class="alert alert-info alert-dismissible fade show" role="alert">Welcome back"#,
            r#"<button aria-label="Close" class="btn-close" data-bs-dismiss="alert" type="button"></button></div>"#
        )
    );
}

#[test]
fn test_pagination() {
    let mut context = Context::new();
    context.insert("page", &Page::<u32>::new(2, 3));
    let html = render(
        r#"{{ bootstrap_pagination(page=page, url="/list", size="sm", justify_content="center") }}"#,
        &context,
    );
    assert_eq!(
        html,
        concat!(
            r#"<ul class="pagination pagination-sm justify-content-center">"#,
            r#"<li class="page-item"><a class="page-link" href="/list?page=1">&laquo;</a></li>"#,
            r#"<li class="page-item"><a class="page-link" href="/list?page=1">1</a></li>"#,
            r##"<li class="page-item active"><a class="page-link" href="#">2</a></li>"##,
            r#"<li class="page-item"><a class="page-link" href="/list?page=3">3</a></li>"#,
            r#"<li class="page-item"><a class="page-link" href="/list?page=3">&raquo;</a></li>"#,
            "</ul>"
        )
    );
}

#[test]
fn test_url_replace_param() {
    assert_eq!(
        render(
            r#"<a href="{{ bootstrap_url_replace_param(url="/x?q=rust", name="page", value=4) }}">"#,
            &Context::new()
        ),
        r#"<a href="/x?q=rust&amp;page=4">"#
    );
}

#[test]
fn test_setting_filter_and_function() {
    let html = render(
        r#"{% if "javascript_in_head" | bootstrap_setting %}head{% else %}body{% endif %}|{{ bootstrap_setting(name="wrapper_class") }}"#,
        &Context::new(),
    );
    assert_eq!(html, "body|mb-3");
}
