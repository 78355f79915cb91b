//! Integration tests for rendering whole forms, formsets and page furniture.
//!
//! Each test builds the host objects the way a view would and compares the
//! complete HTML output.

use bootstrap5_core::settings::Bootstrap5Settings;
use bootstrap5_forms::form::{Field, Form};
use bootstrap5_forms::formset::FormSet;
use bootstrap5_forms::messages::{Message, MessageLevel};
use bootstrap5_forms::paginator::Paginator;
use bootstrap5_forms::widgets::{Widget, WidgetKind};
use bootstrap5_render::{
    render_field, render_form, Bootstrap5, PaginationOptions, RenderOptions,
};

// ============================================================================
// Shared helpers
// ============================================================================

/// A contact form with a subject, sender, optional message and a checkbox.
fn contact_form() -> Form {
    Form::new()
        .with_field(Field::new("subject", Widget::new(WidgetKind::TextInput)))
        .with_field(Field::new("sender", Widget::new(WidgetKind::EmailInput)))
        .with_field(Field::new("message", Widget::new(WidgetKind::Textarea)).required(false))
        .with_field(
            Field::new("cc_myself", Widget::new(WidgetKind::CheckboxInput)).required(false),
        )
}

fn context() -> Bootstrap5 {
    Bootstrap5::new(Bootstrap5Settings::default())
}

// ============================================================================
// Forms
// ============================================================================

#[test]
fn test_contact_form_default_layout() {
    let html = context()
        .render_form(&contact_form(), &RenderOptions::new())
        .unwrap();
    let expected = [
        concat!(
            r#"<div class="mb-3"><label class="form-label" for="id_subject">Subject</label>"#,
            r#"<input class="form-control" id="id_subject" name="subject" placeholder="Subject" required type="text"></div>"#
        ),
        concat!(
            r#"<div class="mb-3"><label class="form-label" for="id_sender">Sender</label>"#,
            r#"<input class="form-control" id="id_sender" name="sender" placeholder="Sender" required type="email"></div>"#
        ),
        concat!(
            r#"<div class="mb-3"><label class="form-label" for="id_message">Message</label>"#,
            r#"<textarea class="form-control" cols="40" id="id_message" name="message" placeholder="Message" rows="10"></textarea></div>"#
        ),
        concat!(
            r#"<div class="mb-3"><div class="form-check">"#,
            r#"<input class="form-check-input" id="id_cc_myself" name="cc_myself" type="checkbox">"#,
            r#"<label class="form-check-label" for="id_cc_myself">Cc myself</label></div></div>"#
        ),
    ]
    .join("\n");
    assert_eq!(html, expected);
}

#[test]
fn test_bound_form_with_errors_horizontal() {
    let form = contact_form()
        .bind([("subject", "Hi"), ("sender", "not-an-email")])
        .with_error("sender", "Enter a valid email address.")
        .with_non_field_error("Please correct the errors below.");
    let options = RenderOptions::new()
        .layout("horizontal")
        .alert_error_type("all");
    let html = context().render_form(&form, &options).unwrap();

    assert!(html.starts_with(concat!(
        r#"<div class="text-danger"><div>Enter a valid email address.</div>"#,
        r#"<div>Please correct the errors below.</div></div>"#,
        r#"<div class="mb-3 row">"#
    )));
    assert!(html.contains(concat!(
        r#"<div class="mb-3 row"><label class="col-form-label col-sm-2" for="id_sender">Sender</label>"#,
        r#"<div class="col-sm-10"><input class="form-control is-invalid" id="id_sender" name="sender" "#,
        r#"placeholder="Sender" required type="email" value="not-an-email">"#,
        r#"<div class="invalid-feedback">Enter a valid email address.</div></div></div>"#
    )));
    assert!(html.contains(r#"value="Hi""#));
    assert!(html.contains(r#"<input class="form-control is-valid" id="id_subject""#));
    assert!(html.contains(r#"<div class="col-sm-10 offset-sm-2"><div class="form-check">"#));
}

#[test]
fn test_exclude_and_floating() {
    let options = RenderOptions::new()
        .layout("floating")
        .exclude("message,cc_myself");
    let html = context().render_form(&contact_form(), &options).unwrap();
    assert_eq!(html.lines().count(), 2);
    assert!(!html.contains("message"));
    assert!(html.contains(concat!(
        r#"<div class="mb-3 form-floating">"#,
        r#"<input class="form-control" id="id_sender" name="sender" placeholder="Sender" required type="email">"#,
        r#"<label class="form-label" for="id_sender">Sender</label></div>"#
    )));
}

#[test]
fn test_global_entry_points() {
    let form = contact_form();
    let field = form.field("subject").unwrap();
    assert_eq!(
        render_field(&field, &RenderOptions::new()).unwrap(),
        context().render_field(&field, &RenderOptions::new()).unwrap()
    );
    assert!(render_form(&form, &RenderOptions::new().layout("sideways")).is_err());
}

// ============================================================================
// Formsets
// ============================================================================

#[test]
fn test_formset_with_prefix() {
    let item = Form::new().with_field(Field::new("name", Widget::new(WidgetKind::TextInput)));
    let formset = FormSet::new(vec![item.clone(), item.empty_permitted(true)])
        .with_prefix("items")
        .with_initial_forms(1);
    let options = RenderOptions::new().required_css_class("required");
    let html = context().render_formset(&formset, &options).unwrap();

    assert!(html.starts_with(
        r#"<input id="id_items-TOTAL_FORMS" name="items-TOTAL_FORMS" type="hidden" value="2">"#
    ));
    assert!(html.contains(r#"<input id="id_items-INITIAL_FORMS" name="items-INITIAL_FORMS" type="hidden" value="1">"#));
    assert!(html.contains(concat!(
        r#"<div class="mb-3 required"><label class="form-label" for="id_items-0-name">Name</label>"#,
        r#"<input class="form-control" id="id_items-0-name" name="items-0-name" placeholder="Name" required type="text"></div>"#
    )));
    assert!(html.contains(r#"<div class="mb-3"><label class="form-label" for="id_items-1-name">Name</label>"#));
}

#[test]
fn test_formset_errors_only() {
    let formset = FormSet::new(Vec::new()).with_non_form_error("Please submit at least 1 form.");
    assert_eq!(
        context()
            .render_formset_errors(&formset, &RenderOptions::new())
            .unwrap(),
        r#"<div class="text-danger"><div>Please submit at least 1 form.</div></div>"#
    );
}

// ============================================================================
// Messages, pagination, media
// ============================================================================

#[test]
fn test_messages_through_context() {
    let settings = Bootstrap5Settings {
        alert_extra_classes: vec!["mt-3".to_string()],
        ..Bootstrap5Settings::default()
    };
    let html = Bootstrap5::new(settings)
        .render_messages(&[Message::new(MessageLevel::Warning, "Careful")])
        .unwrap();
    assert_eq!(
        html,
        concat!(
            r#"<div class="alert alert-warning alert-dismissible fade show mt-3" role="alert">Careful"#,
            r#"<button aria-label="Close" class="btn-close" data-bs-dismiss="alert" type="button"></button></div>"#
        )
    );
}

#[test]
fn test_pagination_from_paginator() {
    let paginator = Paginator::new((1..=95).collect::<Vec<_>>(), 10);
    let page = paginator.page(5).unwrap();
    let html = context()
        .render_pagination(&page, &PaginationOptions::new().pages_to_show(3).url("/articles?tag=rust"))
        .unwrap();
    assert!(html.starts_with(r#"<ul class="pagination">"#));
    assert!(html.contains(r#"<a class="page-link" href="/articles?tag=rust&amp;page=3">&hellip;</a>"#));
    assert!(html.contains(r##"<li class="page-item active"><a class="page-link" href="#">5</a></li>"##));
    assert!(html.contains(r#"<a class="page-link" href="/articles?tag=rust&amp;page=7">&hellip;</a>"#));
    assert!(html.contains(r#"<a class="page-link" href="/articles?tag=rust&amp;page=10">&raquo;</a>"#));
}

#[test]
fn test_media_tags() {
    let ctx = context();
    assert!(ctx.css().starts_with("<link "));
    assert!(ctx.javascript().starts_with("<script "));
    assert!(ctx.javascript().ends_with("></script>"));
    assert_eq!(ctx.setting("wrapper_class"), Some(serde_json::json!("mb-3")));
}
