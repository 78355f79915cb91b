//! Demo pages: sample host objects and the templates that render them.

use clap::ValueEnum;
use django_rs_bootstrap5::prelude::*;
use tera::{Context, Tera};

/// A page the showcase can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoPage {
    /// A contact form with one field of every common widget.
    Form,
    /// A formset of article forms.
    Formset,
    /// Alerts, buttons and labels.
    Components,
    /// Pagination controls.
    Pagination,
    /// Flash messages.
    Messages,
}

impl DemoPage {
    pub const fn template_name(self) -> &'static str {
        match self {
            Self::Form => "showcase/form.html",
            Self::Formset => "showcase/formset.html",
            Self::Components => "showcase/components.html",
            Self::Pagination => "showcase/pagination.html",
            Self::Messages => "showcase/messages.html",
        }
    }

    const fn source(self) -> &'static str {
        match self {
            Self::Form => FORM_TEMPLATE,
            Self::Formset => FORMSET_TEMPLATE,
            Self::Components => COMPONENTS_TEMPLATE,
            Self::Pagination => PAGINATION_TEMPLATE,
            Self::Messages => MESSAGES_TEMPLATE,
        }
    }
}

const FORM_TEMPLATE: &str = r#"{% extends "django_bootstrap5/bootstrap5.html" %}
{% block bootstrap5_title %}Contact{% endblock bootstrap5_title %}
{% block bootstrap5_content %}
<div class="container">
  <h1>Contact</h1>
  <form method="post" class="{% if layout == "inline" %}row row-cols-lg-auto g-3 align-items-center{% endif %}">
    {{ bootstrap_form(form=form, layout=layout, alert_error_type="all") }}
    {{ bootstrap_button(content="Send", button_type="submit") }}
  </form>
</div>
{% endblock bootstrap5_content %}
"#;

const FORMSET_TEMPLATE: &str = r#"{% extends "django_bootstrap5/bootstrap5.html" %}
{% block bootstrap5_title %}Articles{% endblock bootstrap5_title %}
{% block bootstrap5_content %}
<div class="container">
  <form method="post">
    {{ bootstrap_formset(formset=formset, layout=layout) }}
    {{ bootstrap_button(content="Save", button_type="submit") }}
  </form>
</div>
{% endblock bootstrap5_content %}
"#;

const COMPONENTS_TEMPLATE: &str = r#"{% extends "django_bootstrap5/bootstrap5.html" %}
{% block bootstrap5_title %}Components{% endblock bootstrap5_title %}
{% block bootstrap5_content %}
<div class="container">
  {{ bootstrap_alert(content="Something went <strong>well</strong>.", alert_type="success", safe=true) }}
  {{ bootstrap_alert(content="Heads up.", alert_type="warning", dismissible=false) }}
  {{ bootstrap_label(content="A label", label_for="id_demo", label_class="form-label") }}
  {{ bootstrap_button(content="Primary", button_type="button") }}
  {{ bootstrap_button(content="Outline", button_type="button", button_class="btn-secondary", button_outline=true, size="sm") }}
  {{ bootstrap_button(content="Link", href="/docs/") }}
</div>
{% endblock bootstrap5_content %}
"#;

const PAGINATION_TEMPLATE: &str = r#"{% extends "django_bootstrap5/bootstrap5.html" %}
{% block bootstrap5_title %}Pagination{% endblock bootstrap5_title %}
{% block bootstrap5_content %}
<div class="container">
  <ul>{% for item in page.object_list %}<li>{{ item }}</li>{% endfor %}</ul>
  {{ bootstrap_pagination(page=page, url="/articles/?tag=rust", pages_to_show=5, justify_content="center") }}
</div>
{% endblock bootstrap5_content %}
"#;

const MESSAGES_TEMPLATE: &str = r#"{% extends "django_bootstrap5/bootstrap5.html" %}
{% block bootstrap5_title %}Messages{% endblock bootstrap5_title %}
{% block bootstrap5_before_content %}{{ bootstrap_messages(messages=messages) }}{% endblock bootstrap5_before_content %}
{% block bootstrap5_content %}<div class="container"><p>See the messages above.</p></div>{% endblock bootstrap5_content %}
"#;

/// Adds every demo template to `tera`.
pub fn add_templates(tera: &mut Tera) -> BootstrapResult<()> {
    let pages = [
        DemoPage::Form,
        DemoPage::Formset,
        DemoPage::Components,
        DemoPage::Pagination,
        DemoPage::Messages,
    ];
    tera.add_raw_templates(pages.iter().map(|page| (page.template_name(), page.source())))
        .map_err(|err| BootstrapError::TemplateError(err.to_string()))
}

pub fn contact_form() -> Form {
    Form::new()
        .with_field(
            Field::new("subject", Widget::new(WidgetKind::TextInput))
                .help_text("A short summary of your question"),
        )
        .with_field(Field::new("sender", Widget::new(WidgetKind::EmailInput)))
        .with_field(Field::new("message", Widget::new(WidgetKind::Textarea)).required(false))
        .with_field(
            Field::new(
                "topic",
                Widget::new(WidgetKind::Select).with_choices([
                    ("", "---------"),
                    ("sales", "Sales"),
                    ("support", "Support"),
                ]),
            ),
        )
        .with_field(
            Field::new(
                "contact_by",
                Widget::new(WidgetKind::RadioSelect)
                    .with_choices([("email", "Email"), ("phone", "Phone")]),
            )
            .label("Contact me by"),
        )
        .with_field(
            Field::new("cc_myself", Widget::new(WidgetKind::CheckboxInput)).required(false),
        )
}

/// The contact form as it comes back from a failed submission.
pub fn submitted_contact_form() -> Form {
    contact_form()
        .bind([("subject", "Hello"), ("sender", "not an address")])
        .with_error("sender", "Enter a valid email address.")
        .with_error("topic", "This field is required.")
        .with_error("contact_by", "This field is required.")
        .with_non_field_error("Please correct the errors below.")
}

pub fn article_formset() -> FormSet {
    let article = || {
        Form::new()
            .with_field(Field::new("title", Widget::new(WidgetKind::TextInput)))
            .with_field(Field::new("pub_date", Widget::new(WidgetKind::DateInput)).label("Published"))
    };
    FormSet::new(vec![article(), article().empty_permitted(true)])
        .with_prefix("articles")
        .with_initial_forms(1)
}

pub fn sample_messages() -> Vec<Message> {
    vec![
        Message::new(MessageLevel::Success, "Your profile was saved."),
        Message::new(MessageLevel::Warning, "Your password expires in 3 days."),
        Message::new(MessageLevel::Error, "The upload failed.").with_extra_tags("fw-bold"),
    ]
}

/// The context for `page`.
pub fn context(page: DemoPage, layout: &str, submitted: bool) -> BootstrapResult<Context> {
    let mut context = Context::new();
    context.insert("layout", layout);
    match page {
        DemoPage::Form => {
            let form = if submitted {
                submitted_contact_form()
            } else {
                contact_form()
            };
            context.insert("form", &form);
        }
        DemoPage::Formset => context.insert("formset", &article_formset()),
        DemoPage::Components => {}
        DemoPage::Pagination => {
            let titles: Vec<String> = (1..=120).map(|n| format!("Article {n}")).collect();
            let page = Paginator::new(titles, 10).page(6)?;
            context.insert("page", &page);
        }
        DemoPage::Messages => context.insert("messages", &sample_messages()),
    }
    Ok(context)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tera() -> Tera {
        let mut tera = bootstrap5_tera(&Bootstrap5::new(Bootstrap5Settings::default())).unwrap();
        add_templates(&mut tera).unwrap();
        tera
    }

    fn render(page: DemoPage, layout: &str, submitted: bool) -> String {
        tera()
            .render(page.template_name(), &context(page, layout, submitted).unwrap())
            .unwrap()
    }

    #[test]
    fn test_every_page_renders() {
        for page in DemoPage::value_variants() {
            let html = render(*page, "default", false);
            assert!(html.contains("bootstrap.min.css"), "{page:?}");
            assert!(html.trim_end().ends_with("</html>"), "{page:?}");
        }
    }

    #[test]
    fn test_submitted_form_shows_errors() {
        let html = render(DemoPage::Form, "horizontal", true);
        assert!(html.contains(r#"<div class="text-danger"><div>Enter a valid email address.</div>"#));
        assert!(html.contains(r#"<div class="mb-3 row">"#));
        assert!(html.contains("is-invalid"));
    }

    #[test]
    fn test_inline_form_wrapper() {
        let html = render(DemoPage::Form, "inline", false);
        assert!(html.contains(r#"<form method="post" class="row row-cols-lg-auto g-3 align-items-center">"#));
        assert!(html.contains(r#"<div class="col-12">"#));
    }

    #[test]
    fn test_pagination_page() {
        let html = render(DemoPage::Pagination, "default", false);
        assert!(html.contains("<li>Article 51</li>"));
        assert!(html.contains(r##"<li class="page-item active"><a class="page-link" href="#">6</a></li>"##));
        assert!(html.contains("justify-content-center"));
    }

    #[test]
    fn test_messages_before_content() {
        let html = render(DemoPage::Messages, "default", false);
        let alert = html.find("alert-success").unwrap();
        assert!(alert < html.find("See the messages above.").unwrap());
        assert!(html.contains("alert-danger alert-dismissible fade show fw-bold"));
    }

    #[test]
    fn test_unknown_layout_fails() {
        let result = tera().render(
            DemoPage::Form.template_name(),
            &context(DemoPage::Form, "sideways", false).unwrap(),
        );
        assert!(result.is_err());
    }
}
