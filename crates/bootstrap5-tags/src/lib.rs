//! # bootstrap5-tags
//!
//! Tera integration for django-rs-bootstrap5. [`register`] adds the
//! `bootstrap_*` functions, the `bootstrap_setting` filter and the base page
//! template `django_bootstrap5/bootstrap5.html` to a [`tera::Tera`] instance.
//!
//! ## Example
//!
//! ```
//! use bootstrap5_core::settings::Bootstrap5Settings;
//! use bootstrap5_render::Bootstrap5;
//! use bootstrap5_tags::bootstrap5_tera;
//!
//! let mut tera = bootstrap5_tera(&Bootstrap5::new(Bootstrap5Settings::default())).unwrap();
//! tera.add_raw_template(
//!     "alert.html",
//!     r#"{{ bootstrap_alert(content="Saved", alert_type="success", dismissible=false) }}"#,
//! )
//! .unwrap();
//! let html = tera.render("alert.html", &tera::Context::new()).unwrap();
//! assert_eq!(html, r#"<div class="alert alert-success" role="alert">Saved</div>"#);
//! ```
//!
//! Host objects are passed as context values and handed to the functions by
//! name: `{{ bootstrap_form(form=form, layout="horizontal") }}`.

pub mod args;
pub mod functions;

use bootstrap5_core::error::{BootstrapError, BootstrapResult};
use bootstrap5_render::Bootstrap5;
use tera::Tera;

use crate::functions::{HtmlFunction, SettingFilter, SettingFunction, HTML_FUNCTIONS};

/// Name of the base page template.
pub const BASE_TEMPLATE: &str = "django_bootstrap5/bootstrap5.html";

const BASE_TEMPLATE_SOURCE: &str = include_str!("../templates/django_bootstrap5/bootstrap5.html");

/// Registers the functions, the filter and the base template on `tera`.
pub fn register(tera: &mut Tera, context: &Bootstrap5) -> BootstrapResult<()> {
    for &(name, render) in HTML_FUNCTIONS {
        tera.register_function(name, HtmlFunction::new(name, context.clone(), render));
    }
    tera.register_function("bootstrap_setting", SettingFunction::new(context.clone()));
    tera.register_filter("bootstrap_setting", SettingFilter::new(context.clone()));
    tera.add_raw_template(BASE_TEMPLATE, BASE_TEMPLATE_SOURCE)
        .map_err(|err| BootstrapError::TemplateError(err.to_string()))?;
    tracing::debug!(
        functions = HTML_FUNCTIONS.len() + 1,
        template = BASE_TEMPLATE,
        "registered bootstrap5 template library"
    );
    Ok(())
}

/// A fresh [`Tera`] with the library registered.
pub fn bootstrap5_tera(context: &Bootstrap5) -> BootstrapResult<Tera> {
    let mut tera = Tera::default();
    register(&mut tera, context)?;
    Ok(tera)
}
