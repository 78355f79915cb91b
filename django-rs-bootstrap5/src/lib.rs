//! # django-rs-bootstrap5
//!
//! Bootstrap 5 rendering for django-rs forms, formsets, pagination and
//! flash messages.
//!
//! This is the meta-crate that re-exports the sub-crates. Depend on it to
//! get everything, or on the individual crates for finer-grained control.
//!
//! ```
//! use django_rs_bootstrap5::prelude::*;
//!
//! let form = Form::new().with_field(Field::new("email", Widget::new(WidgetKind::EmailInput)));
//! let bootstrap = Bootstrap5::new(Bootstrap5Settings::default());
//! let html = bootstrap
//!     .render_form(&form, &RenderOptions::new().layout("floating"))
//!     .unwrap();
//! assert!(html.starts_with(r#"<div class="mb-3 form-floating">"#));
//! ```

use std::path::Path;

/// Errors, settings, HTML helpers and logging.
pub use bootstrap5_core as core;

/// Widgets, bound fields, forms, formsets, messages and pages.
pub use bootstrap5_forms as forms;

/// Field, form and formset renderers plus components.
pub use bootstrap5_render as render;

/// Tera functions, filter and base template.
#[cfg(feature = "tera")]
pub use bootstrap5_tags as tags;

// Third-party crates whose types appear in the public API.
pub use serde;
pub use serde_json;
#[cfg(feature = "tera")]
pub use tera;

use bootstrap5_core::error::BootstrapResult;
use bootstrap5_core::settings::BOOTSTRAP5;
use bootstrap5_core::settings_loader;
use bootstrap5_render::Bootstrap5;

/// The names most callers need.
pub mod prelude {
    pub use bootstrap5_core::error::{BootstrapError, BootstrapResult};
    pub use bootstrap5_core::settings::{Bootstrap5Settings, UrlSetting};
    pub use bootstrap5_forms::{
        BoundField, Choice, ChoiceEntry, Field, FieldValue, Form, FormSet, Message, MessageLevel,
        Page, Paginator, Widget, WidgetKind,
    };
    pub use bootstrap5_render::{
        render_alert, render_button, render_label, AlertErrorType, Bootstrap5, ButtonOptions,
        Layout, PaginationOptions, RenderOptions, ShowLabel,
    };
    #[cfg(feature = "tera")]
    pub use bootstrap5_tags::{bootstrap5_tera, register};
}

/// Loads settings from `path` (TOML or JSON) or from the environment alone,
/// installs them as the global settings and returns the global context.
pub fn setup(path: Option<&Path>) -> BootstrapResult<&'static Bootstrap5> {
    let settings = match path {
        Some(path) => settings_loader::from_file_with_env(path)?,
        None => settings_loader::from_env(),
    };
    BOOTSTRAP5.configure(settings)?;
    tracing::info!(
        source = path.map_or_else(|| "environment".into(), |p| p.display().to_string()),
        "bootstrap5 settings configured"
    );
    Ok(Bootstrap5::global())
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use super::*;

    #[test]
    fn test_setup_from_environment() {
        let context = setup(None).unwrap();
        assert!(BOOTSTRAP5.is_configured());
        assert_eq!(context.settings().wrapper_class, "mb-3");
        let err = BOOTSTRAP5.configure(Bootstrap5Settings::default()).unwrap_err();
        assert!(matches!(err, BootstrapError::ConfigurationError(_)));
    }

    #[cfg(feature = "tera")]
    #[test]
    fn test_prelude_tera() {
        let tera = bootstrap5_tera(&Bootstrap5::new(Bootstrap5Settings::default())).unwrap();
        assert!(tera
            .get_template_names()
            .any(|name| name == tags::BASE_TEMPLATE));
    }
}
