//! # bootstrap5-render
//!
//! Bootstrap 5 renderers for django-rs-bootstrap5.
//!
//! ## Modules
//!
//! - [`options`] - Render options and layouts
//! - [`base`] - Option resolution against the settings
//! - [`field`], [`form`], [`formset`] - The built-in renderers
//! - [`registry`] - Named renderers and the [`Bootstrap5`] rendering context
//! - [`components`] - Alerts, buttons and labels
//! - [`messages`] - Flash messages as alerts
//! - [`pagination`] - Pagination controls
//! - [`media`] - Stylesheet and script tags
//!
//! The free functions below render through [`Bootstrap5::global`], which
//! reads the global settings.

pub mod base;
pub mod components;
pub mod field;
pub mod form;
pub mod formset;
pub mod media;
pub mod messages;
pub mod options;
pub mod pagination;
pub mod registry;
mod snippets;

use bootstrap5_core::error::BootstrapResult;
use bootstrap5_forms::{BoundField, Form, FormSet};

pub use components::{render_alert, render_button, render_label, ButtonOptions};
pub use options::{AlertErrorType, Layout, RenderOptions, ShowLabel};
pub use pagination::{get_pagination_context, render_pagination, PaginationOptions};
pub use registry::{Bootstrap5, FieldRender, FormRender, FormsetRender, RendererRegistry};

/// Renders a bound field with the global settings.
pub fn render_field(field: &BoundField, options: &RenderOptions) -> BootstrapResult<String> {
    Bootstrap5::global().render_field(field, options)
}

/// Renders a form with the global settings.
pub fn render_form(form: &Form, options: &RenderOptions) -> BootstrapResult<String> {
    Bootstrap5::global().render_form(form, options)
}

/// Renders a form's errors with the global settings.
pub fn render_form_errors(
    form: &Form,
    error_type: &str,
    options: &RenderOptions,
) -> BootstrapResult<String> {
    Bootstrap5::global().render_form_errors(form, error_type, options)
}

/// Renders a formset with the global settings.
pub fn render_formset(formset: &FormSet, options: &RenderOptions) -> BootstrapResult<String> {
    Bootstrap5::global().render_formset(formset, options)
}

/// Renders a formset's non-form errors with the global settings.
pub fn render_formset_errors(formset: &FormSet, options: &RenderOptions) -> BootstrapResult<String> {
    Bootstrap5::global().render_formset_errors(formset, options)
}
