//! The form renderer.

use bootstrap5_core::error::BootstrapResult;
use bootstrap5_core::logging::render_span;
use bootstrap5_forms::form::Form;

use crate::base::BaseRenderer;
use crate::options::{AlertErrorType, RenderOptions};
use crate::registry::Bootstrap5;
use crate::snippets::errors_block_html;

/// Renders a whole form: its error summary followed by every field.
#[derive(Debug)]
pub struct FormRenderer<'a> {
    form: &'a Form,
    options: &'a RenderOptions,
    context: &'a Bootstrap5,
    alert_error_type: AlertErrorType,
}

impl<'a> FormRenderer<'a> {
    /// Validates `options` and prepares to render `form`.
    pub fn new(
        form: &'a Form,
        options: &'a RenderOptions,
        context: &'a Bootstrap5,
    ) -> BootstrapResult<Self> {
        BaseRenderer::new(options, context.settings())?;
        let alert_error_type =
            AlertErrorType::parse(options.alert_error_type.as_deref().unwrap_or_default())?;
        Ok(Self {
            form,
            options,
            context,
            alert_error_type,
        })
    }

    /// Errors of the visible fields, in field order.
    pub fn fields_errors(&self) -> Vec<String> {
        self.form
            .visible_fields()
            .into_iter()
            .flat_map(|field| field.errors)
            .collect()
    }

    /// The error summary for `error_type`.
    pub fn render_errors(&self, error_type: AlertErrorType) -> String {
        let errors = match error_type {
            AlertErrorType::All => {
                let mut errors = self.fields_errors();
                errors.extend_from_slice(self.form.non_field_errors());
                errors
            }
            AlertErrorType::Fields => self.fields_errors(),
            AlertErrorType::NonFields => self.form.non_field_errors().to_vec(),
            AlertErrorType::None => Vec::new(),
        };
        errors_block_html(&errors)
    }

    /// Every field through the field renderer, one per line.
    pub fn render_fields(&self) -> BootstrapResult<String> {
        let mut rendered = Vec::new();
        for field in self.form.bound_fields() {
            let html = self.context.render_field(&field, self.options)?;
            if !html.is_empty() {
                rendered.push(html);
            }
        }
        Ok(rendered.join("\n"))
    }

    pub fn render(&self) -> BootstrapResult<String> {
        let _span = render_span("form", self.form.prefix.as_deref().unwrap_or_default()).entered();
        Ok(format!(
            "{}{}",
            self.render_errors(self.alert_error_type),
            self.render_fields()?
        ))
    }
}
