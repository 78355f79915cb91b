//! The formset renderer.

use bootstrap5_core::error::BootstrapResult;
use bootstrap5_core::logging::render_span;
use bootstrap5_forms::formset::FormSet;

use crate::base::BaseRenderer;
use crate::options::RenderOptions;
use crate::registry::Bootstrap5;
use crate::snippets::errors_block_html;

/// Renders a formset: non-form errors, the management form, then each form.
#[derive(Debug)]
pub struct FormsetRenderer<'a> {
    formset: &'a FormSet,
    options: &'a RenderOptions,
    context: &'a Bootstrap5,
}

impl<'a> FormsetRenderer<'a> {
    pub fn new(
        formset: &'a FormSet,
        options: &'a RenderOptions,
        context: &'a Bootstrap5,
    ) -> BootstrapResult<Self> {
        BaseRenderer::new(options, context.settings())?;
        Ok(Self {
            formset,
            options,
            context,
        })
    }

    pub fn render_errors(&self) -> String {
        errors_block_html(&self.formset.non_form_errors)
    }

    pub fn render_management_form(&self) -> String {
        self.formset.management_form_html()
    }

    pub fn render_forms(&self) -> BootstrapResult<String> {
        let rendered = self
            .formset
            .forms
            .iter()
            .map(|form| self.context.render_form(form, self.options))
            .collect::<BootstrapResult<Vec<_>>>()?;
        Ok(rendered.join("\n"))
    }

    pub fn render(&self) -> BootstrapResult<String> {
        let _span = render_span("formset", &self.formset.prefix).entered();
        Ok(format!(
            "{}{}{}",
            self.render_errors(),
            self.render_management_form(),
            self.render_forms()?
        ))
    }
}

#[cfg(test)]
mod tests {
    use bootstrap5_core::settings::Bootstrap5Settings;
    use bootstrap5_forms::form::{Field, Form};
    use bootstrap5_forms::widgets::{Widget, WidgetKind};

    use super::*;

    #[test]
    fn test_render_formset() {
        let context = Bootstrap5::new(Bootstrap5Settings::default());
        let form = Form::new().with_field(Field::new("id", Widget::new(WidgetKind::HiddenInput)));
        let formset = FormSet::new(vec![form.clone(), form])
            .with_max_num(2)
            .with_non_form_error("Too many forms.");
        let options = RenderOptions::new();
        let html = FormsetRenderer::new(&formset, &options, &context)
            .unwrap()
            .render()
            .unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<div class="text-danger"><div>Too many forms.</div></div>"#,
                r#"<input id="id_form-TOTAL_FORMS" name="form-TOTAL_FORMS" type="hidden" value="2">"#,
                r#"<input id="id_form-INITIAL_FORMS" name="form-INITIAL_FORMS" type="hidden" value="0">"#,
                r#"<input id="id_form-MIN_NUM_FORMS" name="form-MIN_NUM_FORMS" type="hidden" value="0">"#,
                r#"<input id="id_form-MAX_NUM_FORMS" name="form-MAX_NUM_FORMS" type="hidden" value="2">"#,
                r#"<input id="id_form-0-id" name="form-0-id" type="hidden">"#,
                "\n",
                r#"<input id="id_form-1-id" name="form-1-id" type="hidden">"#
            )
        );
    }

    #[test]
    fn test_no_errors_renders_nothing() {
        let context = Bootstrap5::new(Bootstrap5Settings::default());
        let formset = FormSet::new(Vec::new());
        let options = RenderOptions::new();
        let renderer = FormsetRenderer::new(&formset, &options, &context).unwrap();
        assert_eq!(renderer.render_errors(), "");
    }
}
