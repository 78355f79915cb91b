//! Renderer registry and the rendering context.
//!
//! Settings name a renderer per layout (`field_renderers`,
//! `form_renderers`, `formset_renderers`). The names resolve through a
//! [`RendererRegistry`], which ships with the built-in renderers under
//! `"default"`. Custom renderers implement [`FieldRender`], [`FormRender`]
//! or [`FormsetRender`] and are registered under their own names.
//!
//! ## Examples
//!
//! ```
//! use bootstrap5_core::settings::Bootstrap5Settings;
//! use bootstrap5_forms::form::{Field, Form};
//! use bootstrap5_forms::widgets::{Widget, WidgetKind};
//! use bootstrap5_render::options::RenderOptions;
//! use bootstrap5_render::registry::Bootstrap5;
//!
//! let bootstrap = Bootstrap5::new(Bootstrap5Settings::default());
//! let form = Form::new().with_field(Field::new("token", Widget::new(WidgetKind::HiddenInput)));
//! let html = bootstrap.render_form(&form, &RenderOptions::new()).unwrap();
//! assert_eq!(html, r#"<input id="id_token" name="token" type="hidden">"#);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use bootstrap5_core::error::{BootstrapError, BootstrapResult};
use bootstrap5_core::settings::{Bootstrap5Settings, RendererMap, BOOTSTRAP5};
use bootstrap5_forms::bound_field::BoundField;
use bootstrap5_forms::form::Form;
use bootstrap5_forms::formset::FormSet;
use bootstrap5_forms::messages::Message;
use bootstrap5_forms::paginator::Page;

use crate::components::render_alert;
use crate::field::FieldRenderer;
use crate::form::FormRenderer;
use crate::formset::FormsetRenderer;
use crate::media;
use crate::messages::render_messages;
use crate::options::{AlertErrorType, RenderOptions};
use crate::pagination::{render_pagination, PaginationOptions};

/// The name the built-in renderers are registered under.
pub const DEFAULT_RENDERER: &str = "default";

/// Renders a single bound field.
pub trait FieldRender: Send + Sync {
    /// The registry name.
    fn name(&self) -> &str;

    fn render_field(
        &self,
        field: &BoundField,
        options: &RenderOptions,
        context: &Bootstrap5,
    ) -> BootstrapResult<String>;
}

/// Renders a form and its error summary.
pub trait FormRender: Send + Sync {
    /// The registry name.
    fn name(&self) -> &str;

    fn render_form(
        &self,
        form: &Form,
        options: &RenderOptions,
        context: &Bootstrap5,
    ) -> BootstrapResult<String>;

    fn render_form_errors(
        &self,
        form: &Form,
        error_type: AlertErrorType,
        options: &RenderOptions,
        context: &Bootstrap5,
    ) -> BootstrapResult<String>;
}

/// Renders a formset and its non-form errors.
pub trait FormsetRender: Send + Sync {
    /// The registry name.
    fn name(&self) -> &str;

    fn render_formset(
        &self,
        formset: &FormSet,
        options: &RenderOptions,
        context: &Bootstrap5,
    ) -> BootstrapResult<String>;

    fn render_formset_errors(
        &self,
        formset: &FormSet,
        options: &RenderOptions,
        context: &Bootstrap5,
    ) -> BootstrapResult<String>;
}

/// The built-in field, form and formset renderers.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRenderer;

impl FieldRender for DefaultRenderer {
    fn name(&self) -> &str {
        DEFAULT_RENDERER
    }

    fn render_field(
        &self,
        field: &BoundField,
        options: &RenderOptions,
        context: &Bootstrap5,
    ) -> BootstrapResult<String> {
        Ok(FieldRenderer::new(field, options, context.settings())?.render())
    }
}

impl FormRender for DefaultRenderer {
    fn name(&self) -> &str {
        DEFAULT_RENDERER
    }

    fn render_form(
        &self,
        form: &Form,
        options: &RenderOptions,
        context: &Bootstrap5,
    ) -> BootstrapResult<String> {
        FormRenderer::new(form, options, context)?.render()
    }

    fn render_form_errors(
        &self,
        form: &Form,
        error_type: AlertErrorType,
        options: &RenderOptions,
        context: &Bootstrap5,
    ) -> BootstrapResult<String> {
        Ok(FormRenderer::new(form, options, context)?.render_errors(error_type))
    }
}

impl FormsetRender for DefaultRenderer {
    fn name(&self) -> &str {
        DEFAULT_RENDERER
    }

    fn render_formset(
        &self,
        formset: &FormSet,
        options: &RenderOptions,
        context: &Bootstrap5,
    ) -> BootstrapResult<String> {
        FormsetRenderer::new(formset, options, context)?.render()
    }

    fn render_formset_errors(
        &self,
        formset: &FormSet,
        options: &RenderOptions,
        context: &Bootstrap5,
    ) -> BootstrapResult<String> {
        Ok(FormsetRenderer::new(formset, options, context)?.render_errors())
    }
}

/// Named renderers.
pub struct RendererRegistry {
    fields: HashMap<String, Box<dyn FieldRender>>,
    forms: HashMap<String, Box<dyn FormRender>>,
    formsets: HashMap<String, Box<dyn FormsetRender>>,
}

impl RendererRegistry {
    /// Creates a registry holding only the built-in renderers.
    pub fn new() -> Self {
        let mut registry = Self {
            fields: HashMap::new(),
            forms: HashMap::new(),
            formsets: HashMap::new(),
        };
        registry.register_field_renderer(Box::new(DefaultRenderer));
        registry.register_form_renderer(Box::new(DefaultRenderer));
        registry.register_formset_renderer(Box::new(DefaultRenderer));
        registry
    }

    pub fn register_field_renderer(&mut self, renderer: Box<dyn FieldRender>) {
        self.fields.insert(renderer.name().to_string(), renderer);
    }

    pub fn register_form_renderer(&mut self, renderer: Box<dyn FormRender>) {
        self.forms.insert(renderer.name().to_string(), renderer);
    }

    pub fn register_formset_renderer(&mut self, renderer: Box<dyn FormsetRender>) {
        self.formsets.insert(renderer.name().to_string(), renderer);
    }

    /// The field renderer `names` assigns to `layout`.
    pub fn field_renderer(&self, names: &RendererMap, layout: &str) -> BootstrapResult<&dyn FieldRender> {
        lookup(&self.fields, names, layout, "field")
    }

    /// The form renderer `names` assigns to `layout`.
    pub fn form_renderer(&self, names: &RendererMap, layout: &str) -> BootstrapResult<&dyn FormRender> {
        lookup(&self.forms, names, layout, "form")
    }

    /// The formset renderer `names` assigns to `layout`.
    pub fn formset_renderer(
        &self,
        names: &RendererMap,
        layout: &str,
    ) -> BootstrapResult<&dyn FormsetRender> {
        lookup(&self.formsets, names, layout, "formset")
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererRegistry")
            .field("fields", &sorted_names(&self.fields))
            .field("forms", &sorted_names(&self.forms))
            .field("formsets", &sorted_names(&self.formsets))
            .finish()
    }
}

fn sorted_names<T: ?Sized>(renderers: &HashMap<String, Box<T>>) -> Vec<&str> {
    let mut names: Vec<&str> = renderers.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
}

/// Resolves `layout` to a renderer name, falling back to `default`.
fn lookup<'r, T: ?Sized>(
    renderers: &'r HashMap<String, Box<T>>,
    names: &RendererMap,
    layout: &str,
    kind: &str,
) -> BootstrapResult<&'r T> {
    let name = match names.get(layout) {
        Some(name) => name.as_str(),
        None => {
            tracing::debug!(kind, layout, "no renderer configured for layout, using default");
            names
                .get(DEFAULT_RENDERER)
                .map_or(DEFAULT_RENDERER, String::as_str)
        }
    };
    renderers
        .get(name)
        .map(|renderer| &**renderer)
        .ok_or_else(|| BootstrapError::UnknownRenderer {
            kind: kind.to_string(),
            name: name.to_string(),
        })
}

/// Settings plus renderers: everything a render call needs.
///
/// Cheap to clone; both halves are shared behind [`Arc`].
#[derive(Debug, Clone)]
pub struct Bootstrap5 {
    settings: Arc<Bootstrap5Settings>,
    registry: Arc<RendererRegistry>,
}

impl Bootstrap5 {
    /// A context with the built-in renderers.
    pub fn new(settings: Bootstrap5Settings) -> Self {
        Self::with_registry(settings, RendererRegistry::new())
    }

    pub fn with_registry(settings: Bootstrap5Settings, registry: RendererRegistry) -> Self {
        Self {
            settings: Arc::new(settings),
            registry: Arc::new(registry),
        }
    }

    /// The context built from the global [`BOOTSTRAP5`] settings.
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<Bootstrap5> = OnceLock::new();
        GLOBAL.get_or_init(|| Self::new(BOOTSTRAP5.get().clone()))
    }

    pub fn settings(&self) -> &Bootstrap5Settings {
        &self.settings
    }

    pub fn registry(&self) -> &RendererRegistry {
        &self.registry
    }

    fn layout_key(options: &RenderOptions) -> BootstrapResult<&'static str> {
        Ok(options.parsed_layout()?.as_str())
    }

    pub fn render_field(&self, field: &BoundField, options: &RenderOptions) -> BootstrapResult<String> {
        let layout = Self::layout_key(options)?;
        self.registry
            .field_renderer(&self.settings.field_renderers, layout)?
            .render_field(field, options, self)
    }

    pub fn render_form(&self, form: &Form, options: &RenderOptions) -> BootstrapResult<String> {
        let layout = Self::layout_key(options)?;
        self.registry
            .form_renderer(&self.settings.form_renderers, layout)?
            .render_form(form, options, self)
    }

    /// Form errors; `error_type` is `all`, `fields`, `non_fields` or `none`.
    pub fn render_form_errors(
        &self,
        form: &Form,
        error_type: &str,
        options: &RenderOptions,
    ) -> BootstrapResult<String> {
        let error_type = AlertErrorType::parse(error_type)?;
        let layout = Self::layout_key(options)?;
        self.registry
            .form_renderer(&self.settings.form_renderers, layout)?
            .render_form_errors(form, error_type, options, self)
    }

    pub fn render_formset(&self, formset: &FormSet, options: &RenderOptions) -> BootstrapResult<String> {
        let layout = Self::layout_key(options)?;
        self.registry
            .formset_renderer(&self.settings.formset_renderers, layout)?
            .render_formset(formset, options, self)
    }

    pub fn render_formset_errors(
        &self,
        formset: &FormSet,
        options: &RenderOptions,
    ) -> BootstrapResult<String> {
        let layout = Self::layout_key(options)?;
        self.registry
            .formset_renderer(&self.settings.formset_renderers, layout)?
            .render_formset_errors(formset, options, self)
    }

    /// An alert with the configured `alert_extra_classes` added.
    pub fn render_alert(
        &self,
        content: &str,
        alert_type: &str,
        dismissible: bool,
        extra_classes: &str,
    ) -> BootstrapResult<String> {
        let configured = self.settings.alert_extra_classes.join(" ");
        let extra = format!("{extra_classes} {configured}");
        render_alert(content, alert_type, dismissible, extra.trim())
    }

    pub fn render_messages(&self, messages: &[Message]) -> BootstrapResult<String> {
        render_messages(messages, &self.settings)
    }

    pub fn render_pagination<T>(
        &self,
        page: &Page<T>,
        options: &PaginationOptions,
    ) -> BootstrapResult<String> {
        render_pagination(page, options)
    }

    /// The stylesheet `<link>` tags.
    pub fn css(&self) -> String {
        media::render_bootstrap_css(&self.settings)
    }

    /// The `<script>` tag.
    pub fn javascript(&self) -> String {
        media::render_bootstrap_javascript(&self.settings)
    }

    /// A setting by name.
    pub fn setting(&self, name: &str) -> Option<serde_json::Value> {
        self.settings.get(name)
    }
}
