//! Option resolution shared by every renderer.

use bootstrap5_core::error::{BootstrapError, BootstrapResult};
use bootstrap5_core::settings::Bootstrap5Settings;
use bootstrap5_core::size::{get_size_class, parse_size_in, Size};

use crate::options::{Layout, RenderOptions, ShowLabel};

const RENDER_SIZES: [Size; 3] = [Size::Sm, Size::Md, Size::Lg];

/// Options resolved against the settings.
#[derive(Debug, Clone)]
pub struct BaseRenderer {
    pub layout: Layout,
    pub wrapper_class: String,
    pub inline_wrapper_class: String,
    pub field_class: String,
    pub label_class: String,
    pub show_label: ShowLabel,
    pub show_help: bool,
    pub exclude: Vec<String>,
    pub set_placeholder: bool,
    pub size: Size,
    pub horizontal_label_class: String,
    pub horizontal_field_class: String,
    pub horizontal_field_offset_class: String,
    pub checkbox_layout: String,
    pub checkbox_style: String,
    pub server_side_validation: bool,
}

impl BaseRenderer {
    /// Resolves `options` against `settings`, rejecting unknown layouts,
    /// sizes and checkbox settings.
    pub fn new(options: &RenderOptions, settings: &Bootstrap5Settings) -> BootstrapResult<Self> {
        let pick = |option: &Option<String>, setting: &str| {
            option.clone().unwrap_or_else(|| setting.to_string())
        };
        let checkbox_layout = pick(
            &options.checkbox_layout,
            settings.checkbox_layout.as_deref().unwrap_or_default(),
        );
        check_choice("checkbox_layout", &checkbox_layout, &["", "inline"])?;
        let checkbox_style = pick(
            &options.checkbox_style,
            settings.checkbox_style.as_deref().unwrap_or_default(),
        );
        check_choice("checkbox_style", &checkbox_style, &["", "switch"])?;

        Ok(Self {
            layout: options.parsed_layout()?,
            wrapper_class: pick(&options.wrapper_class, &settings.wrapper_class),
            inline_wrapper_class: pick(&options.inline_wrapper_class, &settings.inline_wrapper_class),
            field_class: options.field_class.clone().unwrap_or_default(),
            label_class: options.label_class.clone().unwrap_or_default(),
            show_label: options.show_label.unwrap_or_default(),
            show_help: options.show_help.unwrap_or(true),
            exclude: options
                .exclude
                .as_deref()
                .unwrap_or_default()
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
            set_placeholder: options.set_placeholder.unwrap_or(true),
            size: parse_size_in(
                options.size.as_deref().unwrap_or_default(),
                Size::Md,
                &RENDER_SIZES,
            )?,
            horizontal_label_class: pick(
                &options.horizontal_label_class,
                &settings.horizontal_label_class,
            ),
            horizontal_field_class: pick(
                &options.horizontal_field_class,
                &settings.horizontal_field_class,
            ),
            horizontal_field_offset_class: pick(
                &options.horizontal_field_offset_class,
                &settings.horizontal_field_offset_class,
            ),
            checkbox_layout,
            checkbox_style,
            server_side_validation: options
                .server_side_validation
                .unwrap_or(settings.server_side_validation),
        })
    }

    /// `{prefix}-sm` or `{prefix}-lg`; nothing for the medium size.
    pub fn get_size_class(&self, prefix: &str) -> String {
        get_size_class(self.size, prefix, Some(Size::Md))
    }

    pub const fn is_horizontal(&self) -> bool {
        matches!(self.layout, Layout::Horizontal)
    }

    pub const fn is_inline(&self) -> bool {
        matches!(self.layout, Layout::Inline)
    }

    pub const fn is_floating(&self) -> bool {
        matches!(self.layout, Layout::Floating)
    }

    /// Whether `name` is listed in `exclude`.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.iter().any(|excluded| excluded == name)
    }
}

fn check_choice(name: &str, value: &str, valid: &[&str]) -> BootstrapResult<()> {
    if valid.contains(&value) {
        Ok(())
    } else {
        Err(BootstrapError::InvalidChoice {
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}
