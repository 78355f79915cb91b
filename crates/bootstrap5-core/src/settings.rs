//! Library settings.
//!
//! [`Bootstrap5Settings`] holds every knob the renderers read. Defaults match
//! a stock Bootstrap 5.0.2 setup served from the jsDelivr CDN. User settings
//! are deep-merged over the defaults by the
//! [`settings_loader`](crate::settings_loader), and unknown keys are kept in
//! [`extra`](Bootstrap5Settings::extra) so [`get_bootstrap_setting`] can still
//! answer for them.
//!
//! The process-wide instance lives in [`BOOTSTRAP5`].

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{BootstrapError, BootstrapResult};

/// A resource URL: either a bare string or an attribute map with a `url` key
/// (plus e.g. `integrity` and `crossorigin`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UrlSetting {
    /// A plain URL.
    Url(String),
    /// A URL with extra tag attributes.
    Attrs(BTreeMap<String, String>),
}

impl UrlSetting {
    /// Returns the URL itself.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Url(u) => Some(u),
            Self::Attrs(map) => map.get("url").map(String::as_str),
        }
    }

    fn with_integrity(url: &str, integrity: &str) -> Self {
        let mut map = BTreeMap::new();
        map.insert("url".to_string(), url.to_string());
        map.insert("integrity".to_string(), integrity.to_string());
        map.insert("crossorigin".to_string(), "anonymous".to_string());
        Self::Attrs(map)
    }
}

/// Renderer name per layout, e.g. `{"default": "default"}`.
pub type RendererMap = BTreeMap<String, String>;

fn default_renderer_map() -> RendererMap {
    let mut map = BTreeMap::new();
    map.insert("default".to_string(), "default".to_string());
    map
}

/// The settings the Bootstrap 5 renderers read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bootstrap5Settings {
    /// Bootstrap stylesheet.
    pub css_url: UrlSetting,
    /// Bootstrap JavaScript bundle.
    pub javascript_url: UrlSetting,
    /// Optional theme stylesheet loaded after Bootstrap.
    pub theme_url: Option<UrlSetting>,
    /// Put the JavaScript in `<head>` instead of at the end of `<body>`.
    pub javascript_in_head: bool,
    /// Class on the wrapper around each field.
    pub wrapper_class: String,
    /// Class on the wrapper around each field in inline layout.
    pub inline_wrapper_class: String,
    /// Label column class in horizontal layout.
    pub horizontal_label_class: String,
    /// Field column class in horizontal layout.
    pub horizontal_field_class: String,
    /// Offset class for label-less fields in horizontal layout.
    pub horizontal_field_offset_class: String,
    /// Use the label as placeholder when none is given.
    pub set_placeholder: bool,
    /// `"inline"` to lay checkboxes and radios out inline.
    pub checkbox_layout: Option<String>,
    /// `"switch"` to render checkboxes as switches.
    pub checkbox_style: Option<String>,
    /// Class added to wrappers of required fields.
    pub required_css_class: String,
    /// Class added to fields with errors.
    pub error_css_class: String,
    /// Class added to bound fields without errors.
    pub success_css_class: String,
    /// Mark fields `is-valid`/`is-invalid` after server-side validation.
    pub server_side_validation: bool,
    /// Classes appended to every alert.
    pub alert_extra_classes: Vec<String>,
    /// Formset renderer name per layout.
    pub formset_renderers: RendererMap,
    /// Form renderer name per layout.
    pub form_renderers: RendererMap,
    /// Field renderer name per layout.
    pub field_renderers: RendererMap,
    /// Settings this library does not know about.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Default for Bootstrap5Settings {
    fn default() -> Self {
        Self {
            css_url: UrlSetting::with_integrity(
                "https://cdn.jsdelivr.net/npm/bootstrap@5.0.2/dist/css/bootstrap.min.css",
                "sha384-EVSTQN3/azprG1Anm3QDgpJLIm9Nao0Yz1ztcQTwFspd3yD65VohhpuuCOmLASjC",
            ),
            javascript_url: UrlSetting::with_integrity(
                "https://cdn.jsdelivr.net/npm/bootstrap@5.0.2/dist/js/bootstrap.bundle.min.js",
                "sha384-MrcW6ZMFYlzcLA8Nl+NtUVF0sA7MsXsP1UyJoMp4YLEuNSfAP+JcXn/tWtIaxVXM",
            ),
            theme_url: None,
            javascript_in_head: false,
            wrapper_class: "mb-3".to_string(),
            inline_wrapper_class: String::new(),
            horizontal_label_class: "col-sm-2".to_string(),
            horizontal_field_class: "col-sm-10".to_string(),
            horizontal_field_offset_class: "offset-sm-2".to_string(),
            set_placeholder: true,
            checkbox_layout: None,
            checkbox_style: None,
            required_css_class: String::new(),
            error_css_class: String::new(),
            success_css_class: String::new(),
            server_side_validation: true,
            alert_extra_classes: Vec::new(),
            formset_renderers: default_renderer_map(),
            form_renderers: default_renderer_map(),
            field_renderers: default_renderer_map(),
            extra: BTreeMap::new(),
        }
    }
}

impl Bootstrap5Settings {
    /// Looks up a setting by name, including keys stored in `extra`.
    pub fn get(&self, name: &str) -> Option<serde_json::Value> {
        if let Some(value) = self.extra.get(name) {
            return Some(value.clone());
        }
        let serde_json::Value::Object(map) = serde_json::to_value(self).ok()? else {
            return None;
        };
        map.get(name).filter(|v| !v.is_null()).cloned()
    }

    /// Returns a string-valued setting, or an empty string.
    pub fn get_str(&self, name: &str) -> String {
        match self.get(name) {
            Some(serde_json::Value::String(s)) => s,
            Some(serde_json::Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }

    /// The Bootstrap stylesheet URL.
    pub const fn css_url(&self) -> &UrlSetting {
        &self.css_url
    }

    /// The Bootstrap JavaScript URL.
    pub const fn javascript_url(&self) -> &UrlSetting {
        &self.javascript_url
    }

    /// The theme stylesheet URL, if any.
    pub const fn theme_url(&self) -> Option<&UrlSetting> {
        self.theme_url.as_ref()
    }
}

/// A lazily-initialized, globally-accessible settings container.
///
/// Unlike the host framework's settings, reading before configuration is
/// allowed: [`get`](Self::get) falls back to the defaults and freezes them.
pub struct LazySettings {
    inner: OnceLock<Bootstrap5Settings>,
}

impl Default for LazySettings {
    fn default() -> Self {
        Self::new()
    }
}

impl LazySettings {
    /// Creates a new, unconfigured `LazySettings`.
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    /// Installs the settings. Fails if settings were already configured or
    /// already read.
    pub fn configure(&self, settings: Bootstrap5Settings) -> BootstrapResult<()> {
        self.inner.set(settings).map_err(|_| {
            BootstrapError::ConfigurationError(
                "Bootstrap 5 settings have already been configured".to_string(),
            )
        })?;
        tracing::debug!("bootstrap5 settings configured");
        Ok(())
    }

    /// Returns the configured settings, or the defaults.
    pub fn get(&self) -> &Bootstrap5Settings {
        self.inner.get_or_init(|| {
            tracing::debug!("bootstrap5 settings not configured, using defaults");
            Bootstrap5Settings::default()
        })
    }

    /// Returns `true` if settings have been configured or read.
    pub fn is_configured(&self) -> bool {
        self.inner.get().is_some()
    }
}

/// The global settings instance.
pub static BOOTSTRAP5: LazySettings = LazySettings::new();

/// Reads a setting from the global settings, returning `default` when it is
/// not set.
pub fn get_bootstrap_setting(
    name: &str,
    default: Option<serde_json::Value>,
) -> Option<serde_json::Value> {
    BOOTSTRAP5.get().get(name).or(default)
}

/// The global Bootstrap stylesheet URL.
pub fn css_url() -> UrlSetting {
    BOOTSTRAP5.get().css_url.clone()
}

/// The global Bootstrap JavaScript URL.
pub fn javascript_url() -> UrlSetting {
    BOOTSTRAP5.get().javascript_url.clone()
}

/// The global theme URL.
pub fn theme_url() -> Option<UrlSetting> {
    BOOTSTRAP5.get().theme_url.clone()
}
