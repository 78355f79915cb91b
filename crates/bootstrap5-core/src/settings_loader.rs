//! Settings loading from configuration files.
//!
//! Loads [`Bootstrap5Settings`] from TOML or JSON and applies environment
//! variable overrides on top.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Deep-merge a TOML or JSON document over them (nested tables such as
//!    `field_renderers` merge key by key).
//! 3. Apply environment variable overrides (highest priority).
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `BOOTSTRAP5_WRAPPER_CLASS` | `wrapper_class` |
//! | `BOOTSTRAP5_INLINE_WRAPPER_CLASS` | `inline_wrapper_class` |
//! | `BOOTSTRAP5_SET_PLACEHOLDER` | `set_placeholder` |
//! | `BOOTSTRAP5_SERVER_SIDE_VALIDATION` | `server_side_validation` |
//! | `BOOTSTRAP5_REQUIRED_CSS_CLASS` | `required_css_class` |
//! | `BOOTSTRAP5_ERROR_CSS_CLASS` | `error_css_class` |
//! | `BOOTSTRAP5_SUCCESS_CSS_CLASS` | `success_css_class` |
//! | `BOOTSTRAP5_THEME_URL` | `theme_url` |
//! | `BOOTSTRAP5_JAVASCRIPT_IN_HEAD` | `javascript_in_head` |
//!
//! ## Examples
//!
//! ```rust,no_run
//! use bootstrap5_core::settings_loader;
//!
//! let settings = settings_loader::from_toml_file_with_env("bootstrap5.toml").unwrap();
//! ```

use std::path::Path;

use crate::error::BootstrapError;
use crate::settings::{Bootstrap5Settings, UrlSetting};

/// Loads settings from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is malformed or cannot be deserialized.
pub fn from_toml_str(toml_str: &str) -> Result<Bootstrap5Settings, BootstrapError> {
    let toml_value: toml::Value = toml::from_str(toml_str)
        .map_err(|e| BootstrapError::ConfigurationError(format!("Failed to parse TOML: {e}")))?;
    from_json_value(toml_to_json(toml_value), "TOML")
}

/// Loads settings from a TOML file.
pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Bootstrap5Settings, BootstrapError> {
    let content = read_file(path.as_ref(), "TOML")?;
    from_toml_str(&content)
}

/// Loads settings from a TOML file and then applies environment variable overrides.
pub fn from_toml_file_with_env(
    path: impl AsRef<Path>,
) -> Result<Bootstrap5Settings, BootstrapError> {
    let mut settings = from_toml_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from a JSON string.
pub fn from_json_str(json_str: &str) -> Result<Bootstrap5Settings, BootstrapError> {
    let json_value: serde_json::Value = serde_json::from_str(json_str)
        .map_err(|e| BootstrapError::ConfigurationError(format!("Failed to parse JSON: {e}")))?;
    from_json_value(json_value, "JSON")
}

/// Loads settings from a JSON file.
pub fn from_json_file(path: impl AsRef<Path>) -> Result<Bootstrap5Settings, BootstrapError> {
    let content = read_file(path.as_ref(), "JSON")?;
    from_json_str(&content)
}

/// Loads settings from a JSON file and then applies environment variable overrides.
pub fn from_json_file_with_env(
    path: impl AsRef<Path>,
) -> Result<Bootstrap5Settings, BootstrapError> {
    let mut settings = from_json_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from a path, picking the format from the extension
/// (`.json` is JSON, anything else TOML), then applies env overrides.
pub fn from_file_with_env(path: impl AsRef<Path>) -> Result<Bootstrap5Settings, BootstrapError> {
    let path = path.as_ref();
    if path.extension().is_some_and(|ext| ext == "json") {
        from_json_file_with_env(path)
    } else {
        from_toml_file_with_env(path)
    }
}

/// Loads settings from just environment variables (starting from defaults).
pub fn from_env() -> Bootstrap5Settings {
    let mut settings = Bootstrap5Settings::default();
    apply_env_overrides(&mut settings);
    settings
}

/// Applies `BOOTSTRAP5_*` environment variable overrides.
///
/// Booleans accept "true"/"1"/"yes" (case-insensitive); anything else is
/// false. An empty `BOOTSTRAP5_THEME_URL` clears the theme.
pub fn apply_env_overrides(settings: &mut Bootstrap5Settings) {
    let string_vars: [(&str, &mut String); 6] = [
        ("BOOTSTRAP5_WRAPPER_CLASS", &mut settings.wrapper_class),
        (
            "BOOTSTRAP5_INLINE_WRAPPER_CLASS",
            &mut settings.inline_wrapper_class,
        ),
        (
            "BOOTSTRAP5_REQUIRED_CSS_CLASS",
            &mut settings.required_css_class,
        ),
        ("BOOTSTRAP5_ERROR_CSS_CLASS", &mut settings.error_css_class),
        (
            "BOOTSTRAP5_SUCCESS_CSS_CLASS",
            &mut settings.success_css_class,
        ),
        (
            "BOOTSTRAP5_HORIZONTAL_LABEL_CLASS",
            &mut settings.horizontal_label_class,
        ),
    ];
    for (var, target) in string_vars {
        if let Ok(val) = std::env::var(var) {
            tracing::debug!(var, "applying environment override");
            *target = val;
        }
    }

    let bool_vars: [(&str, &mut bool); 3] = [
        ("BOOTSTRAP5_SET_PLACEHOLDER", &mut settings.set_placeholder),
        (
            "BOOTSTRAP5_SERVER_SIDE_VALIDATION",
            &mut settings.server_side_validation,
        ),
        (
            "BOOTSTRAP5_JAVASCRIPT_IN_HEAD",
            &mut settings.javascript_in_head,
        ),
    ];
    for (var, target) in bool_vars {
        if let Ok(val) = std::env::var(var) {
            tracing::debug!(var, "applying environment override");
            *target = parse_bool(&val);
        }
    }

    if let Ok(val) = std::env::var("BOOTSTRAP5_THEME_URL") {
        settings.theme_url = if val.is_empty() {
            None
        } else {
            Some(UrlSetting::Url(val))
        };
    }
}

// ============================================================
// Helpers
// ============================================================

const URL_SETTINGS: &[&str] = &["css_url", "javascript_url", "theme_url"];

fn parse_bool(val: &str) -> bool {
    matches!(val.to_lowercase().as_str(), "true" | "1" | "yes")
}

fn read_file(path: &Path, format: &str) -> Result<String, BootstrapError> {
    std::fs::read_to_string(path).map_err(|e| {
        BootstrapError::ConfigurationError(format!(
            "Failed to read {format} file '{}': {e}",
            path.display()
        ))
    })
}

fn from_json_value(
    value: serde_json::Value,
    format: &str,
) -> Result<Bootstrap5Settings, BootstrapError> {
    let mut default_json = serde_json::to_value(Bootstrap5Settings::default()).map_err(|e| {
        BootstrapError::ConfigurationError(format!("Failed to serialize default settings: {e}"))
    })?;

    // URL settings replace the default wholesale; a user URL never inherits
    // the default integrity hash.
    if let (serde_json::Value::Object(defaults), serde_json::Value::Object(user)) =
        (&mut default_json, &value)
    {
        for key in URL_SETTINGS {
            if user.contains_key(*key) {
                defaults.remove(*key);
            }
        }
    }

    let merged = merge_json(default_json, value);
    let settings = serde_json::from_value(merged).map_err(|e| {
        BootstrapError::ConfigurationError(format!(
            "Failed to deserialize settings from {format}: {e}"
        ))
    })?;
    tracing::debug!(format, "loaded bootstrap5 settings");
    Ok(settings)
}

/// Converts a TOML value to a `serde_json::Value`.
pub fn toml_to_json(value: toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s),
        toml::Value::Integer(i) => serde_json::json!(i),
        toml::Value::Float(f) => serde_json::json!(f),
        toml::Value::Boolean(b) => serde_json::Value::Bool(b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => serde_json::Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

/// Deep-merges two JSON values. `override_val` takes precedence.
pub fn merge_json(base: serde_json::Value, override_val: serde_json::Value) -> serde_json::Value {
    match (base, override_val) {
        (serde_json::Value::Object(mut base_map), serde_json::Value::Object(override_map)) => {
            for (key, override_v) in override_map {
                let merged = if let Some(base_v) = base_map.remove(&key) {
                    merge_json(base_v, override_v)
                } else {
                    override_v
                };
                base_map.insert(key, merged);
            }
            serde_json::Value::Object(base_map)
        }
        (_, override_val) => override_val,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── TOML loading ────────────────────────────────────────────────

    #[test]
    fn test_from_toml_str_basic() {
        let toml = r#"
            wrapper_class = "form-group"
            set_placeholder = false
            required_css_class = "django_bootstrap5-req"
        "#;

        let settings = from_toml_str(toml).unwrap();
        assert_eq!(settings.wrapper_class, "form-group");
        assert!(!settings.set_placeholder);
        assert_eq!(settings.required_css_class, "django_bootstrap5-req");
        // Defaults preserved
        assert_eq!(settings.horizontal_label_class, "col-sm-2");
    }

    #[test]
    fn test_from_toml_str_empty() {
        let settings = from_toml_str("").unwrap();
        assert_eq!(settings, Bootstrap5Settings::default());
    }

    #[test]
    fn test_from_toml_str_renderer_maps_merge() {
        let toml = r#"
            [field_renderers]
            horizontal = "compact"
        "#;
        let settings = from_toml_str(toml).unwrap();
        assert_eq!(settings.field_renderers.get("default").unwrap(), "default");
        assert_eq!(
            settings.field_renderers.get("horizontal").unwrap(),
            "compact"
        );
    }

    #[test]
    fn test_from_toml_str_theme_url() {
        let settings = from_toml_str(r#"theme_url = "//example.com/theme.css""#).unwrap();
        assert_eq!(
            settings.theme_url,
            Some(UrlSetting::Url("//example.com/theme.css".to_string()))
        );
    }

    #[test]
    fn test_from_toml_str_invalid() {
        let result = from_toml_str("this is not valid toml {{{");
        assert!(matches!(
            result,
            Err(BootstrapError::ConfigurationError(msg)) if msg.contains("TOML")
        ));
    }

    #[test]
    fn test_from_toml_str_wrong_type() {
        assert!(from_toml_str("set_placeholder = \"maybe\"").is_err());
    }

    #[test]
    fn test_from_toml_str_unknown_key_kept() {
        let settings = from_toml_str("my_setting = 3").unwrap();
        assert_eq!(settings.get("my_setting"), Some(serde_json::json!(3)));
    }

    // ── JSON loading ────────────────────────────────────────────────

    #[test]
    fn test_from_json_str_basic() {
        let json = r#"{"javascript_in_head": true, "checkbox_style": "switch"}"#;
        let settings = from_json_str(json).unwrap();
        assert!(settings.javascript_in_head);
        assert_eq!(settings.checkbox_style.as_deref(), Some("switch"));
    }

    #[test]
    fn test_from_json_str_css_url_string() {
        let json = r#"{"css_url": "/static/bootstrap.css"}"#;
        let settings = from_json_str(json).unwrap();
        assert_eq!(
            settings.css_url,
            UrlSetting::Url("/static/bootstrap.css".to_string())
        );
    }

    #[test]
    fn test_from_json_str_css_url_map_replaces_default() {
        let json = r#"{"css_url": {"url": "/b.css", "crossorigin": "use-credentials"}}"#;
        let settings = from_json_str(json).unwrap();
        let UrlSetting::Attrs(map) = settings.css_url else {
            panic!("expected attribute map");
        };
        assert_eq!(map.len(), 2);
        assert!(!map.contains_key("integrity"));
    }

    #[test]
    fn test_from_json_str_invalid() {
        assert!(from_json_str("{not json").is_err());
    }

    #[test]
    fn test_from_file_missing() {
        let err = from_toml_file("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read TOML file"));
    }

    #[test]
    fn test_from_file_roundtrip() {
        let dir = std::env::temp_dir();
        let path = dir.join("bootstrap5_settings_loader_test.json");
        std::fs::write(&path, r#"{"wrapper_class": "mb-4"}"#).unwrap();
        let settings = from_json_file(&path).unwrap();
        assert_eq!(settings.wrapper_class, "mb-4");
        std::fs::remove_file(&path).ok();
    }

    // ── Helpers ─────────────────────────────────────────────────────

    #[test]
    fn test_merge_json_nested() {
        let base = serde_json::json!({"a": {"x": 1, "y": 2}, "b": 1});
        let over = serde_json::json!({"a": {"y": 3}, "c": 4});
        assert_eq!(
            merge_json(base, over),
            serde_json::json!({"a": {"x": 1, "y": 3}, "b": 1, "c": 4})
        );
    }

    #[test]
    fn test_merge_json_scalar_replaces_object() {
        let base = serde_json::json!({"css_url": {"url": "a", "integrity": "b"}});
        let over = serde_json::json!({"css_url": "c"});
        assert_eq!(merge_json(base, over), serde_json::json!({"css_url": "c"}));
    }

    #[test]
    fn test_toml_to_json() {
        let value: toml::Value = toml::from_str("a = [1, 2]\n[b]\nc = true").unwrap();
        assert_eq!(
            toml_to_json(value),
            serde_json::json!({"a": [1, 2], "b": {"c": true}})
        );
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("TRUE"));
        assert!(parse_bool("1"));
        assert!(parse_bool("yes"));
        assert!(!parse_bool("off"));
    }
}
