//! # bootstrap5-core
//!
//! Shared building blocks for django-rs-bootstrap5: the error type, the
//! settings model and loader, CSS class and HTML tag helpers, sizes, URL
//! helpers and logging setup.
//!
//! ## Modules
//!
//! - [`error`] - `BootstrapError` and the `BootstrapResult` alias
//! - [`settings`] - `Bootstrap5Settings` and the global `BOOTSTRAP5` holder
//! - [`settings_loader`] - TOML/JSON/environment settings loading
//! - [`css`] - class list merging
//! - [`html`] - escaping, attribute maps and tag rendering
//! - [`text`] - small text helpers
//! - [`size`] - the `Size` scale and size classes
//! - [`utils`] - URL query manipulation
//! - [`logging`] - tracing subscriber setup

pub mod css;
pub mod error;
pub mod html;
pub mod logging;
pub mod settings;
pub mod settings_loader;
pub mod size;
pub mod text;
pub mod utils;

pub use css::merge_css_classes;
pub use error::{BootstrapError, BootstrapResult};
pub use html::{escape, render_tag, AttrValue, Attrs};
pub use settings::{get_bootstrap_setting, Bootstrap5Settings, UrlSetting, BOOTSTRAP5};
pub use size::Size;
pub use utils::url_replace_param;
