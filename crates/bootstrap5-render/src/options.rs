//! Render options.
//!
//! Every option is optional. A renderer resolves each one in the order
//! explicit option, then form attribute, then global setting.

use std::fmt;
use std::str::FromStr;

use bootstrap5_core::error::{BootstrapError, BootstrapResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Form layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// Label above field.
    #[default]
    Default,
    /// Label and field side by side in a grid row.
    Horizontal,
    /// Fields in one line, labels visually hidden.
    Inline,
    /// Bootstrap floating labels.
    Floating,
}

impl Layout {
    /// Parses a layout name. The empty string is the default layout.
    pub fn parse(value: &str) -> BootstrapResult<Self> {
        match value {
            "" | "default" => Ok(Self::Default),
            "horizontal" => Ok(Self::Horizontal),
            "inline" => Ok(Self::Inline),
            "floating" => Ok(Self::Floating),
            other => Err(BootstrapError::InvalidLayout(other.to_string())),
        }
    }

    /// The name used to look up renderers for this layout.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Horizontal => "horizontal",
            Self::Inline => "inline",
            Self::Floating => "floating",
        }
    }
}

impl FromStr for Layout {
    type Err = BootstrapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether and how a label is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShowLabel {
    /// Render the label.
    #[default]
    Show,
    /// Render the label with `visually-hidden`.
    Hidden,
    /// Render no label at all.
    Skip,
}

impl ShowLabel {
    /// Parses the string form used in templates.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "skip" => Self::Skip,
            "" | "false" | "0" | "visually-hidden" => Self::Hidden,
            _ => Self::Show,
        }
    }
}

impl From<bool> for ShowLabel {
    fn from(show: bool) -> Self {
        if show {
            Self::Show
        } else {
            Self::Hidden
        }
    }
}

impl From<&str> for ShowLabel {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ShowLabelRepr {
    Flag(bool),
    Text(String),
}

impl<'de> Deserialize<'de> for ShowLabel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match ShowLabelRepr::deserialize(deserializer)? {
            ShowLabelRepr::Flag(show) => show.into(),
            ShowLabelRepr::Text(text) => Self::parse(&text),
        })
    }
}

impl Serialize for ShowLabel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Show => serializer.serialize_bool(true),
            Self::Hidden => serializer.serialize_bool(false),
            Self::Skip => serializer.serialize_str("skip"),
        }
    }
}

/// Which form errors to show above the fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertErrorType {
    /// Field and form-wide errors.
    All,
    /// Field errors only.
    Fields,
    /// Form-wide errors only.
    #[default]
    NonFields,
    /// Nothing.
    None,
}

impl AlertErrorType {
    /// Parses an error type name.
    pub fn parse(value: &str) -> BootstrapResult<Self> {
        match value {
            "all" => Ok(Self::All),
            "fields" => Ok(Self::Fields),
            "" | "non_fields" => Ok(Self::NonFields),
            "none" => Ok(Self::None),
            other => Err(BootstrapError::InvalidAlertErrorType(other.to_string())),
        }
    }
}

impl FromStr for AlertErrorType {
    type Err = BootstrapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Options accepted by the field, form and formset renderers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub layout: Option<String>,
    pub wrapper_class: Option<String>,
    pub inline_wrapper_class: Option<String>,
    pub field_class: Option<String>,
    pub label_class: Option<String>,
    pub show_label: Option<ShowLabel>,
    pub show_help: Option<bool>,
    /// Comma separated field names to leave out.
    pub exclude: Option<String>,
    pub set_placeholder: Option<bool>,
    pub size: Option<String>,
    pub horizontal_label_class: Option<String>,
    pub horizontal_field_class: Option<String>,
    pub horizontal_field_offset_class: Option<String>,
    pub error_css_class: Option<String>,
    pub required_css_class: Option<String>,
    pub bound_css_class: Option<String>,
    pub alert_error_type: Option<String>,
    pub form_check_class: Option<String>,
    pub checkbox_layout: Option<String>,
    pub checkbox_style: Option<String>,
    pub placeholder: Option<String>,
    pub label: Option<String>,
    pub addon_before: Option<String>,
    pub addon_after: Option<String>,
    pub addon_before_class: Option<String>,
    pub addon_after_class: Option<String>,
    pub server_side_validation: Option<bool>,
}

macro_rules! string_options {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("Sets `", stringify!($name), "`.")]
            #[must_use]
            pub fn $name(mut self, value: impl Into<String>) -> Self {
                self.$name = Some(value.into());
                self
            }
        )*
    };
}

impl RenderOptions {
    /// Options with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    string_options!(
        layout,
        wrapper_class,
        inline_wrapper_class,
        field_class,
        label_class,
        exclude,
        size,
        horizontal_label_class,
        horizontal_field_class,
        horizontal_field_offset_class,
        error_css_class,
        required_css_class,
        bound_css_class,
        alert_error_type,
        form_check_class,
        checkbox_layout,
        checkbox_style,
        placeholder,
        label,
        addon_before,
        addon_after,
        addon_before_class,
        addon_after_class,
    );

    /// Sets `show_label`.
    #[must_use]
    pub fn show_label(mut self, show_label: impl Into<ShowLabel>) -> Self {
        self.show_label = Some(show_label.into());
        self
    }

    /// Sets `show_help`.
    #[must_use]
    pub const fn show_help(mut self, show_help: bool) -> Self {
        self.show_help = Some(show_help);
        self
    }

    /// Sets `set_placeholder`.
    #[must_use]
    pub const fn set_placeholder(mut self, set_placeholder: bool) -> Self {
        self.set_placeholder = Some(set_placeholder);
        self
    }

    /// Sets `server_side_validation`.
    #[must_use]
    pub const fn server_side_validation(mut self, enabled: bool) -> Self {
        self.server_side_validation = Some(enabled);
        self
    }

    /// The layout named by these options.
    pub fn parsed_layout(&self) -> BootstrapResult<Layout> {
        Layout::parse(self.layout.as_deref().unwrap_or_default())
    }
}
