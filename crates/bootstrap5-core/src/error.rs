//! Error types for django-rs-bootstrap5.
//!
//! Every failure the library can raise is a [`BootstrapError`]. Nearly all of
//! them are programmer errors: an unknown alert type, an unsupported size, a
//! layout name that does not exist. They surface immediately from the render
//! call that received the bad parameter.

use thiserror::Error;

/// The alert types Bootstrap 5 ships styles for.
pub const ALERT_TYPES: &[&str] = &[
    "primary",
    "secondary",
    "success",
    "danger",
    "warning",
    "info",
    "light",
    "dark",
];

/// The main error type for django-rs-bootstrap5.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    // ── Parameter errors ────────────────────────────────────────────
    /// An alert was requested with a type Bootstrap has no style for.
    #[error(
        "Value \"{0}\" is not a valid alert type. Please choose from primary, secondary, success, danger, warning, info, light, dark."
    )]
    InvalidAlertType(String),

    /// A size parameter was outside the accepted set.
    #[error("Invalid value \"{value}\" for parameter \"size\" (valid values are {valid}).")]
    InvalidSize {
        /// The rejected value.
        value: String,
        /// The accepted values, already quoted and comma separated.
        valid: String,
    },

    /// A button was requested with an unknown type.
    #[error(
        "Parameter \"button_type\" should be \"submit\", \"reset\", \"button\", \"link\" or empty (\"{0}\" given)."
    )]
    InvalidButtonType(String),

    /// A button with a `href` was requested with a type other than `link`.
    #[error("Button of type \"{0}\" is not allowed a \"href\" parameter.")]
    HrefNotAllowed(String),

    /// The layout name is not one of the supported layouts.
    #[error(
        "Invalid value \"{0}\" for parameter \"layout\" (valid values are \"\", \"default\", \"horizontal\", \"inline\", \"floating\")."
    )]
    InvalidLayout(String),

    /// The pagination `justify_content` parameter is not supported.
    #[error(
        "Parameter \"justify_content\" should be \"start\", \"center\", \"end\", \"between\" or \"around\" (\"{0}\" given)."
    )]
    InvalidJustifyContent(String),

    /// The pagination window was not a positive integer.
    #[error("Pagination pages_to_show should be a positive integer, you specified {0}.")]
    InvalidPagesToShow(String),

    /// The form error alert type is unknown.
    #[error(
        "Parameter \"alert_error_type\" should be \"all\", \"fields\", \"non_fields\" or \"none\" (\"{0}\" given)."
    )]
    InvalidAlertErrorType(String),

    /// A checkbox layout or style value is unknown.
    #[error("Invalid value \"{value}\" for parameter \"{name}\".")]
    InvalidChoice {
        /// The parameter name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// A template argument did not hold the expected object.
    #[error("Parameter \"{name}\" should contain a valid Django {kind}.")]
    InvalidArgument {
        /// The argument name (`form`, `field`, `formset`, ...).
        name: String,
        /// The expected object kind (`Form`, `BoundField`, `Formset`, ...).
        kind: String,
    },

    /// A required argument was not supplied.
    #[error("Missing required parameter \"{0}\".")]
    MissingArgument(String),

    // ── Lookup errors ───────────────────────────────────────────────
    /// A field name was not found on the form.
    #[error("Field \"{0}\" does not exist on this form.")]
    FieldNotFound(String),

    /// A page number was out of range or not a number.
    #[error("Invalid page: {0}")]
    InvalidPage(String),

    /// A renderer name is not registered.
    #[error("No {kind} renderer registered under \"{name}\".")]
    UnknownRenderer {
        /// Renderer family (`field`, `form`, `formset`).
        kind: String,
        /// The requested name.
        name: String,
    },

    // ── Configuration / template errors ─────────────────────────────
    /// Settings could not be loaded or applied.
    #[error("Improperly configured: {0}")]
    ConfigurationError(String),

    /// The template engine failed.
    #[error("Template error: {0}")]
    TemplateError(String),
}

impl BootstrapError {
    /// Builds an [`InvalidSize`](Self::InvalidSize) listing the accepted
    /// values the way the error message expects.
    pub fn invalid_size(value: impl Into<String>, valid: &[&str]) -> Self {
        let valid = valid
            .iter()
            .map(|v| format!("\"{v}\""))
            .collect::<Vec<_>>()
            .join(", ");
        Self::InvalidSize {
            value: value.into(),
            valid,
        }
    }

    /// Builds an [`InvalidArgument`](Self::InvalidArgument).
    pub fn invalid_argument(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            kind: kind.into(),
        }
    }
}

/// A convenience type alias for results using [`BootstrapError`].
pub type BootstrapResult<T> = Result<T, BootstrapError>;
