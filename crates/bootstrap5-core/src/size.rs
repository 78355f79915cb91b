//! Component sizes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BootstrapError, BootstrapResult};

/// A Bootstrap size step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    /// Extra small.
    Xs,
    /// Small.
    Sm,
    /// Medium, the Bootstrap default.
    #[default]
    Md,
    /// Large.
    Lg,
}

impl Size {
    /// All sizes in ascending order.
    pub const ALL: [Self; 4] = [Self::Xs, Self::Sm, Self::Md, Self::Lg];

    /// The short name used in class suffixes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a size, accepting long forms (`small`, `large`, ...). An empty
/// value yields `default`.
pub fn parse_size(value: &str, default: Size) -> BootstrapResult<Size> {
    parse_size_in(value, default, &Size::ALL)
}

/// Like [`parse_size`] but restricted to `allowed`.
pub fn parse_size_in(value: &str, default: Size, allowed: &[Size]) -> BootstrapResult<Size> {
    let normalized = value.trim().to_lowercase();
    let size = match normalized.as_str() {
        "" => return Ok(default),
        "xs" | "extra-small" | "extra small" => Size::Xs,
        "sm" | "small" => Size::Sm,
        "md" | "medium" => Size::Md,
        "lg" | "large" => Size::Lg,
        _ => return Err(invalid(value, allowed)),
    };
    if allowed.contains(&size) {
        Ok(size)
    } else {
        Err(invalid(value, allowed))
    }
}

fn invalid(value: &str, allowed: &[Size]) -> BootstrapError {
    let names: Vec<&str> = allowed.iter().map(|s| s.as_str()).collect();
    BootstrapError::invalid_size(value, &names)
}

/// Returns `"{prefix}-{size}"`, or an empty string when the size equals
/// `skip`.
///
/// # Examples
///
/// ```
/// use bootstrap5_core::size::{get_size_class, Size};
///
/// assert_eq!(get_size_class(Size::Lg, "btn", Some(Size::Md)), "btn-lg");
/// assert_eq!(get_size_class(Size::Md, "btn", Some(Size::Md)), "");
/// ```
pub fn get_size_class(size: Size, prefix: &str, skip: Option<Size>) -> String {
    if skip == Some(size) {
        String::new()
    } else {
        format!("{prefix}-{size}")
    }
}
