//! Flash messages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    /// Development-only detail.
    Debug,
    /// Informational.
    Info,
    /// An action succeeded.
    Success,
    /// Not a failure yet.
    Warning,
    /// An action failed.
    Error,
}

impl MessageLevel {
    /// The numeric level.
    pub const fn value(self) -> u8 {
        match self {
            Self::Debug => 10,
            Self::Info => 20,
            Self::Success => 25,
            Self::Warning => 30,
            Self::Error => 40,
        }
    }

    /// Looks a level up by its numeric value.
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            10 => Some(Self::Debug),
            20 => Some(Self::Info),
            25 => Some(Self::Success),
            30 => Some(Self::Warning),
            40 => Some(Self::Error),
            _ => None,
        }
    }

    /// The lowercase tag.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for MessageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A message queued for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Severity, if known.
    #[serde(default)]
    pub level: Option<MessageLevel>,
    /// The text.
    pub message: String,
    /// Extra CSS classes.
    #[serde(default)]
    pub extra_tags: String,
}

impl Message {
    /// Creates a message.
    pub fn new(level: MessageLevel, message: impl Into<String>) -> Self {
        Self {
            level: Some(level),
            message: message.into(),
            extra_tags: String::new(),
        }
    }

    /// Adds extra tags.
    #[must_use]
    pub fn with_extra_tags(mut self, tags: impl Into<String>) -> Self {
        self.extra_tags = tags.into();
        self
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels() {
        assert_eq!(MessageLevel::Success.value(), 25);
        assert_eq!(MessageLevel::from_value(40), Some(MessageLevel::Error));
        assert_eq!(MessageLevel::from_value(41), None);
        assert_eq!(MessageLevel::Warning.to_string(), "warning");
    }

    #[test]
    fn test_message_builder() {
        let m = Message::new(MessageLevel::Info, "hello").with_extra_tags("extra");
        assert_eq!(m.to_string(), "hello");
        assert_eq!(m.extra_tags, "extra");
    }

    #[test]
    fn test_deserialize() {
        let m: Message =
            serde_json::from_value(serde_json::json!({"level": "error", "message": "x"})).unwrap();
        assert_eq!(m.level, Some(MessageLevel::Error));
        let m: Message = serde_json::from_value(serde_json::json!({"message": "x"})).unwrap();
        assert_eq!(m.level, None);
    }
}
