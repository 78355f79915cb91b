//! Flash messages as dismissible alerts.

use bootstrap5_core::css::merge_css_classes;
use bootstrap5_core::error::BootstrapResult;
use bootstrap5_core::html::escape;
use bootstrap5_core::settings::Bootstrap5Settings;
use bootstrap5_forms::messages::{Message, MessageLevel};

use crate::components::render_alert;

/// The alert type used for a message level.
pub const fn message_alert_type(level: Option<MessageLevel>) -> &'static str {
    match level {
        Some(MessageLevel::Debug) => "secondary",
        Some(MessageLevel::Success) => "success",
        Some(MessageLevel::Warning) => "warning",
        Some(MessageLevel::Error) => "danger",
        Some(MessageLevel::Info) | None => "info",
    }
}

/// Renders each message as a dismissible alert, one per line.
pub fn render_messages(messages: &[Message], settings: &Bootstrap5Settings) -> BootstrapResult<String> {
    let configured = settings.alert_extra_classes.join(" ");
    let rendered = messages
        .iter()
        .map(|message| {
            let text = escape(&message.message.replace('\n', " "));
            let extra = merge_css_classes([message.extra_tags.as_str(), configured.as_str()]);
            render_alert(&text, message_alert_type(message.level), true, &extra)
        })
        .collect::<BootstrapResult<Vec<_>>>()?;
    Ok(rendered.join("\n"))
}
