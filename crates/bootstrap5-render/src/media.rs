//! Stylesheet and script tags.

use bootstrap5_core::html::{render_link_tag, render_script_tag};
use bootstrap5_core::settings::Bootstrap5Settings;

/// The Bootstrap stylesheet link, followed by the theme link if one is set.
pub fn render_bootstrap_css(settings: &Bootstrap5Settings) -> String {
    let mut html = render_link_tag(settings.css_url(), "stylesheet", None);
    if let Some(theme) = settings.theme_url() {
        html.push_str(&render_link_tag(theme, "stylesheet", None));
    }
    html
}

/// The Bootstrap `<script>` tag.
pub fn render_bootstrap_javascript(settings: &Bootstrap5Settings) -> String {
    render_script_tag(settings.javascript_url())
}
