//! HTML building blocks.
//!
//! [`Attrs`] is the attribute map every renderer and widget passes around.
//! Attributes are kept sorted by name, so rendered markup is deterministic.
//! Boolean `true` renders as a bare attribute (`required`), `false` is
//! omitted.
//!
//! # Examples
//!
//! ```
//! use bootstrap5_core::html::{render_tag, Attrs};
//!
//! let mut attrs = Attrs::new();
//! attrs.insert("bar", "123");
//! assert_eq!(render_tag("span", &attrs, "foo", false), r#"<span bar="123">foo</span>"#);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::settings::UrlSetting;
use crate::utils::get_url_attrs;

/// Escapes HTML special characters in `text`.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// A boolean attribute such as `required` or `disabled`.
    Flag(bool),
    /// An integer value, rendered in decimal.
    Int(i64),
    /// A text value, escaped on output.
    Text(String),
}

impl AttrValue {
    /// Returns the textual form, or `None` for a `false` flag.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Flag(false) => None,
            Self::Flag(true) => Some(String::new()),
            Self::Int(i) => Some(i.to_string()),
            Self::Text(s) => Some(s.clone()),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_text().unwrap_or_default())
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for AttrValue {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl From<i64> for AttrValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

/// A sorted map of HTML attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attrs(BTreeMap<String, AttrValue>);

impl Attrs {
    /// Creates an empty attribute map.
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Sets an attribute, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets an attribute only when it is not present yet.
    pub fn set_default(&mut self, name: &str, value: impl Into<AttrValue>) {
        self.0.entry(name.to_string()).or_insert_with(|| value.into());
    }

    /// Returns the raw value for `name`.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.get(name)
    }

    /// Returns the value for `name` as text, treating a `false` flag as absent.
    pub fn get_str(&self, name: &str) -> Option<String> {
        self.0.get(name).and_then(AttrValue::as_text)
    }

    /// Removes and returns the attribute as text.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.remove(name).and_then(|v| v.as_text())
    }

    /// Returns `true` if `name` is present.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns `true` if no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttrValue)> {
        self.0.iter()
    }

    /// Copies every attribute of `other` over this map.
    pub fn update(&mut self, other: &Self) {
        for (k, v) in &other.0 {
            self.0.insert(k.clone(), v.clone());
        }
    }

    /// Renders the attributes with a leading space before each.
    pub fn flatatt(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.0 {
            match value {
                AttrValue::Flag(false) => {}
                AttrValue::Flag(true) => {
                    out.push(' ');
                    out.push_str(name);
                }
                AttrValue::Int(i) => {
                    out.push_str(&format!(" {name}=\"{i}\""));
                }
                AttrValue::Text(s) => {
                    out.push_str(&format!(" {name}=\"{}\"", escape(s)));
                }
            }
        }
        out
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

/// Renders the attributes of `attrs`. Shorthand for [`Attrs::flatatt`].
pub fn flatatt(attrs: &Attrs) -> String {
    attrs.flatatt()
}

/// Renders an HTML tag.
///
/// `content` is inserted as-is; callers escape it. The closing tag is
/// emitted when there is content or `close` is set.
pub fn render_tag(tag: &str, attrs: &Attrs, content: &str, close: bool) -> String {
    let mut html = format!("<{tag}{}>", attrs.flatatt());
    if !content.is_empty() || close {
        html.push_str(content);
        html.push_str(&format!("</{tag}>"));
    }
    html
}

/// Renders a `<link>` tag for a stylesheet-like resource.
pub fn render_link_tag(url: &UrlSetting, rel: &str, media: Option<&str>) -> String {
    let mut attrs = get_url_attrs(url, "href");
    attrs.insert("rel", rel);
    if let Some(media) = media {
        attrs.insert("media", media);
    }
    render_tag("link", &attrs, "", false)
}

/// Renders a `<script>` tag for a script resource.
pub fn render_script_tag(url: &UrlSetting) -> String {
    let attrs = get_url_attrs(url, "src");
    render_tag("script", &attrs, "", true)
}
