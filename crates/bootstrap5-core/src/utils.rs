//! URL helpers.

use url::form_urlencoded;

use crate::html::Attrs;
use crate::settings::UrlSetting;

/// Query parameters in first-seen key order, each key holding every value
/// it appeared with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, Vec<String>)>);

impl QueryParams {
    /// Parses a query string. Blank values are dropped.
    pub fn parse(query: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            params.append(&key, &value);
        }
        params
    }

    /// Appends a value to `key`, keeping the key's original position.
    pub fn append(&mut self, key: &str, value: &str) {
        if let Some((_, values)) = self.0.iter_mut().find(|(k, _)| k == key) {
            values.push(value.to_string());
        } else {
            self.0.push((key.to_string(), vec![value.to_string()]));
        }
    }

    /// Replaces all values of `key`.
    pub fn set(&mut self, key: &str, value: &str) {
        if let Some((_, values)) = self.0.iter_mut().find(|(k, _)| k == key) {
            *values = vec![value.to_string()];
        } else {
            self.0.push((key.to_string(), vec![value.to_string()]));
        }
    }

    /// Removes `key`.
    pub fn remove(&mut self, key: &str) {
        self.0.retain(|(k, _)| k != key);
    }

    /// Returns the first value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.first())
            .map(String::as_str)
    }

    /// Merges `other` into these params; its keys replace existing values.
    pub fn extend(&mut self, other: &Self) {
        for (key, values) in &other.0 {
            self.remove_values(key);
            for value in values {
                self.append(key, value);
            }
        }
    }

    fn remove_values(&mut self, key: &str) {
        if let Some((_, values)) = self.0.iter_mut().find(|(k, _)| k == key) {
            values.clear();
        }
    }

    /// Returns `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|(_, v)| v.is_empty())
    }

    /// Encodes the parameters as `application/x-www-form-urlencoded`.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, values) in &self.0 {
            for value in values {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }
}

/// A URL split into path, query and fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    /// Everything before `?` (scheme, host and path).
    pub base: String,
    /// The parsed query.
    pub query: QueryParams,
    /// The fragment without `#`.
    pub fragment: String,
}

impl UrlParts {
    /// Splits `url`. Works for relative URLs too.
    pub fn parse(url: &str) -> Self {
        let (rest, fragment) = url.split_once('#').unwrap_or((url, ""));
        let (base, query) = rest.split_once('?').unwrap_or((rest, ""));
        Self {
            base: base.to_string(),
            query: QueryParams::parse(query),
            fragment: fragment.to_string(),
        }
    }
}

impl std::fmt::Display for UrlParts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.base)?;
        let query = self.query.encode();
        if !query.is_empty() {
            write!(f, "?{query}")?;
        }
        if !self.fragment.is_empty() {
            write!(f, "#{}", self.fragment)?;
        }
        Ok(())
    }
}

/// Replaces the query parameter `name` in `url`. `None` removes it.
///
/// The path, the other parameters (in order) and the fragment are kept.
///
/// # Examples
///
/// ```
/// use bootstrap5_core::utils::url_replace_param;
///
/// assert_eq!(url_replace_param("/foo/bar?baz=foo", "baz", Some("yohoo")), "/foo/bar?baz=yohoo");
/// assert_eq!(url_replace_param("/foo/bar?baz=foo", "baz", None), "/foo/bar");
/// assert_eq!(url_replace_param("/foo/bar#id", "baz", Some("foo")), "/foo/bar?baz=foo#id");
/// ```
pub fn url_replace_param(url: &str, name: &str, value: Option<&str>) -> String {
    let mut parts = UrlParts::parse(url);
    match value {
        Some(value) => parts.query.set(name, value),
        None => parts.query.remove(name),
    }
    parts.to_string()
}

/// Returns the tag attributes for a resource URL, with the URL itself under
/// `attr_name` (`href` or `src`).
pub fn get_url_attrs(url: &UrlSetting, attr_name: &str) -> Attrs {
    let mut attrs = Attrs::new();
    match url {
        UrlSetting::Url(u) => attrs.insert(attr_name, u.as_str()),
        UrlSetting::Attrs(map) => {
            for (key, value) in map {
                if key == "url" {
                    attrs.insert(attr_name, value.as_str());
                } else {
                    attrs.insert(key.as_str(), value.as_str());
                }
            }
        }
    }
    attrs
}
