//! Text helpers.

use std::sync::OnceLock;

use regex::Regex;

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").unwrap())
}

/// Returns the text, or an empty string for `None`.
pub fn text_value(value: Option<&str>) -> String {
    value.map(str::to_string).unwrap_or_default()
}

/// Joins the non-empty values with `separator`.
///
/// # Examples
///
/// ```
/// use bootstrap5_core::text::text_concat;
///
/// assert_eq!(text_concat(&["a", "", "b"], " "), "a b");
/// ```
pub fn text_concat(values: &[&str], separator: &str) -> String {
    values
        .iter()
        .filter(|v| !v.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(separator)
}

/// Removes HTML tags from `value`.
///
/// # Examples
///
/// ```
/// use bootstrap5_core::text::strip_tags;
///
/// assert_eq!(strip_tags("<b>bold</b> text"), "bold text");
/// ```
pub fn strip_tags(value: &str) -> String {
    let mut current = value.to_string();
    loop {
        let next = tag_re().replace_all(&current, "").into_owned();
        if next == current {
            return next;
        }
        current = next;
    }
}

/// Uppercases the first character.
pub fn capfirst(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

/// Turns a field name into a default label: `first_name` → `First name`.
pub fn pretty_name(name: &str) -> String {
    capfirst(&name.replace('_', " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_value() {
        assert_eq!(text_value(None), "");
        assert_eq!(text_value(Some("x")), "x");
    }

    #[test]
    fn test_text_concat() {
        assert_eq!(text_concat(&["", ""], "-"), "");
        assert_eq!(text_concat(&["a", "b", "c"], ", "), "a, b, c");
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("no tags"), "no tags");
        assert_eq!(strip_tags("<i>my_help_text</i>"), "my_help_text");
        assert_eq!(strip_tags("<a href='x'>link</a>"), "link");
    }

    #[test]
    fn test_pretty_name() {
        assert_eq!(pretty_name("first_name"), "First name");
        assert_eq!(pretty_name("subject"), "Subject");
        assert_eq!(pretty_name(""), "");
    }

    #[test]
    fn test_capfirst_unicode() {
        assert_eq!(capfirst("école"), "École");
    }
}
