//! CSS class list helpers.

/// Splits every argument on whitespace and returns the distinct class names
/// in first-seen order.
///
/// # Examples
///
/// ```
/// use bootstrap5_core::css::css_class_list;
///
/// assert_eq!(css_class_list(["a b", "", "b c"]), vec!["a", "b", "c"]);
/// ```
pub fn css_class_list<'a, I>(classes: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut list: Vec<&'a str> = Vec::new();
    for class in classes.into_iter().flat_map(str::split_whitespace) {
        if !list.contains(&class) {
            list.push(class);
        }
    }
    list
}

/// [`css_class_list`] joined with single spaces.
pub fn css_class_list_string<'a, I>(classes: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    css_class_list(classes).join(" ")
}

/// Merges class strings into one, dropping empties and duplicates.
///
/// # Examples
///
/// ```
/// use bootstrap5_core::css::merge_css_classes;
///
/// assert_eq!(merge_css_classes(["one two", "three four"]), "one two three four");
/// assert_eq!(merge_css_classes(["a", "a b", ""]), "a b");
/// ```
pub fn merge_css_classes<'a, I>(classes: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    css_class_list_string(classes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_css_classes() {
        assert_eq!(merge_css_classes(["one two", "three four"]), "one two three four");
        assert_eq!(merge_css_classes(["", "", ""]), "");
        assert_eq!(merge_css_classes(["  spaced   out  "]), "spaced out");
    }

    #[test]
    fn test_merge_keeps_first_occurrence() {
        assert_eq!(
            merge_css_classes(["form-control", "x form-control y", "x"]),
            "form-control x y"
        );
    }

    #[test]
    fn test_css_class_list_empty() {
        assert!(css_class_list(std::iter::empty()).is_empty());
    }
}
