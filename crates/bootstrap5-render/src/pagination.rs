//! Pagination controls.
//!
//! [`get_pagination_context`] picks the window of page numbers to show and
//! the targets of the two ellipsis links; [`render_pagination`] turns that
//! into a Bootstrap `<ul class="pagination">`.

use bootstrap5_core::css::merge_css_classes;
use bootstrap5_core::error::{BootstrapError, BootstrapResult};
use bootstrap5_core::html::escape;
use bootstrap5_core::size::{get_size_class, parse_size_in, Size};
use bootstrap5_core::utils::{url_replace_param, QueryParams, UrlParts};
use bootstrap5_forms::paginator::Page;
use serde::{Deserialize, Serialize};

/// Pages shown when `pages_to_show` is not given.
pub const DEFAULT_PAGES_TO_SHOW: usize = 11;

/// Pagination parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationOptions {
    /// Window size, as a number or numeric string.
    pub pages_to_show: Option<serde_json::Value>,
    /// Base URL for the page links.
    pub url: Option<String>,
    pub size: Option<String>,
    /// `start`, `center`, `end`, `between` or `around`.
    pub justify_content: Option<String>,
    /// Extra query string merged into every link.
    pub extra: Option<String>,
    pub extra_classes: Option<String>,
    /// Query parameter carrying the page number. Defaults to `page`.
    pub parameter_name: Option<String>,
}

impl PaginationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pages_to_show(mut self, pages_to_show: usize) -> Self {
        self.pages_to_show = Some(pages_to_show.into());
        self
    }

    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    #[must_use]
    pub fn justify_content(mut self, justify_content: impl Into<String>) -> Self {
        self.justify_content = Some(justify_content.into());
        self
    }

    #[must_use]
    pub fn extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = Some(extra.into());
        self
    }

    #[must_use]
    pub fn parameter_name(mut self, parameter_name: impl Into<String>) -> Self {
        self.parameter_name = Some(parameter_name.into());
        self
    }
}

/// Everything the pagination markup needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationContext {
    pub pagination_url: String,
    pub num_pages: usize,
    pub current_page: usize,
    pub first_page: usize,
    pub last_page: usize,
    pub pages_shown: Vec<usize>,
    /// Target of the leading ellipsis.
    pub pages_back: Option<usize>,
    /// Target of the trailing ellipsis.
    pub pages_forward: Option<usize>,
    pub pagination_css_classes: String,
    pub parameter_name: String,
}

fn parse_pages_to_show(value: Option<&serde_json::Value>) -> BootstrapResult<usize> {
    let parsed = match value {
        None | Some(serde_json::Value::Null) => return Ok(DEFAULT_PAGES_TO_SHOW),
        Some(serde_json::Value::Number(n)) => n.as_i64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<i64>().ok(),
        Some(_) => None,
    };
    let text = || match value {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    };
    match parsed {
        Some(n) if n >= 1 => usize::try_from(n).map_err(|_| BootstrapError::InvalidPagesToShow(text())),
        _ => Err(BootstrapError::InvalidPagesToShow(text())),
    }
}

fn justify_content_class(value: &str) -> BootstrapResult<&'static str> {
    match value {
        "" => Ok(""),
        "start" => Ok("justify-content-start"),
        "center" => Ok("justify-content-center"),
        "end" => Ok("justify-content-end"),
        "between" => Ok("justify-content-between"),
        "around" => Ok("justify-content-around"),
        other => Err(BootstrapError::InvalidJustifyContent(other.to_string())),
    }
}

/// Computes the page window for `page`.
pub fn get_pagination_context<T>(
    page: &Page<T>,
    options: &PaginationOptions,
) -> BootstrapResult<PaginationContext> {
    let pages_to_show = parse_pages_to_show(options.pages_to_show.as_ref())?;
    let num_pages = page.num_pages;
    let current_page = page.number;
    let half = pages_to_show / 2;

    let mut first_page = current_page.saturating_sub(half).max(1);
    let mut pages_back = (first_page > 1).then(|| first_page.saturating_sub(half).max(1));
    let mut last_page = first_page + pages_to_show - 1;
    if pages_back.is_none() {
        last_page += 1;
    }
    last_page = last_page.min(num_pages);

    let pages_forward = if last_page < num_pages {
        Some((last_page + half).min(num_pages))
    } else {
        if first_page > 1 {
            first_page -= 1;
        }
        pages_back = pages_back.filter(|back| *back > 1).map(|back| back - 1);
        None
    };

    let mut parts = UrlParts::parse(options.url.as_deref().unwrap_or_default());
    if let Some(extra) = options.extra.as_deref().filter(|e| !e.is_empty()) {
        parts.query.extend(&QueryParams::parse(extra));
    }

    let size = parse_size_in(
        options.size.as_deref().unwrap_or_default(),
        Size::Md,
        &[Size::Sm, Size::Md, Size::Lg],
    )?;
    let size_class = get_size_class(size, "pagination", Some(Size::Md));
    let justify_class =
        justify_content_class(options.justify_content.as_deref().unwrap_or_default())?;

    Ok(PaginationContext {
        pagination_url: parts.to_string(),
        num_pages,
        current_page,
        first_page,
        last_page,
        pages_shown: (first_page..=last_page).collect(),
        pages_back,
        pages_forward,
        pagination_css_classes: merge_css_classes([
            "pagination",
            size_class.as_str(),
            justify_class,
            options.extra_classes.as_deref().unwrap_or_default(),
        ]),
        parameter_name: options
            .parameter_name
            .clone()
            .unwrap_or_else(|| "page".to_string()),
    })
}

impl PaginationContext {
    fn page_url(&self, number: usize) -> String {
        escape(&url_replace_param(
            &self.pagination_url,
            &self.parameter_name,
            Some(&number.to_string()),
        ))
    }

    fn item(class: &str, href: &str, text: &str) -> String {
        format!("<li class=\"{class}\"><a class=\"page-link\" href=\"{href}\">{text}</a></li>")
    }

    /// Renders the `<ul class="pagination">` list.
    pub fn render(&self) -> String {
        let mut items = String::new();

        let on_first = self.current_page == 1;
        items.push_str(&Self::item(
            if on_first { "page-item disabled" } else { "page-item" },
            &if on_first { "#".to_string() } else { self.page_url(1) },
            "&laquo;",
        ));
        if let Some(back) = self.pages_back {
            items.push_str(&Self::item("page-item", &self.page_url(back), "&hellip;"));
        }
        for &number in &self.pages_shown {
            let active = number == self.current_page;
            items.push_str(&Self::item(
                if active { "page-item active" } else { "page-item" },
                &if active { "#".to_string() } else { self.page_url(number) },
                &number.to_string(),
            ));
        }
        if let Some(forward) = self.pages_forward {
            items.push_str(&Self::item("page-item", &self.page_url(forward), "&hellip;"));
        }
        let on_last = self.current_page == self.num_pages;
        items.push_str(&Self::item(
            if on_last { "page-item disabled" } else { "page-item" },
            &if on_last { "#".to_string() } else { self.page_url(self.num_pages) },
            "&raquo;",
        ));

        format!(
            "<ul class=\"{}\">{items}</ul>",
            self.pagination_css_classes
        )
    }
}

/// Renders pagination controls for `page`.
pub fn render_pagination<T>(page: &Page<T>, options: &PaginationOptions) -> BootstrapResult<String> {
    Ok(get_pagination_context(page, options)?.render())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(number: usize, num_pages: usize, options: &PaginationOptions) -> PaginationContext {
        get_pagination_context(&Page::<()>::new(number, num_pages), options).unwrap()
    }

    #[test]
    fn test_window_at_start() {
        let ctx = context(1, 20, &PaginationOptions::new());
        assert_eq!(ctx.pages_shown, (1..=12).collect::<Vec<_>>());
        assert_eq!(ctx.pages_back, None);
        assert_eq!(ctx.pages_forward, Some(17));
    }

    #[test]
    fn test_window_in_middle() {
        let ctx = context(10, 20, &PaginationOptions::new());
        assert_eq!(ctx.first_page, 5);
        assert_eq!(ctx.last_page, 15);
        assert_eq!(ctx.pages_back, Some(1));
        assert_eq!(ctx.pages_forward, Some(20));
    }

    #[test]
    fn test_window_at_end() {
        let ctx = context(20, 20, &PaginationOptions::new());
        assert_eq!(ctx.pages_shown, (14..=20).collect::<Vec<_>>());
        assert_eq!(ctx.pages_back, Some(9));
        assert_eq!(ctx.pages_forward, None);
    }

    #[test]
    fn test_small_page_count() {
        let ctx = context(2, 3, &PaginationOptions::new());
        assert_eq!(ctx.pages_shown, vec![1, 2, 3]);
        assert_eq!(ctx.pages_back, None);
        assert_eq!(ctx.pages_forward, None);
    }

    #[test]
    fn test_pages_to_show_validation() {
        let page = Page::<()>::new(1, 5);
        let zero = PaginationOptions::new().pages_to_show(0);
        assert_eq!(
            get_pagination_context(&page, &zero).unwrap_err().to_string(),
            "Pagination pages_to_show should be a positive integer, you specified 0."
        );
        let text = PaginationOptions {
            pages_to_show: Some(serde_json::json!("3")),
            ..PaginationOptions::default()
        };
        assert_eq!(get_pagination_context(&page, &text).unwrap().pages_shown, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_css_classes_and_errors() {
        let ctx = context(
            1,
            2,
            &PaginationOptions::new().size("lg").justify_content("center"),
        );
        assert_eq!(
            ctx.pagination_css_classes,
            "pagination pagination-lg justify-content-center"
        );
        let page = Page::<()>::new(1, 2);
        assert!(get_pagination_context(&page, &PaginationOptions::new().justify_content("left")).is_err());
        assert!(get_pagination_context(&page, &PaginationOptions::new().size("xs")).is_err());
    }

    #[test]
    fn test_url_and_extra() {
        let ctx = context(
            1,
            2,
            &PaginationOptions::new().url("/list?q=a#top").extra("sort=name"),
        );
        assert_eq!(ctx.pagination_url, "/list?q=a&sort=name#top");
        assert_eq!(ctx.page_url(2), "/list?q=a&amp;sort=name&amp;page=2#top");
    }

    #[test]
    fn test_render_pagination() {
        let html = render_pagination(&Page::<()>::new(2, 3), &PaginationOptions::new().url("/items")).unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<ul class="pagination">"#,
                r#"<li class="page-item"><a class="page-link" href="/items?page=1">&laquo;</a></li>"#,
                r#"<li class="page-item"><a class="page-link" href="/items?page=1">1</a></li>"#,
                r##"<li class="page-item active"><a class="page-link" href="#">2</a></li>"##,
                r#"<li class="page-item"><a class="page-link" href="/items?page=3">3</a></li>"#,
                r#"<li class="page-item"><a class="page-link" href="/items?page=3">&raquo;</a></li>"#,
                "</ul>"
            )
        );
    }

    #[test]
    fn test_render_last_page_with_query() {
        let page = Page::<()>::new(2, 2);
        let html = render_pagination(&page, &PaginationOptions::new().url("/projects/?foo=bar")).unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<ul class="pagination">"#,
                r#"<li class="page-item"><a class="page-link" href="/projects/?foo=bar&amp;page=1">&laquo;</a></li>"#,
                r#"<li class="page-item"><a class="page-link" href="/projects/?foo=bar&amp;page=1">1</a></li>"#,
                r##"<li class="page-item active"><a class="page-link" href="#">2</a></li>"##,
                r##"<li class="page-item disabled"><a class="page-link" href="#">&raquo;</a></li>"##,
                "</ul>"
            )
        );

        let html = render_pagination(&page, &PaginationOptions::new().url("/projects/#id")).unwrap();
        assert!(html.contains("/projects/?page=1#id"));
        assert!(!html.contains("/projects/?page=2#id"));

        let html = render_pagination(&page, &PaginationOptions::new().url("/projects/?page=3#id")).unwrap();
        assert!(html.contains("/projects/?page=1#id"));
        assert!(!html.contains("/projects/?page=2#id"));

        let options = PaginationOptions::new().url("/projects/?page=3").extra("id=20");
        let html = render_pagination(&page, &options).unwrap();
        assert!(html.contains("/projects/?page=1&amp;id=20"));
        assert!(!html.contains("/projects/?page=2&amp;id=20"));
    }

    #[test]
    fn test_render_first_page_disables_previous() {
        let html = render_pagination(&Page::<()>::new(1, 1), &PaginationOptions::new()).unwrap();
        assert!(html.contains(r##"<li class="page-item disabled"><a class="page-link" href="#">&laquo;</a></li>"##));
        assert!(html.contains(r##"<li class="page-item disabled"><a class="page-link" href="#">&raquo;</a></li>"##));
    }
}
