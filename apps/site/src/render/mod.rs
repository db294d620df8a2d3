// Page Renderer — server-side HTML from content + assets + chart specs.
// Handlers build an explicit ViewState per request and pass it in; the
// rendered page round-trips that state through plain links.

pub mod home;
pub mod projects;

// Re-export the public API consumed by the route handlers.
pub use home::render_home;
pub use projects::render_projects;

use crate::models::Category;

// ────────────────────────────────────────────────────────────────────────────
// View state
// ────────────────────────────────────────────────────────────────────────────

/// The two-page navigation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Projects,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Projects => "Projects",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Tab::Home => "/",
            Tab::Projects => "/projects",
        }
    }
}

/// The whole per-request view state: current tab and current filter
/// selection. Owned by the renderer session, never stored server-side —
/// links in the rendered page carry it back on the next request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub tab: Tab,
    pub selection: Category,
}

impl ViewState {
    pub fn home(selection: Category) -> Self {
        Self {
            tab: Tab::Home,
            selection,
        }
    }

    pub fn projects() -> Self {
        Self {
            tab: Tab::Projects,
            selection: Category::All,
        }
    }

    /// The home-page link that re-enters this state with `selection` applied.
    pub fn home_link(selection: Category) -> String {
        match selection {
            Category::All => "/".to_string(),
            other => format!("/?category={}", encode_query_value(other.label())),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Page chrome
// ────────────────────────────────────────────────────────────────────────────

/// Built-in styling used when the optional stylesheet is missing.
const FALLBACK_CSS: &str = "body{font-family:sans-serif;margin:2rem auto;max-width:960px;}\
nav a{margin-right:1rem;}\
.notice{background:#eef4f8;padding:0.5rem 1rem;border-radius:6px;color:#333;}";

/// Wraps a body in the shared page chrome: head, stylesheet (or fallback
/// plus a visible warning), and the two-tab navigation.
pub fn page(title: &str, stylesheet: Option<&str>, active: Tab, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    match stylesheet {
        Some(css) => html.push_str(&format!("<style>{css}</style>\n")),
        None => html.push_str(&format!("<style>{FALLBACK_CSS}</style>\n")),
    }
    html.push_str("</head>\n<body>\n");
    if stylesheet.is_none() {
        html.push_str(
            "<div class=\"notice\">Stylesheet not found: styles/main.css; using built-in \
             styles.</div>\n",
        );
    }
    html.push_str("<nav>");
    for tab in [Tab::Home, Tab::Projects] {
        if tab == active {
            html.push_str(&format!("<span class=\"tab active\">{}</span>", tab.label()));
        } else {
            html.push_str(&format!(
                "<a class=\"tab\" href=\"{}\">{}</a>",
                tab.path(),
                tab.label()
            ));
        }
    }
    html.push_str("</nav>\n");
    html.push_str(body);
    html.push_str("\n</body>\n</html>\n");
    html
}

// ────────────────────────────────────────────────────────────────────────────
// Escaping helpers
// ────────────────────────────────────────────────────────────────────────────

/// Minimal HTML escaping for text interpolated into markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Percent-encodes a query-parameter value. Only the characters the fixed
/// category vocabulary can contain need handling, plus `%` itself.
pub fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '%' => out.push_str("%25"),
            '&' => out.push_str("%26"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            '+' => out.push_str("%2B"),
            ' ' => out.push_str("%20"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("M&A <Predictor> \"beta\""),
            "M&amp;A &lt;Predictor&gt; &quot;beta&quot;"
        );
    }

    #[test]
    fn test_encode_query_value_covers_vocabulary() {
        assert_eq!(
            encode_query_value("Analysis & Visualization Report"),
            "Analysis%20%26%20Visualization%20Report"
        );
        assert_eq!(
            encode_query_value("Machine Learning Model"),
            "Machine%20Learning%20Model"
        );
    }

    #[test]
    fn test_home_link_all_is_bare_root() {
        assert_eq!(ViewState::home_link(Category::All), "/");
        assert_eq!(
            ViewState::home_link(Category::AwsCloudComputing),
            "/?category=AWS%20Cloud%20Computing"
        );
    }

    #[test]
    fn test_page_marks_active_tab() {
        let html = page("t", Some("body{}"), Tab::Home, "<p>x</p>");
        assert!(html.contains("<span class=\"tab active\">Home</span>"));
        assert!(html.contains("<a class=\"tab\" href=\"/projects\">Projects</a>"));
    }

    #[test]
    fn test_page_warns_when_stylesheet_missing() {
        let html = page("t", None, Tab::Home, "");
        assert!(html.contains("Stylesheet not found"));
        assert!(html.contains(FALLBACK_CSS));
    }

    #[test]
    fn test_page_embeds_stylesheet_without_warning() {
        let html = page("t", Some(".timeline{}"), Tab::Home, "");
        assert!(html.contains("<style>.timeline{}</style>"));
        assert!(!html.contains("Stylesheet not found"));
    }
}
