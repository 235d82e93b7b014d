//! Configuration section definitions.
//!
//! Each module covers one region of the renderer-facing record:
//!
//! | Module    | Record region       | Purpose                          |
//! |-----------|---------------------|----------------------------------|
//! | `head`    | `head`              | Page-header injection directives |
//! | `nav`     | `themeConfig.nav` / `themeConfig.sidebar` | Navigation tree |
//! | `theme`   | `themeConfig`       | Footer, edit link, social, search|
//! | `sitemap` | `sitemap`           | Sitemap hostname                 |
//! | `mermaid` | `mermaid`           | Diagram plugin settings          |

pub mod head;
mod mermaid;
pub mod nav;
mod sitemap;
mod theme;

pub use head::{AnalyticsScript, HeadElement, ScriptDirective};
pub use mermaid::MermaidConfig;
pub use nav::{NavGroup, NavItem, NavLink, NavNode, VersionMenu};
pub use sitemap::SitemapConfig;
pub use theme::{
    EditLinkConfig, FooterConfig, OutlineConfig, SearchConfig, SearchProvider, SocialLink,
    ThemeConfig,
};

use crate::config::error::{ConfigDiagnostics, FieldPath};

/// Require `value` to be a well-formed http(s) URL, reporting against `field`.
pub(crate) fn require_url(field: FieldPath, value: &str, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field.clone(),
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            }
            if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL: {e}"),
                "use format like https://example.com",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(value: &str) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        require_url(FieldPath::new("sitemap.hostname"), value, &mut diag);
        diag
    }

    #[test]
    fn test_require_url_accepts_https() {
        assert!(!check("https://example.com/docs/").has_errors());
    }

    #[test]
    fn test_require_url_rejects_scheme() {
        assert!(check("ftp://example.com").has_errors());
    }

    #[test]
    fn test_require_url_rejects_garbage() {
        assert!(check("not a url").has_errors());
    }
}
