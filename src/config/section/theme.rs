//! Theme settings consumed by the renderer.
//!
//! Flat, independent keys: each is read on its own by the renderer, so
//! there are no cross-key invariants to hold.

use crate::config::error::{ConfigDiagnostics, FieldPath};
use crate::config::section::nav::{NavItem, NavNode};
use crate::config::section::{self, nav};
use serde::Serialize;

/// `themeConfig` region of the record: navigation plus presentation
/// settings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub nav: Vec<NavItem>,
    pub sidebar: Vec<NavNode>,
    pub outline: OutlineConfig,
    pub edit_link: EditLinkConfig,
    pub footer: FooterConfig,
    pub social_links: Vec<SocialLink>,
    pub search: SearchConfig,
}

impl ThemeConfig {
    /// Validate navigation and settings, collecting all findings.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        nav::validate_nav(&self.nav, diag);
        nav::validate_sidebar(&self.sidebar, diag);
        self.outline.validate(diag);
        self.edit_link.validate(diag);
        for (idx, social) in self.social_links.iter().enumerate() {
            social.validate(idx, diag);
        }
    }
}

// ============================================================================
// Outline
// ============================================================================

/// Heading levels shown in the on-page outline, as an inclusive range.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OutlineConfig {
    pub level: (u8, u8),
}

impl OutlineConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let (min, max) = self.level;
        if !(1..=6).contains(&min) || !(1..=6).contains(&max) || min > max {
            diag.error_with_hint(
                FieldPath::new("themeConfig.outline.level"),
                format!("invalid heading range [{min}, {max}]"),
                "use an ascending range of levels between 1 and 6, e.g. [2, 3]",
            );
        }
    }
}

// ============================================================================
// Edit link
// ============================================================================

/// Placeholder the renderer substitutes with the served page's path.
pub const PATH_PLACEHOLDER: &str = ":path";

/// Per-page "edit on repository host" link template.
#[derive(Debug, Clone, Serialize)]
pub struct EditLinkConfig {
    pub pattern: String,
    pub text: String,
}

impl EditLinkConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.pattern.contains(PATH_PLACEHOLDER) {
            diag.error_with_hint(
                FieldPath::new("themeConfig.editLink.pattern"),
                "edit link pattern has no page placeholder",
                format!("include '{PATH_PLACEHOLDER}' where the page path belongs"),
            );
        }
    }
}

// ============================================================================
// Footer and social links
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct FooterConfig {
    pub message: String,
    pub copyright: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub icon: String,
    pub link: String,
}

impl SocialLink {
    pub fn new(icon: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            link: link.into(),
        }
    }

    fn validate(&self, idx: usize, diag: &mut ConfigDiagnostics) {
        if self.icon.is_empty() {
            diag.error(
                FieldPath::new(format!("themeConfig.socialLinks[{idx}].icon")),
                "social link icon is empty",
            );
        }
        section::require_url(
            FieldPath::new(format!("themeConfig.socialLinks[{idx}].link")),
            &self.link,
            diag,
        );
    }
}

// ============================================================================
// Search
// ============================================================================

/// Search UI mode.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SearchConfig {
    pub provider: SearchProvider,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// Client-side index, no external service.
    Local,
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_rejects_descending_range() {
        let mut diag = ConfigDiagnostics::new();
        OutlineConfig { level: (3, 2) }.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_outline_rejects_out_of_bounds() {
        let mut diag = ConfigDiagnostics::new();
        OutlineConfig { level: (0, 7) }.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_outline_accepts_valid_range() {
        let mut diag = ConfigDiagnostics::new();
        OutlineConfig { level: (2, 3) }.validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_edit_link_requires_placeholder() {
        let mut diag = ConfigDiagnostics::new();
        EditLinkConfig {
            pattern: "https://github.com/ravitemer/mcphub.nvim/edit/main/doc/".to_owned(),
            text: "Edit this page".to_owned(),
        }
        .validate(&mut diag);
        assert!(diag.has_errors());
        assert_eq!(
            diag.errors()[0].field.as_str(),
            "themeConfig.editLink.pattern"
        );
    }

    #[test]
    fn test_social_link_requires_valid_url() {
        let mut diag = ConfigDiagnostics::new();
        SocialLink::new("github", "github.com/ravitemer").validate(0, &mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_search_provider_serializes_lowercase() {
        let value = serde_json::to_value(SearchConfig {
            provider: SearchProvider::Local,
        })
        .unwrap();
        assert_eq!(value, serde_json::json!({ "provider": "local" }));
    }
}
