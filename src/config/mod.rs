//! Site configuration model and resolution.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Record regions
//! │   ├── head       # Page-header injection directives
//! │   ├── nav        # Top nav + sidebar tree
//! │   ├── theme      # Footer, edit link, social, search
//! │   ├── sitemap    # Sitemap hostname
//! │   └── mermaid    # Diagram plugin settings
//! ├── error.rs       # ConfigError, diagnostics, field paths
//! └── mod.rs         # SiteConfig / SiteDefinition (this file)
//! ```
//!
//! [`SiteConfig::resolve`] is the single entry point: it takes the
//! authored [`SiteDefinition`], binds the environment-dependent pieces
//! (version label, analytics script), prunes disabled navigation
//! sections, validates the result, and hands back the record the
//! renderer consumes.

pub mod error;
pub mod section;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use section::{
    AnalyticsScript, EditLinkConfig, FooterConfig, HeadElement, MermaidConfig, NavGroup, NavItem,
    NavLink, NavNode, OutlineConfig, ScriptDirective, SearchConfig, SearchProvider, SitemapConfig,
    SocialLink, ThemeConfig, VersionMenu,
};

use crate::env::BuildEnv;
use crate::version::{self, TagSource};
use section::{head, nav};
use serde::Serialize;

// ============================================================================
// Authored definition
// ============================================================================

/// Authored site definition before environment resolution.
///
/// Everything here is literal data. [`SiteConfig::resolve`] binds the
/// version label and the environment-dependent head entries into it.
#[derive(Debug, Clone)]
pub struct SiteDefinition {
    pub title: String,
    pub description: String,
    /// Root path the site is served under (e.g. `/mcphub.nvim/`).
    pub base: String,
    /// Hostname for sitemap generation.
    pub site_url: String,
    pub logo: Option<String>,
    /// Head entries injected in every environment, in order.
    pub base_head: Vec<HeadElement>,
    /// Analytics script appended to the head in production only.
    pub analytics: AnalyticsScript,
    /// Entries of the top-nav version dropdown.
    pub version_menu: Vec<NavLink>,
    pub sidebar: Vec<NavNode>,
    pub mermaid: MermaidConfig,
    pub outline: OutlineConfig,
    pub edit_link: EditLinkConfig,
    pub footer: FooterConfig,
    pub social_links: Vec<SocialLink>,
    pub search: SearchConfig,
}

// ============================================================================
// Resolved record
// ============================================================================

/// Root configuration record handed to the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub head: Vec<HeadElement>,
    pub base: String,
    pub sitemap: SitemapConfig,
    pub mermaid: MermaidConfig,
    #[serde(rename = "themeConfig")]
    pub theme: ThemeConfig,
}

impl SiteConfig {
    /// Resolve the configuration record for `env`.
    ///
    /// Version-tag lookup failures never fail the call; structural
    /// problems in the authored definition do, with every finding
    /// collected into one error.
    pub fn resolve(
        definition: SiteDefinition,
        env: BuildEnv,
        tags: &dyn TagSource,
    ) -> Result<Self, ConfigError> {
        let SiteDefinition {
            title,
            description,
            base,
            site_url,
            logo,
            base_head,
            analytics,
            version_menu,
            mut sidebar,
            mermaid,
            outline,
            edit_link,
            footer,
            social_links,
            search,
        } = definition;

        let mut diag = ConfigDiagnostics::new();
        section::require_url(FieldPath::new("analytics.src"), &analytics.src, &mut diag);

        let label = version::resolve_label(env, tags);
        let head = head::assemble(&base_head, env, &analytics);
        nav::prune_disabled(&mut sidebar);

        let config = Self {
            title,
            description,
            head,
            base,
            sitemap: SitemapConfig { hostname: site_url },
            mermaid,
            theme: ThemeConfig {
                logo,
                nav: vec![NavItem::Menu(VersionMenu {
                    text: label,
                    items: version_menu,
                })],
                sidebar,
                outline,
                edit_link,
                footer,
                social_links,
                search,
            },
        };

        config.collect(&mut diag);
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)?;
        Ok(config)
    }

    /// Record-level validation checks.
    fn collect(&self, diag: &mut ConfigDiagnostics) {
        if self.title.is_empty() {
            diag.error(FieldPath::new("title"), "site title is empty");
        }
        if !self.base.starts_with('/') || !self.base.ends_with('/') {
            diag.error_with_hint(
                FieldPath::new("base"),
                format!("base path '{}' must start and end with '/'", self.base),
                "use format like /docs/",
            );
        }
        self.sitemap.validate(diag);
        self.theme.validate(diag);
    }

    /// Serialize to the renderer's JSON representation.
    pub fn to_json(&self, pretty: bool) -> Result<String, ConfigError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Label displayed on the top-nav version dropdown.
    pub fn version_label(&self) -> Option<&str> {
        self.theme.nav.iter().find_map(|item| match item {
            NavItem::Menu(menu) => Some(menu.text.as_str()),
            NavItem::Link(_) => None,
        })
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site;
    use crate::version::StaticTags;

    #[test]
    fn test_development_resolution() {
        let config =
            SiteConfig::resolve(site::definition(), BuildEnv::Development, &StaticTags(None))
                .unwrap();
        assert!(config.head.is_empty());
        assert_eq!(config.version_label(), Some(version::DEFAULT_LABEL));
    }

    #[test]
    fn test_production_binds_tag_and_analytics() {
        let config = SiteConfig::resolve(
            site::definition(),
            BuildEnv::Production,
            &StaticTags(Some("v2.3.1")),
        )
        .unwrap();
        assert_eq!(config.version_label(), Some("v2.3.1"));
        assert_eq!(config.head.len(), 1);
        assert!(matches!(config.head[0], HeadElement::Script(_)));
    }

    #[test]
    fn test_production_tag_failure_degrades_to_default() {
        let config =
            SiteConfig::resolve(site::definition(), BuildEnv::Production, &StaticTags(None))
                .unwrap();
        assert_eq!(config.version_label(), Some(version::DEFAULT_LABEL));
        // Analytics injection is environment-driven, not tag-driven.
        assert_eq!(config.head.len(), 1);
    }

    #[test]
    fn test_malformed_sidebar_is_rejected() {
        let mut definition = site::definition();
        definition.sidebar.push(NavNode::link("Broken", ""));
        let err =
            SiteConfig::resolve(definition, BuildEnv::Development, &StaticTags(None)).unwrap_err();
        match err {
            ConfigError::Diagnostics(diag) => {
                assert!(diag.has_errors());
                assert!(
                    diag.errors()
                        .iter()
                        .any(|e| e.field.as_str().ends_with(".link"))
                );
            }
            other => panic!("expected diagnostics, got: {other}"),
        }
    }

    #[test]
    fn test_invalid_base_is_rejected() {
        let mut definition = site::definition();
        definition.base = "mcphub.nvim".to_owned();
        let result = SiteConfig::resolve(definition, BuildEnv::Development, &StaticTags(None));
        assert!(result.is_err());
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let resolve = || {
            SiteConfig::resolve(
                site::definition(),
                BuildEnv::Production,
                &StaticTags(Some("v1.0.0")),
            )
            .unwrap()
            .to_json(false)
            .unwrap()
        };
        assert_eq!(resolve(), resolve());
    }

    #[test]
    fn test_record_shape() {
        let config = SiteConfig::resolve(
            site::definition(),
            BuildEnv::Production,
            &StaticTags(Some("v2.3.1")),
        )
        .unwrap();
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["head"][0][0], serde_json::json!("script"));
        assert_eq!(value["themeConfig"]["nav"][0]["text"], serde_json::json!("v2.3.1"));
        assert_eq!(value["themeConfig"]["search"]["provider"], serde_json::json!("local"));
        assert_eq!(value["mermaid"]["securityLevel"], serde_json::json!("loose"));
        assert!(value["themeConfig"]["editLink"]["pattern"]
            .as_str()
            .unwrap()
            .contains(":path"));
    }
}
