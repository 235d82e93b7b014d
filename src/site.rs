//! The authored site definition for the MCP Hub documentation.
//!
//! Everything in this module is literal data: the navigation tree, the
//! head entries, and the site-wide settings, exactly as the docs team
//! authored them. [`resolve`] is the entry point that binds a build
//! environment and a tag source to this definition.

use crate::config::{
    AnalyticsScript, ConfigError, EditLinkConfig, FooterConfig, MermaidConfig, NavGroup, NavLink,
    NavNode, OutlineConfig, SearchConfig, SearchProvider, SiteConfig, SiteDefinition, SocialLink,
};
use crate::env::BuildEnv;
use crate::version::TagSource;

/// Hostname used for sitemap generation.
const SITE_URL: &str = "https://ravitemer.github.io/mcphub.nvim/";

/// Repository the edit links and version menu point at.
const REPO_URL: &str = "https://github.com/ravitemer/mcphub.nvim";

/// Resolve the authored definition for `env`.
pub fn resolve(env: BuildEnv, tags: &dyn TagSource) -> Result<SiteConfig, ConfigError> {
    SiteConfig::resolve(definition(), env, tags)
}

/// Build the authored site definition.
pub fn definition() -> SiteDefinition {
    SiteDefinition {
        title: "MCP HUB".to_owned(),
        description: "A powerful Neovim plugin that integrates MCP (Model Context Protocol) \
                      servers into your workflow. Configure and manage MCP servers through a \
                      centralized config file while providing an intuitive UI for browsing, \
                      installing and testing tools and resources. Perfect for LLM integration, \
                      offering both programmatic API access and interactive testing capabilities \
                      through the `:MCPHub` command."
            .to_owned(),
        base: "/mcphub.nvim/".to_owned(),
        site_url: SITE_URL.to_owned(),
        logo: Some(
            "https://github.com/user-attachments/assets/5cdf9d69-3de7-458b-a670-5153a97c544a"
                .to_owned(),
        ),
        base_head: Vec::new(),
        analytics: AnalyticsScript {
            src: "https://cloud.umami.is/script.js".to_owned(),
            website_id: "a080d520-2689-406a-bee3-c45c44b2d70e".to_owned(),
        },
        version_menu: vec![
            NavLink::new("Changelog", format!("{REPO_URL}/blob/main/CHANGELOG.md")),
            NavLink::new("Contributing", format!("{REPO_URL}/blob/main/CONTRIBUTING.md")),
        ],
        sidebar: sidebar(),
        mermaid: MermaidConfig::default(),
        outline: OutlineConfig { level: (2, 3) },
        edit_link: EditLinkConfig {
            pattern: format!("{REPO_URL}/edit/main/doc/:path"),
            text: "Edit this page on GitHub".to_owned(),
        },
        footer: FooterConfig {
            message: "Released under the MIT License.".to_owned(),
            copyright: "Copyright © 2025-present Ravitemer".to_owned(),
        },
        social_links: vec![
            SocialLink::new("githubsponsors", "https://github.com/sponsors/ravitemer"),
            SocialLink::new("discord", "https://discord.gg/NTqfxXsNuN"),
            SocialLink::new("x", "https://x.com/ravitemer"),
            SocialLink::new("github", REPO_URL),
        ],
        search: SearchConfig {
            provider: SearchProvider::Local,
        },
    }
}

fn sidebar() -> Vec<NavNode> {
    vec![
        NavNode::link("Getting started", "/"),
        NavGroup::new(
            "Setup",
            vec![
                NavNode::link("Installation", "/installation"),
                NavNode::link("Configuration", "/configuration"),
            ],
        )
        .into(),
        NavGroup::new(
            "MCP Servers",
            vec![
                NavNode::link("servers.json", "/mcp/servers_json"),
                NavGroup::new(
                    "Lua MCP Servers",
                    vec![
                        NavNode::link("Why", "/mcp/native/why"),
                        NavNode::link("Registration", "/mcp/native/registration"),
                        NavNode::link("Add Tools", "/mcp/native/tools"),
                        NavNode::link("Add Resources", "/mcp/native/resources"),
                        NavNode::link("Add Prompts", "/mcp/native/prompts"),
                        NavNode::link("Best Practices", "/mcp/native/best-practices"),
                    ],
                )
                .collapsed()
                .into(),
            ],
        )
        .into(),
        NavGroup::new(
            "Extensions",
            vec![
                NavNode::link("Avante", "/extensions/avante"),
                NavNode::link("CodeCompanion", "/extensions/codecompanion"),
                NavNode::link("CopilotChat", "/extensions/copilotchat"),
                NavNode::link("Lualine", "/extensions/lualine"),
            ],
        )
        .into(),
        NavGroup::new(
            "Other",
            vec![
                NavNode::link("Showcase", "/other/demos"),
                NavNode::link("API", "/other/api"),
                NavNode::link("How it works", "/other/architecture"),
                NavNode::link("Troubleshooting", "/other/troubleshooting"),
            ],
        )
        .into(),
        // Shipped disabled while the usage docs are reworked; kept so the
        // section survives as authored data without being emitted.
        usage_section(),
    ]
}

fn usage_section() -> NavNode {
    NavGroup::new(
        "Usage",
        vec![
            NavNode::link("Introduction", "/usage/introduction"),
            NavNode::link("Action Palette", "/usage/action-palette"),
            NavGroup::new(
                "Chat Buffer",
                vec![
                    NavNode::link("Agents/Tools", "/usage/chat-buffer/agents"),
                    NavNode::link("Slash Commands", "/usage/chat-buffer/slash-commands"),
                    NavNode::link("Variables", "/usage/chat-buffer/variables"),
                ],
            )
            .with_link("/usage/chat-buffer/")
            .collapsed()
            .into(),
            NavNode::link("Events", "/usage/events"),
            NavNode::link("Inline Assistant", "/usage/inline-assistant"),
            NavNode::link("User Interface", "/usage/ui"),
            NavNode::link("Workflows", "/usage/workflows"),
        ],
    )
    .disabled()
    .into()
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::StaticTags;

    fn group_names(nodes: &[NavNode]) -> Vec<&str> {
        nodes
            .iter()
            .filter_map(|node| match node {
                NavNode::Group(group) => Some(group.text.as_str()),
                NavNode::Link(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_definition_resolves_cleanly_in_both_environments() {
        assert!(resolve(BuildEnv::Development, &StaticTags(None)).is_ok());
        assert!(resolve(BuildEnv::Production, &StaticTags(Some("v2.3.1"))).is_ok());
    }

    #[test]
    fn test_authored_sidebar_keeps_the_disabled_section() {
        let definition = definition();
        assert!(group_names(&definition.sidebar).contains(&"Usage"));
    }

    #[test]
    fn test_resolved_sidebar_prunes_the_disabled_section() {
        let config = resolve(BuildEnv::Development, &StaticTags(None)).unwrap();
        let names = group_names(&config.theme.sidebar);
        assert_eq!(names, vec!["Setup", "MCP Servers", "Extensions", "Other"]);
    }

    #[test]
    fn test_version_menu_entries() {
        let definition = definition();
        let texts: Vec<_> = definition
            .version_menu
            .iter()
            .map(|link| link.text.as_str())
            .collect();
        assert_eq!(texts, vec!["Changelog", "Contributing"]);
    }

    #[test]
    fn test_sidebar_order_is_authoring_order() {
        let config = resolve(BuildEnv::Development, &StaticTags(None)).unwrap();
        match &config.theme.sidebar[0] {
            NavNode::Link(link) => {
                assert_eq!(link.text, "Getting started");
                assert_eq!(link.link, "/");
            }
            NavNode::Group(_) => panic!("expected leading leaf entry"),
        }
    }
}
