//! Navigation tree: top-nav items and the nested sidebar.
//!
//! The tree is literal, statically authored data. `items` order is
//! rendering order and is never sorted; `collapsed` only controls the
//! default expansion state. Groups can be disabled: they stay in the
//! authored definition but are pruned before the record is emitted.

use crate::config::error::{ConfigDiagnostics, FieldPath};
use rustc_hash::FxHashSet;
use serde::ser::{Serialize, SerializeMap, Serializer};

// ============================================================================
// Node types
// ============================================================================

/// Leaf navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NavLink {
    pub text: String,
    pub link: String,
}

impl NavLink {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// Collapsible group of sidebar entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavGroup {
    pub text: String,
    /// Optional landing page for the group itself.
    pub link: Option<String>,
    /// Default expansion state; does not affect reachability.
    pub collapsed: bool,
    /// Disabled groups are kept as authored data but never emitted.
    pub enabled: bool,
    pub items: Vec<NavNode>,
}

impl NavGroup {
    pub fn new(text: impl Into<String>, items: Vec<NavNode>) -> Self {
        Self {
            text: text.into(),
            link: None,
            collapsed: false,
            enabled: true,
            items,
        }
    }

    /// Collapse the group by default.
    pub fn collapsed(mut self) -> Self {
        self.collapsed = true;
        self
    }

    /// Give the group its own landing page.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Keep the group in the authored definition without emitting it.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// A node in the sidebar tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavNode {
    Link(NavLink),
    Group(NavGroup),
}

impl NavNode {
    pub fn link(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self::Link(NavLink::new(text, link))
    }
}

impl From<NavGroup> for NavNode {
    fn from(group: NavGroup) -> Self {
        Self::Group(group)
    }
}

/// Top-nav entry: a plain link or a dropdown menu labeled with the
/// resolved version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItem {
    Link(NavLink),
    Menu(VersionMenu),
}

/// Top-nav dropdown whose label is the resolved version.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct VersionMenu {
    pub text: String,
    pub items: Vec<NavLink>,
}

// ============================================================================
// Renderer-facing serialization
// ============================================================================

impl Serialize for NavNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Link(link) => link.serialize(serializer),
            Self::Group(group) => group.serialize(serializer),
        }
    }
}

impl Serialize for NavGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // `enabled` is authoring-side state, never emitted.
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("text", &self.text)?;
        if let Some(link) = &self.link {
            map.serialize_entry("link", link)?;
        }
        map.serialize_entry("collapsed", &self.collapsed)?;
        map.serialize_entry("items", &self.items)?;
        map.end()
    }
}

impl Serialize for NavItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Link(link) => link.serialize(serializer),
            Self::Menu(menu) => menu.serialize(serializer),
        }
    }
}

// ============================================================================
// Pruning
// ============================================================================

/// Drop disabled groups, recursively, preserving the order of the rest.
pub fn prune_disabled(nodes: &mut Vec<NavNode>) {
    nodes.retain(|node| match node {
        NavNode::Link(_) => true,
        NavNode::Group(group) => group.enabled,
    });
    for node in nodes.iter_mut() {
        if let NavNode::Group(group) = node {
            prune_disabled(&mut group.items);
        }
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Validate the sidebar tree: every link non-empty, root-relative, and
/// unique. Duplicates are warnings; the rest are errors.
pub fn validate_sidebar(nodes: &[NavNode], diag: &mut ConfigDiagnostics) {
    let mut seen = FxHashSet::default();
    walk(nodes, "themeConfig.sidebar", &mut seen, diag);
}

fn walk(
    nodes: &[NavNode],
    prefix: &str,
    seen: &mut FxHashSet<String>,
    diag: &mut ConfigDiagnostics,
) {
    for (idx, node) in nodes.iter().enumerate() {
        let path = format!("{prefix}[{idx}]");
        match node {
            NavNode::Link(link) => check_sidebar_link(&link.link, &path, seen, diag),
            NavNode::Group(group) => {
                if let Some(link) = &group.link {
                    check_sidebar_link(link, &path, seen, diag);
                }
                walk(&group.items, &format!("{path}.items"), seen, diag);
            }
        }
    }
}

fn check_sidebar_link(
    link: &str,
    path: &str,
    seen: &mut FxHashSet<String>,
    diag: &mut ConfigDiagnostics,
) {
    let field = FieldPath::new(format!("{path}.link"));
    if link.is_empty() {
        diag.error(field, "sidebar link is empty");
    } else if !link.starts_with('/') {
        diag.error_with_hint(
            field,
            format!("sidebar link '{link}' is not root-relative"),
            "links must start with '/'",
        );
    } else if !seen.insert(link.to_owned()) {
        diag.warn(field, format!("duplicate sidebar link '{link}'"));
    }
}

/// Validate top-nav entries. Menu links may be absolute URLs, so only
/// emptiness is checked.
pub fn validate_nav(items: &[NavItem], diag: &mut ConfigDiagnostics) {
    for (idx, item) in items.iter().enumerate() {
        match item {
            NavItem::Link(link) => {
                if link.link.is_empty() {
                    diag.error(
                        FieldPath::new(format!("themeConfig.nav[{idx}].link")),
                        "nav link is empty",
                    );
                }
            }
            NavItem::Menu(menu) => {
                for (entry, link) in menu.items.iter().enumerate() {
                    if link.link.is_empty() {
                        diag.error(
                            FieldPath::new(format!("themeConfig.nav[{idx}].items[{entry}].link")),
                            "nav menu link is empty",
                        );
                    }
                }
            }
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_tree() -> Vec<NavNode> {
        vec![
            NavNode::link("Getting started", "/"),
            NavGroup::new(
                "Setup",
                vec![
                    NavNode::link("Installation", "/installation"),
                    NavGroup::new("Advanced", vec![NavNode::link("Hooks", "/advanced/hooks")])
                        .collapsed()
                        .into(),
                ],
            )
            .into(),
        ]
    }

    #[test]
    fn test_valid_tree_passes() {
        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&sample_tree(), &mut diag);
        assert!(!diag.has_errors());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_empty_link_is_rejected() {
        let mut tree = sample_tree();
        tree.push(NavNode::link("Broken", ""));
        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&tree, &mut diag);
        assert!(diag.has_errors());
        assert_eq!(diag.errors()[0].field.as_str(), "themeConfig.sidebar[2].link");
    }

    #[test]
    fn test_relative_link_is_rejected() {
        let tree = vec![NavNode::link("Broken", "installation")];
        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&tree, &mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_duplicate_link_is_a_warning() {
        let tree = vec![
            NavNode::link("One", "/installation"),
            NavNode::link("Two", "/installation"),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&tree, &mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_nested_errors_carry_their_path() {
        let tree = vec![
            NavGroup::new("Setup", vec![NavNode::link("Broken", "nested")]).into(),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&tree, &mut diag);
        assert_eq!(
            diag.errors()[0].field.as_str(),
            "themeConfig.sidebar[0].items[0].link"
        );
    }

    #[test]
    fn test_prune_removes_disabled_groups() {
        let mut tree = sample_tree();
        tree.push(
            NavGroup::new("Usage", vec![NavNode::link("Introduction", "/usage/introduction")])
                .disabled()
                .into(),
        );
        prune_disabled(&mut tree);
        assert_eq!(tree.len(), 2);
        assert!(tree.iter().all(|node| match node {
            NavNode::Group(group) => group.text != "Usage",
            NavNode::Link(_) => true,
        }));
    }

    #[test]
    fn test_prune_recurses_into_groups() {
        let mut tree = vec![
            NavGroup::new(
                "Setup",
                vec![
                    NavNode::link("Installation", "/installation"),
                    NavGroup::new("Old", Vec::new()).disabled().into(),
                ],
            )
            .into(),
        ];
        prune_disabled(&mut tree);
        match &tree[0] {
            NavNode::Group(group) => assert_eq!(group.items.len(), 1),
            NavNode::Link(_) => panic!("expected group"),
        }
    }

    #[test]
    fn test_group_serializes_without_enabled() {
        let group: NavNode = NavGroup::new("Setup", vec![NavNode::link("Installation", "/installation")])
            .collapsed()
            .into();
        let value = serde_json::to_value(group).unwrap();
        assert_eq!(
            value,
            json!({
                "text": "Setup",
                "collapsed": true,
                "items": [{ "text": "Installation", "link": "/installation" }]
            })
        );
    }

    #[test]
    fn test_group_with_link_serializes_link() {
        let group: NavNode = NavGroup::new("Chat", Vec::new()).with_link("/chat/").into();
        let value = serde_json::to_value(group).unwrap();
        assert_eq!(value["link"], json!("/chat/"));
    }

    #[test]
    fn test_version_menu_serializes_as_dropdown() {
        let item = NavItem::Menu(VersionMenu {
            text: "v2.3.1".to_owned(),
            items: vec![NavLink::new("Changelog", "https://example.com/CHANGELOG.md")],
        });
        let value = serde_json::to_value(item).unwrap();
        assert_eq!(value["text"], json!("v2.3.1"));
        assert_eq!(value["items"][0]["text"], json!("Changelog"));
    }
}
