//! Page-header injection directives.
//!
//! Every element here is injected into the `<head>` of each emitted page.
//! The list is environment-dependent: production appends the analytics
//! script, development builds never carry it.

use crate::env::BuildEnv;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

// ============================================================================
// Head elements
// ============================================================================

/// An element injected into emitted page heads.
///
/// Serializes to the renderer's `[tag, {attributes}]` tuple shape; the
/// serializer handles every variant exhaustively so a malformed entry
/// cannot slip through to render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadElement {
    /// External script reference.
    Script(ScriptDirective),
    /// `<meta>` tag with literal attributes, in order.
    Meta(Vec<(String, String)>),
}

/// External script with optional `defer` and extra data attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptDirective {
    pub src: String,
    pub defer: bool,
    /// Extra attributes emitted verbatim after `src`, in order
    /// (e.g. `data-website-id`).
    pub data: Vec<(String, String)>,
}

impl Serialize for HeadElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Script(script) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element("script")?;
                seq.serialize_element(&ScriptAttrs(script))?;
                seq.end()
            }
            Self::Meta(attrs) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element("meta")?;
                seq.serialize_element(&Attrs(attrs))?;
                seq.end()
            }
        }
    }
}

/// Literal attribute pairs as a JSON object.
struct Attrs<'a>(&'a [(String, String)]);

impl Serialize for Attrs<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Script attributes in the renderer's spelling: `defer` is the string
/// `"true"` when set, then `src`, then the data attributes.
struct ScriptAttrs<'a>(&'a ScriptDirective);

impl Serialize for ScriptAttrs<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let script = self.0;
        let mut map = serializer.serialize_map(None)?;
        if script.defer {
            map.serialize_entry("defer", "true")?;
        }
        map.serialize_entry("src", &script.src)?;
        for (key, value) in &script.data {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// ============================================================================
// Analytics
// ============================================================================

/// Analytics script injected only into production builds.
#[derive(Debug, Clone)]
pub struct AnalyticsScript {
    pub src: String,
    pub website_id: String,
}

impl AnalyticsScript {
    /// Head element carrying this script.
    pub fn directive(&self) -> HeadElement {
        HeadElement::Script(ScriptDirective {
            src: self.src.clone(),
            defer: true,
            data: vec![("data-website-id".to_owned(), self.website_id.clone())],
        })
    }
}

/// Assemble the head-injection list for `env`.
///
/// `base` is an arbitrary prefix; the analytics directive is appended
/// only for production builds.
pub fn assemble(base: &[HeadElement], env: BuildEnv, analytics: &AnalyticsScript) -> Vec<HeadElement> {
    let mut head = base.to_vec();
    if env.is_production() {
        head.push(analytics.directive());
    }
    head
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn analytics() -> AnalyticsScript {
        AnalyticsScript {
            src: "https://cloud.umami.is/script.js".to_owned(),
            website_id: "a080d520".to_owned(),
        }
    }

    #[test]
    fn test_production_appends_analytics() {
        let head = assemble(&[], BuildEnv::Production, &analytics());
        assert_eq!(head.len(), 1);
        assert_eq!(head[0], analytics().directive());
    }

    #[test]
    fn test_development_omits_analytics() {
        let head = assemble(&[], BuildEnv::Development, &analytics());
        assert!(head.is_empty());
    }

    #[test]
    fn test_base_is_a_prefix_not_a_constant() {
        let base = vec![HeadElement::Meta(vec![(
            "name".to_owned(),
            "darkreader-lock".to_owned(),
        )])];
        let head = assemble(&base, BuildEnv::Production, &analytics());
        assert_eq!(head.len(), 2);
        assert_eq!(head[0], base[0]);

        let head = assemble(&base, BuildEnv::Development, &analytics());
        assert_eq!(head, base);
    }

    #[test]
    fn test_script_serializes_to_tuple_shape() {
        let value = serde_json::to_value(analytics().directive()).unwrap();
        assert_eq!(
            value,
            json!([
                "script",
                {
                    "defer": "true",
                    "src": "https://cloud.umami.is/script.js",
                    "data-website-id": "a080d520"
                }
            ])
        );
    }

    #[test]
    fn test_meta_serializes_to_tuple_shape() {
        let element = HeadElement::Meta(vec![
            ("name".to_owned(), "theme-color".to_owned()),
            ("content".to_owned(), "#fff".to_owned()),
        ]);
        let value = serde_json::to_value(element).unwrap();
        assert_eq!(value, json!(["meta", { "name": "theme-color", "content": "#fff" }]));
    }

    #[test]
    fn test_undeferred_script_has_no_defer_attr() {
        let element = HeadElement::Script(ScriptDirective {
            src: "https://example.com/a.js".to_owned(),
            defer: false,
            data: Vec::new(),
        });
        let value = serde_json::to_value(element).unwrap();
        assert_eq!(value, json!(["script", { "src": "https://example.com/a.js" }]));
    }
}
