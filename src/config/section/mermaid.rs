//! Diagram plugin settings.
//!
//! The diagram renderer is an external collaborator; only its two knobs
//! are carried in the record.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MermaidConfig {
    /// Plugin security level. `loose` allows CSS variables to apply.
    pub security_level: String,
    /// Base theme name.
    pub theme: String,
}

impl Default for MermaidConfig {
    fn default() -> Self {
        Self {
            security_level: "loose".to_owned(),
            theme: "base".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(MermaidConfig::default()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "securityLevel": "loose", "theme": "base" })
        );
    }
}
