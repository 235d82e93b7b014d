//! Sitemap settings.

use crate::config::error::{ConfigDiagnostics, FieldPath};
use crate::config::section;
use serde::Serialize;

/// Hostname the renderer uses when generating the sitemap.
#[derive(Debug, Clone, Serialize)]
pub struct SitemapConfig {
    pub hostname: String,
}

impl SitemapConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        section::require_url(FieldPath::new("sitemap.hostname"), &self.hostname, diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hostname_must_be_a_url() {
        let mut diag = ConfigDiagnostics::new();
        SitemapConfig {
            hostname: "ravitemer.github.io".to_owned(),
        }
        .validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_https_hostname_is_accepted() {
        let mut diag = ConfigDiagnostics::new();
        SitemapConfig {
            hostname: "https://ravitemer.github.io/mcphub.nvim/".to_owned(),
        }
        .validate(&mut diag);
        assert!(!diag.has_errors());
    }
}
