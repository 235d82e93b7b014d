//! Build environment detection.

/// Environment variable consulted when no CLI flag decides the mode.
pub const ENV_VAR: &str = "SITE_ENV";

/// Build environment for a single resolver invocation.
///
/// Controls the two environment-dependent outputs: whether the analytics
/// script is injected into page heads, and whether the version label is
/// derived from VCS tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildEnv {
    /// Production build: analytics injected, version derived from tags.
    Production,

    /// Development build: no analytics, default version label.
    #[default]
    Development,
}

impl BuildEnv {
    /// Detect the environment from `SITE_ENV`. Anything other than
    /// `production` (case-insensitive) is a development build.
    pub fn from_env() -> Self {
        std::env::var(ENV_VAR)
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }

    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Development
        }
    }

    /// Check if this is a production build.
    #[inline]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}
