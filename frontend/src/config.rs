//! Application configuration.
//!
//! Site-wide constants live here as plain `const`s. The lead store
//! endpoint is injected at build time through `SUPABASE_URL` and
//! `SUPABASE_ANON_KEY` (read by `option_env!`, so Trunk picks them up
//! from the build environment).

use crate::types::ConfigError;

/// Brand shown in the navigation bar and footer.
pub const BRAND_NAME: &str = "OkosŐr Szeged";

/// Legal owner printed in the footer.
pub const COMPANY_NAME: &str = "Vastag Péter EV";

/// Document title.
pub const PAGE_TITLE: &str = "OkosŐr Szeged - Megfizethető Okos Otthon Megoldások";

/// Delay before a success/error banner goes back to idle (ms).
pub const BANNER_RESET_MS: u32 = 5_000;

/// Placeholder image service used when a package image fails to load.
pub const PLACEHOLDER_BASE: &str = "https://via.placeholder.com/1200x680.png?text=";

/// Table that receives lead submissions.
pub const LEADS_TABLE: &str = "contact_submissions";

/// Connection settings for the remote lead store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Project base URL, without trailing slash.
    pub url: String,
    /// Public (anon) API key.
    pub anon_key: String,
}

impl StoreConfig {
    /// Build a config from explicit values.
    ///
    /// Trailing slashes on the URL are stripped so endpoint paths can be
    /// appended directly.
    pub fn new(url: Option<&str>, anon_key: Option<&str>) -> Result<Self, ConfigError> {
        let url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(ConfigError::Missing("SUPABASE_URL"))?;
        let anon_key = anon_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::Missing("SUPABASE_ANON_KEY"))?;

        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::InvalidUrl(url.to_string()));
        }

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    /// Resolve the config baked in at build time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::new(option_env!("SUPABASE_URL"), option_env!("SUPABASE_ANON_KEY"))
    }

    /// REST endpoint for inserting into `table`.
    pub fn table_endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_config_normalizes_url() {
        let config = StoreConfig::new(Some(" https://abc.supabase.co/ "), Some("anon")).unwrap();
        assert_eq!(config.url, "https://abc.supabase.co");
        assert_eq!(
            config.table_endpoint(LEADS_TABLE),
            "https://abc.supabase.co/rest/v1/contact_submissions"
        );
    }

    #[test]
    fn test_store_config_missing_values() {
        assert_eq!(
            StoreConfig::new(None, Some("anon")),
            Err(ConfigError::Missing("SUPABASE_URL"))
        );
        assert_eq!(
            StoreConfig::new(Some("https://abc.supabase.co"), Some("   ")),
            Err(ConfigError::Missing("SUPABASE_ANON_KEY"))
        );
    }

    #[test]
    fn test_store_config_rejects_non_http_url() {
        let err = StoreConfig::new(Some("abc.supabase.co"), Some("anon")).unwrap_err();
        assert!(err.to_string().contains("abc.supabase.co"));
    }
}
