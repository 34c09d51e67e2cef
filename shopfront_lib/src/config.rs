//! Runtime configuration read from `SHOPFRONT_*` environment variables.

use std::path::PathBuf;
use std::time::Duration;

pub use shopfront_api::DEFAULT_BASE_URL;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_FACET_CACHE_TTL_SECS: u64 = 300;
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Settings for [`crate::ShopClient`] and the CLI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Per-request transport timeout.
    pub timeout: Duration,
    /// How long category listings stay cached. Zero disables the cache.
    pub facet_cache_ttl: Duration,
    /// Page size used when the caller does not pick one.
    pub page_size: i64,
    /// Optional TOML file with translated UI strings.
    pub locale_file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            facet_cache_ttl: Duration::from_secs(DEFAULT_FACET_CACHE_TTL_SECS),
            page_size: DEFAULT_PAGE_SIZE as i64,
            locale_file: None,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source. Missing or
    /// unparsable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("SHOPFRONT_BASE_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let page_size = env_u64(&lookup, "SHOPFRONT_PAGE_SIZE", DEFAULT_PAGE_SIZE).max(1);
        Self {
            base_url,
            timeout: Duration::from_secs(env_u64(
                &lookup,
                "SHOPFRONT_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )),
            facet_cache_ttl: Duration::from_secs(env_u64(
                &lookup,
                "SHOPFRONT_FACET_CACHE_TTL_SECS",
                DEFAULT_FACET_CACHE_TTL_SECS,
            )),
            page_size: page_size as i64,
            locale_file: lookup("SHOPFRONT_LOCALE_FILE")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

fn env_u64<F>(lookup: &F, key: &str, default: u64) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|val| val.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let cfg = ClientConfig::from_lookup(lookup_from(&[]));
        assert_eq!(cfg, ClientConfig::default());
    }

    #[test]
    fn values_are_read() {
        let cfg = ClientConfig::from_lookup(lookup_from(&[
            ("SHOPFRONT_BASE_URL", "https://shop.example.com/api"),
            ("SHOPFRONT_TIMEOUT_SECS", "5"),
            ("SHOPFRONT_FACET_CACHE_TTL_SECS", "0"),
            ("SHOPFRONT_PAGE_SIZE", "50"),
            ("SHOPFRONT_LOCALE_FILE", "locales/ar.toml"),
        ]));
        assert_eq!(cfg.base_url, "https://shop.example.com/api");
        assert_eq!(cfg.timeout, Duration::from_secs(5));
        assert_eq!(cfg.facet_cache_ttl, Duration::ZERO);
        assert_eq!(cfg.page_size, 50);
        assert_eq!(cfg.locale_file, Some(PathBuf::from("locales/ar.toml")));
    }

    #[test]
    fn bad_numbers_fall_back() {
        let cfg = ClientConfig::from_lookup(lookup_from(&[
            ("SHOPFRONT_TIMEOUT_SECS", "soon"),
            ("SHOPFRONT_PAGE_SIZE", "-3"),
        ]));
        assert_eq!(cfg.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(cfg.page_size, DEFAULT_PAGE_SIZE as i64);
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let cfg = ClientConfig::from_lookup(lookup_from(&[("SHOPFRONT_PAGE_SIZE", "0")]));
        assert_eq!(cfg.page_size, 1);
    }

    #[test]
    fn blank_base_url_is_ignored() {
        let cfg = ClientConfig::from_lookup(lookup_from(&[("SHOPFRONT_BASE_URL", "  ")]));
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    }
}
