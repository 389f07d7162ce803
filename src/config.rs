//! Storefront configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CATALOG_API_URL: &str = "https://dummyjson.com/products";
pub const DEFAULT_CATALOG_PAGE_LIMIT: u32 = 100;
pub const DEFAULT_CATALOG_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CATALOG_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable was set to a value that does not parse.
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Remote catalog API settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Product endpoint. The list is `GET <endpoint>?limit=<n>`, items are `GET <endpoint>/<id>`.
    pub endpoint: String,
    pub page_limit: u32,
    pub timeouts: CatalogTimeouts,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CATALOG_API_URL.to_owned(),
            page_limit: DEFAULT_CATALOG_PAGE_LIMIT,
            timeouts: CatalogTimeouts {
                request_secs: DEFAULT_CATALOG_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_CATALOG_CONNECT_TIMEOUT_SECS,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub port: u16,
    pub catalog: CatalogConfig,
}

impl StorefrontConfig {
    /// Build typed config from environment variables.
    ///
    /// All optional:
    /// - `PORT`: default 3000
    /// - `CATALOG_API_URL`: default `https://dummyjson.com/products`
    /// - `CATALOG_PAGE_LIMIT`: default 100
    /// - `CATALOG_REQUEST_TIMEOUT_SECS`: default 30
    /// - `CATALOG_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env_parse("PORT", DEFAULT_PORT)?;
        let endpoint = std::env::var("CATALOG_API_URL")
            .unwrap_or_else(|_| DEFAULT_CATALOG_API_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let page_limit = env_parse("CATALOG_PAGE_LIMIT", DEFAULT_CATALOG_PAGE_LIMIT)?;
        let timeouts = CatalogTimeouts {
            request_secs: env_parse("CATALOG_REQUEST_TIMEOUT_SECS", DEFAULT_CATALOG_REQUEST_TIMEOUT_SECS)?,
            connect_secs: env_parse("CATALOG_CONNECT_TIMEOUT_SECS", DEFAULT_CATALOG_CONNECT_TIMEOUT_SECS)?,
        };
        Ok(Self { port, catalog: CatalogConfig { endpoint, page_limit, timeouts } })
    }
}

fn env_parse<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
