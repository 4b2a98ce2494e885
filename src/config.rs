use serde::{Deserialize, Serialize};

/// Library configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Search engine configuration
    #[serde(default)]
    pub engine: EngineConfig,

    /// Session cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
}

impl Config {
    /// Load configuration from the embedded defaults, an optional file and
    /// the environment
    pub fn load() -> crate::error::Result<Self> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config/default.toml".to_string());

        let config = config::Config::builder()
            // Start with default values
            .add_source(config::File::from_str(
                include_str!("../config/default.toml"),
                config::FileFormat::Toml,
            ))
            // Override with config file if it exists
            .add_source(config::File::with_name(&config_path).required(false))
            // Override with environment variables (prefix: SESSION_SEARCH)
            .add_source(
                config::Environment::with_prefix("SESSION_SEARCH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

/// Search engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Index field keyword queries run against
    #[serde(default = "default_field")]
    pub field: String,

    /// Items displayed per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            field: default_field(),
            page_size: default_page_size(),
        }
    }
}

/// Session cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Require the host's session gate to report active before populating
    #[serde(default = "default_require_active_session")]
    pub require_active_session: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            require_active_session: default_require_active_session(),
        }
    }
}

fn default_field() -> String {
    "name".to_string()
}

fn default_page_size() -> usize {
    10
}

fn default_require_active_session() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.engine.field, "name");
        assert_eq!(config.engine.page_size, 10);
        assert!(config.cache.require_active_session);
    }

    #[test]
    fn test_load_embedded_defaults() {
        let config = Config::load().unwrap();
        assert_eq!(config.engine.page_size, 10);
    }
}
