//! Configuration for glowmatch.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Built-in defaults
//! 2. `glowmatch.toml` (or an explicit path)
//! 3. Environment variables prefixed `GLOWMATCH_`, nested keys split on `__`
//!    (e.g. `GLOWMATCH_RECOMMEND__DEFAULT_K=8`)

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogIndex;
use crate::error::{Error, Result};
use crate::loader::{load_products, DatasetFormat};
use crate::recommender::{DEFAULT_K, DEFAULT_TOP_LOVED};
use crate::vectorizer::VectorizerParams;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "glowmatch.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "GLOWMATCH_";

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Raw product dataset
    pub dataset: PathBuf,
    /// Dataset format
    pub format: DatasetFormat,
    /// Prebuilt snapshot; used instead of `dataset` when the file exists
    pub snapshot: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from("data/products.csv"),
            format: DatasetFormat::Auto,
            snapshot: None,
        }
    }
}

impl CatalogConfig {
    /// Applies command-line source overrides.
    ///
    /// An explicit dataset drops the configured snapshot so the catalog is
    /// built from that dataset. An explicit snapshot is applied after it and
    /// wins when both are given.
    pub fn override_source(&mut self, dataset: Option<PathBuf>, snapshot: Option<PathBuf>) {
        if let Some(dataset) = dataset {
            self.dataset = dataset;
            self.snapshot = None;
        }
        if let Some(snapshot) = snapshot {
            self.snapshot = Some(snapshot);
        }
    }

    /// Loads the configured snapshot when it exists, otherwise builds the
    /// index from the raw dataset with `params`.
    ///
    /// # Errors
    ///
    /// Propagates loading, parsing and build errors.
    pub fn load_index(&self, params: VectorizerParams) -> Result<CatalogIndex> {
        if let Some(snapshot) = self.snapshot.as_deref().filter(|p| p.exists()) {
            return crate::snapshot::load(snapshot);
        }
        let records = load_products(&self.dataset, self.format)?;
        CatalogIndex::build_with(records, params)
    }
}

/// Query limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
    /// Results per query when the caller does not ask for a count
    pub default_k: usize,
    /// Largest count a caller may ask for
    pub max_k: usize,
    /// Length of the top-loved listing
    pub top_loved_count: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            default_k: DEFAULT_K,
            max_k: 50,
            top_loved_count: DEFAULT_TOP_LOVED,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Allowed CORS origins; empty means permissive
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_origins: Vec::new(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Complete glowmatch configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowConfig {
    /// Catalog source
    pub catalog: CatalogConfig,
    /// TF-IDF weighting
    pub vectorizer: VectorizerParams,
    /// Query limits
    pub recommend: RecommendConfig,
    /// HTTP server
    pub server: ServerConfig,
    /// Logging
    pub logging: LoggingConfig,
}

impl GlowConfig {
    /// Figment with defaults, `path` (if it exists) and environment layered.
    #[must_use]
    pub fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(GlowConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Loads from [`DEFAULT_CONFIG_FILE`] in the working directory and the environment.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Loads from `path` and the environment. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config: GlowConfig = Self::figment(path).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a TOML string over the defaults, ignoring the environment.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: GlowConfig = Figment::from(Serialized::defaults(GlowConfig::default()))
            .merge(Toml::string(content))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Builds or loads the catalog described by this configuration.
    pub fn load_index(&self) -> Result<CatalogIndex> {
        self.catalog.load_index(self.vectorizer)
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] describing the first violated constraint.
    pub fn validate(&self) -> Result<()> {
        let r = &self.recommend;
        if r.default_k == 0 {
            return Err(Error::Config("recommend.default_k must be at least 1".into()));
        }
        if r.default_k > r.max_k {
            return Err(Error::Config(format!(
                "recommend.default_k ({}) exceeds recommend.max_k ({})",
                r.default_k, r.max_k
            )));
        }
        if self.server.port == 0 {
            return Err(Error::Config("server.port must be non-zero".into()));
        }
        Ok(())
    }
}
