/**
 * config.rs
 * Parser for G2P dataset configuration files (YAML format)
 *
 * Format:
 * ```yaml
 * apiVersion: g2p/v1
 * kind: Dataset
 * metadata:
 *   name: cgd
 * spec:
 *   backend: graph
 *   sources:
 *     - source: data/cgd.ttl
 *       format: turtle
 * ```
 */

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::drivers::{HttpDriver, DEFAULT_FEATURE_PARAM, DEFAULT_PHENOTYPE_PARAM};
use crate::errors::{G2pError, Result};
use crate::g2p::{AssociationSearch, G2pDataset, RemoteG2pDataset};
use crate::ontology::{DataSource, OxigraphStore, TripleStore};

pub const API_VERSION: &str = "g2p/v1";
pub const KIND: &str = "Dataset";
pub const DEFAULT_CONFIG_FILE: &str = "g2p.yaml";

/// Dataset configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DatasetConfig {
    pub api_version: String,
    pub kind: String,
    pub metadata: Metadata,
    pub spec: DatasetSpec,
    /// Directory relative source paths resolve against
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Metadata {
    pub name: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Graph,
    Remote,
}

/// Remote service settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RemoteConfig {
    pub endpoint: String,
    #[serde(default = "default_feature_param")]
    pub feature_param: String,
    #[serde(default = "default_phenotype_param")]
    pub phenotype_param: String,
    /// Request timeout of the HTTP client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_feature_param() -> String {
    DEFAULT_FEATURE_PARAM.to_string()
}

fn default_phenotype_param() -> String {
    DEFAULT_PHENOTYPE_PARAM.to_string()
}

impl RemoteConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            feature_param: default_feature_param(),
            phenotype_param: default_phenotype_param(),
            timeout_secs: None,
        }
    }

    /// Build the HTTP driver these settings describe
    pub fn driver(&self) -> Result<HttpDriver> {
        let driver = HttpDriver::new(&self.endpoint)?.with_params(&self.feature_param, &self.phenotype_param);
        match self.timeout_secs {
            Some(secs) => driver.with_timeout(Duration::from_secs(secs)),
            None => Ok(driver),
        }
    }
}

/// Dataset specification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSpec {
    pub backend: Backend,
    /// RDF sources of the graph backend, loaded in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<DataSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteConfig>,
}

impl DatasetConfig {
    /// Graph-backed configuration
    pub fn graph(name: impl Into<String>, sources: Vec<DataSource>) -> Self {
        Self::with_spec(
            name,
            DatasetSpec {
                backend: Backend::Graph,
                sources,
                remote: None,
            },
        )
    }

    /// Remote-service configuration
    pub fn remote(name: impl Into<String>, remote: RemoteConfig) -> Self {
        Self::with_spec(
            name,
            DatasetSpec {
                backend: Backend::Remote,
                sources: Vec::new(),
                remote: Some(remote),
            },
        )
    }

    fn with_spec(name: impl Into<String>, spec: DatasetSpec) -> Self {
        DatasetConfig {
            api_version: API_VERSION.to_string(),
            kind: KIND.to_string(),
            metadata: Metadata { name: name.into() },
            spec,
            base_dir: None,
        }
    }

    /// Load and validate a configuration file
    ///
    /// # Arguments
    /// * `path` - Path to the YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(G2pError::Config(format!("Configuration not found: {}", path.display())));
        }

        let content = fs::read_to_string(path)?;
        let mut config: DatasetConfig = serde_yaml::from_str(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration structure
    ///
    /// Ensures:
    /// - apiVersion is "g2p/v1" and kind is "Dataset"
    /// - metadata.name is non-empty
    /// - a graph backend lists at least one source
    /// - a remote backend has a remote section with an endpoint
    pub fn validate(&self) -> Result<()> {
        if self.api_version != API_VERSION {
            return Err(G2pError::Config(format!(
                "Invalid apiVersion: expected '{}', got '{}'",
                API_VERSION, self.api_version
            )));
        }

        if self.kind != KIND {
            return Err(G2pError::Config(format!(
                "Invalid kind: expected '{}', got '{}'",
                KIND, self.kind
            )));
        }

        if self.metadata.name.is_empty() {
            return Err(G2pError::Config("metadata.name cannot be empty".to_string()));
        }

        match self.spec.backend {
            Backend::Graph => {
                if self.spec.sources.is_empty() {
                    return Err(G2pError::Config("graph backend requires spec.sources".to_string()));
                }
                if let Some(source) = self.spec.sources.iter().find(|s| s.source.is_empty()) {
                    return Err(G2pError::Config(format!("empty source locator: {:?}", source)));
                }
            }
            Backend::Remote => match &self.spec.remote {
                Some(remote) if !remote.endpoint.is_empty() => {}
                _ => return Err(G2pError::Config("remote backend requires spec.remote.endpoint".to_string())),
            },
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path.as_ref(), yaml)?;
        Ok(())
    }

    /// Build the configured resolver
    ///
    /// For graph backends this loads every source; it is the one-time,
    /// blocking construction step.
    pub fn open_backend(&self) -> Result<Box<dyn AssociationSearch>> {
        self.validate()?;

        match self.spec.backend {
            Backend::Graph => {
                let mut store = OxigraphStore::new()?;
                if let Some(dir) = &self.base_dir {
                    store = store.with_base_dir(dir);
                }
                for source in &self.spec.sources {
                    store.load(source)?;
                }
                Ok(Box::new(G2pDataset::new(store)))
            }
            Backend::Remote => {
                let remote = self
                    .spec
                    .remote
                    .as_ref()
                    .ok_or_else(|| G2pError::Config("remote backend requires spec.remote".to_string()))?;
                Ok(Box::new(RemoteG2pDataset::new(remote.driver()?)))
            }
        }
    }
}
