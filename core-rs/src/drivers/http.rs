//! HttpDriver for the remote G2P association service
//!
//! Issues one blocking GET per (feature, phenotype) pair:
//! - endpoint URL with two configurable query parameter names
//! - optional request timeout
//! - status and body handed back untouched

use reqwest::blocking::Client;
use std::time::Duration;
use tracing::info;
use url::Url;

use crate::drivers::traits::{RemoteClient, RemoteReply};
use crate::errors::{G2pError, Result};

pub const DEFAULT_FEATURE_PARAM: &str = "feature";
pub const DEFAULT_PHENOTYPE_PARAM: &str = "phenotype";

/// HTTP driver for the upstream association service
#[derive(Debug, Clone)]
pub struct HttpDriver {
    endpoint: Url,
    feature_param: String,
    phenotype_param: String,
    client: Client,
}

impl HttpDriver {
    /// Create new HttpDriver
    ///
    /// # Example
    ///
    /// ```
    /// use g2p_core::drivers::HttpDriver;
    ///
    /// let driver = HttpDriver::new("http://localhost:8080/api/associations").unwrap();
    /// ```
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| G2pError::Config(format!("Invalid endpoint {}: {}", endpoint, e)))?;

        Ok(Self {
            endpoint,
            feature_param: DEFAULT_FEATURE_PARAM.to_string(),
            phenotype_param: DEFAULT_PHENOTYPE_PARAM.to_string(),
            client: Client::new(),
        })
    }

    /// Override the query parameter names
    ///
    /// # Example
    ///
    /// ```
    /// use g2p_core::drivers::HttpDriver;
    ///
    /// let driver = HttpDriver::new("http://localhost:8080/api/associations")
    ///     .unwrap()
    ///     .with_params("gene", "disease");
    /// ```
    pub fn with_params(mut self, feature_param: impl Into<String>, phenotype_param: impl Into<String>) -> Self {
        self.feature_param = feature_param.into();
        self.phenotype_param = phenotype_param.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.client = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    /// Build the request URL for one lookup
    ///
    /// # Example
    ///
    /// ```
    /// use g2p_core::drivers::HttpDriver;
    ///
    /// let driver = HttpDriver::new("http://localhost:8080/api/associations").unwrap();
    /// let url = driver.request_url("BRCA1", "breast cancer");
    /// assert_eq!(url.query(), Some("feature=BRCA1&phenotype=breast+cancer"));
    /// ```
    pub fn request_url(&self, feature: &str, phenotype: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair(&self.feature_param, feature)
            .append_pair(&self.phenotype_param, phenotype);
        url
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl RemoteClient for HttpDriver {
    fn get_associations(&self, feature: &str, phenotype: &str) -> Result<RemoteReply> {
        let url = self.request_url(feature, phenotype);
        info!(%url, "fetching associations from remote service");

        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(RemoteReply { status, body })
    }
}
