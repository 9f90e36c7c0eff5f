/**
 * remote.rs
 * Association resolver backed by a remote REST service
 *
 * The upstream service does not page, so the last full response is cached by
 * (feature, phenotype) and every page is sliced from it.
 */

use serde::{Deserialize, Deserializer};
use tracing::{info, warn};

use crate::cache::{CacheKey, ResponseCache};
use crate::drivers::RemoteClient;
use crate::errors::Result;
use crate::g2p::mapper::association_from_remote;
use crate::g2p::search::window;
use crate::protocol::FeaturePhenotypeAssociation;

/// Body of a successful upstream reply
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RemoteResponse {
    #[serde(rename = "Associations", default)]
    pub associations: Vec<RemoteAssociation>,
    #[serde(rename = "Abstracts", default)]
    pub abstracts: Vec<RemoteAbstract>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemoteAssociation {
    pub snp_or_gene: String,
    #[serde(default)]
    pub snp_or_gene_type: String,
    pub disease_or_drug: String,
    #[serde(default)]
    pub disease_or_drug_type: String,
    #[serde(deserialize_with = "string_or_number")]
    pub pubmed_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemoteAbstract {
    #[serde(deserialize_with = "string_or_number")]
    pub pubmed_id: String,
    #[serde(default)]
    pub title: String,
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}

/// Resolver over a remote association service
pub struct RemoteG2pDataset<C: RemoteClient> {
    client: C,
    cache: ResponseCache<RemoteResponse>,
    associations_length: usize,
}

impl<C: RemoteClient> RemoteG2pDataset<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            cache: ResponseCache::new(),
            associations_length: 0,
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Total upstream associations for the last queried pair
    pub fn associations_length(&self) -> usize {
        self.associations_length
    }

    /// Key of the cached upstream response
    pub fn cached_key(&self) -> Option<&CacheKey> {
        self.cache.key()
    }

    /// Associations for (feature, phenotype), sliced to the requested window
    ///
    /// The service is only called when the pair differs from the cached one.
    /// `_evidence` does not take part in remote lookups. A non-200 reply is
    /// cached as an empty response.
    pub fn query_labels(
        &mut self,
        feature: &str,
        _evidence: Option<&str>,
        phenotype: &str,
        page_size: Option<i64>,
        offset: i64,
    ) -> Result<Vec<FeaturePhenotypeAssociation>> {
        let client = &self.client;
        let entry = self.cache.get_or_try_fill(CacheKey::new(feature, phenotype), || {
            let reply = client.get_associations(feature, phenotype)?;
            if !reply.is_success() {
                warn!(status = reply.status, feature, phenotype, "remote service returned no associations");
                return Ok((RemoteResponse::default(), 0));
            }

            let response: RemoteResponse = serde_json::from_str(&reply.body)?;
            let len = response.associations.len();
            info!(feature, phenotype, associations = len, "cached remote response");
            Ok((response, len))
        })?;

        self.associations_length = entry.len;

        let Some(range) = window(entry.len, page_size, offset) else {
            return Ok(Vec::new());
        };
        entry.value.associations[range]
            .iter()
            .map(|element| association_from_remote(element, &entry.value.abstracts))
            .collect()
    }
}
