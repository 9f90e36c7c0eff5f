/**
 * protocol module
 *
 * Canonical GA4GH genotype-phenotype records returned by every resolver.
 *
 * - schema: structural validation of records before they leave a mapper
 */

pub mod schema;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::Result;
use crate::ontology::namespace::namespace_split;

pub use schema::{validate, SchemaRecord};

/// A term from an ontology, addressed by local id within a namespace
///
/// `ontology_source` followed by `id` reconstructs the term's URI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OntologyTerm {
    pub id: String,
    pub ontology_source: String,
    pub name: String,
}

impl OntologyTerm {
    pub fn new(id: impl Into<String>, ontology_source: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ontology_source: ontology_source.into(),
            name: name.into(),
        }
    }

    /// Build a term by namespace-splitting `uri`
    pub fn from_uri(uri: &str, name: impl Into<String>) -> Result<Self> {
        let (id, ontology_source) = namespace_split(uri, '/')?;
        Ok(Self::new(id, ontology_source, name))
    }

    pub fn uri(&self) -> String {
        format!("{}{}", self.ontology_source, self.id)
    }
}

/// Free-form key/value attributes (always empty for G2P features)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub vals: BTreeMap<String, Vec<String>>,
}

/// Genomic entity (gene, variant, location) taking part in an association
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub id: String,
    pub feature_type: OntologyTerm,
    pub feature_set_id: String,
    pub parent_ids: Vec<String>,
    pub attributes: Attributes,
}

impl Feature {
    pub fn new(id: impl Into<String>, feature_type: OntologyTerm) -> Self {
        Self {
            id: id.into(),
            feature_type,
            feature_set_id: String::new(),
            parent_ids: Vec::new(),
            attributes: Attributes::default(),
        }
    }
}

/// Disease, drug response or other condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhenotypeInstance {
    pub id: String,
    #[serde(rename = "type")]
    pub phenotype_type: OntologyTerm,
    pub qualifier: Option<Vec<OntologyTerm>>,
    pub age_of_onset: Option<OntologyTerm>,
    pub description: Option<String>,
}

impl PhenotypeInstance {
    pub fn new(id: impl Into<String>, phenotype_type: OntologyTerm) -> Self {
        Self {
            id: id.into(),
            phenotype_type,
            qualifier: None,
            age_of_onset: None,
            description: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evidence {
    pub evidence_type: OntologyTerm,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalContext {
    pub id: String,
    pub environment_type: OntologyTerm,
    pub description: Option<String>,
}

/// The canonical association every resolver produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturePhenotypeAssociation {
    pub id: String,
    pub features: Vec<Feature>,
    pub evidence: Vec<Evidence>,
    pub phenotype: PhenotypeInstance,
    pub description: Option<String>,
    pub environmental_contexts: Vec<EnvironmentalContext>,
}

/// Reference into an external database, e.g. `{database: "http://purl.obolibrary.org/obo/", identifier: "DOID_1612"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalIdentifier {
    pub database: String,
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ExternalIdentifier {
    pub fn new(database: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            identifier: identifier.into(),
            version: None,
        }
    }

    /// `database` and `identifier` concatenated as a URI
    pub fn uri(&self) -> String {
        format!("{}{}", self.database, self.identifier)
    }
}
