/**
 * schema.rs
 * Structural validation of canonical records
 */

use serde::Serialize;
use tracing::debug;

use super::{Evidence, Feature, FeaturePhenotypeAssociation, OntologyTerm, PhenotypeInstance};
use crate::errors::{G2pError, Result};

/// A record type with a named schema it can be checked against
pub trait SchemaRecord: Serialize {
    const SCHEMA: &'static str;

    /// Human readable list of schema violations, empty when valid
    fn violations(&self) -> Vec<String>;
}

/// Fail with `SchemaValidation` carrying the serialised payload if `record` is invalid
pub fn validate<T: SchemaRecord>(record: &T) -> Result<()> {
    let violations = record.violations();
    if violations.is_empty() {
        return Ok(());
    }

    debug!(schema = T::SCHEMA, ?violations, "schema validation failed");
    let payload = serde_json::to_string(record)?;
    Err(G2pError::SchemaValidation {
        schema: T::SCHEMA.to_string(),
        payload,
    })
}

fn prefixed(prefix: &str, violations: Vec<String>) -> impl Iterator<Item = String> + '_ {
    violations.into_iter().map(move |v| format!("{}.{}", prefix, v))
}

impl SchemaRecord for OntologyTerm {
    const SCHEMA: &'static str = "OntologyTerm";

    fn violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        if self.id.is_empty() {
            violations.push("id is empty".to_string());
        }
        if self.ontology_source.is_empty() {
            violations.push("ontologySource is empty".to_string());
        }
        violations
    }
}

impl SchemaRecord for Evidence {
    const SCHEMA: &'static str = "Evidence";

    fn violations(&self) -> Vec<String> {
        prefixed("evidenceType", self.evidence_type.violations()).collect()
    }
}

impl SchemaRecord for Feature {
    const SCHEMA: &'static str = "Feature";

    fn violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        if self.id.is_empty() {
            violations.push("id is empty".to_string());
        }
        violations.extend(prefixed("featureType", self.feature_type.violations()));
        violations
    }
}

impl SchemaRecord for PhenotypeInstance {
    const SCHEMA: &'static str = "PhenotypeInstance";

    fn violations(&self) -> Vec<String> {
        prefixed("type", self.phenotype_type.violations()).collect()
    }
}

impl SchemaRecord for FeaturePhenotypeAssociation {
    const SCHEMA: &'static str = "FeaturePhenotypeAssociation";

    fn violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        if self.id.is_empty() {
            violations.push("id is empty".to_string());
        }
        if self.features.len() != 1 {
            violations.push(format!("features has {} entries, expected 1", self.features.len()));
        }
        for feature in &self.features {
            violations.extend(prefixed("features", feature.violations()));
        }
        violations.extend(prefixed("phenotype", self.phenotype.violations()));
        for evidence in &self.evidence {
            violations.extend(prefixed("evidence", evidence.violations()));
        }
        if !self.environmental_contexts.is_empty() {
            violations.push("environmentalContexts must be empty".to_string());
        }
        violations
    }
}
