/**
 * mapper.rs
 * Map backend records onto the canonical FeaturePhenotypeAssociation
 *
 * - graph: flattened OBAN association with nested located entity
 * - remote: one upstream association element plus the response's abstracts
 */

use crate::errors::{G2pError, Result};
use crate::g2p::flatten::FlattenedRecord;
use crate::g2p::remote::{RemoteAbstract, RemoteAssociation};
use crate::ontology::namespace_split;
use crate::ontology::vocabulary::{ASSOCIATION_HAS_OBJECT, DC_SOURCE, HAS_EVIDENCE, HAS_FEATURE_TYPE};
use crate::protocol::{validate, Evidence, Feature, FeaturePhenotypeAssociation, OntologyTerm, PhenotypeInstance};

/// Ontology source of remote features typed "gene"
pub const GENE_SOURCE: &str = "http://www.ncbi.nlm.nih.gov/gene/";
/// Ontology source of every other remote feature
pub const VARIANT_SOURCE: &str = "http://www.ncbi.nlm.nih.gov/snp/";
pub const DISEASE_SOURCE: &str = "http://purl.obolibrary.org/obo/DOID_";
pub const DRUG_SOURCE: &str = "http://www.drugbank.ca/drugs/";
pub const CITATION_SOURCE: &str = "http://www.ncbi.nlm.nih.gov/pubmed/";
pub const CITATION_NAME: &str = "publication";
/// Joins feature and phenotype identifiers into a remote association id
pub const ASSOCIATION_ID_SEPARATOR: &str = ":";

/// Map a flattened graph association to the canonical record
///
/// The feature type comes from the located entity's `GENO_0000408` value when
/// present, otherwise the located entity's own id serves as both URI and name.
pub fn association_from_record(record: &FlattenedRecord) -> Result<FeaturePhenotypeAssociation> {
    let id = record.id.clone().ok_or_else(|| G2pError::IncompleteRecord {
        id: String::new(),
        predicate: "id".to_string(),
    })?;

    let fallback;
    let location = match record.location.as_deref() {
        Some(location) => location,
        None => {
            fallback = FlattenedRecord::with_id(id.as_str());
            &fallback
        }
    };

    let feature_type = match location.first(HAS_FEATURE_TYPE) {
        Some(value) => OntologyTerm::from_uri(&value.val, value.label.clone().unwrap_or_default())?,
        None => {
            let location_id = location.id.as_deref().unwrap_or(&id);
            OntologyTerm::from_uri(location_id, location_id)?
        }
    };

    let object = record
        .first(ASSOCIATION_HAS_OBJECT)
        .ok_or_else(|| G2pError::IncompleteRecord {
            id: id.clone(),
            predicate: ASSOCIATION_HAS_OBJECT.to_string(),
        })?;
    let phenotype = PhenotypeInstance::new(
        object.val.as_str(),
        OntologyTerm::from_uri(&object.val, object.label.clone().unwrap_or_default())?,
    );

    let evidence_name = record
        .first(HAS_EVIDENCE)
        .and_then(|value| value.label.clone())
        .unwrap_or_default();

    let mut evidence = Vec::new();
    if let Some(sources) = record.get(DC_SOURCE) {
        for source in sources.iter() {
            let (source_id, ontology_source) = namespace_split(&source.val, '/')?;
            let item = Evidence {
                evidence_type: OntologyTerm::new(source_id, ontology_source, evidence_name.as_str()),
                description: None,
            };
            validate(&item)?;
            evidence.push(item);
        }
    }

    let association = FeaturePhenotypeAssociation {
        id: id.clone(),
        features: vec![Feature::new(id, feature_type)],
        evidence,
        phenotype,
        description: None,
        environmental_contexts: Vec::new(),
    };
    validate(&association)?;
    Ok(association)
}

/// Map one upstream element to the canonical record
///
/// The evidence description is the title of the first abstract citing the
/// same publication, absent when none does.
pub fn association_from_remote(
    element: &RemoteAssociation,
    abstracts: &[RemoteAbstract],
) -> Result<FeaturePhenotypeAssociation> {
    let feature_source = if element.snp_or_gene_type.eq_ignore_ascii_case("gene") {
        GENE_SOURCE
    } else {
        VARIANT_SOURCE
    };
    let feature = Feature::new(
        element.snp_or_gene.as_str(),
        OntologyTerm::new(element.snp_or_gene.as_str(), feature_source, element.snp_or_gene.as_str()),
    );

    let phenotype_source = if element.disease_or_drug_type.eq_ignore_ascii_case("drug") {
        DRUG_SOURCE
    } else {
        DISEASE_SOURCE
    };
    let phenotype = PhenotypeInstance::new(
        element.disease_or_drug.as_str(),
        OntologyTerm::new(element.disease_or_drug.as_str(), phenotype_source, element.disease_or_drug.as_str()),
    );

    let description = abstracts
        .iter()
        .find(|a| a.pubmed_id == element.pubmed_id)
        .map(|a| a.title.clone());
    let evidence = Evidence {
        evidence_type: OntologyTerm::new(element.pubmed_id.as_str(), CITATION_SOURCE, CITATION_NAME),
        description,
    };
    validate(&evidence)?;

    let association = FeaturePhenotypeAssociation {
        id: format!("{}{}{}", element.snp_or_gene, ASSOCIATION_ID_SEPARATOR, element.disease_or_drug),
        features: vec![feature],
        evidence: vec![evidence],
        phenotype,
        description: None,
        environmental_contexts: Vec::new(),
    };
    validate(&association)?;
    Ok(association)
}
