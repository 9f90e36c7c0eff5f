//! Integration tests for the triple-store association resolver
//!
//! Loads a small OBAN association graph and exercises:
//! - Feature, drug and disease label patterns
//! - Identifier-list facets (located position, disease class)
//! - Total count and result windowing
//! - Evidence collection and feature-type fallback
//! - Criteria validation and hostile patterns

use g2p_core::g2p::{AssociationSearch, Criteria, G2pDataset, SearchRequest};
use g2p_core::ontology::{DataSource, OxigraphStore, TripleStore};
use g2p_core::{ExternalIdentifier, G2pError};
use std::fs;
use tempfile::TempDir;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/core-rs/tests/fixtures/cgd_sample.ttl");
const FIXTURE_TTL: &str = include_str!("../fixtures/cgd_sample.ttl");

const CGD: &str = "http://example.org/cgd/";
const OBO: &str = "http://purl.obolibrary.org/obo/";

// ==================== Test Helper Functions ====================

fn dataset() -> G2pDataset {
    G2pDataset::from_sources(&[DataSource::new(FIXTURE)]).unwrap()
}

fn ids(database: &str, identifiers: &[&str]) -> Criteria {
    Criteria::ids(
        identifiers
            .iter()
            .map(|id| ExternalIdentifier::new(database, *id))
            .collect(),
    )
}

fn association_ids(dataset: &mut G2pDataset, request: &SearchRequest) -> Vec<String> {
    dataset.search(request).unwrap().map(|a| a.id).collect()
}

// ==================== Label Patterns ====================

/// Test: feature pattern resolves a full association with two citations
#[test]
fn test_feature_pattern_resolves_association() {
    let mut dataset = dataset();
    let request = SearchRequest::new()
        .feature(Criteria::pattern("KIT D816V"))
        .phenotype(Criteria::pattern("gastrointestinal"));

    let associations: Vec<_> = dataset.search(&request).unwrap().collect();
    assert_eq!(associations.len(), 1);
    assert_eq!(dataset.associations_length(), 1);

    let association = &associations[0];
    assert_eq!(association.id, format!("{}assoc1", CGD));
    assert_eq!(association.features.len(), 1);
    assert_eq!(association.features[0].id, association.id);
    assert_eq!(association.features[0].feature_type.id, "SO_0001583");
    assert_eq!(association.features[0].feature_type.ontology_source, OBO);
    assert_eq!(association.features[0].feature_type.name, "missense_variant");

    assert_eq!(association.phenotype.id, format!("{}DOID_9253", OBO));
    assert_eq!(association.phenotype.phenotype_type.id, "DOID_9253");
    assert_eq!(association.phenotype.phenotype_type.name, "gastrointestinal stromal tumor");

    assert_eq!(association.evidence.len(), 2);
    for evidence in &association.evidence {
        assert_eq!(evidence.evidence_type.ontology_source, "http://www.ncbi.nlm.nih.gov/pubmed/");
        assert_eq!(evidence.evidence_type.name, "traceable author statement");
    }
    let citations: Vec<&str> = association.evidence.iter().map(|e| e.evidence_type.id.as_str()).collect();
    assert!(citations.contains(&"16954519"));
    assert!(citations.contains(&"17108056"));

    assert!(association.environmental_contexts.is_empty());
}

/// Test: pattern is a regex over the label, results ordered by association
#[test]
fn test_feature_pattern_regex_matches_several() {
    let mut dataset = dataset();
    let request = SearchRequest::new().feature(Criteria::pattern("^KIT"));

    assert_eq!(
        association_ids(&mut dataset, &request),
        vec![format!("{}assoc1", CGD), format!("{}assoc2", CGD)]
    );
    assert_eq!(dataset.associations_length(), 2);
}

#[test]
fn test_patterns_are_case_sensitive() {
    let mut dataset = dataset();
    let request = SearchRequest::new().feature(Criteria::pattern("kit"));

    assert!(association_ids(&mut dataset, &request).is_empty());
    assert_eq!(dataset.associations_length(), 0);
}

/// Test: evidence criteria constrain the drug / environment facet
#[test]
fn test_evidence_pattern_filters_drug() {
    let mut dataset = dataset();
    let request = SearchRequest::new()
        .feature(Criteria::pattern("BRAF"))
        .evidence(Criteria::pattern("vemurafenib"));

    assert_eq!(association_ids(&mut dataset, &request), vec![format!("{}assoc3", CGD)]);
}

/// Test: every present facet must match
#[test]
fn test_facets_combine_with_and() {
    let mut dataset = dataset();
    let request = SearchRequest::new()
        .feature(Criteria::pattern("KIT"))
        .phenotype(Criteria::pattern("melanoma"));

    assert!(association_ids(&mut dataset, &request).is_empty());
}

// ==================== Feature Type Fallback ====================

/// Test: located entity without a feature type uses its own id
#[test]
fn test_location_without_feature_type() {
    let mut dataset = dataset();
    let request = SearchRequest::new().feature(Criteria::pattern("exon 11"));

    let associations: Vec<_> = dataset.search(&request).unwrap().collect();
    assert_eq!(associations.len(), 1);

    let feature_type = &associations[0].features[0].feature_type;
    assert_eq!(feature_type.id, "variant_KIT_exon11");
    assert_eq!(feature_type.ontology_source, CGD);
    assert_eq!(feature_type.name, format!("{}variant_KIT_exon11", CGD));
    assert_eq!(associations[0].evidence.len(), 1);
}

// ==================== Identifier Facets ====================

#[test]
fn test_location_ids_match_faldo_position() {
    let mut dataset = dataset();
    let request = SearchRequest::new().feature(ids(CGD, &["chr4_55599321"]));

    assert_eq!(association_ids(&mut dataset, &request), vec![format!("{}assoc1", CGD)]);
}

/// Test: identifier list is an OR over its members
#[test]
fn test_location_ids_any_of() {
    let mut dataset = dataset();
    let request = SearchRequest::new().feature(ids(CGD, &["chr4_55599321", "chr7_140453136"]));

    assert_eq!(dataset.search(&request).unwrap().count(), 3);
    assert_eq!(dataset.associations_length(), 3);
}

#[test]
fn test_disease_ids_match_class() {
    let mut dataset = dataset();
    let request = SearchRequest::new().phenotype(ids(OBO, &["DOID_162"]));

    assert_eq!(
        association_ids(&mut dataset, &request),
        vec![format!("{}assoc3", CGD), format!("{}assoc4", CGD)]
    );
}

#[test]
fn test_empty_id_list_is_invalid() {
    let mut dataset = dataset();
    let request = SearchRequest::new().phenotype(Criteria::ids(vec![]));

    assert!(matches!(dataset.search(&request), Err(G2pError::InvalidCriteria(_))));
}

// ==================== Windowing ====================

/// Test: page window over the ordered matches, total unaffected
#[test]
fn test_pagination_windows_results() {
    let mut dataset = dataset();
    let base = SearchRequest::new().evidence(Criteria::pattern("nib$"));

    let all = association_ids(&mut dataset, &base);
    assert_eq!(all.len(), 4);

    let second_page = association_ids(&mut dataset, &base.clone().page_size(2).offset(2));
    assert_eq!(second_page, all[2..4].to_vec());
    assert_eq!(dataset.associations_length(), 4);

    let tail = association_ids(&mut dataset, &base.clone().page_size(10).offset(3));
    assert_eq!(tail, all[3..].to_vec());
}

#[test]
fn test_empty_windows_keep_total() {
    let mut dataset = dataset();
    let base = SearchRequest::new().evidence(Criteria::pattern("nib$"));

    assert!(association_ids(&mut dataset, &base.clone().offset(4)).is_empty());
    assert_eq!(dataset.associations_length(), 4);
    assert!(association_ids(&mut dataset, &base.clone().offset(-1)).is_empty());
    assert!(association_ids(&mut dataset, &base.clone().page_size(0)).is_empty());
}

// ==================== Criteria Validation ====================

#[test]
fn test_all_facets_absent_is_invalid() {
    let mut dataset = dataset();

    match dataset.search(&SearchRequest::new()) {
        Err(G2pError::InvalidCriteria(msg)) => {
            assert!(msg.contains("location"));
            assert!(msg.contains("drug"));
            assert!(msg.contains("disease"));
        }
        other => panic!("Expected InvalidCriteria, got {:?}", other.map(|a| a.count())),
    }
}

/// Test: empty patterns count as absent
#[test]
fn test_empty_patterns_are_absent() {
    let mut dataset = dataset();
    let request = SearchRequest::new()
        .feature(Criteria::pattern(""))
        .phenotype(Criteria::pattern(""));

    assert!(matches!(dataset.search(&request), Err(G2pError::InvalidCriteria(_))));
}

/// Test: quotes and braces in a pattern stay inside the regex literal
#[test]
fn test_hostile_pattern_does_not_alter_query() {
    let mut dataset = dataset();

    for pattern in [r#"KIT" || "a" = "a"#, "KIT' . ?s ?p ?o . '", r#"KIT" # "#] {
        let request = SearchRequest::new().feature(Criteria::pattern(pattern));
        let associations = dataset.search(&request).unwrap();
        assert_eq!(associations.count(), 0, "pattern {:?} matched", pattern);
    }
}

#[test]
fn test_malformed_identifier_is_rejected() {
    let mut dataset = dataset();
    let request = SearchRequest::new().feature(ids("not a uri> ", &["x"]));

    assert!(matches!(dataset.search(&request), Err(G2pError::MalformedUri(_))));
}

// ==================== Source Loading ====================

#[test]
fn test_sources_load_from_directory_and_file_url() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("cgd.ttl"), FIXTURE_TTL).unwrap();

    let mut relative = OxigraphStore::new().unwrap().with_base_dir(temp.path());
    relative.load(&DataSource::new("cgd.ttl")).unwrap();

    let url = format!("file://{}", temp.path().join("cgd.ttl").display());
    let from_url = OxigraphStore::from_sources(&[DataSource::new(url)]).unwrap();

    assert!(!relative.is_empty().unwrap());
    assert_eq!(relative.len().unwrap(), from_url.len().unwrap());
}

#[test]
fn test_missing_source_fails() {
    let result = G2pDataset::from_sources(&[DataSource::new("/nonexistent/cgd.ttl")]);
    assert!(matches!(result, Err(G2pError::Store(_))));
}

/// Test: later sources extend the same graph
#[test]
fn test_multiple_sources_merge() {
    let temp = TempDir::new().unwrap();
    let extra = temp.path().join("extra.nt");
    fs::write(
        &extra,
        "<http://example.org/cgd/variant_KIT_exon11> <http://purl.obolibrary.org/obo/GENO_0000408> <http://purl.obolibrary.org/obo/SO_0001583> .\n",
    )
    .unwrap();

    let mut dataset = G2pDataset::from_sources(&[
        DataSource::new(FIXTURE),
        DataSource::new(extra.display().to_string()).with_format("ntriples"),
    ])
    .unwrap();

    let request = SearchRequest::new().feature(Criteria::pattern("exon 11"));
    let associations: Vec<_> = dataset.search(&request).unwrap().collect();
    assert_eq!(associations[0].features[0].feature_type.name, "missense_variant");
}
