// Flatten Contract Tests
//
// Detail rows become one record keyed by predicate. Mapping code reads
// single values bare and repeated values as lists, so the shape is protocol.

use g2p_core::g2p::{flatten, Statement};
use serde_json::{json, Value};

const S: &str = "http://example.org/cgd/assoc1";
const SOURCE: &str = "http://purl.org/dc/elements/1.1/source";
const OBJECT: &str = "http://purl.org/oban/association_has_object";

fn rows(sources: &[&str]) -> Vec<Statement> {
    let mut rows = vec![Statement::new(S, OBJECT, "http://purl.obolibrary.org/obo/DOID_9253").with_label("gastrointestinal stromal tumor")];
    rows.extend(sources.iter().map(|source| Statement::new(S, SOURCE, *source)));
    rows
}

/// WHY: A predicate seen once is a bare {val, label} value
/// BREAKS: Consumers expecting an object receive a one-element list
#[test]
fn single_occurrence_serialises_bare() {
    let record: Value = serde_json::to_value(flatten(&rows(&["http://example.org/pmid/1"]))).unwrap();

    assert_eq!(record["id"], json!(S));
    assert_eq!(record[SOURCE], json!({"val": "http://example.org/pmid/1"}));
    assert_eq!(
        record[OBJECT],
        json!({"val": "http://purl.obolibrary.org/obo/DOID_9253", "label": "gastrointestinal stromal tumor"})
    );
}

/// WHY: A repeated predicate becomes a list in row order
/// BREAKS: Evidence lists lose entries or change order between runs
#[test]
fn repeated_occurrences_serialise_as_ordered_list() {
    let record: Value = serde_json::to_value(flatten(&rows(&[
        "http://example.org/pmid/3",
        "http://example.org/pmid/1",
        "http://example.org/pmid/2",
    ])))
    .unwrap();

    assert_eq!(
        record[SOURCE],
        json!([
            {"val": "http://example.org/pmid/3"},
            {"val": "http://example.org/pmid/1"},
            {"val": "http://example.org/pmid/2"}
        ])
    );
}

/// WHY: Flattening the same rows twice yields the same record
#[test]
fn flatten_is_idempotent_over_equal_input() {
    let input = rows(&["http://example.org/pmid/1", "http://example.org/pmid/2"]);
    assert_eq!(flatten(&input), flatten(&input.clone()));
}

/// WHY: No rows means no id and no predicates
#[test]
fn flatten_of_nothing_is_empty() {
    let record = flatten(&[]);
    assert!(record.id.is_none());
    assert!(record.is_empty());
    assert_eq!(serde_json::to_value(&record).unwrap(), json!({}));
}
