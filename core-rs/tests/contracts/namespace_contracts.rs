// Namespace Splitter Contract Tests
//
// Every OntologyTerm is built by splitting a URI. namespace + id must give the
// URI back, or identifiers sent to clients stop resolving.

use g2p_core::ontology::namespace_split;
use g2p_core::G2pError;

const URIS: &[&str] = &[
    "http://purl.obolibrary.org/obo/DOID_1612",
    "http://purl.obolibrary.org/obo/GENO_0000408",
    "http://www.ncbi.nlm.nih.gov/pubmed/20301425",
    "https://example.org:8443/cgd/variant/KIT_D816V",
    "http://example.org/",
];

/// WHY: ontologySource + id reconstructs the resource URI
/// BREAKS: Terms point at a different resource than the source graph used
#[test]
fn namespace_plus_id_reconstructs_uri() {
    for uri in URIS {
        let (id, namespace) = namespace_split(uri, '/').unwrap();
        assert_eq!(format!("{}{}", namespace, id), *uri);
        assert!(!id.contains('/'), "id {:?} of {} contains the separator", id, uri);
        assert!(namespace.ends_with('/'));
    }
}

/// WHY: Query and fragment are not part of the identifier or namespace
#[test]
fn query_and_fragment_are_dropped() {
    let (id, namespace) = namespace_split("http://purl.obolibrary.org/obo/DOID_1612?format=ttl#top", '/').unwrap();
    assert_eq!(id, "DOID_1612");
    assert_eq!(namespace, "http://purl.obolibrary.org/obo/");
}

/// WHY: Non-URIs must fail loudly, not produce empty terms
#[test]
fn malformed_uri_is_an_error() {
    for input in ["", "DOID_1612", "no scheme/here"] {
        assert!(matches!(namespace_split(input, '/'), Err(G2pError::MalformedUri(_))), "{:?}", input);
    }
}
