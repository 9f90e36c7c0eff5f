/**
 * vocabulary.rs
 * IRIs of the OBAN/OBO/FALDO terms used by genotype-phenotype graphs
 */

pub const OBAN: &str = "http://purl.org/oban/";
pub const OBO: &str = "http://purl.obolibrary.org/obo/";
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const FALDO: &str = "http://biohackathon.org/resource/faldo#";

/// Class of association nodes
pub const OBAN_ASSOCIATION: &str = "http://purl.org/oban/association";
/// Association to its located entity
pub const ASSOCIATION_HAS_SUBJECT: &str = "http://purl.org/oban/association_has_subject";
/// Association to its disease / phenotype
pub const ASSOCIATION_HAS_OBJECT: &str = "http://purl.org/oban/association_has_object";
pub const ASSOCIATION_HAS_OBJECT_PROPERTY: &str = "http://purl.org/oban/association_has_object_property";
/// Association to its drug / environment
pub const HAS_ENVIRONMENT: &str = "http://purl.obolibrary.org/obo/RO_has_environment";
/// Evidence type of an association
pub const HAS_EVIDENCE: &str = "http://purl.obolibrary.org/obo/RO_0002558";
/// Located entity to its feature type
pub const HAS_FEATURE_TYPE: &str = "http://purl.obolibrary.org/obo/GENO_0000408";
/// Class of located entities (sequence alteration)
pub const SEQUENCE_ALTERATION: &str = "http://purl.obolibrary.org/obo/SO_0001059";
pub const DC_SOURCE: &str = "http://purl.org/dc/elements/1.1/source";
pub const FALDO_LOCATION: &str = "http://biohackathon.org/resource/faldo#location";
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
