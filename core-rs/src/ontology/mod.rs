/**
 * ontology module
 *
 * - namespace: URI to (local id, namespace) splitting
 * - vocabulary: OBAN/OBO/FALDO IRIs of genotype-phenotype graphs
 * - store: triple store seam with the Oxigraph implementation
 * - query: structured SPARQL SELECT builder
 */

pub mod namespace;
pub mod query;
pub mod store;
pub mod vocabulary;

pub use namespace::namespace_split;
pub use query::{Expression, Node, SelectQuery, SparqlQuery, TriplePattern};
pub use store::{DataSource, OxigraphStore, QueryResult, TripleStore};
