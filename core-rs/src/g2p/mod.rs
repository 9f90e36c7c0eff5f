/**
 * g2p module
 *
 * - criteria: per-facet search criteria and the search request
 * - queries: association search / detail queries
 * - flatten: predicate flattening of detail rows
 * - mapper: graph and remote records to FeaturePhenotypeAssociation
 * - dataset: triple-store backed resolver
 * - remote: REST backed resolver with single-slot response cache
 * - search: AssociationSearch façade and result windowing
 */

pub mod criteria;
pub mod dataset;
pub mod flatten;
pub mod mapper;
pub mod queries;
pub mod remote;
pub mod search;

pub use criteria::{Criteria, SearchRequest};
pub use dataset::G2pDataset;
pub use flatten::{flatten, FlattenedRecord, OneOrMany, PredicateValue, Statement};
pub use mapper::{association_from_record, association_from_remote};
pub use queries::{detail_query, facet_filter, search_query, Facet};
pub use remote::{RemoteAbstract, RemoteAssociation, RemoteG2pDataset, RemoteResponse};
pub use search::{window, AssociationSearch, Associations};
