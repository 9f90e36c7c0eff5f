//! # G2P Core - Genotype to Phenotype Association Resolution
//!
//! Resolves feature ↔ phenotype associations (gene or variant linked to a
//! disease or drug response, with supporting evidence) from one of several
//! knowledge sources and normalises them into the GA4GH
//! `FeaturePhenotypeAssociation` record.
//!
//! ## Backends
//!
//! - **Graph**: OBAN association graphs (e.g. the Clinical Genomics Knowledge
//!   Base in Turtle) loaded into an in-memory Oxigraph store and searched with
//!   SPARQL in two phases, search then detail.
//! - **Remote**: a REST service returning `{Associations, Abstracts}`; the last
//!   full response is cached and pages are sliced from it.
//!
//! ## Architecture
//!
//! ```text
//!   SearchRequest ──▶ AssociationSearch
//!                       │            │
//!               G2pDataset     RemoteG2pDataset
//!          search ▸ detail ▸      fetch ▸ cache
//!          flatten ▸ map          slice ▸ map
//!                       │            │
//!                       ▼            ▼
//!              FeaturePhenotypeAssociation
//! ```

pub mod cache;
pub mod config;
pub mod drivers;
pub mod errors;
pub mod g2p;
pub mod ontology;
pub mod protocol;

pub use cache::{CacheEntry, CacheKey, ResponseCache};
pub use config::{Backend, DatasetConfig, RemoteConfig};
pub use drivers::{HttpDriver, RemoteClient, RemoteReply};
pub use errors::G2pError;
pub use g2p::{AssociationSearch, Criteria, G2pDataset, RemoteG2pDataset, SearchRequest};
pub use ontology::{namespace_split, DataSource, OxigraphStore, TripleStore};
pub use protocol::{
    Evidence, ExternalIdentifier, Feature, FeaturePhenotypeAssociation, OntologyTerm, PhenotypeInstance,
};

/// Version of the G2P core
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
