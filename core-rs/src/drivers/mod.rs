//! Drivers module for remote association services
//!
//! Provides the remote client interface (RemoteClient trait) and implementations:
//! - HttpDriver: blocking HTTP GET against the upstream service

mod http;
mod traits;

pub use http::{HttpDriver, DEFAULT_FEATURE_PARAM, DEFAULT_PHENOTYPE_PARAM};
pub use traits::{RemoteClient, RemoteReply};
