//! Remote service driver trait for G2P
//!
//! Defines the interface the remote association resolver uses to reach its
//! upstream service. Implementations include:
//! - HttpDriver (blocking HTTP GET)
//! - test doubles that count calls or replay canned replies

use crate::errors::Result;

/// Raw reply from the upstream association service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteReply {
    /// HTTP status code
    pub status: u16,

    /// Response body as received
    pub body: String,
}

impl RemoteReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Only 200 carries associations
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Upstream association lookup keyed by (feature, phenotype)
///
/// Transport failures are errors; a reply with any status is not.
pub trait RemoteClient {
    fn get_associations(&self, feature: &str, phenotype: &str) -> Result<RemoteReply>;
}

impl<C: RemoteClient + ?Sized> RemoteClient for Box<C> {
    fn get_associations(&self, feature: &str, phenotype: &str) -> Result<RemoteReply> {
        (**self).get_associations(feature, phenotype)
    }
}

impl<C: RemoteClient + ?Sized> RemoteClient for &C {
    fn get_associations(&self, feature: &str, phenotype: &str) -> Result<RemoteReply> {
        (**self).get_associations(feature, phenotype)
    }
}
