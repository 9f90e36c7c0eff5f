/**
 * search.rs
 * Uniform search surface over every association backend
 */

use std::ops::Range;

use crate::drivers::RemoteClient;
use crate::errors::Result;
use crate::g2p::criteria::SearchRequest;
use crate::g2p::dataset::G2pDataset;
use crate::g2p::remote::RemoteG2pDataset;
use crate::ontology::TripleStore;
use crate::protocol::FeaturePhenotypeAssociation;

/// Ordered associations of one search
pub type Associations = std::vec::IntoIter<FeaturePhenotypeAssociation>;

/// Search façade implemented by every backend
///
/// Each call re-runs the resolution. `associations_length` reports the
/// total match count of the last call.
pub trait AssociationSearch {
    fn search(&mut self, request: &SearchRequest) -> Result<Associations>;

    fn associations_length(&self) -> usize;
}

/// Index range `[offset, offset + page_size)` clipped to `total`
///
/// `None` when `offset` is negative or past the end, or `page_size` is not
/// positive. A missing `page_size` runs to the end.
pub fn window(total: usize, page_size: Option<i64>, offset: i64) -> Option<Range<usize>> {
    let start = usize::try_from(offset).ok()?;
    if start >= total {
        return None;
    }

    let end = match page_size {
        None => total,
        Some(size) if size <= 0 => return None,
        Some(size) => start.saturating_add(usize::try_from(size).unwrap_or(usize::MAX)).min(total),
    };
    Some(start..end)
}

impl<S: TripleStore> AssociationSearch for G2pDataset<S> {
    fn search(&mut self, request: &SearchRequest) -> Result<Associations> {
        let associations = self.query_labels(
            &request.feature,
            &request.evidence,
            &request.phenotype,
            request.page_size,
            request.offset,
        )?;
        Ok(associations.into_iter())
    }

    fn associations_length(&self) -> usize {
        G2pDataset::associations_length(self)
    }
}

impl<C: RemoteClient> AssociationSearch for RemoteG2pDataset<C> {
    fn search(&mut self, request: &SearchRequest) -> Result<Associations> {
        let feature = request.feature.as_parameter().unwrap_or_default().to_string();
        let phenotype = request.phenotype.as_parameter().unwrap_or_default().to_string();
        let associations = self.query_labels(
            &feature,
            request.evidence.as_parameter(),
            &phenotype,
            request.page_size,
            request.offset,
        )?;
        Ok(associations.into_iter())
    }

    fn associations_length(&self) -> usize {
        RemoteG2pDataset::associations_length(self)
    }
}
