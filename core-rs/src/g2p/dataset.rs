/**
 * dataset.rs
 * Association resolver backed by an RDF triple store
 *
 * A search runs in two phases: a filter query selects the window of matching
 * association nodes, then each selected node is fetched in detail (its own
 * triples plus those of the located entity it points to), flattened and
 * mapped.
 */

use std::collections::HashSet;
use tracing::{debug, info, warn};

use crate::errors::{G2pError, Result};
use crate::g2p::criteria::Criteria;
use crate::g2p::flatten::{flatten, FlattenedRecord, Statement};
use crate::g2p::mapper::association_from_record;
use crate::g2p::queries::{detail_query, search_query};
use crate::g2p::search::window;
use crate::ontology::store::{DataSource, OxigraphStore, TripleStore};
use crate::ontology::vocabulary::{ASSOCIATION_HAS_SUBJECT, OBAN_ASSOCIATION, SEQUENCE_ALTERATION};
use crate::protocol::FeaturePhenotypeAssociation;

/// Resolver over a triple store of OBAN associations
pub struct G2pDataset<S: TripleStore = OxigraphStore> {
    store: S,
    associations_length: usize,
}

impl G2pDataset<OxigraphStore> {
    /// Load every source into one in-memory store, in order
    ///
    /// # Example
    /// ```no_run
    /// use g2p_core::g2p::G2pDataset;
    /// use g2p_core::ontology::DataSource;
    ///
    /// let dataset = G2pDataset::from_sources(&[
    ///     DataSource::new("data/cgd.ttl").with_format("turtle"),
    /// ]).unwrap();
    /// ```
    pub fn from_sources(sources: &[DataSource]) -> Result<Self> {
        let store = OxigraphStore::from_sources(sources)?;
        info!(sources = sources.len(), "G2P dataset loaded");
        Ok(Self::new(store))
    }
}

impl<S: TripleStore> G2pDataset<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            associations_length: 0,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Total matches of the last search, before windowing
    pub fn associations_length(&self) -> usize {
        self.associations_length
    }

    /// Associations matching the AND of the location, drug and disease facets
    pub fn query_labels(
        &mut self,
        location: &Criteria,
        drug: &Criteria,
        disease: &Criteria,
        page_size: Option<i64>,
        offset: i64,
    ) -> Result<Vec<FeaturePhenotypeAssociation>> {
        let search = search_query(location, drug, disease)?;

        let total = self.count(&search.clone().unwindowed().count_distinct("s", "total"))?;
        self.associations_length = total;

        let Some(range) = window(total, page_size, offset) else {
            debug!(total, ?page_size, offset, "requested window is empty");
            return Ok(Vec::new());
        };

        let query = search.order_by("s").limit(range.len()).offset(range.start).build();
        let rows = self.store.select(query.as_str())?;

        let mut seen = HashSet::new();
        let subjects: Vec<String> = rows
            .into_iter()
            .filter_map(|mut row| row.remove("s"))
            .filter(|s| seen.insert(s.clone()))
            .collect();
        debug!(total, selected = subjects.len(), "association search matched");

        subjects
            .iter()
            .map(|subject| association_from_record(&self.detail(subject)?))
            .collect()
    }

    fn count(&self, query: &crate::ontology::SelectQuery) -> Result<usize> {
        let rows = self.store.select(query.build().as_str())?;
        match rows.first().and_then(|row| row.get("total")) {
            Some(total) => total
                .parse()
                .map_err(|_| G2pError::Query(format!("Non-numeric match count: {}", total))),
            None => Ok(0),
        }
    }

    fn statements(&self, subject: &str, class: &str) -> Result<Vec<Statement>> {
        let query = detail_query(subject, class)?.build();
        Ok(self
            .store
            .select(query.as_str())?
            .iter()
            .filter_map(|row| Statement::from_row(subject, row))
            .collect())
    }

    /// Flattened record of one association node with its located entity nested
    ///
    /// With several `association_has_subject` links the first in row order is
    /// used. Without any link, or when the linked entity has no triples, the
    /// location is a bare record carrying only an id.
    pub fn detail(&self, subject: &str) -> Result<FlattenedRecord> {
        let rows = self.statements(subject, OBAN_ASSOCIATION)?;

        let mut links = rows.iter().filter(|row| row.predicate == ASSOCIATION_HAS_SUBJECT);
        let link = links.next().map(|row| row.object.clone());
        let extra = links.count();
        if extra > 0 {
            warn!(subject, extra, "association has several located entities, using the first");
        }

        let location = match link {
            Some(entity) => {
                let mut location = flatten(&self.statements(&entity, SEQUENCE_ALTERATION)?);
                location.id.get_or_insert(entity);
                location
            }
            None => FlattenedRecord::with_id(subject),
        };

        let mut record = flatten(&rows);
        record.id.get_or_insert_with(|| subject.to_string());
        record.location = Some(Box::new(location));
        Ok(record)
    }
}
