/**
 * queries.rs
 * Search and detail queries over OBAN association graphs
 */

use crate::errors::{G2pError, Result};
use crate::g2p::criteria::Criteria;
use crate::ontology::query::{named_node, Expression, Node, SelectQuery, TriplePattern};
use crate::ontology::vocabulary::{
    ASSOCIATION_HAS_OBJECT, ASSOCIATION_HAS_OBJECT_PROPERTY, ASSOCIATION_HAS_SUBJECT, FALDO_LOCATION,
    HAS_ENVIRONMENT, OBAN_ASSOCIATION, RDFS_LABEL, RDF_TYPE,
};

/// Search dimension of the association graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Location,
    Drug,
    Disease,
}

impl Facet {
    pub fn name(self) -> &'static str {
        match self {
            Facet::Location => "location",
            Facet::Drug => "drug",
            Facet::Disease => "disease",
        }
    }

    /// Variable holding the facet's term
    pub fn term_var(self) -> &'static str {
        self.name()
    }

    /// Variable holding the facet's `rdfs:label`
    pub fn label_var(self) -> &'static str {
        match self {
            Facet::Location => "location_label",
            Facet::Drug => "drug_label",
            Facet::Disease => "disease_label",
        }
    }
}

/// Filter clause for one facet, `None` when the facet is unconstrained
pub fn facet_filter(facet: Facet, criteria: &Criteria) -> Result<Option<Expression>> {
    match criteria {
        Criteria::Absent => Ok(None),
        Criteria::Pattern(pattern) => Ok(Some(Expression::regex(facet.label_var(), pattern.as_str()))),
        Criteria::Ids(ids) if ids.is_empty() => Err(G2pError::InvalidCriteria(format!(
            "identifier list for {} is empty",
            facet.name()
        ))),
        Criteria::Ids(ids) => {
            let terms = ids
                .iter()
                .map(|id| Expression::equals(facet.term_var(), &id.uri()))
                .collect::<Result<Vec<_>>>()?;
            Ok(Some(Expression::Or(terms)))
        }
    }
}

fn triple(subject: &str, predicate: &str, object: &str) -> Result<TriplePattern> {
    Ok(TriplePattern {
        subject: Node::var(subject),
        predicate: Node::iri(predicate)?,
        object: Node::var(object),
    })
}

fn push(query: SelectQuery, pattern: TriplePattern) -> SelectQuery {
    query.triple(pattern.subject, pattern.predicate, pattern.object)
}

/// Query selecting distinct association subjects `?s` matching all present facets
///
/// Fails with `InvalidCriteria` when no facet is constrained. The result window
/// is left to the caller.
pub fn search_query(location: &Criteria, drug: &Criteria, disease: &Criteria) -> Result<SelectQuery> {
    if location.is_absent() && drug.is_absent() && disease.is_absent() {
        return Err(G2pError::InvalidCriteria(
            "At least one of [location, drug, disease] must be specified".to_string(),
        ));
    }

    let mut query = SelectQuery::new()
        .distinct()
        .project("s")
        .triple(Node::var("s"), Node::iri(RDF_TYPE)?, Node::iri(OBAN_ASSOCIATION)?);

    query = push(query, triple("s", ASSOCIATION_HAS_SUBJECT, "l")?);
    query = push(query, triple("l", RDFS_LABEL, "location_label")?);
    if let Criteria::Ids(_) = location {
        query = push(query, triple("l", FALDO_LOCATION, "location")?);
    }
    query = push(query, triple("s", HAS_ENVIRONMENT, "drug")?);
    query = push(query, triple("drug", RDFS_LABEL, "drug_label")?);
    query = push(query, triple("s", ASSOCIATION_HAS_OBJECT, "d")?);
    query = push(query, triple("d", RDFS_LABEL, "disease_label")?);
    query = push(query, triple("d", RDF_TYPE, "disease")?);
    query = push(query, triple("s", ASSOCIATION_HAS_OBJECT_PROPERTY, "evidence")?);
    query = query.optional(vec![triple("evidence", RDFS_LABEL, "evidence_label")?]);

    for (facet, criteria) in [(Facet::Location, location), (Facet::Drug, drug), (Facet::Disease, disease)] {
        if let Some(clause) = facet_filter(facet, criteria)? {
            query = query.filter(clause);
        }
    }
    Ok(query)
}

/// All `?p ?o ?label` rows of `subject`, which must be an instance of `class`
pub fn detail_query(subject: &str, class: &str) -> Result<SelectQuery> {
    Ok(SelectQuery::new()
        .distinct()
        .project("s")
        .project("p")
        .project("o")
        .project("label")
        .values("s", vec![named_node(subject)?])
        .triple(Node::var("s"), Node::iri(RDF_TYPE)?, Node::iri(class)?)
        .triple(Node::var("s"), Node::var("p"), Node::var("o"))
        .optional(vec![triple("o", RDFS_LABEL, "label")?])
        .order_by("p")
        .order_by("o")
        .order_by("label"))
}
