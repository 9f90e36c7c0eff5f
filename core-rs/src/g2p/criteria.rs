/**
 * criteria.rs
 * Search criteria: one tagged value per facet plus the result window
 */

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::protocol::ExternalIdentifier;

/// Constraint on one search facet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Criteria {
    #[default]
    Absent,
    /// Case-sensitive regex over the facet's label
    Pattern(String),
    /// Any of these identifiers, compared against the facet's bound term
    Ids(Vec<ExternalIdentifier>),
}

impl Criteria {
    /// An empty pattern constrains nothing and is treated as absent
    pub fn pattern(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        if pattern.is_empty() {
            Criteria::Absent
        } else {
            Criteria::Pattern(pattern)
        }
    }

    pub fn ids(ids: Vec<ExternalIdentifier>) -> Self {
        Criteria::Ids(ids)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Criteria::Absent)
    }

    /// Single string form used as a remote query parameter
    ///
    /// Identifier lists contribute their first identifier.
    pub fn as_parameter(&self) -> Option<&str> {
        match self {
            Criteria::Absent => None,
            Criteria::Pattern(pattern) => Some(pattern),
            Criteria::Ids(ids) => ids.first().map(|id| id.identifier.as_str()),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum CriteriaRepr {
    Pattern(String),
    Ids { ids: Vec<ExternalIdentifier> },
}

impl Serialize for Criteria {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Criteria::Absent => serializer.serialize_none(),
            Criteria::Pattern(pattern) => CriteriaRepr::Pattern(pattern.clone()).serialize(serializer),
            Criteria::Ids(ids) => CriteriaRepr::Ids { ids: ids.clone() }.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Criteria {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<CriteriaRepr>::deserialize(deserializer)? {
            None => Criteria::Absent,
            Some(CriteriaRepr::Pattern(pattern)) => Criteria::pattern(pattern),
            Some(CriteriaRepr::Ids { ids }) => Criteria::Ids(ids),
        })
    }
}

/// Search request shared by every backend
///
/// `evidence` constrains the drug / environment facet on graph backends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default)]
    pub feature: Criteria,
    #[serde(default)]
    pub evidence: Criteria,
    #[serde(default)]
    pub phenotype: Criteria,
    #[serde(default)]
    pub page_size: Option<i64>,
    #[serde(default)]
    pub offset: i64,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feature(mut self, criteria: Criteria) -> Self {
        self.feature = criteria;
        self
    }

    pub fn evidence(mut self, criteria: Criteria) -> Self {
        self.evidence = criteria;
        self
    }

    pub fn phenotype(mut self, criteria: Criteria) -> Self {
        self.phenotype = criteria;
        self
    }

    pub fn page_size(mut self, page_size: i64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }
}
