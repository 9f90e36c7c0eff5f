/**
 * flatten.rs
 * Collapse (subject, predicate, object, label) rows into one record per subject
 */

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

use crate::ontology::QueryResult;

/// One detail row of a subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub subject: String,
    pub predicate: String,
    pub object: String,
    pub label: Option<String>,
}

impl Statement {
    pub fn new(subject: impl Into<String>, predicate: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Read `?p ?o ?label` (and `?s` when bound, else `subject`) from a solution row
    pub fn from_row(subject: &str, row: &QueryResult) -> Option<Self> {
        Some(Self {
            subject: row.get("s").map(String::as_str).unwrap_or(subject).to_string(),
            predicate: row.get("p")?.clone(),
            object: row.get("o")?.clone(),
            label: row.get("label").cloned(),
        })
    }
}

/// Object of a predicate with its optional `rdfs:label`
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PredicateValue {
    pub val: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Non-empty ordered sequence
///
/// Serialises as the bare value while it holds one element and as a list once
/// it holds two or more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneOrMany<T> {
    first: T,
    rest: Vec<T>,
}

impl<T> OneOrMany<T> {
    pub fn new(first: T) -> Self {
        Self {
            first,
            rest: Vec::new(),
        }
    }

    pub fn push(&mut self, value: T) {
        self.rest.push(value);
    }

    pub fn first(&self) -> &T {
        &self.first
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }

    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    pub fn is_many(&self) -> bool {
        !self.rest.is_empty()
    }

    pub fn into_vec(self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len());
        values.push(self.first);
        values.extend(self.rest);
        values
    }
}

impl<T: Serialize> Serialize for OneOrMany<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_many() {
            serializer.collect_seq(self.iter())
        } else {
            self.first.serialize(serializer)
        }
    }
}

/// All predicates of one subject, with the located entity nested under `location`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlattenedRecord {
    pub id: Option<String>,
    predicates: BTreeMap<String, OneOrMany<PredicateValue>>,
    pub location: Option<Box<FlattenedRecord>>,
}

impl FlattenedRecord {
    /// A record with only an id
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn get(&self, predicate: &str) -> Option<&OneOrMany<PredicateValue>> {
        self.predicates.get(predicate)
    }

    pub fn first(&self, predicate: &str) -> Option<&PredicateValue> {
        self.get(predicate).map(OneOrMany::first)
    }

    pub fn contains(&self, predicate: &str) -> bool {
        self.predicates.contains_key(predicate)
    }

    pub fn predicates(&self) -> impl Iterator<Item = (&str, &OneOrMany<PredicateValue>)> {
        self.predicates.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    fn insert(&mut self, predicate: &str, value: PredicateValue) {
        match self.predicates.get_mut(predicate) {
            Some(values) => values.push(value),
            None => {
                self.predicates.insert(predicate.to_string(), OneOrMany::new(value));
            }
        }
    }
}

impl Serialize for FlattenedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(id) = &self.id {
            map.serialize_entry("id", id)?;
        }
        for (predicate, values) in &self.predicates {
            map.serialize_entry(predicate, values)?;
        }
        if let Some(location) = &self.location {
            map.serialize_entry("location", location)?;
        }
        map.end()
    }
}

/// Flatten detail rows into a predicate-keyed record
///
/// A predicate seen once maps to a single value; further occurrences append in
/// row order. The record id is the rows' subject, `None` for no rows.
pub fn flatten(rows: &[Statement]) -> FlattenedRecord {
    let mut record = FlattenedRecord::default();
    for row in rows {
        record.insert(
            &row.predicate,
            PredicateValue {
                val: row.object.clone(),
                label: row.label.clone(),
            },
        );
        record.id = Some(row.subject.clone());
    }
    record
}
