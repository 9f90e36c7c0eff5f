/**
 * query.rs
 * Structured SPARQL SELECT builder
 *
 * Values enter queries only as validated IRIs or escaped literals, never by
 * substitution into query text.
 */

use oxigraph::model::{Literal, NamedNode};
use std::fmt;

use crate::errors::{G2pError, Result};

/// Rendered query text ready for execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparqlQuery {
    query: String,
}

impl SparqlQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.query
    }
}

impl fmt::Display for SparqlQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query)
    }
}

/// Parse `iri` into a named node, rejecting anything that would not render as `<iri>`
pub fn named_node(iri: &str) -> Result<NamedNode> {
    NamedNode::new(iri).map_err(|e| G2pError::MalformedUri(format!("{}: {}", iri, e)))
}

/// A position in a triple pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Var(String),
    Iri(NamedNode),
}

impl Node {
    pub fn var(name: impl Into<String>) -> Self {
        Node::Var(name.into())
    }

    pub fn iri(iri: &str) -> Result<Self> {
        Ok(Node::Iri(named_node(iri)?))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Var(name) => write!(f, "?{}", name),
            Node::Iri(node) => write!(f, "{}", node),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriplePattern {
    pub subject: Node,
    pub predicate: Node,
    pub object: Node,
}

impl fmt::Display for TriplePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphPattern {
    Triple(TriplePattern),
    Optional(Vec<TriplePattern>),
}

/// FILTER expression tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// `regex(?var, "pattern")`, case sensitive
    Regex { var: String, pattern: String },
    /// `?var = <iri>`
    Equals { var: String, iri: NamedNode },
    Or(Vec<Expression>),
    And(Vec<Expression>),
}

impl Expression {
    pub fn regex(var: impl Into<String>, pattern: impl Into<String>) -> Self {
        Expression::Regex {
            var: var.into(),
            pattern: pattern.into(),
        }
    }

    pub fn equals(var: impl Into<String>, iri: &str) -> Result<Self> {
        Ok(Expression::Equals {
            var: var.into(),
            iri: named_node(iri)?,
        })
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Regex { var, pattern } => {
                write!(f, "regex(?{}, {})", var, Literal::new_simple_literal(pattern.as_str()))
            }
            Expression::Equals { var, iri } => write!(f, "?{} = {}", var, iri),
            Expression::Or(terms) => write_joined(f, terms, " || "),
            Expression::And(terms) => write_joined(f, terms, " && "),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, terms: &[Expression], op: &str) -> fmt::Result {
    if terms.is_empty() {
        // Neutral element of the empty conjunction / disjunction
        return f.write_str(if op.contains('&') { "true" } else { "false" });
    }
    f.write_str("(")?;
    for (i, term) in terms.iter().enumerate() {
        if i > 0 {
            f.write_str(op)?;
        }
        write!(f, "{}", term)?;
    }
    f.write_str(")")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    Var(String),
    CountDistinct { var: String, alias: String },
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Projection::Var(name) => write!(f, "?{}", name),
            Projection::CountDistinct { var, alias } => write!(f, "(COUNT(DISTINCT ?{}) AS ?{})", var, alias),
        }
    }
}

/// Builder for SELECT queries
///
/// # Example
/// ```
/// use g2p_core::ontology::query::{Node, SelectQuery};
///
/// let query = SelectQuery::new()
///     .distinct()
///     .project("p")
///     .triple(Node::var("s"), Node::var("p"), Node::var("o"))
///     .limit(10)
///     .build();
/// assert!(query.as_str().contains("LIMIT 10"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectQuery {
    distinct: bool,
    projection: Vec<Projection>,
    values: Vec<(String, Vec<NamedNode>)>,
    patterns: Vec<GraphPattern>,
    filters: Vec<Expression>,
    order_by: Vec<String>,
    limit: Option<usize>,
    offset: usize,
}

impl SelectQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn project(mut self, var: impl Into<String>) -> Self {
        self.projection.push(Projection::Var(var.into()));
        self
    }

    /// Replace the projection with a single `COUNT(DISTINCT ?var)`
    pub fn count_distinct(mut self, var: impl Into<String>, alias: impl Into<String>) -> Self {
        self.projection = vec![Projection::CountDistinct {
            var: var.into(),
            alias: alias.into(),
        }];
        self
    }

    /// Bind `?var` to each of `iris` through an inline VALUES block
    pub fn values(mut self, var: impl Into<String>, iris: Vec<NamedNode>) -> Self {
        self.values.push((var.into(), iris));
        self
    }

    pub fn triple(mut self, subject: Node, predicate: Node, object: Node) -> Self {
        self.patterns.push(GraphPattern::Triple(TriplePattern {
            subject,
            predicate,
            object,
        }));
        self
    }

    pub fn optional(mut self, patterns: Vec<TriplePattern>) -> Self {
        self.patterns.push(GraphPattern::Optional(patterns));
        self
    }

    /// Add a filter; multiple filters are combined with `&&`
    pub fn filter(mut self, expression: Expression) -> Self {
        self.filters.push(expression);
        self
    }

    pub fn order_by(mut self, var: impl Into<String>) -> Self {
        self.order_by.push(var.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Drop ordering and result window, e.g. before counting
    pub fn unwindowed(mut self) -> Self {
        self.order_by.clear();
        self.limit = None;
        self.offset = 0;
        self
    }

    pub fn build(&self) -> SparqlQuery {
        let mut query = String::from("SELECT ");
        if self.distinct {
            query.push_str("DISTINCT ");
        }
        if self.projection.is_empty() {
            query.push('*');
        } else {
            let vars: Vec<String> = self.projection.iter().map(|p| p.to_string()).collect();
            query.push_str(&vars.join(" "));
        }

        query.push_str("\nWHERE {\n");
        for (var, iris) in &self.values {
            let iris: Vec<String> = iris.iter().map(|iri| iri.to_string()).collect();
            query.push_str(&format!("    VALUES ?{} {{ {} }}\n", var, iris.join(" ")));
        }
        for pattern in &self.patterns {
            match pattern {
                GraphPattern::Triple(triple) => query.push_str(&format!("    {}\n", triple)),
                GraphPattern::Optional(triples) => {
                    let body: Vec<String> = triples.iter().map(|t| t.to_string()).collect();
                    query.push_str(&format!("    OPTIONAL {{ {} }}\n", body.join(" ")));
                }
            }
        }
        match self.filters.len() {
            0 => {}
            1 => query.push_str(&format!("    FILTER ({})\n", self.filters[0])),
            _ => query.push_str(&format!("    FILTER {}\n", Expression::And(self.filters.clone()))),
        }
        query.push('}');

        if !self.order_by.is_empty() {
            let vars: Vec<String> = self.order_by.iter().map(|v| format!("?{}", v)).collect();
            query.push_str(&format!("\nORDER BY {}", vars.join(" ")));
        }
        if let Some(limit) = self.limit {
            query.push_str(&format!("\nLIMIT {}", limit));
        }
        if self.offset > 0 {
            query.push_str(&format!("\nOFFSET {}", self.offset));
        }

        SparqlQuery::new(query)
    }
}
