/**
 * store.rs
 * Triple store seam and its Oxigraph implementation
 */

use oxigraph::io::RdfFormat;
use oxigraph::model::Term;
use oxigraph::sparql::QueryResults;
use oxigraph::store::Store;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use url::Url;

use crate::errors::{G2pError, Result};

/// One solution row: variable name to plain value (IRI, literal lexical form, or `_:id`)
pub type QueryResult = HashMap<String, String>;

/// A configured RDF source: locator plus optional format hint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSource {
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl DataSource {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            format: None,
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Format from the hint, else from the locator's extension, else Turtle
    pub fn rdf_format(&self) -> Result<RdfFormat> {
        if let Some(hint) = self.format.as_deref() {
            return format_from_hint(hint)
                .ok_or_else(|| G2pError::Store(format!("Unknown RDF format hint: {}", hint)));
        }

        let path = match Url::parse(&self.source) {
            Ok(url) if url.scheme().len() > 1 => url.path().to_string(),
            _ => self.source.clone(),
        };

        Ok(Path::new(&path)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(RdfFormat::from_extension)
            .unwrap_or(RdfFormat::Turtle))
    }
}

fn format_from_hint(hint: &str) -> Option<RdfFormat> {
    match hint.to_ascii_lowercase().as_str() {
        "turtle" | "ttl" => Some(RdfFormat::Turtle),
        "nt" | "ntriples" | "n-triples" | "nt11" => Some(RdfFormat::NTriples),
        "nquads" | "nq" | "n-quads" => Some(RdfFormat::NQuads),
        "trig" => Some(RdfFormat::TriG),
        "n3" => Some(RdfFormat::N3),
        "xml" | "rdfxml" | "rdf" | "rdf/xml" | "pretty-xml" => Some(RdfFormat::RdfXml),
        other => RdfFormat::from_media_type(other),
    }
}

/// The graph capabilities the resolvers consume
pub trait TripleStore {
    /// Parse `source` into the store
    fn load(&mut self, source: &DataSource) -> Result<()>;

    /// Run a SELECT query, returning rows of bound variables
    fn select(&self, query: &str) -> Result<Vec<QueryResult>>;
}

/// In-memory Oxigraph store
pub struct OxigraphStore {
    store: Store,
    base_dir: Option<PathBuf>,
}

impl OxigraphStore {
    pub fn new() -> Result<Self> {
        let store = Store::new().map_err(|e| G2pError::Store(e.to_string()))?;
        Ok(Self { store, base_dir: None })
    }

    /// Resolve relative file locators against `dir`
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Create a store and load every source in order
    pub fn from_sources(sources: &[DataSource]) -> Result<Self> {
        let mut store = Self::new()?;
        for source in sources {
            store.load(source)?;
        }
        Ok(store)
    }

    /// Load an in-memory document
    pub fn load_str(&mut self, content: &str, format: RdfFormat) -> Result<()> {
        self.store
            .load_from_reader(format, content.as_bytes())
            .map_err(|e| G2pError::Store(e.to_string()))
    }

    /// Number of quads in the store
    pub fn len(&self) -> Result<usize> {
        self.store.len().map_err(|e| G2pError::Store(e.to_string()))
    }

    pub fn is_empty(&self) -> Result<bool> {
        self.store.is_empty().map_err(|e| G2pError::Store(e.to_string()))
    }

    fn read_source(&self, locator: &str) -> Result<Vec<u8>> {
        if locator.starts_with("http://") || locator.starts_with("https://") {
            let response = reqwest::blocking::get(locator)?.error_for_status()?;
            return Ok(response.bytes()?.to_vec());
        }

        let path = if locator.starts_with("file://") {
            Url::parse(locator)?
                .to_file_path()
                .map_err(|_| G2pError::Store(format!("Not a local file URL: {}", locator)))?
        } else {
            let path = PathBuf::from(locator);
            match &self.base_dir {
                Some(dir) if path.is_relative() => dir.join(path),
                _ => path,
            }
        };

        if !path.is_file() {
            return Err(G2pError::Store(format!("Source not found: {}", path.display())));
        }
        Ok(fs::read(&path)?)
    }
}

impl TripleStore for OxigraphStore {
    fn load(&mut self, source: &DataSource) -> Result<()> {
        let format = source.rdf_format()?;
        info!(source = %source.source, ?format, "loading RDF source");

        let content = self.read_source(&source.source)?;
        self.store
            .load_from_reader(format, content.as_slice())
            .map_err(|e| G2pError::Store(format!("{}: {}", source.source, e)))
    }

    fn select(&self, query: &str) -> Result<Vec<QueryResult>> {
        debug!(query, "executing SPARQL");

        let results = self
            .store
            .query(query)
            .map_err(|e| G2pError::Query(e.to_string()))?;

        match results {
            QueryResults::Solutions(solutions) => {
                let mut rows = Vec::new();

                for solution in solutions {
                    let solution = solution.map_err(|e| G2pError::Query(e.to_string()))?;

                    let mut row = HashMap::new();
                    for (var, term) in solution.iter() {
                        row.insert(var.as_str().to_string(), term_value(term));
                    }
                    rows.push(row);
                }

                Ok(rows)
            }
            QueryResults::Boolean(result) => {
                let mut row = HashMap::new();
                row.insert("result".to_string(), result.to_string());
                Ok(vec![row])
            }
            QueryResults::Graph(_) => Err(G2pError::Query(
                "CONSTRUCT/DESCRIBE queries are not supported".to_string(),
            )),
        }
    }
}

fn term_value(term: &Term) -> String {
    match term {
        Term::NamedNode(node) => node.as_str().to_string(),
        Term::BlankNode(node) => format!("_:{}", node.as_str()),
        Term::Literal(literal) => literal.value().to_string(),
        #[allow(unreachable_patterns)]
        other => other.to_string(),
    }
}
