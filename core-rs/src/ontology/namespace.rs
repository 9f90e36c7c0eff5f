/**
 * namespace.rs
 * Split resource URIs into a local identifier and its namespace
 */

use url::{Position, Url};

use crate::errors::{G2pError, Result};

/// Split `uri` into `(id, namespace)`
///
/// `id` is the last path segment after `separator`. `namespace` keeps scheme,
/// authority and the rest of the path; query and fragment are dropped, so
/// `namespace + id` reconstructs the resource URI.
///
/// # Example
/// ```
/// use g2p_core::ontology::namespace_split;
///
/// let (id, ns) = namespace_split("http://purl.obolibrary.org/obo/GENO_0000408", '/').unwrap();
/// assert_eq!(id, "GENO_0000408");
/// assert_eq!(ns, "http://purl.obolibrary.org/obo/");
/// ```
pub fn namespace_split(uri: &str, separator: char) -> Result<(String, String)> {
    let parsed = Url::parse(uri).map_err(|e| G2pError::MalformedUri(format!("{}: {}", uri, e)))?;

    let path = parsed.path();
    let id = path.rsplit(separator).next().unwrap_or_default();
    let parent = &path[..path.len() - id.len()];

    let namespace = format!("{}{}", &parsed[..Position::BeforePath], parent);
    Ok((id.to_string(), namespace))
}
