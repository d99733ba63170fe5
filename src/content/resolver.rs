//! Practical resolution: route parameter → record or not-found.

use thiserror::Error;

use super::catalog::{catalog, PracticalRecord};
use super::id::PracticalId;

/// Failure to resolve a requested practical.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The request was not a valid practical id, or no record exists for it.
    #[error("practical not found: {requested:?}")]
    NotFound { requested: String },
}

/// Resolve a validated id against the catalog.
pub fn resolve(id: PracticalId) -> Result<&'static PracticalRecord, ResolveError> {
    catalog().get(id).ok_or_else(|| ResolveError::NotFound {
        requested: id.to_string(),
    })
}

/// Resolve a raw route parameter such as the text after `/practical/`.
pub fn resolve_str(raw: &str) -> Result<&'static PracticalRecord, ResolveError> {
    let id: PracticalId = raw.parse()?;
    resolve(id)
}
