//! Decode boundary between the CMS read layer and the normalizer.
//!
//! Fetching lives with the content client, outside this crate; these
//! helpers own turning a fetched body into raw records so decode failures
//! surface with context instead of bubbling bare serde errors. Callers
//! should fetch with relationship depth >= 1; shallower fetches still
//! decode, but category and media references arrive unexpanded and
//! normalization falls back to the documented defaults for them.

use crate::error::CatalogError;
use crate::types::RawProductRecord;

/// Decodes a single product document.
///
/// # Errors
///
/// Returns [`CatalogError::Deserialize`] when the body is not a valid
/// product document.
pub fn parse_product(body: &[u8]) -> Result<RawProductRecord, CatalogError> {
    serde_json::from_slice(body).map_err(|source| CatalogError::Deserialize {
        context: "product document".to_string(),
        source,
    })
}

/// Decodes a product listing (JSON array of documents).
///
/// # Errors
///
/// Returns [`CatalogError::Deserialize`] when the body is not a valid
/// listing.
pub fn parse_products(body: &[u8]) -> Result<Vec<RawProductRecord>, CatalogError> {
    serde_json::from_slice(body).map_err(|source| CatalogError::Deserialize {
        context: "product listing".to_string(),
        source,
    })
}
