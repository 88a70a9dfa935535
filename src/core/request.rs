// request-key-core/src/core/request.rs
// ============================================================================
// Module: Request Key Derivation
// Description: Request descriptors and stable key derivation.
// Purpose: Compose the descriptor token with canonical variables text.
// Dependencies: serde, thiserror, crate::core::{canonical, identifiers}
// ============================================================================

//! ## Overview
//! A request descriptor carries either a persisted id assigned ahead of time
//! or the raw request text, plus an operation name for diagnostics. Key
//! derivation selects the id when present, falls back to the text, and
//! appends the canonical compact JSON of the variables. Descriptors with
//! neither token are malformed and fail immediately.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::canonical::CanonicalError;
use crate::core::canonical::canonical_text;
use crate::core::canonical::canonical_variables;
use crate::core::identifiers::OperationName;
use crate::core::identifiers::RequestKey;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while deriving a request key.
///
/// Both variants signal deterministic caller bugs rather than environmental
/// faults; retrying with the same input fails identically.
#[derive(Debug, Error)]
pub enum RequestKeyError {
    /// Descriptor carries neither a persisted id nor request text.
    #[error("request `{name}` has neither a persisted id nor request text")]
    MissingToken {
        /// Operation name of the offending descriptor.
        name: OperationName,
    },
    /// Variables could not be canonicalized.
    #[error(transparent)]
    Canonical(#[from] CanonicalError),
}

// ============================================================================
// SECTION: Request Descriptor
// ============================================================================

/// Descriptor for a compiled request.
///
/// # Invariants
/// - At least one of `id` and `text` must be present for a key to be
///   derivable; absence of both is a construction bug in the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    /// Persisted identifier assigned when the request was compiled.
    pub id: Option<String>,
    /// Raw request text, used as the key token when no persisted id exists.
    pub text: Option<String>,
    /// Operation name, used only for diagnostics.
    pub name: OperationName,
}

impl RequestDescriptor {
    /// Returns the key token: the persisted id when present, else the text.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.id.as_deref().or(self.text.as_deref())
    }
}

// ============================================================================
// SECTION: Key Derivation
// ============================================================================

/// Derives the stable key for a descriptor and its variables.
///
/// The key is the descriptor token immediately followed by the canonical
/// compact JSON of the variables, with no separator. Hosts compare derived
/// keys for equality and hashing; the concatenated form is never parsed back
/// into components.
///
/// # Errors
///
/// Returns [`RequestKeyError::MissingToken`] when the descriptor has neither
/// a persisted id nor request text, and [`RequestKeyError::Canonical`] when
/// the variables cannot be represented in the JSON data model.
pub fn build_request_key<T: Serialize + ?Sized>(
    descriptor: &RequestDescriptor,
    variables: &T,
) -> Result<RequestKey, RequestKeyError> {
    let token = descriptor.token().ok_or_else(|| RequestKeyError::MissingToken {
        name: descriptor.name.clone(),
    })?;
    let canonical = canonical_variables(variables)?;
    let serialized = canonical_text(&canonical)?;

    let mut key = String::with_capacity(token.len() + serialized.len());
    key.push_str(token);
    key.push_str(&serialized);
    Ok(RequestKey::new(key))
}
