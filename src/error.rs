// Copyright © 2024 Niklas Siemer
//
// This file is part of fe-rs.
//
// fe-rs is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains this crate's error enum [`CryptoError`].
//! Every fallible operation of the provided schemes returns one of its
//! variants to the caller. The core neither retries nor logs.

use std::error::Error;
use std::fmt;

/// [`CryptoError`] defines this crate's error enum, which holds all
/// errors the provided constructions can return to a caller.
///
/// # Examples
/// ```
/// use fe_rs::error::CryptoError;
///
/// fn refuse_empty_id(id: &str) -> Result<(), CryptoError> {
///     if id.is_empty() {
///         return Err(CryptoError::EmptyId);
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CryptoError {
    /// A coordinate of an input vector or matrix violates its configured bound.
    BoundExceeded(String),
    /// Dimensions of keys, ciphertexts, and inputs are inconsistent.
    DimMismatch(String),
    /// A key violates a structural constraint of the scheme.
    MalformedKey(String),
    /// A ciphertext violates a structural constraint of the scheme,
    /// or its symmetric layer fails to decrypt.
    MalformedCipher(String),
    /// A boolean formula is syntactically invalid or uses reserved
    /// tokens inside attribute names.
    ParseError(String),
    /// An attribute is already contained in an authority's attribute table,
    /// or labels more than one row of an MSP.
    DuplicateAttribute(String),
    /// An attribute is contained neither in the addressed authority's
    /// attribute table nor in any of the provided public keys.
    UnknownAttribute(String),
    /// The owned attributes do not satisfy the ciphertext policy, i.e.
    /// the secret-sharing reconstruction has no solution.
    InsufficientAttributes,
    /// The random number generator or group-element sampling failed.
    RandomnessFailure(String),
    /// No ring degree in the search range yields a modulus for which the
    /// lattice-attack cost model predicts the requested security.
    ParameterSearchFailure(String),
    /// An authority was instantiated with an empty set of attributes.
    EmptyAttributeSet,
    /// An authority was instantiated with an empty identifier.
    EmptyId,
    /// An attribute key was requested for an empty global identifier.
    EmptyGid,
    /// An empty message was provided for encryption.
    EmptyMessage,
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::BoundExceeded(reason) => {
                write!(f, "An input coordinate violates its bound. {reason}")
            }
            CryptoError::DimMismatch(reason) => {
                write!(f, "Mismatching dimensions. {reason}")
            }
            CryptoError::MalformedKey(reason) => write!(f, "Malformed key. {reason}"),
            CryptoError::MalformedCipher(reason) => write!(f, "Malformed ciphertext. {reason}"),
            CryptoError::ParseError(reason) => {
                write!(f, "Could not parse the boolean formula. {reason}")
            }
            CryptoError::DuplicateAttribute(attrib) => {
                write!(f, "Duplicate attribute '{attrib}'.")
            }
            CryptoError::UnknownAttribute(attrib) => {
                write!(f, "Unknown attribute '{attrib}'.")
            }
            CryptoError::InsufficientAttributes => write!(
                f,
                "The provided attribute keys do not satisfy the decryption policy."
            ),
            CryptoError::RandomnessFailure(reason) => {
                write!(f, "Sampling randomness failed. {reason}")
            }
            CryptoError::ParameterSearchFailure(reason) => {
                write!(f, "Parameter search failed. {reason}")
            }
            CryptoError::EmptyAttributeSet => {
                write!(f, "The set of authority attributes must not be empty.")
            }
            CryptoError::EmptyId => write!(f, "The authority id must not be empty."),
            CryptoError::EmptyGid => write!(f, "The global identifier must not be empty."),
            CryptoError::EmptyMessage => write!(f, "The message must not be empty."),
        }
    }
}

impl Error for CryptoError {}

#[cfg(test)]
mod test_crypto_error {
    use super::CryptoError;

    /// Ensure that errors can be distinguished by kind by a caller.
    #[test]
    fn kinds_distinguishable() {
        let err = CryptoError::BoundExceeded(String::from("entry 3 exceeds 100"));

        assert!(matches!(err, CryptoError::BoundExceeded(_)));
        assert!(!matches!(err, CryptoError::DimMismatch(_)));
    }

    /// Ensure that the display output contains the provided context.
    #[test]
    fn display_contains_context() {
        let err = CryptoError::UnknownAttribute(String::from("tier-1"));

        assert!(err.to_string().contains("tier-1"));
    }
}
