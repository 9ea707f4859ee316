// Copyright © 2024 Phil Milewski
//
// This file is part of fe-rs.
//
// fe-rs is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains SHA-256 based hashes into the domains the
//! multi-authority ABE scheme needs: the pairing group `G1` for global
//! identifiers and a 32-byte symmetric key for the hybrid envelope.

use rabe_bn::{Fr, G1, Gt};
use sha2::{Digest, Sha256};

/// Hashes a given string into the pairing group `G1`.
///
/// Two domain-separated SHA-256 evaluations are concatenated to a 512-bit
/// block, interpreted as a scalar, and applied to the fixed generator.
///
/// Parameters:
/// - `label`: specifies the value that is hashed, e.g. a global identifier
///
/// Returns a [`G1`] element as a hash value for the given string.
///
/// # Examples
/// ```
/// use fe_rs::construction::hash::sha256::hash_to_g1;
///
/// let hash_1 = hash_to_g1("alice");
/// let hash_2 = hash_to_g1("alice");
/// assert!(hash_1 == hash_2);
/// assert!(hash_1 != hash_to_g1("bob"));
/// ```
pub fn hash_to_g1(label: &str) -> G1 {
    let mut block = [0u8; 64];
    for (i, half) in block.chunks_mut(32).enumerate() {
        let mut hasher = Sha256::new();
        hasher.update(i.to_string());
        hasher.update(" ");
        hasher.update(label);
        half.copy_from_slice(&hasher.finalize());
    }

    G1::one() * Fr::interpret(&block)
}

/// Hashes a target-group element into a 32-byte AES-256 key by applying
/// SHA-256 to its canonical serialization.
///
/// Parameters:
/// - `element`: specifies the session key element to be hashed
///
/// Returns a 32-byte symmetric key.
///
/// # Examples
/// ```
/// use fe_rs::construction::hash::sha256::hash_to_sym_key;
/// use rabe_bn::Gt;
///
/// let key = hash_to_sym_key(&Gt::one());
/// assert_eq!(32, key.len());
/// ```
pub fn hash_to_sym_key(element: &Gt) -> [u8; 32] {
    let serialized = serde_json::to_string(element).unwrap();

    let mut hasher = Sha256::new();
    hasher.update(serialized);
    hasher.finalize().into()
}

#[cfg(test)]
mod test_hash_to_g1 {
    use super::hash_to_g1;
    use rabe_bn::G1;

    /// Ensure that hashing is deterministic and distinct labels map to
    /// distinct group elements.
    #[test]
    fn deterministic_and_separating() {
        let labels = ["alice", "bob", "1", "17", ""];

        for label in labels {
            assert!(hash_to_g1(label) == hash_to_g1(label));
        }
        for label in &labels[1..] {
            assert!(hash_to_g1(labels[0]) != hash_to_g1(label));
        }
    }

    /// Ensure that the hash does not map to the neutral element.
    #[test]
    fn non_trivial() {
        assert!(G1::zero() != hash_to_g1("alice"));
    }
}

#[cfg(test)]
mod test_hash_to_sym_key {
    use super::hash_to_sym_key;
    use rabe_bn::{pairing, Fr, G1, G2};

    /// Ensure that equal group elements yield equal keys and distinct
    /// elements distinct keys.
    #[test]
    fn deterministic_and_separating() {
        let egt = pairing(G1::one(), G2::one());
        let other = egt.pow(Fr::from_str("42").unwrap());

        assert_eq!(hash_to_sym_key(&egt), hash_to_sym_key(&egt));
        assert_ne!(hash_to_sym_key(&egt), hash_to_sym_key(&other));
    }
}
