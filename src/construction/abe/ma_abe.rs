// Copyright © 2024 Niklas Siemer
//
// This file is part of fe-rs.
//
// fe-rs is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains an implementation of the decentralized
//! ciphertext-policy attribute-based encryption scheme of
//! [\[1\]](<../../index.html#:~:text=[1]>).
//!
//! Attributes are spread over independent authorities without a central
//! party. Each authority hands out per-attribute keys bound to a user's
//! global identifier; a ciphertext carries a monotone span program as its
//! policy, and any user whose keys satisfy the policy recovers the payload.
//! Payloads of arbitrary length are wrapped in a hybrid envelope: a random
//! target-group element is encrypted under the policy and its hash keys an
//! AES-256-CBC layer.

use super::policy::{gaussian_elimination, Msp};
use crate::construction::hash::sha256::{hash_to_g1, hash_to_sym_key};
use crate::error::CryptoError;
use crate::primitive::symmetric::{decrypt_symmetric, encrypt_symmetric, BLOCK_SIZE};
use rabe_bn::{pairing, Fr, G1, G2, Gt};
use rand::{CryptoRng, Rng, RngCore};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// The public parameters of a decentralized ABE instance: the generators of
/// the pairing groups and `egt = e(g1, g2)`.
///
/// All operations of the scheme are methods on this struct. It is immutable
/// after construction and can be shared freely; authorities are created from
/// it with [`MaAbe::new_authority`].
///
/// # Examples
/// ```
/// use fe_rs::construction::abe::{MaAbe, Msp};
///
/// let mut rng = rand::thread_rng();
/// let scheme = MaAbe::new();
/// let auth = scheme
///     .new_authority("university", &["student", "staff"], &mut rng)
///     .unwrap();
///
/// let msp = Msp::from_boolean_formula("student OR staff").unwrap();
/// let cipher = scheme
///     .encrypt(b"lecture notes", &msp, &[&auth.pub_keys()], &mut rng)
///     .unwrap();
///
/// let keys = auth.attribute_keys("alice", &["student"]).unwrap();
/// assert_eq!(b"lecture notes".to_vec(), scheme.decrypt(&cipher, &keys).unwrap());
/// ```
#[derive(Clone, Serialize, Deserialize)]
pub struct MaAbe {
    g1: G1,
    g2: G2,
    gt: Gt,
}

/// The public key of an authority: for every attribute `a` it holds the
/// pair `(egt^{α_a}, g2^{y_a})`, keyed by attribute name.
#[derive(Clone, Serialize, Deserialize)]
pub struct MaAbePubKey {
    pub attribs: Vec<String>,
    pub egt_to_alpha: HashMap<String, Gt>,
    pub g2_to_y: HashMap<String, G2>,
}

/// The secret key of an authority: for every attribute `a` it holds the
/// exponent pair `(α_a, y_a)`, keyed by attribute name.
#[derive(Clone, Serialize, Deserialize)]
pub struct MaAbeSecKey {
    pub attribs: Vec<String>,
    alpha: HashMap<String, Fr>,
    y: HashMap<String, Fr>,
}

/// An authority of the decentralized ABE scheme. Its attribute set grows
/// monotonically via [`MaAbeAuth::add_attribute`]; single attributes can be
/// rotated with [`MaAbeAuth::regenerate_key`], which invalidates previously
/// issued keys and outstanding ciphertexts for that attribute.
#[derive(Clone, Serialize, Deserialize)]
pub struct MaAbeAuth {
    pub id: String,
    scheme: MaAbe,
    pk: MaAbePubKey,
    sk: MaAbeSecKey,
}

impl fmt::Debug for MaAbeAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaAbeAuth")
            .field("id", &self.id)
            .field("attribs", &self.pk.attribs)
            .finish()
    }
}

/// An attribute key `g1^{α_a} * H(gid)^{y_a}` issued by the authority owning
/// attribute `a` to the user identified by `gid`.
#[derive(Clone, Serialize, Deserialize)]
pub struct MaAbeKey {
    pub gid: String,
    pub attrib: String,
    pub key: G1,
}

/// A ciphertext of the decentralized ABE scheme: the blinded session key
/// `c0`, the per-attribute components `c1, c2, c3`, the policy, and the
/// symmetric layer.
#[derive(Clone, Serialize, Deserialize)]
pub struct MaAbeCipher {
    c0: Gt,
    c1: HashMap<String, Gt>,
    c2: HashMap<String, G2>,
    c3: HashMap<String, G2>,
    pub msp: Msp,
    sym_enc: Vec<u8>,
    iv: [u8; BLOCK_SIZE],
}

impl fmt::Debug for MaAbeCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaAbeCipher")
            .field("policy_rows", &self.msp.row_to_attrib)
            .field("sym_enc_len", &self.sym_enc.len())
            .finish()
    }
}

impl MaAbe {
    /// Instantiates the scheme with the fixed generators of the pairing
    /// groups and `egt = e(g1, g2)`.
    ///
    /// # Examples
    /// ```
    /// use fe_rs::construction::abe::MaAbe;
    ///
    /// let scheme = MaAbe::new();
    /// ```
    pub fn new() -> Self {
        let g1 = G1::one();
        let g2 = G2::one();
        Self {
            g1,
            g2,
            gt: pairing(g1, g2),
        }
    }

    /// Sets up a new authority holding the given attributes: for every
    /// attribute a fresh exponent pair `(α_a, y_a)` is sampled and the
    /// public pair `(egt^{α_a}, g2^{y_a})` published.
    ///
    /// Parameters:
    /// - `id`: specifies the identifier of the authority
    /// - `attribs`: specifies the attributes the authority is responsible for
    /// - `rng`: specifies the cryptographic randomness source
    ///
    /// Returns a new [`MaAbeAuth`] or a [`CryptoError`] of type
    /// [`EmptyId`](CryptoError::EmptyId),
    /// [`EmptyAttributeSet`](CryptoError::EmptyAttributeSet), or
    /// [`DuplicateAttribute`](CryptoError::DuplicateAttribute) if the inputs
    /// are degenerate.
    ///
    /// # Examples
    /// ```
    /// use fe_rs::construction::abe::MaAbe;
    ///
    /// let scheme = MaAbe::new();
    /// let auth = scheme
    ///     .new_authority("hospital", &["doctor", "nurse"], &mut rand::thread_rng())
    ///     .unwrap();
    /// ```
    pub fn new_authority<R: RngCore + CryptoRng>(
        &self,
        id: &str,
        attribs: &[&str],
        rng: &mut R,
    ) -> Result<MaAbeAuth, CryptoError> {
        if id.is_empty() {
            return Err(CryptoError::EmptyId);
        }
        if attribs.is_empty() {
            return Err(CryptoError::EmptyAttributeSet);
        }

        let mut alpha = HashMap::new();
        let mut y = HashMap::new();
        let mut egt_to_alpha = HashMap::new();
        let mut g2_to_y = HashMap::new();
        for &attrib in attribs {
            if alpha.contains_key(attrib) {
                return Err(CryptoError::DuplicateAttribute(attrib.to_owned()));
            }
            let alpha_a: Fr = rng.gen();
            let y_a: Fr = rng.gen();
            egt_to_alpha.insert(attrib.to_owned(), self.gt.pow(alpha_a));
            g2_to_y.insert(attrib.to_owned(), self.g2 * y_a);
            alpha.insert(attrib.to_owned(), alpha_a);
            y.insert(attrib.to_owned(), y_a);
        }

        let attribs: Vec<String> = attribs.iter().map(|attrib| (*attrib).to_owned()).collect();
        Ok(MaAbeAuth {
            id: id.to_owned(),
            scheme: self.clone(),
            pk: MaAbePubKey {
                attribs: attribs.clone(),
                egt_to_alpha,
                g2_to_y,
            },
            sk: MaAbeSecKey { attribs, alpha, y },
        })
    }

    /// Encrypts a message under the given policy. The message is wrapped in
    /// an AES-256-CBC envelope keyed by the hash of a uniformly random
    /// target-group element, which is in turn secret-shared over the rows of
    /// the MSP.
    ///
    /// Parameters:
    /// - `msg`: specifies the message bytes, which must not be empty
    /// - `msp`: specifies the decryption policy; its row labeling must be
    ///   injective
    /// - `pks`: specifies the public keys of the authorities that jointly
    ///   cover every attribute of the policy
    /// - `rng`: specifies the cryptographic randomness source
    ///
    /// Returns a [`MaAbeCipher`] or a [`CryptoError`] of type
    /// [`EmptyMessage`](CryptoError::EmptyMessage),
    /// [`MalformedCipher`](CryptoError::MalformedCipher),
    /// [`DuplicateAttribute`](CryptoError::DuplicateAttribute),
    /// [`DimMismatch`](CryptoError::DimMismatch), or
    /// [`UnknownAttribute`](CryptoError::UnknownAttribute) if the policy or
    /// the key material is unusable.
    ///
    /// # Examples
    /// ```
    /// use fe_rs::construction::abe::{MaAbe, Msp};
    ///
    /// let mut rng = rand::thread_rng();
    /// let scheme = MaAbe::new();
    /// let auth = scheme.new_authority("a1", &["1", "2"], &mut rng).unwrap();
    /// let msp = Msp::from_boolean_formula("1 AND 2").unwrap();
    ///
    /// let cipher = scheme
    ///     .encrypt(b"payload", &msp, &[&auth.pub_keys()], &mut rng)
    ///     .unwrap();
    /// ```
    pub fn encrypt<R: RngCore + CryptoRng>(
        &self,
        msg: &[u8],
        msp: &Msp,
        pks: &[&MaAbePubKey],
        rng: &mut R,
    ) -> Result<MaAbeCipher, CryptoError> {
        use qfall_math::traits::{GetNumColumns, GetNumRows};

        if msg.is_empty() {
            return Err(CryptoError::EmptyMessage);
        }
        let rows = msp.mat.get_num_rows();
        let cols = msp.mat.get_num_columns();
        if rows == 0 || cols == 0 {
            return Err(CryptoError::MalformedCipher(String::from(
                "The policy matrix must not be empty.",
            )));
        }
        if msp.row_to_attrib.len() != rows as usize {
            return Err(CryptoError::DimMismatch(String::from(
                "The policy labels a different number of rows than its matrix has.",
            )));
        }
        let mut seen = HashSet::new();
        for attrib in &msp.row_to_attrib {
            if !seen.insert(attrib) {
                return Err(CryptoError::DuplicateAttribute(attrib.clone()));
            }
        }

        // hybrid envelope under a fresh session key
        let session_key = self.gt.pow(rng.gen());
        let (sym_enc, iv) = encrypt_symmetric(&hash_to_sym_key(&session_key), msg, rng);

        // share the secret s = v[0] as λ = M*v and the zero as ω = M*w
        let v: Vec<Fr> = (0..cols).map(|_| rng.gen()).collect();
        let s = v[0];
        let mut w: Vec<Fr> = (0..cols).map(|_| rng.gen()).collect();
        w[0] = Fr::zero();

        let mut c1 = HashMap::new();
        let mut c2 = HashMap::new();
        let mut c3 = HashMap::new();
        for i in 0..rows {
            let attrib = &msp.row_to_attrib[i as usize];
            let row = msp.row_as_fr(i);
            let lambda = dot(&row, &v);
            let omega = dot(&row, &w);

            let pk = pks
                .iter()
                .find(|pk| pk.egt_to_alpha.contains_key(attrib))
                .ok_or_else(|| CryptoError::UnknownAttribute(attrib.clone()))?;

            let r_a: Fr = rng.gen();
            c1.insert(
                attrib.clone(),
                self.gt.pow(lambda) * pk.egt_to_alpha[attrib].pow(r_a),
            );
            c2.insert(attrib.clone(), self.g2 * r_a);
            c3.insert(attrib.clone(), pk.g2_to_y[attrib] * r_a + self.g2 * omega);
        }

        Ok(MaAbeCipher {
            c0: session_key * self.gt.pow(s),
            c1,
            c2,
            c3,
            msp: msp.clone(),
            sym_enc,
            iv,
        })
    }

    /// Decrypts a ciphertext with a bag of attribute keys, all bound to the
    /// same global identifier. Succeeds exactly if the attributes of the
    /// provided keys satisfy the ciphertext policy.
    ///
    /// Parameters:
    /// - `cipher`: specifies the ciphertext
    /// - `keys`: specifies the attribute keys, possibly issued by different
    ///   authorities, all carrying the same `gid`
    ///
    /// Returns the message bytes or a [`CryptoError`] of type
    /// [`MalformedKey`](CryptoError::MalformedKey),
    /// [`InsufficientAttributes`](CryptoError::InsufficientAttributes), or
    /// [`MalformedCipher`](CryptoError::MalformedCipher) if the keys are
    /// inconsistent, the policy is not satisfied, or the symmetric layer
    /// rejects.
    ///
    /// # Examples
    /// ```
    /// use fe_rs::construction::abe::{MaAbe, Msp};
    ///
    /// let mut rng = rand::thread_rng();
    /// let scheme = MaAbe::new();
    /// let auth = scheme.new_authority("a1", &["1"], &mut rng).unwrap();
    /// let msp = Msp::from_boolean_formula("1").unwrap();
    /// let cipher = scheme
    ///     .encrypt(b"payload", &msp, &[&auth.pub_keys()], &mut rng)
    ///     .unwrap();
    ///
    /// let keys = auth.attribute_keys("alice", &["1"]).unwrap();
    /// assert_eq!(b"payload".to_vec(), scheme.decrypt(&cipher, &keys).unwrap());
    /// ```
    pub fn decrypt(
        &self,
        cipher: &MaAbeCipher,
        keys: &[MaAbeKey],
    ) -> Result<Vec<u8>, CryptoError> {
        let Some(first) = keys.first() else {
            return Err(CryptoError::MalformedKey(String::from(
                "The set of attribute keys must not be empty.",
            )));
        };
        let gid = &first.gid;
        if keys.iter().any(|key| &key.gid != gid) {
            return Err(CryptoError::MalformedKey(String::from(
                "All attribute keys must carry the same global identifier.",
            )));
        }

        let key_by_attrib: HashMap<&String, &MaAbeKey> =
            keys.iter().map(|key| (&key.attrib, key)).collect();

        // restrict the policy to the rows usable with the provided keys
        let mut sub_rows = Vec::new();
        let mut attribs = Vec::new();
        for (i, attrib) in cipher.msp.row_to_attrib.iter().enumerate() {
            if key_by_attrib.contains_key(attrib)
                && cipher.c1.contains_key(attrib)
                && cipher.c2.contains_key(attrib)
                && cipher.c3.contains_key(attrib)
            {
                sub_rows.push(cipher.msp.row_as_fr(i as i64));
                attribs.push(attrib.clone());
            }
        }
        if sub_rows.is_empty() {
            return Err(CryptoError::InsufficientAttributes);
        }

        // reconstruction coefficients: solve M_S^t * c = (1, 0, ..., 0)
        let cols = sub_rows[0].len();
        let transposed: Vec<Vec<Fr>> = (0..cols)
            .map(|j| sub_rows.iter().map(|row| row[j]).collect())
            .collect();
        let mut target = vec![Fr::zero(); cols];
        target[0] = Fr::one();
        let coefficients = gaussian_elimination(&transposed, &target)
            .ok_or(CryptoError::InsufficientAttributes)?;

        // peel the blinding: each factor equals egt^{λ_a} * e(H, g2)^{ω_a},
        // and the coefficients cancel the ω-parts while summing the λ-shares
        let hash = hash_to_g1(gid);
        let mut blinding = Gt::one();
        for (i, attrib) in attribs.iter().enumerate() {
            let share = cipher.c1[attrib]
                * pairing(hash, cipher.c3[attrib])
                * pairing(key_by_attrib[attrib].key, cipher.c2[attrib]).inverse();
            blinding = blinding * share.pow(coefficients[i]);
        }

        let session_key = cipher.c0 * blinding.inverse();
        decrypt_symmetric(&hash_to_sym_key(&session_key), &cipher.sym_enc, &cipher.iv)
    }
}

impl Default for MaAbe {
    fn default() -> Self {
        Self::new()
    }
}

impl MaAbeAuth {
    /// Returns a copy of this authority's public keys.
    ///
    /// # Examples
    /// ```
    /// use fe_rs::construction::abe::MaAbe;
    ///
    /// let scheme = MaAbe::new();
    /// let auth = scheme
    ///     .new_authority("a1", &["1"], &mut rand::thread_rng())
    ///     .unwrap();
    ///
    /// let pk = auth.pub_keys();
    /// assert_eq!(vec!["1"], pk.attribs);
    /// ```
    pub fn pub_keys(&self) -> MaAbePubKey {
        self.pk.clone()
    }

    /// Generates key material for a new attribute and adds it to the
    /// authority's tables.
    ///
    /// Parameters:
    /// - `attrib`: specifies the attribute to add
    /// - `rng`: specifies the cryptographic randomness source
    ///
    /// Returns a [`CryptoError`] of type
    /// [`DuplicateAttribute`](CryptoError::DuplicateAttribute) if the
    /// attribute is already held by this authority.
    ///
    /// # Examples
    /// ```
    /// use fe_rs::construction::abe::MaAbe;
    ///
    /// let mut rng = rand::thread_rng();
    /// let scheme = MaAbe::new();
    /// let mut auth = scheme.new_authority("a1", &["1"], &mut rng).unwrap();
    ///
    /// auth.add_attribute("2", &mut rng).unwrap();
    /// assert!(auth.add_attribute("2", &mut rng).is_err());
    /// ```
    pub fn add_attribute<R: RngCore + CryptoRng>(
        &mut self,
        attrib: &str,
        rng: &mut R,
    ) -> Result<(), CryptoError> {
        if self.sk.alpha.contains_key(attrib) {
            return Err(CryptoError::DuplicateAttribute(attrib.to_owned()));
        }

        self.insert_attribute(attrib, rng);
        self.sk.attribs.push(attrib.to_owned());
        self.pk.attribs.push(attrib.to_owned());
        Ok(())
    }

    /// Resamples the key material of an existing attribute, e.g. after a
    /// partial compromise. All previously issued attribute keys for `attrib`
    /// become invalid, and ciphertexts whose policy contains `attrib` have
    /// to be re-encrypted under the new public key.
    ///
    /// Parameters:
    /// - `attrib`: specifies the attribute to rotate
    /// - `rng`: specifies the cryptographic randomness source
    ///
    /// Returns a [`CryptoError`] of type
    /// [`UnknownAttribute`](CryptoError::UnknownAttribute) if the attribute
    /// is not held by this authority.
    ///
    /// # Examples
    /// ```
    /// use fe_rs::construction::abe::MaAbe;
    ///
    /// let mut rng = rand::thread_rng();
    /// let scheme = MaAbe::new();
    /// let mut auth = scheme.new_authority("a1", &["1"], &mut rng).unwrap();
    ///
    /// auth.regenerate_key("1", &mut rng).unwrap();
    /// assert!(auth.regenerate_key("2", &mut rng).is_err());
    /// ```
    pub fn regenerate_key<R: RngCore + CryptoRng>(
        &mut self,
        attrib: &str,
        rng: &mut R,
    ) -> Result<(), CryptoError> {
        if !self.sk.alpha.contains_key(attrib) {
            return Err(CryptoError::UnknownAttribute(attrib.to_owned()));
        }

        self.insert_attribute(attrib, rng);
        Ok(())
    }

    /// Samples a fresh exponent pair for `attrib` and (re)places the secret
    /// and public entries.
    fn insert_attribute<R: RngCore + CryptoRng>(&mut self, attrib: &str, rng: &mut R) {
        let alpha_a: Fr = rng.gen();
        let y_a: Fr = rng.gen();

        self.pk
            .egt_to_alpha
            .insert(attrib.to_owned(), self.scheme.gt.pow(alpha_a));
        self.pk
            .g2_to_y
            .insert(attrib.to_owned(), self.scheme.g2 * y_a);
        self.sk.alpha.insert(attrib.to_owned(), alpha_a);
        self.sk.y.insert(attrib.to_owned(), y_a);
    }

    /// Issues attribute keys for the user identified by `gid`. The authority
    /// is expected to have verified by some other channel that the user
    /// actually possesses the requested attributes.
    ///
    /// Parameters:
    /// - `gid`: specifies the global identifier of the user
    /// - `attribs`: specifies the requested attributes
    ///
    /// Returns one [`MaAbeKey`] per requested attribute or a [`CryptoError`]
    /// of type [`EmptyGid`](CryptoError::EmptyGid),
    /// [`EmptyAttributeSet`](CryptoError::EmptyAttributeSet), or
    /// [`UnknownAttribute`](CryptoError::UnknownAttribute) if a requested
    /// attribute is not held by this authority.
    ///
    /// # Examples
    /// ```
    /// use fe_rs::construction::abe::MaAbe;
    ///
    /// let scheme = MaAbe::new();
    /// let auth = scheme
    ///     .new_authority("a1", &["1", "2"], &mut rand::thread_rng())
    ///     .unwrap();
    ///
    /// let keys = auth.attribute_keys("alice", &["1", "2"]).unwrap();
    /// assert_eq!(2, keys.len());
    /// ```
    pub fn attribute_keys(
        &self,
        gid: &str,
        attribs: &[&str],
    ) -> Result<Vec<MaAbeKey>, CryptoError> {
        if gid.is_empty() {
            return Err(CryptoError::EmptyGid);
        }
        if attribs.is_empty() {
            return Err(CryptoError::EmptyAttributeSet);
        }

        let hash = hash_to_g1(gid);
        let mut keys = Vec::with_capacity(attribs.len());
        for &attrib in attribs {
            let (Some(alpha_a), Some(y_a)) = (self.sk.alpha.get(attrib), self.sk.y.get(attrib))
            else {
                return Err(CryptoError::UnknownAttribute(attrib.to_owned()));
            };

            keys.push(MaAbeKey {
                gid: gid.to_owned(),
                attrib: attrib.to_owned(),
                key: self.scheme.g1 * *alpha_a + hash * *y_a,
            });
        }
        Ok(keys)
    }
}

/// Inner product of two equally long vectors over the scalar field.
fn dot(row: &[Fr], vec: &[Fr]) -> Fr {
    row.iter()
        .zip(vec)
        .fold(Fr::zero(), |acc, (a, b)| acc + *a * *b)
}

#[cfg(test)]
mod test_authority {
    use super::MaAbe;
    use crate::error::CryptoError;

    /// Ensure that degenerate authority parameters are rejected.
    #[test]
    fn degenerate_setup() {
        let mut rng = rand::thread_rng();
        let scheme = MaAbe::new();

        assert_eq!(
            Err(CryptoError::EmptyId),
            scheme.new_authority("", &["1"], &mut rng).map(|_| ())
        );
        assert_eq!(
            Err(CryptoError::EmptyAttributeSet),
            scheme.new_authority("a1", &[], &mut rng).map(|_| ())
        );
        assert!(scheme.new_authority("a1", &["1", "1"], &mut rng).is_err());
    }

    /// Ensure that attributes can be added exactly once and keys only
    /// regenerated for known attributes.
    #[test]
    fn attribute_table_preconditions() {
        let mut rng = rand::thread_rng();
        let scheme = MaAbe::new();
        let mut auth = scheme.new_authority("a1", &["1"], &mut rng).unwrap();

        assert!(auth.add_attribute("2", &mut rng).is_ok());
        assert_eq!(
            Err(CryptoError::DuplicateAttribute(String::from("2"))),
            auth.add_attribute("2", &mut rng)
        );
        assert!(auth.regenerate_key("2", &mut rng).is_ok());
        assert_eq!(
            Err(CryptoError::UnknownAttribute(String::from("3"))),
            auth.regenerate_key("3", &mut rng)
        );
    }

    /// Ensure that issued keys carry the requested gid and attribute and
    /// that unknown attributes are refused.
    #[test]
    fn key_issuance() {
        let mut rng = rand::thread_rng();
        let scheme = MaAbe::new();
        let auth = scheme.new_authority("a1", &["1", "4"], &mut rng).unwrap();

        let keys = auth.attribute_keys("alice", &["1", "4"]).unwrap();
        assert_eq!(2, keys.len());
        assert!(keys.iter().all(|key| key.gid == "alice"));

        assert_eq!(
            Err(CryptoError::EmptyGid),
            auth.attribute_keys("", &["1"]).map(|_| ())
        );
        assert!(matches!(
            auth.attribute_keys("alice", &["2"]),
            Err(CryptoError::UnknownAttribute(_))
        ));
    }
}
