// Copyright © 2024 Sven Moog
//
// This file is part of fe-rs.
//
// fe-rs is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the symmetric layer of the hybrid encryption:
//! AES-256 in CBC mode with PKCS#7 padding under a fresh initialization
//! vector per encryption.

use crate::error::CryptoError;
use aes::Aes256;
use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::{CryptoRng, RngCore};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// The AES block size in bytes; also the length of the initialization vector.
pub const BLOCK_SIZE: usize = 16;

/// Encrypts a message under a 32-byte key with AES-256-CBC and PKCS#7
/// padding. The initialization vector is sampled uniformly at random for
/// every call.
///
/// Parameters:
/// - `key`: specifies the 32-byte symmetric key
/// - `msg`: specifies the message bytes; the padding extends them to a
///   multiple of [`BLOCK_SIZE`]
/// - `rng`: specifies the cryptographic randomness source for the
///   initialization vector
///
/// Returns the ciphertext and the initialization vector.
///
/// # Examples
/// ```
/// use fe_rs::primitive::symmetric::{decrypt_symmetric, encrypt_symmetric};
///
/// let key = [7u8; 32];
/// let (cipher, iv) = encrypt_symmetric(&key, b"hidden", &mut rand::thread_rng());
///
/// assert_eq!(b"hidden".to_vec(), decrypt_symmetric(&key, &cipher, &iv).unwrap());
/// ```
pub fn encrypt_symmetric<R: RngCore + CryptoRng>(
    key: &[u8; 32],
    msg: &[u8],
    rng: &mut R,
) -> (Vec<u8>, [u8; BLOCK_SIZE]) {
    let mut iv = [0u8; BLOCK_SIZE];
    rng.fill_bytes(&mut iv);

    let cipher = Aes256CbcEnc::new(key.into(), &iv.into()).encrypt_padded_vec_mut::<Pkcs7>(msg);

    (cipher, iv)
}

/// Decrypts an AES-256-CBC ciphertext and strips the PKCS#7 padding.
/// The padding is validated; in particular a final byte exceeding
/// [`BLOCK_SIZE`] or the ciphertext length is rejected.
///
/// Parameters:
/// - `key`: specifies the 32-byte symmetric key
/// - `cipher`: specifies the ciphertext, a positive multiple of
///   [`BLOCK_SIZE`] bytes
/// - `iv`: specifies the initialization vector used during encryption
///
/// Returns the message bytes or a [`CryptoError`] of type
/// [`MalformedCipher`](CryptoError::MalformedCipher) if the ciphertext
/// length or the padding is invalid.
///
/// # Examples
/// ```
/// use fe_rs::primitive::symmetric::{decrypt_symmetric, encrypt_symmetric};
///
/// let key = [7u8; 32];
/// let (cipher, iv) = encrypt_symmetric(&key, b"hidden", &mut rand::thread_rng());
///
/// let msg = decrypt_symmetric(&key, &cipher, &iv).unwrap();
/// assert_eq!(b"hidden".to_vec(), msg);
/// ```
pub fn decrypt_symmetric(
    key: &[u8; 32],
    cipher: &[u8],
    iv: &[u8; BLOCK_SIZE],
) -> Result<Vec<u8>, CryptoError> {
    if cipher.is_empty() || cipher.len() % BLOCK_SIZE != 0 {
        return Err(CryptoError::MalformedCipher(format!(
            "The symmetric layer holds {} bytes, which is not a positive multiple of the block size.",
            cipher.len()
        )));
    }

    Aes256CbcDec::new(key.into(), iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(cipher)
        .map_err(|_| {
            CryptoError::MalformedCipher(String::from(
                "The padding of the symmetric layer is invalid.",
            ))
        })
}
