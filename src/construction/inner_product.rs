// Copyright © 2024 Niklas Siemer
//
// This file is part of fe-rs.
//
// fe-rs is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains functional encryption schemes for inner products:
//! a decryptor holding a key for a query vector `y` learns the inner
//! product of the encrypted data with `y` and nothing beyond it.

mod ring_lwe;

pub use ring_lwe::{
    RingLwe, RingLweCiphertext, RingLweDerivedKey, RingLweParams, RingLwePublicKey,
    RingLweSecretKey,
};
