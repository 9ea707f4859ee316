// Copyright © 2024 Niklas Siemer
//
// This file is part of fe-rs.
//
// fe-rs is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This crate provides prototypes of functional encryption schemes: an
//! inner-product scheme over polynomial rings with automatic parameter
//! selection, and a decentralized multi-authority attribute-based encryption
//! scheme on a pairing group, together with the samplers and policy tooling
//! they are built from.
//!
//! - \[1\] Lewko, Allison, and Waters, Brent (2011).
//! Decentralizing Attribute-Based Encryption.
//! In: Advances in Cryptology - EUROCRYPT 2011.
//! <https://eprint.iacr.org/2010/351.pdf>
//! - \[2\] Bermudo Mera, Jose Maria, Karmakar, Angshuman, Marc, Tilen,
//! and Soleimanian, Azam (2021).
//! Efficient Lattice-Based Inner-Product Functional Encryption.
//! <https://eprint.iacr.org/2021/046.pdf>

pub mod construction;
pub mod error;
pub mod primitive;
pub mod sample;
pub mod utils;
