// Copyright © 2024 Niklas Siemer, Marvin Beckmann
//
// This file is part of fe-rs.
//
// fe-rs is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the cryptographic constructions of this crate:
//! functional encryption for inner products over polynomial rings and
//! decentralized attribute-based encryption, together with the hashes they
//! rely on. Each scheme is a struct holding its public parameters whose
//! methods provide the scheme's operations.

pub mod abe;
pub mod hash;
pub mod inner_product;
