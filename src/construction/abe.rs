// Copyright © 2024 Marvin Beckmann
//
// This file is part of fe-rs.
//
// fe-rs is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains attribute-based encryption: the decentralized
//! multi-authority scheme of Lewko and Waters and the monotone span
//! programs representing its decryption policies.

mod ma_abe;
mod policy;

pub use ma_abe::{MaAbe, MaAbeAuth, MaAbeCipher, MaAbeKey, MaAbePubKey, MaAbeSecKey};
pub use policy::Msp;
