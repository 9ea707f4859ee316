// Copyright © 2024 Sven Moog
//
// This file is part of fe-rs.
//
// fe-rs is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains primitives that the constructions build on but
//! which carry no security goal of their own, such as the symmetric layer
//! of the hybrid encryption.

pub mod symmetric;
