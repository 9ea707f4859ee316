// Copyright © 2024 Marvin Beckmann
//
// This file is part of fe-rs.
//
// fe-rs is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains samplable distributions, most prominently the
//! discrete Gaussian distribution over the integers.

pub mod distribution;
