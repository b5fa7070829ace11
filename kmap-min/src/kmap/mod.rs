// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

mod caches;
mod display;
mod map_impl;
mod quads;
mod sop;

pub use display::*;
pub use map_impl::*;
pub use quads::*;
