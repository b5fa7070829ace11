// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{quads::QuadFinder, Grid, Quad};
use once_cell::sync::OnceCell;

/// Cache for the quads of the current grid.
#[derive(Clone, Debug, Default)]
pub(super) struct QuadCache {
    quads: OnceCell<Vec<Quad>>,
}

impl QuadCache {
    pub(super) fn invalidate(&mut self) {
        self.quads = OnceCell::new();
    }

    pub(super) fn get_or_init_quads(&self, grid: &Grid) -> &[Quad] {
        self.quads.get_or_init(|| QuadFinder::new(grid).find())
    }
}
