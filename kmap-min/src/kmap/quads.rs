// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{wrap, Cell, Grid};
use crate::gray_code::GrayCode;
use itertools::Itertools;
use log::trace;
use std::collections::BTreeSet;

/// A rectangular group of 1-cells whose sides are powers of two, possibly wrapping around the
/// edges of the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quad {
    id: usize,
    origin: Cell,
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Quad {
    /// The position of this quad in discovery order.
    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    /// The top-left cell, before wrapping is taken into account.
    #[inline]
    pub fn origin(&self) -> Cell {
        self.origin
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a quad holds at least its anchor cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The member cells in row-major order starting at the origin.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// The distinct grid rows this quad touches.
    pub fn row_ixs(&self) -> BTreeSet<usize> {
        self.cells.iter().map(|cell| cell.row).collect()
    }

    /// The distinct grid columns this quad touches.
    pub fn col_ixs(&self) -> BTreeSet<usize> {
        self.cells.iter().map(|cell| cell.col).collect()
    }
}

/// Greedy, scan-order grouping of the 1-cells of a grid.
///
/// Cells are visited in row-major order. Each 1-cell not yet claimed by a quad anchors a new
/// quad, which grows rightwards then leftwards, then downwards then upwards. Growth may pass
/// through cells claimed by earlier quads, but never through 0 or don't-care cells.
pub(super) struct QuadFinder<'g> {
    grid: &'g Grid,
    // The id of the first quad to claim each cell, row-major.
    owners: Vec<Option<usize>>,
    quads: Vec<Quad>,
}

impl<'g> QuadFinder<'g> {
    pub(super) fn new(grid: &'g Grid) -> Self {
        Self {
            grid,
            owners: vec![None; grid.rows() * grid.cols()],
            quads: Vec::new(),
        }
    }

    pub(super) fn find(mut self) -> Vec<Quad> {
        let grid = self.grid;
        for (anchor, value) in grid.cells() {
            if !value.is_one() || self.owners[grid.flat_ix(anchor)].is_some() {
                continue;
            }
            let (rows, cols) = self.grow(anchor);
            self.claim(rows, cols);
        }
        self.quads
    }

    fn grow(&self, anchor: Cell) -> (Span, Span) {
        let grid = self.grid;
        let anchor_row = anchor.row as isize;

        let cols = grow_span(grid.col_codes(), anchor.col as isize, |col| {
            grid.get_wrapped(anchor_row, col).is_one()
        });
        // A new row is only taken if it is 1 across the whole column span.
        let rows = grow_span(grid.row_codes(), anchor_row, |row| {
            cols.ixs().all(|col| grid.get_wrapped(row, col).is_one())
        });

        (rows, cols)
    }

    fn claim(&mut self, rows: Span, cols: Span) {
        let id = self.quads.len();
        let grid = self.grid;
        let cells: Vec<Cell> = rows
            .ixs()
            .cartesian_product(cols.ixs())
            .map(|(row, col)| grid.wrapped_cell(row, col))
            .collect();

        for cell in &cells {
            self.owners[grid.flat_ix(*cell)].get_or_insert(id);
        }

        let quad = Quad {
            id,
            origin: grid.wrapped_cell(rows.start, cols.start),
            height: rows.len,
            width: cols.len,
            cells,
        };
        trace!(
            "quad {}: {}x{} at {:?}",
            quad.id,
            quad.height,
            quad.width,
            quad.origin
        );
        self.quads.push(quad);
    }
}

/// A run of consecutive, possibly unwrapped, indices along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Span {
    start: isize,
    len: usize,
}

impl Span {
    fn ixs(self) -> impl Iterator<Item = isize> + Clone {
        (0..self.len as isize).map(move |offset| self.start + offset)
    }
}

/// Grows a span from `anchor` one step at a time, first forwards and then backwards, while
/// `is_open` accepts the next index. Only lengths that can form a side of a group are kept.
fn grow_span(codes: &[GrayCode], anchor: isize, mut is_open: impl FnMut(isize) -> bool) -> Span {
    let axis_len = codes.len();
    let mut best = Span {
        start: anchor,
        len: 1,
    };

    let mut len = 1;
    while len < axis_len && is_open(anchor + len as isize) {
        len += 1;
        let span = Span { start: anchor, len };
        if is_group_side(codes, span) {
            best = span;
        }
    }

    let Span { start, len: base } = best;
    let mut extra = 0;
    while base + extra < axis_len && is_open(start - extra as isize - 1) {
        extra += 1;
        let span = Span {
            start: start - extra as isize,
            len: base + extra,
        };
        if is_group_side(codes, span) {
            best = span;
        }
    }

    best
}

/// Returns true if `span` has a power-of-two length and its Gray codes differ in exactly
/// `log2(len)` bit positions, so that the span is a subcube of the axis variables.
fn is_group_side(codes: &[GrayCode], span: Span) -> bool {
    if !span.len.is_power_of_two() {
        return false;
    }
    let code_at = |ix: isize| codes[wrap(ix, codes.len())].value();
    let first = code_at(span.start);
    let varying = span.ixs().fold(0, |acc, ix| acc | (code_at(ix) ^ first));
    varying.count_ones() == span.len.trailing_zeros()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{kmap::KarnaughMap, truth_table::TruthTable};
    use proptest::prelude::*;
    use test_log::test;

    fn table_with_outputs(num_inputs: usize, outputs: &[(usize, i8)]) -> TruthTable {
        let mut table = TruthTable::new(num_inputs, 1).unwrap();
        table.fill_output(0, 0).unwrap();
        for &(row_ix, value) in outputs {
            table.set_output(0, row_ix, value).unwrap();
        }
        table
    }

    fn quads_for(table: &TruthTable) -> Vec<Quad> {
        let mut map = KarnaughMap::new(table);
        map.apply(0).unwrap();
        map.find_quads().unwrap().to_vec()
    }

    #[test]
    fn test_or_function() {
        let table = table_with_outputs(2, &[(1, 1), (2, 1), (3, 1)]);
        let quads = quads_for(&table);

        assert_eq!(quads.len(), 2);
        assert!(quads.iter().all(|quad| quad.len() == 2));
        assert!(quads.iter().all(|quad| !quad.contains(Cell::new(0, 0))));
        for cell in [Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 1)] {
            assert!(quads.iter().any(|quad| quad.contains(cell)), "{:?}", cell);
        }
    }

    #[test]
    fn test_constant_true() {
        let mut table = TruthTable::new(2, 1).unwrap();
        table.fill_output(0, 1).unwrap();
        let quads = quads_for(&table);

        assert_eq!(quads.len(), 1);
        assert_eq!(quads[0].len(), 4);
        assert_eq!((quads[0].height(), quads[0].width()), (2, 2));
    }

    #[test]
    fn test_no_ones() {
        let table = table_with_outputs(3, &[(2, -1)]);
        assert!(quads_for(&table).is_empty());
    }

    #[test]
    fn test_dont_care_blocks_growth() {
        // Grid: [1 x]
        //       [1 0]
        let table = table_with_outputs(2, &[(0, 1), (1, -1), (2, 1)]);
        let quads = quads_for(&table);

        assert_eq!(quads.len(), 1);
        assert_eq!(quads[0].cells(), &[Cell::new(0, 0), Cell::new(1, 0)]);
    }

    #[test]
    fn test_growth_wraps_left() {
        // Rows 000 and 010 sit in the first and last columns of a 2x4 map.
        let table = table_with_outputs(3, &[(0, 1), (2, 1)]);
        let quads = quads_for(&table);

        assert_eq!(quads.len(), 1);
        assert_eq!(quads[0].origin(), Cell::new(0, 3));
        assert_eq!(quads[0].cells(), &[Cell::new(0, 3), Cell::new(0, 0)]);
    }

    #[test]
    fn test_growth_wraps_up() {
        // Rows 0000 and 1000 sit in the first and last rows of a 4x4 map.
        let table = table_with_outputs(4, &[(0, 1), (8, 1)]);
        let quads = quads_for(&table);

        assert_eq!(quads.len(), 1);
        assert_eq!(quads[0].cells(), &[Cell::new(3, 0), Cell::new(0, 0)]);
        assert_eq!(quads[0].row_ixs(), BTreeSet::from([0, 3]));
        assert_eq!(quads[0].col_ixs(), BTreeSet::from([0]));
    }

    #[test]
    fn test_rejects_misaligned_run() {
        // A 4x8 map with ones in columns 1..=4 of the first row. Columns 001 011 010 110 are
        // contiguous but vary in three variables, so they split into two pairs.
        let table = table_with_outputs(5, &[(1, 1), (3, 1), (2, 1), (6, 1)]);
        let quads = quads_for(&table);

        let spans: Vec<_> = quads
            .iter()
            .map(|quad| (quad.origin(), quad.width()))
            .collect();
        assert_eq!(spans, [(Cell::new(0, 1), 2), (Cell::new(0, 3), 2)]);
    }

    #[test]
    fn test_column_growth_needs_full_row() {
        // [1 1 1 1]
        // [1 1 0 0]
        let table = table_with_outputs(3, &[(0, 1), (1, 1), (3, 1), (2, 1), (4, 1), (5, 1)]);
        let quads = quads_for(&table);

        assert_eq!(quads.len(), 2);
        assert_eq!((quads[0].height(), quads[0].width()), (1, 4));
        assert_eq!((quads[1].height(), quads[1].width()), (2, 2));
        // The second quad grows down from row 1 and wraps onto row 0.
        assert_eq!(
            quads[1].cells(),
            &[
                Cell::new(1, 0),
                Cell::new(1, 1),
                Cell::new(0, 0),
                Cell::new(0, 1)
            ]
        );
    }

    proptest! {
        #[test]
        fn proptest_quads_cover_ones(table in any_with::<TruthTable>(Some((1..=7, 1..=1)))) {
            let mut map = KarnaughMap::new(&table);
            map.apply(0).unwrap();
            let grid = map.grid().unwrap();
            let quads = map.find_quads().unwrap();

            let mut claimed = BTreeSet::new();
            for quad in quads {
                prop_assert!(quad.height().is_power_of_two());
                prop_assert!(quad.width().is_power_of_two());
                prop_assert_eq!(quad.len(), quad.height() * quad.width());
                let distinct: BTreeSet<_> = quad.cells().iter().collect();
                prop_assert_eq!(distinct.len(), quad.len(), "cells are distinct");
                prop_assert!(quad.cells().iter().all(|cell| grid.get(*cell).is_one()));
                prop_assert!(
                    quad.cells().iter().any(|cell| !claimed.contains(cell)),
                    "every quad claims a new cell"
                );
                claimed.extend(quad.cells().iter().copied());
            }

            for (cell, value) in grid.cells() {
                prop_assert_eq!(value.is_one(), claimed.contains(&cell), "{:?}", cell);
            }
        }
    }
}
