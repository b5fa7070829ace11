// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{caches::QuadCache, GridDisplay, Quad};
use crate::{
    errors::KmapError,
    gray_code::{self, GrayCode},
    term::{SopDisplay, Term},
    truth_table::{OutputValue, TruthTable},
};
use itertools::Itertools;
use log::debug;

/// Wraps `ix` onto an axis of length `len`, so that `-1` is the last index and `len` is the
/// first. Any offset is accepted, not only neighbours.
///
/// Panics if `len` is 0.
///
/// ```
/// use kmap_min::kmap::wrap;
///
/// assert_eq!(wrap(-1, 4), 3);
/// assert_eq!(wrap(4, 4), 0);
/// assert_eq!(wrap(-9, 4), 3);
/// ```
#[inline]
pub fn wrap(ix: isize, len: usize) -> usize {
    let len = len as isize;
    ((ix % len) + len) as usize % len as usize
}

/// A position on a Karnaugh map grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The cells of one output pin laid out along Gray-coded axes.
///
/// The grid is a torus: the first and last rows are adjacent, and so are the first and last
/// columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    output_ix: usize,
    row_codes: Vec<GrayCode>,
    col_codes: Vec<GrayCode>,
    // Row-major.
    cells: Vec<OutputValue>,
}

impl Grid {
    fn build(
        table: &TruthTable,
        output_ix: usize,
        row_codes: &[GrayCode],
        col_codes: &[GrayCode],
    ) -> Result<Self, KmapError> {
        let col_width = col_codes[0].width();
        let cells = row_codes
            .iter()
            .cartesian_product(col_codes)
            .map(|(row_code, col_code)| {
                // Row-axis bits are the high-order bits of the truth table row.
                let row_ix = (row_code.value() << col_width) | col_code.value();
                table.get_output(row_ix, output_ix)
            })
            .collect::<Result<_, _>>()?;

        Ok(Self {
            output_ix,
            row_codes: row_codes.to_vec(),
            col_codes: col_codes.to_vec(),
            cells,
        })
    }

    #[inline]
    pub fn output_ix(&self) -> usize {
        self.output_ix
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.row_codes.len()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.col_codes.len()
    }

    #[inline]
    pub fn row_codes(&self) -> &[GrayCode] {
        &self.row_codes
    }

    #[inline]
    pub fn col_codes(&self) -> &[GrayCode] {
        &self.col_codes
    }

    /// Returns the value at `cell`.
    ///
    /// Panics if `cell` is outside the grid.
    #[inline]
    pub fn get(&self, cell: Cell) -> OutputValue {
        assert!(
            cell.row < self.rows() && cell.col < self.cols(),
            "cell {:?} must be within a {}x{} grid",
            cell,
            self.rows(),
            self.cols()
        );
        self.cells[self.flat_ix(cell)]
    }

    /// Returns the value at a wrapped position.
    #[inline]
    pub fn get_wrapped(&self, row: isize, col: isize) -> OutputValue {
        self.get(self.wrapped_cell(row, col))
    }

    #[inline]
    pub fn wrapped_cell(&self, row: isize, col: isize) -> Cell {
        Cell::new(wrap(row, self.rows()), wrap(col, self.cols()))
    }

    /// The truth table row that `cell` was copied from.
    #[inline]
    pub fn table_row_ix(&self, cell: Cell) -> usize {
        (self.row_codes[cell.row].value() << self.col_codes[0].width())
            | self.col_codes[cell.col].value()
    }

    pub fn cells(&self) -> impl Iterator<Item = (Cell, OutputValue)> + '_ {
        (0..self.rows())
            .cartesian_product(0..self.cols())
            .map(move |(row, col)| {
                let cell = Cell::new(row, col);
                (cell, self.get(cell))
            })
    }

    #[inline]
    pub(super) fn flat_ix(&self, cell: Cell) -> usize {
        cell.row * self.cols() + cell.col
    }

    #[inline]
    pub fn display(&self) -> GridDisplay<'_> {
        GridDisplay::new(self)
    }
}

/// A Karnaugh map over one output pin of a [`TruthTable`] at a time.
///
/// The row axis carries the first `floor(n / 2)` input variables and the column axis the
/// remaining `ceil(n / 2)`. A one-input table has no row variables and maps to a single row of
/// two columns.
///
/// The map borrows its table, so the table cannot change underneath a built grid.
#[derive(Clone, Debug)]
pub struct KarnaughMap<'a> {
    table: &'a TruthTable,
    row_codes: Vec<GrayCode>,
    col_codes: Vec<GrayCode>,
    grid: Option<Grid>,
    cache: QuadCache,
}

impl<'a> KarnaughMap<'a> {
    pub fn new(table: &'a TruthTable) -> Self {
        let num_inputs = table.num_inputs();
        let row_vars = num_inputs / 2;
        let col_vars = num_inputs - row_vars;

        Self {
            table,
            row_codes: axis_codes(row_vars),
            col_codes: axis_codes(col_vars),
            grid: None,
            cache: QuadCache::default(),
        }
    }

    #[inline]
    pub fn table(&self) -> &'a TruthTable {
        self.table
    }

    /// The number of input variables along the row axis.
    #[inline]
    pub fn row_variable_count(&self) -> usize {
        self.row_codes[0].width()
    }

    /// The number of input variables along the column axis.
    #[inline]
    pub fn col_variable_count(&self) -> usize {
        self.col_codes[0].width()
    }

    #[inline]
    pub fn row_codes(&self) -> &[GrayCode] {
        &self.row_codes
    }

    #[inline]
    pub fn col_codes(&self) -> &[GrayCode] {
        &self.col_codes
    }

    /// The grid built by the last call to [`apply`](Self::apply), if any.
    #[inline]
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// Returns the cell `d_row` rows and `d_col` columns away from `cell`, wrapping around both
    /// edges.
    pub fn neighbor(&self, cell: Cell, d_row: isize, d_col: isize) -> Cell {
        Cell::new(
            wrap(cell.row as isize + d_row, self.row_codes.len()),
            wrap(cell.col as isize + d_col, self.col_codes.len()),
        )
    }

    /// Rebuilds the grid from output pin `output_ix` of the table.
    pub fn apply(&mut self, output_ix: usize) -> Result<(), KmapError> {
        self.table.check_output(output_ix)?;
        let grid = Grid::build(self.table, output_ix, &self.row_codes, &self.col_codes)?;
        debug!(
            "apply(output_ix={}): built {}x{} grid",
            output_ix,
            grid.rows(),
            grid.cols()
        );
        self.grid = Some(grid);
        self.cache.invalidate();
        Ok(())
    }

    /// Groups the 1-cells of the current grid into quads.
    ///
    /// The result is computed once per [`apply`](Self::apply).
    pub fn find_quads(&self) -> Result<&[Quad], KmapError> {
        let grid = self.grid.as_ref().ok_or(KmapError::NotApplied)?;
        Ok(self.cache.get_or_init_quads(grid))
    }

    /// Renders terms as a sum of products using the default [`SopDisplay`] settings.
    pub fn render(&self, terms: &[Term]) -> String {
        SopDisplay::new(terms).to_string()
    }

    /// Applies `output_ix`, then finds quads and extracts their terms.
    pub fn minimize(&mut self, output_ix: usize) -> Result<Vec<Term>, KmapError> {
        self.apply(output_ix)?;
        let quads = self.find_quads()?;
        Ok(self.extract_sop(quads))
    }
}

fn axis_codes(num_variables: usize) -> Vec<GrayCode> {
    match num_variables {
        0 => vec![GrayCode::empty()],
        n => gray_code::generate(n),
    }
}
