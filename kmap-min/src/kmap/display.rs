// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{Cell, Grid};
use std::{borrow::Cow, fmt};

/// Displays a grid with its Gray-code headers:
///
/// ```text
///   | 00 01 11 10
/// 0 |  0  1  1  x
/// 1 |  1  1  0  0
/// ```
#[derive(Clone, Debug)]
pub struct GridDisplay<'a> {
    grid: &'a Grid,
    header_separator: Cow<'a, str>,
}

impl<'a> GridDisplay<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            header_separator: Cow::Borrowed(" |"),
        }
    }

    pub fn with_header_separator(mut self, separator: impl Into<Cow<'a, str>>) -> Self {
        self.header_separator = separator.into();
        self
    }
}

impl<'a> fmt::Display for GridDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let grid = self.grid;
        let row_width = grid.row_codes()[0].width().max(1);
        let col_width = grid.col_codes()[0].width();

        write!(f, "{:row_width$}{}", "", self.header_separator, row_width = row_width)?;
        for code in grid.col_codes() {
            write!(f, " {}", code)?;
        }
        writeln!(f)?;

        for (row, code) in grid.row_codes().iter().enumerate() {
            write!(
                f,
                "{:row_width$}{}",
                code.word(),
                self.header_separator,
                row_width = row_width
            )?;
            for col in 0..grid.cols() {
                let value = grid.get(Cell::new(row, col));
                write!(f, " {:>col_width$}", value.as_char(), col_width = col_width)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
