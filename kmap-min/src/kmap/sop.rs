// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{KarnaughMap, Quad};
use crate::{
    gray_code::GrayCode,
    term::{Literal, Term},
};
use itertools::Itertools;
use std::collections::BTreeSet;

impl<'a> KarnaughMap<'a> {
    /// Converts each quad into a product term.
    pub fn extract_sop(&self, quads: &[Quad]) -> Vec<Term> {
        quads.iter().map(|quad| self.extract_term(quad)).collect()
    }

    /// Converts a quad into the product of the variables that are constant across it.
    ///
    /// Row-axis variables come first, numbered from 0, followed by column-axis variables. Since
    /// the row axis holds the high-order bits of the table row, variable `i` is input pin `i`.
    pub fn extract_term(&self, quad: &Quad) -> Term {
        let mut term = Term::default();
        push_shared_literals(&mut term, self.row_codes(), &quad.row_ixs(), 0);
        push_shared_literals(
            &mut term,
            self.col_codes(),
            &quad.col_ixs(),
            self.row_variable_count(),
        );
        term
    }
}

/// Pushes a literal for each bit position where every touched code agrees. Positions that vary
/// are eliminated.
fn push_shared_literals(
    term: &mut Term,
    codes: &[GrayCode],
    touched: &BTreeSet<usize>,
    first_variable_ix: usize,
) {
    for position in 0..codes[0].width() {
        let shared = touched
            .iter()
            .map(|&ix| codes[ix].bit(position))
            .dedup()
            .exactly_one();
        if let Ok(bit) = shared {
            term.push(Literal {
                variable_ix: first_variable_ix + position,
                complemented: !bit,
            });
        }
    }
}
