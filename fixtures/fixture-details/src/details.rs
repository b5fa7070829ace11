// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use color_eyre::{eyre::bail, Result};
use kmap_min::{
    kmap::KarnaughMap,
    term::{evaluate_sop, SopDisplay, Term},
    truth_table::{OutputValue, TruthTable},
};
use std::fmt::Write;

/// A truth table together with the minimized sum of products of each output.
#[derive(Clone, Debug)]
pub struct FixtureDetails {
    pub name: String,
    pub table: TruthTable,
    pub sops: Vec<Vec<Term>>,
}

impl FixtureDetails {
    pub fn new(name: impl Into<String>, table: TruthTable) -> Result<Self> {
        let sops = table.minimize_all()?;
        Ok(Self {
            name: name.into(),
            table,
            sops,
        })
    }

    /// Checks that every output's sum of products agrees with the table on rows that aren't
    /// don't-cares.
    pub fn verify(&self) -> Result<()> {
        for row_ix in 0..self.table.num_rows() {
            let values: Vec<bool> = self.table.input_row(row_ix)?.iter().map(|b| *b).collect();
            for (output_ix, terms) in self.sops.iter().enumerate() {
                let expected = match self.table.get_output(row_ix, output_ix)? {
                    OutputValue::Zero => false,
                    OutputValue::One => true,
                    OutputValue::DontCare => continue,
                };
                if evaluate_sop(terms, &values) != expected {
                    bail!(
                        "fixture {}: output {} = {} disagrees with row {}",
                        self.name,
                        output_ix,
                        SopDisplay::new(terms),
                        row_ix
                    );
                }
            }
        }
        Ok(())
    }

    /// Renders the table, each output's map and its sum of products.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "# {}", self.name)?;
        write!(out, "{}", self.table)?;

        let mut map = KarnaughMap::new(&self.table);
        for (output_ix, terms) in self.sops.iter().enumerate() {
            map.apply(output_ix)?;
            writeln!(out)?;
            writeln!(out, "## output {}", output_ix)?;
            if let Some(grid) = map.grid() {
                write!(out, "{}", grid.display())?;
            }
            writeln!(out, "= {}", SopDisplay::new(terms))?;
        }
        Ok(out)
    }
}
