// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Parser;
use color_eyre::Result;
use fixture_details::{AllFixtures, FixtureDetails};
use kmap_min::truth_table::TruthTable;

#[derive(Debug, Parser)]
pub struct FixtureManagerApp {
    #[clap(subcommand)]
    command: FixtureManagerCommand,
}

#[derive(Debug, Parser)]
pub enum FixtureManagerCommand {
    /// Generate random truth tables, minimize them and write them to the data directory.
    GenerateInputs {
        #[clap(long, short, default_value_t = 64)]
        count: usize,
        #[clap(long, short, default_value_t = 4)]
        inputs: usize,
        #[clap(long, short, default_value_t = 1)]
        outputs: usize,
    },
    /// Minimize a single-output table given by its 1 and don't-care rows.
    Minimize {
        #[clap(long, short)]
        inputs: usize,
        /// Rows whose output is 1.
        #[clap(long)]
        ones: Vec<usize>,
        /// Rows whose output is a don't care. Every other row is 0.
        #[clap(long)]
        dont_cares: Vec<usize>,
    },
}

impl FixtureManagerApp {
    pub fn exec(self) -> Result<()> {
        self.command.exec()
    }
}

impl FixtureManagerCommand {
    pub fn exec(self) -> Result<()> {
        match self {
            Self::GenerateInputs {
                count,
                inputs,
                outputs,
            } => {
                let paths = AllFixtures::get().generate(count, inputs, outputs)?;
                println!(
                    "wrote {} fixtures to {}",
                    paths.len(),
                    AllFixtures::get().dir()
                );
                Ok(())
            }
            Self::Minimize {
                inputs,
                ones,
                dont_cares,
            } => {
                let mut table = TruthTable::new(inputs, 1)?;
                table.fill_output(0, 0)?;
                for row_ix in dont_cares {
                    table.set_output(0, row_ix, -1)?;
                }
                for row_ix in ones {
                    table.set_output(0, row_ix, 1)?;
                }

                let fixture = FixtureDetails::new("minimize", table)?;
                fixture.verify()?;
                print!("{}", fixture.render()?);
                Ok(())
            }
        }
    }
}
