// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{details::FixtureDetails, value_generator::ValueGenerator};
use camino::{Utf8Path, Utf8PathBuf};
use color_eyre::{eyre::WrapErr, Result};
use kmap_min::truth_table::TruthTable;
use once_cell::sync::Lazy;
use proptest::prelude::*;

pub struct AllFixtures {
    dir: Utf8PathBuf,
}

static ALL_FIXTURES_STATIC: Lazy<AllFixtures> = Lazy::new(AllFixtures::init);

impl AllFixtures {
    pub fn get() -> &'static Self {
        &*ALL_FIXTURES_STATIC
    }

    fn init() -> Self {
        let dir: Utf8PathBuf = env!("CARGO_MANIFEST_DIR").into();
        let dir = dir
            .parent()
            .expect("fixture-details lives under fixtures/")
            .join("data");
        Self { dir }
    }

    #[inline]
    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }

    /// Generates `count` random tables with the given pin counts, minimizes and verifies them,
    /// and writes each one to the data directory.
    pub fn generate(
        &self,
        count: usize,
        num_inputs: usize,
        num_outputs: usize,
    ) -> Result<Vec<Utf8PathBuf>> {
        let fixtures = Self::generate_details(count, num_inputs, num_outputs)?;

        std::fs::create_dir_all(&self.dir)
            .wrap_err_with(|| format!("creating fixture directory {}", self.dir))?;

        let mut paths = Vec::with_capacity(fixtures.len());
        for fixture in &fixtures {
            let path = self.dir.join(format!("{}.txt", fixture.name));
            std::fs::write(&path, fixture.render()?)
                .wrap_err_with(|| format!("writing fixture {}", path))?;
            paths.push(path);
        }
        Ok(paths)
    }

    /// Generates and verifies fixtures without writing them anywhere.
    pub fn generate_details(
        count: usize,
        num_inputs: usize,
        num_outputs: usize,
    ) -> Result<Vec<FixtureDetails>> {
        let seed = format!("kmap-min_{}_{}", num_inputs, num_outputs);
        let mut value_gen = ValueGenerator::from_seed(&seed);
        let strategy =
            any_with::<TruthTable>(Some((num_inputs..=num_inputs, num_outputs..=num_outputs)));

        (0..count)
            .map(|ix| {
                let mut gen = value_gen.partial_clone();
                let table = gen.generate(strategy.clone());
                let fixture = FixtureDetails::new(format!("{}_{:03}", seed, ix), table)?;
                fixture.verify()?;
                Ok(fixture)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_deterministic() {
        let first = AllFixtures::generate_details(4, 4, 2).unwrap();
        let second = AllFixtures::generate_details(4, 4, 2).unwrap();

        assert_eq!(first.len(), 4);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.table, b.table);
            assert_eq!(a.sops, b.sops);
        }
    }

    #[test]
    fn test_render() {
        let fixture = &AllFixtures::generate_details(1, 2, 1).unwrap()[0];
        let rendered = fixture.render().unwrap();
        assert!(rendered.starts_with("# kmap-min_2_1_000\n1: 0, 0 | "));
        assert!(rendered.contains("## output 0\n"));
    }
}
