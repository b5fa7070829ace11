// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use proptest::{
    strategy::{Strategy, ValueTree},
    test_runner::{Config, RngAlgorithm, TestRng, TestRunner},
};
use std::hash::{Hash, Hasher};
use twox_hash::XxHash64;

/// Generates values from proptest strategies, deterministically for a given seed.
pub struct ValueGenerator {
    runner: TestRunner,
}

impl ValueGenerator {
    pub fn from_seed(seed: impl Hash) -> Self {
        let mut hasher = XxHash64::default();
        seed.hash(&mut hasher);
        let mut seed_bytes = [0_u8; 32];
        seed_bytes[..8].copy_from_slice(&hasher.finish().to_le_bytes());

        Self {
            runner: TestRunner::new_with_rng(
                Config::default(),
                TestRng::from_seed(RngAlgorithm::ChaCha, &seed_bytes),
            ),
        }
    }

    /// Forks off a generator whose values don't depend on how many values this one goes on to
    /// generate.
    pub fn partial_clone(&mut self) -> Self {
        Self {
            runner: TestRunner::new_with_rng(Config::default(), self.runner.new_rng()),
        }
    }

    pub fn generate<S: Strategy>(&mut self, strategy: S) -> S::Value {
        strategy
            .new_tree(&mut self.runner)
            .expect("strategies used for fixtures never reject values")
            .current()
    }
}
