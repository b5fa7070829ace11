// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{bits::binary_to_decimal, errors::KmapError};
use std::fmt;

/// One word of a Gray code sequence along with its binary value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GrayCode {
    word: String,
    value: usize,
}

impl GrayCode {
    pub fn new(word: impl Into<String>) -> Result<Self, KmapError> {
        let word = word.into();
        let value = binary_to_decimal(&word)?;
        Ok(Self { word, value })
    }

    /// The zero-width word, used for an axis that carries no variables.
    pub(crate) fn empty() -> Self {
        Self {
            word: String::new(),
            value: 0,
        }
    }

    #[inline]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The word interpreted as a binary number, most significant bit first.
    #[inline]
    pub fn value(&self) -> usize {
        self.value
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.word.len()
    }

    /// Returns the bit at `position`, counting from the leftmost character.
    #[inline]
    pub fn bit(&self, position: usize) -> bool {
        assert!(
            position < self.width(),
            "bit position {} must be in range 0..{}",
            position,
            self.width()
        );
        (self.value >> (self.width() - 1 - position)) & 1 == 1
    }
}

impl fmt::Display for GrayCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}

/// Generates the reflected binary Gray code over `num_variables` bits.
///
/// The sequence is built by reflection: starting from `["0", "1"]`, each extra variable appends
/// the reversed sequence and prefixes the first half with `0` and the second half with `1`.
/// Word `i` is therefore `i ^ (i >> 1)` in binary.
///
/// Returns an empty sequence for zero variables.
///
/// ```
/// use kmap_min::gray_code::generate;
///
/// let words: Vec<_> = generate(2).iter().map(|code| code.word().to_owned()).collect();
/// assert_eq!(words, ["00", "01", "11", "10"]);
/// ```
pub fn generate(num_variables: usize) -> Vec<GrayCode> {
    if num_variables == 0 {
        return Vec::new();
    }

    let mut words: Vec<String> = vec!["0".to_owned(), "1".to_owned()];
    for _ in 1..num_variables {
        let reflected: Vec<String> = words.iter().rev().map(|w| format!("1{}", w)).collect();
        for word in &mut words {
            word.insert(0, '0');
        }
        words.extend(reflected);
    }

    words
        .into_iter()
        .map(|word| {
            let value = binary_to_decimal(&word).expect("generated words only contain 0 and 1");
            GrayCode { word, value }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::decimal_to_binary;
    use proptest::prelude::*;

    fn words(num_variables: usize) -> Vec<String> {
        generate(num_variables)
            .into_iter()
            .map(|code| code.word)
            .collect()
    }

    #[test]
    fn test_small_sequences() {
        assert!(generate(0).is_empty());
        assert_eq!(words(1), ["0", "1"]);
        assert_eq!(words(2), ["00", "01", "11", "10"]);
        assert_eq!(
            words(3),
            ["000", "001", "011", "010", "110", "111", "101", "100"]
        );
    }

    #[test]
    fn test_bit() {
        let code = GrayCode::new("110").unwrap();
        assert_eq!(code.value(), 6);
        assert!(code.bit(0));
        assert!(code.bit(1));
        assert!(!code.bit(2));
        assert!(GrayCode::new("1x").is_err());
    }

    proptest! {
        #[test]
        fn proptest_cyclic_single_bit_change(num_variables in 1_usize..=10) {
            let sequence = generate(num_variables);
            prop_assert_eq!(sequence.len(), 1 << num_variables);
            for (ix, code) in sequence.iter().enumerate() {
                let next = &sequence[(ix + 1) % sequence.len()];
                prop_assert_eq!(code.width(), num_variables);
                prop_assert_eq!((code.value() ^ next.value()).count_ones(), 1);
            }
        }

        #[test]
        fn proptest_matches_closed_form(num_variables in 0_usize..=10) {
            let expected: Vec<String> = (0..(1_usize << num_variables))
                .filter(|_| num_variables > 0)
                .map(|i| decimal_to_binary((i ^ (i >> 1)) as i64, num_variables).unwrap())
                .collect();
            prop_assert_eq!(words(num_variables), expected);
        }
    }
}
