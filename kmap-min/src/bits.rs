// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversions between bit strings such as `"0110"` and integers.

use crate::errors::KmapError;

/// Parses a string of `'0'` and `'1'` characters, most significant bit first.
///
/// The empty string is 0.
///
/// ```
/// use kmap_min::bits::binary_to_decimal;
///
/// assert_eq!(binary_to_decimal("0110").unwrap(), 6);
/// assert_eq!(binary_to_decimal("").unwrap(), 0);
/// assert!(binary_to_decimal("012").is_err());
/// ```
pub fn binary_to_decimal(word: &str) -> Result<usize, KmapError> {
    let mut value: usize = 0;
    for ch in word.chars() {
        let bit = match ch {
            '0' => 0,
            '1' => 1,
            other => {
                return Err(KmapError::InvalidEncoding(format!(
                    "'{}' is not a binary digit in {:?}",
                    other, word
                )))
            }
        };
        value = value
            .checked_mul(2)
            .and_then(|v| v.checked_add(bit))
            .ok_or_else(|| {
                KmapError::InvalidEncoding(format!("{:?} does not fit in usize", word))
            })?;
    }
    Ok(value)
}

/// Formats `value` in binary, left-padded with zeroes to at least `width` digits.
///
/// Values wider than `width` are not truncated.
pub fn decimal_to_binary(value: i64, width: usize) -> Result<String, KmapError> {
    if value < 0 {
        return Err(KmapError::InvalidEncoding(format!(
            "cannot encode negative value {}",
            value
        )));
    }
    Ok(format!("{:0width$b}", value, width = width))
}
