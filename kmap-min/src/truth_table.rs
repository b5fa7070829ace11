// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    errors::{IndexKind, KmapError, PinKind},
    kmap::KarnaughMap,
    term::Term,
};
use bitvec::prelude::*;
use itertools::Itertools;
use std::fmt;

/// The largest number of input or output pins a truth table may have.
pub const MAX_PINS: usize = 9;

/// The value of one output cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutputValue {
    Zero,
    One,
    /// The output is unconstrained.
    #[default]
    DontCare,
}

impl OutputValue {
    #[inline]
    pub fn is_one(self) -> bool {
        matches!(self, Self::One)
    }

    /// The character used for this value in tables and maps.
    pub fn as_char(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
            Self::DontCare => 'x',
        }
    }
}

impl TryFrom<i8> for OutputValue {
    type Error = KmapError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            -1 => Ok(Self::DontCare),
            other => Err(KmapError::InvalidValue(other)),
        }
    }
}

impl From<OutputValue> for i8 {
    fn from(value: OutputValue) -> Self {
        match value {
            OutputValue::Zero => 0,
            OutputValue::One => 1,
            OutputValue::DontCare => -1,
        }
    }
}

/// A truth table with a fixed number of input and output pins.
///
/// Rows enumerate the inputs in binary counting order, with input pin 0 as the most significant
/// bit: the row index, read pin 0 first, is the row's binary value. Every output starts out as
/// [`OutputValue::DontCare`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTable {
    num_inputs: usize,
    num_outputs: usize,
    // Row-major, `num_inputs` bits per row.
    inputs: BitVec,
    // Row-major, `num_outputs` values per row.
    outputs: Vec<OutputValue>,
}

impl TruthTable {
    pub fn new(num_inputs: usize, num_outputs: usize) -> Result<Self, KmapError> {
        check_dimension(PinKind::Input, num_inputs)?;
        check_dimension(PinKind::Output, num_outputs)?;

        let num_rows = 1_usize << num_inputs;
        let mut inputs = bitvec![0; num_rows * num_inputs];
        for row_ix in 0..num_rows {
            for pin_ix in 0..num_inputs {
                let bit = (row_ix >> (num_inputs - 1 - pin_ix)) & 1 == 1;
                inputs.set(row_ix * num_inputs + pin_ix, bit);
            }
        }

        Ok(Self {
            num_inputs,
            num_outputs,
            inputs,
            outputs: vec![OutputValue::DontCare; num_rows * num_outputs],
        })
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        1 << self.num_inputs
    }

    #[inline]
    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    #[inline]
    pub fn num_outputs(&self) -> usize {
        self.num_outputs
    }

    /// Returns the input bit of `pin_ix` in row `row_ix`.
    pub fn input(&self, row_ix: usize, pin_ix: usize) -> Result<bool, KmapError> {
        self.check_row(row_ix)?;
        if pin_ix >= self.num_inputs {
            return Err(KmapError::out_of_range(
                IndexKind::InputPin,
                pin_ix,
                self.num_inputs,
            ));
        }
        Ok(self.inputs[row_ix * self.num_inputs + pin_ix])
    }

    /// Returns the input bits of row `row_ix`, pin 0 first.
    pub fn input_row(&self, row_ix: usize) -> Result<&BitSlice, KmapError> {
        self.check_row(row_ix)?;
        let start = row_ix * self.num_inputs;
        Ok(&self.inputs[start..start + self.num_inputs])
    }

    /// A snapshot of every input row as 0s and 1s.
    pub fn input_matrix(&self) -> Vec<Vec<u8>> {
        self.inputs
            .chunks(self.num_inputs)
            .map(|row| row.iter().map(|bit| u8::from(*bit)).collect())
            .collect()
    }

    /// A snapshot of every output row.
    pub fn output_matrix(&self) -> Vec<Vec<OutputValue>> {
        self.outputs
            .chunks(self.num_outputs)
            .map(|row| row.to_vec())
            .collect()
    }

    /// Sets one output cell. `value` must be 0, 1 or -1 (don't care).
    pub fn set_output(
        &mut self,
        output_ix: usize,
        row_ix: usize,
        value: i8,
    ) -> Result<(), KmapError> {
        let cell = self.cell_ix(row_ix, output_ix)?;
        self.outputs[cell] = OutputValue::try_from(value)?;
        Ok(())
    }

    pub fn get_output(&self, row_ix: usize, output_ix: usize) -> Result<OutputValue, KmapError> {
        let cell = self.cell_ix(row_ix, output_ix)?;
        Ok(self.outputs[cell])
    }

    /// Sets every row of one output pin to `value`.
    pub fn fill_output(&mut self, output_ix: usize, value: i8) -> Result<(), KmapError> {
        self.check_output(output_ix)?;
        let value = OutputValue::try_from(value)?;
        for row in self.outputs.chunks_mut(self.num_outputs) {
            row[output_ix] = value;
        }
        Ok(())
    }

    /// Minimizes every output pin in order, returning one sum of products per pin.
    pub fn minimize_all(&self) -> Result<Vec<Vec<Term>>, KmapError> {
        let mut map = KarnaughMap::new(self);
        (0..self.num_outputs)
            .map(|output_ix| map.minimize(output_ix))
            .collect()
    }

    // ---
    // Helper methods
    // ---

    fn cell_ix(&self, row_ix: usize, output_ix: usize) -> Result<usize, KmapError> {
        self.check_row(row_ix)?;
        self.check_output(output_ix)?;
        Ok(row_ix * self.num_outputs + output_ix)
    }

    pub(crate) fn check_row(&self, row_ix: usize) -> Result<(), KmapError> {
        if row_ix >= self.num_rows() {
            return Err(KmapError::out_of_range(
                IndexKind::Row,
                row_ix,
                self.num_rows(),
            ));
        }
        Ok(())
    }

    pub(crate) fn check_output(&self, output_ix: usize) -> Result<(), KmapError> {
        if output_ix >= self.num_outputs {
            return Err(KmapError::out_of_range(
                IndexKind::OutputPin,
                output_ix,
                self.num_outputs,
            ));
        }
        Ok(())
    }
}

fn check_dimension(kind: PinKind, actual: usize) -> Result<(), KmapError> {
    if !(1..=MAX_PINS).contains(&actual) {
        return Err(KmapError::InvalidDimension {
            kind,
            actual,
            max: MAX_PINS,
        });
    }
    Ok(())
}

/// Prints one line per row: `1: 0, 1 | 1, x`.
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let inputs = self.inputs.chunks(self.num_inputs);
        let outputs = self.outputs.chunks(self.num_outputs);
        for (row_ix, (input, output)) in inputs.zip(outputs).enumerate() {
            writeln!(
                f,
                "{}: {} | {}",
                row_ix + 1,
                input.iter().map(|bit| u8::from(*bit)).join(", "),
                output.iter().map(|value| value.as_char()).join(", "),
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_rejects_bad_dimensions() {
        assert!(matches!(
            TruthTable::new(0, 1),
            Err(KmapError::InvalidDimension {
                kind: PinKind::Input,
                actual: 0,
                ..
            })
        ));
        assert!(matches!(
            TruthTable::new(2, 0),
            Err(KmapError::InvalidDimension {
                kind: PinKind::Output,
                ..
            })
        ));
        assert!(matches!(
            TruthTable::new(10, 1),
            Err(KmapError::InvalidDimension { actual: 10, .. })
        ));
        assert!(TruthTable::new(MAX_PINS, MAX_PINS).is_ok());
    }

    #[test]
    fn test_two_input_table() {
        let table = TruthTable::new(2, 1).unwrap();
        assert_eq!(table.num_rows(), 4);
        assert_eq!(table.num_inputs(), 2);
        assert_eq!(table.num_outputs(), 1);
        assert_eq!(
            table.input_matrix(),
            vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]
        );
        assert_eq!(
            table.output_matrix(),
            vec![vec![OutputValue::default()]; 4],
            "outputs start as the default value"
        );
        assert_eq!(OutputValue::default(), OutputValue::DontCare);
    }

    #[test]
    fn test_input_reads() {
        let table = TruthTable::new(3, 1).unwrap();
        // row 6 = 110
        assert!(table.input(6, 0).unwrap());
        assert!(table.input(6, 1).unwrap());
        assert!(!table.input(6, 2).unwrap());
        assert_eq!(table.input_row(6).unwrap(), bits![1, 1, 0]);
        assert!(matches!(
            table.input(6, 3),
            Err(KmapError::OutOfRange {
                kind: IndexKind::InputPin,
                ..
            })
        ));
        assert!(table.input(8, 0).is_err());
    }

    #[test]
    fn test_set_output_errors() {
        let mut table = TruthTable::new(2, 2).unwrap();
        assert_eq!(
            table.set_output(0, 4, 1),
            Err(KmapError::OutOfRange {
                kind: IndexKind::Row,
                index: 4,
                len: 4
            })
        );
        assert_eq!(
            table.set_output(2, 0, 1),
            Err(KmapError::OutOfRange {
                kind: IndexKind::OutputPin,
                index: 2,
                len: 2
            })
        );
        assert_eq!(table.set_output(0, 0, 2), Err(KmapError::InvalidValue(2)));
        assert!(table.get_output(0, 2).is_err());
        assert!(table.get_output(4, 0).is_err());
    }

    #[test]
    fn test_fill_output() {
        let mut table = TruthTable::new(2, 2).unwrap();
        table.fill_output(1, 0).unwrap();
        for row_ix in 0..4 {
            assert_eq!(table.get_output(row_ix, 0).unwrap(), OutputValue::DontCare);
            assert_eq!(table.get_output(row_ix, 1).unwrap(), OutputValue::Zero);
        }
        assert!(table.fill_output(2, 0).is_err());
        assert_eq!(table.fill_output(0, -2), Err(KmapError::InvalidValue(-2)));
    }

    #[test]
    fn test_display() {
        let mut table = TruthTable::new(2, 1).unwrap();
        table.set_output(0, 1, 1).unwrap();
        table.set_output(0, 2, 0).unwrap();
        assert_eq!(
            table.to_string(),
            "1: 0, 0 | x\n2: 0, 1 | 1\n3: 1, 0 | 0\n4: 1, 1 | x\n"
        );
    }

    proptest! {
        #[test]
        fn proptest_set_then_get(
            num_inputs in 1_usize..=6,
            row_seed in any::<usize>(),
            value in prop_oneof![Just(-1_i8), Just(0_i8), Just(1_i8)],
        ) {
            let mut table = TruthTable::new(num_inputs, 1).unwrap();
            let row_ix = row_seed % table.num_rows();
            table.set_output(0, row_ix, value).unwrap();
            prop_assert_eq!(i8::from(table.get_output(row_ix, 0).unwrap()), value);

            let past_end = table.num_rows() + row_seed % 8;
            prop_assert!(
                matches!(table.get_output(past_end, 0), Err(KmapError::OutOfRange { .. })),
                "rows past the end are out of range"
            );
        }

        #[test]
        fn proptest_inputs_count_in_binary(num_inputs in 1_usize..=8) {
            let table = TruthTable::new(num_inputs, 1).unwrap();
            for (row_ix, row) in table.input_matrix().iter().enumerate() {
                let value = row.iter().fold(0, |acc, bit| acc * 2 + *bit as usize);
                prop_assert_eq!(value, row_ix);
            }
        }
    }
}
