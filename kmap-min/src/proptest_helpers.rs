// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::truth_table::{OutputValue, TruthTable, MAX_PINS};
use proptest::prelude::*;
use std::ops::RangeInclusive;

impl Arbitrary for OutputValue {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(OutputValue::Zero),
            Just(OutputValue::One),
            Just(OutputValue::DontCare),
        ]
        .boxed()
    }
}

impl Arbitrary for TruthTable {
    /// Ranges for the number of inputs and outputs.
    type Parameters = Option<(RangeInclusive<usize>, RangeInclusive<usize>)>;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        let (inputs, outputs) = params.unwrap_or((1..=6, 1..=3));
        assert!(
            *inputs.start() >= 1 && *inputs.end() <= MAX_PINS,
            "input range {:?} must be within 1..={}",
            inputs,
            MAX_PINS
        );
        assert!(
            *outputs.start() >= 1 && *outputs.end() <= MAX_PINS,
            "output range {:?} must be within 1..={}",
            outputs,
            MAX_PINS
        );

        (inputs, outputs)
            .prop_flat_map(|(num_inputs, num_outputs)| {
                let cell_count = (1 << num_inputs) * num_outputs;
                prop::collection::vec(any::<OutputValue>(), cell_count)
                    .prop_map(move |values| table_from_values(num_inputs, num_outputs, values))
            })
            .boxed()
    }
}

fn table_from_values(num_inputs: usize, num_outputs: usize, values: Vec<OutputValue>) -> TruthTable {
    let mut table =
        TruthTable::new(num_inputs, num_outputs).expect("dimensions were checked against MAX_PINS");
    for (cell_ix, value) in values.into_iter().enumerate() {
        table
            .set_output(cell_ix % num_outputs, cell_ix / num_outputs, value.into())
            .expect("cell index is within the table");
    }
    table
}
