// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Truth table minimization through Karnaugh map grouping.
//!
//! ```
//! use kmap_min::{kmap::KarnaughMap, truth_table::TruthTable};
//!
//! // f(a, b) = a + b
//! let mut table = TruthTable::new(2, 1)?;
//! for (row_ix, value) in [0, 1, 1, 1].into_iter().enumerate() {
//!     table.set_output(0, row_ix, value)?;
//! }
//!
//! let mut map = KarnaughMap::new(&table);
//! map.apply(0)?;
//! let quads = map.find_quads()?;
//! let terms = map.extract_sop(quads);
//! assert_eq!(map.render(&terms), "b + a");
//! # Ok::<(), kmap_min::errors::KmapError>(())
//! ```

pub mod bits;
pub mod errors;
pub mod gray_code;
pub mod kmap;
#[cfg(any(test, feature = "proptest1"))]
mod proptest_helpers;
pub mod term;
pub mod truth_table;
