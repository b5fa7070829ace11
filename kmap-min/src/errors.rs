// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Errors returned by the truth table and Karnaugh map APIs.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum KmapError {
    /// A truth table was requested with a pin count outside `[1, 9]`.
    #[error("number of {kind} pins must be in range 1..={max}, got {actual}")]
    InvalidDimension {
        kind: PinKind,
        actual: usize,
        max: usize,
    },

    /// A row or pin index was outside the table's bounds.
    #[error("{kind} index {index} must be in range 0..{len}")]
    OutOfRange {
        kind: IndexKind,
        index: usize,
        len: usize,
    },

    /// An output value other than -1, 0 or 1.
    #[error("output value must be either 0, 1 or -1 (don't care), got {0}")]
    InvalidValue(i8),

    /// A bit string or integer could not be converted.
    #[error("invalid binary encoding: {0}")]
    InvalidEncoding(String),

    /// A term was given more literals than a table has inputs.
    #[error("a term can hold at most {max} literals")]
    TooManyLiterals { max: usize },

    /// Quads were requested before any output was applied to the map.
    #[error("no output has been applied to the Karnaugh map")]
    NotApplied,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinKind {
    Input,
    Output,
}

impl std::fmt::Display for PinKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Output => write!(f, "output"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexKind {
    Row,
    InputPin,
    OutputPin,
}

impl std::fmt::Display for IndexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Row => write!(f, "row"),
            Self::InputPin => write!(f, "input pin"),
            Self::OutputPin => write!(f, "output pin"),
        }
    }
}

impl KmapError {
    #[inline]
    pub(crate) fn out_of_range(kind: IndexKind, index: usize, len: usize) -> Self {
        Self::OutOfRange { kind, index, len }
    }
}
