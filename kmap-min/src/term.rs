// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{errors::KmapError, truth_table::MAX_PINS};
use arrayvec::ArrayVec;
use itertools::{Itertools, Position};
use std::{borrow::Cow, fmt};

/// A reference to one input variable, either asserted or complemented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    pub variable_ix: usize,
    pub complemented: bool,
}

impl Literal {
    #[inline]
    pub fn positive(variable_ix: usize) -> Self {
        Self {
            variable_ix,
            complemented: false,
        }
    }

    #[inline]
    pub fn negative(variable_ix: usize) -> Self {
        Self {
            variable_ix,
            complemented: true,
        }
    }

    /// Returns the literal's value given the value of its variable.
    #[inline]
    pub fn evaluate(self, variable: bool) -> bool {
        variable != self.complemented
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", AlgebraicSymbol::input(self.variable_ix))?;
        if self.complemented {
            write!(f, "'")?;
        }
        Ok(())
    }
}

/// A product of literals. The empty product is the constant true.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Term {
    literals: ArrayVec<Literal, MAX_PINS>,
}

impl Term {
    /// Creates a term from its literals, in order.
    ///
    /// Returns an error if there are more than [`MAX_PINS`] literals.
    pub fn try_new(literals: impl IntoIterator<Item = Literal>) -> Result<Self, KmapError> {
        let mut term = Self::default();
        for literal in literals {
            term.literals
                .try_push(literal)
                .map_err(|_| KmapError::TooManyLiterals { max: MAX_PINS })?;
        }
        Ok(term)
    }

    /// Panics if there are more than [`MAX_PINS`] literals.
    pub(crate) fn new(literals: impl IntoIterator<Item = Literal>) -> Self {
        Self {
            literals: literals.into_iter().collect(),
        }
    }

    #[inline]
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    #[inline]
    pub fn literal_count(&self) -> usize {
        self.literals.len()
    }

    /// Returns true if this term has no literals and so is always true.
    #[inline]
    pub fn is_constant_true(&self) -> bool {
        self.literals.is_empty()
    }

    #[inline]
    pub(crate) fn push(&mut self, literal: Literal) {
        self.literals.push(literal);
    }

    /// Evaluates the term against input values indexed by variable.
    ///
    /// Panics if a literal refers to a variable past the end of `values`.
    pub fn evaluate(&self, values: &[bool]) -> bool {
        self.literals
            .iter()
            .all(|literal| literal.evaluate(values[literal.variable_ix]))
    }
}

/// Evaluates a sum of products: true if any term is true.
pub fn evaluate_sop(terms: &[Term], values: &[bool]) -> bool {
    terms.iter().any(|term| term.evaluate(values))
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", SopDisplay::new(std::slice::from_ref(self)))
    }
}

/// Renders a sum of products as text, such as `a'b + c`.
///
/// A term without literals renders as the constant-true symbol (`1` by default) so that it can
/// be told apart from an empty sum, which renders as the empty string.
#[derive(Clone, Debug)]
pub struct SopDisplay<'a> {
    terms: &'a [Term],
    product_separator: Cow<'a, str>,
    sum_separator: Cow<'a, str>,
    constant_true: Cow<'a, str>,
}

impl<'a> SopDisplay<'a> {
    pub fn new(terms: &'a [Term]) -> Self {
        Self {
            terms,
            product_separator: Cow::Borrowed(""),
            sum_separator: Cow::Borrowed(" + "),
            constant_true: Cow::Borrowed("1"),
        }
    }

    pub fn with_product_separator(mut self, separator: impl Into<Cow<'a, str>>) -> Self {
        self.product_separator = separator.into();
        self
    }

    pub fn with_sum_separator(mut self, separator: impl Into<Cow<'a, str>>) -> Self {
        self.sum_separator = separator.into();
        self
    }

    pub fn with_constant_true(mut self, symbol: impl Into<Cow<'a, str>>) -> Self {
        self.constant_true = symbol.into();
        self
    }

    fn fmt_term(&self, term: &Term, f: &mut fmt::Formatter) -> fmt::Result {
        if term.is_constant_true() {
            return write!(f, "{}", self.constant_true);
        }
        for literal in term.literals().iter().with_position() {
            match literal {
                Position::First(literal) | Position::Middle(literal) => {
                    write!(f, "{}{}", literal, self.product_separator)?;
                }
                Position::Last(literal) | Position::Only(literal) => {
                    write!(f, "{}", literal)?;
                }
            }
        }
        Ok(())
    }
}

impl<'a> fmt::Display for SopDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for term in self.terms.iter().with_position() {
            match term {
                Position::First(term) | Position::Middle(term) => {
                    self.fmt_term(term, f)?;
                    write!(f, "{}", self.sum_separator)?;
                }
                Position::Last(term) | Position::Only(term) => {
                    self.fmt_term(term, f)?;
                }
            }
        }
        Ok(())
    }
}

const INPUT_ALGEBRAIC_SYMBOLS: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// The name of an input variable: `a` through `z`, then `ba`, `bb`, ….
#[derive(Debug)]
pub(crate) enum AlgebraicSymbol {
    Char(char),
    String(String),
}

impl AlgebraicSymbol {
    pub(crate) fn input(input_ix: usize) -> Self {
        if input_ix < 26 {
            return Self::Char(INPUT_ALGEBRAIC_SYMBOLS[input_ix]);
        }
        let last_ch = INPUT_ALGEBRAIC_SYMBOLS[input_ix % 26];
        match Self::input(input_ix / 26) {
            Self::Char(ch) => Self::String(format!("{}{}", ch, last_ch)),
            Self::String(mut s) => {
                s.push(last_ch);
                Self::String(s)
            }
        }
    }
}

impl fmt::Display for AlgebraicSymbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Char(ch) => write!(f, "{}", *ch),
            Self::String(s) => write!(f, "{}", s),
        }
    }
}
