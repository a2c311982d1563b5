// SPDX-License-Identifier: MIT

//! Typed error handling for postfix-calc
//!
//! Conversion failures are [`SyntaxError`]s, evaluation failures are
//! [`SemanticError`]s, and division by zero gets its own variant so callers
//! can match on it directly.

use thiserror::Error;

/// Top-level error type for an evaluation request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Malformed infix input, raised by the converter
    #[error("Syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    /// Ill-formed postfix input or arithmetic failure, raised by the evaluator
    #[error("Semantic error: {0}")]
    Semantic(#[from] SemanticError),

    /// Right operand of `/`, `%` (or a zero base raised to a negative power)
    #[error("Division by zero @ char: {index}")]
    DivisionByZero { index: usize },
}

/// Errors raised while converting infix to postfix
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A binary operator appeared where an operand was expected
    #[error("expression cannot start with a binary operator @ char: {0}")]
    LeadingBinaryOperator(usize),

    /// Character outside the accepted alphabet
    #[error("invalid character '{ch}' in expression @ char: {index}")]
    InvalidCharacter { ch: char, index: usize },

    /// Unmatched `)` or an unclosed `(`
    #[error("mismatched parenthesis @ char: {0}")]
    MismatchedParenthesis(usize),
}

/// Errors raised while evaluating postfix
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticError {
    /// Operator applied to an operand stack that is too short
    #[error("insufficient operands for '{op}' @ char: {index}")]
    InsufficientOperands { op: String, index: usize },

    /// Token in postfix text that names no operator
    #[error("unknown operator '{token}' @ char: {index}")]
    UnknownOperator { token: String, index: usize },

    /// Operand stack did not end with exactly one value
    #[error("malformed expression: {remaining} values left on the stack")]
    Malformed { remaining: usize },

    /// Result does not fit in an i64
    #[error("overflow in '{op}' @ char: {index}")]
    Overflow { op: String, index: usize },
}

impl CalcError {
    /// Character index of the offending input, where one is known
    pub fn index(&self) -> Option<usize> {
        match self {
            CalcError::Syntax(e) => Some(e.index()),
            CalcError::Semantic(e) => e.index(),
            CalcError::DivisionByZero { index } => Some(*index),
        }
    }

    /// Short name of the error category, as used in reports
    pub fn kind(&self) -> &'static str {
        match self {
            CalcError::Syntax(_) => "syntax",
            CalcError::Semantic(_) => "semantic",
            CalcError::DivisionByZero { .. } => "division_by_zero",
        }
    }
}

impl SyntaxError {
    pub fn index(&self) -> usize {
        match self {
            SyntaxError::LeadingBinaryOperator(index)
            | SyntaxError::MismatchedParenthesis(index) => *index,
            SyntaxError::InvalidCharacter { index, .. } => *index,
        }
    }
}

impl SemanticError {
    pub fn index(&self) -> Option<usize> {
        match self {
            SemanticError::InsufficientOperands { index, .. }
            | SemanticError::UnknownOperator { index, .. }
            | SemanticError::Overflow { index, .. } => Some(*index),
            SemanticError::Malformed { .. } => None,
        }
    }

    pub(crate) fn insufficient(op: impl Into<String>, index: usize) -> Self {
        Self::InsufficientOperands {
            op: op.into(),
            index,
        }
    }

    pub(crate) fn overflow(op: impl Into<String>, index: usize) -> Self {
        Self::Overflow {
            op: op.into(),
            index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_display() {
        let err = CalcError::from(SyntaxError::LeadingBinaryOperator(3));
        assert_eq!(
            err.to_string(),
            "Syntax error: expression cannot start with a binary operator @ char: 3"
        );
    }

    #[test]
    fn test_error_index() {
        assert_eq!(CalcError::DivisionByZero { index: 1 }.index(), Some(1));
        assert_eq!(
            CalcError::from(SyntaxError::InvalidCharacter { ch: 'x', index: 4 }).index(),
            Some(4)
        );
        assert_eq!(
            CalcError::from(SemanticError::Malformed { remaining: 2 }).index(),
            None
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(
            CalcError::from(SyntaxError::MismatchedParenthesis(0)).kind(),
            "syntax"
        );
        assert_eq!(
            CalcError::from(SemanticError::insufficient("+", 0)).kind(),
            "semantic"
        );
        assert_eq!(
            CalcError::DivisionByZero { index: 0 }.kind(),
            "division_by_zero"
        );
    }
}
