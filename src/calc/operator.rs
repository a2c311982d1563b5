// SPDX-License-Identifier: MIT

//! Operators and the static precedence table

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Grouping direction for operators of equal precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// An operator recognized by the converter and evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// prefix ! (unary plus marker, leaves its operand unchanged)
    Identity,
    /// prefix -
    Negate,
    /// ^
    Pow,
    /// *
    Mul,
    /// /
    Div,
    /// %
    Rem,
    /// +
    Add,
    /// -
    Sub,
    /// >
    Gt,
    /// <
    Lt,
    /// =
    Eq,
    /// &
    And,
    /// |
    Or,
}

/// Precedence and associativity of one operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    /// Higher binds tighter
    pub precedence: u8,
    pub associativity: Associativity,
}

/// Every operator, highest precedence first
pub const OPERATORS: [Operator; 13] = [
    Operator::Identity,
    Operator::Negate,
    Operator::Pow,
    Operator::Mul,
    Operator::Div,
    Operator::Rem,
    Operator::Add,
    Operator::Sub,
    Operator::Gt,
    Operator::Lt,
    Operator::Eq,
    Operator::And,
    Operator::Or,
];

// Binary operators keyed by their input symbol
static INFIX_SYMBOLS: Lazy<HashMap<char, Operator>> = Lazy::new(|| {
    OPERATORS
        .iter()
        .copied()
        .filter(|op| !op.is_unary())
        .map(|op| (op.symbol(), op))
        .collect()
});

impl Operator {
    /// Binary operator written as `ch` in infix input
    pub fn infix(ch: char) -> Option<Operator> {
        INFIX_SYMBOLS.get(&ch).copied()
    }

    /// Unary operator written as `ch` in prefix position
    pub fn prefix(ch: char) -> Option<Operator> {
        match ch {
            '!' => Some(Operator::Identity),
            '-' => Some(Operator::Negate),
            _ => None,
        }
    }

    /// Whether `ch` is an operator symbol in any position
    pub fn is_symbol(ch: char) -> bool {
        Self::infix(ch).is_some() || Self::prefix(ch).is_some()
    }

    pub fn is_unary(self) -> bool {
        matches!(self, Operator::Identity | Operator::Negate)
    }

    /// Number of operands consumed by the evaluator
    pub fn arity(self) -> usize {
        if self.is_unary() {
            1
        } else {
            2
        }
    }

    /// Row of the precedence table for this operator
    pub const fn info(self) -> OperatorInfo {
        let (precedence, associativity) = match self {
            Operator::Identity | Operator::Negate => (8, Associativity::Right),
            Operator::Pow => (7, Associativity::Right),
            Operator::Mul | Operator::Div | Operator::Rem => (6, Associativity::Left),
            Operator::Add | Operator::Sub => (5, Associativity::Left),
            Operator::Gt | Operator::Lt => (4, Associativity::Left),
            Operator::Eq => (3, Associativity::Left),
            Operator::And => (2, Associativity::Left),
            Operator::Or => (1, Associativity::Left),
        };
        OperatorInfo {
            precedence,
            associativity,
        }
    }

    pub fn precedence(self) -> u8 {
        self.info().precedence
    }

    pub fn associativity(self) -> Associativity {
        self.info().associativity
    }

    /// Whether `self`, sitting on the operator stack, must be emitted before
    /// `incoming` is pushed
    pub fn yields_to(self, incoming: Operator) -> bool {
        if incoming.is_unary() {
            return false;
        }
        let (top, cur) = (self.precedence(), incoming.precedence());
        top > cur || (top == cur && incoming.associativity() == Associativity::Left)
    }

    /// Character the operator is written with in infix input
    pub fn symbol(self) -> char {
        match self {
            Operator::Identity => '!',
            Operator::Negate | Operator::Sub => '-',
            Operator::Add => '+',
            Operator::Pow => '^',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Rem => '%',
            Operator::Gt => '>',
            Operator::Lt => '<',
            Operator::Eq => '=',
            Operator::And => '&',
            Operator::Or => '|',
        }
    }
}

/// Postfix spelling; unary minus gets a word so it cannot be confused with
/// binary `-`
impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operator::Negate => write!(f, "neg"),
            other => write!(f, "{}", other.symbol()),
        }
    }
}

impl std::fmt::Display for Associativity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Associativity::Left => write!(f, "left"),
            Associativity::Right => write!(f, "right"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_rows() {
        let rows: Vec<(char, u8, Associativity)> = OPERATORS
            .iter()
            .map(|op| (op.symbol(), op.precedence(), op.associativity()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ('!', 8, Associativity::Right),
                ('-', 8, Associativity::Right),
                ('^', 7, Associativity::Right),
                ('*', 6, Associativity::Left),
                ('/', 6, Associativity::Left),
                ('%', 6, Associativity::Left),
                ('+', 5, Associativity::Left),
                ('-', 5, Associativity::Left),
                ('>', 4, Associativity::Left),
                ('<', 4, Associativity::Left),
                ('=', 3, Associativity::Left),
                ('&', 2, Associativity::Left),
                ('|', 1, Associativity::Left),
            ]
        );
    }

    #[test]
    fn test_every_symbol_is_tabled() {
        for ch in "!+-*/%^><=&|".chars() {
            assert!(Operator::is_symbol(ch), "{} missing", ch);
        }
        assert!(!Operator::is_symbol('('));
        assert!(!Operator::is_symbol('~'));
    }

    #[test]
    fn test_infix_lookup() {
        assert_eq!(Operator::infix('+'), Some(Operator::Add));
        assert_eq!(Operator::infix('-'), Some(Operator::Sub));
        assert_eq!(Operator::infix('%'), Some(Operator::Rem));
        assert_eq!(Operator::infix('!'), None);
        assert_eq!(Operator::infix('('), None);
    }

    #[test]
    fn test_prefix_lookup() {
        assert_eq!(Operator::prefix('-'), Some(Operator::Negate));
        assert_eq!(Operator::prefix('!'), Some(Operator::Identity));
        assert_eq!(Operator::prefix('+'), None);
        assert_eq!(Operator::prefix('*'), None);
    }

    #[test]
    fn test_precedence_order() {
        assert!(Operator::Pow.precedence() > Operator::Mul.precedence());
        assert!(Operator::Mul.precedence() > Operator::Add.precedence());
        assert!(Operator::Add.precedence() > Operator::Gt.precedence());
        assert!(Operator::Gt.precedence() > Operator::Eq.precedence());
        assert!(Operator::Eq.precedence() > Operator::And.precedence());
        assert!(Operator::And.precedence() > Operator::Or.precedence());
        assert!(Operator::Negate.precedence() > Operator::Pow.precedence());
    }

    #[test]
    fn test_yields_to() {
        // left-associative: equal precedence pops
        assert!(Operator::Sub.yields_to(Operator::Add));
        // right-associative: equal precedence stays
        assert!(!Operator::Pow.yields_to(Operator::Pow));
        assert!(Operator::Pow.yields_to(Operator::Mul));
        assert!(!Operator::Add.yields_to(Operator::Mul));
        // prefix operators never pop
        assert!(!Operator::Mul.yields_to(Operator::Negate));
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(format!("{}", Operator::Negate), "neg");
        assert_eq!(format!("{}", Operator::Identity), "!");
        assert_eq!(format!("{}", Operator::Sub), "-");
        assert_eq!(format!("{}", Operator::Or), "|");
    }
}
