// SPDX-License-Identifier: MIT

//! Postfix (reverse Polish) token sequences
//!
//! A [`Postfix`] is what the converter hands to the evaluator. Its text form
//! is whitespace separated, e.g. `1 2 3 * +`; unary minus is written `neg`
//! and the `!` marker keeps its symbol.

use super::error::{CalcError, SemanticError};
use super::operator::Operator;
use std::str::FromStr;

/// One postfix token, tagged with the character index it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostfixToken {
    /// Single digit literal
    Operand { value: i64, index: usize },
    Operator { op: Operator, index: usize },
}

impl PostfixToken {
    pub fn index(&self) -> usize {
        match self {
            PostfixToken::Operand { index, .. } | PostfixToken::Operator { index, .. } => *index,
        }
    }
}

impl std::fmt::Display for PostfixToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostfixToken::Operand { value, .. } => write!(f, "{}", value),
            PostfixToken::Operator { op, .. } => write!(f, "{}", op),
        }
    }
}

/// A parenthesis-free token sequence in evaluation order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Postfix {
    tokens: Vec<PostfixToken>,
}

impl Postfix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_operand(&mut self, value: i64, index: usize) {
        self.tokens.push(PostfixToken::Operand { value, index });
    }

    pub fn push_operator(&mut self, op: Operator, index: usize) {
        self.tokens.push(PostfixToken::Operator { op, index });
    }

    pub fn tokens(&self) -> &[PostfixToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl std::fmt::Display for Postfix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

const UNARY_WORDS: [(&str, Operator); 1] = [("neg", Operator::Negate)];

/// Parses postfix text. Separators are optional between single-character
/// tokens, so `123*+` and `1 2 3 * +` are the same sequence.
impl FromStr for Postfix {
    type Err = CalcError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = input.chars().collect();
        let mut postfix = Postfix::new();
        let mut i = 0;

        'scan: while i < chars.len() {
            let c = chars[i];
            if c.is_whitespace() {
                i += 1;
                continue;
            }

            for (word, op) in UNARY_WORDS {
                let end = i + word.len();
                if end <= chars.len() && chars[i..end].iter().copied().eq(word.chars()) {
                    postfix.push_operator(op, i);
                    i = end;
                    continue 'scan;
                }
            }

            if let Some(value) = c.to_digit(10) {
                postfix.push_operand(i64::from(value), i);
            } else if c == '!' {
                postfix.push_operator(Operator::Identity, i);
            } else if let Some(op) = Operator::infix(c) {
                postfix.push_operator(op, i);
            } else {
                return Err(SemanticError::UnknownOperator {
                    token: c.to_string(),
                    index: i,
                }
                .into());
            }
            i += 1;
        }

        Ok(postfix)
    }
}
