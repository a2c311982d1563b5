// SPDX-License-Identifier: MIT

//! Postfix stack machine

use super::error::{CalcError, SemanticError};
use super::operator::Operator;
use super::postfix::{Postfix, PostfixToken};

/// Evaluate a postfix sequence to a single integer
pub fn evaluate_postfix(postfix: &Postfix) -> Result<i64, CalcError> {
    let mut operands: Vec<i64> = Vec::with_capacity(postfix.len());

    for token in postfix.tokens() {
        match *token {
            PostfixToken::Operand { value, .. } => operands.push(value),
            PostfixToken::Operator { op, index } => {
                if operands.len() < op.arity() {
                    return Err(SemanticError::insufficient(op.to_string(), index).into());
                }
                let value = if op.is_unary() {
                    let a = operands.pop().unwrap_or_default();
                    apply_unary(op, a, index)?
                } else {
                    let b = operands.pop().unwrap_or_default();
                    let a = operands.pop().unwrap_or_default();
                    apply_binary(op, a, b, index)?
                };
                log::trace!("{} @ {} -> {}", op, index, value);
                operands.push(value);
            }
        }
    }

    match operands.as_slice() {
        [result] => Ok(*result),
        rest => Err(SemanticError::Malformed {
            remaining: rest.len(),
        }
        .into()),
    }
}

fn apply_unary(op: Operator, a: i64, index: usize) -> Result<i64, CalcError> {
    match op {
        Operator::Negate => a
            .checked_neg()
            .ok_or_else(|| SemanticError::overflow("neg", index).into()),
        Operator::Identity => Ok(a),
        other => Err(SemanticError::UnknownOperator {
            token: other.to_string(),
            index,
        }
        .into()),
    }
}

fn apply_binary(op: Operator, a: i64, b: i64, index: usize) -> Result<i64, CalcError> {
    let overflow = || CalcError::from(SemanticError::overflow(op.to_string(), index));

    match op {
        Operator::Add => a.checked_add(b).ok_or_else(overflow),
        Operator::Sub => a.checked_sub(b).ok_or_else(overflow),
        Operator::Mul => a.checked_mul(b).ok_or_else(overflow),
        Operator::Div => {
            if b == 0 {
                return Err(CalcError::DivisionByZero { index });
            }
            a.checked_div(b).ok_or_else(overflow)
        }
        Operator::Rem => {
            if b == 0 {
                return Err(CalcError::DivisionByZero { index });
            }
            a.checked_rem(b).ok_or_else(overflow)
        }
        Operator::Pow => power(a, b, index),
        Operator::Gt => Ok(i64::from(a > b)),
        Operator::Lt => Ok(i64::from(a < b)),
        Operator::Eq => Ok(i64::from(a == b)),
        Operator::And => Ok(i64::from(a != 0 && b != 0)),
        Operator::Or => Ok(i64::from(a != 0 || b != 0)),
        other => Err(SemanticError::UnknownOperator {
            token: other.to_string(),
            index,
        }
        .into()),
    }
}

/// Integer power; negative exponents truncate toward zero like `1 / a^-b`
fn power(base: i64, exponent: i64, index: usize) -> Result<i64, CalcError> {
    if exponent < 0 {
        return match base {
            0 => Err(CalcError::DivisionByZero { index }),
            1 => Ok(1),
            -1 => Ok(if exponent % 2 == 0 { 1 } else { -1 }),
            _ => Ok(0),
        };
    }

    let overflow = || CalcError::from(SemanticError::overflow("^", index));
    match base {
        0 | 1 => Ok(if exponent == 0 { 1 } else { base }),
        -1 => Ok(if exponent % 2 == 0 { 1 } else { -1 }),
        _ => {
            let exponent = u32::try_from(exponent).map_err(|_| overflow())?;
            base.checked_pow(exponent).ok_or_else(overflow)
        }
    }
}
