// SPDX-License-Identifier: MIT

//! Infix to postfix conversion (shunting-yard)
//!
//! Accepts expressions like:
//! - `1+2*3`
//! - `(1+2)*3 > 8`
//! - `-(2+3) | !0`
//!
//! Operands are single digits. The only two-character operator is `==`, an
//! alias of `=`.

use super::error::{CalcError, SyntaxError};
use super::operator::Operator;
use super::postfix::Postfix;

/// Entry on the pending operator stack
#[derive(Debug, Clone, Copy)]
enum Pending {
    Open(usize),
    Op(Operator, usize),
}

/// Convert an infix expression into postfix
pub fn convert(expression: &str) -> Result<Postfix, CalcError> {
    let chars: Vec<char> = expression.chars().collect();
    let mut postfix = Postfix::new();
    let mut stack: Vec<Pending> = Vec::new();
    let mut last_was_operand = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if let Some(value) = c.to_digit(10) {
            postfix.push_operand(i64::from(value), i);
            last_was_operand = true;
        } else if c == '(' {
            stack.push(Pending::Open(i));
            last_was_operand = false;
        } else if c == ')' {
            close_group(&mut stack, &mut postfix, i)?;
            last_was_operand = true;
        } else if Operator::is_symbol(c) {
            let op = match last_was_operand {
                true => Operator::infix(c),
                false => Operator::prefix(c),
            };
            let op = op.ok_or(SyntaxError::LeadingBinaryOperator(i))?;

            while let Some(&Pending::Op(top, index)) = stack.last() {
                if !top.yields_to(op) {
                    break;
                }
                postfix.push_operator(top, index);
                stack.pop();
            }
            stack.push(Pending::Op(op, i));
            last_was_operand = false;

            if op == Operator::Eq && chars.get(i + 1) == Some(&'=') {
                i += 1;
            }
        } else {
            return Err(SyntaxError::InvalidCharacter { ch: c, index: i }.into());
        }

        i += 1;
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Op(op, index) => postfix.push_operator(op, index),
            Pending::Open(index) => {
                return Err(SyntaxError::MismatchedParenthesis(index).into());
            }
        }
    }

    log::debug!("Converted '{}' to postfix '{}'", expression, postfix);
    Ok(postfix)
}

/// Emit operators down to the nearest `(`, then drop it
fn close_group(
    stack: &mut Vec<Pending>,
    postfix: &mut Postfix,
    index: usize,
) -> Result<(), SyntaxError> {
    loop {
        match stack.pop() {
            Some(Pending::Op(op, at)) => postfix.push_operator(op, at),
            Some(Pending::Open(_)) => return Ok(()),
            None => return Err(SyntaxError::MismatchedParenthesis(index)),
        }
    }
}
