// SPDX-License-Identifier: MIT

//! Expression evaluation through postfix conversion
//!
//! Infix input is converted to postfix by [`convert`] and reduced by
//! [`evaluate_postfix`]. [`evaluate`] runs both:
//! - `1+2*3` evaluates to `7`
//! - `(1+2)*3 > 8` evaluates to `1`
//! - `-(2+3)` evaluates to `-5`

mod converter;
mod error;
mod evaluator;
mod operator;
mod postfix;
mod report;

pub use converter::convert;
pub use error::{CalcError, SemanticError, SyntaxError};
pub use evaluator::evaluate_postfix;
pub use operator::{Associativity, Operator, OperatorInfo, OPERATORS};
pub use postfix::{Postfix, PostfixToken};
pub use report::{Report, ReportError};

/// Evaluate an infix expression
pub fn evaluate(expression: &str) -> Result<i64, CalcError> {
    let postfix = convert(expression)?;
    evaluate_postfix(&postfix)
}
