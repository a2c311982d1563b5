// SPDX-License-Identifier: MIT

pub mod calc;

pub use calc::{convert, evaluate, evaluate_postfix, CalcError};
