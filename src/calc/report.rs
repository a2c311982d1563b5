// SPDX-License-Identifier: MIT

//! Serializable evaluation reports

use serde::{Deserialize, Serialize};

use super::converter::convert;
use super::error::CalcError;
use super::evaluator::evaluate_postfix;

/// Error details carried in a [`Report`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportError {
    pub kind: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl From<&CalcError> for ReportError {
    fn from(err: &CalcError) -> Self {
        Self {
            kind: err.kind().to_string(),
            message: err.to_string(),
            index: err.index(),
        }
    }
}

/// Outcome of evaluating one expression, postfix included when conversion
/// succeeded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub expression: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postfix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ReportError>,
}

impl Report {
    /// Convert and evaluate `expression`, capturing the outcome
    pub fn for_expression(expression: &str) -> Self {
        let mut report = Self {
            expression: expression.to_string(),
            postfix: None,
            result: None,
            error: None,
        };

        let outcome = convert(expression).and_then(|postfix| {
            report.postfix = Some(postfix.to_string());
            evaluate_postfix(&postfix)
        });

        match outcome {
            Ok(value) => report.result = Some(value),
            Err(e) => {
                log::debug!("Evaluation of '{}' failed: {}", expression, e);
                report.error = Some(ReportError::from(&e));
            }
        }
        report
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_report_success() {
        let report = Report::for_expression("1+2*3");
        assert!(report.is_ok());
        assert_eq!(
            report.to_json().unwrap(),
            json!({
                "expression": "1+2*3",
                "postfix": "1 2 3 * +",
                "result": 7
            })
        );
    }

    #[test]
    fn test_report_syntax_error() {
        let report = Report::for_expression("(1+2");
        assert!(!report.is_ok());
        assert_eq!(report.postfix, None);
        let error = report.error.unwrap();
        assert_eq!(error.kind, "syntax");
        assert_eq!(error.index, Some(0));
    }

    #[test]
    fn test_report_keeps_postfix_on_evaluation_error() {
        let report = Report::for_expression("1/0");
        assert_eq!(report.postfix.as_deref(), Some("1 0 /"));
        assert_eq!(report.result, None);
        assert_eq!(report.error.unwrap().kind, "division_by_zero");
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let report = Report::for_expression("1 2");
        let text = serde_json::to_string(&report).unwrap();
        let back: Report = serde_json::from_str(&text).unwrap();
        assert_eq!(back, report);
    }
}
