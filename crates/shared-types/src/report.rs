//! Checkout validation report types

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Blocks submission
    Error,
    /// Surfaced to the user but does not block
    Warning,
}

/// One finding from a single validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Form field the finding is about ("phone", "delivery_address", ...)
    pub field: String,
    pub severity: Severity,
    pub message: String,
}

impl Issue {
    pub fn error(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn warning(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// Everything the validators found for one submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutReport {
    pub issues: Vec<Issue>,
    /// Epoch seconds
    pub checked_at: u64,
}

impl CheckoutReport {
    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
    }

    /// True when any Error-severity issue is present
    pub fn is_blocked(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Aggregated alert text listing every blocking issue, or None when
    /// the order may be placed.
    pub fn summary_message(&self) -> Option<String> {
        if !self.is_blocked() {
            return None;
        }
        let mut lines =
            vec!["Please correct the following before placing your order:".to_string()];
        lines.extend(self.errors().map(|i| format!("- {}", i.message)));
        Some(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_without_errors_is_not_blocked() {
        let report = CheckoutReport {
            issues: vec![Issue::warning("first_name", "First name is empty")],
            checked_at: 0,
        };
        assert!(!report.is_blocked());
        assert_eq!(report.summary_message(), None);
    }

    #[test]
    fn test_summary_lists_every_error() {
        let report = CheckoutReport {
            issues: vec![
                Issue::error("items", "Your order does not contain any items"),
                Issue::warning("delivery_address", "Address looks short"),
                Issue::error("phone", "Phone number must contain exactly 10 digits"),
            ],
            checked_at: 0,
        };
        let message = report.summary_message().unwrap();
        assert!(message.starts_with("Please correct the following"));
        assert!(message.contains("- Your order does not contain any items"));
        assert!(message.contains("- Phone number must contain exactly 10 digits"));
        // Warnings stay out of the blocking message
        assert!(!message.contains("Address looks short"));
    }
}
