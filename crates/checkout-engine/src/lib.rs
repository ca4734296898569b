pub mod patterns;
pub mod rules;

use shared_types::{CheckoutReport, OrderSnapshot};

/// CheckoutEngine entry point
pub struct CheckoutEngine;

impl CheckoutEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run every submission rule over the snapshot and collect the
    /// findings into one report.
    pub fn check(&self, snapshot: &OrderSnapshot) -> CheckoutReport {
        let mut issues = Vec::new();

        issues.extend(rules::items::check_items(snapshot));
        issues.extend(rules::name::check_name(&snapshot.customer));
        issues.extend(rules::phone::check_phone(&snapshot.customer));
        issues.extend(rules::address::check_address(&snapshot.customer));

        CheckoutReport {
            issues,
            checked_at: chrono::Utc::now().timestamp() as u64,
        }
    }
}

impl Default for CheckoutEngine {
    fn default() -> Self {
        Self::new()
    }
}
