// The order must carry a last name so it can be called out at pickup
// and matched to the payment.
use shared_types::{Customer, Issue};

pub fn check_name(customer: &Customer) -> Vec<Issue> {
    let mut issues = Vec::new();

    if customer.last_name.trim().is_empty() {
        issues.push(Issue::error("last_name", "Last name is required"));
    }

    // Missing first name is worth mentioning but never blocks
    if customer.first_name.trim().is_empty() {
        issues.push(Issue::warning("first_name", "First name is empty"));
    }

    issues
}
