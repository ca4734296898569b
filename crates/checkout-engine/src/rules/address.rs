// Delivery address presence check. Blank blocks; implausibly short is
// flagged but allowed through (apartment shorthand is common).
use shared_types::{Customer, Issue};

const MIN_PLAUSIBLE_LEN: usize = 5;

pub fn check_address(customer: &Customer) -> Vec<Issue> {
    let mut issues = Vec::new();

    let address = customer.delivery_address.trim();
    if address.is_empty() {
        issues.push(Issue::error(
            "delivery_address",
            "A delivery address is required",
        ));
    } else if address.len() < MIN_PLAUSIBLE_LEN {
        issues.push(Issue::warning(
            "delivery_address",
            "Delivery address looks incomplete",
        ));
    }

    issues
}
