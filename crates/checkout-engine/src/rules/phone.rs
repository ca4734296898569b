// Contact phone validation: exactly 10 digits once separators are
// stripped. Country codes are rejected; the form takes domestic
// numbers only.
use crate::patterns::digits_only;
use shared_types::{Customer, Issue};

pub fn check_phone(customer: &Customer) -> Vec<Issue> {
    let mut issues = Vec::new();

    let digits = digits_only(&customer.phone);
    if digits.is_empty() {
        issues.push(Issue::error("phone", "A contact phone number is required"));
    } else if digits.len() != 10 {
        issues.push(Issue::error(
            "phone",
            format!(
                "Phone number must contain exactly 10 digits (found {})",
                digits.len()
            ),
        ));
    }

    issues
}
