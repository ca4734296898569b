// An order with nothing in it cannot be placed
use shared_types::{Issue, OrderSnapshot};

pub fn check_items(snapshot: &OrderSnapshot) -> Vec<Issue> {
    let mut issues = Vec::new();

    if snapshot.is_empty() {
        issues.push(Issue::error(
            "items",
            "Your order does not contain any items",
        ));
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{Customer, MenuItem, Money, OrderLine, OrderTotals};

    fn snapshot_with_lines(lines: Vec<OrderLine>) -> OrderSnapshot {
        OrderSnapshot {
            customer: Customer::default(),
            lines,
            totals: OrderTotals::default(),
            placed_at: 0,
        }
    }

    #[test]
    fn test_flags_empty_order() {
        let issues = check_items(&snapshot_with_lines(vec![]));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "items");
    }

    #[test]
    fn test_accepts_order_with_items() {
        let lines = vec![OrderLine {
            item: MenuItem {
                id: "cannoli".to_string(),
                name: "Cannoli".to_string(),
                price: Money::from_cents(375),
            },
            quantity: 2,
        }];
        assert!(check_items(&snapshot_with_lines(lines)).is_empty());
    }
}
