//! Aggregate pricing: subtotal, tax, total

use shared_types::{Money, OrderLine, OrderTotals};

/// Sales tax rate in basis points (6.25%)
pub const TAX_RATE_BP: i64 = 625;

/// Per-line quantity cap enforced at the parsing and mutation layers
pub const MAX_QUANTITY: u32 = 99;

/// Recompute the order-level figures from scratch. Cheap enough that
/// every quantity change just reruns it.
pub fn compute_totals(lines: &[OrderLine]) -> OrderTotals {
    let subtotal: Money = lines.iter().map(OrderLine::line_total).sum();
    let tax = subtotal.percent_bp(TAX_RATE_BP);
    OrderTotals {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use shared_types::MenuItem;

    fn line(id: &str, cents: i64, quantity: u32) -> OrderLine {
        OrderLine {
            item: MenuItem {
                id: id.to_string(),
                name: id.to_string(),
                price: Money::from_cents(cents),
            },
            quantity,
        }
    }

    #[test]
    fn test_empty_order_totals_are_zero() {
        let totals = compute_totals(&[]);
        assert_eq!(totals.subtotal, Money::ZERO);
        assert_eq!(totals.tax, Money::ZERO);
        assert_eq!(totals.total, Money::ZERO);
    }

    #[test]
    fn test_totals_sum_line_totals() {
        // 2 x 10.99 + 1 x 4.50 = 26.48
        let totals = compute_totals(&[line("a", 1099, 2), line("b", 450, 1)]);
        assert_eq!(totals.subtotal, Money::from_cents(2648));
        // 6.25% of 26.48 = 1.655 -> 1.66 (half-up)
        assert_eq!(totals.tax, Money::from_cents(166));
        assert_eq!(totals.total, Money::from_cents(2814));
    }

    #[test]
    fn test_tax_on_round_subtotal() {
        // 6.25% of 8.00 is exactly 0.50
        let totals = compute_totals(&[line("a", 800, 1)]);
        assert_eq!(totals.tax, Money::from_cents(50));
        assert_eq!(totals.total, Money::from_cents(850));
    }

    #[test]
    fn test_zero_quantity_lines_contribute_nothing() {
        let with_zero = compute_totals(&[line("a", 1099, 2), line("b", 450, 0)]);
        let without = compute_totals(&[line("a", 1099, 2)]);
        assert_eq!(with_zero, without);
    }

    proptest! {
        #[test]
        fn prop_total_is_subtotal_plus_tax(
            prices in proptest::collection::vec(1i64..5_000, 1..8),
            quantities in proptest::collection::vec(0u32..100, 1..8),
        ) {
            let lines: Vec<OrderLine> = prices
                .iter()
                .zip(&quantities)
                .enumerate()
                .map(|(i, (&cents, &qty))| line(&format!("item-{}", i), cents, qty))
                .collect();
            let totals = compute_totals(&lines);
            prop_assert_eq!(totals.total, totals.subtotal + totals.tax);
            let by_hand: Money = lines.iter().map(OrderLine::line_total).sum();
            prop_assert_eq!(totals.subtotal, by_hand);
        }
    }
}
