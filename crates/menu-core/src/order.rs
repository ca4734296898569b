//! Order state and change propagation
//!
//! An `Order` holds one line per catalog row. Mutating a row's quantity
//! recomputes that line, then the aggregate totals, then fires the
//! registered change listener so displays can refresh. The listener is
//! the same callback shape the wasm session forwards to JavaScript.

use crate::catalog::Catalog;
use crate::error::MenuError;
use crate::pricing::{compute_totals, MAX_QUANTITY};
use shared_types::{Customer, Money, OrderLine, OrderSnapshot, OrderTotals};

type ChangeListener = Box<dyn Fn(&OrderTotals)>;

pub struct Order {
    catalog: Catalog,
    lines: Vec<OrderLine>,
    totals: OrderTotals,
    on_change: Option<ChangeListener>,
}

impl Order {
    /// Create an order with every catalog row at quantity zero
    pub fn new(catalog: Catalog) -> Self {
        let lines = catalog
            .items()
            .iter()
            .map(|item| OrderLine {
                item: item.clone(),
                quantity: 0,
            })
            .collect();
        Self {
            catalog,
            lines,
            totals: OrderTotals::default(),
            on_change: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// All rows in display order, including zero-quantity ones
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Register the listener invoked with fresh totals after every
    /// mutation. Replaces any previous listener.
    pub fn set_change_listener(&mut self, listener: ChangeListener) {
        self.on_change = Some(listener);
    }

    /// Set a row's quantity and return its new line total
    pub fn set_quantity(&mut self, item_id: &str, quantity: u32) -> Result<Money, MenuError> {
        if quantity > MAX_QUANTITY {
            return Err(MenuError::InvalidQuantity(format!(
                "Quantity {} exceeds the per-item maximum of {}",
                quantity, MAX_QUANTITY
            )));
        }

        let line = self
            .lines
            .iter_mut()
            .find(|l| l.item.id == item_id)
            .ok_or_else(|| MenuError::UnknownItem(item_id.to_string()))?;

        line.quantity = quantity;
        let line_total = line.line_total();
        self.recompute();
        Ok(line_total)
    }

    pub fn quantity(&self, item_id: &str) -> Result<u32, MenuError> {
        self.find(item_id).map(|l| l.quantity)
    }

    pub fn line_total(&self, item_id: &str) -> Result<Money, MenuError> {
        self.find(item_id).map(OrderLine::line_total)
    }

    pub fn totals(&self) -> OrderTotals {
        self.totals
    }

    /// Total units across all rows
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    /// Reset every quantity to zero
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.quantity = 0;
        }
        self.recompute();
    }

    /// Freeze the current state for validation and rendering. Only
    /// rows with a non-zero quantity are captured.
    pub fn snapshot(&self, customer: Customer) -> OrderSnapshot {
        OrderSnapshot {
            customer,
            lines: self
                .lines
                .iter()
                .filter(|l| l.quantity > 0)
                .cloned()
                .collect(),
            totals: self.totals,
            placed_at: chrono::Utc::now().timestamp() as u64,
        }
    }

    fn find(&self, item_id: &str) -> Result<&OrderLine, MenuError> {
        self.lines
            .iter()
            .find(|l| l.item.id == item_id)
            .ok_or_else(|| MenuError::UnknownItem(item_id.to_string()))
    }

    fn recompute(&mut self) {
        self.totals = compute_totals(&self.lines);
        if let Some(callback) = &self.on_change {
            callback(&self.totals);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_new_order_is_empty() {
        let order = Order::new(Catalog::standard());
        assert!(order.is_empty());
        assert_eq!(order.item_count(), 0);
        assert_eq!(order.totals(), OrderTotals::default());
    }

    #[test]
    fn test_set_quantity_returns_line_total() {
        let mut order = Order::new(Catalog::standard());
        let line_total = order.set_quantity("margherita", 2).unwrap();
        assert_eq!(line_total, Money::from_cents(2198));
        assert_eq!(order.quantity("margherita").unwrap(), 2);
    }

    #[test]
    fn test_any_change_recomputes_totals() {
        let mut order = Order::new(Catalog::standard());
        order.set_quantity("margherita", 2).unwrap(); // 21.98
        order.set_quantity("fountain-soda", 1).unwrap(); // 1.95

        let totals = order.totals();
        assert_eq!(totals.subtotal, Money::from_cents(2393));
        // 6.25% of 23.93 = 1.495625 -> 1.50
        assert_eq!(totals.tax, Money::from_cents(150));
        assert_eq!(totals.total, Money::from_cents(2543));

        // Lowering a row propagates too
        order.set_quantity("margherita", 1).unwrap();
        assert_eq!(order.totals().subtotal, Money::from_cents(1294));
    }

    #[test]
    fn test_change_listener_fires_on_every_mutation() {
        let seen: Rc<RefCell<Vec<OrderTotals>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut order = Order::new(Catalog::standard());
        order.set_change_listener(Box::new(move |totals| {
            sink.borrow_mut().push(*totals);
        }));

        order.set_quantity("cannoli", 4).unwrap();
        order.set_quantity("cannoli", 0).unwrap();
        order.clear();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].subtotal, Money::from_cents(1500));
        assert_eq!(seen[1].subtotal, Money::ZERO);
    }

    #[test]
    fn test_unknown_item_rejected() {
        let mut order = Order::new(Catalog::standard());
        assert!(matches!(
            order.set_quantity("sushi", 1),
            Err(MenuError::UnknownItem(_))
        ));
    }

    #[test]
    fn test_quantity_over_cap_rejected() {
        let mut order = Order::new(Catalog::standard());
        assert!(order.set_quantity("cannoli", 100).is_err());
        // State untouched after the rejection
        assert_eq!(order.quantity("cannoli").unwrap(), 0);
    }

    #[test]
    fn test_snapshot_drops_zero_quantity_rows() {
        let mut order = Order::new(Catalog::standard());
        order.set_quantity("pepperoni", 1).unwrap();
        order.set_quantity("garden-salad", 3).unwrap();

        let snapshot = order.snapshot(Customer::default());
        assert_eq!(snapshot.lines.len(), 2);
        assert!(snapshot.lines.iter().all(|l| l.quantity > 0));
        assert_eq!(snapshot.totals, order.totals());
        assert!(snapshot.placed_at > 0);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut order = Order::new(Catalog::standard());
        order.set_quantity("pepperoni", 5).unwrap();
        order.clear();
        assert!(order.is_empty());
        assert_eq!(order.totals(), OrderTotals::default());
    }
}
