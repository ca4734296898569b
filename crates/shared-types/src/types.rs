use crate::money::Money;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Per-unit price in cents
    pub price: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OrderLine {
    pub item: MenuItem,
    pub quantity: u32,
}

impl OrderLine {
    pub fn line_total(&self) -> Money {
        self.item.price.saturating_mul(self.quantity)
    }
}

/// Customer contact fields as entered in the form. Blank means unset;
/// validators trim before checking presence.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub delivery_address: String,
    pub instructions: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OrderTotals {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

/// Immutable capture of the form at submission time: the value handed
/// to checkout validation and receipt rendering. `lines` holds only
/// rows with a non-zero quantity.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OrderSnapshot {
    pub customer: Customer,
    pub lines: Vec<OrderLine>,
    pub totals: OrderTotals,
    /// Epoch seconds
    pub placed_at: u64,
}

impl OrderSnapshot {
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
