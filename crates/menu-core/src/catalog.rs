//! The fixed menu the form is built from

use crate::error::MenuError;
use shared_types::{MenuItem, Money};

/// Ordered collection of menu rows. Row order is display order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// The house menu
    pub fn standard() -> Self {
        fn item(id: &str, name: &str, cents: i64) -> MenuItem {
            MenuItem {
                id: id.to_string(),
                name: name.to_string(),
                price: Money::from_cents(cents),
            }
        }

        Self::new(vec![
            item("margherita", "Margherita Pizza", 10_99),
            item("pepperoni", "Pepperoni Pizza", 12_49),
            item("garden-salad", "Garden Salad", 6_25),
            item("garlic-knots", "Garlic Knots", 4_50),
            item("cannoli", "Cannoli", 3_75),
            item("fountain-soda", "Fountain Soda", 1_95),
        ])
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, item_id: &str) -> Result<&MenuItem, MenuError> {
        self.items
            .iter()
            .find(|i| i.id == item_id)
            .ok_or_else(|| MenuError::UnknownItem(item_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_menu_has_unique_ids() {
        let catalog = Catalog::standard();
        let mut ids: Vec<_> = catalog.items().iter().map(|i| i.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::standard();
        let item = catalog.get("garlic-knots").unwrap();
        assert_eq!(item.name, "Garlic Knots");
        assert_eq!(item.price, Money::from_cents(450));
    }

    #[test]
    fn test_unknown_id_is_an_error() {
        let catalog = Catalog::standard();
        assert!(matches!(
            catalog.get("sushi"),
            Err(MenuError::UnknownItem(_))
        ));
    }

    #[test]
    fn test_catalog_round_trips_through_json() {
        let catalog = Catalog::standard();
        let json = serde_json::to_string(&catalog).unwrap();
        let back: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }
}
