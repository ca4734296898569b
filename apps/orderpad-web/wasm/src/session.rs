//! Stateful order form session
//!
//! Holds the whole form in Rust: quantities, customer fields, derived
//! totals. JavaScript (or the `dom` module) only forwards events and
//! renders the strings handed back.

use checkout_engine::CheckoutEngine;
use menu_core::{parse_quantity, Catalog, Order};
use receipt_engine::{render_html, ReceiptRequest};
use shared_types::{Customer, OrderSnapshot, OrderTotals};
use wasm_bindgen::prelude::*;

/// Store name shown on the confirmation view
pub const STORE_NAME: &str = "Orderpad Pizzeria";

/// Session internals, testable without JsValue
pub(crate) struct SessionState {
    order: Order,
    customer: Customer,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            order: Order::new(Catalog::standard()),
            customer: Customer::default(),
        }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn set_change_listener(&mut self, listener: Box<dyn Fn(&OrderTotals)>) {
        self.order.set_change_listener(listener);
    }

    /// Parse a raw quantity field and apply it; returns the row's new
    /// line total as a display string.
    pub fn set_quantity(&mut self, item_id: &str, raw: &str) -> Result<String, String> {
        let qty = parse_quantity(raw).map_err(|e| e.to_string())?;
        let line_total = self
            .order
            .set_quantity(item_id, qty)
            .map_err(|e| e.to_string())?;
        Ok(line_total.to_string())
    }

    pub fn set_customer_field(&mut self, field: &str, value: &str) -> Result<(), String> {
        let slot = match field {
            "first_name" => &mut self.customer.first_name,
            "last_name" => &mut self.customer.last_name,
            "phone" => &mut self.customer.phone,
            "email" => &mut self.customer.email,
            "delivery_address" => &mut self.customer.delivery_address,
            "instructions" => &mut self.customer.instructions,
            other => return Err(format!("Unknown customer field: {}", other)),
        };
        *slot = value.to_string();
        Ok(())
    }

    pub fn totals(&self) -> OrderTotals {
        self.order.totals()
    }

    pub fn snapshot(&self) -> OrderSnapshot {
        self.order.snapshot(self.customer.clone())
    }

    /// Would a submission attempt pass right now
    pub fn can_submit(&self) -> bool {
        !CheckoutEngine::new().check(&self.snapshot()).is_blocked()
    }

    /// Validate and, if clean, render the confirmation document.
    /// Returns the aggregated alert text otherwise.
    pub fn submit(&self) -> Result<String, String> {
        let snapshot = self.snapshot();
        let report = CheckoutEngine::new().check(&snapshot);
        if let Some(message) = report.summary_message() {
            return Err(message);
        }
        render_html(&ReceiptRequest::new(snapshot, STORE_NAME)).map_err(|e| e.to_string())
    }

    pub fn reset(&mut self) {
        self.order.clear();
        self.customer = Customer::default();
    }
}

/// Stateful order form session exposed to JavaScript
#[wasm_bindgen]
pub struct OrderSession {
    state: SessionState,
}

#[wasm_bindgen]
impl OrderSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            state: SessionState::new(),
        }
    }

    /// The menu rows in display order, for initial render
    pub fn menu(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.state.order().catalog().items())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Register a callback invoked with (subtotal, tax, total) display
    /// strings after every order mutation.
    #[wasm_bindgen(js_name = setChangeCallback)]
    pub fn set_change_callback(&mut self, callback: js_sys::Function) {
        self.state.set_change_listener(Box::new(move |totals| {
            let this = JsValue::null();
            let _ = callback.call3(
                &this,
                &JsValue::from_str(&totals.subtotal.to_string()),
                &JsValue::from_str(&totals.tax.to_string()),
                &JsValue::from_str(&totals.total.to_string()),
            );
        }));
    }

    /// Apply a quantity field change; returns the row's new line total
    /// formatted to two decimals.
    #[wasm_bindgen(js_name = setQuantity)]
    pub fn set_quantity(&mut self, item_id: &str, raw: &str) -> Result<String, JsValue> {
        self.state
            .set_quantity(item_id, raw)
            .map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen(js_name = setCustomerField)]
    pub fn set_customer_field(&mut self, field: &str, value: &str) -> Result<(), JsValue> {
        self.state
            .set_customer_field(field, value)
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn totals(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.state.totals())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    #[wasm_bindgen(js_name = itemCount)]
    pub fn item_count(&self) -> u32 {
        self.state.order().item_count()
    }

    #[wasm_bindgen(js_name = canSubmit)]
    pub fn can_submit(&self) -> bool {
        self.state.can_submit()
    }

    /// Validate the order; on success returns the confirmation HTML,
    /// on failure the aggregated error message as a JS error.
    pub fn submit(&self) -> Result<String, JsValue> {
        self.state.submit().map_err(|e| JsValue::from_str(&e))
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }
}

impl Default for OrderSession {
    fn default() -> Self {
        Self::new()
    }
}
