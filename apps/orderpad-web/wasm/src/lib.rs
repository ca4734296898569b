//! WASM bindings for the restaurant order form
//!
//! All form state lives in Rust via `OrderSession`; quantity math,
//! validation, and confirmation rendering come from the core crates.
//! JavaScript either drives the session directly or calls
//! `mountOrderForm` and lets the `dom` module wire the page itself.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { OrderSession, mountOrderForm } from './pkg/orderpad_wasm.js';
//!
//! await init();
//!
//! // Hands-off: wire the page by element id convention
//! mountOrderForm();
//!
//! // Or drive the session manually
//! const session = new OrderSession();
//! session.setChangeCallback((subtotal, tax, total) => updateTotals(subtotal, tax, total));
//! document.querySelector('#qty-margherita').addEventListener('change', (e) => {
//!     e.target.closest('tr').querySelector('.line-total').textContent =
//!         '$' + session.setQuantity('margherita', e.target.value);
//! });
//! try {
//!     const html = session.submit();
//!     const popup = window.open('', '_blank');
//!     popup.document.write(html);
//!     popup.document.close();
//! } catch (message) {
//!     alert(message);
//! }
//! ```

pub mod dom;
pub mod session;

use wasm_bindgen::prelude::*;

// Re-export main types for JavaScript
pub use dom::mount_order_form;
pub use session::{OrderSession, STORE_NAME};

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Format a cent amount as a two-decimal display string
#[wasm_bindgen]
pub fn format_money(cents: i64) -> String {
    shared_types::Money::from_cents(cents).to_string()
}

/// Quick phone check without a session, for inline field feedback
#[wasm_bindgen]
pub fn quick_validate_phone(raw: &str) -> bool {
    checkout_engine::patterns::digits_only(raw).len() == 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version() {
        let version = get_version();
        assert!(!version.is_empty());
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0), "0.00");
        assert_eq!(format_money(1250), "12.50");
        assert_eq!(format_money(5), "0.05");
    }

    #[test]
    fn test_quick_validate_phone() {
        assert!(quick_validate_phone("(555) 867-5309"));
        assert!(!quick_validate_phone("867-5309"));
        assert!(!quick_validate_phone(""));
    }
}
