//! Live-page wiring
//!
//! Binds a session to a server-rendered form purely by element id
//! convention, so the markup stays a plain HTML page:
//!
//! - `qty-<item-id>` — quantity input for a menu row
//! - `line-total-<item-id>` — that row's total display
//! - `subtotal`, `tax`, `total` — aggregate displays
//! - `first-name`, `last-name`, `phone`, `email`, `delivery-address`,
//!   `instructions` — customer inputs
//! - `place-order` — submit button
//!
//! Each quantity input gets a `change` listener that pushes the new
//! value into the session; the session's change listener mirrors the
//! recomputed totals back into the page. Submission either opens the
//! confirmation window or alerts with the aggregated validation
//! message.

use crate::session::SessionState;
use menu_core::Catalog;
use shared_types::OrderTotals;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlInputElement, Window};

/// Customer input element ids and their session field keys
const CUSTOMER_FIELDS: [(&str, &str); 6] = [
    ("first-name", "first_name"),
    ("last-name", "last_name"),
    ("phone", "phone"),
    ("email", "email"),
    ("delivery-address", "delivery_address"),
    ("instructions", "instructions"),
];

/// Wire the current page to a fresh session. Call once after the DOM
/// is ready.
#[wasm_bindgen(js_name = mountOrderForm)]
pub fn mount_order_form() -> Result<(), JsValue> {
    let window =
        web_sys::window().ok_or_else(|| JsValue::from_str("No window object available"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document object available"))?;

    let state = Rc::new(RefCell::new(SessionState::new()));

    // Aggregate displays follow every order mutation
    {
        let document = document.clone();
        state.borrow_mut().set_change_listener(Box::new(move |totals| {
            paint_totals(&document, totals);
        }));
    }
    paint_totals(&document, &state.borrow().totals());

    wire_quantity_inputs(&document, &state)?;
    wire_customer_inputs(&document, &state)?;
    wire_submit(&window, &document, &state)?;

    Ok(())
}

fn wire_quantity_inputs(
    document: &Document,
    state: &Rc<RefCell<SessionState>>,
) -> Result<(), JsValue> {
    for item in Catalog::standard().items() {
        let input = input_by_id(document, &format!("qty-{}", item.id))?;
        let closure = {
            let state = Rc::clone(state);
            let document = document.clone();
            let item_id = item.id.clone();
            Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                let input = match event
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                {
                    Some(input) => input,
                    None => return,
                };

                let applied = state.borrow_mut().set_quantity(&item_id, &input.value());
                let line_total = match applied {
                    Ok(line_total) => line_total,
                    Err(_) => {
                        // Unparseable entry: normalize the field to zero
                        input.set_value("0");
                        match state.borrow_mut().set_quantity(&item_id, "0") {
                            Ok(line_total) => line_total,
                            Err(_) => return,
                        }
                    }
                };
                set_text(
                    &document,
                    &format!("line-total-{}", item_id),
                    &format!("${}", line_total),
                );
            })
        };
        input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
        // Listener lives for the page lifetime
        closure.forget();
    }
    Ok(())
}

fn wire_customer_inputs(
    document: &Document,
    state: &Rc<RefCell<SessionState>>,
) -> Result<(), JsValue> {
    for (element_id, field) in CUSTOMER_FIELDS {
        let input = input_by_id(document, element_id)?;
        let closure = {
            let state = Rc::clone(state);
            Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                if let Some(input) = event
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                {
                    let _ = state.borrow_mut().set_customer_field(field, &input.value());
                }
            })
        };
        input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn wire_submit(
    window: &Window,
    document: &Document,
    state: &Rc<RefCell<SessionState>>,
) -> Result<(), JsValue> {
    let button = document
        .get_element_by_id("place-order")
        .ok_or_else(|| JsValue::from_str("Missing element: #place-order"))?;

    let closure = {
        let state = Rc::clone(state);
        let window = window.clone();
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            match state.borrow().submit() {
                Ok(html) => {
                    if let Err(err) = open_confirmation(&window, &html) {
                        let _ = window.alert_with_message(
                            &err.as_string()
                                .unwrap_or_else(|| "Could not open confirmation".to_string()),
                        );
                    }
                }
                Err(message) => {
                    let _ = window.alert_with_message(&message);
                }
            }
        })
    };
    button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Open a fresh window and write the confirmation document into it.
/// The popup primitives are the browser's; failures (blockers) come
/// back as an error for the caller to surface.
fn open_confirmation(window: &Window, html: &str) -> Result<(), JsValue> {
    let popup = window
        .open_with_url_and_target("", "_blank")?
        .ok_or_else(|| JsValue::from_str("The confirmation popup was blocked"))?;
    let document = popup
        .document()
        .ok_or_else(|| JsValue::from_str("Confirmation window has no document"))?;
    let html_document = document.unchecked_into::<web_sys::HtmlDocument>();
    html_document.write(&js_sys::Array::of1(&JsValue::from_str(html)))?;
    html_document.close()?;
    Ok(())
}

fn paint_totals(document: &Document, totals: &OrderTotals) {
    set_text(document, "subtotal", &format!("${}", totals.subtotal));
    set_text(document, "tax", &format!("${}", totals.tax));
    set_text(document, "total", &format!("${}", totals.total));
}

fn set_text(document: &Document, id: &str, text: &str) {
    if let Some(element) = document.get_element_by_id(id) {
        element.set_text_content(Some(text));
    }
}

fn input_by_id(document: &Document, id: &str) -> Result<HtmlInputElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element: #{}", id)))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not an input", id)))
}
