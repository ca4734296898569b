//! Freestanding HTML confirmation document
//!
//! The output is a complete document (doctype through closing tag)
//! meant to be written into a fresh window. It carries no scripts and
//! no form controls; every user-entered string is escaped.

use crate::escape::escape_html;
use crate::{format_placed_at, ReceiptError, ReceiptRequest};
use std::fmt::Write;

pub fn render_html(request: &ReceiptRequest) -> Result<String, ReceiptError> {
    let snapshot = &request.snapshot;
    if snapshot.is_empty() {
        return Err(ReceiptError::EmptyOrder);
    }

    tracing::debug!(
        lines = snapshot.lines.len(),
        "rendering HTML confirmation"
    );

    let store = escape_html(&request.store_name);
    let customer = &snapshot.customer;

    let mut doc = String::with_capacity(2048);
    doc.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(doc, "<title>Order Confirmation - {}</title>", store);
    doc.push_str("</head>\n<body>\n");

    let _ = writeln!(doc, "<h1>{}</h1>", store);
    doc.push_str("<h2>Order Confirmation</h2>\n");
    let _ = writeln!(
        doc,
        "<p>Placed {}</p>",
        escape_html(&format_placed_at(snapshot.placed_at))
    );

    doc.push_str("<h3>Customer</h3>\n<ul>\n");
    let _ = writeln!(
        doc,
        "<li>Name: {} {}</li>",
        escape_html(customer.first_name.trim()),
        escape_html(customer.last_name.trim())
    );
    let _ = writeln!(doc, "<li>Phone: {}</li>", escape_html(customer.phone.trim()));
    if !customer.email.trim().is_empty() {
        let _ = writeln!(doc, "<li>Email: {}</li>", escape_html(customer.email.trim()));
    }
    let _ = writeln!(
        doc,
        "<li>Delivery address: {}</li>",
        escape_html(customer.delivery_address.trim())
    );
    if !customer.instructions.trim().is_empty() {
        let _ = writeln!(
            doc,
            "<li>Instructions: {}</li>",
            escape_html(customer.instructions.trim())
        );
    }
    doc.push_str("</ul>\n");

    doc.push_str("<h3>Your order</h3>\n<table>\n");
    doc.push_str("<tr><th>Item</th><th>Qty</th><th>Total</th></tr>\n");
    for line in &snapshot.lines {
        let _ = writeln!(
            doc,
            "<tr><td>{}</td><td>{}</td><td>${}</td></tr>",
            escape_html(&line.item.name),
            line.quantity,
            line.line_total()
        );
    }
    let totals = snapshot.totals;
    let _ = writeln!(
        doc,
        "<tr><td colspan=\"2\">Subtotal</td><td>${}</td></tr>",
        totals.subtotal
    );
    let _ = writeln!(
        doc,
        "<tr><td colspan=\"2\">Tax (6.25%)</td><td>${}</td></tr>",
        totals.tax
    );
    let _ = writeln!(
        doc,
        "<tr><td colspan=\"2\"><strong>Total</strong></td><td><strong>${}</strong></td></tr>",
        totals.total
    );
    doc.push_str("</table>\n");

    doc.push_str("<p>Thank you for your order.</p>\n");
    doc.push_str("</body>\n</html>\n");

    Ok(doc)
}
