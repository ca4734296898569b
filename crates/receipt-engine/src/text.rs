//! Plain-text ticket renderer (kitchen printer, logs, tests)

use crate::{format_placed_at, ReceiptRequest};
use std::fmt::Write;

const WIDTH: usize = 38;

pub fn render_text(request: &ReceiptRequest) -> String {
    let snapshot = &request.snapshot;
    tracing::debug!(lines = snapshot.lines.len(), "rendering text ticket");

    let rule = "-".repeat(WIDTH);
    let mut out = String::with_capacity(512);

    let _ = writeln!(out, "{}", request.store_name);
    let _ = writeln!(out, "Order placed {}", format_placed_at(snapshot.placed_at));
    let _ = writeln!(out, "{}", rule);

    for line in &snapshot.lines {
        let label = format!("{} x {}", line.quantity, line.item.name);
        let amount = line.line_total().to_string();
        let pad = WIDTH.saturating_sub(label.len() + amount.len());
        let _ = writeln!(out, "{}{}{}", label, " ".repeat(pad), amount);
    }

    let _ = writeln!(out, "{}", rule);
    for (label, amount) in [
        ("Subtotal", snapshot.totals.subtotal),
        ("Tax (6.25%)", snapshot.totals.tax),
        ("Total", snapshot.totals.total),
    ] {
        let amount = amount.to_string();
        let pad = WIDTH.saturating_sub(label.len() + amount.len());
        let _ = writeln!(out, "{}{}{}", label, " ".repeat(pad), amount);
    }

    let customer = &snapshot.customer;
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(
        out,
        "Deliver to: {} {}",
        customer.first_name.trim(),
        customer.last_name.trim()
    );
    let _ = writeln!(out, "{}", customer.delivery_address.trim());
    let _ = writeln!(out, "Phone: {}", customer.phone.trim());
    if !customer.instructions.trim().is_empty() {
        let _ = writeln!(out, "Note: {}", customer.instructions.trim());
    }

    out
}
