//! Order confirmation rendering
//!
//! Turns an [`OrderSnapshot`] into the read-only confirmation view: a
//! freestanding HTML document for the browser popup, plus a fixed-width
//! plain-text ticket for anything that is not a browser. The renderers
//! never touch live form state; they only see the frozen snapshot.

pub mod escape;
pub mod html;
pub mod text;

use serde::{Deserialize, Serialize};
use shared_types::OrderSnapshot;
use thiserror::Error;

pub use html::render_html;
pub use text::render_text;

#[derive(Error, Debug)]
pub enum ReceiptError {
    #[error("Cannot render a confirmation for an empty order")]
    EmptyOrder,
}

/// Everything a renderer needs for one confirmation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptRequest {
    pub snapshot: OrderSnapshot,
    pub store_name: String,
}

impl ReceiptRequest {
    pub fn new(snapshot: OrderSnapshot, store_name: impl Into<String>) -> Self {
        Self {
            snapshot,
            store_name: store_name.into(),
        }
    }
}

/// Format an epoch-seconds timestamp for display. Out-of-range values
/// fall back to the raw number rather than failing the render.
pub(crate) fn format_placed_at(placed_at: u64) -> String {
    match chrono::DateTime::from_timestamp(placed_at as i64, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M UTC").to_string(),
        None => placed_at.to_string(),
    }
}
