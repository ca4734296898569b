use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Unknown menu item: {0}")]
    UnknownItem(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
}
