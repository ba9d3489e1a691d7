//! Error type shared by the catalog, sessions and page wiring.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WishError {
    /// Age input the page cannot accept. Rendered back to the visitor.
    #[error("Please enter a valid age between {min} and {max}")]
    Validation { input: String, min: u32, max: u32 },

    /// Neither a matching key nor a `default` list exists.
    #[error("No birthday wishes found for age {age} and the catalog has no default list")]
    NotFound { age: u32 },

    #[error("envelope index {index} is out of range for a pool of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("envelope pool is empty")]
    EmptyPool,

    /// Malformed catalog document.
    #[error("malformed wish catalog: {0}")]
    Catalog(String),

    #[error("invalid config: {0}")]
    Config(String),
}

impl From<WishError> for JsValue {
    fn from(err: WishError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type WishResult<T> = Result<T, WishError>;
