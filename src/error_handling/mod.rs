//! Error handling for initialization and lookup failures.

mod types;

pub use types::{InitializationError, LookupError};
