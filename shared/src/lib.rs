//! Dog Health Assistant Shared Library
//!
//! This crate contains the nutrient calculator and the types and
//! validation shared by the backend and the WASM module.

pub mod calculator;
pub mod errors;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use calculator::*;
pub use errors::*;
pub use types::*;
