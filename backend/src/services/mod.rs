//! Business logic services
//!
//! Services encapsulate business logic between the HTTP handlers and the
//! shared calculator.

pub mod nutrition;

pub use nutrition::NutritionService;
