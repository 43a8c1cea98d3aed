//! Catalog-side domain logic: product availability and pricing actions.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
