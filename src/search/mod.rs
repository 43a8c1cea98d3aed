//! Catalog search and category browsing. Everything here is a pure function
//! of its inputs.

pub mod engine;
pub mod browse;

pub use engine::*;
pub use browse::*;
