//! System orchestration, startup, and shutdown logic.

pub mod storefront_system;
pub mod telemetry;
pub mod error;

pub use storefront_system::*;
pub use telemetry::*;
pub use error::*;
