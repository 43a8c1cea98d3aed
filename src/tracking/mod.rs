//! Order status machine and the timed reveal that drives the tracking timeline.

pub mod machine;
pub mod reveal;

pub use machine::*;
pub use reveal::*;
