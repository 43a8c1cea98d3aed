pub mod product;
pub mod category;
pub mod order;
pub mod analytics;

pub use product::*;
pub use category::*;
pub use order::*;
pub use analytics::*;
