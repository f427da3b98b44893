pub mod create_market;
pub mod resolve;
pub mod schedule;

pub use create_market::*;
pub use resolve::*;
pub use schedule::*;
