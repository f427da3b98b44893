//! State structures for the prediction market protocol

pub mod config;
pub mod market;
pub mod points;
pub mod position;

pub use config::*;
pub use market::*;
pub use points::*;
pub use position::*;
