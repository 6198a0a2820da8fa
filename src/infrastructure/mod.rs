//! Infrastructure layer: concrete filesystem and console, plus service wiring

pub mod di;
pub mod error;
pub mod traits;

pub use error::InfraError;
