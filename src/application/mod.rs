//! Application layer: dataset loading and the interactive round
//!
//! Talks to the outside world only through `FileSystem` and `Console`.

pub mod dataset;
pub mod error;
pub mod error_ext;
pub mod services;

pub use dataset::parse_records;
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
