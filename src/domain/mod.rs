//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod entities;
pub mod error;
pub mod play;
pub mod tree;

pub use builder::{best_split, candidate_splits, Split, TreeBuilder};
pub use entities::{Attribute, Character, FIELD_COUNT};
pub use error::{DomainError, TreeResult};
pub use play::{Answer, Outcome, PlayState, Prompt};
pub use tree::{Characters, Node, TreeStats};
