//! akinator: guess a character through a greedy yes/no decision tree
//!
//! A dataset of characters is read from CSV, a discriminator tree is built
//! by repeatedly choosing the attribute test that halves the remaining
//! candidates most evenly, and the tree is then walked interactively.
//!
//! Layers, innermost first:
//! - [`domain`]: characters, tree building and the play state machine (pure)
//! - [`application`]: dataset ingestion and the game service
//! - [`infrastructure`]: filesystem and console boundaries, service wiring
//! - [`cli`]: argument parsing and command dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
