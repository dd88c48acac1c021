//! Core data model for quizboard games.
//!
//! This crate defines the game aggregate produced by the parsers, the
//! structured parse report shown to users, and the progress-sink trait
//! driven by long-running library operations. It has no I/O of its own:
//! parsing, validation, and persistence live in the sibling crates.

pub mod model;
pub mod progress;
pub mod report;
pub mod text;

pub use model::{Category, DEFAULT_POINT_MULTIPLIER, GameDescription, Question};
pub use progress::{LogProgress, ProgressSink, SilentProgress};
pub use report::{ParseMessage, ParsingResult, Severity};
