//! The native quizboard game format.
//!
//! Games are stored as flat key/value property files (`game.name`,
//! `category.<n>.name`, `category.<n>.question.<k>`, ...). Bundle
//! manifests keep the historical `.xml` suffix even though the content is
//! the plain key/value grammar. This crate reads that format into a
//! [`GameDescription`], writes one back out, and validates the result.
//!
//! [`GameDescription`]: quizboard_core::GameDescription

pub mod manifest;
pub mod native;
pub mod props;
pub mod validate;

pub use validate::{
    MAX_CATEGORIES, MAX_PLAYERS, MAX_QUESTIONS, MIN_CATEGORIES, MIN_PLAYERS, MIN_QUESTIONS,
    validate,
};

/// File suffix of native game files and bundle manifests.
pub const MANIFEST_EXTENSION: &str = "xml";

/// Directory suffix of game bundles.
pub const BUNDLE_EXTENSION: &str = "jj";
