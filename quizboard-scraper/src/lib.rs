//! Foreign-source ingestion for quizboard.
//!
//! Everything that touches the network or third-party markup lives here:
//! the HTML export parser, the image fetcher with its content-addressed
//! cache, and the pipeline that migrates a game's remote images into its
//! bundle directory.

pub mod cache;
pub mod error;
pub mod fetch;
pub mod html;
pub mod migrate;

pub use cache::{CachedImage, ImageCache};
pub use error::{FetchError, HtmlImportError};
pub use fetch::{HttpFetcher, ImageFetcher};
pub use migrate::migrate_images;
