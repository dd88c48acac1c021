//! Content-addressed local cache for remote images.
//!
//! Cache entries are keyed by the MD5 of the URL's basename, not by the
//! content bytes: a changed remote file behind the same name is never
//! re-fetched. That staleness trade-off keeps repeated imports of the
//! same export free of network traffic.

use std::path::{Path, PathBuf};

use crate::error::FetchError;
use crate::fetch::{HttpFetcher, ImageFetcher};

/// A cache entry: the extensionless cached file plus the image type
/// detected from the source name or the bytes.
#[derive(Debug, Clone)]
pub struct CachedImage {
    pub path: PathBuf,
    pub extension: Option<&'static str>,
}

impl CachedImage {
    /// File name this image gets inside a bundle: the hash, plus the
    /// detected extension when there is one.
    pub fn bundle_file_name(&self) -> String {
        let stem = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match self.extension {
            Some(ext) => format!("{stem}.{ext}"),
            None => stem,
        }
    }
}

/// The image cache over a pre-existing writable directory.
pub struct ImageCache {
    dir: PathBuf,
    fetcher: Box<dyn ImageFetcher>,
}

impl ImageCache {
    /// Open a cache backed by the real HTTP fetcher.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, FetchError> {
        Ok(Self::with_fetcher(dir, Box::new(HttpFetcher::new()?)))
    }

    /// Open a cache over a custom fetcher (tests).
    pub fn with_fetcher(dir: impl Into<PathBuf>, fetcher: Box<dyn ImageFetcher>) -> Self {
        Self {
            dir: dir.into(),
            fetcher,
        }
    }

    /// Resolve a URL to a cached local file.
    ///
    /// An existing cache entry short-circuits without any network
    /// activity; otherwise the image is fetched (per-item timeouts) and
    /// stored under its hash, without an extension. Extension detection
    /// tries the original name's suffix first and falls back to sniffing
    /// the cached bytes.
    pub fn ensure_local(&self, url: &str) -> Result<CachedImage, FetchError> {
        let name = basename(url);
        let hash = format!("{:x}", md5::compute(name));
        let path = self.dir.join(&hash);

        if !path.exists() {
            let bytes = self.fetcher.fetch(url)?;
            std::fs::write(&path, &bytes)?;
            log::debug!("cached {url} as {hash}");
        }

        let extension = extension_from_name(name).or_else(|| sniff_extension(&path));
        Ok(CachedImage { path, extension })
    }
}

/// Last path segment of a URL, with query and fragment stripped.
fn basename(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.rsplit('/').next().unwrap_or(path)
}

/// Recognize an image extension directly from a file name.
fn extension_from_name(name: &str) -> Option<&'static str> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("jpg"),
        "png" => Some("png"),
        "gif" => Some("gif"),
        _ => None,
    }
}

/// Probe the real image format from the cached bytes.
fn sniff_extension(path: &Path) -> Option<&'static str> {
    let bytes = std::fs::read(path).ok()?;
    match image::guess_format(&bytes).ok()? {
        image::ImageFormat::Jpeg => Some("jpg"),
        image::ImageFormat::Png => Some("png"),
        image::ImageFormat::Gif => Some("gif"),
        other => other.extensions_str().first().copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basename_strips_query_and_fragment() {
        assert_eq!(basename("https://e.com/a/pic.png?x=1#frag"), "pic.png");
        assert_eq!(basename("pic.png"), "pic.png");
    }

    #[test]
    fn name_extensions_are_normalized() {
        assert_eq!(extension_from_name("photo.JPEG"), Some("jpg"));
        assert_eq!(extension_from_name("photo.png"), Some("png"));
        assert_eq!(extension_from_name("animation.gif"), Some("gif"));
        assert_eq!(extension_from_name("archive.bin"), None);
        assert_eq!(extension_from_name("noext"), None);
    }
}
