use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use quizboard_scraper::{FetchError, ImageCache, ImageFetcher};

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\nrest-of-file";

/// Counts fetches and serves a fixed payload.
struct CountingFetcher {
    calls: Arc<AtomicUsize>,
    payload: Vec<u8>,
}

impl ImageFetcher for CountingFetcher {
    fn fetch(&self, _url: &str) -> Result<Vec<u8>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.payload.clone())
    }
}

/// Always fails with an HTTP status.
struct FailingFetcher;

impl ImageFetcher for FailingFetcher {
    fn fetch(&self, _url: &str) -> Result<Vec<u8>, FetchError> {
        Err(FetchError::Status(404))
    }
}

fn counting_cache(dir: &std::path::Path, payload: &[u8]) -> (ImageCache, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let cache = ImageCache::with_fetcher(
        dir,
        Box::new(CountingFetcher {
            calls: Arc::clone(&calls),
            payload: payload.to_vec(),
        }),
    );
    (cache, calls)
}

#[test]
fn second_resolution_hits_the_cache_without_fetching() {
    let dir = tempfile::tempdir().unwrap();
    let (cache, calls) = counting_cache(dir.path(), PNG_MAGIC);

    let first = cache.ensure_local("https://example.com/pics/photo.png").unwrap();
    let second = cache.ensure_local("https://example.com/pics/photo.png").unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(first.path, second.path);
    assert!(first.path.exists());
}

#[test]
fn cache_is_keyed_by_basename_not_host() {
    let dir = tempfile::tempdir().unwrap();
    let (cache, calls) = counting_cache(dir.path(), PNG_MAGIC);

    let a = cache.ensure_local("https://one.example/photo.png").unwrap();
    let b = cache.ensure_local("https://two.example/other/photo.png").unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(a.path, b.path);
}

#[test]
fn cached_file_name_is_the_md5_of_the_basename() {
    let dir = tempfile::tempdir().unwrap();
    let (cache, _) = counting_cache(dir.path(), PNG_MAGIC);

    let cached = cache.ensure_local("https://example.com/a/b/photo.png?v=2").unwrap();

    let expected = format!("{:x}", md5::compute("photo.png"));
    assert_eq!(expected.len(), 32);
    assert_eq!(
        cached.path.file_name().unwrap().to_str().unwrap(),
        expected
    );
    // The cached file itself carries no extension.
    assert!(cached.path.extension().is_none());
    assert_eq!(cached.bundle_file_name(), format!("{expected}.png"));
}

#[test]
fn recognized_suffix_wins_over_sniffing() {
    let dir = tempfile::tempdir().unwrap();
    // The payload is GIF data but the name says jpeg.
    let (cache, _) = counting_cache(dir.path(), b"GIF89a-not-really");

    let cached = cache.ensure_local("https://example.com/photo.JPEG").unwrap();
    assert_eq!(cached.extension, Some("jpg"));
}

#[test]
fn ambiguous_suffix_falls_back_to_magic_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let (cache, _) = counting_cache(dir.path(), PNG_MAGIC);

    let cached = cache.ensure_local("https://example.com/download.bin").unwrap();
    assert_eq!(cached.extension, Some("png"));
}

#[test]
fn undetectable_content_keeps_no_extension() {
    let dir = tempfile::tempdir().unwrap();
    let (cache, _) = counting_cache(dir.path(), b"not an image at all");

    let cached = cache.ensure_local("https://example.com/download.bin").unwrap();
    assert_eq!(cached.extension, None);
    assert_eq!(
        cached.bundle_file_name(),
        format!("{:x}", md5::compute("download.bin"))
    );
}

#[test]
fn fetch_failure_creates_no_cache_entry() {
    let dir = tempfile::tempdir().unwrap();
    let cache = ImageCache::with_fetcher(dir.path(), Box::new(FailingFetcher));

    let err = cache.ensure_local("https://example.com/gone.png").unwrap_err();
    assert!(matches!(err, FetchError::Status(404)));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
