//! Progress reporting for long-running library operations.

/// Sink for progress pushed by the image migration pipeline and the
/// asynchronous add-to-library path. Increments are on a 0–100 scale;
/// the pipeline only pushes, it never reads progress back.
pub trait ProgressSink {
    fn advance(&self, increment: u32);
}

/// A no-op sink that discards all updates.
pub struct SilentProgress;

impl ProgressSink for SilentProgress {
    fn advance(&self, _increment: u32) {}
}

/// A sink that logs each update to the `log` crate.
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn advance(&self, increment: u32) {
        log::debug!("progress +{increment}%");
    }
}
