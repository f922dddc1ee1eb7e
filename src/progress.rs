// src/progress.rs
/// Progress reporting for the download loop.
/// The page count is unknown up front, so there is no `begin(total)`.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One page of the listing came back with events in it.
    fn page_done(&mut self, _offset: usize, _bytes: usize) {}

    /// Paging stopped at the sentinel after `pages` useful pages.
    fn finish(&mut self, _pages: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Forwards progress to the log.
pub struct LogProgress;

impl Progress for LogProgress {
    fn log(&mut self, msg: &str) {
        logf!("{msg}");
    }
    fn page_done(&mut self, offset: usize, bytes: usize) {
        logd!("page at offset {offset}: {bytes} bytes");
    }
    fn finish(&mut self, pages: usize) {
        logf!("Download complete ({pages} pages)");
    }
}
