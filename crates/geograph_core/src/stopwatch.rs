use std::time::Instant;

use tracing::debug;

/// Logs the time spent since creation under `name`.
pub struct Stopwatch<'a> {
    start_time: Instant,
    name: &'a str,
}

impl<'a> Stopwatch<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            start_time: Instant::now(),
            name,
        }
    }

    pub fn report(&self) {
        debug!(name = self.name, elapsed = ?self.start_time.elapsed(), "stopwatch");
    }
}
