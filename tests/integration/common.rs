//! Shared helpers for integration tests

use std::cell::Cell;
use std::path::Path;

use library_desk::{Clock, DataFiles};

/// Clock that ticks one minute per call from a fixed start
#[derive(Debug, Default)]
pub struct StepClock {
    calls: Cell<u32>,
}

impl Clock for StepClock {
    fn now_iso(&self) -> String {
        let n = self.calls.get();
        self.calls.set(n + 1);
        format!("2024-03-01T{:02}:{:02}:00Z", 10 + n / 60, n % 60)
    }
}

pub fn files_in(dir: &Path) -> DataFiles {
    DataFiles::new(
        dir.join("books.json"),
        dir.join("readers.json"),
        dir.join("loans.json"),
    )
}
