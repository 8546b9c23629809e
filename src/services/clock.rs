//! Current-time provider for loan timestamps

use chrono::{SecondsFormat, Utc};

/// Source of the timestamps stamped on loans
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Current UTC time as `YYYY-MM-DDTHH:MM:SSZ`
    fn now_iso(&self) -> String;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_iso(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}
