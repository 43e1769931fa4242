//! Name synthesis: `carved_<UTC-timestamp>_<offset-hex>_<counter>.<ext>`.

use chrono::{DateTime, Utc};

use crate::types::FormatTag;

/// Supplies the timestamp used in synthesised names. Injected so tests can
/// pin the clock instead of asserting against wall time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The real system clock, used by `carver_app`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A fixed clock for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// `carved_<UTC-timestamp>_<offset-as-12-hex-digits>_<counter-6-digits>.<ext>`
pub fn synth_name(clock: &dyn Clock, offset: u64, format: FormatTag, counter: u64) -> String {
    let timestamp = clock.now().format("%Y%m%dT%H%M%SZ");
    format!(
        "carved_{timestamp}_{offset:012x}_{counter:06}.{ext}",
        ext = format.extension()
    )
}
