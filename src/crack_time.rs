//! Offline brute-force time estimate for a password of a given shape.

use std::fmt;

/// Assumed attacker throughput.
pub const GUESSES_PER_SECOND: f64 = 1_000_000_000.0;

const SECONDS_IN_MINUTE: f64 = 60.0;
const SECONDS_IN_HOUR: f64 = SECONDS_IN_MINUTE * 60.0;
const SECONDS_IN_DAY: f64 = SECONDS_IN_HOUR * 24.0;
const SECONDS_IN_YEAR: f64 = SECONDS_IN_DAY * 365.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Years,
}

impl TimeUnit {
    fn seconds(self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::Minutes => SECONDS_IN_MINUTE,
            TimeUnit::Hours => SECONDS_IN_HOUR,
            TimeUnit::Days => SECONDS_IN_DAY,
            TimeUnit::Years => SECONDS_IN_YEAR,
        }
    }

    fn name(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
            TimeUnit::Years => "years",
        }
    }
}

/// Estimated time to exhaust the keyspace, expressed in its largest whole unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrackTime {
    pub seconds: f64,
    pub unit: TimeUnit,
}

impl CrackTime {
    pub fn from_seconds(seconds: f64) -> Self {
        let unit = [
            TimeUnit::Years,
            TimeUnit::Days,
            TimeUnit::Hours,
            TimeUnit::Minutes,
        ]
        .into_iter()
        .find(|unit| seconds >= unit.seconds())
        .unwrap_or(TimeUnit::Seconds);
        Self { seconds, unit }
    }

    /// Magnitude in `self.unit`.
    pub fn value(&self) -> f64 {
        self.seconds / self.unit.seconds()
    }
}

impl fmt::Display for CrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.value(), self.unit.name())
    }
}

/// Number of candidates: `alphabet_size ^ length`, in floating point.
///
/// Goes far past `u64` for long passwords; becomes `inf` past `f64::MAX`.
pub fn keyspace(length: usize, alphabet_size: usize) -> f64 {
    (alphabet_size as f64).powf(length as f64)
}

pub fn estimate_crack_time(length: usize, alphabet_size: usize) -> CrackTime {
    CrackTime::from_seconds(keyspace(length, alphabet_size) / GUESSES_PER_SECOND)
}

/// Human-readable crack time, e.g. `"3.14 years"`.
pub fn estimate(length: usize, alphabet_size: usize) -> String {
    estimate_crack_time(length, alphabet_size).to_string()
}

/// Bits of entropy for a uniformly random password of this shape.
pub fn entropy_bits(length: usize, alphabet_size: usize) -> f64 {
    if alphabet_size == 0 {
        return 0.0;
    }
    length as f64 * (alphabet_size as f64).log2()
}
