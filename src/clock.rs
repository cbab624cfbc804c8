//! Monotonic time source used for step timing.

/// Something which reports elapsed time in microseconds.
///
/// Readings are measured from a clock-specific epoch (device boot, creation
/// of the clock, ...) and must never decrease for the lifetime of the
/// process. Any `Fn() -> u64` closure is a clock, which is how tests inject
/// a fake time source.
pub trait MonotonicClock {
    /// Microseconds elapsed since the clock's epoch.
    fn now_micros(&self) -> u64;
}

impl<F> MonotonicClock for F
where
    F: Fn() -> u64,
{
    #[inline]
    fn now_micros(&self) -> u64 {
        self()
    }
}

/// Monotonic clock backed by the operating system.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StdClock {
    created_at: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Create a clock whose epoch is now.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self {
            created_at: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl MonotonicClock for StdClock {
    fn now_micros(&self) -> u64 {
        u64::try_from(self.created_at.elapsed().as_micros()).unwrap_or(u64::MAX)
    }
}
