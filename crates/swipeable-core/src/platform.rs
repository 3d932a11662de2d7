//! Platform abstraction traits for runtime services.
//!
//! Hosts implement these to drive frames and report time without the core
//! depending on a particular event loop.

/// Schedules frames on behalf of the runtime.
///
/// Implementations must be safe to share across threads so a platform
/// event loop can observe frame requests from wherever it polls them.
pub trait RuntimeScheduler: Send + Sync {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Provides timing information for the runtime.
pub trait Clock: Send + Sync {
    /// Instant type produced by this clock implementation.
    type Instant: Copy + Send + Sync;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Returns the number of nanoseconds elapsed since `since`.
    fn elapsed_nanos(&self, since: Self::Instant) -> u64;
}
