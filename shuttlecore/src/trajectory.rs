pub mod lewis_riesenfeld;
pub mod minimum_jerk;
pub mod ramp;

pub use lewis_riesenfeld::LewisRiesenfeld;
pub use minimum_jerk::MinimumJerk;
pub use ramp::LinearRamp;

use uom::si::f64::{Length, Ratio, Time};

/// A transport with a fixed duration and a fixed net displacement.
///
/// `total_time` is expected to be positive and `total_distance` may carry
/// any sign; neither is range-checked, so callers own the physical
/// sensibility of the values they pass in.
pub trait Trajectory: Sized {
    /// Constructs the trajectory from its duration and net displacement.
    fn with_duration(total_time: Time, total_distance: Length) -> Self;

    fn total_time(&self) -> Time;

    fn total_distance(&self) -> Length;
}

/// Closed-form evaluation of the progress of a transport.
///
/// `Extra` lists the evaluation-time parameters a formula needs beyond the
/// elapsed time: none for the classical trajectories, the trap angular
/// frequency for [`LewisRiesenfeld`] ones. Supporting a new combination of
/// wrapper and classical base is one more impl of this trait.
pub trait Fractional<Extra = ()>: Trajectory {
    /// Dimensionless progress at `elapsed`: 0 at the start of the
    /// transport and 1 at `total_time`.
    ///
    /// The result is not clamped; an `elapsed` outside `[0, total_time]`
    /// extrapolates the formula and may fall outside `[0, 1]`.
    fn fractional(&self, elapsed: Time, extra: Extra) -> Ratio;

    /// Absolute position at `elapsed` of a transport starting at `start`.
    fn position(&self, elapsed: Time, start: Length, extra: Extra) -> Length {
        start + self.total_distance() * self.fractional(elapsed, extra)
    }
}
