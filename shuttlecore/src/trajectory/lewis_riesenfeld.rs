use core::fmt;

use uom::si::f64::{AngularVelocity, Length, Ratio, Time};
use uom::si::ratio::ratio;

use super::{Fractional, MinimumJerk, Trajectory};

/// A Lewis-Riesenfeld invariant-based transport layered on a classical
/// trajectory.
///
/// Displacing a harmonic trap of angular frequency ω along the corrected
/// path carries the particle along the classical one, with the trap at
/// rest relative to the particle at both endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LewisRiesenfeld<T> {
    total_time: Time,
    total_distance: Length,
    classical: T,
}

impl<T> LewisRiesenfeld<T>
where
    T: Trajectory,
{
    /// Wraps an existing classical trajectory.
    ///
    /// The classical trajectory must share the wrapper's duration and net
    /// displacement exactly. The check catches mismatched construction
    /// arguments, not floating-point drift, so no tolerance is applied.
    pub fn new(
        total_time: Time,
        total_distance: Length,
        classical: T,
    ) -> Result<Self, ClassicalMismatchError> {
        if classical.total_time() != total_time {
            return Err(ClassicalMismatchError {
                kind: ClassicalMismatchKind::TotalTime {
                    expected: total_time,
                    found: classical.total_time(),
                },
            });
        }
        if classical.total_distance() != total_distance {
            return Err(ClassicalMismatchError {
                kind: ClassicalMismatchKind::TotalDistance {
                    expected: total_distance,
                    found: classical.total_distance(),
                },
            });
        }
        Ok(Self {
            total_time,
            total_distance,
            classical,
        })
    }

    pub fn classical(&self) -> &T {
        &self.classical
    }
}

impl<T> Trajectory for LewisRiesenfeld<T>
where
    T: Trajectory,
{
    /// Derives the classical trajectory from the same duration and
    /// displacement, so the matching invariant holds by construction.
    fn with_duration(total_time: Time, total_distance: Length) -> Self {
        Self {
            total_time,
            total_distance,
            classical: T::with_duration(total_time, total_distance),
        }
    }

    fn total_time(&self) -> Time {
        self.total_time
    }

    fn total_distance(&self) -> Length {
        self.total_distance
    }
}

impl Fractional<AngularVelocity> for LewisRiesenfeld<MinimumJerk> {
    fn fractional(&self, elapsed: Time, frequency: AngularVelocity) -> Ratio {
        let s = (elapsed / self.total_time).get::<ratio>();
        // total_time * frequency is an angle; uom keeps angle kinds apart
        // from plain ratios, so work on the raw values here
        let phase = self.total_time.value * frequency.value;
        let correction = (60.0 - 180.0 * s + 120.0 * s * s) * s / (phase * phase);
        self.classical.fractional(elapsed, ()) + Ratio::new::<ratio>(correction)
    }
}

/// Error on construction of [`LewisRiesenfeld`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassicalMismatchError {
    kind: ClassicalMismatchKind,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum ClassicalMismatchKind {
    TotalTime { expected: Time, found: Time },
    TotalDistance { expected: Length, found: Length },
}

impl fmt::Display for ClassicalMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ClassicalMismatchKind::TotalTime { expected, found } => write!(
                f,
                "total time of the classical trajectory must be {:?}, but is {:?}.",
                expected, found
            ),
            ClassicalMismatchKind::TotalDistance { expected, found } => write!(
                f,
                "total distance of the classical trajectory must be {:?}, but is {:?}.",
                expected, found
            ),
        }
    }
}
