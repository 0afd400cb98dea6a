use uom::si::f64::{Length, Ratio, Time};
use uom::si::ratio::ratio;

use super::{Fractional, Trajectory};

/// A minimum-jerk transport.
///
/// The progress follows the quintic `10s³ − 15s⁴ + 6s⁵`, which minimizes
/// the time integral of the squared jerk and has zero velocity and
/// acceleration at both endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinimumJerk {
    total_time: Time,
    total_distance: Length,
}

impl Trajectory for MinimumJerk {
    fn with_duration(total_time: Time, total_distance: Length) -> Self {
        Self {
            total_time,
            total_distance,
        }
    }

    fn total_time(&self) -> Time {
        self.total_time
    }

    fn total_distance(&self) -> Length {
        self.total_distance
    }
}

impl Fractional for MinimumJerk {
    fn fractional(&self, elapsed: Time, _: ()) -> Ratio {
        let s = (elapsed / self.total_time).get::<ratio>();
        Ratio::new::<ratio>((10.0 - 15.0 * s + 6.0 * s * s) * s * s * s)
    }
}
