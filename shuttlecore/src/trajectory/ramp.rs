use uom::si::f64::{Length, Ratio, Time};

use super::{Fractional, Trajectory};

/// A constant-velocity transport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearRamp {
    total_time: Time,
    total_distance: Length,
}

impl Trajectory for LinearRamp {
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

impl Fractional for LinearRamp {
    fn fractional(&self, elapsed: Time, _: ()) -> Ratio {
        elapsed / self.total_time
    }
}
