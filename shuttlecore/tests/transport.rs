use approx::{assert_abs_diff_eq, assert_relative_eq};
use shuttlecore::trajectory::{Fractional, LewisRiesenfeld, MinimumJerk, Trajectory};
use uom::si::f64::{AngularVelocity, Length, Time};
use uom::si::{
    angular_velocity::radian_per_second, length::meter, length::micrometer, ratio::ratio,
    time::second,
};

#[test]
fn test_transport() {
    // a 120 µm shuttle over 350 ms in a 2π × 50 Hz trap, sampled at 1 kHz
    let total_time = Time::new::<second>(0.35);
    let total_distance = Length::new::<micrometer>(120.0);
    let frequency = AngularVelocity::new::<radian_per_second>(314.159);
    let start = Length::new::<micrometer>(-60.0);
    let steps = 350;
    let period = total_time / steps as f64;

    let trajectory = LewisRiesenfeld::<MinimumJerk>::with_duration(total_time, total_distance);

    assert_eq!(
        trajectory.position(Time::new::<second>(0.0), start, frequency),
        start
    );
    assert_relative_eq!(
        trajectory
            .position(total_time, start, frequency)
            .get::<micrometer>(),
        60.0,
        epsilon = 1e-9
    );

    // the classical minimum-jerk velocity peaks at 15/8 × d/t, which
    // bounds the per-period displacement
    let step_bound = 15.0 / 8.0 * total_distance * (period / total_time).get::<ratio>();
    // the invariant correction stays below max|60s − 180s² + 120s³|/(tω)²,
    // and the cubic peaks at about 5.8 on [0, 1]
    let phase = (total_time.value * frequency.value).powi(2);
    let correction_bound = 5.8 * total_distance.abs() / phase;

    let mut before = trajectory
        .classical()
        .position(Time::new::<second>(0.0), start, ());
    for step in 1..=steps {
        let elapsed = period * step as f64;
        let classical = trajectory.classical().position(elapsed, start, ());
        let corrected = trajectory.position(elapsed, start, frequency);

        assert!(classical - before >= Length::new::<micrometer>(-1e-9));
        assert!(classical - before <= step_bound + Length::new::<micrometer>(1e-9));
        assert!((corrected - classical).abs() <= correction_bound);

        before = classical;
    }

    assert_abs_diff_eq!(
        before.get::<meter>(),
        (start + total_distance).get::<meter>(),
        epsilon = 1e-12
    );
}
