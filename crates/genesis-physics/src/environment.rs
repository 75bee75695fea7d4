//! Environmental cycles for the Genesis world.
//!
//! Everything here is a pure function of world time. The engine stores the
//! latest values for convenience, but re-deriving them from the same time
//! always gives the same answer.
//!
//! # Day cycle
//!
//! Day progress `p = (time mod day_length) / day_length` drives a
//! four-segment piecewise-linear schedule:
//!
//! | segment      | light      | temperature         |
//! |--------------|------------|---------------------|
//! | `[0, .25)`   | 0.1 -> 0.4 | `10 + 20p`          |
//! | `[.25, .5)`  | 0.4 -> 1.0 | `15 + 40(p - .25)`  |
//! | `[.5, .75)`  | 1.0 -> 0.6 | `25 - 20(p - .5)`   |
//! | `[.75, 1)`   | 0.6 -> 0.1 | `20 - 40(p - .75)`  |
//!
//! # Wind
//!
//! Two incommensurate sines give natural-looking variability without an RNG.

use std::f64::consts::PI;

use genesis_types::{SkyColor, SunPosition};

const NIGHT_SKY: SkyColor = SkyColor {
    r: 10.0,
    g: 10.0,
    b: 40.0,
};

const DAY_SKY: SkyColor = SkyColor {
    r: 135.0,
    g: 206.0,
    b: 235.0,
};

/// Radius of the sun's arc in world units.
const SUN_ARC_RADIUS: f64 = 350.0;

/// Height of the sun's horizon line.
const SUN_HORIZON_Y: f64 = 400.0;

/// Global environmental readings at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    /// Light intensity before shade, in `[0.1, 1.0]`.
    pub light_intensity: f64,
    /// Temperature in degrees Celsius before local adjustments.
    pub temperature: f64,
    /// Wind speed.
    pub wind_speed: f64,
    /// Wind direction offset; positive blows right.
    pub wind_direction: f64,
}

impl Environment {
    /// Derive the environment at `time` for a day of `day_length` seconds.
    pub fn at(time: f64, day_length: f64) -> Self {
        let progress = day_progress(time, day_length);
        let (wind_speed, wind_direction) = wind(time);
        Self {
            light_intensity: light_intensity(progress),
            temperature: temperature(progress),
            wind_speed,
            wind_direction,
        }
    }
}

/// Fraction of the current day elapsed, in `[0, 1)`.
pub fn day_progress(time: f64, day_length: f64) -> f64 {
    time.rem_euclid(day_length) / day_length
}

/// Light intensity for a day progress.
pub fn light_intensity(progress: f64) -> f64 {
    if progress < 0.25 {
        (progress / 0.25).mul_add(0.3, 0.1)
    } else if progress < 0.5 {
        ((progress - 0.25) / 0.25).mul_add(0.6, 0.4)
    } else if progress < 0.75 {
        ((progress - 0.5) / 0.25).mul_add(-0.4, 1.0)
    } else {
        ((progress - 0.75) / 0.25).mul_add(-0.5, 0.6)
    }
}

/// Temperature in degrees Celsius for a day progress.
pub fn temperature(progress: f64) -> f64 {
    if progress < 0.25 {
        progress.mul_add(20.0, 10.0)
    } else if progress < 0.5 {
        (progress - 0.25).mul_add(40.0, 15.0)
    } else if progress < 0.75 {
        (progress - 0.5).mul_add(-20.0, 25.0)
    } else {
        (progress - 0.75).mul_add(-40.0, 20.0)
    }
}

/// Wind `(speed, direction)` at world time `time`.
pub fn wind(time: f64) -> (f64, f64) {
    let change = (0.23 * time).sin().mul_add(0.5, (0.1 * time).sin()) * 0.5;
    let speed = change.mul_add(8.0, 2.0);
    let direction = (0.05 * time).sin() * 0.3;
    (speed, direction)
}

/// Sky colour for a day progress.
pub fn sky_color(progress: f64) -> SkyColor {
    if !(0.2..=0.85).contains(&progress) {
        NIGHT_SKY
    } else if progress < 0.3 {
        let t = (progress - 0.2) / 0.1;
        SkyColor {
            r: t.mul_add(245.0, 10.0),
            g: t.mul_add(150.0, 10.0),
            b: t.mul_add(100.0, 40.0),
        }
    } else if progress < 0.7 {
        DAY_SKY
    } else {
        let t = (progress - 0.7) / 0.15;
        SkyColor {
            r: t.mul_add(-100.0, 255.0),
            g: t.mul_add(-80.0, 160.0),
            b: t.mul_add(-60.0, 140.0),
        }
    }
}

/// Sun position on its arc above a world centred on `centre_x`.
pub fn sun_position(progress: f64, centre_x: f64) -> SunPosition {
    let angle = (progress - 0.25) * PI;
    SunPosition {
        x: angle.cos().mul_add(SUN_ARC_RADIUS, centre_x),
        y: angle.sin().mul_add(-SUN_ARC_RADIUS, SUN_HORIZON_Y),
        visible: progress > 0.2 && progress < 0.8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn midnight_is_night_baseline() {
        let env = Environment::at(0.0, 120.0);
        assert!(close(env.light_intensity, 0.1));
        assert!(close(env.temperature, 10.0));
    }

    #[test]
    fn midday_is_full_light() {
        let env = Environment::at(60.0, 120.0);
        assert!(close(env.light_intensity, 1.0));
        assert!(close(env.temperature, 25.0));
    }

    #[test]
    fn segment_endpoints_meet() {
        assert!(close(light_intensity(0.25), 0.4));
        assert!(close(light_intensity(0.75), 0.6));
        assert!((light_intensity(0.999_999) - 0.1).abs() < 1e-5);
    }

    #[test]
    fn schedule_repeats_every_day() {
        for step in 0..120 {
            let t = f64::from(step);
            let today = Environment::at(t, 120.0);
            let tomorrow = Environment::at(t + 120.0, 120.0);
            assert!(close(today.light_intensity, tomorrow.light_intensity));
            assert!(close(today.temperature, tomorrow.temperature));
        }
    }

    #[test]
    fn wind_starts_at_baseline() {
        let (speed, direction) = wind(0.0);
        assert!(close(speed, 2.0));
        assert!(close(direction, 0.0));
    }

    #[test]
    fn wind_stays_in_range() {
        for step in 0..10_000 {
            let (speed, _) = wind(f64::from(step) * 0.1);
            assert!((-4.0..=8.0).contains(&speed));
        }
    }

    #[test]
    fn sky_is_night_before_dawn_and_day_at_noon() {
        assert_eq!(sky_color(0.1), NIGHT_SKY);
        assert_eq!(sky_color(0.9), NIGHT_SKY);
        assert_eq!(sky_color(0.5), DAY_SKY);
    }

    #[test]
    fn sky_is_deterministic() {
        for step in 0..100 {
            let p = f64::from(step) / 100.0;
            assert_eq!(sky_color(p), sky_color(p));
            assert_eq!(sun_position(p, 400.0), sun_position(p, 400.0));
        }
    }

    #[test]
    fn sun_peaks_three_quarters_through_the_day() {
        let sun = sun_position(0.75, 400.0);
        assert!(close(sun.x, 400.0));
        assert!(close(sun.y, 50.0));
        assert!(sun_position(0.5, 400.0).visible);
        assert!(!sun_position(0.1, 400.0).visible);
        assert!(!sun_position(0.8, 400.0).visible);
    }
}
