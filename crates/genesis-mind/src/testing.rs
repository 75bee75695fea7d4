//! Percept fixtures for unit tests.

use genesis_types::{
    BodySense, DayPeriod, HorizontalDirection, Percept, SkyColor, TemperatureFeeling,
    TemperatureSense, TimePerception, TouchSense, Vec2, VisionSense, WindFeeling, WindSense,
};

/// A calm, dark, airborne percept at time `t`.
pub fn percept(t: f64) -> Percept {
    Percept {
        timestamp: t,
        body: BodySense {
            position: Vec2::new(400.0, 300.0),
            velocity: Vec2::default(),
            speed: 0.0,
            on_ground: false,
            energy: 100.0,
            pain: 0.0,
        },
        touch: TouchSense {
            ground_contact: false,
            pressure: 0.0,
            impact_force: 0.0,
            wind_on_skin: 0.3,
        },
        vision: VisionSense {
            brightness: 0.1,
            nearby_objects: Vec::new(),
            distance_to_ground: 130.0,
            can_see_sun: false,
            sky_color: SkyColor {
                r: 10.0,
                g: 10.0,
                b: 40.0,
            },
        },
        temperature: TemperatureSense {
            ambient: 18.0,
            feeling: TemperatureFeeling::Pleasant,
        },
        wind: WindSense {
            speed: 1.0,
            direction: HorizontalDirection::Right,
            feeling: WindFeeling::LightBreeze,
        },
        time_perception: TimePerception {
            day_progress: 0.0,
            is_day: false,
            period: DayPeriod::Night,
        },
    }
}

/// The same percept, resting on the ground.
pub fn grounded(t: f64) -> Percept {
    let mut p = percept(t);
    p.body.on_ground = true;
    p.touch.ground_contact = true;
    p.touch.pressure = 686.7;
    p.body.position.y = 430.0;
    p.vision.distance_to_ground = 0.0;
    p
}
