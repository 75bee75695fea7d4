//! Turning physics state into a percept.
//!
//! [`Agent::sense`] queries the engine once, labels raw readings with
//! qualitative feelings, scans for nearby objects, archives the result in
//! the sensor history and consumes any pending impact so each landing is
//! reported exactly once.

use genesis_physics::{PhysicsEngine, WorldObject};
use genesis_types::{
    BodySense, DayPeriod, HorizontalDirection, Percept, RelativeHeight, TemperatureFeeling,
    TemperatureSense, TimePerception, TouchSense, Vec2, VisibleObject, VisionSense, WindFeeling,
    WindSense,
};

use crate::agent::Agent;

/// Brightness above which it counts as day.
const DAYLIGHT: f64 = 0.5;

impl Agent {
    /// Build this tick's percept from the engine and the body.
    pub fn sense(&mut self, physics: &PhysicsEngine) -> Percept {
        let data = physics.sensory_data(&self.body);
        let nearby_objects = scan_objects(
            physics.objects(),
            self.body.position,
            self.config.vision_radius,
        );
        let sun = physics.sun_position();
        let impact_force = self.body.take_impact();

        let percept = Percept {
            timestamp: physics.time(),
            body: BodySense {
                position: self.body.position,
                velocity: self.body.velocity,
                speed: self.body.speed(),
                on_ground: self.body.on_ground,
                energy: self.energy,
                pain: self.pain,
            },
            touch: TouchSense {
                ground_contact: self.body.on_ground,
                pressure: data.pressure,
                impact_force,
                wind_on_skin: data.wind_speed * self.config.wind_on_skin,
            },
            vision: VisionSense {
                brightness: data.light,
                nearby_objects,
                distance_to_ground: physics.ground_y(self.body.radius) - self.body.position.y,
                can_see_sun: sun.visible,
                sky_color: physics.sky_color(),
            },
            temperature: TemperatureSense {
                ambient: data.temperature,
                feeling: interpret_temperature(data.temperature),
            },
            wind: WindSense {
                speed: data.wind_speed,
                direction: if data.wind_direction > 0.0 {
                    HorizontalDirection::Right
                } else {
                    HorizontalDirection::Left
                },
                feeling: interpret_wind(data.wind_speed),
            },
            time_perception: TimePerception {
                day_progress: data.time_of_day,
                is_day: data.light > DAYLIGHT,
                period: day_period(data.time_of_day),
            },
        };

        self.history.push(percept.clone());
        percept
    }
}

/// Objects within `radius` of `eye`, described relative to it.
pub fn scan_objects(objects: &[WorldObject], eye: Vec2, radius: f64) -> Vec<VisibleObject> {
    objects
        .iter()
        .filter_map(|object| {
            let dx = object.x - eye.x;
            let dy = object.y - eye.y;
            let distance = dx.hypot(dy);
            (distance < radius).then(|| VisibleObject {
                kind: object.kind,
                distance,
                direction: if dx > 0.0 {
                    HorizontalDirection::Right
                } else {
                    HorizontalDirection::Left
                },
                relative_height: if dy < 0.0 {
                    RelativeHeight::Above
                } else {
                    RelativeHeight::Below
                },
                size: object.area(),
            })
        })
        .collect()
}

/// Label a temperature in degrees Celsius.
pub fn interpret_temperature(celsius: f64) -> TemperatureFeeling {
    if celsius < 5.0 {
        TemperatureFeeling::VeryCold
    } else if celsius < 15.0 {
        TemperatureFeeling::Cold
    } else if celsius < 22.0 {
        TemperatureFeeling::Pleasant
    } else if celsius < 30.0 {
        TemperatureFeeling::Warm
    } else {
        TemperatureFeeling::Hot
    }
}

/// Label a wind speed.
pub fn interpret_wind(speed: f64) -> WindFeeling {
    if speed < 1.0 {
        WindFeeling::Calm
    } else if speed < 3.0 {
        WindFeeling::LightBreeze
    } else if speed < 6.0 {
        WindFeeling::ModerateBreeze
    } else if speed < 10.0 {
        WindFeeling::StrongWind
    } else {
        WindFeeling::Gale
    }
}

/// Name the stretch of day for a day progress.
pub fn day_period(progress: f64) -> DayPeriod {
    if progress < 0.2 {
        DayPeriod::Night
    } else if progress < 0.3 {
        DayPeriod::Dawn
    } else if progress < 0.5 {
        DayPeriod::Morning
    } else if progress < 0.65 {
        DayPeriod::Midday
    } else if progress < 0.75 {
        DayPeriod::Afternoon
    } else if progress < 0.85 {
        DayPeriod::Dusk
    } else {
        DayPeriod::Night
    }
}
