//! The physics engine: world time, environment, scenery and the integrator.

use genesis_types::{EnvironmentState, ForceBreakdown, ObjectKind, SkyColor, SunPosition};
use tracing::debug;

use crate::body::Body;
use crate::config::PhysicsConfig;
use crate::environment::{self, Environment};
use crate::error::PhysicsError;
use crate::objects::{self, WorldObject};
use crate::particles::{Decorations, Leaf, Particle};

/// Horizontal band around a tree within which its canopy shades the body.
const SHADE_LEFT: f64 = 50.0;
const SHADE_RIGHT: f64 = 80.0;

/// Temperature lost per unit of altitude above the floor.
const LAPSE_RATE: f64 = 0.01;

/// Extra chill when standing in low light.
const SHADE_CHILL: f64 = 5.0;

/// Raw sensor readings at the body's position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensoryData {
    /// Local light after shade.
    pub light: f64,
    /// Local temperature after altitude and shade.
    pub temperature: f64,
    /// Wind speed.
    pub wind_speed: f64,
    /// Wind direction offset.
    pub wind_direction: f64,
    /// Weight borne by the floor, 0 when airborne.
    pub pressure: f64,
    /// Height of the body's centre above the floor.
    pub altitude: f64,
    /// Fraction of the current day elapsed.
    pub time_of_day: f64,
}

/// Owns world time, environmental state, static objects and decorations.
#[derive(Debug, Clone)]
pub struct PhysicsEngine {
    config: PhysicsConfig,
    time: f64,
    environment: Environment,
    objects: Vec<WorldObject>,
    decorations: Decorations,
}

impl PhysicsEngine {
    /// Build an engine at time zero with the default scenery.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidConfig`] if the configuration fails
    /// validation.
    pub fn new(config: PhysicsConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        let objects = objects::default_objects(config.floor_y);
        let decorations =
            Decorations::new(config.leaf_count, config.world_width, config.decoration_seed);
        let environment = Environment::at(0.0, config.day_length);
        debug!(
            objects = objects.len(),
            leaves = config.leaf_count,
            seed = config.decoration_seed,
            "physics engine initialized"
        );
        Ok(Self {
            config,
            time: 0.0,
            environment,
            objects,
            decorations,
        })
    }

    /// The configuration this engine was built from.
    pub const fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// World time in seconds.
    pub const fn time(&self) -> f64 {
        self.time
    }

    /// Current global environment.
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Static objects.
    pub fn objects(&self) -> &[WorldObject] {
        &self.objects
    }

    /// Live dust particles.
    pub fn particles(&self) -> &[Particle] {
        self.decorations.particles()
    }

    /// Leaves.
    pub fn leaves(&self) -> &[Leaf] {
        self.decorations.leaves()
    }

    /// Fraction of the current day elapsed.
    pub fn day_progress(&self) -> f64 {
        environment::day_progress(self.time, self.config.day_length)
    }

    /// Vertical position at which a body of `radius` rests on the floor.
    pub fn ground_y(&self, radius: f64) -> f64 {
        self.config.floor_y - radius
    }

    /// Advance world time and everything derived from it.
    ///
    /// Non-positive or non-finite `dt` leaves the world untouched, so time
    /// only ever moves forward.
    pub fn update(&mut self, dt: f64) {
        if !(dt.is_finite() && dt > 0.0) {
            return;
        }
        self.time += dt;
        self.environment = Environment::at(self.time, self.config.day_length);
        self.decorations.update(
            dt,
            self.time,
            self.environment.wind_speed,
            self.config.gravity,
            self.config.floor_y,
        );
    }

    /// Integrate one step of motion for `body`.
    ///
    /// Stages run in a fixed order, each reading the previous stage's
    /// output: gravity, drag, wind, ground friction, position, floor
    /// collision, world edges, then static objects.
    pub fn apply_physics(&self, body: &mut Body, dt: f64) -> ForceBreakdown {
        let c = &self.config;
        let prev_vy = body.velocity.y;

        // 1. Gravity
        if !body.on_ground {
            body.velocity.y += c.gravity * dt * c.pixel_scale;
        }

        // 2. Quadratic drag along the direction of motion
        let speed = body.speed();
        let mut drag_force = 0.0;
        if speed > 0.0 {
            let cross = body.radius * c.cross_section_factor;
            drag_force = 0.5 * c.air_density * c.drag_coefficient * cross * cross * speed * speed;
            let drag_accel = drag_force / body.mass;
            body.velocity.x -= (body.velocity.x / speed) * drag_accel * dt * c.drag_scale;
            body.velocity.y -= (body.velocity.y / speed) * drag_accel * dt * c.drag_scale;
        }

        // 3. Wind
        if !body.on_ground {
            body.velocity.x += self.environment.wind_speed * c.wind_coupling * dt;
        }

        // 4. Ground friction
        if body.on_ground {
            body.velocity.x *= 1.0 - c.ground_friction * dt * c.friction_scale;
        }

        // 5. Position
        body.position.x += body.velocity.x * dt;
        body.position.y += body.velocity.y * dt;

        // 6. Floor
        let ground_y = self.ground_y(body.radius);
        if body.position.y >= ground_y {
            body.position.y = ground_y;
            if prev_vy > c.impact_threshold {
                body.impact_force = prev_vy * body.mass * c.impact_factor;
            }
            if body.velocity.y.abs() > c.settle_threshold {
                body.velocity.y = -body.velocity.y * c.restitution;
            } else {
                body.velocity.y = 0.0;
                body.on_ground = true;
            }
        } else {
            body.on_ground = false;
        }

        // 7. World edges
        if body.position.x < body.radius {
            body.position.x = body.radius;
            body.velocity.x = -body.velocity.x * c.edge_restitution;
        }
        let right = c.world_width - body.radius;
        if body.position.x > right {
            body.position.x = right;
            body.velocity.x = -body.velocity.x * c.edge_restitution;
        }

        // 8. Static objects
        for object in &self.objects {
            if object.overlaps(body) {
                object.resolve(body, c.restitution);
            }
        }

        ForceBreakdown {
            gravity: c.gravity,
            air_resistance: drag_force,
            wind_force: self.environment.wind_speed,
            friction: if body.on_ground { c.ground_friction } else { 0.0 },
            on_ground: body.on_ground,
            impact_force: body.impact_force,
        }
    }

    /// What a body feels at its current position. Has no side effects.
    pub fn sensory_data(&self, body: &Body) -> SensoryData {
        let mut light = self.environment.light_intensity;
        let p = body.position;
        for tree in self.objects.iter().filter(|o| o.kind == ObjectKind::Tree) {
            let in_band = p.x > tree.x - SHADE_LEFT && p.x < tree.x + SHADE_RIGHT;
            if in_band && p.y > tree.y - tree.height {
                light *= 0.5;
            }
        }

        let altitude = self.config.floor_y - p.y;
        let mut temperature = altitude.mul_add(-LAPSE_RATE, self.environment.temperature);
        if light < 0.5 {
            temperature -= SHADE_CHILL;
        }

        SensoryData {
            light,
            temperature,
            wind_speed: self.environment.wind_speed,
            wind_direction: self.environment.wind_direction,
            pressure: if body.on_ground {
                body.mass * self.config.gravity
            } else {
                0.0
            },
            altitude,
            time_of_day: self.day_progress(),
        }
    }

    /// Current sky colour.
    pub fn sky_color(&self) -> SkyColor {
        environment::sky_color(self.day_progress())
    }

    /// Current sun position.
    pub fn sun_position(&self) -> SunPosition {
        environment::sun_position(self.day_progress(), self.config.world_width / 2.0)
    }

    /// Snapshot of the global environment.
    pub fn environment_state(&self) -> EnvironmentState {
        EnvironmentState {
            time: self.time,
            day_progress: self.day_progress(),
            light_intensity: self.environment.light_intensity,
            temperature: self.environment.temperature,
            wind_speed: self.environment.wind_speed,
            wind_direction: self.environment.wind_direction,
        }
    }
}
