//! Decorative dust particles and leaves.
//!
//! Neither is coupled to the body. Particle spawning is the only stochastic
//! step in the physics update, and it draws from a generator seeded at
//! construction so two engines built from the same seed evolve identically.

use std::f64::consts::TAU;

use genesis_types::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Wind speed above which dust starts blowing in.
const SPAWN_WIND_THRESHOLD: f64 = 3.0;

/// Chance per update of spawning a particle in strong enough wind.
const SPAWN_PROBABILITY: f64 = 0.1;

/// Seconds a particle lives.
const PARTICLE_LIFE: f64 = 5.0;

/// Particles past this x are culled.
const PARTICLE_CULL_X: f64 = 900.0;

/// Leaves leaving past either edge reappear on the other side.
const LEAF_WRAP_LEFT: f64 = -10.0;
const LEAF_WRAP_RIGHT: f64 = 850.0;

/// A wind-blown dust mote.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Current position.
    pub position: Vec2,
    /// Velocity in units per second.
    pub velocity: Vec2,
    /// Remaining lifetime in seconds.
    pub life: f64,
    /// Draw radius.
    pub size: f64,
}

/// A drifting leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    /// Current position.
    pub position: Vec2,
    /// Displacement per update.
    pub velocity: Vec2,
    /// Orientation in radians.
    pub rotation: f64,
    /// Draw size.
    pub size: f64,
}

/// Owner of all decorative entities and the generator that spawns them.
#[derive(Debug, Clone)]
pub struct Decorations {
    particles: Vec<Particle>,
    leaves: Vec<Leaf>,
    rng: StdRng,
}

impl Decorations {
    /// Scatter `leaf_count` leaves over the world using a generator seeded
    /// from `seed`.
    pub fn new(leaf_count: usize, world_width: f64, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let leaves = (0..leaf_count)
            .map(|_| Leaf {
                position: Vec2::new(
                    rng.random::<f64>() * world_width,
                    rng.random::<f64>() * 400.0,
                ),
                velocity: Vec2::default(),
                rotation: rng.random::<f64>() * TAU,
                size: rng.random::<f64>().mul_add(5.0, 3.0),
            })
            .collect();
        Self {
            particles: Vec::new(),
            leaves,
            rng,
        }
    }

    /// Live particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// All leaves.
    pub fn leaves(&self) -> &[Leaf] {
        &self.leaves
    }

    /// Advance particles and leaves by `dt` seconds.
    pub fn update(&mut self, dt: f64, time: f64, wind_speed: f64, gravity: f64, floor_y: f64) {
        self.update_particles(dt, wind_speed);
        self.update_leaves(dt, time, wind_speed, gravity, floor_y);
    }

    fn update_particles(&mut self, dt: f64, wind_speed: f64) {
        if wind_speed > SPAWN_WIND_THRESHOLD && self.rng.random_bool(SPAWN_PROBABILITY) {
            let particle = Particle {
                position: Vec2::new(0.0, self.rng.random::<f64>().mul_add(300.0, 100.0)),
                velocity: Vec2::new(wind_speed * 10.0, (self.rng.random::<f64>() - 0.5) * 2.0),
                life: PARTICLE_LIFE,
                size: self.rng.random::<f64>().mul_add(2.0, 1.0),
            };
            self.particles.push(particle);
        }

        self.particles.retain_mut(|p| {
            p.position.x += p.velocity.x * dt;
            p.position.y += p.velocity.y * dt;
            p.life -= dt;
            p.life > 0.0 && p.position.x < PARTICLE_CULL_X
        });
    }

    fn update_leaves(&mut self, dt: f64, time: f64, wind_speed: f64, gravity: f64, floor_y: f64) {
        for leaf in &mut self.leaves {
            leaf.velocity.x += wind_speed * 0.5 * dt;
            leaf.velocity.y += gravity * 0.1 * dt;

            leaf.velocity.x *= 0.99;
            leaf.velocity.y *= 0.99;

            // Sway.
            leaf.velocity.x += (3.0 * time + 0.1 * leaf.position.x).sin() * 0.5 * dt;

            // Leaves step by their velocity once per update, not per second.
            leaf.position.x += leaf.velocity.x;
            leaf.position.y += leaf.velocity.y;
            leaf.rotation += leaf.velocity.x * 0.1 * dt;

            if leaf.position.y > floor_y {
                leaf.position.y = floor_y;
                leaf.velocity.y = -leaf.velocity.y * 0.3;
            }

            if leaf.position.x > LEAF_WRAP_RIGHT {
                leaf.position.x = LEAF_WRAP_LEFT;
            }
            if leaf.position.x < LEAF_WRAP_LEFT {
                leaf.position.x = LEAF_WRAP_RIGHT;
            }
        }
    }
}
