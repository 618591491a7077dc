//! Particle chaser effect
//!
//! Particles run along the edges of the frame and follow the adjacency graph
//! at every vertex, leaving fading trails behind them. Each particle moves on
//! its own schedule.

use embassy_time::{Duration, Instant};
use heapless::Vec;

use super::{Effect, Tick};
use crate::{
    FrameBuffer,
    color::{Rgb, add_colors, fade_to_black, rgb_from_u32, scale_color},
    graph::{Direction, crossing_direction, entry_led, junction},
    noise::NoiseSource,
    random::RandomSource,
    topology::{LED_COUNT, LEDS_PER_EDGE, edge, offset},
};

/// Maximum number of particles the chaser can hold
pub const MAX_PARTICLES: usize = 8;

/// Per-tick retention of the whole frame while the chaser runs
pub const CHASER_RETAIN: u8 = 224;

/// Initial parameters of one particle
#[derive(Debug, Clone, Copy)]
pub struct ParticleSeed {
    pub colour: Rgb,
    /// Time between two moves
    pub speed: Duration,
    /// Extra retention applied to the LED a particle leaves
    pub decay: u8,
    pub start_led: usize,
    pub direction: Direction,
}

/// Particle set of the chaser
#[derive(Debug, Clone)]
pub struct ChaserConfig {
    pub particles: Vec<ParticleSeed, MAX_PARTICLES>,
}

const fn seed(
    colour: u32,
    speed_ms: u64,
    decay: u8,
    start_led: usize,
    direction: Direction,
) -> ParticleSeed {
    ParticleSeed {
        colour: rgb_from_u32(colour),
        speed: Duration::from_millis(speed_ms),
        decay,
        start_led,
        direction,
    }
}

#[allow(clippy::unreadable_literal)]
const DEFAULT_PARTICLES: [ParticleSeed; 6] = [
    seed(0xFF2000, 40, 160, 0, Direction::Forward),
    seed(0x00FF40, 55, 192, 45, Direction::Backward),
    seed(0x2040FF, 70, 200, 60, Direction::Forward),
    seed(0xFF00C0, 50, 176, 95, Direction::Backward),
    seed(0xFFC000, 85, 220, 120, Direction::Forward),
    seed(0x00C0FF, 65, 184, 160, Direction::Backward),
];

impl Default for ChaserConfig {
    fn default() -> Self {
        let mut particles = Vec::new();
        for particle in DEFAULT_PARTICLES {
            let _ = particles.push(particle);
        }
        Self { particles }
    }
}

/// A single chaser particle
#[derive(Debug, Clone)]
pub struct Particle {
    colour: Rgb,
    speed: Duration,
    last_move: Instant,
    decay: u8,
    led: usize,
    direction: Direction,
}

impl Particle {
    /// Create a particle, a start position outside the strip is wrapped onto it
    pub const fn new(seed: &ParticleSeed) -> Self {
        Self {
            colour: seed.colour,
            speed: seed.speed,
            last_move: Instant::from_millis(0),
            decay: seed.decay,
            led: seed.start_led % LED_COUNT,
            direction: seed.direction,
        }
    }

    pub const fn led(&self) -> usize {
        self.led
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub const fn colour(&self) -> Rgb {
        self.colour
    }

    /// Move one LED if the particle's interval has elapsed
    ///
    /// Returns the new position when the particle moved.
    pub fn advance<R: RandomSource>(&mut self, now: Instant, random: &mut R) -> Option<usize> {
        let elapsed = now.as_millis().saturating_sub(self.last_move.as_millis());
        if elapsed <= self.speed.as_millis() {
            return None;
        }
        self.last_move = now;
        self.led = self.step(random);
        Some(self.led)
    }

    /// Next LED along the travel direction, crossing a vertex if needed
    fn step<R: RandomSource>(&mut self, random: &mut R) -> usize {
        let position = offset(self.led);
        match self.direction {
            Direction::Forward if position + 1 < LEDS_PER_EDGE => return self.led + 1,
            Direction::Backward if position > 0 => return self.led - 1,
            _ => {}
        }

        let from = edge(self.led);
        let ahead = junction(from, self.direction);
        let choice = if ahead.arity() > 1 {
            random.below(ahead.arity())
        } else {
            0
        };
        let to = ahead.edge(choice);

        self.direction = crossing_direction(from, to, self.direction);
        entry_led(to, self.direction)
    }
}

/// Graph-walking particle chaser
#[derive(Debug, Clone)]
pub struct ChaserEffect {
    particles: Vec<Particle, MAX_PARTICLES>,
}

impl ChaserEffect {
    pub fn new(config: &ChaserConfig) -> Self {
        let mut particles = Vec::new();
        for seed in &config.particles {
            let _ = particles.push(Particle::new(seed));
        }
        Self { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

impl Effect for ChaserEffect {
    fn render<R: RandomSource, N: NoiseSource>(
        &mut self,
        tick: &mut Tick<'_, R, N>,
        leds: &mut FrameBuffer,
    ) {
        fade_to_black(leds, CHASER_RETAIN);

        for particle in &mut self.particles {
            let from = particle.led;
            let Some(to) = particle.advance(tick.now, &mut *tick.random) else {
                continue;
            };
            leds[from] = scale_color(leds[from], particle.decay);
            leds[to] = add_colors(leds[to], particle.colour);
        }
    }
}
