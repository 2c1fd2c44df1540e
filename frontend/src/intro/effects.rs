//! Per-frame state for the intro overlay effects.
//!
//! Nothing in here touches the DOM. The overlay component reads the
//! geometry produced here and paints it onto its canvas.

use std::f64::consts::PI;

use rand::Rng;
use thiserror::Error;

pub const PARTICLE_COUNT: usize = 80;
pub const FLARE_RADIUS: f64 = 150.0;
pub const RAY_LENGTH: f64 = 300.0;
pub const FLARE_SPIN: f64 = 0.02;
pub const RAY_COLORS: [&str; 3] = [
    "rgba(255, 100, 100, 0.3)",
    "rgba(100, 255, 100, 0.3)",
    "rgba(100, 100, 255, 0.3)",
];
pub const GRAIN_ALPHA: u8 = 24;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EffectError {
    #[error("raster buffer length {0} is not a whole number of RGBA pixels")]
    BufferLength(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub opacity: f64,
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(width: f64, height: f64, count: usize, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.gen::<f64>() * width,
                y: rng.gen::<f64>() * height,
                size: rng.gen::<f64>() * 2.0 + 0.5,
                speed_x: (rng.gen::<f64>() - 0.5) * 0.5,
                speed_y: (rng.gen::<f64>() - 0.5) * 0.5,
                opacity: rng.gen::<f64>() * 0.5 + 0.2,
            })
            .collect();

        Self { width, height, particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Moves every particle one frame, wrapping across the opposite edge.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.x += p.speed_x;
            p.y += p.speed_y;

            if p.x < 0.0 {
                p.x = self.width;
            } else if p.x > self.width {
                p.x = 0.0;
            }
            if p.y < 0.0 {
                p.y = self.height;
            } else if p.y > self.height {
                p.y = 0.0;
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub color: &'static str,
}

#[derive(Clone, Debug)]
pub struct LightFlare {
    pub x: f64,
    pub y: f64,
    angle: f64,
}

impl LightFlare {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            x: width * 0.3,
            y: height * 0.6,
            angle: 0.0,
        }
    }

    pub fn step(&mut self) {
        self.angle += FLARE_SPIN;
    }

    /// Two segments per color, pointing in opposite directions from the flare centre.
    pub fn rays(&self) -> Vec<Ray> {
        RAY_COLORS
            .iter()
            .enumerate()
            .flat_map(|(i, color)| {
                let angle = self.angle + (i as f64 * PI) / 3.0;
                let (dx, dy) = (angle.cos() * RAY_LENGTH, angle.sin() * RAY_LENGTH);
                [
                    Ray { from: (self.x, self.y), to: (self.x + dx, self.y + dy), color },
                    Ray { from: (self.x, self.y), to: (self.x - dx, self.y - dy), color },
                ]
            })
            .collect()
    }
}

/// Overwrites an RGBA raster with grey noise at a fixed alpha.
pub fn fill_grain<R: Rng + ?Sized>(buffer: &mut [u8], rng: &mut R, alpha: u8) -> Result<(), EffectError> {
    if buffer.len() % 4 != 0 {
        return Err(EffectError::BufferLength(buffer.len()));
    }
    for pixel in buffer.chunks_exact_mut(4) {
        let value: u8 = rng.gen();
        pixel[0] = value;
        pixel[1] = value;
        pixel[2] = value;
        pixel[3] = alpha;
    }
    Ok(())
}
