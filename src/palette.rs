//! CPU mirror of the noise-gradient fragment shader.
//!
//! The GPU evaluates the same formula per pixel; this copy backs the static
//! CSS fallback and keeps the math under test.

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

/// Cosine palette coefficients, `a + b * cos(2π (c t + d))`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
    pub d: Vec3,
}

pub const RAINBOW: Palette = Palette {
    a: Vec3::new(0.5, 0.5, 0.5),
    b: Vec3::new(0.5, 0.5, 0.5),
    c: Vec3::new(1.0, 1.0, 1.0),
    d: Vec3::new(0.0, 0.10, 0.20),
};

impl Palette {
    pub fn eval(&self, t: f32) -> Vec3 {
        let phase = (self.c * t + self.d) * TAU;
        self.a + self.b * Vec3::new(phase.x.cos(), phase.y.cos(), phase.z.cos())
    }
}

/// How the two reference points orbit over time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orbit {
    /// Frequencies of the y components of c1 and c2 against raw time.
    pub c1_y: f32,
    pub c2_y: f32,
}

/// Fragment-shader page: c1.y follows raw time, c2.y at 0.65×.
pub const FRAGMENT_ORBIT: Orbit = Orbit {
    c1_y: 1.0,
    c2_y: 0.65,
};

/// Vertex-deformation page: the same layout, slowed down.
pub const VERTEX_ORBIT: Orbit = Orbit {
    c1_y: 0.3,
    c2_y: 0.2,
};

impl Orbit {
    pub fn points(&self, time: f32) -> (Vec2, Vec2) {
        let slow = time * 0.2;
        let c1 = Vec2::new(slow.sin() * 0.5, (time * self.c1_y).cos() * 0.7);
        let c2 = Vec2::new((slow * 0.7).sin() * 0.9, (time * self.c2_y).cos() * 0.6);
        (c1, c2)
    }
}

/// Color of one pixel at `uv` for reference points `c1`, `c2`.
pub fn shade(uv: Vec2, time: f32, c1: Vec2, c2: Vec2) -> Vec3 {
    let slow = time * 0.2;
    let col1 = RAINBOW.eval(uv.distance(c1) + slow);
    let col2 = RAINBOW.eval(uv.distance(c2) + slow);
    (col1 + col2) / 2.0
}

/// `#rrggbb` for a color in 0..=1.
pub fn css_hex(color: Vec3) -> String {
    let c = (color.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
    format!("#{:02x}{:02x}{:02x}", c.x as u8, c.y as u8, c.z as u8)
}

/// Static stand-in for the shader: the gradient's diagonal at time zero.
pub fn fallback_css(orbit: &Orbit) -> String {
    let (c1, c2) = orbit.points(0.0);
    let stops: Vec<String> = (0..=4)
        .map(|i| {
            let s = i as f32 / 4.0;
            let color = shade(Vec2::splat(s), 0.0, c1, c2);
            format!("{} {}%", css_hex(color), i * 25)
        })
        .collect();
    format!("linear-gradient(135deg, {})", stops.join(", "))
}
