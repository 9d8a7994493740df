//! Floating 3D shapes for the blurred-geometry page.

use std::f32::consts::TAU;

use glam::{Mat4, Vec3};

use crate::driver::Effect;
use crate::error::FrameError;
use crate::input::{EventKind, InputEvent, Viewport};
use crate::random::RandomSource;
use crate::resource::{MeshSet, RenderBackend};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeSpec {
    /// Diameter in CSS pixels at the reference layout.
    pub size: f32,
    /// `0xRRGGBB`.
    pub color: u32,
    /// Anchor as percentages of the viewport.
    pub anchor: (f32, f32),
    /// Animation delay in seconds; becomes a phase offset.
    pub delay: f32,
}

impl ShapeSpec {
    pub fn rgb(&self) -> [f32; 3] {
        let channel = |shift: u32| ((self.color >> shift) & 0xff) as f32 / 255.0;
        [channel(16), channel(8), channel(0)]
    }
}

/// Static stand-in when no WebGL2 context can be had: the shape colors as
/// one diagonal gradient, blurred like the live scene.
pub fn fallback_css(specs: &[ShapeSpec]) -> String {
    let stops: Vec<String> = specs
        .iter()
        .map(|spec| format!("#{:06x}", spec.color))
        .collect();
    match stops.len() {
        0 => "transparent".to_string(),
        1 => stops[0].clone(),
        _ => format!("linear-gradient(135deg, {})", stops.join(", ")),
    }
}

#[rustfmt::skip]
pub const SHAPES: [ShapeSpec; 5] = [
    ShapeSpec { size: 200.0, color: 0xff6b6b, anchor: (10.0, 10.0), delay: 0.0 },
    ShapeSpec { size: 180.0, color: 0x4ecdc4, anchor: (70.0, 20.0), delay: 2.0 },
    ShapeSpec { size: 160.0, color: 0x45b7d1, anchor: (20.0, 70.0), delay: 4.0 },
    ShapeSpec { size: 220.0, color: 0x667eea, anchor: (50.0, 50.0), delay: 6.0 },
    ShapeSpec { size: 140.0, color: 0xffeaa7, anchor: (80.0, 80.0), delay: 8.0 },
];

// World-space box the percentage anchors map into.
const LAYOUT_WIDTH: f32 = 12.0;
const LAYOUT_HEIGHT: f32 = 9.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
    pub eye: Vec3,
    pub aspect: f32,
}

impl Camera {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            fov_y_deg: 75.0,
            near: 0.1,
            far: 100.0,
            eye: Vec3::new(0.0, 0.0, 10.0),
            aspect: viewport.aspect(),
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.aspect = viewport.aspect();
    }

    pub fn view_projection(&self) -> Mat4 {
        let projection =
            Mat4::perspective_rh_gl(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far);
        projection * Mat4::look_at_rh(self.eye, Vec3::ZERO, Vec3::Y)
    }
}

/// Per-shape motion parameters and current pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeMotion {
    pub base: Vec3,
    pub phase: f32,
    /// Angular frequencies of the x and y oscillation.
    pub frequency: (f32, f32),
    pub amplitude: (f32, f32),
    /// Radians added to both rotation axes every tick.
    pub spin: f32,
    pub position: Vec3,
    pub rotation: (f32, f32),
    pub radius: f32,
}

impl ShapeMotion {
    pub fn new(index: usize, spec: &ShapeSpec, rng: &mut impl RandomSource) -> Self {
        let i = index as f32;
        let jitter_x = (rng.next_unit() as f32 - 0.5) * 2.0;
        let jitter_y = (rng.next_unit() as f32 - 0.5) * 2.0;
        let base = Vec3::new(
            (spec.anchor.0 / 100.0 - 0.5) * LAYOUT_WIDTH + jitter_x,
            (0.5 - spec.anchor.1 / 100.0) * LAYOUT_HEIGHT + jitter_y,
            -i * 0.5,
        );
        Self {
            base,
            phase: spec.delay + rng.next_unit() as f32 * TAU,
            frequency: (0.35 + 0.05 * i, 0.25 + 0.04 * i),
            amplitude: (1.5, 1.2),
            spin: 0.004 + 0.002 * i,
            position: base,
            rotation: (0.0, 0.0),
            radius: spec.size / 100.0,
        }
    }

    /// Repositions for `time` and advances rotation by one tick.
    pub fn advance(&mut self, time: f32) {
        self.position.x =
            self.base.x + (time * self.frequency.0 + self.phase).sin() * self.amplitude.0;
        self.position.y =
            self.base.y + (time * self.frequency.1 + self.phase).cos() * self.amplitude.1;
        self.rotation.0 += self.spin;
        self.rotation.1 += self.spin;
    }

    pub fn model(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_x(self.rotation.0)
            * Mat4::from_rotation_y(self.rotation.1)
    }
}

pub struct ShapeScene<B: RenderBackend> {
    meshes: MeshSet<B>,
    shapes: Vec<ShapeMotion>,
    camera: Camera,
}

impl<B: RenderBackend> ShapeScene<B> {
    /// Creates one mesh per spec on `backend`. On failure every resource
    /// created so far, the context included, is released.
    pub fn new(
        backend: B,
        specs: &[ShapeSpec],
        viewport: Viewport,
        rng: &mut impl RandomSource,
    ) -> Result<Self, FrameError> {
        let mut meshes = MeshSet::new(backend);
        meshes.backend_mut().resize(viewport);

        let mut shapes = Vec::with_capacity(specs.len());
        for (i, spec) in specs.iter().enumerate() {
            let motion = ShapeMotion::new(i, spec, rng);
            if let Err(err) = meshes.add(motion.radius, spec.rgb()) {
                meshes.dispose();
                return Err(err);
            }
            shapes.push(motion);
        }

        Ok(Self {
            meshes,
            shapes,
            camera: Camera::new(viewport),
        })
    }

    pub fn advance(&mut self, time: f64) {
        for shape in &mut self.shapes {
            shape.advance(time as f32);
        }
    }

    pub fn render(&mut self) {
        let view_projection = self.camera.view_projection();
        let transforms: Vec<(Mat4, Mat4)> = self
            .shapes
            .iter()
            .map(|shape| {
                let model = shape.model();
                (view_projection * model, model)
            })
            .collect();
        self.meshes.draw_all(&transforms);
    }

    /// Updates projection and renderer size immediately.
    pub fn resize(&mut self, viewport: Viewport) {
        if self.meshes.is_disposed() {
            return;
        }
        self.camera.set_viewport(viewport);
        self.meshes.backend_mut().resize(viewport);
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn shapes(&self) -> &[ShapeMotion] {
        &self.shapes
    }

    pub fn meshes(&self) -> &MeshSet<B> {
        &self.meshes
    }

    pub fn dispose(&mut self) {
        self.meshes.dispose();
    }
}

impl<B: RenderBackend> Effect for ShapeScene<B> {
    fn frame(&mut self, elapsed: f64) {
        self.advance(elapsed);
        self.render();
    }

    fn listens(&self) -> &'static [EventKind] {
        &[EventKind::Resize]
    }

    fn input(&mut self, event: &InputEvent) {
        if let InputEvent::Resize(viewport) = event {
            self.resize(*viewport);
        }
    }

    fn teardown(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::XorShift;

    #[test]
    fn fallback_lists_shape_colors_in_order() {
        assert_eq!(
            fallback_css(&SHAPES[..2]),
            "linear-gradient(135deg, #ff6b6b, #4ecdc4)"
        );
        assert_eq!(fallback_css(&SHAPES[4..]), "#ffeaa7");
    }

    #[test]
    fn shape_colors_decode_from_hex() {
        assert_eq!(SHAPES[0].rgb(), [1.0, 107.0 / 255.0, 107.0 / 255.0]);
    }

    #[test]
    fn camera_resize_is_idempotent() {
        let mut once = Camera::new(Viewport::new(1024, 768));
        let mut twice = once;
        once.set_viewport(Viewport::new(800, 600));
        twice.set_viewport(Viewport::new(800, 600));
        twice.set_viewport(Viewport::new(800, 600));
        assert_eq!(once, twice);
        assert_eq!(once.view_projection(), twice.view_projection());
    }

    #[test]
    fn motion_follows_sin_cos_around_base() {
        let mut rng = XorShift::seeded(7);
        let mut shape = ShapeMotion::new(0, &SHAPES[0], &mut rng);
        shape.advance(0.0);
        assert!((shape.position.x - (shape.base.x + shape.phase.sin() * 1.5)).abs() < 1e-5);
        assert!((shape.position.y - (shape.base.y + shape.phase.cos() * 1.2)).abs() < 1e-5);
    }

    #[test]
    fn rotation_grows_every_tick() {
        let mut rng = XorShift::seeded(3);
        let mut shape = ShapeMotion::new(2, &SHAPES[2], &mut rng);
        let mut last = shape.rotation.0;
        for _ in 0..100 {
            shape.advance(1.0);
            assert!(shape.rotation.0 > last);
            last = shape.rotation.0;
        }
        assert!((last - 100.0 * shape.spin).abs() < 1e-4);
    }

    #[test]
    fn placement_varies_with_the_random_source() {
        let a = ShapeMotion::new(1, &SHAPES[1], &mut XorShift::seeded(1));
        let b = ShapeMotion::new(1, &SHAPES[1], &mut XorShift::seeded(2));
        assert_ne!(a.base, b.base);
        let again = ShapeMotion::new(1, &SHAPES[1], &mut XorShift::seeded(1));
        assert_eq!(a, again);
    }
}
