use glam::{Mat4, Vec3};

use crate::input::Viewport;

/// Camera used by both shader pages: 75° perspective, one unit back.
pub const PLANE_FOV_DEG: f32 = 75.0;
pub const PLANE_EYE: Vec3 = Vec3::new(0.0, 0.0, 1.0);
/// The 2×2 plane is drawn at twice its size so it overfills the frustum.
pub const PLANE_SCALE: Vec3 = Vec3::new(2.0, 2.0, 1.0);

/// GLSL identifiers a shader program exposes for the uniform set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniformNames {
    pub time: &'static str,
    pub resolution: &'static str,
    pub transform: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Vec2([f32; 2]),
    Mat4([f32; 16]),
}

/// Per-frame shader parameters.
///
/// `time` is rewritten every frame; `resolution` and `transform` only change
/// when the viewport does.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformSet {
    pub names: UniformNames,
    pub time: f32,
    pub resolution: [f32; 2],
    pub transform: Mat4,
}

impl UniformSet {
    pub fn new(names: UniformNames, viewport: Viewport) -> Self {
        let mut set = Self {
            names,
            time: 0.0,
            resolution: [1.0, 1.0],
            transform: Mat4::IDENTITY,
        };
        set.set_viewport(viewport);
        set
    }

    pub fn set_time(&mut self, elapsed: f64) {
        self.time = elapsed as f32;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.resolution = [viewport.width as f32, viewport.height as f32];
        self.transform = plane_transform(viewport);
    }

    pub fn entries(&self) -> [(&'static str, UniformValue); 3] {
        [
            (self.names.time, UniformValue::Float(self.time)),
            (self.names.resolution, UniformValue::Vec2(self.resolution)),
            (self.names.transform, UniformValue::Mat4(self.transform.to_cols_array())),
        ]
    }
}

/// Projection × view × model for the full-screen plane.
pub fn plane_transform(viewport: Viewport) -> Mat4 {
    let projection =
        Mat4::perspective_rh_gl(PLANE_FOV_DEG.to_radians(), viewport.aspect(), 0.1, 1000.0);
    let view = Mat4::look_at_rh(PLANE_EYE, Vec3::ZERO, Vec3::Y);
    projection * view * Mat4::from_scale(PLANE_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shaders::FRAGMENT_UNIFORMS;

    #[test]
    fn time_does_not_touch_resolution() {
        let mut set = UniformSet::new(FRAGMENT_UNIFORMS, Viewport::new(1920, 1080));
        let before = set.transform;
        set.set_time(3.25);
        assert_eq!(set.time, 3.25);
        assert_eq!(set.resolution, [1920.0, 1080.0]);
        assert_eq!(set.transform, before);
    }

    #[test]
    fn entries_use_program_names() {
        let set = UniformSet::new(FRAGMENT_UNIFORMS, Viewport::new(800, 600));
        let names: Vec<_> = set.entries().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["iTime", "iResolution", "uTransform"]);
    }

    #[test]
    fn plane_center_projects_to_screen_center() {
        let clip = plane_transform(Viewport::new(800, 600)) * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((clip.x / clip.w).abs() < 1e-6);
        assert!((clip.y / clip.w).abs() < 1e-6);
    }

    #[test]
    fn plane_overfills_the_frustum() {
        let clip = plane_transform(Viewport::new(1000, 1000)) * glam::Vec4::new(1.0, 1.0, 0.0, 1.0);
        assert!(clip.x / clip.w > 1.0);
        assert!(clip.y / clip.w > 1.0);
    }
}
