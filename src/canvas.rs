//! 2D canvas effect: drifting radial gradients plus per-pixel grain.

use crate::driver::Effect;
use crate::input::{EventKind, InputEvent, Viewport};
use crate::random::RandomSource;

/// Frames per second the drift constants were tuned for.
pub const REFERENCE_FPS: f64 = 60.0;

/// Softening applied to the canvas element itself.
pub const CANVAS_BLUR_PX: f64 = 2.0;

/// Inline style for a full-bleed canvas layer, blur included.
pub fn canvas_style(base: &str) -> String {
    format!("{}filter:blur({}px);", base, CANVAS_BLUR_PX)
}

/// One radial gradient fill, in canvas pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialBlob {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub inner: String,
    pub middle: String,
}

pub fn hsla(hue: f64, saturation: u8, lightness: u8, alpha: f64) -> String {
    format!("hsla({:.1}, {}%, {}%, {})", hue, saturation, lightness, alpha)
}

/// The three blobs at reference frame `f`.
pub fn radial_blobs(f: f64, viewport: Viewport) -> Vec<RadialBlob> {
    let w = viewport.width as f64;
    let h = viewport.height as f64;
    (0..3)
        .map(|i| {
            let i = i as f64;
            RadialBlob {
                x: (f * 0.01 + i * 2.0).sin() * w * 0.3 + w * 0.5,
                y: (f * 0.008 + i * 2.0).cos() * h * 0.3 + h * 0.5,
                radius: w.min(h) * 0.6,
                inner: hsla((f * 0.5 + i * 120.0) % 360.0, 70, 60, 0.8),
                middle: hsla((f * 0.7 + i * 120.0 + 60.0) % 360.0, 80, 50, 0.4),
            }
        })
        .collect()
}

/// Adds `(rand - 0.5) * amplitude` to the RGB channels of every RGBA pixel,
/// clamped to a byte. Alpha is left alone.
pub fn apply_grain(pixels: &mut [u8], amplitude: f64, rng: &mut impl RandomSource) {
    for px in pixels.chunks_exact_mut(4) {
        let noise = (rng.next_unit() - 0.5) * amplitude;
        for channel in &mut px[..3] {
            *channel = (*channel as f64 + noise).round().clamp(0.0, 255.0) as u8;
        }
    }
}

/// A 2D drawing context bound to a canvas.
pub trait CanvasSurface {
    fn viewport(&self) -> Viewport;
    fn resize(&mut self, viewport: Viewport);
    fn clear(&mut self);
    fn fill_radial(&mut self, blob: &RadialBlob);
    /// Hands the current pixel buffer to `edit` and writes it back.
    fn edit_pixels(&mut self, edit: &mut dyn FnMut(&mut [u8]));
    fn release(&mut self);
}

pub struct CanvasEffect<S: CanvasSurface, R: RandomSource> {
    surface: S,
    rng: R,
    grain: f64,
    released: bool,
}

impl<S: CanvasSurface, R: RandomSource> CanvasEffect<S, R> {
    pub fn new(surface: S, rng: R, grain: f64) -> Self {
        Self {
            surface,
            rng,
            grain,
            released: false,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: CanvasSurface, R: RandomSource> Effect for CanvasEffect<S, R> {
    fn frame(&mut self, elapsed: f64) {
        if self.released {
            return;
        }
        let viewport = self.surface.viewport();
        self.surface.clear();
        for blob in radial_blobs(elapsed * REFERENCE_FPS, viewport) {
            self.surface.fill_radial(&blob);
        }
        if self.grain > 0.0 {
            let (rng, grain) = (&mut self.rng, self.grain);
            self.surface
                .edit_pixels(&mut |pixels: &mut [u8]| apply_grain(pixels, grain, &mut *rng));
        }
    }

    fn listens(&self) -> &'static [EventKind] {
        &[EventKind::Resize]
    }

    fn input(&mut self, event: &InputEvent) {
        if let InputEvent::Resize(viewport) = event {
            if !self.released {
                self.surface.resize(*viewport);
            }
        }
    }

    fn teardown(&mut self) {
        if !self.released {
            self.released = true;
            self.surface.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_layer_is_lightly_blurred() {
        assert_eq!(canvas_style("inset:0;"), "inset:0;filter:blur(2px);");
    }

    #[test]
    fn first_blob_starts_offset_from_center() {
        let blobs = radial_blobs(0.0, Viewport::new(1000, 500));
        assert_eq!(blobs.len(), 3);
        assert_eq!(blobs[0].x, 500.0);
        assert_eq!(blobs[0].y, 150.0 + 250.0);
        assert_eq!(blobs[0].radius, 300.0);
        assert_eq!(blobs[0].inner, "hsla(0.0, 70%, 60%, 0.8)");
        assert_eq!(blobs[1].middle, "hsla(180.0, 80%, 50%, 0.4)");
    }

    #[test]
    fn hues_wrap_at_360() {
        let blobs = radial_blobs(720.0, Viewport::new(100, 100));
        assert_eq!(blobs[0].inner, "hsla(0.0, 70%, 60%, 0.8)");
    }

    #[test]
    fn grain_clamps_and_spares_alpha() {
        let mut pixels = vec![250, 5, 128, 77, 0, 255, 10, 200];
        let mut high = || 0.999;
        apply_grain(&mut pixels[..4], 30.0, &mut high);
        assert_eq!(&pixels[..4], &[255, 20, 143, 77]);
        let mut low = || 0.0;
        apply_grain(&mut pixels[4..], 30.0, &mut low);
        assert_eq!(&pixels[4..], &[0, 240, 0, 200]);
    }

    #[test]
    fn zero_amplitude_is_identity() {
        let mut pixels = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let mut rng = crate::random::XorShift::seeded(9);
        apply_grain(&mut pixels, 0.0, &mut rng);
        assert_eq!(pixels, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
