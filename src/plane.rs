//! Full-screen shader plane shared by the noise and deformation pages.

use crate::driver::Effect;
use crate::input::{EventKind, InputEvent, Viewport};
use crate::shaders::ShaderVariant;
use crate::uniforms::UniformSet;

/// A compiled shader program drawing one plane.
pub trait ShaderBackend {
    fn resize(&mut self, viewport: Viewport);
    fn draw(&mut self, uniforms: &UniformSet);
    /// Deletes the program, buffers and context. Called once.
    fn release(&mut self);
}

pub struct PlaneEffect<B: ShaderBackend> {
    backend: B,
    uniforms: UniformSet,
    released: bool,
}

impl<B: ShaderBackend> PlaneEffect<B> {
    pub fn new(mut backend: B, variant: ShaderVariant, viewport: Viewport) -> Self {
        backend.resize(viewport);
        Self {
            backend,
            uniforms: UniformSet::new(variant.uniforms(), viewport),
            released: false,
        }
    }

    pub fn uniforms(&self) -> &UniformSet {
        &self.uniforms
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl<B: ShaderBackend> Effect for PlaneEffect<B> {
    fn frame(&mut self, elapsed: f64) {
        if self.released {
            return;
        }
        self.uniforms.set_time(elapsed);
        self.backend.draw(&self.uniforms);
    }

    fn listens(&self) -> &'static [EventKind] {
        &[EventKind::Resize]
    }

    fn input(&mut self, event: &InputEvent) {
        if let InputEvent::Resize(viewport) = event {
            if self.released {
                return;
            }
            self.uniforms.set_viewport(*viewport);
            self.backend.resize(*viewport);
        }
    }

    fn teardown(&mut self) {
        if !self.released {
            self.released = true;
            self.backend.release();
        }
    }
}
