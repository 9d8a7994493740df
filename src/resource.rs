//! Render resources whose memory is not reclaimed by scope exit.
//!
//! GPU geometry, materials and the renderer context are released through
//! explicit backend calls. Release methods take their handle by value, so a
//! handle that has been released can not be released again.

use glam::Mat4;

use crate::error::FrameError;
use crate::input::Viewport;

/// Renderer for a small set of solid meshes.
pub trait RenderBackend {
    type Geometry;
    type Material;

    fn create_geometry(&mut self, radius: f32) -> Result<Self::Geometry, FrameError>;
    fn create_material(&mut self, color: [f32; 3]) -> Result<Self::Material, FrameError>;

    /// Resizes the output surface. Takes effect before this call returns.
    fn resize(&mut self, viewport: Viewport);
    fn output_size(&self) -> Viewport;

    fn begin_frame(&mut self);
    fn draw(
        &mut self,
        geometry: &Self::Geometry,
        material: &Self::Material,
        transform: &Mat4,
        model: &Mat4,
    );

    fn release_geometry(&mut self, geometry: Self::Geometry);
    fn release_material(&mut self, material: Self::Material);
    /// Gives the underlying graphics context back to the platform.
    fn release_context(&mut self);
    /// Removes the output surface from its mount point.
    fn detach_surface(&mut self);
}

/// One geometry + material pair.
pub struct Mesh<B: RenderBackend> {
    pub geometry: B::Geometry,
    pub material: B::Material,
}

/// The meshes of one mount plus the renderer that owns them.
pub struct MeshSet<B: RenderBackend> {
    backend: B,
    meshes: Vec<Mesh<B>>,
    disposed: bool,
}

impl<B: RenderBackend> MeshSet<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            meshes: Vec::new(),
            disposed: false,
        }
    }

    /// Creates a mesh. If the material fails the geometry is released
    /// before returning.
    pub fn add(&mut self, radius: f32, color: [f32; 3]) -> Result<usize, FrameError> {
        let geometry = self.backend.create_geometry(radius)?;
        let material = match self.backend.create_material(color) {
            Ok(material) => material,
            Err(err) => {
                self.backend.release_geometry(geometry);
                return Err(err);
            }
        };
        self.meshes.push(Mesh { geometry, material });
        Ok(self.meshes.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Draws each mesh with the matching `(transform, model)` pair.
    pub fn draw_all(&mut self, transforms: &[(Mat4, Mat4)]) {
        if self.disposed {
            return;
        }
        self.backend.begin_frame();
        for (mesh, (transform, model)) in self.meshes.iter().zip(transforms) {
            self.backend.draw(&mesh.geometry, &mesh.material, transform, model);
        }
    }

    /// Releases every mesh, then the context, then the surface. Repeated
    /// calls do nothing.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        for mesh in self.meshes.drain(..) {
            self.backend.release_geometry(mesh.geometry);
            self.backend.release_material(mesh.material);
        }
        self.backend.release_context();
        self.backend.detach_surface();
    }
}
