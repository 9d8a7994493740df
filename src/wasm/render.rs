use glam::Mat4;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlUniformLocation, WebGlVertexArrayObject, WebglLoseContext,
};

use crate::error::FrameError;
use crate::geometry::{self, PLANE_STRIDE, SOLID_STRIDE};
use crate::input::Viewport;
use crate::plane::ShaderBackend;
use crate::resource::RenderBackend;
use crate::shaders::{ShaderVariant, SHAPE_FS, SHAPE_VS};
use crate::uniforms::{UniformSet, UniformValue};

const FLOAT_BYTES: i32 = 4;

fn unavailable(what: &str) -> FrameError {
    FrameError::Unavailable(what.to_string())
}

/// A canvas with a WebGL2 context, sized to the viewport.
pub struct GlSurface {
    canvas: HtmlCanvasElement,
    gl: GL,
}

impl GlSurface {
    pub fn acquire(canvas: HtmlCanvasElement) -> Result<Self, FrameError> {
        let gl: GL = canvas
            .get_context("webgl2")?
            .ok_or_else(|| unavailable("WebGL2 not supported"))?
            .dyn_into()
            .map_err(|_| unavailable("webgl2 context has unexpected type"))?;
        Ok(Self { canvas, gl })
    }

    pub fn gl(&self) -> &GL {
        &self.gl
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.canvas.set_width(viewport.width);
        self.canvas.set_height(viewport.height);
        self.gl.viewport(0, 0, viewport.width as i32, viewport.height as i32);
    }

    pub fn size(&self) -> Viewport {
        Viewport::new(self.canvas.width(), self.canvas.height())
    }

    /// Asks the browser to drop the context now instead of at GC time.
    pub fn release_context(&mut self) {
        match self.gl.get_extension("WEBGL_lose_context") {
            Ok(Some(ext)) => ext.unchecked_into::<WebglLoseContext>().lose_context(),
            _ => log::debug!("WEBGL_lose_context unavailable; context left to GC"),
        }
    }

    pub fn detach(&mut self) {
        self.canvas.remove();
    }
}

fn compile(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader, FrameError> {
    let shader = gl.create_shader(kind).ok_or_else(|| unavailable("shader object"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    let ok = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(FrameError::Unavailable(format!("shader compile: {}", log)))
    }
}

/// Compiles and links a program. The shader objects are deleted either way.
pub fn link(gl: &GL, vertex: &str, fragment: &str) -> Result<WebGlProgram, FrameError> {
    let vs = compile(gl, GL::VERTEX_SHADER, vertex)?;
    let fs = match compile(gl, GL::FRAGMENT_SHADER, fragment) {
        Ok(fs) => fs,
        Err(err) => {
            gl.delete_shader(Some(&vs));
            return Err(err);
        }
    };
    let program = gl.create_program();
    if let Some(program) = &program {
        gl.attach_shader(program, &vs);
        gl.attach_shader(program, &fs);
        gl.link_program(program);
        gl.detach_shader(program, &vs);
        gl.detach_shader(program, &fs);
    }
    gl.delete_shader(Some(&vs));
    gl.delete_shader(Some(&fs));

    let program = program.ok_or_else(|| unavailable("program object"))?;
    let ok = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(program)
    } else {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(FrameError::Unavailable(format!("program link: {}", log)))
    }
}

/// Vertex array plus the buffers it references.
pub struct GlGeometry {
    vao: WebGlVertexArrayObject,
    buffers: Vec<WebGlBuffer>,
    count: i32,
}

impl GlGeometry {
    fn delete(self, gl: &GL) {
        gl.delete_vertex_array(Some(&self.vao));
        for buffer in &self.buffers {
            gl.delete_buffer(Some(buffer));
        }
    }
}

/// Uploads interleaved `f32` attributes described by `(location, size)`.
fn upload(
    gl: &GL,
    data: &[f32],
    stride: usize,
    layout: &[(u32, i32)],
) -> Result<GlGeometry, FrameError> {
    let vao = gl.create_vertex_array().ok_or_else(|| unavailable("vertex array"))?;
    let buffer = match gl.create_buffer() {
        Some(buffer) => buffer,
        None => {
            gl.delete_vertex_array(Some(&vao));
            return Err(unavailable("vertex buffer"));
        }
    };
    gl.bind_vertex_array(Some(&vao));
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    let array = js_sys::Float32Array::from(data);
    gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &array, GL::STATIC_DRAW);

    let stride_bytes = stride as i32 * FLOAT_BYTES;
    let mut offset = 0;
    for &(location, size) in layout {
        gl.enable_vertex_attrib_array(location);
        gl.vertex_attrib_pointer_with_i32(
            location,
            size,
            GL::FLOAT,
            false,
            stride_bytes,
            offset * FLOAT_BYTES,
        );
        offset += size;
    }
    gl.bind_vertex_array(None);

    Ok(GlGeometry {
        vao,
        buffers: vec![buffer],
        count: (data.len() / stride) as i32,
    })
}

pub struct GlMaterial {
    program: WebGlProgram,
    transform: Option<WebGlUniformLocation>,
    model: Option<WebGlUniformLocation>,
    color_location: Option<WebGlUniformLocation>,
    color: [f32; 3],
}

/// Solid-color meshes on a WebGL2 canvas.
pub struct GlShapes {
    surface: GlSurface,
}

impl GlShapes {
    pub fn new(surface: GlSurface) -> Self {
        Self { surface }
    }
}

impl RenderBackend for GlShapes {
    type Geometry = GlGeometry;
    type Material = GlMaterial;

    fn create_geometry(&mut self, radius: f32) -> Result<GlGeometry, FrameError> {
        let data = geometry::octahedron(radius);
        upload(self.surface.gl(), &data, SOLID_STRIDE, &[(0, 3), (1, 3)])
    }

    fn create_material(&mut self, color: [f32; 3]) -> Result<GlMaterial, FrameError> {
        let gl = self.surface.gl();
        let program = link(gl, SHAPE_VS, SHAPE_FS)?;
        Ok(GlMaterial {
            transform: gl.get_uniform_location(&program, "uTransform"),
            model: gl.get_uniform_location(&program, "uModel"),
            color_location: gl.get_uniform_location(&program, "uColor"),
            program,
            color,
        })
    }

    fn resize(&mut self, viewport: Viewport) {
        self.surface.resize(viewport);
    }

    fn output_size(&self) -> Viewport {
        self.surface.size()
    }

    fn begin_frame(&mut self) {
        let gl = self.surface.gl();
        gl.enable(GL::DEPTH_TEST);
        gl.clear_color(0.0, 0.0, 0.0, 0.0);
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
    }

    fn draw(
        &mut self,
        geometry: &GlGeometry,
        material: &GlMaterial,
        transform: &Mat4,
        model: &Mat4,
    ) {
        let gl = self.surface.gl();
        gl.use_program(Some(&material.program));
        gl.uniform_matrix4fv_with_f32_array(
            material.transform.as_ref(),
            false,
            &transform.to_cols_array(),
        );
        gl.uniform_matrix4fv_with_f32_array(material.model.as_ref(), false, &model.to_cols_array());
        let [r, g, b] = material.color;
        gl.uniform3f(material.color_location.as_ref(), r, g, b);
        gl.bind_vertex_array(Some(&geometry.vao));
        gl.draw_arrays(GL::TRIANGLES, 0, geometry.count);
        gl.bind_vertex_array(None);
    }

    fn release_geometry(&mut self, geometry: GlGeometry) {
        geometry.delete(self.surface.gl());
    }

    fn release_material(&mut self, material: GlMaterial) {
        self.surface.gl().delete_program(Some(&material.program));
    }

    fn release_context(&mut self) {
        self.surface.release_context();
    }

    fn detach_surface(&mut self) {
        self.surface.detach();
    }
}

/// One indexed plane drawn with a variant's shader program.
pub struct GlPlane {
    surface: GlSurface,
    program: WebGlProgram,
    mesh: GlGeometry,
    locations: [Option<WebGlUniformLocation>; 3],
}

impl GlPlane {
    /// Builds the program and plane mesh. On failure the context is lost
    /// and the canvas detached before the error is returned.
    pub fn new(mut surface: GlSurface, variant: ShaderVariant) -> Result<Self, FrameError> {
        match Self::build(&surface, variant) {
            Ok((program, mesh)) => {
                let gl = surface.gl();
                let names = variant.uniforms();
                let locations = [
                    gl.get_uniform_location(&program, names.time),
                    gl.get_uniform_location(&program, names.resolution),
                    gl.get_uniform_location(&program, names.transform),
                ];
                Ok(Self {
                    surface,
                    program,
                    mesh,
                    locations,
                })
            }
            Err(err) => {
                surface.release_context();
                surface.detach();
                Err(err)
            }
        }
    }

    fn build(
        surface: &GlSurface,
        variant: ShaderVariant,
    ) -> Result<(WebGlProgram, GlGeometry), FrameError> {
        let gl = surface.gl();
        let program = link(gl, variant.vertex_source(), variant.fragment_source())?;
        let plane = geometry::plane(2.0, 2.0, variant.segments());
        let mut mesh = match upload(gl, &plane.vertices, PLANE_STRIDE, &[(0, 3), (1, 2)]) {
            Ok(mesh) => mesh,
            Err(err) => {
                gl.delete_program(Some(&program));
                return Err(err);
            }
        };

        let Some(indices) = gl.create_buffer() else {
            mesh.delete(gl);
            gl.delete_program(Some(&program));
            return Err(unavailable("index buffer"));
        };
        gl.bind_vertex_array(Some(&mesh.vao));
        gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&indices));
        let array = js_sys::Uint16Array::from(&plane.indices[..]);
        gl.buffer_data_with_array_buffer_view(GL::ELEMENT_ARRAY_BUFFER, &array, GL::STATIC_DRAW);
        gl.bind_vertex_array(None);

        mesh.buffers.push(indices);
        mesh.count = plane.indices.len() as i32;
        Ok((program, mesh))
    }
}

impl ShaderBackend for GlPlane {
    fn resize(&mut self, viewport: Viewport) {
        self.surface.resize(viewport);
    }

    fn draw(&mut self, uniforms: &UniformSet) {
        let gl = self.surface.gl();
        gl.clear_color(0.0, 0.0, 0.0, 0.0);
        gl.clear(GL::COLOR_BUFFER_BIT);
        gl.use_program(Some(&self.program));
        for ((_, value), location) in uniforms.entries().iter().zip(&self.locations) {
            match value {
                UniformValue::Float(v) => gl.uniform1f(location.as_ref(), *v),
                UniformValue::Vec2([x, y]) => gl.uniform2f(location.as_ref(), *x, *y),
                UniformValue::Mat4(m) => {
                    gl.uniform_matrix4fv_with_f32_array(location.as_ref(), false, m)
                }
            }
        }
        gl.bind_vertex_array(Some(&self.mesh.vao));
        gl.draw_elements_with_i32(GL::TRIANGLES, self.mesh.count, GL::UNSIGNED_SHORT, 0);
        gl.bind_vertex_array(None);
    }

    fn release(&mut self) {
        let gl = self.surface.gl();
        gl.delete_program(Some(&self.program));
        gl.delete_vertex_array(Some(&self.mesh.vao));
        for buffer in self.mesh.buffers.drain(..) {
            gl.delete_buffer(Some(&buffer));
        }
        self.surface.release_context();
        self.surface.detach();
    }
}
