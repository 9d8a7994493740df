//! GLSL ES 3.00 sources for the WebGL2 effects.

use crate::palette::{self, Orbit, FRAGMENT_ORBIT, VERTEX_ORBIT};
use crate::uniforms::UniformNames;

pub const FRAGMENT_UNIFORMS: UniformNames = UniformNames {
    time: "iTime",
    resolution: "iResolution",
    transform: "uTransform",
};

pub const VERTEX_UNIFORMS: UniformNames = UniformNames {
    time: "uTime",
    resolution: "iResolution",
    transform: "uTransform",
};

/// The two shader-driven pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderVariant {
    /// Flat plane, all motion in the fragment shader.
    Noise,
    /// Subdivided plane displaced by simplex noise in the vertex shader.
    Deform,
}

impl ShaderVariant {
    pub fn vertex_source(&self) -> &'static str {
        match self {
            ShaderVariant::Noise => PLANE_VS,
            ShaderVariant::Deform => DEFORM_VS,
        }
    }

    pub fn fragment_source(&self) -> &'static str {
        match self {
            ShaderVariant::Noise => NOISE_FS,
            ShaderVariant::Deform => DEFORM_FS,
        }
    }

    pub fn uniforms(&self) -> UniformNames {
        match self {
            ShaderVariant::Noise => FRAGMENT_UNIFORMS,
            ShaderVariant::Deform => VERTEX_UNIFORMS,
        }
    }

    /// Plane subdivisions per axis.
    pub fn segments(&self) -> u16 {
        match self {
            ShaderVariant::Noise => 1,
            ShaderVariant::Deform => 64,
        }
    }

    pub fn orbit(&self) -> Orbit {
        match self {
            ShaderVariant::Noise => FRAGMENT_ORBIT,
            ShaderVariant::Deform => VERTEX_ORBIT,
        }
    }

    /// CSS gradient shown under (or instead of) the live shader.
    pub fn fallback_css(&self) -> String {
        palette::fallback_css(&self.orbit())
    }
}

const PLANE_VS: &str = r#"#version 300 es
layout(location = 0) in vec3 position;
layout(location = 1) in vec2 uv;
uniform mat4 uTransform;
out vec2 vUv;
void main() {
    vUv = uv;
    gl_Position = uTransform * vec4(position, 1.0);
}
"#;

const NOISE_FS: &str = r#"#version 300 es
precision highp float;
uniform float iTime;
uniform vec2 iResolution;
in vec2 vUv;
out vec4 fragColor;

vec3 palette(in float t, in vec3 a, in vec3 b, in vec3 c, in vec3 d) {
    return a + b * cos(6.28318 * (c * t + d));
}

void main() {
    vec2 uv = vUv;
    float time = iTime * 0.2;
    vec2 c1 = vec2(sin(time) * 0.5, cos(iTime) * 0.7);
    vec2 c2 = vec2(sin(time * 0.7) * 0.9, cos(iTime * 0.65) * 0.6);
    vec3 a = vec3(0.5);
    vec3 b = vec3(0.5);
    vec3 c = vec3(1.0);
    vec3 d = vec3(0.0, 0.10, 0.20);
    vec3 col1 = palette(length(uv - c1) + time, a, b, c, d);
    vec3 col2 = palette(length(uv - c2) + time, a, b, c, d);
    fragColor = vec4((col1 + col2) / 2.0, 1.0);
}
"#;

// Ashima Arts 3D simplex noise (MIT).
const DEFORM_VS: &str = r#"#version 300 es
layout(location = 0) in vec3 position;
layout(location = 1) in vec2 uv;
uniform mat4 uTransform;
uniform float uTime;
out vec2 vUv;

vec3 mod289(vec3 x) { return x - floor(x * (1.0 / 289.0)) * 289.0; }
vec4 mod289(vec4 x) { return x - floor(x * (1.0 / 289.0)) * 289.0; }
vec4 permute(vec4 x) { return mod289(((x * 34.0) + 1.0) * x); }
vec4 taylorInvSqrt(vec4 r) { return 1.79284291400159 - 0.85373472095314 * r; }

float snoise(vec3 v) {
    const vec2 C = vec2(1.0 / 6.0, 1.0 / 3.0);
    const vec4 D = vec4(0.0, 0.5, 1.0, 2.0);

    vec3 i = floor(v + dot(v, C.yyy));
    vec3 x0 = v - i + dot(i, C.xxx);

    vec3 g = step(x0.yzx, x0.xyz);
    vec3 l = 1.0 - g;
    vec3 i1 = min(g.xyz, l.zxy);
    vec3 i2 = max(g.xyz, l.zxy);

    vec3 x1 = x0 - i1 + C.xxx;
    vec3 x2 = x0 - i2 + C.yyy;
    vec3 x3 = x0 - D.yyy;

    i = mod289(i);
    vec4 p = permute(permute(permute(
              i.z + vec4(0.0, i1.z, i2.z, 1.0))
            + i.y + vec4(0.0, i1.y, i2.y, 1.0))
            + i.x + vec4(0.0, i1.x, i2.x, 1.0));

    float n_ = 0.142857142857;
    vec3 ns = n_ * D.wyz - D.xzx;

    vec4 j = p - 49.0 * floor(p * ns.z * ns.z);

    vec4 x_ = floor(j * ns.z);
    vec4 y_ = floor(j - 7.0 * x_);

    vec4 x = x_ * ns.x + ns.yyyy;
    vec4 y = y_ * ns.x + ns.yyyy;
    vec4 h = 1.0 - abs(x) - abs(y);

    vec4 b0 = vec4(x.xy, y.xy);
    vec4 b1 = vec4(x.zw, y.zw);

    vec4 s0 = floor(b0) * 2.0 + 1.0;
    vec4 s1 = floor(b1) * 2.0 + 1.0;
    vec4 sh = -step(h, vec4(0.0));

    vec4 a0 = b0.xzyw + s0.xzyw * sh.xxyy;
    vec4 a1 = b1.xzyw + s1.xzyw * sh.zzww;

    vec3 p0 = vec3(a0.xy, h.x);
    vec3 p1 = vec3(a0.zw, h.y);
    vec3 p2 = vec3(a1.xy, h.z);
    vec3 p3 = vec3(a1.zw, h.w);

    vec4 norm = taylorInvSqrt(vec4(dot(p0, p0), dot(p1, p1), dot(p2, p2), dot(p3, p3)));
    p0 *= norm.x;
    p1 *= norm.y;
    p2 *= norm.z;
    p3 *= norm.w;

    vec4 m = max(0.6 - vec4(dot(x0, x0), dot(x1, x1), dot(x2, x2), dot(x3, x3)), 0.0);
    m = m * m;
    return 42.0 * dot(m * m, vec4(dot(p0, x0), dot(p1, x1), dot(p2, x2), dot(p3, x3)));
}

void main() {
    vUv = uv;
    vec2 coord = uv * vec2(3.0, 4.0);
    vec3 displaced = position;
    float distortion = snoise(vec3(coord.x + uTime * 0.1, coord.y, uTime * 0.2));
    displaced.z += max(0.0, distortion);
    gl_Position = uTransform * vec4(displaced, 1.0);
}
"#;

const DEFORM_FS: &str = r#"#version 300 es
precision highp float;
uniform float uTime;
uniform vec2 iResolution;
in vec2 vUv;
out vec4 fragColor;

vec3 palette(in float t, in vec3 a, in vec3 b, in vec3 c, in vec3 d) {
    return a + b * cos(6.28318 * (c * t + d));
}

void main() {
    vec2 uv = vUv;
    float time = uTime * 0.2;
    vec2 c1 = vec2(sin(time) * 0.5, cos(uTime * 0.3) * 0.7);
    vec2 c2 = vec2(sin(time * 0.7) * 0.9, cos(uTime * 0.2) * 0.6);
    vec3 a = vec3(0.5);
    vec3 b = vec3(0.5);
    vec3 c = vec3(1.0);
    vec3 d = vec3(0.0, 0.10, 0.20);
    vec3 col1 = palette(length(uv - c1) + time, a, b, c, d);
    vec3 col2 = palette(length(uv - c2) + time, a, b, c, d);
    fragColor = vec4((col1 + col2) / 2.0, 1.0);
}
"#;

/// Flat-shaded solid color for the floating shapes.
pub const SHAPE_VS: &str = r#"#version 300 es
layout(location = 0) in vec3 position;
layout(location = 1) in vec3 normal;
uniform mat4 uTransform;
uniform mat4 uModel;
out float vLight;
void main() {
    vec3 n = normalize(mat3(uModel) * normal);
    vLight = 0.55 + 0.45 * max(dot(n, normalize(vec3(0.3, 0.5, 1.0))), 0.0);
    gl_Position = uTransform * vec4(position, 1.0);
}
"#;

pub const SHAPE_FS: &str = r#"#version 300 es
precision mediump float;
uniform vec3 uColor;
in float vLight;
out vec4 fragColor;
void main() {
    fragColor = vec4(uColor * vLight, 1.0);
}
"#;
