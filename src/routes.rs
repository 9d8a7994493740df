//! The six views of the showcase and the page copy shown on each.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Gradient1,
    Gradient2,
    Gradient3,
    Gradient4,
    Gradient5,
}

/// Backdrop of the landing view.
pub const HOME_BACKGROUND: &str = "linear-gradient(140deg, #809bd6, #910aff, #af38ff)";

/// Which background effect a view mounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backdrop {
    /// Still gradient with the drifting circles on top.
    Still,
    Linear,
    Blobs,
    Shapes,
    Noise,
    Deform,
}

/// Explanatory card content for one method page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub snippet: &'static [&'static str],
}

pub const METHOD_COUNT: u8 = 5;

impl Route {
    pub fn all() -> &'static [Route] {
        &[
            Route::Home,
            Route::Gradient1,
            Route::Gradient2,
            Route::Gradient3,
            Route::Gradient4,
            Route::Gradient5,
        ]
    }

    pub fn number(&self) -> u8 {
        match self {
            Route::Home => 0,
            Route::Gradient1 => 1,
            Route::Gradient2 => 2,
            Route::Gradient3 => 3,
            Route::Gradient4 => 4,
            Route::Gradient5 => 5,
        }
    }

    pub fn from_number(number: u8) -> Option<Route> {
        Route::all().get(number as usize).copied()
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "#/",
            Route::Gradient1 => "#/gradient1",
            Route::Gradient2 => "#/gradient2",
            Route::Gradient3 => "#/gradient3",
            Route::Gradient4 => "#/gradient4",
            Route::Gradient5 => "#/gradient5",
        }
    }

    /// Parses `location.hash`. Unknown hashes land on Home.
    pub fn from_hash(hash: &str) -> Route {
        let path = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');
        Route::all()
            .iter()
            .copied()
            .find(|route| route.path().trim_start_matches("#/") == path)
            .unwrap_or(Route::Home)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Gradient1 => "CSS Gradients",
            Route::Gradient2 => "CSS Blobs",
            Route::Gradient3 => "3D Shapes",
            Route::Gradient4 => "Noise Gradients",
            Route::Gradient5 => "WebGL/Canvas",
        }
    }

    /// Forward control: 1 → … → 5 → Home → 1.
    pub fn next(&self) -> Route {
        Route::from_number((self.number() + 1) % (METHOD_COUNT + 1)).unwrap_or(Route::Home)
    }

    /// Back control: Home ← 1 ← … ← 5, and Home goes back to 5.
    pub fn previous(&self) -> Route {
        let n = self.number();
        let prev = if n == 0 { METHOD_COUNT } else { n - 1 };
        Route::from_number(prev).unwrap_or(Route::Home)
    }

    /// Text of the back control; names Home when that is where it leads.
    pub fn back_label(&self) -> &'static str {
        if self.previous() == Route::Home {
            "\u{2190} Home"
        } else {
            "\u{2190} Previous"
        }
    }

    pub fn forward_label(&self) -> &'static str {
        if self.next() == Route::Home {
            "Home \u{2192}"
        } else {
            "Next \u{2192}"
        }
    }

    pub fn backdrop(&self) -> Backdrop {
        match self {
            Route::Home => Backdrop::Still,
            Route::Gradient1 => Backdrop::Linear,
            Route::Gradient2 => Backdrop::Blobs,
            Route::Gradient3 => Backdrop::Shapes,
            Route::Gradient4 => Backdrop::Noise,
            Route::Gradient5 => Backdrop::Deform,
        }
    }

    pub fn copy(&self) -> PageCopy {
        match self {
            Route::Home => PageCopy {
                title: "5 Ways to Make",
                subtitle: "Gradients",
                description: "Interactive demo showcasing five different gradient techniques \
                              on the web",
                snippet: &[],
            },
            Route::Gradient1 => PageCopy {
                title: "Method 1",
                subtitle: "CSS Linear Gradients",
                description: "The simplest and most widely-used approach. \
                              Perfect for most use cases.",
                snippet: &[
                    "background: linear-gradient(45deg, #ff6b6b, #4ecdc4, #45b7d1);",
                    "background-size: 300% 300%;",
                    "animation: gradientShift 4s ease infinite;",
                ],
            },
            Route::Gradient2 => PageCopy {
                title: "Method 2",
                subtitle: "CSS Blob Gradients",
                description: "Using multiple radial gradients to create organic, \
                              blob-like effects.",
                snippet: &[
                    "background:",
                    "  radial-gradient(circle at 20% 80%, #ff6b6b, transparent),",
                    "  radial-gradient(circle at 80% 20%, #4ecdc4, transparent);",
                ],
            },
            Route::Gradient3 => PageCopy {
                title: "Method 3",
                subtitle: "3D Shapes + Blur Filter",
                description: "Create multiple 3D shapes, animate them, and apply a heavy blur \
                              filter for organic gradients.",
                snippet: &[
                    ".shapes-container {",
                    "  filter: blur(60px);",
                    "}",
                    ".shape {",
                    "  animation: float3d 12s ease-in-out infinite;",
                    "}",
                ],
            },
            Route::Gradient4 => PageCopy {
                title: "Method 4",
                subtitle: "Noise Gradients",
                description: "A fragment shader blends two cosine palettes around points \
                              that orbit the screen.",
                snippet: &[
                    "vec3 palette(float t, vec3 a, vec3 b, vec3 c, vec3 d) {",
                    "  return a + b * cos(6.28318 * (c * t + d));",
                    "}",
                    "fragColor = vec4((col1 + col2) / 2.0, 1.0);",
                ],
            },
            Route::Gradient5 => PageCopy {
                title: "Method 5",
                subtitle: "WebGL / Canvas Gradients",
                description: "Using HTML5 Canvas or WebGL with mathematical functions \
                              for complex, dynamic gradients.",
                snippet: &[
                    "float distortion = snoise(vec3(uv.x * 3.0 + uTime * 0.1, \
                     uv.y * 4.0, uTime * 0.2));",
                    "newPosition.z += max(0.0, distortion);",
                    "const gradient = ctx.createRadialGradient(x, y, 0, x, y, radius);",
                    "gradient.addColorStop(0, `hsl(${hue}, 70%, 60%)`);",
                ],
            },
        }
    }

    /// "n / 5" indicator, empty on Home.
    pub fn progress(&self) -> Option<String> {
        match self {
            Route::Home => None,
            other => Some(format!("{} / {}", other.number(), METHOD_COUNT)),
        }
    }
}
