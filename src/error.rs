use std::fmt;

/// Failures surfaced by the frame driver, its mounts and render backends.
///
/// None of these are shown to the user. Acquisition failures degrade the
/// page to its static fallback; everything else is logged and dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameError {
    /// `start()` called on a driver that already has a live loop.
    AlreadyRunning,
    /// The driver was stopped; loops are not restartable.
    Stopped,
    /// A drawing context, renderer or GPU object could not be obtained.
    Unavailable(String),
    /// A host call (scheduler, listener, DOM) failed.
    Platform(String),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::AlreadyRunning => write!(f, "frame driver already running"),
            FrameError::Stopped => write!(f, "frame driver has been stopped"),
            FrameError::Unavailable(what) => write!(f, "render resource unavailable: {}", what),
            FrameError::Platform(msg) => write!(f, "platform call failed: {}", msg),
        }
    }
}

impl std::error::Error for FrameError {}

#[cfg(target_arch = "wasm32")]
mod js {
    use wasm_bindgen::JsValue;

    use super::FrameError;

    impl From<JsValue> for FrameError {
        fn from(value: JsValue) -> Self {
            FrameError::Platform(format!("{:?}", value))
        }
    }

    impl From<FrameError> for JsValue {
        fn from(err: FrameError) -> Self {
            JsValue::from_str(&err.to_string())
        }
    }
}
