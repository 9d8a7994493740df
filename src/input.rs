//! Window-level input plumbing shared by every effect.
//!
//! Pointer movement and viewport resizes are the only global event sources
//! an effect may listen to. Subscriptions are explicit handles: whoever
//! subscribed hands the same handle back to unsubscribe, so teardown always
//! removes exactly the handler that was added.

use std::rc::Rc;

use crate::error::FrameError;

/// Drawing surface size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height. A zero height is treated as one pixel.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerMove,
    Resize,
}

impl EventKind {
    /// DOM event type name.
    pub fn dom_name(&self) -> &'static str {
        match self {
            EventKind::PointerMove => "pointermove",
            EventKind::Resize => "resize",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove { x: f64, y: f64 },
    Resize(Viewport),
}

impl InputEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            InputEvent::PointerMove { .. } => EventKind::PointerMove,
            InputEvent::Resize(_) => EventKind::Resize,
        }
    }
}

/// Receiver installed by a mount for one event kind.
pub type EventSink = Rc<dyn Fn(&InputEvent)>;

/// A process-wide event target (the browser window, or a test double).
pub trait EventSource {
    type Subscription;

    fn subscribe(
        &mut self,
        kind: EventKind,
        sink: EventSink,
    ) -> Result<Self::Subscription, FrameError>;

    /// Consumes the handle returned by `subscribe`.
    fn unsubscribe(&mut self, subscription: Self::Subscription);
}
