use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Event, MouseEvent, Window};

use crate::error::FrameError;
use crate::input::{EventKind, EventSink, EventSource, InputEvent, Viewport};

/// Current inner size of the window, zero if the browser won't say.
pub fn window_viewport(window: &Window) -> Viewport {
    let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
    };
    Viewport::new(dimension(window.inner_width()), dimension(window.inner_height()))
}

/// Listener registered on the window. Holds the exact closure that was
/// added so removal can hand the same function back.
pub struct WindowSubscription {
    kind: EventKind,
    closure: Closure<dyn FnMut(Event)>,
}

pub struct WindowEvents {
    window: Window,
}

impl WindowEvents {
    pub fn new(window: &Window) -> Self {
        Self {
            window: window.clone(),
        }
    }
}

impl EventSource for WindowEvents {
    type Subscription = WindowSubscription;

    fn subscribe(
        &mut self,
        kind: EventKind,
        sink: EventSink,
    ) -> Result<WindowSubscription, FrameError> {
        let window = self.window.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let input = match kind {
                EventKind::PointerMove => match event.dyn_ref::<MouseEvent>() {
                    Some(mouse) => InputEvent::PointerMove {
                        x: mouse.client_x() as f64,
                        y: mouse.client_y() as f64,
                    },
                    None => return,
                },
                EventKind::Resize => InputEvent::Resize(window_viewport(&window)),
            };
            (*sink)(&input);
        }) as Box<dyn FnMut(Event)>);

        self.window
            .add_event_listener_with_callback(kind.dom_name(), closure.as_ref().unchecked_ref())?;
        Ok(WindowSubscription { kind, closure })
    }

    fn unsubscribe(&mut self, subscription: WindowSubscription) {
        let WindowSubscription { kind, closure } = subscription;
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback(kind.dom_name(), closure.as_ref().unchecked_ref())
        {
            log::warn!("removing {} listener failed: {:?}", kind.dom_name(), err);
        }
    }
}
