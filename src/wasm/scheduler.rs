use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::Window;

use crate::driver::{AnimationHandle, Effect, FrameDriver, FrameScheduler};
use crate::error::FrameError;
use crate::mount::SharedDriver;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` scheduler.
///
/// Every request re-registers the same closure, which lives in `callback`
/// for as long as the driver owning this scheduler does.
pub struct RafScheduler {
    window: Window,
    callback: FrameSlot,
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Result<AnimationHandle, FrameError> {
        let slot = self.callback.borrow();
        let callback = slot
            .as_ref()
            .ok_or_else(|| FrameError::Platform("frame callback not installed".into()))?;
        let id = self.window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        Ok(AnimationHandle::from_raw(id))
    }

    fn cancel_frame(&mut self, handle: AnimationHandle) {
        if let Err(err) = self.window.cancel_animation_frame(handle.raw()) {
            log::warn!("cancelAnimationFrame failed: {:?}", err);
        }
    }
}

/// Wraps `effect` in a driver whose ticks come from the browser's refresh.
///
/// The frame closure only holds a weak reference to the driver, so dropping
/// the returned `Rc` drops the driver, its scheduler and the closure.
pub fn drive<E: Effect + 'static>(window: &Window, effect: E) -> SharedDriver<E, RafScheduler> {
    let slot: FrameSlot = Rc::new(RefCell::new(None));
    let scheduler = RafScheduler {
        window: window.clone(),
        callback: slot.clone(),
    };
    let driver = Rc::new(RefCell::new(FrameDriver::new(effect, scheduler)));

    let weak = Rc::downgrade(&driver);
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        if let Some(driver) = weak.upgrade() {
            driver.borrow_mut().tick(timestamp);
        }
    }) as Box<dyn FnMut(f64)>));

    driver
}
