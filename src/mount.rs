//! Background effect mount: acquire-on-enter, release-on-leave.
//!
//! A mount owns one frame driver and the window subscriptions its effect
//! asked for. Teardown unsubscribes, stops the loop and releases the
//! effect's resources exactly once, whether it is called explicitly or the
//! mount is simply dropped.

use std::cell::RefCell;
use std::rc::Rc;

use crate::driver::{Effect, FrameDriver, FrameScheduler};
use crate::error::FrameError;
use crate::input::{EventSink, EventSource, InputEvent};

pub type SharedDriver<E, S> = Rc<RefCell<FrameDriver<E, S>>>;

/// Type-erased view of a live mount, held by the route shell.
pub trait Mounted {
    fn teardown(&mut self);
    fn is_live(&self) -> bool;
}

pub struct EffectMount<E, S, V>
where
    E: Effect + 'static,
    S: FrameScheduler + 'static,
    V: EventSource,
{
    driver: SharedDriver<E, S>,
    events: V,
    subscriptions: Vec<V::Subscription>,
    live: bool,
}

impl<E, S, V> EffectMount<E, S, V>
where
    E: Effect + 'static,
    S: FrameScheduler + 'static,
    V: EventSource,
{
    /// Subscribes the effect's listeners, then starts its loop. On failure
    /// everything acquired so far is released before the error is returned.
    pub fn mount(driver: SharedDriver<E, S>, events: V, now_ms: f64) -> Result<Self, FrameError> {
        let mut mount = Self {
            driver,
            events,
            subscriptions: Vec::new(),
            live: true,
        };

        let kinds = mount.driver.borrow().effect().listens();
        for &kind in kinds {
            let sink = forward_to(&mount.driver);
            match mount.events.subscribe(kind, sink) {
                Ok(subscription) => mount.subscriptions.push(subscription),
                Err(err) => {
                    mount.teardown();
                    return Err(err);
                }
            }
        }

        let started = mount.driver.borrow_mut().start(now_ms);
        if let Err(err) = started {
            mount.teardown();
            return Err(err);
        }
        Ok(mount)
    }

    pub fn teardown(&mut self) {
        if !self.live {
            return;
        }
        self.live = false;
        for subscription in self.subscriptions.drain(..) {
            self.events.unsubscribe(subscription);
        }
        let mut driver = self.driver.borrow_mut();
        driver.stop();
        driver.effect_mut().teardown();
    }
}

impl<E, S, V> Mounted for EffectMount<E, S, V>
where
    E: Effect + 'static,
    S: FrameScheduler + 'static,
    V: EventSource,
{
    fn teardown(&mut self) {
        EffectMount::teardown(self);
    }

    fn is_live(&self) -> bool {
        self.live
    }
}

impl<E, S, V> Drop for EffectMount<E, S, V>
where
    E: Effect + 'static,
    S: FrameScheduler + 'static,
    V: EventSource,
{
    fn drop(&mut self) {
        self.teardown();
    }
}

// Sinks hold a weak reference so a leaked listener can never keep the
// driver (and its GPU objects) alive.
fn forward_to<E, S>(driver: &SharedDriver<E, S>) -> EventSink
where
    E: Effect + 'static,
    S: FrameScheduler + 'static,
{
    let weak = Rc::downgrade(driver);
    Rc::new(move |event: &InputEvent| {
        if let Some(driver) = weak.upgrade() {
            driver.borrow_mut().input(event);
        }
    })
}
