//! Frame driver: one unit of work per display refresh for as long as an
//! effect is mounted.
//!
//! The driver is backend-agnostic. Rendering backends plug in through
//! [`Effect`], the refresh scheduler through [`FrameScheduler`]. In the
//! browser the scheduler wraps `requestAnimationFrame`; tests drive
//! [`FrameDriver::tick`] by hand.

use crate::clock::MountClock;
use crate::error::FrameError;
use crate::input::{EventKind, InputEvent};

/// Cancellable registration token for a pending frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationHandle(i32);

impl AnimationHandle {
    pub const fn from_raw(id: i32) -> Self {
        Self(id)
    }

    pub const fn raw(&self) -> i32 {
        self.0
    }
}

/// Refresh-synchronized scheduler ("run once before the next repaint").
pub trait FrameScheduler {
    /// Registers the driver's callback for the next refresh.
    fn request_frame(&mut self) -> Result<AnimationHandle, FrameError>;

    /// Cancels a pending registration. Unknown or already-fired handles are
    /// ignored.
    fn cancel_frame(&mut self, handle: AnimationHandle);
}

/// Capability interface implemented once per rendering backend.
pub trait Effect {
    /// Advances state to `elapsed` seconds since mount and writes the new
    /// visual output. Must return quickly.
    fn frame(&mut self, elapsed: f64);

    /// Window-level events this effect wants delivered.
    fn listens(&self) -> &'static [EventKind] {
        &[]
    }

    /// Applied synchronously when a subscribed event fires.
    fn input(&mut self, _event: &InputEvent) {}

    /// Releases every owned render resource. Called at most once per mount by
    /// the driver, but implementations still guard against repeats.
    fn teardown(&mut self) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
    Stopped,
}

/// Registration counters, kept for leak accounting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameLedger {
    pub starts: u32,
    pub stops: u32,
    pub ticks: u64,
}

pub struct FrameDriver<E, S> {
    effect: E,
    scheduler: S,
    clock: MountClock,
    pending: Option<AnimationHandle>,
    state: DriverState,
    ledger: FrameLedger,
}

impl<E: Effect, S: FrameScheduler> FrameDriver<E, S> {
    pub fn new(effect: E, scheduler: S) -> Self {
        Self {
            effect,
            scheduler,
            clock: MountClock::default(),
            pending: None,
            state: DriverState::Idle,
            ledger: FrameLedger::default(),
        }
    }

    /// Starts the loop with the mount clock anchored at `now_ms`.
    pub fn start(&mut self, now_ms: f64) -> Result<AnimationHandle, FrameError> {
        match self.state {
            DriverState::Running => return Err(FrameError::AlreadyRunning),
            DriverState::Stopped => return Err(FrameError::Stopped),
            DriverState::Idle => {}
        }
        let handle = self.scheduler.request_frame()?;
        self.clock = MountClock::starting_at(now_ms);
        self.pending = Some(handle);
        self.state = DriverState::Running;
        self.ledger.starts += 1;
        Ok(handle)
    }

    /// Scheduler entry point. Runs one frame and re-registers for the next.
    /// Returns false when the driver is not running and nothing was done.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if self.state != DriverState::Running {
            return false;
        }
        self.pending = None;
        let elapsed = self.clock.elapsed(now_ms);
        self.effect.frame(elapsed);
        self.ledger.ticks += 1;

        match self.scheduler.request_frame() {
            Ok(handle) => self.pending = Some(handle),
            Err(err) => {
                log::warn!("frame loop halted: {}", err);
                self.halt();
            }
        }
        true
    }

    /// Cancels the pending frame, if any. Safe to call repeatedly; once it
    /// returns no further `tick` does any work.
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        if self.state == DriverState::Running {
            self.halt();
        } else {
            self.state = DriverState::Stopped;
        }
    }

    /// Forwards a window event to the effect unless the loop is finished.
    pub fn input(&mut self, event: &InputEvent) {
        if self.state != DriverState::Stopped {
            self.effect.input(event);
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn pending(&self) -> Option<AnimationHandle> {
        self.pending
    }

    pub fn ledger(&self) -> FrameLedger {
        self.ledger
    }

    pub fn effect(&self) -> &E {
        &self.effect
    }

    pub fn effect_mut(&mut self) -> &mut E {
        &mut self.effect
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn halt(&mut self) {
        self.state = DriverState::Stopped;
        self.ledger.stops += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        next: i32,
        cancelled: Vec<AnimationHandle>,
        fail_after: Option<i32>,
    }

    impl FrameScheduler for Counter {
        fn request_frame(&mut self) -> Result<AnimationHandle, FrameError> {
            if Some(self.next) == self.fail_after {
                return Err(FrameError::Platform("no window".into()));
            }
            self.next += 1;
            Ok(AnimationHandle::from_raw(self.next))
        }

        fn cancel_frame(&mut self, handle: AnimationHandle) {
            self.cancelled.push(handle);
        }
    }

    #[derive(Default)]
    struct Times(Vec<f64>);

    impl Effect for Times {
        fn frame(&mut self, elapsed: f64) {
            self.0.push(elapsed);
        }
    }

    #[test]
    fn ticks_report_time_since_start() {
        let mut driver = FrameDriver::new(Times::default(), Counter::default());
        driver.start(5000.0).unwrap();
        driver.tick(5000.0);
        driver.tick(5500.0);
        assert_eq!(driver.effect().0, vec![0.0, 0.5]);
        assert_eq!(driver.pending(), Some(AnimationHandle::from_raw(3)));
    }

    #[test]
    fn second_start_is_rejected() {
        let mut driver = FrameDriver::new(Times::default(), Counter::default());
        driver.start(0.0).unwrap();
        assert_eq!(driver.start(0.0), Err(FrameError::AlreadyRunning));
        assert_eq!(driver.ledger().starts, 1);
    }

    #[test]
    fn stop_cancels_the_pending_frame_once() {
        let mut driver = FrameDriver::new(Times::default(), Counter::default());
        let handle = driver.start(0.0).unwrap();
        driver.stop();
        driver.stop();
        assert_eq!(driver.scheduler().cancelled, vec![handle]);
        assert_eq!(driver.ledger().stops, 1);
        assert!(!driver.tick(16.0));
        assert!(driver.effect().0.is_empty());
        assert_eq!(driver.start(0.0), Err(FrameError::Stopped));
    }

    #[test]
    fn stop_before_start_is_a_no_op() {
        let mut driver = FrameDriver::new(Times::default(), Counter::default());
        driver.stop();
        assert!(driver.scheduler().cancelled.is_empty());
        assert_eq!(driver.ledger(), FrameLedger::default());
    }

    #[test]
    fn scheduler_failure_halts_the_loop() {
        let scheduler = Counter {
            fail_after: Some(1),
            ..Counter::default()
        };
        let mut driver = FrameDriver::new(Times::default(), scheduler);
        driver.start(0.0).unwrap();
        assert!(driver.tick(16.0));
        assert_eq!(driver.state(), DriverState::Stopped);
        assert_eq!(driver.pending(), None);
        let ledger = driver.ledger();
        assert_eq!(ledger.starts, ledger.stops);
    }
}
