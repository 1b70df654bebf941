// Repeating per-frame task with explicit start/stop and an injected clock.
//
// The browser reschedules `requestAnimationFrame` only while `tick` keeps
// returning frames; tests step a `ManualClock` instead.

use instant::Instant;
use std::cell::Cell;
use std::time::Duration;

pub trait FrameClock {
    /// Monotonic time since an arbitrary origin.
    fn now(&self) -> Duration;
}

/// Wall-clock time (`performance.now()` in the browser).
pub struct InstantClock {
    origin: Instant,
}

impl Default for InstantClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl FrameClock for InstantClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock advanced by hand.
#[derive(Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn advance(&self, dt: Duration) {
        self.now.set(self.now.get() + dt);
    }
}

impl FrameClock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

impl<C: FrameClock + ?Sized> FrameClock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Idle,
    Running,
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameTick {
    pub index: u64,
    /// Wall time since the previous tick; zero for the first.
    pub dt: Duration,
}

pub struct FrameLoop<C: FrameClock> {
    clock: C,
    state: LoopState,
    frames: u64,
    last: Option<Duration>,
}

impl<C: FrameClock> FrameLoop<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            state: LoopState::Idle,
            frames: 0,
            last: None,
        }
    }

    /// Running -> Idle, e.g. while the page sits in the back/forward cache.
    /// The next `start` resumes with a zero `dt` rather than the time away.
    pub fn pause(&mut self) -> bool {
        if self.state != LoopState::Running {
            return false;
        }
        self.state = LoopState::Idle;
        self.last = None;
        log::info!("[frame] loop paused after {} frames", self.frames);
        true
    }

    /// Idle -> Running. Returns false if already running or stopped.
    pub fn start(&mut self) -> bool {
        if self.state != LoopState::Idle {
            return false;
        }
        self.state = LoopState::Running;
        true
    }

    /// Stop for good. Later ticks return `None`.
    pub fn stop(&mut self) {
        if self.state != LoopState::Stopped {
            log::info!("[frame] loop stopped after {} frames", self.frames);
        }
        self.state = LoopState::Stopped;
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn tick(&mut self) -> Option<FrameTick> {
        if !self.is_running() {
            return None;
        }
        let now = self.clock.now();
        let dt = self
            .last
            .map(|prev| now.saturating_sub(prev))
            .unwrap_or(Duration::ZERO);
        self.last = Some(now);
        let tick = FrameTick {
            index: self.frames,
            dt,
        };
        self.frames += 1;
        Some(tick)
    }
}
