//! The presentation boundary: step-event consumers and replay pacing.
//!
//! The engine resolves a whole turn synchronously and returns its steps as
//! data; nothing in the rules ever waits on a clock. Pacing is purely a
//! replay concern: a [`StepPacer`] feeds a [`TurnRecord`]'s events to a
//! [`Renderer`] with a configurable delay between steps, so the same
//! record animates slowly, quickly, or instantly with identical outcomes.

use std::thread;
use std::time::Duration;

use crate::engine::{StepEvent, TurnRecord};

/// A consumer of step events: drawing, highlighting, audio — all keyed
/// off the event kind and the board snapshot it carries.
pub trait Renderer {
    /// Present one step.
    fn on_step(&mut self, event: &StepEvent);
}

/// Closures are renderers; tests and simple frontends use this directly.
impl<F: FnMut(&StepEvent)> Renderer for F {
    fn on_step(&mut self, event: &StepEvent) {
        self(event)
    }
}

/// Replays step events with a real-time delay between them.
///
/// The delay may be changed mid-game (a "skip" control lowering it to
/// fast-forward through a long chain) without touching the engine.
#[derive(Clone, Copy, Debug)]
pub struct StepPacer {
    delay: Duration,
}

impl StepPacer {
    /// Create a pacer with the given inter-step delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// A pacer that replays without any delay.
    #[must_use]
    pub fn fast_forward() -> Self {
        Self::new(Duration::ZERO)
    }

    /// The current inter-step delay.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Change the inter-step delay.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Feed every event of a resolved turn to the renderer, sleeping
    /// between steps.
    pub fn replay(&self, record: &TurnRecord, renderer: &mut dyn Renderer) {
        self.replay_events(&record.events, renderer);
    }

    /// Feed a raw event slice to the renderer, sleeping between steps.
    pub fn replay_events(&self, events: &[StepEvent], renderer: &mut dyn Renderer) {
        for event in events {
            renderer.on_step(event);
            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
        }
    }
}
