use std::cell::RefCell;
use std::rc::Rc;

use yew::Reducible;

use crate::timers::{BrowserTimers, Scheduler};

pub const ROTATION_INTERVAL_MS: u32 = 4000;
pub const SWIPE_THRESHOLD: f64 = 50.0;
pub const SCROLL_MULTIPLIER: f64 = 0.85;
pub const PROGRESS_DEBOUNCE_MS: u32 = 16;

/// Index into a fixed ring of steps, as used by the renovation slideshow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepCarousel {
    len: usize,
    active: usize,
}

impl StepCarousel {
    pub fn new(len: usize) -> Self {
        Self { len: len.max(1), active: 0 }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn advance(self) -> Self {
        self.shift(1)
    }

    pub fn select(self, index: usize) -> Self {
        if index < self.len {
            Self { active: index, ..self }
        } else {
            self
        }
    }

    /// `delta_x` is touch start minus touch end; a leftward swipe is positive.
    pub fn swipe(self, delta_x: f64) -> Self {
        if delta_x.abs() < SWIPE_THRESHOLD {
            return self;
        }
        self.shift(if delta_x > 0.0 { 1 } else { -1 })
    }

    fn shift(self, direction: isize) -> Self {
        let len = self.len as isize;
        let active = (self.active as isize + direction).rem_euclid(len) as usize;
        Self { active, ..self }
    }
}

pub enum CarouselAction {
    Advance,
    Swipe(f64),
    Select(usize),
}

impl Reducible for StepCarousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            CarouselAction::Advance => self.advance(),
            CarouselAction::Swipe(delta_x) => self.swipe(delta_x),
            CarouselAction::Select(index) => self.select(index),
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Horizontal scroll position as a percentage of the scrollable width.
pub fn scroll_progress(scroll_left: f64, scroll_width: f64, client_width: f64) -> f64 {
    let max = scroll_width - client_width;
    if max <= 0.0 {
        return 0.0;
    }
    (scroll_left / max * 100.0).clamp(0.0, 100.0)
}

pub fn scroll_step(client_width: f64) -> f64 {
    client_width * SCROLL_MULTIPLIER
}

/// Runs only the last of a burst of calls, `delay_ms` after it was made.
///
/// Dropping the debouncer clears a call that is still waiting.
pub struct Debouncer<S: Scheduler = BrowserTimers> {
    delay_ms: u32,
    scheduler: S,
    pending: RefCell<Option<S::Handle>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self::with_scheduler(delay_ms, BrowserTimers)
    }
}

impl<S: Scheduler> Debouncer<S> {
    pub fn with_scheduler(delay_ms: u32, scheduler: S) -> Self {
        Self {
            delay_ms,
            scheduler,
            pending: RefCell::new(None),
        }
    }

    pub fn call<F>(&self, f: F)
    where
        F: FnOnce() + 'static,
    {
        let handle = self.scheduler.schedule(self.delay_ms, Box::new(f));
        // Replacing the previous handle drops, and so clears, it.
        self.pending.replace(Some(handle));
    }
}

impl<S: Scheduler> Drop for Debouncer<S> {
    fn drop(&mut self) {
        self.pending.get_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timers::manual::ManualClock;
    use proptest::prelude::*;
    use std::cell::Cell;

    #[test]
    fn advance_wraps_around() {
        let carousel = StepCarousel::new(3);
        assert_eq!(carousel.active(), 0);
        let carousel = carousel.advance().advance();
        assert_eq!(carousel.active(), 2);
        assert_eq!(carousel.advance().active(), 0);
    }

    #[test]
    fn short_swipes_are_ignored() {
        let carousel = StepCarousel::new(3);
        assert_eq!(carousel.swipe(49.9).active(), 0);
        assert_eq!(carousel.swipe(-20.0).active(), 0);
    }

    #[test]
    fn swipe_direction_picks_neighbour() {
        let carousel = StepCarousel::new(3);
        assert_eq!(carousel.swipe(50.0).active(), 1);
        assert_eq!(carousel.swipe(-80.0).active(), 2);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let carousel = StepCarousel::new(3).select(2);
        assert_eq!(carousel.active(), 2);
        assert_eq!(carousel.select(3).active(), 2);
    }

    #[test]
    fn progress_handles_unscrollable_track() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(10.0, 700.0, 800.0), 0.0);
    }

    #[test]
    fn progress_is_a_percentage() {
        assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(1000.0, 2000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(1200.0, 2000.0, 1000.0), 100.0);
    }

    #[test]
    fn scroll_step_is_most_of_the_viewport() {
        assert_eq!(scroll_step(1000.0), 850.0);
    }

    #[test]
    fn reducer_keeps_state_for_ignored_actions() {
        let state = Rc::new(StepCarousel::new(3));
        let same = state.clone().reduce(CarouselAction::Swipe(10.0));
        assert!(Rc::ptr_eq(&state, &same));

        let moved = state.reduce(CarouselAction::Select(1));
        assert_eq!(moved.active(), 1);
    }

    #[test]
    fn debouncer_runs_only_the_last_call_of_a_burst() {
        let clock = ManualClock::new();
        let debouncer = Debouncer::with_scheduler(PROGRESS_DEBOUNCE_MS, clock.clone());
        let runs = Rc::new(RefCell::new(Vec::new()));

        for value in 1..=3 {
            let runs = runs.clone();
            debouncer.call(move || runs.borrow_mut().push(value));
            clock.advance(10);
        }
        assert!(runs.borrow().is_empty());

        clock.advance(PROGRESS_DEBOUNCE_MS);
        assert_eq!(*runs.borrow(), vec![3]);
        assert_eq!(clock.cancellations(), 2);
    }

    #[test]
    fn dropping_the_debouncer_clears_the_waiting_call() {
        let clock = ManualClock::new();
        let fired = Rc::new(Cell::new(false));
        {
            let debouncer = Debouncer::with_scheduler(PROGRESS_DEBOUNCE_MS, clock.clone());
            let fired = fired.clone();
            debouncer.call(move || fired.set(true));
            assert_eq!(clock.pending(), 1);
        }

        assert_eq!(clock.pending(), 0);
        clock.advance(1000);
        assert!(!fired.get());
    }

    proptest! {
        #[test]
        fn active_step_always_in_range(
            len in 1usize..8,
            moves in proptest::collection::vec(-200.0f64..200.0, 0..30),
        ) {
            let mut carousel = StepCarousel::new(len);
            for delta in moves {
                carousel = carousel.swipe(delta).advance();
                prop_assert!(carousel.active() < len);
            }
        }
    }
}
