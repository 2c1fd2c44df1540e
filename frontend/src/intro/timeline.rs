use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use yew::prelude::*;

use crate::intro::phase::{IntroVariant, Phase, PhaseSchedule};
use crate::intro::sequencer::{PhaseSequencer, SequenceEvent};
use crate::timers::{BrowserTimers, Scheduler};

/// Drives a `PhaseSequencer` from timers.
///
/// One timeout per schedule entry, all armed at activation. Each timeout
/// advances the shared sequencer to its own deadline, so a late timer can
/// only ever catch the sequence up, never reorder it.
pub struct Timeline<S: Scheduler = BrowserTimers> {
    sequencer: Rc<RefCell<PhaseSequencer>>,
    pending: Vec<S::Handle>,
}

impl Timeline {
    pub fn start<F>(schedule: PhaseSchedule, on_event: F) -> Self
    where
        F: Fn(SequenceEvent) + 'static,
    {
        Self::start_with(&BrowserTimers, schedule, on_event)
    }
}

impl<S: Scheduler> Timeline<S> {
    pub fn start_with<F>(scheduler: &S, schedule: PhaseSchedule, on_event: F) -> Self
    where
        F: Fn(SequenceEvent) + 'static,
    {
        let deadlines: Vec<u32> = schedule.entries().iter().map(|entry| entry.delay_ms).collect();
        let sequencer = Rc::new(RefCell::new(PhaseSequencer::new(schedule)));
        let on_event = Rc::new(on_event);

        let pending = deadlines
            .into_iter()
            .map(|deadline| {
                let sequencer = sequencer.clone();
                let on_event = on_event.clone();
                scheduler.schedule(
                    deadline,
                    Box::new(move || {
                        // Release the borrow before handing events out; listeners may tear us down.
                        let events = sequencer.borrow_mut().advance_to(deadline);
                        for event in events {
                            on_event(event);
                        }
                    }),
                )
            })
            .collect();

        Self { sequencer, pending }
    }

    pub fn stop(&mut self) {
        {
            let mut sequencer = self.sequencer.borrow_mut();
            if sequencer.is_cancelled() {
                return;
            }
            if !sequencer.is_complete() {
                debug!(
                    "intro timeline stopped in {:?}, next step was at {:?}ms",
                    sequencer.phase(),
                    sequencer.next_deadline()
                );
            }
            sequencer.cancel();
        }
        // Dropping a handle clears its timer.
        self.pending.clear();
    }
}

impl<S: Scheduler> Drop for Timeline<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Plays the variant's timeline for the lifetime of the calling component.
#[hook]
pub fn use_phase_sequence(variant: IntroVariant, on_complete: Callback<()>) -> Phase {
    let phase = use_state(|| Phase::INITIAL);

    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |variant| {
                let timeline = match variant.schedule() {
                    Ok(schedule) => Some(Timeline::start(schedule, move |event| match event {
                        SequenceEvent::PhaseChanged(next) => phase.set(next),
                        SequenceEvent::Completed => on_complete.emit(()),
                    })),
                    Err(e) => {
                        warn!("skipping {:?} intro: {}", variant, e);
                        on_complete.emit(());
                        None
                    }
                };
                move || drop(timeline)
            },
            variant,
        );
    }

    *phase
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timers::manual::ManualClock;

    fn recording(clock: &ManualClock) -> (Timeline<ManualClock>, Rc<RefCell<Vec<SequenceEvent>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let schedule = PhaseSchedule::from_delays([1500, 2000, 3500, 4200]).unwrap();
        let timeline = Timeline::start_with(clock, schedule, move |event| sink.borrow_mut().push(event));
        (timeline, events)
    }

    #[test]
    fn arms_one_timer_per_entry() {
        let clock = ManualClock::new();
        let (_timeline, events) = recording(&clock);
        assert_eq!(clock.pending(), 4);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn plays_the_whole_sequence_with_a_single_completion() {
        let clock = ManualClock::new();
        let (_timeline, events) = recording(&clock);

        clock.advance(1600);
        assert_eq!(*events.borrow(), vec![SequenceEvent::PhaseChanged(Phase::Morphing)]);

        clock.advance(10_000);
        assert_eq!(
            *events.borrow(),
            vec![
                SequenceEvent::PhaseChanged(Phase::Morphing),
                SequenceEvent::PhaseChanged(Phase::Logo),
                SequenceEvent::PhaseChanged(Phase::Reveal),
                SequenceEvent::Completed,
            ]
        );
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn stop_clears_every_pending_timer_once() {
        let clock = ManualClock::new();
        let (mut timeline, events) = recording(&clock);

        clock.advance(2100);
        timeline.stop();
        assert_eq!(clock.pending(), 0);
        assert_eq!(clock.cancellations(), 2);

        timeline.stop();
        drop(timeline);
        assert_eq!(clock.cancellations(), 2);

        clock.advance(10_000);
        assert_eq!(
            *events.borrow(),
            vec![
                SequenceEvent::PhaseChanged(Phase::Morphing),
                SequenceEvent::PhaseChanged(Phase::Logo),
            ]
        );
    }

    #[test]
    fn dropping_before_any_step_fires_nothing() {
        let clock = ManualClock::new();
        let (timeline, events) = recording(&clock);
        drop(timeline);

        assert_eq!(clock.cancellations(), 4);
        clock.advance(10_000);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn listener_may_stop_the_timeline_on_completion() {
        let clock = ManualClock::new();
        let slot: Rc<RefCell<Option<Timeline<ManualClock>>>> = Rc::new(RefCell::new(None));
        let completions = Rc::new(RefCell::new(0));

        let schedule = IntroVariant::Particles.schedule().unwrap();
        let timeline = {
            let slot = slot.clone();
            let completions = completions.clone();
            Timeline::start_with(&clock, schedule, move |event| {
                if event == SequenceEvent::Completed {
                    *completions.borrow_mut() += 1;
                    // The host unmounts the overlay as soon as it hears about completion.
                    drop(slot.borrow_mut().take());
                }
            })
        };
        *slot.borrow_mut() = Some(timeline);

        clock.advance(3800);
        clock.advance(10_000);
        assert_eq!(*completions.borrow(), 1);
        assert!(slot.borrow().is_none());
    }
}
