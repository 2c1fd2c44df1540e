use crate::intro::phase::{Phase, PhaseSchedule, Step};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceEvent {
    PhaseChanged(Phase),
    Completed,
}

/// Plays a `PhaseSchedule` against elapsed time since activation.
///
/// The sequencer owns no clock. Whoever drives it reports elapsed
/// milliseconds and gets back the events that became due, in schedule
/// order. Once cancelled or completed nothing else is ever emitted.
#[derive(Debug)]
pub struct PhaseSequencer {
    schedule: PhaseSchedule,
    phase: Phase,
    next: usize,
    completed: bool,
    cancelled: bool,
}

impl PhaseSequencer {
    pub fn new(schedule: PhaseSchedule) -> Self {
        Self {
            schedule,
            phase: Phase::INITIAL,
            next: 0,
            completed: false,
            cancelled: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Delay of the next entry that has not fired, if the sequence is still live.
    pub fn next_deadline(&self) -> Option<u32> {
        if self.cancelled || self.completed {
            return None;
        }
        self.schedule.entries().get(self.next).map(|entry| entry.delay_ms)
    }

    pub fn advance_to(&mut self, elapsed_ms: u32) -> Vec<SequenceEvent> {
        let mut events = Vec::new();
        if self.cancelled {
            return events;
        }

        while let Some(entry) = self.schedule.entries().get(self.next) {
            if entry.delay_ms > elapsed_ms {
                break;
            }
            self.next += 1;
            match entry.step {
                Step::Advance(phase) => {
                    self.phase = phase;
                    events.push(SequenceEvent::PhaseChanged(phase));
                }
                Step::Complete => {
                    self.completed = true;
                    events.push(SequenceEvent::Completed);
                }
            }
        }

        events
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }
}
