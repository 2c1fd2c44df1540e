use thiserror::Error;

/// A point in the intro timeline. Variants are declared in playback order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    Text,
    Morphing,
    Logo,
    Reveal,
}

impl Phase {
    pub const INITIAL: Phase = Phase::Text;

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Text => "text",
            Phase::Morphing => "morphing",
            Phase::Logo => "logo",
            Phase::Reveal => "reveal",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Advance(Phase),
    Complete,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("schedule has no entries")]
    Empty,
    #[error("delay {delay}ms at entry {index} does not come after {previous}ms")]
    DelayNotIncreasing { index: usize, delay: u32, previous: u32 },
    #[error("phase {phase:?} at entry {index} does not move the timeline forward")]
    PhaseNotForward { index: usize, phase: Phase },
    #[error("schedule must end with exactly one completion step")]
    MissingCompletion,
    #[error("completion step at entry {index} is not the last entry")]
    CompletionNotLast { index: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledStep {
    pub delay_ms: u32,
    pub step: Step,
}

/// Validated list of steps, each relative to the moment the intro starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhaseSchedule {
    entries: Vec<ScheduledStep>,
}

impl PhaseSchedule {
    pub fn new(entries: Vec<(u32, Step)>) -> Result<Self, ScheduleError> {
        if entries.is_empty() {
            return Err(ScheduleError::Empty);
        }

        let last = entries.len() - 1;
        let mut previous_delay: Option<u32> = None;
        let mut current_phase = Phase::INITIAL;

        for (index, (delay, step)) in entries.iter().enumerate() {
            if let Some(previous) = previous_delay {
                if *delay <= previous {
                    return Err(ScheduleError::DelayNotIncreasing {
                        index,
                        delay: *delay,
                        previous,
                    });
                }
            }
            previous_delay = Some(*delay);

            match step {
                Step::Advance(phase) => {
                    if index == last {
                        return Err(ScheduleError::MissingCompletion);
                    }
                    if *phase <= current_phase {
                        return Err(ScheduleError::PhaseNotForward { index, phase: *phase });
                    }
                    current_phase = *phase;
                }
                Step::Complete if index != last => {
                    return Err(ScheduleError::CompletionNotLast { index });
                }
                Step::Complete => {}
            }
        }

        Ok(Self {
            entries: entries
                .into_iter()
                .map(|(delay_ms, step)| ScheduledStep { delay_ms, step })
                .collect(),
        })
    }

    /// Canonical `morphing, logo, reveal, complete` timeline from four delays.
    pub fn from_delays(delays: [u32; 4]) -> Result<Self, ScheduleError> {
        let [morphing, logo, reveal, complete] = delays;
        Self::new(vec![
            (morphing, Step::Advance(Phase::Morphing)),
            (logo, Step::Advance(Phase::Logo)),
            (reveal, Step::Advance(Phase::Reveal)),
            (complete, Step::Complete),
        ])
    }

    pub fn entries(&self) -> &[ScheduledStep] {
        &self.entries
    }

    pub fn total_duration(&self) -> u32 {
        self.entries.last().map(|entry| entry.delay_ms).unwrap_or(0)
    }
}

/// Which overlay a page plays. Each variant pairs a timeline with a redraw effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroVariant {
    /// Drifting particles under a rotating light flare (About).
    Particles,
    /// Film grain noise regenerated every frame (Renovation).
    Grain,
}

impl IntroVariant {
    pub fn delays(&self) -> [u32; 4] {
        match self {
            IntroVariant::Particles => [1200, 1800, 3200, 3800],
            IntroVariant::Grain => [1500, 2000, 3500, 4200],
        }
    }

    pub fn schedule(&self) -> Result<PhaseSchedule, ScheduleError> {
        PhaseSchedule::from_delays(self.delays())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_are_ordered_by_playback() {
        assert!(Phase::Text < Phase::Morphing);
        assert!(Phase::Morphing < Phase::Logo);
        assert!(Phase::Logo < Phase::Reveal);
        assert_eq!(Phase::INITIAL, Phase::Text);
    }

    #[test]
    fn from_delays_builds_canonical_timeline() {
        let schedule = PhaseSchedule::from_delays([1500, 2000, 3500, 4200]).unwrap();
        assert_eq!(schedule.entries().len(), 4);
        assert_eq!(schedule.total_duration(), 4200);
        assert_eq!(schedule.entries()[0].step, Step::Advance(Phase::Morphing));
        assert_eq!(schedule.entries()[3].step, Step::Complete);
    }

    #[test]
    fn rejects_empty_schedule() {
        assert_eq!(PhaseSchedule::new(vec![]), Err(ScheduleError::Empty));
    }

    #[test]
    fn rejects_non_increasing_delays() {
        let err = PhaseSchedule::from_delays([1500, 1500, 3500, 4200]).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::DelayNotIncreasing { index: 1, delay: 1500, previous: 1500 }
        );
    }

    #[test]
    fn rejects_backwards_phase() {
        let err = PhaseSchedule::new(vec![
            (100, Step::Advance(Phase::Logo)),
            (200, Step::Advance(Phase::Morphing)),
            (300, Step::Complete),
        ])
        .unwrap_err();
        assert_eq!(err, ScheduleError::PhaseNotForward { index: 1, phase: Phase::Morphing });
    }

    #[test]
    fn rejects_initial_phase_as_transition() {
        let err = PhaseSchedule::new(vec![(100, Step::Advance(Phase::Text)), (200, Step::Complete)])
            .unwrap_err();
        assert_eq!(err, ScheduleError::PhaseNotForward { index: 0, phase: Phase::Text });
    }

    #[test]
    fn completion_must_be_last_and_present() {
        assert_eq!(
            PhaseSchedule::new(vec![(100, Step::Advance(Phase::Logo))]),
            Err(ScheduleError::MissingCompletion)
        );
        assert_eq!(
            PhaseSchedule::new(vec![(100, Step::Complete), (200, Step::Complete)]),
            Err(ScheduleError::CompletionNotLast { index: 0 })
        );
    }

    #[test]
    fn completion_only_schedule_is_valid() {
        let schedule = PhaseSchedule::new(vec![(250, Step::Complete)]).unwrap();
        assert_eq!(schedule.total_duration(), 250);
    }

    #[test]
    fn variant_schedules_pass_validation() {
        for variant in [IntroVariant::Particles, IntroVariant::Grain] {
            let schedule = variant.schedule().unwrap();
            assert_eq!(schedule.entries().len(), 4);
            assert_eq!(schedule.total_duration(), variant.delays()[3]);
        }
        assert_eq!(IntroVariant::Particles.schedule().unwrap().total_duration(), 3800);
    }
}
