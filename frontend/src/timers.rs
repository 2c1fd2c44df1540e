use gloo_timers::callback::Timeout;

/// Source of one-shot delayed callbacks.
///
/// Dropping the returned handle must cancel the callback if it has not
/// fired yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setTimeout` through gloo.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimers;

impl Scheduler for BrowserTimers {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

/// A clock that only moves when told to, for driving timer code in tests.
#[cfg(test)]
pub mod manual {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::Scheduler;

    struct Task {
        due: u32,
        seq: u64,
        cancelled: Rc<Cell<bool>>,
        callback: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct State {
        now: u32,
        seq: u64,
        tasks: Vec<Task>,
        cancellations: usize,
    }

    #[derive(Clone, Default)]
    pub struct ManualClock {
        state: Rc<RefCell<State>>,
    }

    pub struct ManualHandle {
        cancelled: Rc<Cell<bool>>,
        state: Rc<RefCell<State>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            if !self.cancelled.replace(true) {
                // Handles can be dropped from inside a running callback.
                if let Ok(mut state) = self.state.try_borrow_mut() {
                    state.cancellations += 1;
                }
            }
        }
    }

    impl ManualClock {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u32 {
            self.state.borrow().now
        }

        /// Callbacks still armed: scheduled, not fired, not cancelled.
        pub fn pending(&self) -> usize {
            self.state
                .borrow()
                .tasks
                .iter()
                .filter(|task| !task.cancelled.get())
                .count()
        }

        /// Handles dropped before their callback ran.
        pub fn cancellations(&self) -> usize {
            self.state.borrow().cancellations
        }

        /// Moves time forward, running due callbacks in deadline order.
        pub fn advance(&self, ms: u32) {
            let target = self.now().saturating_add(ms);
            loop {
                let task = {
                    let mut state = self.state.borrow_mut();
                    let next = state
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, task)| task.due <= target)
                        .min_by_key(|(_, task)| (task.due, task.seq))
                        .map(|(index, _)| index);
                    match next {
                        Some(index) => {
                            let task = state.tasks.remove(index);
                            state.now = task.due;
                            task
                        }
                        None => break,
                    }
                };
                if !task.cancelled.replace(true) {
                    (task.callback)();
                }
            }
            self.state.borrow_mut().now = target;
        }
    }

    impl Scheduler for ManualClock {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            let mut state = self.state.borrow_mut();
            state.seq += 1;
            let task = Task {
                due: state.now.saturating_add(delay_ms),
                seq: state.seq,
                cancelled: cancelled.clone(),
                callback,
            };
            state.tasks.push(task);
            ManualHandle {
                cancelled,
                state: self.state.clone(),
            }
        }
    }
}
