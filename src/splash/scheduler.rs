//! Virtual-clock timer queue.
//!
//! Timers carry a task value instead of a callback; the owner drains due
//! tasks with [`Scheduler::poll_until`] and reacts to each one, which lets a
//! handler arm new timers that fall due within the same advance. Dropping the
//! scheduler drops every pending timer.

use std::time::Duration;

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Cancellation handle returned by [`Scheduler::after`] and [`Scheduler::every`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Timer<T> {
    id: u64,
    due: Duration,
    seq: u64,
    period: Option<Duration>,
    task: T,
}

#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    next_seq: u64,
    timers: Vec<Timer<T>>,
}

impl<T: Clone> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            next_seq: 0,
            timers: Vec::new(),
        }
    }

    /// Time elapsed since the scheduler was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Fire `task` once, `delay` from now.
    pub fn after(&mut self, delay: Duration, task: T) -> TimerHandle {
        self.arm(delay, None, task)
    }

    /// Fire `task` every `period`, first at `now + period`.
    ///
    /// Periods shorter than one millisecond are rounded up to one.
    pub fn every(&mut self, period: Duration, task: T) -> TimerHandle {
        let period = period.max(MIN_PERIOD);
        self.arm(period, Some(period), task)
    }

    /// Returns false if the timer already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.timers.len();
        self.timers.retain(|timer| timer.id != handle.0);
        self.timers.len() != before
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.timers.iter().any(|timer| timer.id == handle.0)
    }

    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    pub fn clear(&mut self) {
        self.timers.clear();
    }

    /// Pop the earliest timer due at or before `deadline`.
    ///
    /// The clock moves to the fired timer's due time. Repeating timers are
    /// re-armed one period later. When nothing is due the clock moves to
    /// `deadline` and `None` is returned. Timers due at the same instant fire
    /// in the order they were armed.
    pub fn poll_until(&mut self, deadline: Duration) -> Option<T> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= deadline)
            .min_by_key(|(_, timer)| (timer.due, timer.seq))
            .map(|(index, _)| index);

        let Some(index) = index else {
            self.now = self.now.max(deadline);
            return None;
        };

        let due = self.timers[index].due;
        self.now = self.now.max(due);

        match self.timers[index].period {
            Some(period) => {
                let seq = self.bump_seq();
                let timer = &mut self.timers[index];
                timer.due = due + period;
                timer.seq = seq;
                Some(timer.task.clone())
            }
            None => Some(self.timers.remove(index).task),
        }
    }

    fn arm(&mut self, delay: Duration, period: Option<Duration>, task: T) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        let seq = self.bump_seq();
        self.timers.push(Timer {
            id,
            due: self.now + delay,
            seq,
            period,
            task,
        });
        TimerHandle(id)
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}

impl<T: Clone> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
