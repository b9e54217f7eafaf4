//! Time sources and deferred callbacks for the session engine.
//!
//! The engine never sleeps or reads the system time directly. Every delay
//! goes through a [`Scheduler`] and every timestamp through a [`Clock`], so
//! the same session logic runs on browser timers in production and on the
//! virtual [`ManualScheduler`] in tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::time::Duration;

/// Deferred work scheduled on a [`Scheduler`].
pub type Task = Box<dyn FnOnce()>;

/// Handle for cancelling a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Wall-clock source.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;
}

/// Single-threaded timer service.
pub trait Scheduler {
    /// Run `task` once after `delay`.
    fn schedule(&self, delay: Duration, task: Task) -> TimerId;

    /// Cancel a pending task. Cancelling a fired or unknown timer is a no-op.
    fn cancel(&self, id: TimerId);
}

// =============================================================================
// Native Clock
// =============================================================================

/// Clock backed by `std::time::SystemTime`. Not available on `wasm32`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

// =============================================================================
// Manual (virtual time) Scheduler
// =============================================================================

struct ManualInner {
    now: u64,
    next_id: u64,
    queue: BTreeMap<(u64, TimerId), Task>,
}

/// Virtual clock and scheduler driven explicitly by [`advance`](Self::advance).
///
/// Tasks due at the same instant run in scheduling order. A task may schedule
/// further tasks; those run within the same `advance` call if they fall due
/// before its target time.
#[derive(Clone)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ManualInner>>,
}

impl ManualScheduler {
    /// Create a scheduler whose clock starts at `start_millis`.
    pub fn new(start_millis: u64) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ManualInner {
                now: start_millis,
                next_id: 0,
                queue: BTreeMap::new(),
            })),
        }
    }

    /// Number of tasks still waiting to fire.
    pub fn pending(&self) -> usize {
        self.inner.borrow().queue.len()
    }

    /// Move virtual time forward by `by`, firing every task that falls due.
    pub fn advance(&self, by: Duration) {
        let target = self.inner.borrow().now + by.as_millis() as u64;
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                match inner.queue.keys().next().copied() {
                    Some(key) if key.0 <= target => {
                        inner.now = key.0;
                        inner.queue.remove(&key)
                    }
                    _ => None,
                }
            };
            // The borrow is released before running so the task may reschedule.
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.inner.borrow_mut().now = target;
    }

    /// Fire tasks until the queue is empty.
    ///
    /// Stops after `max_steps` tasks to guard against self-rescheduling
    /// tickers; returns the number of tasks run.
    pub fn run_until_idle(&self, max_steps: usize) -> usize {
        let mut steps = 0;
        while steps < max_steps {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let key = inner.queue.keys().next().copied();
                key.and_then(|key| {
                    inner.now = inner.now.max(key.0);
                    inner.queue.remove(&key)
                })
            };
            match next {
                Some(task) => {
                    task();
                    steps += 1;
                }
                None => break,
            }
        }
        steps
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Clock for ManualScheduler {
    fn now_millis(&self) -> u64 {
        self.inner.borrow().now
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerId {
        let mut inner = self.inner.borrow_mut();
        let id = TimerId(inner.next_id);
        inner.next_id += 1;
        let due = inner.now + delay.as_millis() as u64;
        inner.queue.insert((due, id), task);
        id
    }

    fn cancel(&self, id: TimerId) {
        self.inner.borrow_mut().queue.retain(|(_, key), _| *key != id);
    }
}

// =============================================================================
// Browser Clock and Scheduler
// =============================================================================

/// Clock backed by `Date.now()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

#[derive(Default)]
struct BrowserInner {
    next_id: u64,
    timeouts: HashMap<TimerId, gloo_timers::callback::Timeout>,
}

/// Scheduler backed by `setTimeout`.
///
/// Pending timeouts are owned by the scheduler; dropping one clears the
/// underlying browser timer, which is how cancellation works. A fired
/// timeout drops its own handle, so only pending timers are retained.
#[derive(Clone, Default)]
pub struct BrowserScheduler {
    inner: Rc<RefCell<BrowserInner>>,
}

impl BrowserScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of timeouts that have neither fired nor been cancelled.
    pub fn pending(&self) -> usize {
        self.inner.borrow().timeouts.len()
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerId {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = TimerId(inner.next_id);
            inner.next_id += 1;
            id
        };

        let weak = Rc::downgrade(&self.inner);
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let timeout = gloo_timers::callback::Timeout::new(millis, move || {
            // The timer has fired; dropping the handle frees its closure.
            if let Some(inner) = weak.upgrade() {
                drop(inner.borrow_mut().timeouts.remove(&id));
            }
            task();
        });

        self.inner.borrow_mut().timeouts.insert(id, timeout);
        id
    }

    fn cancel(&self, id: TimerId) {
        let removed = self.inner.borrow_mut().timeouts.remove(&id);
        if let Some(timeout) = removed {
            timeout.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_tasks_fire_in_due_order() {
        let sched = ManualScheduler::new(0);
        let log = Rc::new(RefCell::new(Vec::new()));

        for (delay, tag) in [(30, "c"), (10, "a"), (20, "b"), (10, "a2")] {
            let log = log.clone();
            sched.schedule(
                Duration::from_millis(delay),
                Box::new(move || log.borrow_mut().push(tag)),
            );
        }

        sched.advance(Duration::from_millis(15));
        assert_eq!(*log.borrow(), vec!["a", "a2"]);
        sched.advance(Duration::from_millis(100));
        assert_eq!(*log.borrow(), vec!["a", "a2", "b", "c"]);
        assert_eq!(sched.now_millis(), 115);
    }

    #[test]
    fn test_clock_reads_virtual_time_inside_task() {
        let sched = ManualScheduler::new(1_000);
        let seen = Rc::new(Cell::new(0));
        let (s, seen2) = (sched.clone(), seen.clone());
        sched.schedule(
            Duration::from_millis(250),
            Box::new(move || seen2.set(s.now_millis())),
        );
        sched.advance(Duration::from_secs(1));
        assert_eq!(seen.get(), 1_250);
    }

    #[test]
    fn test_nested_scheduling_within_advance() {
        let sched = ManualScheduler::new(0);
        let hits = Rc::new(Cell::new(0));
        let (s, h) = (sched.clone(), hits.clone());
        sched.schedule(
            Duration::from_millis(10),
            Box::new(move || {
                h.set(h.get() + 1);
                let h = h.clone();
                s.schedule(Duration::from_millis(10), Box::new(move || h.set(h.get() + 1)));
            }),
        );

        sched.advance(Duration::from_millis(20));
        assert_eq!(hits.get(), 2);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_cancel() {
        let sched = ManualScheduler::new(0);
        let fired = Rc::new(Cell::new(false));
        let f = fired.clone();
        let id = sched.schedule(Duration::from_millis(5), Box::new(move || f.set(true)));
        sched.cancel(id);
        sched.cancel(id);
        sched.advance(Duration::from_millis(10));
        assert!(!fired.get());
    }

    #[test]
    fn test_run_until_idle_bounded() {
        let sched = ManualScheduler::new(0);
        let count = Rc::new(Cell::new(0));

        fn tick(sched: ManualScheduler, count: Rc<Cell<u32>>) {
            let s = sched.clone();
            sched.schedule(
                Duration::from_millis(1),
                Box::new(move || {
                    count.set(count.get() + 1);
                    tick(s, count);
                }),
            );
        }
        tick(sched.clone(), count.clone());

        assert_eq!(sched.run_until_idle(5), 5);
        assert_eq!(count.get(), 5);
    }
}
