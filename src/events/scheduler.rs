// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Fixed-size periodic event scheduler.
//!
//! Each entry is a callback, a period in base ticks, and the tick at which it is next due.
//! [`Scheduler::dispatch`] runs from the main loop with the current tick count and invokes every
//! due callback in registration order, handing it the shared controller context.
//!
//! A fired entry is rescheduled relative to the tick it actually ran on (`now + period`), not to
//! its previous due tick. If the main loop falls behind, each entry fires once and resynchronizes
//! instead of bursting through the missed firings.

use heapless::Vec;

use super::Ticks;

/// Work run by the scheduler. Receives the controller context and the tag it was registered with.
pub type Callback<C> = fn(&mut C, EventTag);

/// Opaque value handed back to the callback unchanged.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EventTag(pub u8);

impl EventTag {
    pub const NONE: Self = Self(0);
}

/// Handle to a registered event (its slot in the table).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EventId(usize);

impl EventId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Registration failures. Both are configuration errors and should stop startup.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterError {
    /// Period must be at least one tick.
    ZeroPeriod,
    /// All slots of the event table are in use.
    TableFull,
    /// Period longer than [`MAX_PERIOD`]; the due check could not tell early from late.
    PeriodTooLong,
}

/// Longest period the wrap-aware due check can represent (half the tick range).
pub const MAX_PERIOD: Ticks = i32::MAX as Ticks;

struct Event<C> {
    callback: Callback<C>,
    period: Ticks,
    next_due: Ticks,
    tag: EventTag,
}

/// Periodic scheduler with room for `N` events over context type `C`.
pub struct Scheduler<C, const N: usize> {
    events: Vec<Event<C>, N>,
    /// Tick seen by the most recent dispatch pass.
    now: Ticks,
}

impl<C, const N: usize> Scheduler<C, N> {
    pub const fn new() -> Self {
        Self {
            events: Vec::new(),
            now: 0,
        }
    }

    /// Add a callback that fires every `period` ticks, first at `period` ticks from now.
    ///
    /// `period` must be in `1..=MAX_PERIOD`.
    pub fn register(
        &mut self,
        callback: Callback<C>,
        period: Ticks,
        tag: EventTag,
    ) -> Result<EventId, RegisterError> {
        if period == 0 {
            return Err(RegisterError::ZeroPeriod);
        }
        if period > MAX_PERIOD {
            return Err(RegisterError::PeriodTooLong);
        }

        let id = EventId(self.events.len());
        self.events
            .push(Event {
                callback,
                period,
                next_due: self.now.wrapping_add(period),
                tag,
            })
            .map_err(|_| RegisterError::TableFull)?;

        #[cfg(feature = "defmt")]
        defmt::info!("event {} registered, period {} ticks", id, period);

        Ok(id)
    }

    /// Run every callback that is due at tick `now`. Main loop only.
    ///
    /// Returns the number of callbacks invoked.
    pub fn dispatch(&mut self, now: Ticks, ctx: &mut C) -> usize {
        self.now = now;

        let mut fired = 0;
        for event in self.events.iter_mut() {
            if is_due(now, event.next_due) {
                (event.callback)(ctx, event.tag);
                event.next_due = now.wrapping_add(event.period);
                fired += 1;
            }
        }
        fired
    }

    /// Tick at which the event next fires.
    pub fn next_due(&self, id: EventId) -> Option<Ticks> {
        self.events.get(id.index()).map(|e| e.next_due)
    }

    pub fn period(&self, id: EventId) -> Option<Ticks> {
        self.events.get(id.index()).map(|e| e.period)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        N
    }
}

impl<C, const N: usize> Default for Scheduler<C, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// `now >= due`, tolerant of the tick counter wrapping.
#[inline]
fn is_due(now: Ticks, due: Ticks) -> bool {
    (now.wrapping_sub(due) as i32) >= 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Log {
        calls: std::vec::Vec<(u8, Ticks)>,
        now: Ticks,
    }

    fn record(log: &mut Log, tag: EventTag) {
        let now = log.now;
        log.calls.push((tag.0, now));
    }

    fn run(sched: &mut Scheduler<Log, 8>, log: &mut Log, ticks: core::ops::RangeInclusive<Ticks>) {
        for t in ticks {
            log.now = t;
            sched.dispatch(t, log);
        }
    }

    #[test]
    fn first_firing_is_one_period_after_registration() {
        let mut sched: Scheduler<Log, 8> = Scheduler::new();
        let id = sched.register(record, 100, EventTag(1)).unwrap();
        assert_eq!(sched.next_due(id), Some(100));
        assert_eq!(sched.period(id), Some(100));

        let mut log = Log::default();
        run(&mut sched, &mut log, 1..=99);
        assert!(log.calls.is_empty());

        run(&mut sched, &mut log, 100..=100);
        assert_eq!(log.calls, [(1, 100)]);
        assert_eq!(sched.next_due(id), Some(200));
    }

    #[test]
    fn fires_floor_n_over_period_times() {
        let periods = [100, 1000, 1000, 1100];
        let mut sched: Scheduler<Log, 8> = Scheduler::new();
        for (i, p) in periods.iter().enumerate() {
            sched.register(record, *p, EventTag(i as u8)).unwrap();
        }

        let n = 12_345;
        let mut log = Log::default();
        run(&mut sched, &mut log, 1..=n);

        for (i, p) in periods.iter().enumerate() {
            let count = log.calls.iter().filter(|(tag, _)| *tag == i as u8).count();
            assert_eq!(count as u32, n / p, "period {}", p);
        }
    }

    #[test]
    fn due_events_fire_in_registration_order() {
        let mut sched: Scheduler<Log, 8> = Scheduler::new();
        sched.register(record, 1000, EventTag(7)).unwrap();
        sched.register(record, 100, EventTag(3)).unwrap();
        sched.register(record, 1000, EventTag(5)).unwrap();

        let mut log = Log::default();
        log.now = 1000;
        assert_eq!(sched.dispatch(1000, &mut log), 3);

        let tags: std::vec::Vec<u8> = log.calls.iter().map(|(t, _)| *t).collect();
        assert_eq!(tags, [7, 3, 5]);
    }

    #[test]
    fn late_dispatch_fires_once_and_resynchronizes() {
        let mut sched: Scheduler<Log, 8> = Scheduler::new();
        let id = sched.register(record, 100, EventTag::NONE).unwrap();

        // Main loop stalled for several periods.
        let mut log = Log::default();
        log.now = 350;
        assert_eq!(sched.dispatch(350, &mut log), 1);
        assert_eq!(sched.dispatch(350, &mut log), 0);
        assert_eq!(sched.next_due(id), Some(450));

        run(&mut sched, &mut log, 351..=449);
        assert_eq!(log.calls.len(), 1);
        run(&mut sched, &mut log, 450..=450);
        assert_eq!(log.calls, [(0, 350), (0, 450)]);
    }

    #[test]
    fn rejects_zero_period() {
        let mut sched: Scheduler<Log, 8> = Scheduler::new();
        assert_eq!(
            sched.register(record, 0, EventTag::NONE),
            Err(RegisterError::ZeroPeriod)
        );
        assert!(sched.is_empty());
    }

    #[test]
    fn rejects_period_beyond_half_the_tick_range() {
        let mut sched: Scheduler<Log, 8> = Scheduler::new();
        assert_eq!(
            sched.register(record, 3_000_000_000, EventTag::NONE),
            Err(RegisterError::PeriodTooLong)
        );
        assert_eq!(
            sched.register(record, MAX_PERIOD + 1, EventTag::NONE),
            Err(RegisterError::PeriodTooLong)
        );
        assert!(sched.is_empty());
    }

    #[test]
    fn longest_period_does_not_fire_early() {
        let mut sched: Scheduler<Log, 8> = Scheduler::new();
        let id = sched.register(record, MAX_PERIOD, EventTag::NONE).unwrap();

        let mut log = Log::default();
        run(&mut sched, &mut log, 1..=1_000);
        log.now = MAX_PERIOD - 1;
        sched.dispatch(MAX_PERIOD - 1, &mut log);
        assert!(log.calls.is_empty());

        log.now = MAX_PERIOD;
        assert_eq!(sched.dispatch(MAX_PERIOD, &mut log), 1);
        assert_eq!(sched.next_due(id), Some(MAX_PERIOD.wrapping_add(MAX_PERIOD)));
    }

    #[test]
    fn rejects_registration_beyond_capacity() {
        let mut sched: Scheduler<Log, 2> = Scheduler::new();
        assert_eq!(sched.capacity(), 2);
        sched.register(record, 10, EventTag::NONE).unwrap();
        sched.register(record, 20, EventTag::NONE).unwrap();
        assert_eq!(
            sched.register(record, 30, EventTag::NONE),
            Err(RegisterError::TableFull)
        );
        assert_eq!(sched.len(), 2);
    }

    #[test]
    fn keeps_period_across_tick_wrap() {
        let mut sched: Scheduler<Log, 8> = Scheduler::new();
        let mut log = Log::default();

        let start = u32::MAX - 50;
        sched.dispatch(start, &mut log);
        let id = sched.register(record, 100, EventTag::NONE).unwrap();
        assert_eq!(sched.next_due(id), Some(49));

        // Before the wrap nothing is due even though `now > next_due` numerically.
        log.now = u32::MAX;
        assert_eq!(sched.dispatch(u32::MAX, &mut log), 0);

        run(&mut sched, &mut log, 0..=49);
        assert_eq!(log.calls, [(0, 49)]);
    }
}
