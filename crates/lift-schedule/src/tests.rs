//! Unit tests for lift-schedule.

use lift_core::SimTime;

use crate::{Pacer, VirtualPacer, WakeQueue, WallClockPacer};

// ── WakeQueue ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod wake_queue {
    use super::*;

    #[test]
    fn empty_queue() {
        let mut q: WakeQueue<u32> = WakeQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.next_due(), None);
        assert_eq!(q.pop_next(), None);
        assert_eq!(q.pop_due(SimTime(1_000)), None);
    }

    #[test]
    fn pops_in_time_order() {
        let mut q = WakeQueue::new();
        q.push(SimTime(300), "c");
        q.push(SimTime(100), "a");
        q.push(SimTime(200), "b");
        assert_eq!(q.len(), 3);
        assert_eq!(q.pop_next(), Some((SimTime(100), "a")));
        assert_eq!(q.pop_next(), Some((SimTime(200), "b")));
        assert_eq!(q.pop_next(), Some((SimTime(300), "c")));
        assert!(q.is_empty());
    }

    #[test]
    fn same_instant_is_fifo() {
        let mut q = WakeQueue::new();
        q.push(SimTime(50), 1);
        q.push(SimTime(50), 2);
        q.push(SimTime(50), 3);
        assert_eq!(q.instant_count(), 1);
        let order: Vec<i32> = std::iter::from_fn(|| q.pop_next().map(|(_, w)| w)).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn pop_due_respects_horizon() {
        let mut q = WakeQueue::new();
        q.push(SimTime(100), 'x');
        q.push(SimTime(500), 'y');
        assert_eq!(q.pop_due(SimTime(99)), None);
        assert_eq!(q.pop_due(SimTime(100)), Some((SimTime(100), 'x')));
        assert_eq!(q.pop_due(SimTime(499)), None);
        assert_eq!(q.next_due(), Some(SimTime(500)));
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn push_behind_current_head_is_served_first() {
        let mut q = WakeQueue::new();
        q.push(SimTime(100), "later");
        q.push(SimTime(0), "now");
        assert_eq!(q.pop_due(SimTime(100)), Some((SimTime(0), "now")));
    }
}

// ── Pacers ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod pacer {
    use std::time::Duration;

    use super::*;

    #[test]
    fn virtual_pacer_does_not_block() {
        let start = std::time::Instant::now();
        VirtualPacer.wait(SimTime(0), SimTime(3_600_000));
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn wall_clock_scaling() {
        let p = WallClockPacer::new(10.0);
        assert_eq!(p.scaled(2_000), Duration::from_millis(200));
    }

    #[test]
    fn slow_pacing_of_huge_gap_is_capped() {
        let p = WallClockPacer::new(1e-12);
        assert_eq!(p.scaled(u64::MAX), Duration::MAX);
    }

    #[test]
    fn invalid_speed_falls_back_to_real_time() {
        assert_eq!(WallClockPacer::new(0.0).speed(), 1.0);
        assert_eq!(WallClockPacer::new(-3.0).speed(), 1.0);
        assert_eq!(WallClockPacer::new(f64::NAN).speed(), 1.0);
    }

    #[test]
    fn wall_clock_sleeps_for_gap() {
        let mut p = WallClockPacer::new(100.0);
        let start = std::time::Instant::now();
        p.wait(SimTime(0), SimTime(1_000));
        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}
