//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::LiftId;

    #[test]
    fn index_roundtrip() {
        let id = LiftId(3);
        assert_eq!(id.index(), 3);
        assert_eq!(LiftId::try_from(3usize).unwrap(), id);
    }

    #[test]
    fn ordering_follows_creation_order() {
        assert!(LiftId(0) < LiftId(1));
    }

    #[test]
    fn display() {
        assert_eq!(LiftId(7).to_string(), "lift #7");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimTime};

    #[test]
    fn offset_and_since() {
        let t = SimTime(1_000).offset(500);
        assert_eq!(t, SimTime(1_500));
        assert_eq!(t.since(SimTime(1_000)), 500);
        assert_eq!(SimTime(10).since(SimTime(20)), 0);
    }

    #[test]
    fn add_and_sub_operators() {
        assert_eq!(SimTime(5) + 7, SimTime(12));
        assert_eq!(SimTime(12) - SimTime(5), 7);
    }

    #[test]
    fn offset_saturates_at_end_of_time() {
        assert_eq!(SimTime(10).offset(u64::MAX), SimTime(u64::MAX));
        assert_eq!(SimTime(u64::MAX - 1) + 5, SimTime(u64::MAX));
    }

    #[test]
    fn clock_never_runs_backwards() {
        let mut clock = SimClock::new();
        clock.advance_to(SimTime(2_000));
        clock.advance_to(SimTime(1_000));
        assert_eq!(clock.now(), SimTime(2_000));
    }

    #[test]
    fn clock_display() {
        let mut clock = SimClock::new();
        clock.advance_to(SimTime(61_250));
        assert_eq!(clock.to_string(), "61250ms (01:01.250)");
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, SimConfig};

    #[test]
    fn defaults_match_documented_timings() {
        let cfg = SimConfig::new(10, 3);
        assert_eq!(cfg.lift_speed_per_floor_ms, 2_000);
        assert_eq!(cfg.door_open_ms, 2_500);
        assert_eq!(cfg.door_close_ms, 2_500);
        assert_eq!(cfg.loop_interval_ms, 100);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_floors_rejected() {
        let err = SimConfig::new(0, 1).validate().unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn zero_lifts_rejected() {
        assert!(SimConfig::new(5, 0).validate().is_err());
    }

    #[test]
    fn zero_loop_interval_rejected() {
        let cfg = SimConfig { loop_interval_ms: 0, ..SimConfig::new(5, 1) };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn floor_bounds_are_inclusive() {
        let cfg = SimConfig::new(3, 1);
        assert!(!cfg.is_valid_floor(0));
        assert!(cfg.is_valid_floor(1));
        assert!(cfg.is_valid_floor(3));
        assert!(!cfg.is_valid_floor(4));
    }
}
