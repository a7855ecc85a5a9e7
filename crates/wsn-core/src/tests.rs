//! Unit tests for wsn-core primitives.

#[cfg(test)]
mod ids {
    use crate::{NodeId, PoiId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(NodeId(0) < NodeId(1));
        assert!(PoiId(100) > PoiId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(PoiId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod geom {
    use crate::{Point2, Region};

    #[test]
    fn zero_distance() {
        let p = Point2::new(320.0, 320.0);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn pythagorean_distance() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
        assert!((a.distance_sq(b) - 25.0).abs() < 1e-4);
    }

    #[test]
    fn polar_offset_lands_at_distance() {
        let origin = Point2::new(100.0, 100.0);
        for i in 0..8 {
            let angle = i as f32 * std::f32::consts::FRAC_PI_4;
            let p = origin.polar_offset(angle, 25.0);
            assert!((origin.distance(p) - 25.0).abs() < 1e-3);
        }
    }

    #[test]
    fn region_center_and_bounds() {
        let r = Region::new(640.0, 10.0);
        assert_eq!(r.center(), Point2::new(320.0, 320.0));
        assert!(r.contains(r.center()));
        assert!(!r.contains(Point2::new(5.0, 320.0)));
        let clamped = r.clamp(Point2::new(-50.0, 700.0));
        assert!(r.contains(clamped));
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(100);
        assert_eq!(clock.elapsed_millis(), 0);
        clock.advance();
        clock.advance();
        assert_eq!(clock.elapsed_millis(), 200);
    }

    #[test]
    fn cadence_ticks_round_up() {
        let clock = SimClock::new(100);
        assert_eq!(clock.ticks_for_millis(1_000), 10);
        assert_eq!(clock.ticks_for_secs(5), 50);
        // partial tick rounds up
        assert_eq!(clock.ticks_for_millis(1), 1);
        assert_eq!(clock.ticks_for_millis(101), 2);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f32 = r1.gen_range(0.0..1.0);
            let b: f32 = r2.gen_range(0.0..1.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn children_diverge() {
        let mut root = SimRng::new(1);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        let a: u64 = c0.gen_range(0..u64::MAX);
        let b: u64 = c1.gen_range(0..u64::MAX);
        assert_ne!(a, b, "child streams should diverge");
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, ModelParams, SimConfig};

    #[test]
    fn validate_accepts_defaults() {
        assert!(SimConfig::new(30, 6, 120).validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_fields() {
        let mut zero_tick = SimConfig::new(3, 1, 100);
        zero_tick.tick_duration_millis = 0;
        for cfg in [
            SimConfig::new(0, 1, 100),
            SimConfig::new(3, 0, 100),
            SimConfig::new(3, 1, 0),
            zero_tick,
        ] {
            let err = cfg.validate().unwrap_err();
            assert!(matches!(err, CoreError::Config(_)));
        }
    }

    #[test]
    fn defaults() {
        let cfg = SimConfig::new(30, 6, 120);
        assert_eq!(cfg.tick_duration_millis, 100);
        assert_eq!(cfg.sensing_reach(), 60.0);
        assert_eq!(cfg.with_seed(7).seed, 7);
    }

    #[test]
    fn default_params_sane() {
        let p = ModelParams::default();
        assert!(p.idle_drain > 0.0);
        assert!(p.max_loss_fraction <= 0.2);
        assert!(p.forward_threshold >= 1);
        assert!(p.redundancy_range.is_none());
    }
}
