//! Unit tests for qsim-core primitives.

#[cfg(test)]
mod ids {
    use crate::{RequestId, WorkerId};

    #[test]
    fn index_roundtrip() {
        let id = RequestId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(RequestId::try_from(42usize).unwrap(), id);
        assert_eq!(usize::from(WorkerId(7)), 7);
    }

    #[test]
    fn display() {
        assert_eq!(WorkerId(3).to_string(), "WorkerId(3)");
        assert_eq!(RequestId(0).to_string(), "RequestId(0)");
    }
}

#[cfg(test)]
mod time {
    use crate::{Clock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(15)), 0);
    }

    #[test]
    fn clock_starts_at_zero_and_advances_by_one() {
        let mut clock = Clock::new();
        assert_eq!(clock.now(), Tick::ZERO);
        clock.advance();
        clock.advance();
        assert_eq!(clock.now(), Tick(2));
        assert_eq!(clock.to_string(), "T2");
    }

    #[test]
    fn handles_observe_later_advances() {
        let mut clock = Clock::new();
        let early = clock.handle();
        clock.advance();
        let late = clock.handle();
        clock.advance();
        assert_eq!(early.now(), Tick(2));
        assert_eq!(late.now(), Tick(2));
        assert!(early.same_clock(&late));
        assert!(!early.same_clock(&Clock::new().handle()));
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, Discipline, SimConfig};

    #[test]
    fn default_is_valid() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.settle_intervals, 3);
        assert_eq!(cfg.discipline, Discipline::Fifo);
    }

    #[test]
    fn zero_interval_rejected() {
        let cfg = SimConfig { report_interval: 0, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn report_boundaries() {
        let cfg = SimConfig { report_interval: 3, ..SimConfig::default() };
        let hits: Vec<u64> = (0..9).filter(|&s| cfg.is_report_boundary(s)).collect();
        assert_eq!(hits, vec![2, 5, 8]);

        let every = SimConfig { report_interval: 1, ..SimConfig::default() };
        assert!((0..5).all(|s| every.is_report_boundary(s)));
    }
}

#[cfg(test)]
mod discipline {
    use crate::{CoreError, Discipline};

    #[test]
    fn parses_known_names() {
        assert_eq!("fifo".parse::<Discipline>().unwrap(), Discipline::Fifo);
        assert_eq!("LIFO".parse::<Discipline>().unwrap(), Discipline::Lifo);
        assert_eq!(Discipline::Lifo.to_string(), "lifo");
    }

    #[test]
    fn unknown_name_rejected() {
        let err = "random".parse::<Discipline>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownDiscipline(ref s) if s == "random"));
    }
}

#[cfg(test)]
mod rng {
    use crate::{WorkerId, WorkerRng};

    #[test]
    fn same_seed_same_sequence() {
        let mut a = WorkerRng::new(42, WorkerId(5));
        let mut b = WorkerRng::new(42, WorkerId(5));
        let xs: Vec<u32> = (0..8).map(|_| a.gen_range(0..1_000)).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.gen_range(0..1_000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn workers_get_distinct_streams() {
        let mut a = WorkerRng::new(42, WorkerId(0));
        let mut b = WorkerRng::new(42, WorkerId(1));
        let xs: Vec<u64> = (0..8).map(|_| a.gen_range(0..u64::MAX)).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.gen_range(0..u64::MAX)).collect();
        assert_ne!(xs, ys);
    }
}
