//! Unit tests for qsim-worker.

#[cfg(test)]
mod fixed_tests {
    use qsim_request::{RequestRegister, RequestStatus};

    use crate::{FixedWorker, Worker, WorkerError};

    #[test]
    fn zero_service_time_rejected() {
        assert_eq!(FixedWorker::new(0).unwrap_err(), WorkerError::ZeroServiceTime);
    }

    #[test]
    fn completes_after_exactly_d_ticks() {
        for d in 1..=5 {
            let mut reg = RequestRegister::new();
            let id = reg.start();
            let mut w = FixedWorker::new(d).unwrap();
            assert!(w.is_free());

            w.assign(&mut reg[id]);
            assert!(!w.is_free());
            assert_eq!(w.remaining(), d);

            for call in 1..d {
                reg.tick();
                assert_eq!(w.tick(&mut reg), None, "d={d}: early completion on call {call}");
                assert!(!reg[id].is_complete());
            }
            reg.tick();
            assert_eq!(w.tick(&mut reg), Some(id));
            assert!(w.is_free());
            assert_eq!(w.remaining(), 0);

            let r = &reg[id];
            assert_eq!(r.status(), Some(RequestStatus::Success));
            assert_eq!(r.service_time(), d);
            assert_eq!(r.response_time(), d);
        }
    }

    #[test]
    fn reusable_after_completion() {
        let mut reg = RequestRegister::new();
        let a = reg.start();
        let b = reg.start();
        let mut w = FixedWorker::new(1).unwrap();
        w.assign(&mut reg[a]);
        reg.tick();
        assert_eq!(w.tick(&mut reg), Some(a));
        w.assign(&mut reg[b]);
        reg.tick();
        assert_eq!(w.tick(&mut reg), Some(b));
        assert_eq!(reg[b].response_time(), 2);
        assert_eq!(reg[b].service_time(), 1);
    }

    #[test]
    fn clear_unbinds_without_completing() {
        let mut reg = RequestRegister::new();
        let id = reg.start();
        let mut w = FixedWorker::new(4).unwrap();
        w.assign(&mut reg[id]);
        w.clear();
        assert!(w.is_free());
        assert!(!reg[id].is_complete());
    }

    #[test]
    #[should_panic(expected = "busy worker")]
    fn assign_to_busy_worker_panics() {
        let mut reg = RequestRegister::new();
        let a = reg.start();
        let b = reg.start();
        let mut w = FixedWorker::new(2).unwrap();
        w.assign(&mut reg[a]);
        w.assign(&mut reg[b]);
    }

    #[test]
    #[should_panic(expected = "idle worker")]
    fn tick_on_idle_worker_panics() {
        let mut reg = RequestRegister::new();
        let mut w = FixedWorker::new(2).unwrap();
        let _ = w.tick(&mut reg);
    }
}

#[cfg(test)]
mod random_tests {
    use qsim_core::{WorkerId, WorkerRng};
    use qsim_request::RequestRegister;

    use crate::{DurationSampler, GeometricSampler, RandomWorker, Worker, WorkerError};

    #[test]
    fn invalid_means_rejected() {
        for mean in [0.0, -2.0, 0.5, f64::NAN, f64::INFINITY] {
            let rng = WorkerRng::new(1, WorkerId(0));
            assert!(
                matches!(RandomWorker::new(mean, rng), Err(WorkerError::InvalidMean(_))),
                "mean {mean} accepted"
            );
        }
        assert!(RandomWorker::with_sampler(0.0, || 3).is_err());
    }

    #[test]
    fn mean_of_one_always_serves_one_tick() {
        let mut sampler = GeometricSampler::new(1.0, WorkerRng::new(9, WorkerId(0))).unwrap();
        assert!((0..100).all(|_| sampler.sample() == 1));
    }

    #[test]
    fn geometric_samples_are_positive_and_average_near_mean() {
        let mut sampler = GeometricSampler::new(8.0, WorkerRng::new(42, WorkerId(3))).unwrap();
        let n = 20_000;
        let samples: Vec<u64> = (0..n).map(|_| sampler.sample()).collect();
        assert!(samples.iter().all(|&s| s >= 1));
        let mean = samples.iter().sum::<u64>() as f64 / n as f64;
        assert!((mean - 8.0).abs() < 0.5, "sample mean {mean}");
    }

    #[test]
    fn same_seed_reproduces_durations() {
        let draw = |seed| {
            let mut reg = RequestRegister::new();
            let mut w = RandomWorker::new(5.0, WorkerRng::new(seed, WorkerId(2))).unwrap();
            (0..20)
                .map(|_| {
                    let id = reg.start();
                    w.assign(&mut reg[id]);
                    let d = w.remaining();
                    w.clear();
                    d
                })
                .collect::<Vec<u64>>()
        };
        assert_eq!(draw(7), draw(7));
    }

    #[test]
    fn custom_sampler_drives_completion() {
        let mut durations = vec![3u64, 1, 0].into_iter();
        let mut w = RandomWorker::with_sampler(2.0, move || durations.next().unwrap_or(1)).unwrap();
        assert_eq!(w.mean(), 2.0);

        let mut reg = RequestRegister::new();
        let mut served = Vec::new();
        for _ in 0..3 {
            let id = reg.start();
            w.assign(&mut reg[id]);
            let mut ticks = 0;
            loop {
                reg.tick();
                ticks += 1;
                if let Some(done) = w.tick(&mut reg) {
                    assert_eq!(done, id);
                    break;
                }
            }
            served.push(ticks);
        }
        // A sampled 0 is clamped to one tick.
        assert_eq!(served, vec![3, 1, 1]);
    }

    #[test]
    #[should_panic(expected = "busy worker")]
    fn assign_to_busy_random_worker_panics() {
        let mut reg = RequestRegister::new();
        let a = reg.start();
        let b = reg.start();
        let mut w = RandomWorker::with_sampler(2.0, || 5).unwrap();
        w.assign(&mut reg[a]);
        w.assign(&mut reg[b]);
    }
}
