//! Unit tests for sv-student.

#[cfg(test)]
mod seen_slides {
    use sv_core::SlideId;

    use crate::SeenSlides;

    #[test]
    fn record_deduplicates() {
        let mut seen = SeenSlides::new();
        assert!(seen.record(SlideId(2)));
        assert!(!seen.record(SlideId(2)));
        assert!(seen.record(SlideId(0)));
        assert_eq!(seen.len(), 2);
        assert_eq!(seen.sorted(), vec![SlideId(0), SlideId(2)]);
    }
}

#[cfg(test)]
mod daily_state {
    use sv_core::Second;

    use crate::DailyState;

    #[test]
    fn departure_is_arrival_plus_duration() {
        let d = DailyState::new(Second(100), 12);
        assert_eq!(d.departure, Second(112));
        assert_eq!(d.view_duration, 12);
        assert!(d.is_visible());
    }

    #[test]
    fn negative_duration_is_kept_raw_but_clamped() {
        let d = DailyState::new(Second(50), -7);
        assert_eq!(d.raw_view_duration, -7);
        assert_eq!(d.view_duration, 0);
        assert_eq!(d.departure, Second(50));
        assert!(!d.is_visible());
    }

    #[test]
    fn arrival_is_floored_at_zero() {
        let d = DailyState::new(Second(-30), 10);
        assert_eq!(d.arrival, Second::ZERO);
        assert_eq!(d.departure, Second(10));
    }
}

#[cfg(test)]
mod builder {
    use sv_core::{ModelConfig, Second, StudentId, SvError, Weekday};

    use crate::{DailyState, PopulationBuilder, StudentSeed};

    fn config(n_students: u32) -> ModelConfig {
        ModelConfig {
            n_students,
            daily_start_time: "08:00".into(),
            daily_end_time: "08:10".into(), // 600 arrival slots
            ..Default::default()
        }
    }

    #[test]
    fn sampled_population_has_sorted_distinct_arrivals_in_range() {
        let (store, rngs) = PopulationBuilder::from_config(&config(200)).unwrap().build().unwrap();
        assert_eq!(store.count, 200);
        assert_eq!(rngs.len(), 200);
        assert!(store.expected_arrival.windows(2).all(|w| w[0] < w[1]));
        assert!(store.expected_arrival.iter().all(|&s| s >= Second(1) && s <= Second(600)));
    }

    #[test]
    fn every_second_can_be_taken() {
        let (store, _) = PopulationBuilder::from_config(&config(600)).unwrap().build().unwrap();
        let expected: Vec<Second> = (1..=600).map(Second).collect();
        assert_eq!(store.expected_arrival, expected);
    }

    #[test]
    fn too_many_students_is_a_sampling_error() {
        let result = PopulationBuilder::from_config(&config(601)).unwrap().build();
        assert!(matches!(result, Err(SvError::Sampling(_))));
    }

    #[test]
    fn attendance_has_school_days_distinct_sorted_weekdays() {
        let c = config(50);
        let (store, _) = PopulationBuilder::from_config(&c).unwrap().build().unwrap();
        for days in &store.attendance {
            assert_eq!(days.len(), c.school_days as usize);
            assert!(days.windows(2).all(|w| w[0] < w[1]));
            assert!(days.iter().all(|d| c.weekdays.contains(d)));
        }
    }

    #[test]
    fn too_many_school_days_is_a_sampling_error() {
        let c = ModelConfig { school_days: 6, ..config(10) };
        let result = PopulationBuilder::from_config(&c).unwrap().build();
        assert!(matches!(result, Err(SvError::Sampling(_))));
    }

    #[test]
    fn same_seed_same_population() {
        let c = config(100);
        let (a, _) = PopulationBuilder::from_config(&c).unwrap().build().unwrap();
        let (b, _) = PopulationBuilder::from_config(&c).unwrap().build().unwrap();
        assert_eq!(a.expected_arrival, b.expected_arrival);
        assert_eq!(a.attendance, b.attendance);

        let (other, _) = PopulationBuilder::from_config(&ModelConfig { seed: 7, ..c })
            .unwrap()
            .build()
            .unwrap();
        assert_ne!(a.expected_arrival, other.expected_arrival);
    }

    #[test]
    fn explicit_population_is_taken_verbatim() {
        let (store, rngs) = PopulationBuilder::explicit(
            1,
            vec![
                StudentSeed::new(30, [Weekday(3), Weekday(1), Weekday(3)]),
                StudentSeed::new(10, [Weekday(2)]),
            ],
        )
        .build()
        .unwrap();
        assert_eq!(store.count, 2);
        assert_eq!(rngs.len(), 2);
        assert_eq!(store.expected_arrival, vec![Second(30), Second(10)]);
        assert_eq!(store.attendance[0], vec![Weekday(1), Weekday(3)]);
        assert!(store.daily(StudentId(0)).is_none());
        assert_eq!(store.seen_counts(), vec![0, 0]);
        assert!(store.contains(StudentId(1)));
        assert!(!store.contains(StudentId(2)));
    }

    #[test]
    fn clear_daily_unsets_every_student() {
        let (mut store, _) = PopulationBuilder::explicit(
            1,
            vec![StudentSeed::new(5, [Weekday(1)]), StudentSeed::new(9, [Weekday(1)])],
        )
        .build()
        .unwrap();
        store.daily[1] = Some(DailyState::new(Second(9), 4));
        assert!(store.daily(StudentId(1)).is_some());
        store.clear_daily();
        assert!(store.daily.iter().all(Option::is_none));
    }
}
