//! Unit tests for sv-core primitives.

#[cfg(test)]
mod ids {
    use crate::{SlideId, StudentId, Weekday};

    #[test]
    fn index_roundtrip() {
        let id = StudentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(StudentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(StudentId(0) < StudentId(1));
        assert!(Weekday(5) > Weekday(1));
    }

    #[test]
    fn display() {
        assert_eq!(SlideId(7).to_string(), "SlideId(7)");
        assert_eq!(Weekday(3).to_string(), "Weekday(3)");
    }

    #[test]
    fn weekday_deserializes_from_plain_integer() {
        let days: Vec<Weekday> = serde_json::from_str("[1, 3, 5]").unwrap();
        assert_eq!(days, vec![Weekday(1), Weekday(3), Weekday(5)]);
    }
}

#[cfg(test)]
mod time {
    use crate::{DailyWindow, Second, SvError, parse_clock};

    #[test]
    fn second_arithmetic() {
        let s = Second(10);
        assert_eq!(s + 5, Second(15));
        assert_eq!(s.offset(-12), Second(-2));
        assert_eq!(Second(15) - Second(10), 5);
        assert_eq!(Second(-4).floor_zero(), Second::ZERO);
    }

    #[test]
    fn offsets_saturate_instead_of_overflowing() {
        assert_eq!(Second(i64::MAX - 1) + 5, Second(i64::MAX));
        assert_eq!(Second(i64::MIN + 1).offset(-5), Second(i64::MIN));
    }

    #[test]
    fn zero_is_always_a_boundary() {
        assert!(Second(0).is_multiple_of(1));
        assert!(Second(0).is_multiple_of(7));
        assert!(Second(14).is_multiple_of(7));
        assert!(!Second(15).is_multiple_of(7));
    }

    #[test]
    fn boundaries_since_counts_half_open_interval() {
        // (−1, 0] contains the boundary at 0.
        assert_eq!(Second(0).boundaries_since(Second(-1), 5), 1);
        // (0, 10] contains 5 and 10.
        assert_eq!(Second(10).boundaries_since(Second(0), 5), 2);
        // (10, 14] contains none.
        assert_eq!(Second(14).boundaries_since(Second(10), 5), 0);
        assert_eq!(Second(3).boundaries_since(Second(3), 1), 0);
    }

    #[test]
    fn next_boundary_is_strictly_after() {
        assert_eq!(Second(0).next_boundary(5), Second(5));
        assert_eq!(Second(4).next_boundary(5), Second(5));
        assert_eq!(Second(5).next_boundary(5), Second(10));
    }

    #[test]
    fn parse_clock_accepts_short_hours() {
        assert_eq!(parse_clock("07:30").unwrap(), 7 * 3600 + 30 * 60);
        assert_eq!(parse_clock("7:30").unwrap(), 7 * 3600 + 30 * 60);
        assert_eq!(parse_clock("23:59").unwrap(), 86_340);
    }

    #[test]
    fn parse_clock_rejects_garbage() {
        for bad in ["", "7", "24:00", "12:60", "12:5", "ab:cd", "123:00"] {
            assert!(matches!(parse_clock(bad), Err(SvError::Parse(_))), "{bad:?}");
        }
    }

    #[test]
    fn window_seconds() {
        let w = DailyWindow::parse("07:00", "17:00").unwrap();
        assert_eq!(w.seconds(), 36_000);
    }

    #[test]
    fn window_must_move_forward() {
        assert!(matches!(
            DailyWindow::parse("17:00", "07:00"),
            Err(SvError::Config(_))
        ));
        assert!(DailyWindow::parse("09:00", "09:00").is_err());
    }
}

#[cfg(test)]
mod rng {
    use rand::distributions::Uniform;

    use crate::{SimRng, StudentId, StudentRng, SvError};

    #[test]
    fn student_rngs_are_deterministic() {
        let dist = Uniform::new(0u32, 1_000_000);
        let mut a = StudentRng::new(7, StudentId(3));
        let mut b = StudentRng::new(7, StudentId(3));
        for _ in 0..16 {
            assert_eq!(a.sample(&dist), b.sample(&dist));
        }
    }

    #[test]
    fn different_students_diverge() {
        let dist = Uniform::new(0u64, u64::MAX);
        let mut a = StudentRng::new(7, StudentId(0));
        let mut b = StudentRng::new(7, StudentId(1));
        let xs: Vec<u64> = (0..8).map(|_| a.sample(&dist)).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.sample(&dist)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn sample_distinct_has_no_repeats() {
        let mut rng = SimRng::new(1);
        let mut picked = rng.sample_distinct(1_000_000, 500).unwrap();
        assert_eq!(picked.len(), 500);
        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), 500);
        assert!(picked.iter().all(|&i| i < 1_000_000));
    }

    #[test]
    fn sample_distinct_can_take_everything() {
        let mut rng = SimRng::new(1);
        let mut picked = rng.sample_distinct(5, 5).unwrap();
        picked.sort_unstable();
        assert_eq!(picked, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn oversampling_is_a_sampling_error() {
        let mut rng = SimRng::new(1);
        assert!(matches!(rng.sample_distinct(3, 4), Err(SvError::Sampling(_))));
        assert!(matches!(rng.choose_distinct(&[1, 2], 3), Err(SvError::Sampling(_))));
    }
}

#[cfg(test)]
mod config {
    use crate::{
        EmptyDayPolicy, HistogramRange, MAX_DISTRIBUTION_SECS, ModelConfig, StepMode, SvError, Weekday,
    };

    const FLAT: &str = r#"{
        "n_slides": 6,
        "weekdays": [1, 2, 3, 4, 5],
        "n_students": 50,
        "daily_start_time": "08:00",
        "daily_end_time": "16:00",
        "duration_cycle": 10,
        "sign_reset": true,
        "weeks": 2,
        "school_days": 3,
        "duration_timely": 0,
        "sd_timely": 60,
        "duration_visibility": 20,
        "sd_visibility": 4
    }"#;

    #[test]
    fn default_is_valid() {
        ModelConfig::default().validate().unwrap();
        assert_eq!(ModelConfig::default().seconds_per_day().unwrap(), 36_000);
    }

    #[test]
    fn flat_layout_loads_with_policy_defaults() {
        let c = ModelConfig::from_json_str(FLAT).unwrap();
        assert_eq!(c.n_slides, 6);
        assert_eq!(c.weekdays.len(), 5);
        assert!(c.sign_reset);
        assert_eq!(c.seed, 42);
        assert_eq!(c.empty_day, EmptyDayPolicy::Skip);
        assert_eq!(c.step_mode, StepMode::Event);
        assert_eq!(c.histogram, HistogramRange::Historic);
        assert_eq!(c.seconds_per_day().unwrap(), 8 * 3600);
    }

    #[test]
    fn verbose_layout_unwraps_values() {
        let text = r#"{
            "n_slides":            {"value": 4, "description": "faces on the sign"},
            "weekdays":            {"value": [2, 4]},
            "n_students":          {"value": 10},
            "daily_start_time":    {"value": "07:00"},
            "daily_end_time":      {"value": "07:30"},
            "duration_cycle":      {"value": 5},
            "sign_reset":          {"value": false},
            "weeks":               {"value": 1},
            "school_days":         {"value": 2},
            "duration_timely":     {"value": -10.5},
            "sd_timely":           {"value": 30},
            "duration_visibility": {"value": 12},
            "sd_visibility":       {"value": 2},
            "step_mode":           {"value": "per_second"}
        }"#;
        let c = ModelConfig::from_json_str(text).unwrap();
        assert_eq!(c.weekdays, vec![Weekday(2), Weekday(4)]);
        assert_eq!(c.duration_timely, -10.5);
        assert_eq!(c.step_mode, StepMode::PerSecond);
        assert_eq!(c.seconds_per_day().unwrap(), 1_800);
    }

    #[test]
    fn missing_key_is_config_error() {
        let text = FLAT.replace("\"n_slides\": 6,", "");
        assert!(matches!(ModelConfig::from_json_str(&text), Err(SvError::Config(_))));
    }

    #[test]
    fn unknown_key_is_config_error() {
        let text = FLAT.replace("\"weeks\": 2,", "\"weeks\": 2, \"colour\": \"red\",");
        assert!(matches!(ModelConfig::from_json_str(&text), Err(SvError::Config(_))));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(ModelConfig::from_json_str("{ nope"), Err(SvError::Parse(_))));
    }

    #[test]
    fn range_violations_are_rejected() {
        let cases: Vec<fn(&mut ModelConfig)> = vec![
            |c: &mut ModelConfig| c.n_slides = 0,
            |c: &mut ModelConfig| c.n_students = 0,
            |c: &mut ModelConfig| c.weeks = 0,
            |c: &mut ModelConfig| c.duration_cycle = 0,
            |c: &mut ModelConfig| c.weekdays.clear(),
            |c: &mut ModelConfig| c.weekdays = vec![Weekday(1), Weekday(1)],
            |c: &mut ModelConfig| c.school_days = 6,
            |c: &mut ModelConfig| c.sd_timely = -1.0,
            |c: &mut ModelConfig| c.sd_visibility = f64::NAN,
            |c: &mut ModelConfig| c.duration_visibility = f64::INFINITY,
            |c: &mut ModelConfig| c.duration_visibility = 1e19,
            |c: &mut ModelConfig| c.duration_timely = -1e7,
            |c: &mut ModelConfig| c.sd_timely = 86_401.0,
            |c: &mut ModelConfig| c.sd_visibility = 1e12,
            |c: &mut ModelConfig| c.daily_end_time = "06:00".into(),
            |c: &mut ModelConfig| c.daily_start_time = "seven".into(),
        ];
        for (i, mutate) in cases.into_iter().enumerate() {
            let mut c = ModelConfig::default();
            mutate(&mut c);
            assert!(
                matches!(c.validate(), Err(SvError::Config(_))),
                "case {i} should be rejected"
            );
        }
    }

    #[test]
    fn distribution_parameters_up_to_one_day_are_accepted() {
        let c = ModelConfig {
            duration_timely:     -MAX_DISTRIBUTION_SECS,
            sd_timely:           MAX_DISTRIBUTION_SECS,
            duration_visibility: MAX_DISTRIBUTION_SECS,
            sd_visibility:       0.0,
            ..Default::default()
        };
        c.validate().unwrap();
    }

    #[test]
    fn serialize_roundtrips_through_loader() {
        let c = ModelConfig { seed: 9, histogram: HistogramRange::Inclusive, ..Default::default() };
        let text = serde_json::to_string(&c).unwrap();
        assert_eq!(ModelConfig::from_json_str(&text).unwrap(), c);
    }
}
