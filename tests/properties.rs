use proptest::prelude::*;
use skycast::domain::forecast::{ForecastSample, mode, summarize};

fn sample_strategy() -> impl Strategy<Value = ForecastSample> {
    (
        0u32..6,
        0u32..24,
        -40.0f64..45.0,
        prop::sample::select(vec!["clear sky", "light rain", "snow"]),
        prop::sample::select(vec!["01d", "10d", "13d"]),
    )
        .prop_map(|(day, hour, temperature, description, icon)| ForecastSample {
            timestamp: format!("2026-03-{:02}T{hour:02}:00:00", day + 1),
            temperature,
            description: description.to_string(),
            icon: icon.to_string(),
            humidity: None,
            wind_speed: None,
        })
}

proptest! {
    #[test]
    fn summarize_never_exceeds_three_days(
        samples in prop::collection::vec(sample_strategy(), 0..64)
    ) {
        prop_assert!(summarize(&samples).len() <= 3);
    }

    #[test]
    fn summaries_keep_min_mean_max_ordered(
        samples in prop::collection::vec(sample_strategy(), 1..64)
    ) {
        for day in summarize(&samples) {
            prop_assert!(day.min_temperature <= day.mean_temperature);
            prop_assert!(day.mean_temperature <= day.max_temperature);
        }
    }

    #[test]
    fn summaries_pick_description_from_the_input(
        samples in prop::collection::vec(sample_strategy(), 1..64)
    ) {
        let descriptions: Vec<&str> = samples.iter().map(|s| s.description.as_str()).collect();
        for day in summarize(&samples) {
            prop_assert!(descriptions.contains(&day.description.as_str()));
        }
    }

    #[test]
    fn mode_returns_a_member_or_empty(values in prop::collection::vec("[a-c]", 0..12)) {
        let refs: Vec<&str> = values.iter().map(String::as_str).collect();
        let result = mode(&refs);
        if values.is_empty() {
            prop_assert_eq!(result, "");
        } else {
            prop_assert!(values.contains(&result));
        }
    }
}
