use crate::domain::forecast::{CurrentWeather, Units};

const MPH_TO_KMH: f64 = 1.60934;

#[must_use]
pub fn humidity_label(humidity: f64) -> &'static str {
    if humidity < 30.0 {
        "Dry air"
    } else if humidity < 60.0 {
        "Comfortable"
    } else if humidity < 80.0 {
        "Moderately humid"
    } else {
        "Very humid"
    }
}

#[must_use]
pub fn wind_kmh(speed: f64, units: Units) -> f64 {
    match units {
        Units::Metric => speed,
        Units::Imperial => speed * MPH_TO_KMH,
    }
}

#[must_use]
pub fn wind_label(speed: f64, units: Units) -> &'static str {
    let kmh = wind_kmh(speed, units);
    if kmh < 5.0 {
        "Calm"
    } else if kmh < 12.0 {
        "Light breeze"
    } else if kmh < 20.0 {
        "Moderate breeze"
    } else if kmh < 30.0 {
        "Strong breeze"
    } else {
        "High winds"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tip {
    pub icon: &'static str,
    pub title: &'static str,
    pub message: &'static str,
}

const COLD_TIP: Tip = Tip {
    icon: "☁",
    title: "Cold Weather Alert",
    message: "Wear warm layers and protect exposed skin",
};

const HEAT_TIP: Tip = Tip {
    icon: "☀",
    title: "Heat Advisory",
    message: "Stay hydrated and avoid direct sunlight",
};

const RAIN_TIP: Tip = Tip {
    icon: "☂",
    title: "Rain Expected",
    message: "Carry an umbrella or raincoat",
};

const WIND_TIP: Tip = Tip {
    icon: "💨",
    title: "Windy Conditions",
    message: "Secure loose objects outdoors",
};

// Appended in order until the list holds two entries.
const GENERIC_TIPS: [Tip; 2] = [
    Tip {
        icon: "➤",
        title: "Ideal Conditions",
        message: "Great day for outdoor activities",
    },
    Tip {
        icon: "✦",
        title: "Plan Ahead",
        message: "Check back before heading out tomorrow",
    },
];

/// Builds the advisory tips for the current conditions. Always returns at
/// least two entries; quiet days are padded with the generic tips.
#[must_use]
pub fn weather_tips(current: &CurrentWeather, units: Units) -> Vec<Tip> {
    let mut tips = Vec::new();

    let cold_limit = match units {
        Units::Metric => 10.0,
        Units::Imperial => 50.0,
    };
    let heat_limit = match units {
        Units::Metric => 30.0,
        Units::Imperial => 86.0,
    };
    if current.temperature < cold_limit {
        tips.push(COLD_TIP);
    } else if current.temperature > heat_limit {
        tips.push(HEAT_TIP);
    }

    if current.description.to_lowercase().contains("rain") {
        tips.push(RAIN_TIP);
    }

    if wind_kmh(current.wind_speed, units) > 20.0 {
        tips.push(WIND_TIP);
    }

    for generic in GENERIC_TIPS {
        if tips.len() >= 2 {
            break;
        }
        tips.push(generic);
    }

    tips
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current(temperature: f64, description: &str, humidity: f64, wind_speed: f64) -> CurrentWeather {
        CurrentWeather {
            location: "Nairobi".to_string(),
            temperature,
            description: description.to_string(),
            humidity,
            wind_speed,
            icon: Some("01d".to_string()),
        }
    }

    #[test]
    fn humidity_boundaries() {
        assert_eq!(humidity_label(29.9), "Dry air");
        assert_eq!(humidity_label(30.0), "Comfortable");
        assert_eq!(humidity_label(59.9), "Comfortable");
        assert_eq!(humidity_label(60.0), "Moderately humid");
        assert_eq!(humidity_label(80.0), "Very humid");
    }

    #[test]
    fn wind_boundaries_metric() {
        assert_eq!(wind_label(4.9, Units::Metric), "Calm");
        assert_eq!(wind_label(5.0, Units::Metric), "Light breeze");
        assert_eq!(wind_label(12.0, Units::Metric), "Moderate breeze");
        assert_eq!(wind_label(20.0, Units::Metric), "Strong breeze");
        assert_eq!(wind_label(30.0, Units::Metric), "High winds");
    }

    #[test]
    fn wind_label_normalizes_imperial() {
        // 12.5 mph is ~20.1 km/h, past the moderate/strong boundary
        assert_eq!(wind_label(12.5, Units::Imperial), "Strong breeze");
        assert_eq!(wind_label(2.0, Units::Imperial), "Calm");
    }

    #[test]
    fn cold_and_heat_tips_respect_unit_thresholds() {
        let tips = weather_tips(&current(9.9, "clear sky", 40.0, 3.0), Units::Metric);
        assert_eq!(tips[0], COLD_TIP);

        let tips = weather_tips(&current(49.0, "clear sky", 40.0, 3.0), Units::Imperial);
        assert_eq!(tips[0], COLD_TIP);

        let tips = weather_tips(&current(31.0, "clear sky", 40.0, 3.0), Units::Metric);
        assert_eq!(tips[0], HEAT_TIP);

        // 30 C exactly is neither cold nor hot
        let tips = weather_tips(&current(30.0, "clear sky", 40.0, 3.0), Units::Metric);
        assert!(!tips.contains(&HEAT_TIP));
        assert!(!tips.contains(&COLD_TIP));
    }

    #[test]
    fn rain_tip_matches_description_case_insensitively() {
        let tips = weather_tips(&current(20.0, "Light RAIN showers", 70.0, 3.0), Units::Metric);
        assert!(tips.contains(&RAIN_TIP));

        let tips = weather_tips(&current(20.0, "overcast clouds", 70.0, 3.0), Units::Metric);
        assert!(!tips.contains(&RAIN_TIP));
    }

    #[test]
    fn wind_tip_triggers_above_20_kmh() {
        let tips = weather_tips(&current(20.0, "clear sky", 40.0, 21.0), Units::Metric);
        assert!(tips.contains(&WIND_TIP));

        // 13 mph is ~20.9 km/h after normalization
        let tips = weather_tips(&current(68.0, "clear sky", 40.0, 13.0), Units::Imperial);
        assert!(tips.contains(&WIND_TIP));

        let tips = weather_tips(&current(20.0, "clear sky", 40.0, 20.0), Units::Metric);
        assert!(!tips.contains(&WIND_TIP));
    }

    #[test]
    fn mild_day_pads_to_two_tips_with_ideal_conditions() {
        let tips = weather_tips(&current(22.0, "clear sky", 40.0, 3.0), Units::Metric);
        assert!(tips.len() >= 2);
        assert_eq!(tips[0].title, "Ideal Conditions");
    }

    #[test]
    fn busy_day_is_not_padded() {
        let tips = weather_tips(&current(5.0, "heavy rain", 90.0, 25.0), Units::Metric);
        assert_eq!(tips, vec![COLD_TIP, RAIN_TIP, WIND_TIP]);
    }
}
