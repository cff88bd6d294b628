//! Agronomic rules of thumb.
//!
//! Lookup tables and scoring rules used to estimate predictions without a
//! trained model. Every function is pure and total. Crop names are matched
//! case-insensitively; unknown crops get a neutral default.

use crate::types::{PestRequest, RainfallRequest, SoilSample, WeatherConditions};

/// Typical yield for a crop, in tons per hectare. Unknown crops: 4.0.
pub fn base_yield_for_crop(crop_type: &str) -> f64 {
    match crop_type.to_lowercase().as_str() {
        "wheat" => 4.2,
        "rice" => 5.8,
        "corn" => 6.5,
        "soybean" => 3.2,
        "cotton" => 2.8,
        "sugarcane" => 45.0,
        _ => 4.0,
    }
}

/// Multiplicative yield adjustment for the weather, clamped to `[0.6, 1.4]`.
///
/// Temperature, humidity and rainfall each contribute at most one factor,
/// applied in that order. Missing rainfall counts as zero.
pub fn weather_factor(weather: &WeatherConditions) -> f64 {
    let WeatherConditions {
        temperature,
        humidity,
        rainfall,
    } = *weather;
    let rainfall = rainfall.unwrap_or(0.0);
    let mut factor: f64 = 1.0;

    if (20.0..=30.0).contains(&temperature) {
        factor *= 1.1;
    } else if temperature < 15.0 || temperature > 35.0 {
        factor *= 0.8;
    }

    if (50.0..=70.0).contains(&humidity) {
        factor *= 1.05;
    } else if humidity < 30.0 || humidity > 85.0 {
        factor *= 0.9;
    }

    if (50.0..=150.0).contains(&rainfall) {
        factor *= 1.1;
    } else if rainfall > 200.0 {
        factor *= 0.85;
    }

    factor.clamp(0.6, 1.4)
}

/// Soil improvement advice, in fixed order: nitrogen, phosphorus, pH,
/// micronutrients.
pub fn soil_recommendations(score: f64, soil: &SoilSample) -> Vec<String> {
    let mut recommendations = Vec::new();
    if soil.nitrogen < 30.0 {
        recommendations.push("Apply nitrogen fertilizer (60-80 kg/ha)".to_string());
    }
    if soil.phosphorus < 15.0 {
        recommendations.push("Add phosphorus supplement (40-50 kg/ha)".to_string());
    }
    if soil.ph < 6.0 {
        recommendations.push("Apply lime to increase soil pH".to_string());
    }
    if score < 60.0 {
        recommendations.push("Consider soil testing for micronutrients".to_string());
    }
    recommendations
}

/// Yield improvement advice, in fixed order: variety, soil, heat.
pub fn yield_recommendations(
    yield_value: f64,
    soil_health_score: f64,
    weather: &WeatherConditions,
) -> Vec<String> {
    let mut recommendations = Vec::new();
    if yield_value < 3.0 {
        recommendations.push("Consider crop rotation or variety change".to_string());
    }
    if soil_health_score < 60.0 {
        recommendations.push("Improve soil health with organic matter".to_string());
    }
    if weather.temperature > 30.0 {
        recommendations.push("Implement heat stress management".to_string());
    }
    recommendations
}

/// Crop-specific contribution to pest risk. Unknown crops: 20.
pub fn crop_pest_risk(crop_type: &str) -> f64 {
    match crop_type.to_lowercase().as_str() {
        "wheat" => 15.0,
        "rice" => 25.0,
        "corn" => 20.0,
        "cotton" => 30.0,
        "soybean" => 18.0,
        _ => 20.0,
    }
}

/// Pests to watch for. The full list above a risk of 60, else the two most
/// common.
pub fn common_pests(crop_type: &str, risk_score: f64) -> Vec<String> {
    let pests: [&str; 3] = match crop_type.to_lowercase().as_str() {
        "wheat" => ["Aphids", "Rust", "Armyworm"],
        "rice" => ["Brown planthopper", "Stem borer", "Blast"],
        "corn" => ["Corn borer", "Armyworm", "Cutworm"],
        "cotton" => ["Bollworm", "Whitefly", "Thrips"],
        _ => ["General pests", "Aphids", "Caterpillars"],
    };
    let keep = if risk_score > 60.0 { 3 } else { 2 };
    pests.iter().take(keep).map(|p| p.to_string()).collect()
}

/// Preventive measures scaled to the risk score.
pub fn pest_preventive_measures(risk_score: f64) -> Vec<String> {
    let measures: &[&str] = if risk_score >= 70.0 {
        &[
            "Apply preventive pesticides",
            "Increase monitoring frequency",
            "Use pheromone traps",
        ]
    } else if risk_score >= 40.0 {
        &[
            "Regular field monitoring",
            "Maintain field hygiene",
            "Use biological controls",
        ]
    } else {
        &["Continue routine monitoring", "Maintain crop health"]
    };
    measures.iter().map(|m| m.to_string()).collect()
}

/// Rule-based soil health score from 0 to 100.
///
/// Nitrogen (up to 30), phosphorus (25), pH (20) and growing climate (25)
/// each contribute a banded number of points.
pub fn soil_health_score(soil: &SoilSample) -> f64 {
    let nitrogen = if soil.nitrogen >= 50.0 {
        30.0
    } else if soil.nitrogen >= 30.0 {
        20.0
    } else {
        10.0
    };

    let phosphorus = if soil.phosphorus >= 25.0 {
        25.0
    } else if soil.phosphorus >= 15.0 {
        18.0
    } else {
        8.0
    };

    let ph = if (6.0..=7.0).contains(&soil.ph) {
        20.0
    } else if (5.5..=7.5).contains(&soil.ph) {
        15.0
    } else {
        5.0
    };

    let (t, h) = (soil.temperature, soil.humidity);
    let climate = if (20.0..=30.0).contains(&t) && (40.0..=70.0).contains(&h) {
        25.0
    } else if (15.0..=35.0).contains(&t) && (30.0..=80.0).contains(&h) {
        18.0
    } else {
        10.0
    };

    f64::min(nitrogen + phosphorus + ph + climate, 100.0)
}

/// Rule-based pest risk score from 0 to 100.
pub fn pest_risk_score(request: &PestRequest) -> f64 {
    let (t, h) = (request.temperature, request.humidity);
    let climate = if t > 30.0 && h > 70.0 {
        40.0
    } else if t > 25.0 && h > 60.0 {
        25.0
    } else {
        10.0
    };

    let rain = if request.rainfall > 100.0 {
        30.0
    } else if request.rainfall > 50.0 {
        20.0
    } else {
        5.0
    };

    f64::min(climate + rain + crop_pest_risk(&request.crop_type), 100.0)
}

/// Rule-based probability of rain in the next 24 hours, capped at 90 %.
pub fn rainfall_probability(request: &RainfallRequest) -> f64 {
    let mut probability = 0.0;
    if request.humidity > 80.0 {
        probability += 40.0;
    } else if request.humidity > 60.0 {
        probability += 20.0;
    }
    if request.pressure < 1000.0 {
        probability += 30.0;
    } else if request.pressure < 1010.0 {
        probability += 15.0;
    }
    if request.temperature < 25.0 {
        probability += 10.0;
    }
    f64::min(probability, 90.0)
}

/// Irrigation advice for a rain probability.
pub fn irrigation_recommendation(probability: f64) -> &'static str {
    if probability > 70.0 {
        "Postpone irrigation"
    } else if probability > 40.0 {
        "Monitor conditions"
    } else {
        "Continue normal irrigation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn base_yield_is_case_insensitive() {
        assert_eq!(base_yield_for_crop("Wheat"), base_yield_for_crop("wheat"));
        assert_eq!(base_yield_for_crop("SUGARCANE"), 45.0);
        assert_eq!(base_yield_for_crop("unknown_crop"), 4.0);
    }

    #[test]
    fn weather_factor_ideal_conditions() {
        let weather = WeatherConditions::new(25.0, 60.0).rainfall(100.0);
        assert!(approx(weather_factor(&weather), 1.1 * 1.05 * 1.1));
    }

    #[test]
    fn weather_factor_harsh_conditions() {
        let weather = WeatherConditions::new(40.0, 90.0).rainfall(250.0);
        assert!(approx(weather_factor(&weather), 0.8 * 0.9 * 0.85));
    }

    #[test]
    fn weather_factor_stays_within_bounds() {
        let temperatures = [f64::NEG_INFINITY, -10.0, 17.0, 25.0, 50.0, f64::INFINITY, f64::NAN];
        let humidities = [0.0, 40.0, 60.0, 100.0, f64::NAN];
        let rainfalls = [None, Some(0.0), Some(100.0), Some(1e9), Some(f64::INFINITY)];
        for &t in &temperatures {
            for &h in &humidities {
                for &r in &rainfalls {
                    let mut weather = WeatherConditions::new(t, h);
                    weather.rainfall = r;
                    let factor = weather_factor(&weather);
                    assert!((0.6..=1.4).contains(&factor), "{t} {h} {r:?} -> {factor}");
                }
            }
        }
    }

    #[test]
    fn weather_factor_neutral_band() {
        // 17°C, 40 % humidity, 20 mm: no rule matches.
        let weather = WeatherConditions::new(17.0, 40.0).rainfall(20.0);
        assert_eq!(weather_factor(&weather), 1.0);
    }

    #[test]
    fn weather_factor_missing_rainfall_is_zero() {
        let with_zero = WeatherConditions::new(25.0, 60.0).rainfall(0.0);
        let missing = WeatherConditions::new(25.0, 60.0);
        assert_eq!(weather_factor(&with_zero), weather_factor(&missing));
    }

    #[test]
    fn soil_recommendations_in_order() {
        let soil = SoilSample::new().nitrogen(20.0).phosphorus(10.0).ph(5.5);
        let recs = soil_recommendations(50.0, &soil);
        assert_eq!(recs.len(), 4);
        assert!(recs[0].contains("nitrogen"));
        assert!(recs[1].contains("phosphorus"));
        assert!(recs[2].contains("lime"));
        assert!(recs[3].contains("micronutrients"));
    }

    #[test]
    fn healthy_soil_needs_nothing() {
        assert!(soil_recommendations(85.0, &SoilSample::default()).is_empty());
    }

    #[test]
    fn yield_recommendations_heat_only() {
        let weather = WeatherConditions::new(33.0, 50.0);
        let recs = yield_recommendations(4.5, 75.0, &weather);
        assert_eq!(recs, vec!["Implement heat stress management".to_string()]);
    }

    #[test]
    fn crop_pest_risk_table() {
        assert_eq!(crop_pest_risk("Cotton"), 30.0);
        assert_eq!(crop_pest_risk("barley"), 20.0);
    }

    #[test]
    fn common_pests_truncation() {
        assert_eq!(common_pests("cotton", 50.0).len(), 2);
        assert_eq!(common_pests("cotton", 80.0).len(), 3);
        assert_eq!(common_pests("cotton", 60.0).len(), 2);
        assert_eq!(common_pests("quinoa", 90.0)[0], "General pests");
    }

    #[test]
    fn preventive_measure_tiers() {
        assert_eq!(pest_preventive_measures(75.0)[0], "Apply preventive pesticides");
        assert_eq!(pest_preventive_measures(70.0).len(), 3);
        assert_eq!(pest_preventive_measures(50.0)[2], "Use biological controls");
        assert_eq!(pest_preventive_measures(10.0).len(), 2);
    }

    #[test]
    fn soil_score_for_default_sample() {
        // N 45 -> 20, P 28 -> 25, pH 6.5 -> 20, 25°C/65 % -> 25
        assert_eq!(soil_health_score(&SoilSample::default()), 90.0);
    }

    #[test]
    fn soil_score_for_poor_sample() {
        let soil = SoilSample::new()
            .nitrogen(10.0)
            .phosphorus(5.0)
            .ph(4.5)
            .temperature(5.0)
            .humidity(95.0);
        assert_eq!(soil_health_score(&soil), 33.0);
    }

    #[test]
    fn pest_score_hot_wet_cotton() {
        let request = PestRequest::new("cotton")
            .temperature(32.0)
            .humidity(80.0)
            .rainfall(150.0);
        assert_eq!(pest_risk_score(&request), 100.0);
    }

    #[test]
    fn pest_score_default_request() {
        // 25°C is not above 25, so the mild climate band applies.
        assert_eq!(pest_risk_score(&PestRequest::default()), 10.0 + 30.0 + 15.0);
    }

    #[test]
    fn rainfall_probability_bands() {
        let request = RainfallRequest::new()
            .humidity(90.0)
            .pressure(990.0)
            .temperature(18.0);
        assert_eq!(rainfall_probability(&request), 80.0);
        assert_eq!(rainfall_probability(&RainfallRequest::default()), 20.0);
    }

    #[test]
    fn irrigation_thresholds() {
        assert_eq!(irrigation_recommendation(80.0), "Postpone irrigation");
        assert_eq!(irrigation_recommendation(50.0), "Monitor conditions");
        assert_eq!(irrigation_recommendation(40.0), "Continue normal irrigation");
    }
}
