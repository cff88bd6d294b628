//! Tests for the fallback estimates and heuristic rules.

use furrow::estimator::{fallback, heuristics};
use furrow::{
    Estimator, FallbackMode, PestRequest, RainfallRequest, RiskLevel, SoilClassification,
    SoilSample, WeatherConditions, YieldRequest,
};

// ============================================================================
// Fixed fallbacks
// ============================================================================

#[test]
fn fixed_fallbacks_ignore_input() {
    let odd = SoilSample::new().nitrogen(-5.0).ph(14.0).humidity(f64::NAN);
    let soil = fallback::soil_health(&odd);
    assert_eq!(soil.soil_health_score, 65.0);
    assert_eq!(soil.classification, SoilClassification::Good);
    assert_eq!(soil.confidence, 75.0);
    assert_eq!(soil.recommendations, ["Regular soil testing recommended"]);

    let pest = fallback::pest_risk(&PestRequest::new("").temperature(60.0));
    assert_eq!(pest.risk_level, RiskLevel::Medium);
    assert_eq!(pest.risk_score, 45.0);
    assert_eq!(pest.confidence, 70.0);
    assert_eq!(pest.common_pests, ["General pests"]);
    assert_eq!(pest.preventive_measures, ["Regular monitoring"]);

    let rain = fallback::rainfall(&RainfallRequest::new().humidity(100.0).pressure(950.0));
    assert_eq!(rain.probability, 30.0);
    assert_eq!(rain.expected_amount, 2.0);
    assert_eq!(rain.timeframe, "24 hours");
    assert_eq!(rain.confidence, 65.0);
    assert_eq!(rain.recommendation, "Continue normal irrigation");
}

#[test]
fn yield_fallback_echoes_crop_and_area() {
    let p = fallback::crop_yield(&YieldRequest::new("sugarcane", 12.0));
    assert_eq!(p.crop_type, "sugarcane");
    assert_eq!(p.field_area, 12.0);
    assert_eq!(p.predicted_yield, 4.0);
    assert_eq!(p.total_production, 4.0);
    assert_eq!(p.unit, "tons/hectare");
    assert_eq!(p.factors.soil_health, 65.0);
    assert_eq!(p.factors.weather_conditions, 75.0);
    assert_eq!(p.factors.overall_rating, "Good");
    assert_eq!(p.recommendations, ["Monitor crop regularly"]);
}

#[test]
fn yield_fallback_defaults_missing_fields() {
    let p = fallback::crop_yield(&YieldRequest::new("", 0.0));
    assert_eq!(p.crop_type, "wheat");
    assert_eq!(p.field_area, 1.0);

    // Negative areas are echoed, not defaulted
    let p = fallback::crop_yield(&YieldRequest::new("corn", -3.0));
    assert_eq!(p.field_area, -3.0);
}

// ============================================================================
// Heuristic tables
// ============================================================================

#[test]
fn base_yield_is_case_insensitive_with_default() {
    assert_eq!(heuristics::base_yield_for_crop("unknown_crop"), 4.0);
    assert_eq!(
        heuristics::base_yield_for_crop("Wheat"),
        heuristics::base_yield_for_crop("wheat")
    );
    assert_eq!(heuristics::base_yield_for_crop("SUGARCANE"), 45.0);
    assert_eq!(heuristics::base_yield_for_crop("corn"), 6.5);
}

#[test]
fn weather_factor_stays_in_bounds() {
    let temperatures = [-20.0, 0.0, 19.9, 20.0, 25.0, 30.0, 30.1, 45.0];
    let humidities = [0.0, 49.9, 50.0, 70.0, 70.1, 100.0];
    let rainfalls = [None, Some(0.0), Some(99.9), Some(100.0), Some(200.0), Some(400.0)];

    for &t in &temperatures {
        for &h in &humidities {
            for &r in &rainfalls {
                let weather = WeatherConditions {
                    temperature: t,
                    humidity: h,
                    rainfall: r,
                };
                let f = heuristics::weather_factor(&weather);
                assert!((0.6..=1.4).contains(&f), "factor {f} for {weather:?}");
            }
        }
    }
}

#[test]
fn common_pests_truncate_below_threshold() {
    assert_eq!(heuristics::common_pests("cotton", 50.0).len(), 2);
    assert_eq!(
        heuristics::common_pests("cotton", 80.0),
        ["Bollworm", "Whitefly", "Thrips"]
    );
    assert_eq!(heuristics::common_pests("barley", 20.0), ["General pests", "Aphids"]);
}

#[test]
fn preventive_measures_by_risk_band() {
    let aggressive = heuristics::pest_preventive_measures(75.0);
    assert_eq!(aggressive.len(), 3);
    assert!(aggressive.contains(&"Apply preventive pesticides".to_string()));

    let moderate = heuristics::pest_preventive_measures(50.0);
    assert_eq!(moderate.len(), 3);
    assert!(moderate.contains(&"Use biological controls".to_string()));

    let routine = heuristics::pest_preventive_measures(10.0);
    assert_eq!(
        routine,
        ["Continue routine monitoring", "Maintain crop health"]
    );
}

#[test]
fn soil_recommendations_follow_rule_order() {
    let poor = SoilSample::new().nitrogen(20.0).phosphorus(10.0).ph(5.5);
    let score = heuristics::soil_health_score(&poor);
    let recs = heuristics::soil_recommendations(score, &poor);
    assert_eq!(recs.len(), 4);
    assert!(recs[0].to_lowercase().contains("nitrogen"));
    assert!(recs[1].to_lowercase().contains("phosph"));
    assert!(recs[2].to_lowercase().contains("lime") || recs[2].contains("pH"));
}

#[test]
fn soil_score_bands() {
    // 20 + 25 + 20 + 25
    assert_eq!(heuristics::soil_health_score(&SoilSample::default()), 90.0);
    // 10 + 8 + 5 + 10
    let worst = SoilSample::new()
        .nitrogen(0.0)
        .phosphorus(0.0)
        .ph(3.0)
        .temperature(5.0)
        .humidity(10.0);
    assert_eq!(heuristics::soil_health_score(&worst), 33.0);
}

#[test]
fn crop_pest_risk_table() {
    assert_eq!(heuristics::crop_pest_risk("cotton"), 30.0);
    assert_eq!(heuristics::crop_pest_risk("millet"), 20.0);
}

#[test]
fn rainfall_probability_is_capped() {
    let stormy = RainfallRequest::new()
        .humidity(99.0)
        .pressure(980.0)
        .temperature(15.0);
    assert_eq!(heuristics::rainfall_probability(&stormy), 80.0);
    assert_eq!(heuristics::rainfall_probability(&RainfallRequest::default()), 20.0);
    assert_eq!(heuristics::irrigation_recommendation(80.0), "Postpone irrigation");
    assert_eq!(heuristics::irrigation_recommendation(40.0), "Continue normal irrigation");
}

// ============================================================================
// Estimator
// ============================================================================

#[test]
fn estimator_dispatches_on_mode() {
    let request = PestRequest::new("rice").temperature(30.0).humidity(85.0);

    let fixed = Estimator::new(FallbackMode::Fixed).pest_risk(&request);
    assert_eq!(fixed.risk_score, 45.0);

    let heuristic = Estimator::new(FallbackMode::Heuristic).pest_risk(&request);
    assert_eq!(heuristic.risk_level, RiskLevel::from_score(heuristic.risk_score));
    assert_ne!(heuristic.risk_score, 45.0);
}

#[test]
fn heuristic_yield_scales_with_area() {
    let estimator = Estimator::new(FallbackMode::Heuristic);
    let one = estimator.crop_yield(&YieldRequest::new("soybean", 1.0));
    let ten = estimator.crop_yield(&YieldRequest::new("soybean", 10.0));
    assert_eq!(one.predicted_yield, ten.predicted_yield);
    assert!((ten.total_production - one.predicted_yield * 10.0).abs() < 0.1);
}
