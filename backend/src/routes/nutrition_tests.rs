//! Property-based tests for the nutrient calculator endpoint logic
//!
//! These exercise the form-to-report path the handlers run, without HTTP.

#[cfg(test)]
mod tests {
    use crate::error::ApiError;
    use crate::services::NutritionService;
    use dog_health_shared::types::NutrientForm;
    use dog_health_shared::{compute, ActivityLevel, LifeStage};
    use proptest::prelude::*;

    fn form(weight: String, stage: &str, activity: &str) -> NutrientForm {
        NutrientForm {
            weight: Some(weight),
            life_stage: Some(stage.to_string()),
            activity_level: Some(activity.to_string()),
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// The report matches a direct calculation on the parsed values
        #[test]
        fn prop_report_matches_direct_compute(
            weight in 0.1f64..100.0,
            stage in prop::sample::select(vec!["puppy", "adult", "senior", "cat", "Adult"]),
            activity in prop::sample::select(vec!["low", "medium", "high", "jog", "LOW"])
        ) {
            let report = NutritionService::calculate(&form(weight.to_string(), stage, activity)).unwrap();
            let expected = compute(
                weight,
                LifeStage::from_input(stage),
                ActivityLevel::from_input(activity),
            );
            prop_assert_eq!(report.result, expected);
        }

        /// Non-numeric weights never reach the calculator
        #[test]
        fn prop_non_numeric_weight_rejected(weight in "[a-zA-Z]{1,10}") {
            let err = NutritionService::calculate(&form(weight, "adult", "low")).unwrap_err();
            let is_validation = matches!(err, ApiError::Validation { .. });
            prop_assert!(is_validation);
        }

        /// Non-positive weights are rejected
        #[test]
        fn prop_non_positive_weight_rejected(weight in -500.0f64..=0.0) {
            let result = NutritionService::calculate(&form(weight.to_string(), "senior", "high"));
            prop_assert!(result.is_err());
        }
    }

    #[test]
    fn test_whitespace_around_weight_is_accepted() {
        let report = NutritionService::calculate(&form(" 10 ".to_string(), "adult", "medium")).unwrap();
        assert_eq!(report.input.weight_kg, 10.0);
    }
}
