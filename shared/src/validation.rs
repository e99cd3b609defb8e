//! Input validation functions
//!
//! The calculator form collects three free-text fields. This module decides
//! whether they are usable before any arithmetic runs.

use crate::calculator::{ActivityLevel, LifeStage, NutrientInput};
use crate::errors::CalculatorError;
use crate::types::NutrientForm;

/// Life stage tokens with dedicated tables and tips
pub const VALID_LIFE_STAGES: &[&str] = &["puppy", "adult", "senior"];

/// Activity level tokens that adjust the energy multiplier
pub const VALID_ACTIVITY_LEVELS: &[&str] = &["low", "medium", "high"];

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

/// Check that every form field is present and not blank
///
/// All missing fields are reported together, in form order.
pub fn validate_required(form: &NutrientForm) -> Result<(), CalculatorError> {
    let mut missing = Vec::new();
    if is_blank(&form.weight) {
        missing.push("weight");
    }
    if is_blank(&form.life_stage) {
        missing.push("life_stage");
    }
    if is_blank(&form.activity_level) {
        missing.push("activity_level");
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CalculatorError::MissingFields(missing))
    }
}

/// Parse a weight field (in kg)
///
/// The whole trimmed text must be a number; `"10kg"` is rejected rather than
/// read as 10.
pub fn parse_weight_kg(raw: &str) -> Result<f64, CalculatorError> {
    let trimmed = raw.trim();
    let weight: f64 = trimmed.parse().map_err(|_| {
        CalculatorError::InvalidWeight(format!("'{}' is not a number", trimmed))
    })?;

    if !weight.is_finite() {
        return Err(CalculatorError::InvalidWeight(
            "Weight must be a valid number".to_string(),
        ));
    }
    if weight <= 0.0 {
        return Err(CalculatorError::InvalidWeight(
            "Weight must be greater than 0 kg".to_string(),
        ));
    }
    Ok(weight)
}

impl NutrientForm {
    /// Validate the form and build calculator input
    ///
    /// Life stage and activity level are mapped verbatim; unknown values are
    /// accepted and become `Unrecognized`.
    pub fn parse(&self) -> Result<NutrientInput, CalculatorError> {
        validate_required(self)?;

        let weight_kg = parse_weight_kg(self.weight.as_deref().unwrap_or_default())?;
        let life_stage = LifeStage::from_input(self.life_stage.as_deref().unwrap_or_default());
        let activity_level =
            ActivityLevel::from_input(self.activity_level.as_deref().unwrap_or_default());

        Ok(NutrientInput::new(weight_kg, life_stage, activity_level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn form(weight: Option<&str>, stage: Option<&str>, activity: Option<&str>) -> NutrientForm {
        NutrientForm {
            weight: weight.map(str::to_string),
            life_stage: stage.map(str::to_string),
            activity_level: activity.map(str::to_string),
        }
    }

    #[test]
    fn test_complete_form_parses() {
        let input = form(Some("10"), Some("adult"), Some("medium")).parse().unwrap();
        assert_eq!(input.weight_kg, 10.0);
        assert_eq!(input.life_stage, LifeStage::Adult);
        assert_eq!(input.activity_level, ActivityLevel::Medium);
    }

    #[test]
    fn test_all_missing_fields_reported() {
        let err = form(None, Some("   "), Some("")).parse().unwrap_err();
        assert_eq!(
            err,
            CalculatorError::MissingFields(vec!["weight", "life_stage", "activity_level"])
        );
        assert_eq!(err.to_string(), "Please fill all fields.");
    }

    #[test]
    fn test_missing_check_runs_before_weight_parse() {
        let err = form(Some("abc"), None, Some("low")).parse().unwrap_err();
        assert_eq!(err, CalculatorError::MissingFields(vec!["life_stage"]));
    }

    #[test]
    fn test_unrecognized_tokens_are_accepted() {
        let input = form(Some("8"), Some("cat"), Some("jog")).parse().unwrap();
        assert_eq!(input.life_stage, LifeStage::Unrecognized);
        assert_eq!(input.activity_level, ActivityLevel::Unrecognized);
    }

    #[rstest]
    #[case("10", 10.0)]
    #[case(" 12.5 ", 12.5)]
    #[case("0.8", 0.8)]
    #[case("3e1", 30.0)]
    fn test_parse_weight_valid(#[case] raw: &str, #[case] expected: f64) {
        assert_eq!(parse_weight_kg(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("10kg")]
    #[case("0")]
    #[case("-4")]
    #[case("NaN")]
    #[case("inf")]
    #[case("")]
    fn test_parse_weight_invalid(#[case] raw: &str) {
        assert!(matches!(
            parse_weight_kg(raw),
            Err(CalculatorError::InvalidWeight(_))
        ));
    }

    #[test]
    fn test_valid_tokens_are_recognized() {
        for token in VALID_LIFE_STAGES {
            assert!(LifeStage::from_input(token).is_recognized());
        }
        for token in VALID_ACTIVITY_LEVELS {
            assert!(ActivityLevel::from_input(token).is_recognized());
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: any positive weight survives a format/parse trip unchanged
        #[test]
        fn prop_positive_weight_parses(weight in 0.001f64..500.0) {
            let parsed = parse_weight_kg(&weight.to_string()).unwrap();
            prop_assert_eq!(parsed, weight);
        }

        /// Property: whitespace-only fields are always treated as missing
        #[test]
        fn prop_whitespace_is_blank(ws in "[ \t\n]{0,8}") {
            let result = form(Some(ws.as_str()), Some("adult"), Some("low")).parse();
            prop_assert_eq!(result, Err(CalculatorError::MissingFields(vec!["weight"])));
        }
    }
}
