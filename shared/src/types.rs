//! API request and response types

use crate::calculator::{NutrientInput, NutritionDisplay, NutritionResult};
use crate::validation::{VALID_ACTIVITY_LEVELS, VALID_LIFE_STAGES};
use serde::{Deserialize, Deserializer, Serialize};

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

// ============================================================================
// Nutrient Calculator Types
// ============================================================================

/// Calculator form as typed by the user
///
/// Every field is optional so that a missing key reaches validation and is
/// reported as a missing field instead of a JSON decoding failure. `weight`
/// also accepts a JSON number, kept as its text form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientForm {
    #[serde(default, deserialize_with = "text_or_number")]
    pub weight: Option<String>,
    #[serde(default)]
    pub life_stage: Option<String>,
    #[serde(default)]
    pub activity_level: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(f64),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<TextOrNumber>::deserialize(deserializer)?.map(|value| match value {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Number(number) => number.to_string(),
    }))
}

/// Calculator response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionReport {
    /// Input as the calculator understood it
    pub input: NutrientInput,
    /// Full precision figures
    pub result: NutritionResult,
    /// Rounded figures for the result card
    pub display: NutritionDisplay,
}

impl NutritionReport {
    pub fn new(input: NutrientInput, result: NutritionResult) -> Self {
        let display = result.display();
        Self {
            input,
            result,
            display,
        }
    }

    /// Compute a report for already validated input
    pub fn for_input(input: NutrientInput) -> Self {
        Self::new(input, input.compute())
    }
}

/// Tokens the calculator form should offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorOptions {
    pub life_stages: Vec<String>,
    pub activity_levels: Vec<String>,
}

impl Default for CalculatorOptions {
    fn default() -> Self {
        Self {
            life_stages: VALID_LIFE_STAGES.iter().map(|s| s.to_string()).collect(),
            activity_levels: VALID_ACTIVITY_LEVELS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
