//! Dog Health Assistant WASM Module
//!
//! This crate provides WebAssembly bindings for the nutrient calculator so
//! the client can produce results without a round trip to the backend.

use dog_health_shared::{
    ActivityLevel, CalculatorError, LifeStage, NutrientForm, NutrientInput, NutritionReport,
};
use wasm_bindgen::prelude::*;

/// Resting Energy Requirement in kcal/day
#[wasm_bindgen]
pub fn resting_energy(weight_kg: f64) -> f64 {
    if !(weight_kg.is_finite() && weight_kg > 0.0) {
        return 0.0;
    }
    dog_health_shared::resting_energy_kcal(weight_kg)
}

/// Maintenance Energy Requirement in kcal/day
#[wasm_bindgen]
pub fn maintenance_energy(weight_kg: f64, life_stage: &str, activity_level: &str) -> f64 {
    dog_health_shared::compute(
        weight_kg,
        LifeStage::from_input(life_stage),
        ActivityLevel::from_input(activity_level),
    )
    .energy_kcal
}

/// Full calculator report as JSON
#[wasm_bindgen]
pub fn calculate_nutrients(weight_kg: f64, life_stage: &str, activity_level: &str) -> String {
    let input = NutrientInput::new(
        weight_kg,
        LifeStage::from_input(life_stage),
        ActivityLevel::from_input(activity_level),
    );
    report_json(&NutritionReport::for_input(input))
}

/// Validate raw form text, then calculate
///
/// Throws with the validation message (e.g. "Please fill all fields.").
#[wasm_bindgen]
pub fn calculate_nutrients_from_form(
    weight: &str,
    life_stage: &str,
    activity_level: &str,
) -> Result<String, JsError> {
    form_report_json(weight, life_stage, activity_level).map_err(|e| JsError::new(&e.to_string()))
}

fn form_report_json(
    weight: &str,
    life_stage: &str,
    activity_level: &str,
) -> Result<String, CalculatorError> {
    let form = NutrientForm {
        weight: Some(weight.to_string()),
        life_stage: Some(life_stage.to_string()),
        activity_level: Some(activity_level.to_string()),
    };
    let input = form.parse()?;
    Ok(report_json(&NutritionReport::for_input(input)))
}

fn report_json(report: &NutritionReport) -> String {
    // Plain numbers, strings and enums only; serialization cannot fail
    serde_json::to_string(report).unwrap_or_default()
}
