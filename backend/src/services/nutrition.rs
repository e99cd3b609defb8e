//! Nutrition service - business logic for the nutrient calculator

use crate::error::ApiError;
use dog_health_shared::types::{CalculatorOptions, NutrientForm, NutritionReport};
use dog_health_shared::{ActivityLevel, LifeStage, NutrientInput, NutritionResult};
use tracing::{debug, warn};

/// Input used by readiness checks
const REFERENCE_INPUT: NutrientInput = NutrientInput {
    weight_kg: 10.0,
    life_stage: LifeStage::Adult,
    activity_level: ActivityLevel::Medium,
};

/// Nutrition service
pub struct NutritionService;

impl NutritionService {
    /// Validate a submitted form and compute the nutrition report
    pub fn calculate(form: &NutrientForm) -> Result<NutritionReport, ApiError> {
        let input = form.parse().map_err(|e| {
            debug!(error = %e, field = %e.field(), "Rejected calculator form");
            ApiError::from(e)
        })?;

        if !input.life_stage.is_recognized() {
            warn!(
                life_stage = form.life_stage.as_deref().unwrap_or_default(),
                "Unrecognized life stage; using adult tables without stage tips"
            );
        }
        if !input.activity_level.is_recognized() {
            warn!(
                activity_level = form.activity_level.as_deref().unwrap_or_default(),
                "Unrecognized activity level; leaving multiplier unchanged"
            );
        }

        let report = NutritionReport::for_input(input);

        debug!(
            weight_kg = input.weight_kg,
            life_stage = ?input.life_stage,
            activity_level = ?input.activity_level,
            energy_kcal = report.result.energy_kcal,
            score = ?report.result.score,
            tips = report.result.tips.len(),
            "Computed nutrient requirements"
        );

        Ok(report)
    }

    /// Tokens the form should offer
    pub fn options() -> CalculatorOptions {
        CalculatorOptions::default()
    }

    /// Run the calculator on a fixed input
    pub fn self_check() -> Result<NutritionResult, String> {
        let result = REFERENCE_INPUT.compute();
        let figures = [
            result.energy_kcal,
            result.protein_g,
            result.fat_g,
            result.carbs_g,
        ];
        if figures.iter().all(|v| v.is_finite() && *v > 0.0) {
            Ok(result)
        } else {
            Err(format!(
                "reference calculation produced {:.2} kcal",
                result.energy_kcal
            ))
        }
    }
}
