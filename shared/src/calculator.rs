//! Nutrient requirement calculator
//!
//! Maps a dog's body weight, life stage and activity level to a daily
//! energy target, a macronutrient breakdown, advisory tips and a
//! qualitative nutrition score.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: No I/O, no shared state, same input gives the same output
//! 2. **Total**: Every weight and every stage/activity token yields a result
//! 3. **Order Matters**: Tips and score rules are evaluated in a fixed sequence

use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Coefficient of the resting energy equation
pub const RER_COEFFICIENT: f64 = 70.0;

/// Metabolic body weight exponent
pub const RER_EXPONENT: f64 = 0.75;

/// Energy density of protein (kcal per gram)
pub const PROTEIN_KCAL_PER_G: f64 = 4.0;

/// Energy density of fat (kcal per gram)
pub const FAT_KCAL_PER_G: f64 = 9.0;

/// Energy density of carbohydrates (kcal per gram)
pub const CARBS_KCAL_PER_G: f64 = 4.0;

/// Above this MER the large-breed tip is added
pub const LARGE_BREED_MER_KCAL: f64 = 2000.0;

/// Below this MER the small-breed tip is added
pub const SMALL_BREED_MER_KCAL: f64 = 500.0;

const LARGE_BREED_TIP: &str = "Large breeds need glucosamine and chondroitin for joint support.";
const SMALL_BREED_TIP: &str = "Small breeds need calorie-dense meals in smaller portions.";

// ============================================================================
// Life Stage
// ============================================================================

/// Age bracket of the dog
///
/// Anything other than the exact tokens `puppy`, `adult` or `senior` maps to
/// [`LifeStage::Unrecognized`]. The energy and macro tables treat that like
/// an adult, but the stage tips do not: an unrecognized stage gets no tips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifeStage {
    Puppy,
    Adult,
    Senior,
    Unrecognized,
}

impl LifeStage {
    /// Map a raw form value to a life stage (exact, case-sensitive match)
    pub fn from_input(value: &str) -> Self {
        match value {
            "puppy" => LifeStage::Puppy,
            "adult" => LifeStage::Adult,
            "senior" => LifeStage::Senior,
            _ => LifeStage::Unrecognized,
        }
    }

    /// Base MER multiplier before the activity adjustment
    pub fn energy_multiplier(&self) -> f64 {
        match self {
            LifeStage::Puppy => 3.0,
            LifeStage::Senior => 1.2,
            LifeStage::Adult | LifeStage::Unrecognized => 1.6,
        }
    }

    /// Share of calories attributed to each macronutrient
    pub fn macro_split(&self) -> MacroSplit {
        match self {
            LifeStage::Puppy => MacroSplit {
                protein_pct: 28.0,
                fat_pct: 20.0,
                carbs_pct: 52.0,
            },
            LifeStage::Senior => MacroSplit {
                protein_pct: 22.0,
                fat_pct: 12.0,
                carbs_pct: 66.0,
            },
            LifeStage::Adult | LifeStage::Unrecognized => MacroSplit {
                protein_pct: 25.0,
                fat_pct: 15.0,
                carbs_pct: 60.0,
            },
        }
    }

    /// Stage-specific advice; empty for an unrecognized stage
    pub fn tips(&self) -> &'static [&'static str] {
        match self {
            LifeStage::Puppy => &[
                "High protein (28–30%) and fat (18–22%) are essential for growth.",
                "Ensure DHA and EPA (Omega-3) for brain and vision development.",
                "Calcium and phosphorus balance (1.2:1) supports bone growth.",
            ],
            LifeStage::Adult => &[
                "Balanced diet with ~25% protein and ~15% fat maintains healthy weight.",
                "Include Omega-6 fatty acids for skin and coat health.",
                "Provide antioxidants like Vitamin E and C for immune support.",
            ],
            LifeStage::Senior => &[
                "Lower fat (~10–12%) helps prevent obesity in less active seniors.",
                "Add joint-support nutrients like glucosamine & chondroitin.",
                "High-quality, easily digestible protein (22–25%) is recommended.",
            ],
            LifeStage::Unrecognized => &[],
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, LifeStage::Unrecognized)
    }
}

// ============================================================================
// Activity Level
// ============================================================================

/// Energy expenditure bracket
///
/// `medium` and any unrecognized token leave the stage multiplier unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    Medium,
    High,
    Unrecognized,
}

impl ActivityLevel {
    /// Map a raw form value to an activity level (exact, case-sensitive match)
    pub fn from_input(value: &str) -> Self {
        match value {
            "low" => ActivityLevel::Low,
            "medium" => ActivityLevel::Medium,
            "high" => ActivityLevel::High,
            _ => ActivityLevel::Unrecognized,
        }
    }

    /// Factor applied to the life stage multiplier
    pub fn adjustment(&self) -> f64 {
        match self {
            ActivityLevel::Low => 0.8,
            ActivityLevel::High => 1.4,
            ActivityLevel::Medium | ActivityLevel::Unrecognized => 1.0,
        }
    }

    /// Activity-specific advice
    pub fn tips(&self) -> &'static [&'static str] {
        match self {
            ActivityLevel::High => &[
                "Active dogs benefit from higher fat (~20%) for energy.",
                "B vitamins and iron help sustain stamina.",
            ],
            ActivityLevel::Low => &[
                "Monitor calorie intake to avoid obesity.",
                "Add fiber (~5–8%) to improve satiety.",
            ],
            ActivityLevel::Medium | ActivityLevel::Unrecognized => &[],
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ActivityLevel::Unrecognized)
    }
}

// ============================================================================
// Macronutrients
// ============================================================================

/// Percentage of calories per macronutrient (sums to 100)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein_pct: f64,
    pub fat_pct: f64,
    pub carbs_pct: f64,
}

/// Macronutrient masses in grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroGrams {
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

impl MacroSplit {
    /// Convert a daily energy target into grams of each macronutrient
    ///
    /// grams = kcal × pct / 100 / (kcal per gram)
    pub fn grams(&self, energy_kcal: f64) -> MacroGrams {
        MacroGrams {
            protein_g: energy_kcal * self.protein_pct / 100.0 / PROTEIN_KCAL_PER_G,
            fat_g: energy_kcal * self.fat_pct / 100.0 / FAT_KCAL_PER_G,
            carbs_g: energy_kcal * self.carbs_pct / 100.0 / CARBS_KCAL_PER_G,
        }
    }
}

// ============================================================================
// Score
// ============================================================================

/// Qualitative nutrition grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Score {
    A,
    B,
    C,
    D,
}

/// Display color token attached to a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreColor {
    #[serde(rename = "green")]
    Green,
    #[serde(rename = "orange")]
    Orange,
    #[serde(rename = "#ff6600")]
    DarkOrange,
    #[serde(rename = "red")]
    Red,
}

impl ScoreColor {
    /// Token understood by the client's style layer
    pub fn token(&self) -> &'static str {
        match self {
            ScoreColor::Green => "green",
            ScoreColor::Orange => "orange",
            ScoreColor::DarkOrange => "#ff6600",
            ScoreColor::Red => "red",
        }
    }
}

impl Score {
    pub fn message(&self) -> &'static str {
        match self {
            Score::A => "🟢 Excellent balance! Your dog's diet matches healthy standards.",
            Score::B => "🟡 Good diet, but some improvements can be made.",
            Score::C => {
                "🟠 Your dog's nutrition may need adjustments, especially fat/protein balance."
            }
            Score::D => "🔴 High risk of imbalance! Please consult a vet or adjust the diet plan.",
        }
    }

    pub fn color(&self) -> ScoreColor {
        match self {
            Score::A => ScoreColor::Green,
            Score::B => ScoreColor::Orange,
            Score::C => ScoreColor::DarkOrange,
            Score::D => ScoreColor::Red,
        }
    }
}

/// Grade a macro breakdown
///
/// Rules run in order and each match overwrites the previous grade, so a
/// later rule wins over an earlier one:
/// 1. start at B
/// 2. puppy with protein >= 50 g and fat >= 20 g -> A
/// 3. senior with fat > 15 g -> C
/// 4. low activity with fat > 18 g -> D
pub fn score_for(
    life_stage: LifeStage,
    activity_level: ActivityLevel,
    protein_g: f64,
    fat_g: f64,
) -> Score {
    let mut score = Score::B;
    if life_stage == LifeStage::Puppy && protein_g >= 50.0 && fat_g >= 20.0 {
        score = Score::A;
    }
    if life_stage == LifeStage::Senior && fat_g > 15.0 {
        score = Score::C;
    }
    if activity_level == ActivityLevel::Low && fat_g > 18.0 {
        score = Score::D;
    }
    score
}

// ============================================================================
// Energy
// ============================================================================

/// Resting Energy Requirement
///
/// RER = 70 × weight(kg)^0.75
pub fn resting_energy_kcal(weight_kg: f64) -> f64 {
    RER_COEFFICIENT * weight_kg.powf(RER_EXPONENT)
}

/// Combined life stage and activity multiplier (always > 0)
pub fn energy_multiplier(life_stage: LifeStage, activity_level: ActivityLevel) -> f64 {
    life_stage.energy_multiplier() * activity_level.adjustment()
}

/// Maintenance Energy Requirement
///
/// MER = RER × stage multiplier × activity adjustment
pub fn maintenance_energy_kcal(
    weight_kg: f64,
    life_stage: LifeStage,
    activity_level: ActivityLevel,
) -> f64 {
    resting_energy_kcal(weight_kg) * energy_multiplier(life_stage, activity_level)
}

/// Breed size hint derived from the energy target
pub fn size_tip(energy_kcal: f64) -> Option<&'static str> {
    if energy_kcal > LARGE_BREED_MER_KCAL {
        Some(LARGE_BREED_TIP)
    } else if energy_kcal < SMALL_BREED_MER_KCAL {
        Some(SMALL_BREED_TIP)
    } else {
        None
    }
}

// ============================================================================
// Calculation
// ============================================================================

/// Validated calculator input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientInput {
    /// Body mass in kilograms
    pub weight_kg: f64,
    pub life_stage: LifeStage,
    pub activity_level: ActivityLevel,
}

impl NutrientInput {
    pub fn new(weight_kg: f64, life_stage: LifeStage, activity_level: ActivityLevel) -> Self {
        Self {
            weight_kg,
            life_stage,
            activity_level,
        }
    }

    pub fn compute(&self) -> NutritionResult {
        compute(self.weight_kg, self.life_stage, self.activity_level)
    }
}

/// Daily nutrition requirements for one dog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionResult {
    /// Maintenance Energy Requirement (kcal/day)
    pub energy_kcal: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
    /// Stage tips, then activity tips, then the size tip
    pub tips: Vec<String>,
    pub score: Score,
    pub score_message: String,
    pub score_color: ScoreColor,
}

/// Figures rounded for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionDisplay {
    pub calories: String,
    pub protein: String,
    pub fat: String,
    pub carbs: String,
}

impl NutritionResult {
    /// Calories with no decimals, macros with one
    pub fn display(&self) -> NutritionDisplay {
        NutritionDisplay {
            calories: format!("{:.0}", self.energy_kcal),
            protein: format!("{:.1}", self.protein_g),
            fat: format!("{:.1}", self.fat_g),
            carbs: format!("{:.1}", self.carbs_g),
        }
    }
}

/// Compute daily nutrition requirements
///
/// Weights that are not finite and positive are treated as 0 kg, which
/// yields a zero energy target instead of NaN.
pub fn compute(
    weight_kg: f64,
    life_stage: LifeStage,
    activity_level: ActivityLevel,
) -> NutritionResult {
    let weight_kg = if weight_kg.is_finite() && weight_kg > 0.0 {
        weight_kg
    } else {
        0.0
    };

    let energy_kcal = maintenance_energy_kcal(weight_kg, life_stage, activity_level);
    let grams = life_stage.macro_split().grams(energy_kcal);

    let tips: Vec<String> = life_stage
        .tips()
        .iter()
        .chain(activity_level.tips())
        .copied()
        .chain(size_tip(energy_kcal))
        .map(str::to_string)
        .collect();

    let score = score_for(life_stage, activity_level, grams.protein_g, grams.fat_g);

    NutritionResult {
        energy_kcal,
        protein_g: grams.protein_g,
        fat_g: grams.fat_g,
        carbs_g: grams.carbs_g,
        tips,
        score,
        score_message: score.message().to_string(),
        score_color: score.color(),
    }
}
