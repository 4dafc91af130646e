//! Body mass index classification and diet plans.

use serde::{Deserialize, Serialize};

/// BMI from weight in kilograms and height in centimeters.
///
/// Returns `None` unless both inputs are finite and positive.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    let valid = |value: f64| value.is_finite() && value > 0.0;
    if !valid(weight_kg) || !valid(height_cm) {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// `< 18.5` underweight, `< 25` normal, `< 30` overweight, else obese.
    pub fn from_bmi(value: f64) -> Self {
        if value < 18.5 {
            Self::Underweight
        } else if value < 25.0 {
            Self::Normal
        } else if value < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Category for a profile, defaulting to `Normal` when measurements are missing.
    pub fn for_measurements(weight_kg: Option<f64>, height_cm: Option<f64>) -> Self {
        weight_kg
            .zip(height_cm)
            .and_then(|(weight, height)| bmi(weight, height))
            .map_or(Self::Normal, Self::from_bmi)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayMeals {
    pub day: u8,
    pub breakfast: &'static str,
    pub lunch: &'static str,
    pub dinner: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DietPlan {
    pub category: BmiCategory,
    pub title: &'static str,
    pub description: &'static str,
    /// Accent color as `#RRGGBB`.
    pub color: &'static str,
    pub days: [DayMeals; 3],
}

const fn meals(
    day: u8,
    breakfast: &'static str,
    lunch: &'static str,
    dinner: &'static str,
) -> DayMeals {
    DayMeals {
        day,
        breakfast,
        lunch,
        dinner,
    }
}

const UNDERWEIGHT_PLAN: DietPlan = DietPlan {
    category: BmiCategory::Underweight,
    title: "Gain & Strength",
    description: "Carbohydrate and protein rich meals for healthy weight gain.",
    color: "#3B82F6",
    days: [
        meals(
            1,
            "Three-egg omelette, whole wheat bread, honey.",
            "Pasta with minced meat, yogurt.",
            "Grilled chicken, rice, avocado.",
        ),
        meals(
            2,
            "Oat porridge with milk, banana and peanut butter.",
            "White beans with rice.",
            "Baked salmon, mashed potatoes.",
        ),
        meals(
            3,
            "Cheese toast, tahini with grape molasses.",
            "Doner wrap, ayran.",
            "Meatballs, baked potatoes.",
        ),
    ],
};

const NORMAL_PLAN: DietPlan = DietPlan {
    category: BmiCategory::Normal,
    title: "Balance & Maintain",
    description: "Balanced meals to keep your current form.",
    color: "#10B981",
    days: [
        meals(
            1,
            "Oatmeal with fruit.",
            "Grilled chicken, bulgur, ayran.",
            "Green beans in olive oil, tzatziki.",
        ),
        meals(2, "Menemen, one slice of bread.", "Tuna salad.", "Lentil soup, meatballs."),
        meals(3, "Boiled eggs, cheese.", "Vegetable pasta.", "Grilled fish, arugula."),
    ],
};

const OVERWEIGHT_PLAN: DietPlan = DietPlan {
    category: BmiCategory::Overweight,
    title: "Fat Burn",
    description: "Support fat loss with a moderate calorie deficit.",
    color: "#F59E0B",
    days: [
        meals(
            1,
            "Two boiled eggs, plenty of greens.",
            "Grilled zucchini, yogurt.",
            "Chicken broth soup without bread.",
        ),
        meals(
            2,
            "Avocado and curd cheese toast on brown bread.",
            "Grilled meatballs, peppers.",
            "Zucchini spaghetti.",
        ),
        meals(3, "Mushroom omelette, cucumber.", "Green lentils.", "Baked salmon, asparagus."),
    ],
};

const OBESE_PLAN: DietPlan = DietPlan {
    category: BmiCategory::Obese,
    title: "Metabolism Boost",
    description: "Low carbohydrate, high fiber.",
    color: "#EF4444",
    days: [
        meals(
            1,
            "Vegetable-heavy green smoothie.",
            "Steamed vegetables, lemon water.",
            "Grilled turkey, oil-free salad.",
        ),
        meals(2, "One boiled egg, parsley.", "Purslane salad.", "Vegetable soup."),
        meals(3, "Yogurt with chia.", "Grilled mushrooms, curd cheese.", "Steamed fish."),
    ],
};

/// Three-day diet plan for `category`.
pub fn diet_plan(category: BmiCategory) -> &'static DietPlan {
    match category {
        BmiCategory::Underweight => &UNDERWEIGHT_PLAN,
        BmiCategory::Normal => &NORMAL_PLAN,
        BmiCategory::Overweight => &OVERWEIGHT_PLAN,
        BmiCategory::Obese => &OBESE_PLAN,
    }
}
