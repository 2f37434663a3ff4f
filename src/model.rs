use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

use crate::instructions::{parse_instructions, InstructionStep};
use crate::youtube;

/// Number of indexed ingredient/measure slots in a TheMealDB record
pub const INGREDIENT_SLOTS: usize = 20;

/// Shown in place of the steps when a recipe has none
pub const NO_INSTRUCTIONS_MESSAGE: &str = "No instructions available.";

/// Envelope returned by both search and lookup endpoints.
/// `meals` is null when nothing matched.
#[derive(Debug, Deserialize)]
pub struct MealsResponse {
    pub meals: Option<Vec<MealRecord>>,
}

/// A recipe record as TheMealDB returns it
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct MealRecord {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strYoutube", default)]
    pub youtube: Option<String>,
    /// Everything else, including strIngredientN / strMeasureN
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

impl MealRecord {
    fn slot(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Ingredients from the indexed slots, skipping blank ingredient names.
    pub fn ingredients(&self) -> Vec<Ingredient> {
        (1..=INGREDIENT_SLOTS)
            .filter_map(|i| {
                let item = self.slot(&format!("strIngredient{i}"))?.trim();
                if item.is_empty() {
                    return None;
                }
                let quantity = self
                    .slot(&format!("strMeasure{i}"))
                    .unwrap_or_default()
                    .trim();
                Some(Ingredient {
                    quantity: quantity.to_string(),
                    item: item.to_string(),
                })
            })
            .collect()
    }
}

/// Minimal projection used for result cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
}

impl From<&MealRecord> for RecipeSummary {
    fn from(record: &MealRecord) -> Self {
        RecipeSummary {
            id: record.id.clone(),
            name: record.name.clone(),
            thumbnail_url: record.thumbnail.clone().unwrap_or_default(),
        }
    }
}

/// Lightweight (id, name) pair shown while typing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub id: String,
    pub name: String,
}

impl From<&MealRecord> for Suggestion {
    fn from(record: &MealRecord) -> Self {
        Suggestion {
            id: record.id.clone(),
            name: record.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub quantity: String,
    pub item: String,
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quantity.is_empty() {
            write!(f, "{}", self.item)
        } else {
            write!(f, "{} {}", self.quantity, self.item)
        }
    }
}

/// Full recipe as shown on the detail view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeDetail {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
    pub ingredients: Vec<Ingredient>,
    pub raw_instructions: String,
    pub video_url: Option<String>,
}

impl RecipeDetail {
    /// Instruction text split into ordered steps.
    pub fn steps(&self) -> Vec<InstructionStep> {
        parse_instructions(&self.raw_instructions)
    }

    /// Steps joined one per line, or the fallback message when there are none.
    pub fn instructions_text(&self) -> String {
        let steps = self.steps();
        if steps.is_empty() {
            return NO_INSTRUCTIONS_MESSAGE.to_string();
        }
        steps
            .iter()
            .map(InstructionStep::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn video_id(&self) -> Option<String> {
        self.video_url.as_deref().and_then(youtube::extract_video_id)
    }

    /// Embeddable player URL; None suppresses the video section entirely.
    pub fn embed_url(&self) -> Option<String> {
        self.video_id().map(|id| youtube::embed_url(&id))
    }
}

impl From<MealRecord> for RecipeDetail {
    fn from(record: MealRecord) -> Self {
        let ingredients = record.ingredients();
        RecipeDetail {
            id: record.id,
            name: record.name,
            thumbnail_url: record.thumbnail.unwrap_or_default(),
            ingredients,
            raw_instructions: record.instructions.unwrap_or_default(),
            video_url: record.youtube.filter(|url| !url.trim().is_empty()),
        }
    }
}
