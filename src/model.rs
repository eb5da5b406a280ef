use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Text shown in the results list when a search matches nothing
pub const NO_RESULTS: &str = "No recipe found.";

/// Number of fixed-width ingredient/measure slots in a meal record
pub const INGREDIENT_SLOTS: usize = 20;

/// Literal the API uses for an unset ingredient or measure
const NULL_SENTINEL: &str = "null";

/// Top-level response of the search and random endpoints
#[derive(Debug, Deserialize)]
pub struct MealsEnvelope {
    #[serde(default)]
    pub meals: Option<Vec<MealRecord>>,
}

impl MealsEnvelope {
    pub fn into_meals(self) -> Vec<MealRecord> {
        self.meals.unwrap_or_default()
    }
}

/// A single meal as returned by the API
#[derive(Debug, Clone, Deserialize)]
pub struct MealRecord {
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    /// Everything else, including the strIngredientN/strMeasureN slots
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl MealRecord {
    fn slot(&self, prefix: &str, index: usize) -> Option<&str> {
        self.extra
            .get(&format!("{prefix}{index}"))
            .and_then(Value::as_str)
    }

    /// Ingredient/measure pairs in slot order, dropping empty and "null" sides
    pub fn ingredients(&self) -> Vec<(String, String)> {
        (1..=INGREDIENT_SLOTS)
            .filter_map(|i| {
                let ingredient = self.slot("strIngredient", i)?;
                let measure = self.slot("strMeasure", i)?;
                (is_present(ingredient) && is_present(measure))
                    .then(|| (ingredient.to_string(), measure.to_string()))
            })
            .collect()
    }

    pub fn image_ref(&self) -> RecipeImageRef {
        RecipeImageRef {
            url: self.thumbnail.clone().unwrap_or_default(),
        }
    }
}

fn is_present(value: &str) -> bool {
    !value.is_empty() && value != NULL_SENTINEL
}

/// One entry of the results list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummary {
    pub name: String,
}

impl RecipeSummary {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The entry shown in place of results when nothing matched
    pub fn placeholder() -> Self {
        Self::new(NO_RESULTS)
    }

    pub fn is_placeholder(&self) -> bool {
        self.name == NO_RESULTS
    }
}

/// Category, filtered ingredients and instructions of one recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDetail {
    pub category: String,
    pub ingredients: Vec<(String, String)>,
    pub instructions: String,
}

impl From<&MealRecord> for RecipeDetail {
    fn from(meal: &MealRecord) -> Self {
        RecipeDetail {
            category: meal.category.clone().unwrap_or_default(),
            ingredients: meal.ingredients(),
            instructions: meal.instructions.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeImageRef {
    pub url: String,
}

impl RecipeImageRef {
    pub fn is_empty(&self) -> bool {
        self.url.trim().is_empty()
    }
}

/// Everything the detail view needs, derived from a single record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealLookup {
    pub name: String,
    pub detail: RecipeDetail,
    pub image: RecipeImageRef,
}

impl From<&MealRecord> for MealLookup {
    fn from(meal: &MealRecord) -> Self {
        MealLookup {
            name: meal.name.clone(),
            detail: RecipeDetail::from(meal),
            image: meal.image_ref(),
        }
    }
}
