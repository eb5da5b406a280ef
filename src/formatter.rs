//! Plain-text rendering of recipe details for the detail pane and exports.

use crate::model::{MealLookup, MealRecord, RecipeDetail};

/// Shown in the detail pane when a lookup finds no meal
pub const NO_DETAILS: &str = "Details not available.";

/// Format a raw meal record for the detail pane.
pub fn format_details(meal: &MealRecord) -> String {
    render_detail(&RecipeDetail::from(meal))
}

/// Category, ingredient lines and instructions; instructions are kept verbatim.
pub fn render_detail(detail: &RecipeDetail) -> String {
    let mut output = format!("Category: {}\n\nIngredients:\n", detail.category);
    for (ingredient, measure) in &detail.ingredients {
        output.push_str(&format!("{ingredient} - {measure}\n"));
    }
    output.push_str("\nInstructions:\n");
    output.push_str(&detail.instructions);
    output
}

/// Random recipes are shown with their name on top since no list entry names them.
pub fn format_random(lookup: &MealLookup) -> String {
    format!("Recipe: {}\n\n{}", lookup.name, render_detail(&lookup.detail))
}
