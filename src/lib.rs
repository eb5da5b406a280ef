//! Search TheMealDB, view recipe details and thumbnails in the terminal, and
//! save the shown recipe as a text file.

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod exporter;
pub mod formatter;
pub mod logging;
pub mod model;
pub mod thumbnail;
pub mod ui;

pub use client::{MealDbClient, MealDbClientBuilder, RecipeSource};
pub use config::FinderConfig;
pub use error::FinderError;
pub use exporter::{export_details, resolve_export_path};
pub use formatter::{format_details, format_random, render_detail, NO_DETAILS};
pub use model::{MealLookup, MealRecord, RecipeDetail, RecipeImageRef, RecipeSummary, NO_RESULTS};
