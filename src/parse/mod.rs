mod error;
mod events;
mod extractor;
mod menu;
mod price;

pub use error::Error;
pub use extractor::extract_meal_plan;
pub use menu::{Category, Meal, MealPlan};
