pub mod health;
pub mod image_handlers;
pub mod ingredient_handlers;
pub mod recipe_handlers;
