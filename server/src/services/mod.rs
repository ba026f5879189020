pub mod image_service;
pub mod ingredient_catalog;
pub mod recipe_service;

pub use image_service::ImageService;
pub use recipe_service::RecipeService;
