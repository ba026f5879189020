pub mod generated_image;
pub mod recipe;
pub use generated_image::*;
pub use recipe::*;
