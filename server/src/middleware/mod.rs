pub mod cors;

pub use cors::cors_from_settings;
