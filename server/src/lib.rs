//! Cook Book server library
//!
//! Proxies recipe and image generation requests from the Cook Book web app
//! to an AI chat-completion gateway and shapes the answers for the UI.

pub mod clients;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

#[cfg(test)]
mod test_support;

// Re-export commonly used types for convenience
pub use config::AppSettings;
pub use error::AppError;
