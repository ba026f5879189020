pub mod client;
pub mod structs;

pub use client::{AiGatewayClient, GatewayError};
pub use structs::*;
