//! HTTP handlers for the glowmatch REST API.
//!
//! - `health`: liveness and catalog size
//! - `top_loved`: popularity listing
//! - `recommend`: similarity recommendations
//! - `catalog`: catalog hot reload

pub mod catalog;
pub mod health;
pub mod helpers;
pub mod recommend;
pub mod top_loved;

pub use catalog::reload_catalog;
pub use health::health_check;
pub use recommend::recommend_products;
pub use top_loved::top_loved_products;
