//! order-api — Order management service
//!
//! HTTP service that:
//! - Accepts order-creation requests and persists them in PostgreSQL
//! - Annotates each new order with a risk score from the risk service
//!   (fail-open: an unavailable risk service scores the order 0)
//! - Serves individual orders, the full order list, and per-day-of-week
//!   average order size statistics

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod risk;
pub mod state;

pub use config::Config;
pub use state::AppState;
