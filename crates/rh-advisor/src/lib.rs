//! Roundhouse advisor — library crate for the suggest-only chat API.
//!
//! Re-exports all modules so the binary (`main.rs`) and external crates
//! (e.g. `rh-e2e-tests`) can access internal types like `AppState`,
//! `build_router`, and `DashboardProvider`.

pub mod config;
pub mod error;
pub mod intents;
pub mod mock;
pub mod provider;
pub mod routes;
pub mod state;
pub mod suggest;
