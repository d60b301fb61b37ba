// Library entry so integration tests can reach the handlers and the store
// without a Discord connection. The binary (`main.rs`) only wires these together.
pub mod commands;
pub mod config;
pub mod constants;
pub mod database;
pub mod error;
pub mod handler;
pub mod logging;
pub mod model;
pub mod services;
pub mod ui;

pub use model::AppState;
