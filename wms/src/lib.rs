mod app;
pub mod app_core;
pub mod auth;
mod background;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod input;
pub mod log_buffer;
pub mod logging;
pub mod scan;
pub mod state;
pub mod ui;

pub use app::App;
pub use error::WmsError;

// Always expose testing module (integration tests need it)
pub mod testing;
