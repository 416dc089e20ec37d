// src/lib.rs
pub mod app;
pub mod cli;
pub mod config;
pub mod logging;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
