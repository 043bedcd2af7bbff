pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod probe;
pub mod ui;
pub mod utils;
