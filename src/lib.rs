pub mod bank;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod session;
pub mod state;
pub mod timer;
pub mod tui;
pub mod ui;
