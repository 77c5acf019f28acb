pub mod commands;
pub mod config;
pub mod format;
pub mod runner;
