pub mod cli;
pub mod config;
pub mod core;
pub mod pricing;
pub mod utils;
