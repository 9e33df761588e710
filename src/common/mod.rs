pub mod config;
pub mod error;
pub mod file_utils;
pub mod logging;

pub use config::Config;
