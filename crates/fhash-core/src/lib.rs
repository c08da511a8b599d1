pub mod config;
pub mod digest;
pub mod logging;
