#![forbid(unsafe_code)]

pub mod config;
pub mod error;

pub use config::TallyConfig;
pub use error::CoreError;
