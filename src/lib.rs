pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod flatten;
pub mod logging;
pub mod provider;
pub mod retry;

pub use config::Config;
pub use error::{Error, Result};
