pub mod client;
pub mod models;

pub use client::{OddsApiClient, OddsSnapshot};
pub use models::*;
