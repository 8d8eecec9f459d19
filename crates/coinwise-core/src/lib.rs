pub mod config;
pub mod error;

pub use config::CoinwiseConfig;
pub use error::{CoinwiseError, Result};
