pub mod config;
pub mod counter;
pub mod error;
pub mod estimate;
pub mod points;
pub mod sink;
pub mod utils;

pub use error::{Error, Result};
