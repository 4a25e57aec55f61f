pub mod adapters;
pub mod core;
pub mod global_constants;

pub use crate::core::errors::{Result, VisionError};
