//! Shared types and error hierarchy for keyprobe.

pub mod error;
pub mod message;

pub use error::{ApiError, ConfigError, ProbeError};
pub use message::*;
