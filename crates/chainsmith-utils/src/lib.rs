//! Shared primitives for chainsmith crates
//!
//! Error taxonomy and the structured logging facility used across the
//! chainsmith deployment tool.

pub mod error;
pub mod logging;

pub use error::{ChainsmithError, ChainsmithResult};
pub use logging::{get_logger, init_logger, LogCategory, LogConfig, LogLevel};
