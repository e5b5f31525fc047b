//! Configuration loading and environment handling

pub mod env;
pub mod file;
pub mod validation;

pub use env::EnvLoader;
pub use file::FileLoader;
pub use validation::ConfigValidator;

use crate::declaration::DeclarationSet;
use crate::error::ConfigResult;
use crate::networks;
use chainsmith_utils::logging::{get_logger, LogCategory};
use std::path::Path;

/// Main configuration loader
///
/// Precedence: built-in presets <- declaration file <- process environment.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a declaration set from a single file, without presets or
    /// environment overrides
    pub async fn load_config<P: AsRef<Path>>(&self, path: P) -> ConfigResult<DeclarationSet> {
        FileLoader::load_auto(path).await
    }

    /// Load the full declaration set with standard precedence
    pub async fn load_with_overrides<P: AsRef<Path>>(
        &self,
        config_path: Option<P>,
    ) -> ConfigResult<DeclarationSet> {
        let mut declarations = networks::builtin_declarations();

        if let Some(path) = config_path {
            let from_file = FileLoader::load_auto(path).await?;
            declarations.merge_from(from_file);
            if let Some(logger) = get_logger() {
                let _ = logger.info(
                    LogCategory::Config,
                    "declaration file layered over built-in presets",
                );
            }
        }

        EnvLoader::apply_overrides(&mut declarations)?;
        ConfigValidator::validate_set(&declarations)?;

        Ok(declarations)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
