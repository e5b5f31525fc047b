use crate::error::{ConfigError, ConfigResult};
use std::path::{Path, PathBuf};

/// Configuration utility functions
pub struct ConfigUtils;

impl ConfigUtils {
    /// Find a declaration file in standard locations
    pub fn find_config_file(filename: &str) -> ConfigResult<PathBuf> {
        let search_paths = vec![
            // Current directory
            PathBuf::from("."),
            // Config subdirectory
            PathBuf::from("config"),
            PathBuf::from("configs"),
            // System config directory
            PathBuf::from("/etc/chainsmith"),
            // Application directory
            std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
                .map(|p| p.join("config"))
                .unwrap_or_else(|| PathBuf::from("config")),
        ];

        for search_path in search_paths.into_iter() {
            let config_path = search_path.join(filename);
            if config_path.exists() && config_path.is_file() {
                return Ok(config_path);
            }

            // Also try with common extensions
            for ext in &["toml", "json"] {
                let config_with_ext = search_path.join(format!("{}.{}", filename, ext));
                if config_with_ext.exists() && config_with_ext.is_file() {
                    return Ok(config_with_ext);
                }
            }
        }

        Err(ConfigError::FileNotFound(format!(
            "Declaration file '{}' not found in standard locations",
            filename
        )))
    }

    /// Default declaration file name for a network
    pub fn default_config_file(network: &str) -> String {
        format!("{}.toml", network)
    }

    /// Create a configuration directory if it doesn't exist
    pub fn ensure_config_directory<P: AsRef<Path>>(path: P) -> ConfigResult<()> {
        let path = path.as_ref();
        if !path.exists() {
            std::fs::create_dir_all(path).map_err(ConfigError::Io)?;
        } else if !path.is_dir() {
            return Err(ConfigError::Validation(format!(
                "Path exists but is not a directory: {}",
                path.display()
            )));
        }
        Ok(())
    }
}
