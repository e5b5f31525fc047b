use crate::declaration::DeclarationSet;
use crate::error::{ConfigError, ConfigResult};
use std::path::Path;
use tokio::fs;

/// File-based declaration loader
///
/// Files hold partial declarations; resolvability is checked only after all
/// layers are merged, so no semantic validation happens here.
pub struct FileLoader;

impl FileLoader {
    /// Load declarations from a TOML file
    pub async fn load_toml<P: AsRef<Path>>(path: P) -> ConfigResult<DeclarationSet> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await.map_err(ConfigError::Io)?;

        let declarations: DeclarationSet = toml::from_str(&content).map_err(ConfigError::Toml)?;

        Ok(declarations)
    }

    /// Load declarations from a JSON file
    pub async fn load_json<P: AsRef<Path>>(path: P) -> ConfigResult<DeclarationSet> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await.map_err(ConfigError::Io)?;

        let declarations: DeclarationSet =
            serde_json::from_str(&content).map_err(ConfigError::Json)?;

        Ok(declarations)
    }

    /// Auto-detect file format and load declarations
    pub async fn load_auto<P: AsRef<Path>>(path: P) -> ConfigResult<DeclarationSet> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::load_toml(path).await,
            Some("json") => Self::load_json(path).await,
            Some(ext) => Err(ConfigError::InvalidFormat(format!(
                "Unsupported file extension: {}",
                ext
            ))),
            None => {
                // Try TOML first, then JSON
                match Self::load_toml(path).await {
                    Ok(declarations) => Ok(declarations),
                    Err(_) => Self::load_json(path).await,
                }
            }
        }
    }

    /// Save declarations to a TOML file
    pub async fn save_toml<P: AsRef<Path>>(
        declarations: &DeclarationSet,
        path: P,
    ) -> ConfigResult<()> {
        let content = toml::to_string_pretty(declarations)
            .map_err(|e| ConfigError::InvalidFormat(format!("TOML serialization failed: {}", e)))?;

        fs::write(path, content).await.map_err(ConfigError::Io)?;

        Ok(())
    }

    /// Save declarations to a JSON file
    pub async fn save_json<P: AsRef<Path>>(
        declarations: &DeclarationSet,
        path: P,
    ) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(declarations).map_err(ConfigError::Json)?;

        fs::write(path, content).await.map_err(ConfigError::Io)?;

        Ok(())
    }
}
