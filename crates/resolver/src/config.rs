use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReadMode {
    /// Only the selected folder itself
    #[default]
    Flat,
    /// The selected folder and all of its subfolders
    Recursive,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO-related error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config {}: {}", .0.display(), .1)]
    DeserializationError(PathBuf, toml::de::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ResolverConfig {
    pub read_mode: ReadMode,
    /// Hand mesh files found next to the textures to the importer
    pub import_meshes: bool,
    /// Sort the listing by name instead of keeping the file system order
    pub sort_listing: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            read_mode: ReadMode::Flat,
            import_meshes: true,
            sort_listing: false,
        }
    }
}

impl ResolverConfig {
    pub fn load(path: &Path) -> Result<ResolverConfig, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| ConfigError::DeserializationError(path.to_path_buf(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_when_keys_missing() {
        let config: ResolverConfig = toml::from_str("").unwrap();
        assert_eq!(config, ResolverConfig::default());
        assert!(config.import_meshes);
        assert_eq!(config.read_mode, ReadMode::Flat);
    }

    #[test]
    fn test_partial_config() {
        let config: ResolverConfig =
            toml::from_str("read_mode = \"Recursive\"\nimport_meshes = false\n").unwrap();
        assert_eq!(config.read_mode, ReadMode::Recursive);
        assert!(!config.import_meshes);
        assert!(!config.sort_listing);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "sort_listing = true\n").unwrap();

        let config = ResolverConfig::load(file.path()).unwrap();
        assert!(config.sort_listing);
        assert!(config.import_meshes);
    }

    #[test]
    fn test_load_reports_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "read_mode = 5\n").unwrap();

        match ResolverConfig::load(file.path()) {
            Err(ConfigError::DeserializationError(path, _)) => assert_eq!(path, file.path()),
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ResolverConfig::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
