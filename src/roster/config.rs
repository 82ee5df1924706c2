use crate::error::{Result, RosterError};
use crate::model::MAX_STUDENTS;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_STUDENT_COUNT: usize = 20;
const DEFAULT_SEED: u64 = 4;
const DEFAULT_HISTORY_SIZE: usize = 200;

/// Configuration for roster, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Number of students `open` generates when no count is given
    #[serde(default = "default_student_count")]
    pub student_count: usize,

    /// Seed `open` uses when no seed is given
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Number of lines kept in the interactive history
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

fn default_student_count() -> usize {
    DEFAULT_STUDENT_COUNT
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_history_size() -> usize {
    DEFAULT_HISTORY_SIZE
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            student_count: DEFAULT_STUDENT_COUNT,
            seed: DEFAULT_SEED,
            history_size: DEFAULT_HISTORY_SIZE,
        }
    }
}

impl RosterConfig {
    /// The per-user config directory (e.g. `~/.config/roster`).
    pub fn default_dir() -> Result<PathBuf> {
        ProjectDirs::from("com", "roster", "roster")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| RosterError::Config("Could not determine config dir".to_string()))
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RosterConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_STUDENTS).contains(&self.student_count) {
            return Err(RosterError::Config(format!(
                "student_count must be between 1 and {}, got {}",
                MAX_STUDENTS, self.student_count
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RosterConfig::default();
        assert_eq!(config.student_count, 20);
        assert_eq!(config.seed, 4);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = RosterConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("nested");

        let config = RosterConfig {
            student_count: 50,
            seed: 99,
            history_size: 10,
        };
        config.save(&nested).unwrap();

        let loaded = RosterConfig::load(&nested).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{ "seed": 7 }"#).unwrap();

        let loaded = RosterConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.seed, 7);
        assert_eq!(loaded.student_count, 20);
    }

    #[test]
    fn test_count_bounds() {
        let at = |student_count| RosterConfig {
            student_count,
            ..RosterConfig::default()
        };

        assert!(at(1).validate().is_ok());
        assert!(at(MAX_STUDENTS).validate().is_ok());
        assert!(matches!(
            at(MAX_STUDENTS + 1).validate(),
            Err(RosterError::Config(_))
        ));
        assert!(at(2_000_000).validate().is_err());
    }

    #[test]
    fn test_oversized_count_in_file_is_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{ "student_count": 20000 }"#,
        )
        .unwrap();

        assert!(matches!(
            RosterConfig::load(temp_dir.path()),
            Err(RosterError::Config(_))
        ));
    }

    #[test]
    fn test_zero_count_is_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{ "student_count": 0 }"#,
        )
        .unwrap();

        assert!(matches!(
            RosterConfig::load(temp_dir.path()),
            Err(RosterError::Config(_))
        ));
    }
}
