//! Portal configuration stored in `~/.mentordesk/config.json`.
//!
//! Every field has a default, so a missing or partial file still yields a
//! working config.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PortalError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalConfig {
    #[serde(default = "default_program_name")]
    pub program_name: String,
    /// Timezone the meeting form preselects.
    #[serde(default = "default_timezone")]
    pub default_timezone: String,
    /// Prefill for the required-meetings field on new rounds.
    #[serde(default = "default_required_meetings")]
    pub default_required_meetings: u32,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            program_name: default_program_name(),
            default_timezone: default_timezone(),
            default_required_meetings: default_required_meetings(),
        }
    }
}

fn default_program_name() -> String {
    "MentorDesk".to_string()
}

fn default_timezone() -> String {
    "America/Los_Angeles".to_string()
}

fn default_required_meetings() -> u32 {
    8
}

/// Resolve the config file path: `~/.mentordesk/config.json`.
pub fn config_path() -> Result<PathBuf, PortalError> {
    let home = dirs::home_dir()
        .ok_or_else(|| PortalError::Config("home directory not found".to_string()))?;
    Ok(home.join(".mentordesk").join("config.json"))
}

/// Load the config, falling back to defaults when no file exists.
pub fn load() -> Result<PortalConfig, PortalError> {
    let path = config_path()?;
    if !path.exists() {
        log::debug!("no config at {}, using defaults", path.display());
        return Ok(PortalConfig::default());
    }
    load_from(&path)
}

/// Load a config from an explicit path. Useful for testing.
pub fn load_from(path: &Path) -> Result<PortalConfig, PortalError> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw)
        .map_err(|err| PortalError::Config(format!("invalid config JSON: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"programName\": \"Acme Mentorship\"}}").unwrap();

        let config = load_from(file.path()).unwrap();
        assert_eq!(config.program_name, "Acme Mentorship");
        assert_eq!(config.default_timezone, "America/Los_Angeles");
        assert_eq!(config.default_required_meetings, 8);
    }

    #[test]
    fn invalid_json_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_from(file.path()).unwrap_err();
        assert!(matches!(err, PortalError::Config(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, PortalError::Io(_)));
    }

    #[test]
    fn defaults_round_trip() {
        let config = PortalConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: PortalConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
