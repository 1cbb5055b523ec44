//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// Base URL of the record store's Dev stage.
pub const DEFAULT_API_BASE: &str = "https://37t74p96y5.execute-api.us-east-1.amazonaws.com/Dev";

/// Application record used when no id is configured.
pub const FALLBACK_RECORD_ID: &str = "fd7b60ca-fb5f-47bb-9f6d-fa5ec6c2a26c";

const API_BASE_ENV: &str = "SEGURO_API_BASE";
const RECORD_ID_ENV: &str = "SEGURO_RECORD_ID";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Record store base URL
    pub api_base_url: Option<String>,
    /// Application record id to load and update
    pub record_id: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("mx", "seguro", "seguro-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Base URL after applying the env override.
    pub fn api_base_url(&self) -> String {
        std::env::var(API_BASE_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
    }

    /// Record id after applying the env override and UUID validation.
    pub fn record_id(&self) -> String {
        let explicit = std::env::var(RECORD_ID_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| self.record_id.clone());
        resolve_record_id(explicit.as_deref())
    }
}

/// Pick the record id: an explicit well-formed UUID wins, anything else
/// falls back to the fixed default.
fn resolve_record_id(explicit: Option<&str>) -> String {
    match explicit {
        Some(id) if !id.is_empty() => match Uuid::parse_str(id) {
            Ok(_) => id.to_string(),
            Err(_) => {
                tracing::warn!("ignoring malformed record id {id:?}");
                FALLBACK_RECORD_ID.to_string()
            }
        },
        _ => FALLBACK_RECORD_ID.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.api_base_url.is_none());
        assert!(config.record_id.is_none());
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = TuiConfig {
            api_base_url: Some("https://example.test/Dev".to_string()),
            record_id: Some(FALLBACK_RECORD_ID.to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.api_base_url, config.api_base_url);
        assert_eq!(parsed.record_id, config.record_id);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.api_base_url.is_none());
        assert!(parsed.record_id.is_none());
    }

    #[test]
    fn test_resolve_record_id_accepts_uuid() {
        let id = "123e4567-e89b-12d3-a456-426614174000";
        assert_eq!(resolve_record_id(Some(id)), id);
    }

    #[test]
    fn test_resolve_record_id_falls_back_when_absent() {
        assert_eq!(resolve_record_id(None), FALLBACK_RECORD_ID);
        assert_eq!(resolve_record_id(Some("")), FALLBACK_RECORD_ID);
    }

    #[test]
    fn test_resolve_record_id_rejects_malformed() {
        assert_eq!(resolve_record_id(Some("not-a-uuid")), FALLBACK_RECORD_ID);
    }

    #[test]
    fn test_load_returns_default_when_no_file() {
        let result = TuiConfig::load();
        assert!(result.is_ok());
    }
}
