//! Storefront configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::money::Money;

/// Storefront configuration file (TOML).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashConfig {
    /// Directory the ledger store writes to.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Flat service fee in cents, applied once per non-empty order.
    #[serde(default = "default_service_fee_cents")]
    pub service_fee_cents: i64,
}

impl DashConfig {
    /// Load config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CommerceError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        toml::from_str(&content).map_err(|e| {
            CommerceError::Config(format!("failed to parse {}: {e}", path.display()))
        })
    }

    /// The service fee as money.
    ///
    /// A negative configured fee is treated as zero.
    pub fn service_fee(&self) -> Money {
        Money::new(self.service_fee_cents.max(0))
    }
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            service_fee_cents: default_service_fee_cents(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".oakdash")
}

fn default_service_fee_cents() -> i64 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashConfig::default();
        assert_eq!(config.data_dir, PathBuf::from(".oakdash"));
        assert_eq!(config.service_fee(), Money::new(100));
    }

    #[test]
    fn test_parse_with_partial_fields() {
        let config: DashConfig = toml::from_str("service_fee_cents = 50").unwrap();
        assert_eq!(config.service_fee(), Money::new(50));
        assert_eq!(config.data_dir, PathBuf::from(".oakdash"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("oakdash.toml");
        std::fs::write(&path, "data_dir = \"/tmp/dash\"\nservice_fee_cents = 0\n").unwrap();

        let config = DashConfig::load(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/dash"));
        assert!(config.service_fee().is_zero());
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let err = DashConfig::load("/no/such/oakdash.toml").unwrap_err();
        assert!(matches!(err, CommerceError::Config(_)));
    }

    #[test]
    fn test_negative_fee_clamps_to_zero() {
        let config = DashConfig {
            data_dir: default_data_dir(),
            service_fee_cents: -25,
        };
        assert!(config.service_fee().is_zero());
    }
}
