//! Loader configuration.
//!
//! Read from a TOML file:
//!
//! ```toml
//! min_version = 1
//! max_version = 1
//! search_paths = ["/opt/grammars"]
//! ```
//!
//! Every key is optional. `GRAMLOAD_CONFIG` names the file picked up by
//! [`LoaderConfig::from_env`].

use std::path::{Path, PathBuf};
use std::{fs, io};

use serde::Deserialize;
use thiserror::Error;

use crate::version::{DESCRIPTOR_VERSION, MIN_COMPATIBLE_VERSION, VersionRange};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "GRAMLOAD_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("failed to read config: {0}")]
	Io(#[from] io::Error),

	#[error("failed to parse config: {0}")]
	Parse(#[from] toml::de::Error),

	#[error("min_version {min} is greater than max_version {max}")]
	InvalidRange { min: u32, max: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
	pub min_version: u32,
	pub max_version: u32,
	/// Extra directories searched for descriptor files, before the defaults.
	pub search_paths: Vec<PathBuf>,
}

impl Default for LoaderConfig {
	fn default() -> Self {
		Self {
			min_version: MIN_COMPATIBLE_VERSION,
			max_version: DESCRIPTOR_VERSION,
			search_paths: Vec::new(),
		}
	}
}

impl LoaderConfig {
	pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(input)?;
		if config.version_range().is_empty() {
			return Err(ConfigError::InvalidRange {
				min: config.min_version,
				max: config.max_version,
			});
		}
		Ok(config)
	}

	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		Self::from_toml_str(&fs::read_to_string(path)?)
	}

	/// Reads the file named by `GRAMLOAD_CONFIG`, or returns defaults when unset.
	pub fn from_env() -> Result<Self, ConfigError> {
		match std::env::var_os(CONFIG_ENV) {
			Some(path) => Self::load(Path::new(&path)),
			None => Ok(Self::default()),
		}
	}

	pub fn version_range(&self) -> VersionRange {
		VersionRange::new(self.min_version, self.max_version)
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn test_empty_config_is_default() {
		assert_eq!(LoaderConfig::from_toml_str("").unwrap(), LoaderConfig::default());
	}

	#[test]
	fn test_parse_full_config() {
		let config = LoaderConfig::from_toml_str(
			r#"
			min_version = 1
			max_version = 3
			search_paths = ["/opt/grammars", "relative/dir"]
			"#,
		)
		.unwrap();
		assert_eq!(config.version_range(), VersionRange::new(1, 3));
		assert_eq!(
			config.search_paths,
			vec![PathBuf::from("/opt/grammars"), PathBuf::from("relative/dir")]
		);
	}

	#[test]
	fn test_inverted_range_rejected() {
		let err = LoaderConfig::from_toml_str("min_version = 4\nmax_version = 2").unwrap_err();
		assert!(matches!(err, ConfigError::InvalidRange { min: 4, max: 2 }));
	}

	#[test]
	fn test_unknown_key_rejected() {
		let err = LoaderConfig::from_toml_str("colour = \"red\"").unwrap_err();
		assert!(matches!(err, ConfigError::Parse(_)));
	}

	#[test]
	fn test_load_from_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "max_version = 2").unwrap();
		let config = LoaderConfig::load(file.path()).unwrap();
		assert_eq!(config.version_range(), VersionRange::new(MIN_COMPATIBLE_VERSION, 2));
	}

	#[test]
	fn test_load_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let err = LoaderConfig::load(&dir.path().join("nope.toml")).unwrap_err();
		assert!(matches!(err, ConfigError::Io(_)));
	}
}
