//! Turning descriptors into [`Language`] handles.
//!
//! Loading is a single validate-and-wrap step. It either yields a handle over
//! a descriptor that passed every check or reports why it could not; a caller
//! never sees a half-built handle. The loader does not log, retry or repair:
//! a bad descriptor stays bad, so every failure is terminal for that call.

use std::sync::Arc;

use gramload_descriptor::{DecodeError, GrammarDescriptor, decode_payload, split_header};
use thiserror::Error;

use crate::config::LoaderConfig;
use crate::language::Language;
use crate::validate::{Malformed, validate};
use crate::version::VersionRange;

/// Why a descriptor could not be loaded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
	/// No descriptor was supplied.
	#[error("no grammar descriptor was provided")]
	NullDescriptor,

	/// The descriptor's version tag is outside the loader's range.
	#[error("descriptor version {found} is not supported (loader accepts {supported})")]
	IncompatibleVersion { found: u32, supported: VersionRange },

	/// The descriptor's tables violate an invariant.
	#[error("malformed descriptor: {0}")]
	MalformedDescriptor(#[from] Malformed),
}

/// Source of a compiled grammar.
///
/// Providers hand out the same descriptor every time and never fail; a broken
/// built-in grammar is a build problem, not a runtime one.
pub trait GrammarProvider: Send + Sync {
	/// Grammar name, used as the registry key.
	fn name(&self) -> &str;

	fn grammar(&self) -> Arc<GrammarDescriptor>;
}

/// Validates descriptors against a supported version range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageLoader {
	supported: VersionRange,
}

impl LanguageLoader {
	pub fn new(supported: VersionRange) -> Self {
		Self { supported }
	}

	pub fn from_config(config: &LoaderConfig) -> Self {
		Self::new(config.version_range())
	}

	pub fn supported(&self) -> VersionRange {
		self.supported
	}

	/// Validates `descriptor` and wraps it in a handle.
	///
	/// Accepts either an `Arc<GrammarDescriptor>` or an `Option` of one;
	/// `None` is reported as [`LoadError::NullDescriptor`].
	pub fn load(
		&self,
		descriptor: impl Into<Option<Arc<GrammarDescriptor>>>,
	) -> Result<Language, LoadError> {
		let descriptor = descriptor.into().ok_or(LoadError::NullDescriptor)?;
		self.check_version(descriptor.version)?;
		validate(&descriptor)?;
		Ok(Language::new(descriptor))
	}

	/// Loads a descriptor from its blob encoding.
	///
	/// The version tag is checked before the payload is decoded.
	pub fn load_bytes(&self, data: &[u8]) -> Result<Language, LoadError> {
		let (version, payload) = split_header(data).map_err(|e| match e {
			DecodeError::Empty => LoadError::NullDescriptor,
			other => Malformed::Encoding(other.to_string()).into(),
		})?;
		self.check_version(version)?;
		let descriptor =
			decode_payload(version, payload).map_err(|e| Malformed::Encoding(e.to_string()))?;
		self.load(Arc::new(descriptor))
	}

	pub fn load_provider(&self, provider: &dyn GrammarProvider) -> Result<Language, LoadError> {
		self.load(provider.grammar())
	}

	fn check_version(&self, found: u32) -> Result<(), LoadError> {
		if self.supported.contains(found) {
			Ok(())
		} else {
			Err(LoadError::IncompatibleVersion {
				found,
				supported: self.supported,
			})
		}
	}
}

/// Loads with the default version range.
pub fn load_language(
	descriptor: impl Into<Option<Arc<GrammarDescriptor>>>,
) -> Result<Language, LoadError> {
	LanguageLoader::default().load(descriptor)
}
