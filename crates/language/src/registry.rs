//! Named language lookup with caching.
//!
//! A registry resolves a grammar name to a [`Language`] by first asking the
//! registered providers and then searching for a descriptor file. Successful
//! loads are cached; the first handle cached for a name is the one every
//! later lookup returns.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use tracing::{info, warn};

use crate::config::LoaderConfig;
use crate::grammar::{GrammarError, grammar_search_paths, load_grammar};
use crate::language::Language;
use crate::loader::{GrammarProvider, LanguageLoader};

pub struct LanguageRegistry {
	loader: LanguageLoader,
	search_paths: Vec<PathBuf>,
	providers: RwLock<HashMap<String, Arc<dyn GrammarProvider>>>,
	loaded: RwLock<HashMap<String, Language>>,
}

impl LanguageRegistry {
	pub fn new(loader: LanguageLoader, search_paths: Vec<PathBuf>) -> Self {
		Self {
			loader,
			search_paths,
			providers: RwLock::new(HashMap::new()),
			loaded: RwLock::new(HashMap::new()),
		}
	}

	/// Configured search paths come before the default ones.
	pub fn from_config(config: &LoaderConfig) -> Self {
		let mut search_paths = config.search_paths.clone();
		search_paths.extend(grammar_search_paths());
		Self::new(LanguageLoader::from_config(config), search_paths)
	}

	pub fn loader(&self) -> &LanguageLoader {
		&self.loader
	}

	pub fn search_paths(&self) -> &[PathBuf] {
		&self.search_paths
	}

	/// Registers a provider under its name.
	///
	/// Returns `false` and keeps the existing provider if the name is taken.
	pub fn register(&self, provider: impl GrammarProvider + 'static) -> bool {
		let name = provider.name().to_string();
		let mut providers = self.providers.write();
		if providers.contains_key(&name) {
			warn!(grammar = %name, "Grammar provider already registered");
			return false;
		}
		providers.insert(name, Arc::new(provider));
		true
	}

	/// Names of all registered providers, sorted.
	pub fn provider_names(&self) -> Vec<String> {
		let mut names: Vec<_> = self.providers.read().keys().cloned().collect();
		names.sort();
		names
	}

	pub fn is_loaded(&self, name: &str) -> bool {
		self.loaded.read().contains_key(name)
	}

	/// Returns the language for `name`, loading it on first use.
	pub fn get(&self, name: &str) -> Result<Language, GrammarError> {
		if let Some(lang) = self.loaded.read().get(name) {
			return Ok(lang.clone());
		}

		let lang = self.resolve(name).inspect_err(|e| {
			warn!(grammar = name, error = %e, "Failed to load grammar");
		})?;

		let mut loaded = self.loaded.write();
		let lang = loaded.entry(name.to_string()).or_insert(lang).clone();
		info!(grammar = name, version = lang.version(), "Loaded grammar");
		Ok(lang)
	}

	fn resolve(&self, name: &str) -> Result<Language, GrammarError> {
		let provider = self.providers.read().get(name).cloned();
		match provider {
			Some(provider) => Ok(self.loader.load_provider(provider.as_ref())?),
			None => load_grammar(&self.loader, name, &self.search_paths),
		}
	}
}

impl Default for LanguageRegistry {
	fn default() -> Self {
		Self::from_config(&LoaderConfig::default())
	}
}

/// Process-wide registry, configured from `GRAMLOAD_CONFIG` on first use.
pub fn language_registry() -> &'static LanguageRegistry {
	static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();
	REGISTRY.get_or_init(|| {
		let config = LoaderConfig::from_env().unwrap_or_else(|e| {
			warn!(error = %e, "Invalid loader config, using defaults");
			LoaderConfig::default()
		});
		LanguageRegistry::from_config(&config)
	})
}

#[cfg(test)]
mod tests {
	use std::fs;

	use gramload_descriptor::{GrammarDescriptor, LexState, StateId, Symbol, Transition, encode};

	use super::*;
	use crate::LoadError;
	use crate::version::VersionRange;

	struct Fixed {
		name: &'static str,
		version: u32,
	}

	impl GrammarProvider for Fixed {
		fn name(&self) -> &str {
			self.name
		}

		fn grammar(&self) -> Arc<GrammarDescriptor> {
			let mut b = GrammarDescriptor::builder(self.name, self.version);
			b.symbol(Symbol::end());
			let dot = b.symbol(Symbol::literal("."));
			b.state(LexState::new(vec![Transition::single('.', StateId(1))]));
			b.state(LexState::accepting(dot, Vec::new()));
			Arc::new(b.build())
		}
	}

	#[test]
	fn test_provider_lookup_is_cached() {
		let registry = LanguageRegistry::new(LanguageLoader::default(), Vec::new());
		assert!(registry.register(Fixed {
			name: "dots",
			version: 1
		}));
		assert!(!registry.is_loaded("dots"));

		let first = registry.get("dots").unwrap();
		let second = registry.get("dots").unwrap();
		assert!(registry.is_loaded("dots"));
		assert!(Arc::ptr_eq(first.descriptor(), second.descriptor()));
	}

	#[test]
	fn test_duplicate_provider_rejected() {
		let registry = LanguageRegistry::new(LanguageLoader::default(), Vec::new());
		assert!(registry.register(Fixed {
			name: "dots",
			version: 1
		}));
		assert!(!registry.register(Fixed {
			name: "dots",
			version: 2
		}));
		assert_eq!(registry.provider_names(), vec!["dots".to_string()]);
		assert_eq!(registry.get("dots").unwrap().version(), 1);
	}

	#[test]
	fn test_failed_load_is_not_cached() {
		let registry = LanguageRegistry::new(LanguageLoader::new(VersionRange::exact(1)), Vec::new());
		registry.register(Fixed {
			name: "future",
			version: 5,
		});
		let err = registry.get("future").unwrap_err();
		assert!(matches!(
			err,
			GrammarError::Load(LoadError::IncompatibleVersion { found: 5, .. })
		));
		assert!(!registry.is_loaded("future"));
	}

	#[test]
	fn test_falls_back_to_files() {
		let dir = tempfile::tempdir().unwrap();
		let blob = encode(&Fixed {
			name: "disk",
			version: 1,
		}
		.grammar())
		.unwrap();
		fs::write(dir.path().join("disk.grammar"), blob).unwrap();

		let registry = LanguageRegistry::new(LanguageLoader::default(), vec![dir.path().to_path_buf()]);
		assert_eq!(registry.get("disk").unwrap().name(), "disk");
		assert!(matches!(registry.get("absent"), Err(GrammarError::NotFound(_))));
	}

	#[test]
	fn test_global_registry_is_shared() {
		assert!(std::ptr::eq(language_registry(), language_registry()));
	}

	#[test]
	fn test_config_paths_come_first() {
		let config = LoaderConfig {
			search_paths: vec![PathBuf::from("/configured")],
			..LoaderConfig::default()
		};
		let registry = LanguageRegistry::from_config(&config);
		assert_eq!(registry.search_paths()[0], PathBuf::from("/configured"));
		assert!(registry.search_paths().len() > 1);
	}
}
