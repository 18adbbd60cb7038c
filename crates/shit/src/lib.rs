//! Built-in grammar for the `shit` language.
//!
//! The descriptor is built once per process and shared by every handle
//! loaded from it.
//!
//! ```
//! let language = gramload_shit::language().unwrap();
//! assert!(language.is_valid());
//! assert_eq!(language.name(), "shit");
//! ```

use std::sync::{Arc, LazyLock};

use gramload_descriptor::GrammarDescriptor;
use gramload_language::{GrammarProvider, Language, LanguageRegistry, LoadError, load_language};

mod grammar;
pub mod symbols;

pub use grammar::GRAMMAR_NAME;

static DESCRIPTOR: LazyLock<Arc<GrammarDescriptor>> =
	LazyLock::new(|| Arc::new(grammar::build_descriptor()));

/// The compiled `shit` grammar.
pub fn descriptor() -> Arc<GrammarDescriptor> {
	Arc::clone(&DESCRIPTOR)
}

/// Loads the `shit` grammar with the default loader.
pub fn language() -> Result<Language, LoadError> {
	load_language(descriptor())
}

/// Provider handing out the built-in descriptor.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShitGrammar;

impl GrammarProvider for ShitGrammar {
	fn name(&self) -> &str {
		GRAMMAR_NAME
	}

	fn grammar(&self) -> Arc<GrammarDescriptor> {
		descriptor()
	}
}

/// Registers the built-in grammar with `registry`.
pub fn register(registry: &LanguageRegistry) -> bool {
	registry.register(ShitGrammar)
}
