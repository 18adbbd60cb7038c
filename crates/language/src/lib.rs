//! Language handles over compiled grammars
//!
//! This crate turns a [`GrammarDescriptor`] into a [`Language`] a parsing
//! engine can use, refusing descriptors with an unsupported version or
//! inconsistent tables.
//!
//! # Architecture
//!
//! * [`loader`]: `LanguageLoader`, `GrammarProvider`, `LoadError`
//! * [`validate`]: structural checks on descriptor tables
//! * [`language`]: the validated handle
//! * [`lexer`]: tokenizer driven by a handle's lex automaton
//! * [`grammar`]: descriptor files and search paths
//! * [`registry`]: named, cached lookup over providers and files
//! * [`config`]: TOML loader configuration
//!
//! [`GrammarDescriptor`]: gramload_descriptor::GrammarDescriptor

pub mod config;
pub mod grammar;
pub mod language;
pub mod lexer;
pub mod loader;
pub mod registry;
pub mod validate;
pub mod version;

pub use config::{ConfigError, LoaderConfig};
pub use grammar::{GrammarError, find_grammar, grammar_search_paths, load_grammar, load_grammar_file};
pub use language::Language;
pub use lexer::{LexError, Lexer, Token};
pub use loader::{GrammarProvider, LanguageLoader, LoadError, load_language};
pub use registry::{LanguageRegistry, language_registry};
pub use validate::{Malformed, validate};
pub use version::{DESCRIPTOR_VERSION, MIN_COMPATIBLE_VERSION, VersionRange};
