//! Descriptor files and search path configuration.
//!
//! Grammars that are not built in are read from `<name>.grammar` blob files.
//! This module handles locating those files and loading them.
//!
//! # Search order
//!
//! 1. Directories from [`LoaderConfig::search_paths`](crate::LoaderConfig)
//! 2. `$GRAMLOAD_RUNTIME/grammars`
//! 3. `gramload/grammars` under the platform data directory
//!    (`$XDG_DATA_HOME` or `~/.local/share` on Linux)
//! 4. `grammars/` next to the executable

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::language::Language;
use crate::loader::{LanguageLoader, LoadError};

/// Environment variable pointing at a runtime directory.
pub const RUNTIME_ENV: &str = "GRAMLOAD_RUNTIME";

/// File extension of descriptor blobs.
pub const GRAMMAR_EXTENSION: &str = "grammar";

/// Errors that can occur when loading a grammar by name or path.
#[derive(Error, Debug)]
pub enum GrammarError {
	/// No provider or descriptor file matches the name.
	#[error("grammar not found: {0}")]
	NotFound(String),

	/// Filesystem I/O error.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// The descriptor was found but rejected.
	#[error(transparent)]
	Load(#[from] LoadError),
}

/// Returns the file name a grammar's descriptor is stored under.
pub fn grammar_file_name(name: &str) -> String {
	format!("{}.{GRAMMAR_EXTENSION}", name.replace('-', "_"))
}

/// Returns the default directories searched for descriptor files.
pub fn grammar_search_paths() -> Vec<PathBuf> {
	let mut paths = Vec::new();

	if let Some(runtime) = std::env::var_os(RUNTIME_ENV) {
		paths.push(PathBuf::from(runtime).join("grammars"));
	}

	if let Some(data) = dirs::data_local_dir() {
		paths.push(data.join("gramload").join("grammars"));
	}

	if let Ok(exe) = std::env::current_exe()
		&& let Some(dir) = exe.parent()
	{
		paths.push(dir.join("grammars"));
	}

	paths
}

/// Finds the descriptor file for `name` in `dirs`, first match wins.
pub fn find_grammar(name: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
	let file_name = grammar_file_name(name);
	dirs.iter()
		.map(|dir| dir.join(&file_name))
		.find(|path| path.is_file())
}

/// Reads and loads a descriptor blob.
pub fn load_grammar_file(loader: &LanguageLoader, path: &Path) -> Result<Language, GrammarError> {
	let data = fs::read(path)?;
	debug!(path = %path.display(), bytes = data.len(), "Loading grammar descriptor");
	Ok(loader.load_bytes(&data)?)
}

/// Loads the grammar named `name` from the first directory that has it.
pub fn load_grammar(
	loader: &LanguageLoader,
	name: &str,
	dirs: &[PathBuf],
) -> Result<Language, GrammarError> {
	let path = find_grammar(name, dirs).ok_or_else(|| GrammarError::NotFound(name.to_string()))?;
	load_grammar_file(loader, &path)
}
