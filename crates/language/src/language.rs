//! The validated language handle.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use gramload_descriptor::{
	FieldId, GrammarDescriptor, StateId, Symbol, SymbolId, SymbolKind, Transition,
};

use crate::lexer::Lexer;
use crate::validate::validate;

/// A loaded grammar, ready for a parsing engine.
///
/// Only [`LanguageLoader`](crate::LanguageLoader) creates handles, and only
/// for descriptors that passed validation, so every lookup below can trust
/// the tables. Cloning is cheap; clones share the descriptor.
#[derive(Clone)]
pub struct Language {
	inner: Arc<LanguageInner>,
}

struct LanguageInner {
	descriptor: Arc<GrammarDescriptor>,
	keywords: HashMap<String, SymbolId>,
}

impl Language {
	pub(crate) fn new(descriptor: Arc<GrammarDescriptor>) -> Self {
		let keywords = descriptor
			.keywords
			.iter()
			.map(|k| (k.text.clone(), k.symbol))
			.collect();
		Self {
			inner: Arc::new(LanguageInner {
				descriptor,
				keywords,
			}),
		}
	}

	#[inline]
	fn desc(&self) -> &GrammarDescriptor {
		&self.inner.descriptor
	}

	pub fn descriptor(&self) -> &Arc<GrammarDescriptor> {
		&self.inner.descriptor
	}

	pub fn name(&self) -> &str {
		&self.desc().name
	}

	pub fn version(&self) -> u32 {
		self.desc().version
	}

	/// Re-runs validation. A handle can only be built from a valid descriptor
	/// and descriptors are immutable, so this holds for every handle.
	pub fn is_valid(&self) -> bool {
		validate(self.desc()).is_ok()
	}

	pub fn symbol_count(&self) -> usize {
		self.desc().symbols.len()
	}

	pub fn token_count(&self) -> usize {
		self.desc().token_count as usize
	}

	pub fn state_count(&self) -> usize {
		self.desc().lex_states.len()
	}

	pub fn field_count(&self) -> usize {
		self.desc().fields.len()
	}

	pub fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
		self.desc().symbol(id)
	}

	pub fn symbol_name(&self, id: SymbolId) -> Option<&str> {
		self.symbol(id).map(|s| s.name.as_str())
	}

	pub fn symbol_kind(&self, id: SymbolId) -> Option<SymbolKind> {
		self.symbol(id).map(|s| s.kind)
	}

	pub fn symbol_is_named(&self, id: SymbolId) -> bool {
		self.symbol(id).is_some_and(|s| s.named)
	}

	pub fn symbol_is_visible(&self, id: SymbolId) -> bool {
		self.symbol(id).is_some_and(|s| s.visible)
	}

	pub fn symbol_is_extra(&self, id: SymbolId) -> bool {
		self.symbol(id).is_some_and(|s| s.extra)
	}

	/// Looks up a symbol by name; `named` distinguishes `identifier` from `"identifier"`.
	pub fn symbol_for_name(&self, name: &str, named: bool) -> Option<SymbolId> {
		self.symbols()
			.find(|(_, s)| s.name == name && s.named == named)
			.map(|(id, _)| id)
	}

	pub fn symbols(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> {
		SymbolId::enumerate(&self.desc().symbols)
	}

	pub fn field_name_for_id(&self, id: FieldId) -> Option<&str> {
		self.desc().field(id)
	}

	pub fn field_id_for_name(&self, name: &str) -> Option<FieldId> {
		self.fields().find(|(_, f)| *f == name).map(|(id, _)| id)
	}

	pub fn fields(&self) -> impl Iterator<Item = (FieldId, &str)> {
		FieldId::enumerate(&self.desc().fields).map(|(id, f)| (id, f.as_str()))
	}

	pub fn start_state(&self) -> StateId {
		self.desc().start_state
	}

	/// Transition taken from `state` on `ch`, if any.
	pub fn next_state(&self, state: StateId, ch: char) -> Option<Transition> {
		self.desc().lex_state(state)?.find(ch).copied()
	}

	/// Token recognised when lexing stops in `state`.
	pub fn accept(&self, state: StateId) -> Option<SymbolId> {
		self.desc().lex_state(state)?.accept
	}

	pub fn word_token(&self) -> Option<SymbolId> {
		self.desc().word_token
	}

	/// Keyword symbol for `text`, if `text` is reserved.
	pub fn keyword(&self, text: &str) -> Option<SymbolId> {
		self.inner.keywords.get(text).copied()
	}

	/// Tokenizes `source` with this language's lex automaton.
	pub fn lex<'a>(&'a self, source: &'a str) -> Lexer<'a> {
		Lexer::new(self, source)
	}
}

impl PartialEq for Language {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.inner.descriptor, &other.inner.descriptor)
			|| self.inner.descriptor == other.inner.descriptor
	}
}

impl Eq for Language {}

impl fmt::Debug for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Language")
			.field("name", &self.name())
			.field("version", &self.version())
			.field("symbols", &self.symbol_count())
			.field("states", &self.state_count())
			.finish()
	}
}
