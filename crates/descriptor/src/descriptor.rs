//! Grammar descriptor tables.
//!
//! A [`GrammarDescriptor`] is the compiled form of a grammar: its symbol
//! table, field names and the lex automaton that turns text into terminal
//! symbols. Descriptors are plain data. Nothing here checks that the tables
//! are consistent; that is the loader's job.

use serde::{Deserialize, Serialize};

use crate::ids::{FieldId, StateId, SymbolId};

/// What role a symbol plays in the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolKind {
	/// End of input. Only symbol 0 has this kind.
	End,
	/// A terminal produced by the lex automaton.
	Token,
	/// A non-terminal produced by a grammar rule.
	Rule,
}

/// Symbol table entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
	pub name: String,
	pub kind: SymbolKind,
	/// Whether nodes of this symbol show up in a syntax tree.
	pub visible: bool,
	/// Named symbols come from rules/regexes, anonymous ones from string literals.
	pub named: bool,
	/// Extras (comments) may appear anywhere between other tokens.
	pub extra: bool,
}

impl Symbol {
	pub fn end() -> Self {
		Self {
			name: "end".to_string(),
			kind: SymbolKind::End,
			visible: false,
			named: false,
			extra: false,
		}
	}

	/// An anonymous literal token such as `"fun"` or `"("`.
	pub fn literal(text: impl Into<String>) -> Self {
		Self {
			name: text.into(),
			kind: SymbolKind::Token,
			visible: true,
			named: false,
			extra: false,
		}
	}

	/// A named token such as `identifier`.
	pub fn named_token(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			kind: SymbolKind::Token,
			visible: true,
			named: true,
			extra: false,
		}
	}

	/// A rule. Names starting with `_` are hidden.
	pub fn rule(name: impl Into<String>) -> Self {
		let name = name.into();
		Self {
			visible: !name.starts_with('_'),
			name,
			kind: SymbolKind::Rule,
			named: true,
			extra: false,
		}
	}

	pub fn extra(mut self) -> Self {
		self.extra = true;
		self
	}

	#[inline]
	pub fn is_terminal(&self) -> bool {
		self.kind != SymbolKind::Rule
	}
}

/// Edge of the lex automaton over an inclusive character range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
	pub start: char,
	pub end: char,
	pub target: StateId,
	/// Consumed input is not part of the token (whitespace).
	pub skip: bool,
}

impl Transition {
	pub fn new(start: char, end: char, target: StateId) -> Self {
		Self {
			start,
			end,
			target,
			skip: false,
		}
	}

	pub fn single(ch: char, target: StateId) -> Self {
		Self::new(ch, ch, target)
	}

	pub fn skip(start: char, end: char, target: StateId) -> Self {
		Self {
			start,
			end,
			target,
			skip: true,
		}
	}

	#[inline]
	pub fn contains(&self, ch: char) -> bool {
		self.start <= ch && ch <= self.end
	}
}

/// Node of the lex automaton.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LexState {
	/// Token recognised when the automaton stops here.
	pub accept: Option<SymbolId>,
	pub transitions: Vec<Transition>,
}

impl LexState {
	pub fn new(transitions: Vec<Transition>) -> Self {
		Self {
			accept: None,
			transitions,
		}
	}

	pub fn accepting(symbol: SymbolId, transitions: Vec<Transition>) -> Self {
		Self {
			accept: Some(symbol),
			transitions,
		}
	}

	/// First transition whose range contains `ch`.
	pub fn find(&self, ch: char) -> Option<&Transition> {
		self.transitions.iter().find(|t| t.contains(ch))
	}
}

/// Reserved word recognised on top of the word token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Keyword {
	pub text: String,
	pub symbol: SymbolId,
}

/// Compiled grammar tables.
///
/// The `*_count` fields are declared by the producer and are checked against
/// the table lengths when the descriptor is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GrammarDescriptor {
	pub version: u32,
	pub name: String,
	pub symbol_count: u32,
	/// Terminals occupy symbol ids `0..token_count`.
	pub token_count: u32,
	pub state_count: u32,
	pub symbols: Vec<Symbol>,
	pub fields: Vec<String>,
	pub lex_states: Vec<LexState>,
	pub start_state: StateId,
	pub word_token: Option<SymbolId>,
	pub keywords: Vec<Keyword>,
}

impl GrammarDescriptor {
	pub fn builder(name: impl Into<String>, version: u32) -> DescriptorBuilder {
		DescriptorBuilder::new(name, version)
	}

	pub fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
		self.symbols.get(id.idx())
	}

	pub fn field(&self, id: FieldId) -> Option<&str> {
		self.fields.get(id.idx()).map(String::as_str)
	}

	pub fn lex_state(&self, id: StateId) -> Option<&LexState> {
		self.lex_states.get(id.idx())
	}
}

/// Incrementally assembles a [`GrammarDescriptor`].
///
/// Ids are handed out in insertion order, so a lex automaton with forward
/// references can be written against ids it is about to push. Entries past
/// [`MAX_TABLE_LEN`] all get the last id; the built descriptor then fails
/// validation.
///
/// [`MAX_TABLE_LEN`]: crate::MAX_TABLE_LEN
#[derive(Debug, Clone)]
pub struct DescriptorBuilder {
	version: u32,
	name: String,
	symbols: Vec<Symbol>,
	fields: Vec<String>,
	lex_states: Vec<LexState>,
	start_state: StateId,
	word_token: Option<SymbolId>,
	keywords: Vec<Keyword>,
	declared: Option<DeclaredCounts>,
}

#[derive(Debug, Clone, Copy)]
struct DeclaredCounts {
	symbols: u32,
	tokens: u32,
	states: u32,
}

impl DescriptorBuilder {
	pub fn new(name: impl Into<String>, version: u32) -> Self {
		Self {
			version,
			name: name.into(),
			symbols: Vec::new(),
			fields: Vec::new(),
			lex_states: Vec::new(),
			start_state: StateId(0),
			word_token: None,
			keywords: Vec::new(),
			declared: None,
		}
	}

	pub fn symbol(&mut self, symbol: Symbol) -> SymbolId {
		let id = SymbolId::from_idx(self.symbols.len()).unwrap_or(SymbolId(u16::MAX));
		self.symbols.push(symbol);
		id
	}

	pub fn field(&mut self, name: impl Into<String>) -> FieldId {
		let id = FieldId::from_idx(self.fields.len()).unwrap_or(FieldId(u16::MAX));
		self.fields.push(name.into());
		id
	}

	pub fn state(&mut self, state: LexState) -> StateId {
		let id = StateId::from_idx(self.lex_states.len()).unwrap_or(StateId(u16::MAX));
		self.lex_states.push(state);
		id
	}

	pub fn start_state(&mut self, state: StateId) -> &mut Self {
		self.start_state = state;
		self
	}

	pub fn word_token(&mut self, symbol: SymbolId) -> &mut Self {
		self.word_token = Some(symbol);
		self
	}

	pub fn keyword(&mut self, text: impl Into<String>, symbol: SymbolId) -> &mut Self {
		self.keywords.push(Keyword {
			text: text.into(),
			symbol,
		});
		self
	}

	/// Overrides the counts that would otherwise be derived from the tables.
	pub fn with_declared_counts(&mut self, symbols: u32, tokens: u32, states: u32) -> &mut Self {
		self.declared = Some(DeclaredCounts {
			symbols,
			tokens,
			states,
		});
		self
	}

	pub fn build(self) -> GrammarDescriptor {
		let declared = self.declared.unwrap_or_else(|| DeclaredCounts {
			symbols: self.symbols.len() as u32,
			tokens: self.symbols.iter().take_while(|s| s.is_terminal()).count() as u32,
			states: self.lex_states.len() as u32,
		});

		GrammarDescriptor {
			version: self.version,
			name: self.name,
			symbol_count: declared.symbols,
			token_count: declared.tokens,
			state_count: declared.states,
			symbols: self.symbols,
			fields: self.fields,
			lex_states: self.lex_states,
			start_state: self.start_state,
			word_token: self.word_token,
			keywords: self.keywords,
		}
	}
}
