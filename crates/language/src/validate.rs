//! Structural checks run on every descriptor before it becomes a [`Language`].
//!
//! [`Language`]: crate::Language

use std::collections::HashSet;

use gramload_descriptor::{GrammarDescriptor, MAX_TABLE_LEN, StateId, SymbolId, SymbolKind};
use thiserror::Error;

/// A table invariant the descriptor violates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Malformed {
	#[error("grammar name is empty")]
	EmptyName,

	#[error("declared {declared} symbols but the table has {actual}")]
	SymbolCountMismatch { declared: u32, actual: usize },

	#[error("declared {declared} lex states but the table has {actual}")]
	StateCountMismatch { declared: u32, actual: usize },

	#[error("{table} table has {len} entries, more than ids can address")]
	TableTooLarge { table: &'static str, len: usize },

	#[error("token count {token_count} exceeds symbol count {symbol_count}")]
	TokenCountOutOfRange { token_count: u32, symbol_count: u32 },

	#[error("symbol 0 must be the only end symbol")]
	MissingEndSymbol,

	#[error("symbol {symbol} is on the wrong side of the token/rule boundary")]
	SymbolOrder { symbol: SymbolId },

	#[error("duplicate symbol '{name}'")]
	DuplicateSymbol { name: String },

	#[error("duplicate field '{name}'")]
	DuplicateField { name: String },

	#[error("field {field} has an empty name")]
	EmptyField { field: usize },

	#[error("lex automaton has no states")]
	NoStates,

	#[error("start state {state} does not exist")]
	StartStateOutOfRange { state: StateId },

	#[error("lex state {state} transitions to missing state {target}")]
	DanglingTransition { state: StateId, target: StateId },

	#[error("lex state {state} has inverted range {start:?}..={end:?}")]
	InvertedRange { state: StateId, start: char, end: char },

	#[error("lex state {state} accepts {symbol}, which is not a token")]
	InvalidAccept { state: StateId, symbol: SymbolId },

	#[error("word token {symbol} is not a token")]
	InvalidWordToken { symbol: SymbolId },

	#[error("invalid keyword '{text}'")]
	InvalidKeyword { text: String },

	#[error("undecodable descriptor: {0}")]
	Encoding(String),
}

/// Checks every table invariant, returning the first violation.
pub fn validate(desc: &GrammarDescriptor) -> Result<(), Malformed> {
	if desc.name.is_empty() {
		return Err(Malformed::EmptyName);
	}
	check_table_sizes(desc)?;
	check_symbols(desc)?;
	check_fields(desc)?;
	check_lex_states(desc)?;
	check_keywords(desc)
}

fn check_table_sizes(desc: &GrammarDescriptor) -> Result<(), Malformed> {
	for (table, len) in [
		("symbol", desc.symbols.len()),
		("field", desc.fields.len()),
		("lex state", desc.lex_states.len()),
	] {
		if len > MAX_TABLE_LEN {
			return Err(Malformed::TableTooLarge { table, len });
		}
	}
	Ok(())
}

fn check_symbols(desc: &GrammarDescriptor) -> Result<(), Malformed> {
	if desc.symbol_count as usize != desc.symbols.len() {
		return Err(Malformed::SymbolCountMismatch {
			declared: desc.symbol_count,
			actual: desc.symbols.len(),
		});
	}
	if desc.token_count > desc.symbol_count {
		return Err(Malformed::TokenCountOutOfRange {
			token_count: desc.token_count,
			symbol_count: desc.symbol_count,
		});
	}

	let mut seen = HashSet::new();
	for (id, symbol) in SymbolId::enumerate(&desc.symbols) {
		let idx = id.idx();
		if (idx == 0) != (symbol.kind == SymbolKind::End) {
			return Err(Malformed::MissingEndSymbol);
		}
		let is_token = idx < desc.token_count as usize;
		if is_token != symbol.is_terminal() {
			return Err(Malformed::SymbolOrder { symbol: id });
		}
		if !seen.insert((symbol.name.as_str(), symbol.named)) {
			return Err(Malformed::DuplicateSymbol {
				name: symbol.name.clone(),
			});
		}
	}
	if desc.symbols.is_empty() {
		return Err(Malformed::MissingEndSymbol);
	}
	Ok(())
}

fn check_fields(desc: &GrammarDescriptor) -> Result<(), Malformed> {
	let mut seen = HashSet::new();
	for (field, name) in desc.fields.iter().enumerate() {
		if name.is_empty() {
			return Err(Malformed::EmptyField { field });
		}
		if !seen.insert(name.as_str()) {
			return Err(Malformed::DuplicateField { name: name.clone() });
		}
	}
	Ok(())
}

fn check_lex_states(desc: &GrammarDescriptor) -> Result<(), Malformed> {
	if desc.state_count as usize != desc.lex_states.len() {
		return Err(Malformed::StateCountMismatch {
			declared: desc.state_count,
			actual: desc.lex_states.len(),
		});
	}
	if desc.lex_states.is_empty() {
		return Err(Malformed::NoStates);
	}
	if desc.start_state.idx() >= desc.lex_states.len() {
		return Err(Malformed::StartStateOutOfRange {
			state: desc.start_state,
		});
	}

	for (state, lex_state) in StateId::enumerate(&desc.lex_states) {
		if let Some(symbol) = lex_state.accept
			&& !is_lexable(desc, symbol)
		{
			return Err(Malformed::InvalidAccept { state, symbol });
		}
		for t in &lex_state.transitions {
			if t.target.idx() >= desc.lex_states.len() {
				return Err(Malformed::DanglingTransition {
					state,
					target: t.target,
				});
			}
			if t.start > t.end {
				return Err(Malformed::InvertedRange {
					state,
					start: t.start,
					end: t.end,
				});
			}
		}
	}
	Ok(())
}

fn check_keywords(desc: &GrammarDescriptor) -> Result<(), Malformed> {
	if let Some(symbol) = desc.word_token
		&& !is_lexable(desc, symbol)
	{
		return Err(Malformed::InvalidWordToken { symbol });
	}

	let mut seen = HashSet::new();
	for keyword in &desc.keywords {
		if keyword.text.is_empty()
			|| !seen.insert(keyword.text.as_str())
			|| !is_lexable(desc, keyword.symbol)
		{
			return Err(Malformed::InvalidKeyword {
				text: keyword.text.clone(),
			});
		}
	}
	Ok(())
}

/// A symbol the lexer may produce: a token other than end.
fn is_lexable(desc: &GrammarDescriptor, symbol: SymbolId) -> bool {
	desc.symbol(symbol)
		.is_some_and(|s| s.kind == SymbolKind::Token && symbol.idx() < desc.token_count as usize)
}
