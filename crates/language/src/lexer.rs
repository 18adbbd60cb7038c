//! Table-driven tokenizer.
//!
//! Runs a language's lex automaton over a string with maximal munch. Skip
//! transitions drop whitespace, a match of the word token is swapped for its
//! keyword symbol when the text is reserved, and the stream always ends with
//! a single end token. A character no state can consume is reported and
//! skipped so the caller sees every problem in one pass.

use std::ops::Range;

use gramload_descriptor::SymbolId;
use thiserror::Error;

use crate::language::Language;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
	#[error("unexpected character {ch:?} at byte {offset}")]
	UnexpectedChar { offset: usize, ch: char },
}

/// A lexed terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
	pub symbol: SymbolId,
	pub text: &'a str,
	/// Byte range in the source.
	pub span: Range<usize>,
}

impl Token<'_> {
	#[inline]
	pub fn is_end(&self) -> bool {
		self.symbol == SymbolId::END
	}
}

pub struct Lexer<'a> {
	language: &'a Language,
	source: &'a str,
	pos: usize,
	done: bool,
}

impl<'a> Lexer<'a> {
	pub fn new(language: &'a Language, source: &'a str) -> Self {
		Self {
			language,
			source,
			pos: 0,
			done: false,
		}
	}

	/// Lexes to the end, dropping extras such as comments.
	pub fn significant(self) -> Result<Vec<Token<'a>>, LexError> {
		let language = self.language;
		self.filter(|t| t.as_ref().map_or(true, |t| !language.symbol_is_extra(t.symbol)))
			.collect()
	}

	fn next_token(&mut self) -> Result<Token<'a>, LexError> {
		let mut state = self.language.start_state();
		let mut start = self.pos;
		let mut accepted: Option<(SymbolId, usize)> = None;

		for (offset, ch) in self.source[self.pos..].char_indices() {
			let Some(t) = self.language.next_state(state, ch) else {
				break;
			};
			let cursor = self.pos + offset + ch.len_utf8();
			state = t.target;
			if t.skip {
				start = cursor;
				accepted = None;
				continue;
			}
			if let Some(symbol) = self.language.accept(state) {
				accepted = Some((symbol, cursor));
			}
		}

		match accepted {
			Some((symbol, end)) => {
				self.pos = end;
				let text = &self.source[start..end];
				Ok(Token {
					symbol: self.keyword_or(symbol, text),
					text,
					span: start..end,
				})
			}
			None => match self.source[start..].chars().next() {
				// Resume after the first character that did not lead to a token.
				Some(ch) => {
					self.pos = start + ch.len_utf8();
					Err(LexError::UnexpectedChar { offset: start, ch })
				}
				None => {
					self.pos = start;
					self.done = true;
					Ok(Token {
						symbol: SymbolId::END,
						text: "",
						span: start..start,
					})
				}
			},
		}
	}

	fn keyword_or(&self, symbol: SymbolId, text: &str) -> SymbolId {
		if self.language.word_token() == Some(symbol) {
			self.language.keyword(text).unwrap_or(symbol)
		} else {
			symbol
		}
	}
}

impl<'a> Iterator for Lexer<'a> {
	type Item = Result<Token<'a>, LexError>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}
		Some(self.next_token())
	}
}
