//! Hand-written tables for the `shit` grammar.
//!
//! ```text
//! source_file   = _definition*
//! _definition   = comment | extern_definition | function_definition
//!               | call | return_statement | _expression
//! extern_definition   = 'extern' module:identifier
//! function_definition = 'fun' name:identifier parameters:parameter_list body:block
//! block          = '{' _definition* '}'
//! call           = name:identifier args:args_list
//! parameter_list = '(' arg:(identifier ','?)* ')'
//! args_list      = '(' arg_value:(_expression ','?)* ')'
//! return_statement  = 'ret' _expression
//! binary_expression = _expression ('+' | '-' | '*' | '/' | '<' | '>') _expression
//!                   | identifier '=' _expression
//! identifier = /[a-zA-Z][a-zA-Z0-9]*/    number = /\d+/    comment = /#.*/
//! ```

use gramload_descriptor::{GrammarDescriptor, LexState, StateId, Symbol, Transition};
use gramload_language::DESCRIPTOR_VERSION;

use crate::symbols::*;

pub const GRAMMAR_NAME: &str = "shit";

const START: StateId = StateId(0);
const IN_COMMENT: StateId = StateId(1);
const IN_NUMBER: StateId = StateId(9);
const IN_IDENTIFIER: StateId = StateId(11);

pub(crate) fn build_descriptor() -> GrammarDescriptor {
	let mut b = GrammarDescriptor::builder(GRAMMAR_NAME, DESCRIPTOR_VERSION);

	for symbol in [
		Symbol::end(),
		Symbol::named_token("identifier"),
		Symbol::literal("extern"),
		Symbol::literal("fun"),
		Symbol::literal("{"),
		Symbol::literal("}"),
		Symbol::literal("("),
		Symbol::literal(","),
		Symbol::literal(")"),
		Symbol::literal("ret"),
		Symbol::literal("+"),
		Symbol::literal("-"),
		Symbol::literal("*"),
		Symbol::literal("/"),
		Symbol::literal("="),
		Symbol::named_token("comment").extra(),
		Symbol::named_token("number"),
		Symbol::literal("<"),
		Symbol::literal(">"),
		Symbol::rule("source_file"),
		Symbol::rule("_definition"),
		Symbol::rule("extern_definition"),
		Symbol::rule("function_definition"),
		Symbol::rule("block"),
		Symbol::rule("call"),
		Symbol::rule("parameter_list"),
		Symbol::rule("args_list"),
		Symbol::rule("return_statement"),
		Symbol::rule("_expression"),
		Symbol::rule("binary_expression"),
	] {
		b.symbol(symbol);
	}

	for field in ["arg", "arg_value", "args", "body", "module", "name", "parameters"] {
		b.field(field);
	}

	let punct = |ch: char, target: u16| Transition::single(ch, StateId(target));
	b.state(LexState::new(vec![
		Transition::skip('\t', '\r', START),
		Transition::skip(' ', ' ', START),
		Transition::single('#', IN_COMMENT),
		punct('(', 2),
		punct(')', 3),
		punct('*', 4),
		punct('+', 5),
		punct(',', 6),
		punct('-', 7),
		punct('/', 8),
		Transition::new('0', '9', IN_NUMBER),
		punct('<', 14),
		punct('=', 10),
		punct('>', 15),
		Transition::new('A', 'Z', IN_IDENTIFIER),
		Transition::new('a', 'z', IN_IDENTIFIER),
		punct('{', 12),
		punct('}', 13),
	]));
	b.state(LexState::accepting(
		COMMENT,
		vec![
			Transition::new('\0', '\t', IN_COMMENT),
			Transition::new('\u{b}', char::MAX, IN_COMMENT),
		],
	));
	for symbol in [LPAREN, RPAREN, STAR, PLUS, COMMA, MINUS, SLASH] {
		b.state(LexState::accepting(symbol, Vec::new()));
	}
	b.state(LexState::accepting(
		NUMBER,
		vec![Transition::new('0', '9', IN_NUMBER)],
	));
	b.state(LexState::accepting(EQ, Vec::new()));
	b.state(LexState::accepting(
		IDENTIFIER,
		vec![
			Transition::new('0', '9', IN_IDENTIFIER),
			Transition::new('A', 'Z', IN_IDENTIFIER),
			Transition::new('a', 'z', IN_IDENTIFIER),
		],
	));
	b.state(LexState::accepting(LBRACE, Vec::new()));
	b.state(LexState::accepting(RBRACE, Vec::new()));
	b.state(LexState::accepting(LT, Vec::new()));
	b.state(LexState::accepting(GT, Vec::new()));

	b.start_state(START)
		.word_token(IDENTIFIER)
		.keyword("extern", KW_EXTERN)
		.keyword("fun", KW_FUN)
		.keyword("ret", KW_RET);

	b.build()
}
