//! Symbol and field ids of the `shit` grammar.
//!
//! Terminals come first, then rules, matching the order the descriptor is
//! built in.

use gramload_descriptor::{FieldId, SymbolId};

pub const END: SymbolId = SymbolId::END;
pub const IDENTIFIER: SymbolId = SymbolId(1);
pub const KW_EXTERN: SymbolId = SymbolId(2);
pub const KW_FUN: SymbolId = SymbolId(3);
pub const LBRACE: SymbolId = SymbolId(4);
pub const RBRACE: SymbolId = SymbolId(5);
pub const LPAREN: SymbolId = SymbolId(6);
pub const COMMA: SymbolId = SymbolId(7);
pub const RPAREN: SymbolId = SymbolId(8);
pub const KW_RET: SymbolId = SymbolId(9);
pub const PLUS: SymbolId = SymbolId(10);
pub const MINUS: SymbolId = SymbolId(11);
pub const STAR: SymbolId = SymbolId(12);
pub const SLASH: SymbolId = SymbolId(13);
pub const EQ: SymbolId = SymbolId(14);
pub const COMMENT: SymbolId = SymbolId(15);
pub const NUMBER: SymbolId = SymbolId(16);
pub const LT: SymbolId = SymbolId(17);
pub const GT: SymbolId = SymbolId(18);

pub const SOURCE_FILE: SymbolId = SymbolId(19);
pub const DEFINITION: SymbolId = SymbolId(20);
pub const EXTERN_DEFINITION: SymbolId = SymbolId(21);
pub const FUNCTION_DEFINITION: SymbolId = SymbolId(22);
pub const BLOCK: SymbolId = SymbolId(23);
pub const CALL: SymbolId = SymbolId(24);
pub const PARAMETER_LIST: SymbolId = SymbolId(25);
pub const ARGS_LIST: SymbolId = SymbolId(26);
pub const RETURN_STATEMENT: SymbolId = SymbolId(27);
pub const EXPRESSION: SymbolId = SymbolId(28);
pub const BINARY_EXPRESSION: SymbolId = SymbolId(29);

pub const FIELD_ARG: FieldId = FieldId(0);
pub const FIELD_ARG_VALUE: FieldId = FieldId(1);
pub const FIELD_ARGS: FieldId = FieldId(2);
pub const FIELD_BODY: FieldId = FieldId(3);
pub const FIELD_MODULE: FieldId = FieldId(4);
pub const FIELD_NAME: FieldId = FieldId(5);
pub const FIELD_PARAMETERS: FieldId = FieldId(6);

/// Binding strength of the binary operators; higher binds tighter, all are left-associative.
pub fn operator_precedence(symbol: SymbolId) -> Option<u8> {
	match symbol {
		EQ => Some(0),
		LT | GT => Some(1),
		PLUS | MINUS => Some(2),
		STAR | SLASH => Some(3),
		_ => None,
	}
}
