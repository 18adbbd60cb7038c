//! Grammar descriptors
//!
//! The compiled, immutable tables of a grammar as produced by a grammar
//! toolchain and consumed by `gramload-language`.
//!
//! * [`descriptor`]: symbol table, field names, lex automaton, builder
//! * [`blob`]: versioned binary encoding
//! * [`ids`]: table index newtypes

pub mod blob;
pub mod descriptor;
pub mod ids;

pub use blob::{DecodeError, HEADER_SIZE, MAGIC, decode, decode_payload, encode, split_header};
pub use descriptor::{
	DescriptorBuilder, GrammarDescriptor, Keyword, LexState, Symbol, SymbolKind, Transition,
};
pub use ids::{FieldId, MAX_TABLE_LEN, StateId, SymbolId};
