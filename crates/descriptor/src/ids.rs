//! Index newtypes for descriptor tables.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Largest table a `u16` id can address.
pub const MAX_TABLE_LEN: usize = u16::MAX as usize + 1;

macro_rules! table_id {
	($(#[$meta:meta])* $name:ident) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		pub struct $name(pub u16);

		impl $name {
			#[inline]
			pub fn idx(self) -> usize {
				self.0 as usize
			}

			/// The id of table entry `idx`, if the id space reaches it.
			#[inline]
			pub fn from_idx(idx: usize) -> Option<Self> {
				u16::try_from(idx).ok().map(Self)
			}

			/// Every id in order, paired with the table entries it addresses.
			pub fn enumerate<T>(table: &[T]) -> impl Iterator<Item = (Self, &T)> {
				(0..=u16::MAX).map(Self).zip(table)
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				fmt::Display::fmt(&self.0, f)
			}
		}
	};
}

table_id!(
	/// Index into [`GrammarDescriptor::symbols`](crate::GrammarDescriptor::symbols).
	SymbolId
);
table_id!(
	/// Index into [`GrammarDescriptor::lex_states`](crate::GrammarDescriptor::lex_states).
	StateId
);
table_id!(
	/// Index into [`GrammarDescriptor::fields`](crate::GrammarDescriptor::fields).
	FieldId
);

impl SymbolId {
	/// The end-of-input symbol. Every descriptor reserves id 0 for it.
	pub const END: SymbolId = SymbolId(0);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_end_symbol_is_zero() {
		assert_eq!(SymbolId::END.idx(), 0);
		assert_eq!(SymbolId::END.to_string(), "0");
		assert_eq!(format!("{:>3}", SymbolId(7)), "  7");
	}

	#[test]
	fn test_id_space_ends_at_u16_max() {
		assert_eq!(SymbolId::from_idx(MAX_TABLE_LEN - 1), Some(SymbolId(u16::MAX)));
		assert_eq!(SymbolId::from_idx(MAX_TABLE_LEN), None);

		let table = vec![(); MAX_TABLE_LEN + 3];
		let ids: Vec<_> = StateId::enumerate(&table).map(|(id, _)| id).collect();
		assert_eq!(ids.len(), MAX_TABLE_LEN);
		assert_eq!(ids.last(), Some(&StateId(u16::MAX)));
	}

	#[test]
	fn test_ids_order_by_index() {
		assert!(StateId(1) < StateId(2));
		assert_eq!(FieldId(7).idx(), 7);
	}
}
