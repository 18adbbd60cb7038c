#![allow(unused_crate_dependencies)]

use std::sync::Arc;
use std::thread;

use gramload_descriptor::{GrammarDescriptor, LexState, MAX_TABLE_LEN, StateId, Symbol, Transition};
use gramload_language::{LanguageLoader, LoadError, Malformed, VersionRange, load_language};

fn descriptor(version: u32) -> GrammarDescriptor {
	let mut b = GrammarDescriptor::builder("ab", version);
	b.symbol(Symbol::end());
	let a = b.symbol(Symbol::literal("a"));
	let bee = b.symbol(Symbol::literal("b"));
	b.symbol(Symbol::rule("pair"));
	b.state(LexState::new(vec![
		Transition::single('a', StateId(1)),
		Transition::single('b', StateId(2)),
	]));
	b.state(LexState::accepting(a, Vec::new()));
	b.state(LexState::accepting(bee, Vec::new()));
	b.build()
}

#[test]
fn test_valid_descriptor_yields_valid_handle() {
	let lang = load_language(Arc::new(descriptor(1))).unwrap();
	assert!(lang.is_valid());
}

#[test]
fn test_version_outside_range() {
	let loader = LanguageLoader::new(VersionRange::exact(1));
	let err = loader.load(Arc::new(descriptor(99))).unwrap_err();
	assert!(matches!(err, LoadError::IncompatibleVersion { found: 99, .. }));
	assert_eq!(
		err.to_string(),
		"descriptor version 99 is not supported (loader accepts 1)"
	);
}

#[test]
fn test_transition_to_missing_state() {
	let mut desc = descriptor(1);
	desc.lex_states[0].transitions[1].target = StateId(3);
	let err = load_language(Arc::new(desc)).unwrap_err();
	assert_eq!(
		err,
		LoadError::MalformedDescriptor(Malformed::DanglingTransition {
			state: StateId(0),
			target: StateId(3),
		})
	);
}

#[test]
fn test_symbol_table_beyond_id_space() {
	let mut b = GrammarDescriptor::builder("wide", 1);
	b.symbol(Symbol::end());
	let dot = b.symbol(Symbol::literal("."));
	for i in 0..=u16::MAX as usize - 1 {
		b.symbol(Symbol::rule(format!("r{i}")));
	}
	b.state(LexState::new(vec![Transition::single('.', StateId(1))]));
	b.state(LexState::accepting(dot, Vec::new()));

	let err = load_language(Arc::new(b.build())).unwrap_err();
	assert_eq!(
		err,
		LoadError::MalformedDescriptor(Malformed::TableTooLarge {
			table: "symbol",
			len: MAX_TABLE_LEN + 1,
		})
	);
}

#[test]
fn test_absent_descriptor() {
	let missing: Option<Arc<GrammarDescriptor>> = None;
	assert_eq!(load_language(missing), Err(LoadError::NullDescriptor));
}

#[test]
fn test_repeated_loads_are_equivalent() {
	let desc = Arc::new(descriptor(1));
	let first = load_language(desc.clone()).unwrap();
	let second = load_language(desc).unwrap();
	assert_eq!(first.symbol_count(), second.symbol_count());
	assert_eq!(first.state_count(), second.state_count());
	assert_eq!(first, second);
}

#[test]
fn test_handles_shared_across_threads() {
	let lang = load_language(Arc::new(descriptor(1))).unwrap();
	let handles: Vec<_> = (0..4)
		.map(|_| {
			let lang = lang.clone();
			thread::spawn(move || {
				let tokens = lang.lex("abba").significant().unwrap();
				tokens.len()
			})
		})
		.collect();
	for handle in handles {
		assert_eq!(handle.join().unwrap(), 5);
	}
}
