//! Subcommand implementations. Output goes to a caller-supplied writer.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, bail};
use gramload_descriptor::{SymbolKind, encode};
use gramload_language::{Language, LanguageRegistry, load_grammar_file};
use tracing::{info, warn};

pub fn inspect(
	registry: &LanguageRegistry,
	name: &str,
	file: Option<&Path>,
	out: &mut impl Write,
) -> anyhow::Result<()> {
	let lang = match file {
		Some(path) => load_grammar_file(registry.loader(), path)
			.with_context(|| format!("failed to load {}", path.display()))?,
		None => registry
			.get(name)
			.with_context(|| format!("failed to load grammar '{name}'"))?,
	};
	write_summary(&lang, out)?;
	Ok(())
}

fn write_summary(lang: &Language, out: &mut impl Write) -> std::io::Result<()> {
	writeln!(out, "name:    {}", lang.name())?;
	writeln!(out, "version: {}", lang.version())?;
	writeln!(out, "symbols: {} ({} tokens)", lang.symbol_count(), lang.token_count())?;
	writeln!(out, "states:  {}", lang.state_count())?;
	writeln!(out, "fields:  {}", lang.field_count())?;

	writeln!(out)?;
	writeln!(out, "symbols:")?;
	for (id, symbol) in lang.symbols() {
		let kind = match symbol.kind {
			SymbolKind::End => "end",
			SymbolKind::Token => "token",
			SymbolKind::Rule => "rule",
		};
		let mut flags = Vec::new();
		if symbol.named {
			flags.push("named");
		}
		if !symbol.visible {
			flags.push("hidden");
		}
		if symbol.extra {
			flags.push("extra");
		}
		writeln!(out, "{id:>4}  {kind:<5}  {:<20}  {}", symbol.name, flags.join(","))?;
	}

	writeln!(out)?;
	writeln!(out, "fields:")?;
	for (id, name) in lang.fields() {
		writeln!(out, "{id:>4}  {name}")?;
	}
	Ok(())
}

pub fn lex(
	registry: &LanguageRegistry,
	grammar: &str,
	path: &Path,
	extras: bool,
	out: &mut impl Write,
) -> anyhow::Result<()> {
	let lang = registry
		.get(grammar)
		.with_context(|| format!("failed to load grammar '{grammar}'"))?;
	let source =
		fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

	let mut errors = 0usize;
	for result in lang.lex(&source) {
		match result {
			Ok(token) if !extras && lang.symbol_is_extra(token.symbol) => {}
			Ok(token) => {
				let name = lang.symbol_name(token.symbol).unwrap_or("?");
				writeln!(
					out,
					"{}..{}\t{}\t{:?}",
					token.span.start, token.span.end, name, token.text
				)?;
			}
			Err(e) => {
				warn!(file = %path.display(), error = %e, "Lex error");
				errors += 1;
			}
		}
	}

	if errors > 0 {
		bail!("{errors} lex error(s) in {}", path.display());
	}
	Ok(())
}

pub fn emit(registry: &LanguageRegistry, name: &str, out: &Path) -> anyhow::Result<()> {
	let lang = registry
		.get(name)
		.with_context(|| format!("failed to load grammar '{name}'"))?;
	let bytes = encode(lang.descriptor()).context("failed to encode descriptor")?;
	fs::write(out, &bytes).with_context(|| format!("failed to write {}", out.display()))?;
	info!(grammar = name, path = %out.display(), bytes = bytes.len(), "Wrote grammar descriptor");
	Ok(())
}

#[cfg(test)]
mod tests {
	use gramload_language::LanguageLoader;

	use super::*;

	fn registry() -> LanguageRegistry {
		let registry = LanguageRegistry::new(LanguageLoader::default(), Vec::new());
		gramload_shit::register(&registry);
		registry
	}

	#[test]
	fn test_inspect_builtin() {
		let mut out = Vec::new();
		inspect(&registry(), "shit", None, &mut out).unwrap();
		let text = String::from_utf8(out).unwrap();
		assert!(text.starts_with("name:    shit\n"));
		assert!(text.contains("symbols: 30 (19 tokens)"));
		assert!(text.contains("states:  16"));
		assert!(text.contains("_expression"));
		assert!(text.contains("named,hidden"));
		assert!(text.contains("   6  parameters"));
	}

	#[test]
	fn test_inspect_unknown_grammar() {
		let mut out = Vec::new();
		let err = inspect(&registry(), "nope", None, &mut out).unwrap_err();
		assert!(err.to_string().contains("nope"));
	}

	#[test]
	fn test_emit_then_inspect_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("shit.grammar");
		let registry = registry();
		emit(&registry, "shit", &path).unwrap();

		let mut out = Vec::new();
		inspect(&registry, "ignored", Some(&path), &mut out).unwrap();
		assert!(String::from_utf8(out).unwrap().contains("fields:  7"));
	}

	#[test]
	fn test_lex_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("main.shit");
		fs::write(&path, "# entry\nret 42\n").unwrap();

		let mut out = Vec::new();
		lex(&registry(), "shit", &path, false, &mut out).unwrap();
		let text = String::from_utf8(out).unwrap();
		assert_eq!(text, "8..11\tret\t\"ret\"\n12..14\tnumber\t\"42\"\n15..15\tend\t\"\"\n");

		let mut out = Vec::new();
		lex(&registry(), "shit", &path, true, &mut out).unwrap();
		assert!(String::from_utf8(out).unwrap().starts_with("0..7\tcomment\t\"# entry\"\n"));
	}

	#[test]
	fn test_lex_reports_errors() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("bad.shit");
		fs::write(&path, "a ? b").unwrap();
		let mut out = Vec::new();
		let err = lex(&registry(), "shit", &path, false, &mut out).unwrap_err();
		assert!(err.to_string().starts_with("1 lex error(s)"));
	}
}
