//! `gramload` binary.
//!
//! Loads grammars through the same registry a host would use: the built-in
//! `shit` grammar is registered as a provider, everything else is looked up
//! as a descriptor file on the configured search paths.

mod cli;
mod commands;

use std::io;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use gramload_language::{LanguageRegistry, LoaderConfig};
use tracing::debug;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let config = match &cli.config {
		Some(path) => LoaderConfig::load(path)
			.with_context(|| format!("failed to load config {}", path.display()))?,
		None => LoaderConfig::from_env().context("failed to load config from $GRAMLOAD_CONFIG")?,
	};
	let registry = LanguageRegistry::from_config(&config);
	gramload_shit::register(&registry);
	debug!(
		versions = %registry.loader().supported(),
		paths = ?registry.search_paths(),
		"Registry ready"
	);

	let mut stdout = io::stdout().lock();
	match cli.command {
		Command::Inspect { name, file } => {
			commands::inspect(&registry, &name, file.as_deref(), &mut stdout)
		}
		Command::Lex {
			grammar,
			extras,
			file,
		} => commands::lex(&registry, &grammar, &file, extras, &mut stdout),
		Command::Emit { name, out } => commands::emit(&registry, &name, &out),
	}
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("gramload=debug,gramload_language=debug,info")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.with_target(false)
		.init();
}
