use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gramload")]
#[command(about = "Load, inspect and export grammar descriptors")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Loader configuration file (defaults to $GRAMLOAD_CONFIG)
	#[arg(long, global = true, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Print a grammar's symbol and field tables
	Inspect {
		/// Registered grammar name
		#[arg(default_value = gramload_shit::GRAMMAR_NAME, conflicts_with = "file")]
		name: String,
		/// Load a descriptor blob instead of a named grammar
		#[arg(long, value_name = "PATH")]
		file: Option<PathBuf>,
	},
	/// Tokenize a source file
	Lex {
		/// Grammar to lex with
		#[arg(long, short, default_value = gramload_shit::GRAMMAR_NAME)]
		grammar: String,
		/// Include comments and other extras
		#[arg(long)]
		extras: bool,
		/// Source file
		file: PathBuf,
	},
	/// Write a grammar's descriptor as a blob file
	Emit {
		/// Registered grammar name
		name: String,
		/// Output path
		#[arg(long, short, value_name = "PATH")]
		out: PathBuf,
	},
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn test_cli_definition() {
		Cli::command().debug_assert();
	}

	#[test]
	fn test_inspect_defaults_to_builtin() {
		let cli = Cli::try_parse_from(["gramload", "inspect"]).unwrap();
		assert!(matches!(cli.command, Command::Inspect { name, file: None } if name == "shit"));
	}

	#[test]
	fn test_inspect_file_conflicts_with_name() {
		assert!(Cli::try_parse_from(["gramload", "inspect", "other", "--file", "x.grammar"]).is_err());
	}

	#[test]
	fn test_global_flags_after_subcommand() {
		let cli = Cli::try_parse_from(["gramload", "lex", "main.shit", "-v"]).unwrap();
		assert!(cli.verbose);
		assert!(matches!(cli.command, Command::Lex { extras: false, .. }));
	}
}
