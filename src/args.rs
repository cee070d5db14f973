#![allow(clippy::module_name_repetitions)]

use std::path::PathBuf;

use argh::FromArgs;

/// Incremental prefix search over a JSON dictionary.
#[derive(FromArgs, Debug)]
pub struct Args {
	/// path to the dictionary JSON
	#[argh(option, short = 'D', default = r#""data/dictionary.json".into()"#)]
	pub dict: PathBuf,
	/// log at debug level unless `RUST_LOG` says otherwise
	#[argh(switch, short = 'v')]
	pub verbose: bool,
	#[argh(subcommand)]
	pub command: Command,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
pub enum Command {
	Search(SearchArgs),
	Dump(DumpArgs),
	Find(FindArgs),
}

/// Search interactively, one keystroke at a time. Press `Z` to quit.
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "search")]
pub struct SearchArgs {}

/// Write every dictionary word to a plain-text file, one per line.
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "dump")]
pub struct DumpArgs {
	/// path of the word list to write
	#[argh(option, short = 'o', default = r#""data/words.txt".into()"#)]
	pub out: PathBuf,
}

/// Print every entry whose word contains a pattern.
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "find")]
pub struct FindArgs {
	/// the substring to look for
	#[argh(positional, default = r#"String::from("axal")"#)]
	pub pattern: String,
}

pub fn load() -> Args {
	argh::from_env()
}
