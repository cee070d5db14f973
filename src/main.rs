#![deny(
	absolute_paths_not_starting_with_crate,
	keyword_idents,
	macro_use_extern_crate,
	meta_variable_misuse,
	missing_abi,
	missing_copy_implementations,
	non_ascii_idents,
	nonstandard_style,
	noop_method_call,
	rust_2018_idioms,
	unused_qualifications
)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

use env_logger::Env;

use crate::args::Command;

mod args;
mod commands;
mod dict;
mod keys;
mod matcher;
mod query;
mod render;
mod search;
mod terminal;

fn main() -> anyhow::Result<()> {
	let args = args::load();

	let filter = if args.verbose { "debug" } else { "warn" };
	env_logger::Builder::from_env(Env::default().default_filter_or(filter)).init();

	match args.command {
		Command::Search(search) => commands::interactive::run(&args.dict, search),
		Command::Dump(dump) => commands::dump::run(&args.dict, dump),
		Command::Find(find) => commands::find::run(&args.dict, find),
	}
}
