use std::path::Path;
use std::time::Instant;

use crate::args::FindArgs;
use crate::dict::{self, Dict};

pub fn run(dict_path: &Path, FindArgs { pattern }: FindArgs) -> anyhow::Result<()> {
	let start = Instant::now();
	let dict: Dict = dict::load(dict_path)?;
	let elapsed = start.elapsed();
	println!("Loaded {} entries in {:.9} seconds", dict.len(), elapsed.as_secs_f64());

	for (word, definition) in dict.containing(&pattern) {
		println!("Found partial match: {word} -> {definition}");
	}

	Ok(())
}
