use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Context as _;

use crate::args::DumpArgs;
use crate::dict::{self, WordCorpus};

pub fn run(dict_path: &Path, DumpArgs { out }: DumpArgs) -> anyhow::Result<()> {
	let corpus: WordCorpus = dict::load(dict_path)?;
	let file = File::create(&out).with_context(|| format!("creating {out:?}"))?;
	corpus
		.write_lines(BufWriter::new(file))
		.with_context(|| format!("writing words to {out:?}"))?;
	log::info!("wrote {} words to {out:?}", corpus.len());
	Ok(())
}
