use std::path::Path;

use anyhow::Context as _;

use crate::args::SearchArgs;
use crate::dict::{self, WordCorpus};
use crate::search::SearchLoop;
use crate::terminal::{Keyboard, RawTerminal, TerminalScreen};

pub fn run(dict_path: &Path, SearchArgs {}: SearchArgs) -> anyhow::Result<()> {
	// Loading must fail before the terminal is touched.
	let corpus: WordCorpus = dict::load(dict_path)?;
	log::info!("loaded {} words from {dict_path:?}", corpus.len());
	if corpus.is_empty() {
		log::warn!("{dict_path:?} has no entries; nothing will ever match");
	}

	let _raw = RawTerminal::enter().context("preparing terminal")?;
	SearchLoop::new(&corpus, Keyboard, TerminalScreen::stdout()).run()
}
