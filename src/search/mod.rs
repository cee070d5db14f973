use std::time::Instant;

use crate::dict::WordCorpus;
use crate::keys::Key;
use crate::matcher;
use crate::query::{Query, Rejected};
use crate::render::{self, Frame, Line};


// Public API:

/// Blocks until exactly one key has been pressed.
pub trait KeySource {
	fn next_key(&mut self) -> anyhow::Result<Key>;
}

pub trait Screen {
	/// Queried every frame; the terminal may have been resized since the last one.
	fn width(&self) -> usize;
	/// Replaces whatever was on screen with `lines`.
	fn draw(&mut self, lines: &[Line]) -> anyhow::Result<()>;
}

impl<T: KeySource + ?Sized> KeySource for &mut T {
	fn next_key(&mut self) -> anyhow::Result<Key> {
		(**self).next_key()
	}
}

impl<T: Screen + ?Sized> Screen for &mut T {
	fn width(&self) -> usize {
		(**self).width()
	}

	fn draw(&mut self, lines: &[Line]) -> anyhow::Result<()> {
		(**self).draw(lines)
	}
}

/// What a single keystroke did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
	Searched { matches: usize },
	Rejected(Rejected),
	Exit,
}

#[derive(Debug)]
pub struct SearchLoop<'c, K, S> {
	corpus: &'c WordCorpus,
	keys: K,
	screen: S,
	query: Query,
}

impl<'c, K: KeySource, S: Screen> SearchLoop<'c, K, S> {
	pub fn new(corpus: &'c WordCorpus, keys: K, screen: S) -> Self {
		Self {
			corpus,
			keys,
			screen,
			query: Query::new(),
		}
	}

	/// Draws the title, then handles keys until the exit key is pressed.
	pub fn run(&mut self) -> anyhow::Result<()> {
		let width = self.screen.width();
		self.screen.draw(&[render::title_bar(width)])?;

		loop {
			match self.step()? {
				Step::Searched { matches } => {
					log::debug!("{:?}: {matches} matches", self.query().as_str());
				}
				Step::Rejected(Rejected(key)) => {
					log::debug!("rejected key {key} = {}", key.code());
				}
				Step::Exit => break,
			}
		}

		log::debug!("exit key pressed with query {:?}", self.query().as_str());
		Ok(())
	}

	pub fn step(&mut self) -> anyhow::Result<Step> {
		let key = self.keys.next_key()?;
		self.handle_key(key)
	}

	pub fn handle_key(&mut self, key: Key) -> anyhow::Result<Step> {
		if key.is_exit() {
			return Ok(Step::Exit);
		}

		let width = self.screen.width();

		if let Err(rejected) = self.query.apply(key) {
			self.screen.draw(&render::rejection(width))?;
			return Ok(Step::Rejected(rejected));
		}

		let start = Instant::now();
		let matches = matcher::prefixed(self.corpus, self.query.as_str());
		let elapsed = start.elapsed();

		log::trace!("matched {key} = {} in {elapsed:?}", key.code());

		let lines = render::frame(&Frame {
			key,
			query: &self.query,
			matches: &matches,
			elapsed,
			width,
		});
		self.screen.draw(&lines)?;

		Ok(Step::Searched {
			matches: matches.len(),
		})
	}

	pub fn query(&self) -> &Query {
		&self.query
	}
}
