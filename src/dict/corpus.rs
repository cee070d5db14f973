use std::fmt;
use std::io::{self, Write};

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// The words of the dictionary, in document order, duplicates included.
///
/// Words are kept exactly as written. Queries are always lowercase, so
/// any entry containing uppercase letters can never be matched.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordCorpus {
	words: Box<[Box<str>]>,
}

impl WordCorpus {
	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
		self.words.iter().map(|word| &**word)
	}

	/// Writes one word per line.
	pub fn write_lines<W: Write>(&self, mut out: W) -> io::Result<()> {
		for word in self.iter() {
			writeln!(out, "{word}")?;
		}
		out.flush()
	}
}

impl<S: Into<Box<str>>> FromIterator<S> for WordCorpus {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self {
			words: iter.into_iter().map(Into::into).collect(),
		}
	}
}

impl<'de> Deserialize<'de> for WordCorpus {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct KeysVisitor {}

		impl<'de> Visitor<'de> for KeysVisitor {
			type Value = WordCorpus;

			fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
				formatter.write_str("a map with string keys")
			}

			fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
				let mut words = Vec::with_capacity(access.size_hint().unwrap_or(0));
				// Definitions are irrelevant to matching.
				while let Some((word, IgnoredAny)) = access.next_entry::<Box<str>, IgnoredAny>()? {
					words.push(word);
				}
				Ok(WordCorpus {
					words: words.into(),
				})
			}
		}

		deserializer.deserialize_map(KeysVisitor {})
	}
}
