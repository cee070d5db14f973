use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

pub use self::corpus::WordCorpus;

mod corpus;

#[derive(Debug, Error)]
pub enum LoadError {
	#[error("reading dictionary from {path:?}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("parsing dictionary JSON in {path:?}")]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}

/// Reads and deserializes a JSON document, failing on the first problem.
/// There is no partial load: either the whole document parses or nothing is returned.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
	let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
		path: path.to_owned(),
		source,
	})?;
	serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
		path: path.to_owned(),
		source,
	})
}

/// Every entry of the dictionary document, values included, in document order.
#[derive(Debug)]
pub struct Dict {
	entries: Vec<(Box<str>, Value)>,
}

impl<'de> Deserialize<'de> for Dict {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct MapVisitor {}

		impl<'de> Visitor<'de> for MapVisitor {
			type Value = Dict;

			fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
				formatter.write_str("a map with string keys")
			}

			fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
				let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
				while let Some(entry) = access.next_entry::<Box<str>, Value>()? {
					entries.push(entry);
				}
				Ok(Dict { entries })
			}
		}

		deserializer.deserialize_map(MapVisitor {})
	}
}

impl Dict {
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Entries whose word contains `pattern` anywhere, not just at the start.
	pub fn containing<'a>(&'a self, pattern: &'a str) -> impl Iterator<Item = (&'a str, &'a Value)> + 'a {
		self
			.entries
			.iter()
			.filter(move |(word, _definition)| word.contains(pattern))
			.map(|(word, definition)| (&**word, definition))
	}
}
