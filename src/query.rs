use std::fmt::{self, Display, Formatter};

use thiserror::Error;

use crate::keys::Key;

/// A keystroke that is neither a letter nor delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("letters only!")]
pub struct Rejected(pub Key);

/// The lowercase letters typed so far. Every byte is in `a..=z`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// The query that results from pressing `key`, leaving `self` untouched.
	///
	/// The letter check happens before case folding, so only `A..=Z` is ever
	/// shifted into the lowercase range.
	pub fn with_key(&self, key: Key) -> Result<Self, Rejected> {
		let mut next = self.clone();
		if key.is_delete() {
			next.0.pop();
		} else if key.code().is_ascii_alphabetic() {
			next.0.push(char::from(key.code().to_ascii_lowercase()));
		} else {
			return Err(Rejected(key));
		}
		Ok(next)
	}

	/// Applies `key` in place. On rejection the query is unchanged.
	pub fn apply(&mut self, key: Key) -> Result<(), Rejected> {
		*self = self.with_key(key)?;
		Ok(())
	}
}

impl Display for Query {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		formatter.write_str(&self.0)
	}
}
