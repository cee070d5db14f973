use std::fmt::{self, Display, Formatter};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A single pressed key, as the byte a raw terminal would deliver for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key(pub u8);

impl Key {
	pub const DELETE: Self = Self(127);
	/// The only way out of the search loop.
	pub const EXIT: Self = Self(b'Z');

	const ENTER: Self = Self(b'\n');
	const TAB: Self = Self(b'\t');
	const ESCAPE: Self = Self(0x1b);

	pub fn code(self) -> u8 {
		self.0
	}

	pub fn is_delete(self) -> bool {
		self == Self::DELETE
	}

	pub fn is_exit(self) -> bool {
		self == Self::EXIT
	}

	/// Maps a terminal key event to its byte code.
	///
	/// Releases and repeats are dropped, as is anything without a single-byte
	/// representation (arrows, function keys, characters outside ASCII).
	pub fn from_event(event: KeyEvent) -> Option<Self> {
		if event.kind != KeyEventKind::Press {
			return None;
		}

		Some(match event.code {
			KeyCode::Char(ch) => {
				let byte = u8::try_from(ch).ok().filter(u8::is_ascii)?;
				if event.modifiers.contains(KeyModifiers::CONTROL) && byte.is_ascii_alphabetic() {
					Self(byte & 0x1f)
				} else {
					Self(byte)
				}
			}
			KeyCode::Backspace | KeyCode::Delete => Self::DELETE,
			KeyCode::Enter => Self::ENTER,
			KeyCode::Tab => Self::TAB,
			KeyCode::Esc => Self::ESCAPE,
			_ => return None,
		})
	}
}

impl From<u8> for Key {
	fn from(code: u8) -> Self {
		Self(code)
	}
}

/// Shows `del` for the delete key, otherwise the character itself.
impl Display for Key {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		if self.is_delete() {
			formatter.write_str("del")
		} else if self.0.is_ascii_graphic() {
			write!(formatter, "{}", char::from(self.0))
		} else {
			// Control codes would garble the frame.
			write!(formatter, "{}", self.0.escape_ascii())
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn press(code: KeyCode, modifiers: KeyModifiers) -> Option<Key> {
		Key::from_event(KeyEvent::new(code, modifiers))
	}

	#[test]
	fn maps_events_to_bytes() {
		assert_eq!(press(KeyCode::Char('a'), KeyModifiers::NONE), Some(Key(b'a')));
		assert_eq!(press(KeyCode::Char('Z'), KeyModifiers::SHIFT), Some(Key::EXIT));
		assert_eq!(press(KeyCode::Char('5'), KeyModifiers::NONE), Some(Key(b'5')));
		assert_eq!(press(KeyCode::Char('c'), KeyModifiers::CONTROL), Some(Key(3)));
		assert_eq!(press(KeyCode::Backspace, KeyModifiers::NONE), Some(Key::DELETE));
		assert_eq!(press(KeyCode::Enter, KeyModifiers::NONE), Some(Key(10)));
		assert_eq!(press(KeyCode::Left, KeyModifiers::NONE), None);
		assert_eq!(press(KeyCode::Char('é'), KeyModifiers::NONE), None);
	}

	#[test]
	fn ignores_releases() {
		let mut event = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
		event.kind = KeyEventKind::Release;
		assert_eq!(Key::from_event(event), None);
	}

	#[test]
	fn display() {
		assert_eq!(Key::DELETE.to_string(), "del");
		assert_eq!(Key(b'q').to_string(), "q");
		assert_eq!(Key(b' ').to_string(), " ");
		assert_eq!(Key(b'\n').to_string(), "\\n");
	}
}
