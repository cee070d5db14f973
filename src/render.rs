//! Turns one search step into styled lines. Nothing here touches the terminal.

use std::time::Duration;

use crate::keys::Key;
use crate::query::Query;

pub const TITLE: &str = "Dictionary Search";
const ADVISORY: &str = "Letters only!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
	Black,
	Red,
	Green,
	Blue,
	Grey,
	BrightBlack,
	BrightRed,
	BrightYellow,
	BrightBlue,
	BrightGrey,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Style {
	pub fg: Option<Color>,
	pub bg: Option<Color>,
	pub bold: bool,
	pub underline: bool,
}

impl Style {
	pub const PLAIN: Self = Self {
		fg: None,
		bg: None,
		bold: false,
		underline: false,
	};

	pub const fn fg(color: Color) -> Self {
		Self {
			fg: Some(color),
			..Self::PLAIN
		}
	}

	pub const fn on(self, color: Color) -> Self {
		Self {
			bg: Some(color),
			..self
		}
	}

	pub const fn bold(self) -> Self {
		Self { bold: true, ..self }
	}

	pub const fn underline(self) -> Self {
		Self {
			underline: true,
			..self
		}
	}
}

const LABEL: Style = Style::fg(Color::Green).bold();
/// The part of a match that equals the query.
pub const MATCHED: Style = Style::fg(Color::Red).underline();
/// The rest of a match.
pub const REMAINDER: Style = Style::fg(Color::Blue);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
	pub text: String,
	pub style: Style,
}

impl Span {
	pub fn new(text: impl Into<String>, style: Style) -> Self {
		Self {
			text: text.into(),
			style,
		}
	}

	pub fn plain(text: impl Into<String>) -> Self {
		Self::new(text, Style::PLAIN)
	}
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Line(pub Vec<Span>);

impl Line {
	pub fn spans(&self) -> &[Span] {
		&self.0
	}

	/// The line's text without styling.
	#[allow(dead_code)]
	pub fn text(&self) -> String {
		self.0.iter().map(|span| &*span.text).collect()
	}
}

impl From<Span> for Line {
	fn from(span: Span) -> Self {
		Self(vec![span])
	}
}

impl From<Vec<Span>> for Line {
	fn from(spans: Vec<Span>) -> Self {
		Self(spans)
	}
}

/// Everything one processed keystroke puts on screen.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
	pub key: Key,
	pub query: &'a Query,
	pub matches: &'a [&'a str],
	pub elapsed: Duration,
	pub width: usize,
}

pub fn title_bar(width: usize) -> Line {
	let left = width.saturating_sub(TITLE.len()) / 2;
	let right = width.saturating_sub(TITLE.len() + left);
	let text = format!("{:left$}{TITLE}{:right$}", "", "");
	Span::new(text, Style::fg(Color::Grey).on(Color::BrightBlack)).into()
}

pub fn separator(width: usize) -> Line {
	Span::new("_".repeat(width), Style::fg(Color::Grey)).into()
}

/// Splits `word` into the matched query and the remainder.
/// Falls back to the whole word, unstyled, if `query` isn't actually a prefix.
pub fn highlighted(word: &str, query: &str) -> Line {
	match word.strip_prefix(query) {
		Some(rest) if !query.is_empty() => vec![
			Span::new(query, MATCHED),
			Span::new(rest, REMAINDER),
		]
		.into(),
		_ => Span::plain(word).into(),
	}
}

pub fn frame(frame: &Frame<'_>) -> Vec<Line> {
	let Frame {
		key,
		query,
		matches,
		elapsed,
		width,
	} = *frame;

	let mut lines = Vec::with_capacity(matches.len() + 7);
	lines.push(title_bar(width));
	lines.push(separator(width));
	lines.push(
		vec![
			Span::new("KeyPressed:      ", LABEL),
			Span::new(format!("{key} = {}", key.code()), Style::fg(Color::BrightYellow)),
		]
		.into(),
	);
	lines.push(
		vec![
			Span::new("Current Substr:  ", LABEL),
			Span::new(query.as_str(), Style::fg(Color::BrightBlue)),
		]
		.into(),
	);
	lines.push(Line::default());
	lines.push(
		vec![
			Span::new("MATCHES: ", Style::fg(Color::Black).bold().underline()),
			Span::new(matches.len().to_string(), Style::fg(Color::Green).bold().underline()),
		]
		.into(),
	);
	lines.push(Span::plain(format!("Time taken: {} milliseconds", elapsed.as_millis())).into());
	lines.extend(matches.iter().map(|word| highlighted(word, query.as_str())));
	lines
}

/// Shown instead of a frame when a keystroke is rejected.
pub fn rejection(width: usize) -> Vec<Line> {
	vec![
		title_bar(width),
		Span::new(ADVISORY, Style::fg(Color::BrightGrey).on(Color::BrightRed)).into(),
	]
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn title_is_centered_and_full_width() {
		for width in [17, 18, 40, 81] {
			let text = title_bar(width).text();
			assert_eq!(text.len(), width);
			let left = text.find(TITLE).unwrap();
			let right = width - left - TITLE.len();
			assert!(left == right || left + 1 == right, "width {width}");
		}
		assert_eq!(title_bar(5).text(), TITLE);
	}

	#[test]
	fn separator_spans_width() {
		assert_eq!(separator(12).text(), "____________");
		assert_eq!(separator(0).text(), "");
	}

	#[test]
	fn highlight_splits_at_query() {
		let line = highlighted("apple", "app");
		assert_eq!(
			line.spans(),
			[Span::new("app", MATCHED), Span::new("le", REMAINDER)]
		);

		let whole = highlighted("app", "app");
		assert_eq!(whole.spans(), [Span::new("app", MATCHED), Span::new("", REMAINDER)]);
	}

	#[test]
	fn highlight_falls_back_to_plain() {
		assert_eq!(highlighted("paxal", "ax"), Line::from(Span::plain("paxal")));
		assert_eq!(highlighted("apple", ""), Line::from(Span::plain("apple")));
	}

	#[test]
	fn frame_layout() {
		let mut query = Query::new();
		query.apply(Key(b'a')).unwrap();
		query.apply(Key(b'p')).unwrap();
		let matches = ["apple", "app"];
		let lines = frame(&Frame {
			key: Key(b'p'),
			query: &query,
			matches: &matches,
			elapsed: Duration::from_micros(2_700),
			width: 30,
		});

		let texts = lines.iter().map(Line::text).collect::<Vec<_>>();
		assert_eq!(
			texts[1..],
			[
				"_".repeat(30),
				"KeyPressed:      p = 112".into(),
				"Current Substr:  ap".into(),
				String::new(),
				"MATCHES: 2".into(),
				"Time taken: 2 milliseconds".into(),
				"apple".into(),
				"app".into(),
			]
		);
		assert_eq!(lines[0], title_bar(30));
		assert_eq!(lines[8].spans()[0], Span::new("ap", MATCHED));
	}

	#[test]
	fn frame_shows_del_for_delete() {
		let query = Query::new();
		let lines = frame(&Frame {
			key: Key::DELETE,
			query: &query,
			matches: &[],
			elapsed: Duration::ZERO,
			width: 20,
		});
		assert_eq!(lines[2].text(), "KeyPressed:      del = 127");
		assert_eq!(lines[5].text(), "MATCHES: 0");
		assert_eq!(lines.len(), 7);
	}

	#[test]
	fn rejection_is_title_and_banner() {
		let lines = rejection(20);
		assert_eq!(lines.len(), 2);
		assert_eq!(lines[0], title_bar(20));
		assert_eq!(lines[1].text(), "Letters only!");
	}
}
