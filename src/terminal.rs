use std::io::{self, Stdout, Write as _};

use anyhow::Context as _;
use crossterm::event::{self, Event};
use crossterm::style::{self, Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};

use crate::keys::Key;
use crate::render::{Color, Line, Style};
use crate::search::{KeySource, Screen};

const FALLBACK_WIDTH: usize = 80;

/// Raw mode on an alternate screen, for as long as this is alive.
#[derive(Debug)]
pub struct RawTerminal {
	_private: (),
}

impl RawTerminal {
	pub fn enter() -> anyhow::Result<Self> {
		terminal::enable_raw_mode().context("enabling raw mode")?;
		// From here on `Drop` undoes whatever succeeded.
		let this = Self { _private: () };
		execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)
			.context("switching to the alternate screen")?;
		Ok(this)
	}
}

impl Drop for RawTerminal {
	fn drop(&mut self) {
		if let Err(error) = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen) {
			log::warn!("leaving the alternate screen: {error}");
		}
		if let Err(error) = terminal::disable_raw_mode() {
			log::warn!("disabling raw mode: {error}");
		}
	}
}

/// Reads keys straight from the terminal. Needs a [`RawTerminal`] to be alive.
#[derive(Debug, Clone, Copy)]
pub struct Keyboard;

impl KeySource for Keyboard {
	fn next_key(&mut self) -> anyhow::Result<Key> {
		loop {
			match event::read().context("reading terminal event")? {
				Event::Key(event) => match Key::from_event(event) {
					Some(key) => return Ok(key),
					None => log::trace!("ignoring {event:?}"),
				},
				other => log::trace!("ignoring {other:?}"),
			}
		}
	}
}

#[derive(Debug)]
pub struct TerminalScreen {
	out: Stdout,
}

impl TerminalScreen {
	pub fn stdout() -> Self {
		Self { out: io::stdout() }
	}

	fn queue_line(&mut self, line: &Line) -> io::Result<()> {
		for span in line.spans() {
			queue_style(&mut self.out, span.style)?;
			queue!(
				self.out,
				Print(&span.text),
				ResetColor,
				SetAttribute(Attribute::Reset)
			)?;
		}
		// Raw mode doesn't translate newlines.
		queue!(self.out, Print("\r\n"))
	}
}

impl Screen for TerminalScreen {
	fn width(&self) -> usize {
		terminal::size().map_or(FALLBACK_WIDTH, |(columns, _rows)| columns.into())
	}

	fn draw(&mut self, lines: &[Line]) -> anyhow::Result<()> {
		queue!(self.out, Clear(ClearType::All), cursor::MoveTo(0, 0)).context("clearing screen")?;
		for line in lines {
			self.queue_line(line).context("writing line")?;
		}
		self.out.flush().context("flushing stdout")
	}
}

fn queue_style(out: &mut impl io::Write, style: Style) -> io::Result<()> {
	if let Some(fg) = style.fg {
		queue!(out, SetForegroundColor(fg.into()))?;
	}
	if let Some(bg) = style.bg {
		queue!(out, SetBackgroundColor(bg.into()))?;
	}
	if style.bold {
		queue!(out, SetAttribute(Attribute::Bold))?;
	}
	if style.underline {
		queue!(out, SetAttribute(Attribute::Underlined))?;
	}
	Ok(())
}

impl From<Color> for style::Color {
	fn from(color: Color) -> Self {
		match color {
			Color::Black => Self::Black,
			Color::Red => Self::DarkRed,
			Color::Green => Self::DarkGreen,
			Color::Blue => Self::DarkBlue,
			Color::Grey => Self::Grey,
			Color::BrightBlack => Self::DarkGrey,
			Color::BrightRed => Self::Red,
			Color::BrightYellow => Self::Yellow,
			Color::BrightBlue => Self::Blue,
			Color::BrightGrey => Self::White,
		}
	}
}
