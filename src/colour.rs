//! Terminal colour primitives for report output.
//!
//! Colours use the classic 16-entry console palette. `Black` doubles as
//! "no colour": painting with it returns the text untouched in every mode.

use crossterm::tty::IsTty;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[repr(u8)]
pub enum Colour {
    Black = 0,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Brown,
    LightGrey,
    DarkGrey,
    LightBlue,
    LightGreen,
    LightCyan,
    LightRed,
    LightMagenta,
    Yellow,
    White,
}

const PALETTE: [Colour; 16] = [
    Colour::Black,
    Colour::Blue,
    Colour::Green,
    Colour::Cyan,
    Colour::Red,
    Colour::Magenta,
    Colour::Brown,
    Colour::LightGrey,
    Colour::DarkGrey,
    Colour::LightBlue,
    Colour::LightGreen,
    Colour::LightCyan,
    Colour::LightRed,
    Colour::LightMagenta,
    Colour::Yellow,
    Colour::White,
];

/// mIRC colour codes, indexed by palette entry.
const MARKUP_CODES: [&str; 16] = [
    "", "02", "03", "10", "05", "06", "07", "15", "14", "12", "09", "11", "04", "13", "08", "16",
];

/// Palette order is BGR; ANSI wants RGB.
const ANSI_ORDER: [u8; 8] = [0, 4, 2, 6, 1, 5, 3, 7];

const MARKUP_COLOUR: char = '\u{3}';
const MARKUP_RESET: char = '\u{f}';

impl Colour {
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Colour {
        PALETTE[(index & 0x0f) as usize]
    }

    pub fn is_bright(self) -> bool {
        self.index() >= 8
    }

    /// Light variant of a dark colour. Black and bright colours are unchanged.
    pub fn brighten(self) -> Colour {
        if self == Colour::Black || self.is_bright() {
            self
        } else {
            Colour::from_index(self.index() + 8)
        }
    }
}

/// How colour is expressed in the output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourMode {
    /// ANSI on a terminal, markup otherwise.
    Auto,
    Ansi,
    Markup,
    Plain,
}

impl ColourMode {
    pub fn parse(value: &str) -> Option<ColourMode> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(ColourMode::Auto),
            "ansi" => Some(ColourMode::Ansi),
            "markup" | "irc" => Some(ColourMode::Markup),
            "plain" | "none" => Some(ColourMode::Plain),
            _ => None,
        }
    }

    pub fn resolve(self) -> ColourMode {
        match self {
            ColourMode::Auto if std::io::stdout().is_tty() => ColourMode::Ansi,
            ColourMode::Auto => ColourMode::Markup,
            other => other,
        }
    }
}

/// Wraps text in colour escapes for one resolved [`ColourMode`].
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    mode: ColourMode,
}

impl Painter {
    pub fn new(mode: ColourMode) -> Self {
        Self {
            mode: mode.resolve(),
        }
    }

    pub fn plain() -> Self {
        Self {
            mode: ColourMode::Plain,
        }
    }

    pub fn paint(&self, colour: Colour, text: &str) -> String {
        if colour == Colour::Black {
            return text.to_string();
        }
        match self.mode {
            ColourMode::Ansi => {
                let index = colour.index();
                format!(
                    "\x1b[0;3{};{}m{}\x1b[0m",
                    ANSI_ORDER[(index & 7) as usize],
                    u8::from(colour.is_bright()),
                    text
                )
            }
            ColourMode::Markup => format!(
                "{}{}{}{}",
                MARKUP_COLOUR,
                MARKUP_CODES[colour.index() as usize],
                text,
                MARKUP_RESET
            ),
            ColourMode::Plain | ColourMode::Auto => text.to_string(),
        }
    }
}
