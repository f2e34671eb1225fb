//! Standard Type1 fonts and their glyph metrics
//!
//! Widths are in 1/1000 em, taken from the Adobe core font metrics for the
//! printable ASCII range. Everything else falls back to the width of a digit.

use crate::encoding::to_win_ansi;

/// Fonts available to every document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    333, 333, 584, 584, 584, 611, 975,
    // A-Z
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    333, 278, 333, 584, 556, 333,
    // a-z
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    // { | } ~
    389, 280, 389, 584,
];

impl Font {
    /// Every font, in resource order
    pub(crate) const ALL: [Font; 2] = [Font::Helvetica, Font::HelveticaBold];

    /// PostScript name used in `/BaseFont`
    pub fn base_font(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Name under which the font is registered in page resources
    pub(crate) fn resource_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
        }
    }

    /// Advance width of one encoded byte, in 1/1000 em
    pub fn glyph_width(&self, byte: u8) -> u16 {
        let table = match self {
            Font::Helvetica => &HELVETICA_WIDTHS,
            Font::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        };
        match byte {
            32..=126 => table[(byte - 32) as usize],
            _ => FALLBACK_WIDTH,
        }
    }

    /// Rendered width of `s` at `size` points
    pub fn text_width(&self, s: &str, size: f32) -> f32 {
        let units: u32 = to_win_ansi(s)
            .iter()
            .map(|&b| u32::from(self.glyph_width(b)))
            .sum();
        units as f32 * size / 1000.0
    }
}
