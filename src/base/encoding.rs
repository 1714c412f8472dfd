//! Column units for [`Position::character`](super::Position).
//!
//! Offsets inside the crate are always UTF-8 byte offsets. Positions
//! exchanged with a client count columns in whatever unit was negotiated
//! (`positionEncoding` in LSP 3.17), UTF-16 code units unless told otherwise.
//! Conversion happens per line, so the cost is bounded by the line length.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The unit in which a position's `character` is counted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PositionEncoding {
    /// UTF-8 bytes.
    #[cfg_attr(feature = "serde", serde(rename = "utf-8"))]
    Utf8,
    /// UTF-16 code units.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "utf-16"))]
    Utf16,
    /// Unicode scalar values.
    #[cfg_attr(feature = "serde", serde(rename = "utf-32"))]
    Utf32,
}

impl PositionEncoding {
    /// The LSP wire name of this encoding.
    pub const fn as_str(self) -> &'static str {
        match self {
            PositionEncoding::Utf8 => "utf-8",
            PositionEncoding::Utf16 => "utf-16",
            PositionEncoding::Utf32 => "utf-32",
        }
    }

    /// Number of units `ch` occupies.
    #[inline]
    pub fn char_len(self, ch: char) -> u32 {
        match self {
            PositionEncoding::Utf8 => ch.len_utf8() as u32,
            PositionEncoding::Utf16 => ch.len_utf16() as u32,
            PositionEncoding::Utf32 => 1,
        }
    }

    /// Length of `text` in units.
    pub fn text_len(self, text: &str) -> u32 {
        if self == PositionEncoding::Utf8 || text.is_ascii() {
            return text.len() as u32;
        }
        text.chars().map(|ch| self.char_len(ch)).sum()
    }

    /// Byte offset of the column `units` within `line`.
    ///
    /// Columns past the end of `line` clamp to `line.len()`. A column that
    /// falls inside a character (half of a surrogate pair, the middle of a
    /// multi-byte sequence) resolves to the start of that character.
    pub fn byte_offset(self, line: &str, units: u32) -> usize {
        if self == PositionEncoding::Utf8 || line.is_ascii() {
            let mut offset = (units as usize).min(line.len());
            while !line.is_char_boundary(offset) {
                offset -= 1;
            }
            return offset;
        }

        let mut consumed = 0u32;
        for (offset, ch) in line.char_indices() {
            let next = consumed + self.char_len(ch);
            if next > units {
                return offset;
            }
            consumed = next;
        }
        line.len()
    }
}

impl fmt::Display for PositionEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PositionEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "utf-8" => Ok(PositionEncoding::Utf8),
            "utf-16" => Ok(PositionEncoding::Utf16),
            "utf-32" => Ok(PositionEncoding::Utf32),
            other => Err(format!("unknown position encoding: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_ascii_is_same_in_every_encoding() {
        for encoding in [PositionEncoding::Utf8, PositionEncoding::Utf16, PositionEncoding::Utf32] {
            assert_eq!(encoding.text_len("hello"), 5);
        }
    }

    #[test]
    fn test_len_non_ascii() {
        // 'é' is 2 bytes / 1 unit, '𝄞' is 4 bytes / 2 UTF-16 units / 1 scalar
        let text = "é𝄞";
        assert_eq!(PositionEncoding::Utf8.text_len(text), 6);
        assert_eq!(PositionEncoding::Utf16.text_len(text), 3);
        assert_eq!(PositionEncoding::Utf32.text_len(text), 2);
    }

    #[test]
    fn test_byte_offset_utf16() {
        let line = "a𝄞b";
        let enc = PositionEncoding::Utf16;
        assert_eq!(enc.byte_offset(line, 0), 0);
        assert_eq!(enc.byte_offset(line, 1), 1);
        // Inside the surrogate pair resolves to the start of the character
        assert_eq!(enc.byte_offset(line, 2), 1);
        assert_eq!(enc.byte_offset(line, 3), 5);
        assert_eq!(enc.byte_offset(line, 4), 6);
        assert_eq!(enc.byte_offset(line, 99), 6);
    }

    #[test]
    fn test_byte_offset_utf8_floors_to_char_boundary() {
        let line = "é!";
        let enc = PositionEncoding::Utf8;
        assert_eq!(enc.byte_offset(line, 1), 0);
        assert_eq!(enc.byte_offset(line, 2), 2);
        assert_eq!(enc.byte_offset(line, 10), 3);
    }

    #[test]
    fn test_byte_offset_utf32() {
        let line = "é𝄞x";
        let enc = PositionEncoding::Utf32;
        assert_eq!(enc.byte_offset(line, 1), 2);
        assert_eq!(enc.byte_offset(line, 2), 6);
        assert_eq!(enc.byte_offset(line, 3), 7);
    }

    #[test]
    fn test_wire_names_roundtrip() {
        for encoding in [PositionEncoding::Utf8, PositionEncoding::Utf16, PositionEncoding::Utf32] {
            assert_eq!(encoding.as_str().parse::<PositionEncoding>(), Ok(encoding));
        }
        assert!("latin-1".parse::<PositionEncoding>().is_err());
    }
}
