//! Line/character positions and ranges, in the shape the Language Server
//! Protocol puts on the wire.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A zero-based line and character position in a document.
///
/// `character` is counted in the units of the document's
/// [`PositionEncoding`](super::PositionEncoding), UTF-16 code units by default.
///
/// Positions order lexicographically: by line, then by character.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// 0-indexed line number
    pub line: u32,
    /// 0-indexed column, in encoding units
    pub character: u32,
}

impl Position {
    /// Create a new position.
    #[inline]
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }

    /// Get 1-indexed line number (for display).
    #[inline]
    pub const fn line_one_indexed(self) -> u32 {
        self.line + 1
    }

    /// Get 1-indexed character number (for display).
    #[inline]
    pub const fn character_one_indexed(self) -> u32 {
        self.character + 1
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line_one_indexed(), self.character_one_indexed())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line_one_indexed(), self.character_one_indexed())
    }
}

/// A range between two positions.
///
/// Callers may hand over a range whose `start` lies after its `end`;
/// use [`Range::well_formed`] before computing offsets from it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Shorthand for `Range::new(Position::new(..), Position::new(..))`.
    #[inline]
    pub const fn from_coords(
        start_line: u32,
        start_character: u32,
        end_line: u32,
        end_character: u32,
    ) -> Self {
        Self {
            start: Position::new(start_line, start_character),
            end: Position::new(end_line, end_character),
        }
    }

    /// An empty range at `position` (an insertion point).
    #[inline]
    pub const fn point(position: Position) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `position` lies in `[start, end)`.
    pub fn contains(&self, position: Position) -> bool {
        let range = self.well_formed();
        range.start <= position && position < range.end
    }

    /// Returns the range with `start` and `end` swapped if they are reversed.
    ///
    /// This only reorders; it does not clamp to any document bounds.
    pub fn well_formed(self) -> Self {
        if self.start > self.end {
            Self {
                start: self.end,
                end: self.start,
            }
        } else {
            self
        }
    }
}

impl fmt::Debug for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}-{:?}", self.start, self.end)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_display() {
        let pos = Position::new(0, 0);
        assert_eq!(format!("{}", pos), "1:1");

        let pos = Position::new(5, 10);
        assert_eq!(format!("{}", pos), "6:11");
    }

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(0, 9) < Position::new(1, 0));
        assert!(Position::new(2, 1) < Position::new(2, 3));
        assert_eq!(Position::new(4, 4).cmp(&Position::new(4, 4)), std::cmp::Ordering::Equal);
    }

    #[test]
    fn test_well_formed_swaps_reversed_range() {
        let range = Range::from_coords(2, 4, 0, 1);
        assert_eq!(range.well_formed(), Range::from_coords(0, 1, 2, 4));

        // Same line, reversed characters
        let range = Range::from_coords(1, 5, 1, 2);
        assert_eq!(range.well_formed(), Range::from_coords(1, 2, 1, 5));
    }

    #[test]
    fn test_well_formed_keeps_ordered_range() {
        let range = Range::from_coords(0, 1, 0, 1);
        assert_eq!(range.well_formed(), range);
        assert!(range.is_empty());
    }

    #[test]
    fn test_range_contains_is_half_open() {
        let range = Range::from_coords(1, 0, 1, 3);
        assert!(range.contains(Position::new(1, 0)));
        assert!(range.contains(Position::new(1, 2)));
        assert!(!range.contains(Position::new(1, 3)));
        assert!(!Range::point(Position::new(1, 0)).contains(Position::new(1, 0)));
    }
}
