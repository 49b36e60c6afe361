// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Navigation cursor over the ordered image list.

use crate::error::{CaptionError, Result};

/// Current position in a non-empty list of `len` images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    len: usize,
}

impl Cursor {
    /// Create a cursor at `index`. Returns `None` for an empty list; an
    /// out-of-range index starts at the beginning.
    pub fn new(index: usize, len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        let index = if index < len { index } else { 0 };
        Some(Self { index, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Step forward, wrapping to the start.
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    /// Step back, wrapping to the end.
    pub fn previous(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Validate a 1-based image number and return its 0-based index.
    fn resolve(&self, number: usize) -> Result<usize> {
        if (1..=self.len).contains(&number) {
            Ok(number - 1)
        } else {
            Err(CaptionError::OutOfRange {
                requested: number,
                len: self.len,
            })
        }
    }

    /// Parse user input as a 1-based image number. Range is checked by
    /// [`Cursor::goto`].
    pub fn parse_number(input: &str) -> Result<usize> {
        let trimmed = input.trim();
        trimmed
            .parse()
            .map_err(|_| CaptionError::InvalidNumber(trimmed.to_string()))
    }

    /// Jump to a 1-based image number. The cursor is unchanged on error.
    pub fn goto(&mut self, number: usize) -> Result<()> {
        self.index = self.resolve(number)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_has_no_cursor() {
        assert!(Cursor::new(0, 0).is_none());
    }

    #[test]
    fn test_next_wraps_around() {
        let len = 5;
        for start in 0..len {
            let mut cursor = Cursor::new(start, len).unwrap();
            for _ in 0..len {
                cursor.next();
            }
            assert_eq!(cursor.index(), start);
        }
    }

    #[test]
    fn test_previous_wraps_around() {
        let len = 4;
        for start in 0..len {
            let mut cursor = Cursor::new(start, len).unwrap();
            for _ in 0..len {
                cursor.previous();
            }
            assert_eq!(cursor.index(), start);
        }

        let mut cursor = Cursor::new(0, len).unwrap();
        cursor.previous();
        assert_eq!(cursor.index(), 3);
    }

    #[test]
    fn test_single_image_stays_put() {
        let mut cursor = Cursor::new(0, 1).unwrap();
        cursor.next();
        assert_eq!(cursor.index(), 0);
        cursor.previous();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_goto_in_range() {
        let mut cursor = Cursor::new(0, 3).unwrap();
        cursor.goto(3).unwrap();
        assert_eq!(cursor.index(), 2);
        cursor.goto(1).unwrap();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_goto_out_of_range_leaves_cursor() {
        let mut cursor = Cursor::new(1, 3).unwrap();
        assert!(matches!(cursor.goto(0), Err(CaptionError::OutOfRange { .. })));
        assert!(matches!(cursor.goto(4), Err(CaptionError::OutOfRange { .. })));
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(Cursor::parse_number(" 7 ").unwrap(), 7);
        assert!(matches!(Cursor::parse_number("seven"), Err(CaptionError::InvalidNumber(_))));
        assert!(matches!(Cursor::parse_number("-1"), Err(CaptionError::InvalidNumber(_))));
        assert!(matches!(Cursor::parse_number(""), Err(CaptionError::InvalidNumber(_))));
    }

    #[test]
    fn test_parsed_number_out_of_range_is_rejected_by_goto() {
        let mut cursor = Cursor::new(2, 10).unwrap();
        let number = Cursor::parse_number("11").unwrap();
        assert!(matches!(cursor.goto(number), Err(CaptionError::OutOfRange { requested: 11, len: 10 })));
        assert_eq!(cursor.index(), 2);
    }
}
