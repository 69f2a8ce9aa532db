//! Source positions.

/// A position in the document buffer.
///
/// - `line` is 0-indexed (first line is 0)
/// - `column` is 0-indexed, counted in characters from the line start
/// - `pointer` is the byte offset into the full buffer
///
/// Marks are what the external tokenizer attaches to every token. Rules
/// convert them to 1-based line/column pairs when reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mark {
    /// Line number (0-indexed)
    pub line: usize,
    /// Character offset within the line (0-indexed)
    pub column: usize,
    /// Byte offset into the buffer
    pub pointer: usize,
}

impl Mark {
    /// Create a new mark.
    #[must_use]
    pub const fn new(line: usize, column: usize, pointer: usize) -> Self {
        Self {
            line,
            column,
            pointer,
        }
    }

    /// Compute the mark for a byte offset by scanning `buffer` up to it.
    ///
    /// Offsets past the end of the buffer are clamped to its length.
    #[must_use]
    pub fn from_offset(buffer: &str, offset: usize) -> Self {
        let offset = offset.min(buffer.len());
        let before = &buffer.as_bytes()[..offset];
        let line = before.iter().filter(|&&b| b == b'\n').count();
        let line_start = before
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |idx| idx + 1);
        let column = String::from_utf8_lossy(&before[line_start..]).chars().count();
        Self {
            line,
            column,
            pointer: offset,
        }
    }
}

impl PartialOrd for Mark {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Mark {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.pointer.cmp(&other.pointer)
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_from_offset() {
        let buffer = "key: value\nother: 1\n";
        assert_eq!(Mark::from_offset(buffer, 0), Mark::new(0, 0, 0));
        assert_eq!(Mark::from_offset(buffer, 3), Mark::new(0, 3, 3));
        assert_eq!(Mark::from_offset(buffer, 11), Mark::new(1, 0, 11));
        assert_eq!(Mark::from_offset(buffer, 16), Mark::new(1, 5, 16));
    }

    #[test]
    fn test_mark_from_offset_counts_characters() {
        let buffer = "é: 1";
        // 'é' is two bytes, one character
        assert_eq!(Mark::from_offset(buffer, 2), Mark::new(0, 1, 2));
    }

    #[test]
    fn test_mark_from_offset_clamps() {
        let buffer = "a\n";
        assert_eq!(Mark::from_offset(buffer, 99), Mark::new(1, 0, 2));
    }

    #[test]
    fn test_mark_ordering() {
        let m1 = Mark::new(0, 5, 5);
        let m2 = Mark::new(0, 10, 10);
        let m3 = Mark::new(1, 0, 12);

        assert!(m1 < m2);
        assert!(m2 < m3);
        assert_eq!(m1.cmp(&m1), std::cmp::Ordering::Equal);
    }

    #[test]
    fn test_mark_display_is_one_based() {
        assert_eq!(format!("{}", Mark::new(0, 0, 0)), "1:1");
        assert_eq!(format!("{}", Mark::new(2, 4, 20)), "3:5");
    }
}
