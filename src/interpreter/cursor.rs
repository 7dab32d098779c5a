use tracing::trace;

/// Sequential reader over the lines of a program.
///
/// The cursor counts lines from 1. Reading hands out the line after the last
/// one read; [`rewind`](Self::rewind) and [`advance`](Self::advance) move the
/// read position without handing anything out. Both are index updates over
/// the in-memory lines, so relocating costs the same wherever the target is.
///
/// # Example
/// ```
/// use spl::interpreter::cursor::SourceCursor;
///
/// let mut cursor = SourceCursor::new("a\nb\nc");
/// assert_eq!(cursor.next_line(), Some((1, "a")));
/// cursor.relocate(3);
/// assert_eq!(cursor.next_line(), Some((3, "c")));
/// assert_eq!(cursor.next_line(), None);
/// ```
#[derive(Debug, Clone)]
pub struct SourceCursor<'src> {
    lines:    Vec<&'src str>,
    position: usize,
}

impl<'src> SourceCursor<'src> {
    /// Splits `source` into lines and positions the cursor before line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lines:    source.lines().collect(),
               position: 0, }
    }

    /// Reads the next line.
    ///
    /// # Returns
    /// The 1-based number and text of the line, or `None` at end of input.
    pub fn next_line(&mut self) -> Option<(usize, &'src str)> {
        let text = *self.lines.get(self.position)?;
        self.position += 1;
        Some((self.position, text))
    }

    /// Number of the line most recently read, `0` before the first read.
    #[must_use]
    pub const fn current_line(&self) -> usize {
        self.position
    }

    /// Total number of lines in the program.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the program has no lines at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Moves the read position back before line 1.
    pub const fn rewind(&mut self) {
        self.position = 0;
    }

    /// Skips `count` lines without reading them, stopping at end of input.
    pub fn advance(&mut self, count: usize) {
        self.position = self.position.saturating_add(count).min(self.lines.len());
    }

    /// Positions the cursor so that the next read returns `line`.
    ///
    /// This is a rewind followed by skipping every line before `line`.
    pub fn relocate(&mut self, line: usize) {
        self.rewind();
        self.advance(line.saturating_sub(1));
        trace!(line, "cursor relocated");
    }
}

#[cfg(test)]
mod tests {
    use super::SourceCursor;

    #[test]
    fn reads_lines_in_order_with_one_based_numbers() {
        let mut cursor = SourceCursor::new("first\nsecond\r\nthird");

        assert_eq!(cursor.len(), 3);
        assert_eq!(cursor.current_line(), 0);
        assert_eq!(cursor.next_line(), Some((1, "first")));
        assert_eq!(cursor.next_line(), Some((2, "second")));
        assert_eq!(cursor.current_line(), 2);
        assert_eq!(cursor.next_line(), Some((3, "third")));
        assert_eq!(cursor.next_line(), None);
        assert_eq!(cursor.current_line(), 3);
    }

    #[test]
    fn relocating_backwards_replays_from_the_target() {
        let mut cursor = SourceCursor::new("1\n2\n3\n4");
        while cursor.next_line().is_some() {}

        cursor.relocate(2);
        assert_eq!(cursor.current_line(), 1);
        assert_eq!(cursor.next_line(), Some((2, "2")));
        assert_eq!(cursor.next_line(), Some((3, "3")));
    }

    #[test]
    fn advance_stops_at_end_of_input() {
        let mut cursor = SourceCursor::new("only");
        cursor.advance(10);

        assert_eq!(cursor.current_line(), 1);
        assert_eq!(cursor.next_line(), None);
    }

    #[test]
    fn relocating_to_line_one_is_a_rewind() {
        let mut cursor = SourceCursor::new("x\ny");
        cursor.next_line();
        cursor.next_line();

        cursor.relocate(1);
        assert_eq!(cursor.next_line(), Some((1, "x")));
    }

    #[test]
    fn empty_source_has_no_lines() {
        let mut cursor = SourceCursor::new("");

        assert!(cursor.is_empty());
        assert_eq!(cursor.next_line(), None);
    }
}
