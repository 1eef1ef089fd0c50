#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub offset: usize,
    pub len: usize,
}

impl SourceLocation {
    pub fn new(offset: usize, len: usize) -> Self {
        SourceLocation { offset, len }
    }

    /// Return the section of `source` corresponding to this location.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.offset..self.end_offset()]
    }

    /// 1-based line and column of the start of this location.
    pub fn line_col(&self, source: &str) -> (usize, usize) {
        let before = &source[..self.offset];
        let line = before.matches('\n').count() + 1;
        let col = before.rfind('\n').map_or(before.len(), |i| before.len() - i - 1) + 1;
        (line, col)
    }

    /// Render the line containing this location with a caret marker below it.
    pub fn render(&self, source: &str) -> String {
        let (line, loc) = self.context(source);
        let pad = " ".repeat(line[..loc.offset].chars().count());
        let marks = "^".repeat(loc.text(line).chars().count().max(1));
        format!("{}\n{}{}", line, pad, marks)
    }

    /// Return the line that contains the object's location, and the location
    /// relative to that line. Locations spanning lines are clipped to the first.
    fn context(self, source: &str) -> (&str, SourceLocation) {
        let start = source[..self.offset].rfind('\n').map_or(0, |i| i + 1);
        let end = source[self.offset..]
            .find('\n')
            .map_or(source.len(), |i| self.offset + i);
        let offset = self.offset - start;
        let len = self.len.min(end - self.offset);
        (&source[start..end], SourceLocation { offset, len })
    }

    fn end_offset(&self) -> usize {
        self.offset.saturating_add(self.len)
    }
}

pub trait Locate {
    fn location(&self) -> SourceLocation;
}

pub trait TryLocate {
    fn maybe_location(&self) -> Option<SourceLocation>;
}

impl<T: Locate> TryLocate for T {
    fn maybe_location(&self) -> Option<SourceLocation> {
        Some(self.location())
    }
}
