use std::fmt;

/// A position in the source code where an assertion was made.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Location {
    #[allow(missing_docs)]
    pub file: &'static str,
    #[allow(missing_docs)]
    pub line: u32,
}

impl Location {
    #[allow(missing_docs)]
    #[inline]
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
