use std::borrow::Cow;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, col: 1 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// A span between two positions, inclusive on the both ends.
#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq, Default)]
pub struct Span {
    #[serde(default)]
    pub start: Position,
    #[serde(default)]
    pub end: Position,
}

impl Span {
    /// A span covering a single line, as reported by front ends that only track lines.
    pub fn line(line: usize) -> Self {
        Self {
            start: Position { line, col: 1 },
            end: Position { line, col: 1 },
        }
    }

    /// The line diagnostics are attributed to.
    pub fn start_line(&self) -> usize {
        self.start.line
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq, Default)]
pub struct Spanned<T> {
    pub value: T,
    #[serde(default)]
    pub span: Span,
}

pub trait HasSpan {
    fn span(&self) -> Cow<'_, Span>;
}

impl<T> HasSpan for Spanned<T> {
    fn span(&self) -> Cow<'_, Span> {
        Cow::Borrowed(&self.span)
    }
}

impl HasSpan for Span {
    fn span(&self) -> Cow<'_, Span> {
        Cow::Borrowed(self)
    }
}
