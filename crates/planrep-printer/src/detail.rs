//! Append-only detail text.
//!
//! Renderers describe a node (predicates, join keys, ...) by appending to its
//! detail sink. Literal text and formatted text are separate operations, so a
//! literal such as `"100%"` or `"{x}"` is never interpreted.

use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};

pub const LINE_TERMINATOR: char = '\n';

/// Capability to append to a node's free-form description.
///
/// Calls appear in the buffer in call order. Appends never fail.
pub trait DetailSink {
    fn append_literal(&mut self, text: &str);

    fn append_formatted(&mut self, args: fmt::Arguments<'_>);

    fn append_literal_line(&mut self, text: &str) {
        self.append_literal(text);
        self.append_literal(LINE_TERMINATOR.encode_utf8(&mut [0; 4]));
    }

    fn append_formatted_line(&mut self, args: fmt::Arguments<'_>) {
        self.append_formatted(args);
        self.append_literal(LINE_TERMINATOR.encode_utf8(&mut [0; 4]));
    }
}

impl<S: DetailSink + ?Sized> DetailSink for &mut S {
    fn append_literal(&mut self, text: &str) {
        (**self).append_literal(text)
    }

    fn append_formatted(&mut self, args: fmt::Arguments<'_>) {
        (**self).append_formatted(args)
    }
}

/// Append to a [`DetailSink`].
///
/// With a lone text argument the text is appended verbatim. With a format
/// string and arguments the formatted result is appended.
///
/// ```
/// use planrep_printer::{append_detail, DetailBuffer};
///
/// let mut buf = DetailBuffer::new();
/// append_detail!(buf, "100%");
/// append_detail!(buf, " rows={} cost={}", "10", "2.5");
/// assert_eq!(buf.as_str(), "100% rows=10 cost=2.5");
/// ```
#[macro_export]
macro_rules! append_detail {
    ($sink:expr, $text:expr $(,)?) => {
        $crate::detail::DetailSink::append_literal(&mut $sink, $text)
    };
    ($sink:expr, $fmt:literal, $($arg:tt)+) => {
        $crate::detail::DetailSink::append_formatted(
            &mut $sink,
            ::std::format_args!($fmt, $($arg)+),
        )
    };
}

/// Like [`append_detail!`], followed by one line terminator.
#[macro_export]
macro_rules! append_detail_line {
    ($sink:expr, $text:expr $(,)?) => {
        $crate::detail::DetailSink::append_literal_line(&mut $sink, $text)
    };
    ($sink:expr, $fmt:literal, $($arg:tt)+) => {
        $crate::detail::DetailSink::append_formatted_line(
            &mut $sink,
            ::std::format_args!($fmt, $($arg)+),
        )
    };
}

/// Owned text buffer backing a node's details. Only grows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetailBuffer(String);

impl DetailBuffer {
    pub fn new() -> Self {
        Self(String::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(String::with_capacity(capacity))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for DetailBuffer {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl DetailSink for DetailBuffer {
    fn append_literal(&mut self, text: &str) {
        self.0.push_str(text);
    }

    fn append_formatted(&mut self, args: fmt::Arguments<'_>) {
        // Writing into a String cannot fail.
        let _ = self.0.write_fmt(args);
    }

    fn append_literal_line(&mut self, text: &str) {
        self.0.push_str(text);
        self.0.push(LINE_TERMINATOR);
    }

    fn append_formatted_line(&mut self, args: fmt::Arguments<'_>) {
        let _ = self.0.write_fmt(args);
        self.0.push(LINE_TERMINATOR);
    }
}
