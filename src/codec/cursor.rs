//! Line splitting and positional slicing.

use std::str::FromStr;

use crate::error::{DecodeError, DecodeResult, Entity, SectionKind};

/// Split raw game text into lines.
///
/// Lines are separated by `\n`; a trailing `\r` on each line is dropped.
/// Text ending in a newline yields a final empty line.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// A window over a sequence of lines.
///
/// The cursor remembers where its first line sits in the whole input so that
/// errors report absolute line numbers, and which section it belongs to so
/// that errors name it.
#[derive(Debug, Clone, Copy)]
pub struct LineCursor<'a> {
    lines: &'a [&'a str],
    offset: usize,
    section: SectionKind,
}

impl<'a> LineCursor<'a> {
    /// Create a cursor over a whole input, starting in the header section.
    #[must_use]
    pub const fn new(lines: &'a [&'a str]) -> Self {
        Self {
            lines,
            offset: 0,
            section: SectionKind::Header,
        }
    }

    /// The same window, attributed to `section`.
    #[must_use]
    pub const fn within(self, section: SectionKind) -> Self {
        Self { section, ..self }
    }

    /// Section errors from this cursor are attributed to.
    #[must_use]
    pub const fn section(&self) -> SectionKind {
        self.section
    }

    /// Number of lines in the window.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the window holds no lines.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Absolute, 1-based line number of `index` within the whole input.
    #[must_use]
    pub const fn line_number(&self, index: usize) -> usize {
        self.offset + index + 1
    }

    /// Lines of the window.
    #[must_use]
    pub const fn lines(&self) -> &'a [&'a str] {
        self.lines
    }

    /// Line at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] if the window is too short.
    pub fn line(&self, index: usize) -> DecodeResult<&'a str> {
        self.lines
            .get(index)
            .copied()
            .ok_or_else(|| self.truncated(index.saturating_add(1)))
    }

    /// Fail unless the window holds at least `needed` lines.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] if the window is too short.
    pub fn ensure(&self, needed: usize) -> DecodeResult<()> {
        if needed > self.lines.len() {
            return Err(self.truncated(needed));
        }
        Ok(())
    }

    /// Split into the first `mid` lines and the remainder.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] if fewer than `mid` lines remain.
    pub fn split_at(self, mid: usize) -> DecodeResult<(Self, Self)> {
        self.ensure(mid)?;
        let (head, tail) = self.lines.split_at(mid);
        Ok((
            Self { lines: head, ..self },
            Self {
                lines: tail,
                offset: self.offset + mid,
                ..self
            },
        ))
    }

    /// Parse line `index` as a plain decimal count.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] if the line is missing or
    /// [`DecodeError::MalformedField`] if it is not a decimal integer.
    pub fn count(&self, index: usize) -> DecodeResult<usize> {
        let text = self.line(index)?;
        self.parse_token(index, text.trim(), "count")
    }

    /// Extract the first run of ASCII digits on line `index` as a count.
    ///
    /// Tolerates a count embedded in surrounding text.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] if the line is missing or
    /// [`DecodeError::MalformedField`] if it holds no digits.
    pub fn embedded_count(&self, index: usize) -> DecodeResult<usize> {
        let text = self.line(index)?;
        let digits = text
            .find(|c: char| c.is_ascii_digit())
            .map(|start| {
                let rest = &text[start..];
                let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
                &rest[..end]
            })
            .unwrap_or_default();
        self.parse_token(index, digits, "count")
    }

    /// Parse `token` found on line `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MalformedField`] if the token does not parse.
    pub fn parse_token<T: FromStr>(
        &self,
        index: usize,
        token: &str,
        field: &'static str,
    ) -> DecodeResult<T> {
        token
            .parse()
            .map_err(|_| self.malformed(index, field, token))
    }

    /// Build a [`DecodeError::MalformedField`] for line `index`.
    #[must_use]
    pub fn malformed(&self, index: usize, field: &'static str, value: &str) -> DecodeError {
        DecodeError::MalformedField {
            section: self.section,
            line: self.line_number(index),
            field,
            value: value.to_string(),
        }
    }

    /// Check `value` is a valid index into `bound` entities.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Referential`] if `value >= bound`.
    pub fn resolve(
        &self,
        index: usize,
        entity: Entity,
        value: usize,
        bound: usize,
    ) -> DecodeResult<usize> {
        if value >= bound {
            return Err(DecodeError::Referential {
                section: self.section,
                line: self.line_number(index),
                entity,
                index: value,
                bound,
            });
        }
        Ok(value)
    }

    /// Index of the first line that is not blank.
    #[must_use]
    pub fn first_non_blank(&self) -> Option<usize> {
        self.lines.iter().position(|line| !line.trim().is_empty())
    }

    fn truncated(&self, needed: usize) -> DecodeError {
        DecodeError::Truncated {
            section: self.section,
            needed,
            available: self.lines.len(),
        }
    }
}
