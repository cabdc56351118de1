//! The size-probe / parse contract every section decoder implements.

use crate::codec::LineCursor;
use crate::error::{DecodeResult, SectionKind};
use crate::game::{Node, Player};

/// A section of the game text.
///
/// The text has no delimiters between sections, so each decoder exposes a
/// matched pair: [`required_lines`](SectionDecoder::required_lines) reads only
/// count lines to size the section, and [`parse`](SectionDecoder::parse)
/// decodes exactly that many lines. For every valid input both agree.
pub trait SectionDecoder {
    /// Decoded value.
    type Output;
    /// Previously decoded data the section refers to.
    type Context<'c>;

    /// Section errors are attributed to.
    const KIND: SectionKind;

    /// Number of lines the section starting at `lines` occupies.
    ///
    /// # Errors
    ///
    /// Returns an error if a count line is missing or not a number.
    fn required_lines(&self, lines: LineCursor<'_>) -> DecodeResult<usize>;

    /// Decode the section starting at `lines`.
    ///
    /// # Errors
    ///
    /// Returns an error if the section is truncated, holds a malformed field
    /// or refers outside `context`.
    fn parse(
        &self,
        lines: LineCursor<'_>,
        context: Self::Context<'_>,
    ) -> DecodeResult<Self::Output>;
}

/// Players and nodes that actions and states refer to by index.
#[derive(Debug, Clone, Copy)]
pub struct Roster<'c> {
    /// Decoded players.
    pub players: &'c [Player],
    /// Decoded nodes.
    pub nodes: &'c [Node],
}

impl<'c> Roster<'c> {
    /// Create a roster over decoded players and nodes.
    #[must_use]
    pub const fn new(players: &'c [Player], nodes: &'c [Node]) -> Self {
        Self { players, nodes }
    }
}

/// Size, slice and parse one section, returning the lines after it.
///
/// # Errors
///
/// Propagates the decoder's errors; fails with a truncation error if the
/// remaining input is shorter than the probed size.
pub fn decode_section<'a, D: SectionDecoder>(
    decoder: &D,
    lines: LineCursor<'a>,
    context: D::Context<'_>,
) -> DecodeResult<(D::Output, LineCursor<'a>)> {
    let lines = lines.within(D::KIND);
    let needed = decoder.required_lines(lines)?;
    let (section, rest) = lines.split_at(needed)?;
    let output = decoder.parse(section, context)?;

    tracing::debug!(
        section = %D::KIND,
        first_line = section.line_number(0),
        lines = needed,
        "decoded section"
    );

    Ok((output, rest))
}
