//! Node block: upper-triangular adjacency rows followed by positions.
//!
//! ```text
//! 3          node count M
//! 011        row i: only columns i..M are meaningful
//! 001
//! 000
//! 0.1,0.2,0.01
//! -0.3,0.4,0.0
//! 0.5,-0.6,0.02
//! ```

use crate::codec::{LineCursor, SectionDecoder};
use crate::error::{DecodeResult, SectionKind};
use crate::game::{link_nodes, verify_graph, Edge, Node, Position, DEFAULT_COORDINATE_SCALE};

/// Decoder for the node block.
#[derive(Debug, Clone, Copy)]
pub struct NodeDecoder {
    coordinate_scale: f32,
}

impl Default for NodeDecoder {
    fn default() -> Self {
        Self::new(DEFAULT_COORDINATE_SCALE)
    }
}

impl NodeDecoder {
    /// Create a decoder applying `coordinate_scale` to raw positions.
    #[must_use]
    pub const fn new(coordinate_scale: f32) -> Self {
        Self { coordinate_scale }
    }

    /// Collect the edges of the adjacency rows, in discovery order.
    ///
    /// # Errors
    ///
    /// Returns an error for a missing or malformed row.
    pub fn collect_edges(lines: LineCursor<'_>, count: usize) -> DecodeResult<Vec<Edge>> {
        let mut edges = Vec::new();
        for row in 0..count {
            let index = 1 + row;
            let text = lines.line(index)?.trim();
            let bytes = text.as_bytes();

            // Either the full row or just its meaningful suffix.
            let suffix = if bytes.len() == count {
                &bytes[row..]
            } else if bytes.len() == count - row {
                bytes
            } else {
                return Err(lines.malformed(index, "adjacency row", text));
            };

            for (offset, &cell) in suffix.iter().enumerate() {
                let column = row + offset;
                match cell {
                    b'1' if column != row => edges.push((row, column)),
                    b'0' | b'1' => {}
                    _ => return Err(lines.malformed(index, "adjacency row", text)),
                }
            }
        }
        Ok(edges)
    }

    fn position(self, lines: LineCursor<'_>, index: usize) -> DecodeResult<Position> {
        let text = lines.line(index)?;
        let mut raw = [0.0f32; 3];
        let mut tokens = text.split(',');

        for slot in &mut raw {
            let token = tokens
                .next()
                .ok_or_else(|| lines.malformed(index, "position", text))?;
            let value: f32 = lines.parse_token(index, token.trim(), "coordinate")?;
            if !value.is_finite() {
                return Err(lines.malformed(index, "coordinate", token));
            }
            *slot = value;
        }
        if tokens.next().is_some() {
            return Err(lines.malformed(index, "position", text));
        }

        Ok(Position::from_raw(raw, self.coordinate_scale))
    }
}

impl SectionDecoder for NodeDecoder {
    type Output = Vec<Node>;
    type Context<'c> = ();

    const KIND: SectionKind = SectionKind::Nodes;

    fn required_lines(&self, lines: LineCursor<'_>) -> DecodeResult<usize> {
        let count = lines.within(Self::KIND).count(0)?;
        Ok(count.saturating_mul(2).saturating_add(1))
    }

    fn parse(&self, lines: LineCursor<'_>, (): ()) -> DecodeResult<Vec<Node>> {
        let lines = lines.within(Self::KIND);
        lines.ensure(self.required_lines(lines)?)?;
        let count = lines.count(0)?;

        // Phase 1: the complete edge list, before any node exists.
        let edges = Self::collect_edges(lines, count)?;

        let positions = (0..count)
            .map(|node| self.position(lines, 1 + count + node))
            .collect::<DecodeResult<Vec<_>>>()?;

        // Phase 2: populate connection lists from the finished edge list.
        let nodes = link_nodes(positions, &edges);
        verify_graph(&nodes)?;

        tracing::trace!(nodes = count, edges = edges.len(), "linked node graph");
        Ok(nodes)
    }
}
