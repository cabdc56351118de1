//! Node graph types and the two-phase connection builder.

use serde::Serialize;

use crate::error::{DecodeError, DecodeResult};

/// Index of a node in the decoded node list.
pub type NodeId = usize;

/// An undirected edge between two node indices, in discovery order.
pub type Edge = (NodeId, NodeId);

/// Default factor applied to every raw coordinate axis.
pub const DEFAULT_COORDINATE_SCALE: f32 = 10.0;

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
    /// Depth axis (sign flipped by the transform).
    Z,
}

impl Axis {
    /// All axes in record order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Multiplier applied to this axis when moving into render space.
    #[must_use]
    pub fn factor(self, scale: f32) -> f32 {
        match self {
            Axis::X | Axis::Y => scale,
            Axis::Z => -scale,
        }
    }
}

/// Render-space position of a node.
///
/// Stored after the coordinate transform: each raw axis is multiplied by the
/// scale and `z` is negated.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Position {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
    /// Z coordinate.
    pub z: f32,
}

impl Position {
    /// Create a position from render-space coordinates.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Transform a raw `(x, y, z)` record into render space.
    #[must_use]
    pub fn from_raw(raw: [f32; 3], scale: f32) -> Self {
        Self {
            x: raw[0] * Axis::X.factor(scale),
            y: raw[1] * Axis::Y.factor(scale),
            z: raw[2] * Axis::Z.factor(scale),
        }
    }

    /// Undo the transform, giving back the raw record values.
    #[must_use]
    pub fn to_raw(self, scale: f32) -> [f32; 3] {
        [
            self.x / Axis::X.factor(scale),
            self.y / Axis::Y.factor(scale),
            self.z / Axis::Z.factor(scale),
        ]
    }

    /// Coordinate along one axis.
    #[must_use]
    pub const fn axis(self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Whether every axis is within `epsilon` of `other`.
    #[must_use]
    pub fn approx_eq(self, other: Self, epsilon: f32) -> bool {
        Axis::ALL
            .iter()
            .all(|&axis| (self.axis(axis) - other.axis(axis)).abs() <= epsilon)
    }
}

/// A node (territory) of the connection graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    /// Index of this node; matches its decode position.
    pub id: NodeId,
    /// Render-space position.
    pub position: Position,
    /// Connected nodes, in edge discovery order.
    pub connections: Vec<NodeId>,
}

impl Node {
    /// Whether this node lists `other` as a connection.
    #[must_use]
    pub fn is_connected_to(&self, other: NodeId) -> bool {
        self.connections.contains(&other)
    }

    /// Number of connections.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.connections.len()
    }
}

/// Build nodes from positions and a completed edge list.
///
/// Connection lists are populated in a second pass over `edges`, so every
/// edge `(a, b)` lands in both `a`'s and `b`'s list. Edges with an end outside
/// `positions` are skipped. Self edges are dropped by the caller before this
/// point.
#[must_use]
pub fn link_nodes(positions: Vec<Position>, edges: &[Edge]) -> Vec<Node> {
    let count = positions.len();
    let mut connections: Vec<Vec<NodeId>> = vec![Vec::new(); count];
    for &(a, b) in edges.iter().filter(|&&(a, b)| a < count && b < count) {
        connections[a].push(b);
        connections[b].push(a);
    }

    positions
        .into_iter()
        .zip(connections)
        .enumerate()
        .map(|(id, (position, connections))| Node {
            id,
            position,
            connections,
        })
        .collect()
}

/// Check that the connection relation is symmetric and free of self loops.
///
/// # Errors
///
/// Returns [`DecodeError::StructuralInvariant`] for the first offending pair.
pub fn verify_graph(nodes: &[Node]) -> DecodeResult<()> {
    for node in nodes {
        for &other in &node.connections {
            if other == node.id {
                return Err(DecodeError::StructuralInvariant {
                    node: node.id,
                    other,
                    reason: "node lists itself as a connection",
                });
            }
            let mirrored = nodes
                .get(other)
                .is_some_and(|peer| peer.is_connected_to(node.id));
            if !mirrored {
                return Err(DecodeError::StructuralInvariant {
                    node: node.id,
                    other,
                    reason: "connection is not mirrored",
                });
            }
        }
    }
    Ok(())
}
