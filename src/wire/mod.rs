//! Wire connection entities
//!
//! A `Connection` is one cable edge between two attachment points in the
//! world. Connections are immutable once built; all mutable bookkeeping
//! (which index has generated data for them) lives inside the indices.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::coords::VoxelPos;
use crate::error::{degenerate_wire, WireGridResult};

/// Stable identity of a connection, used for removal matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConnectionId(pub u64);

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "wire#{}", self.0)
    }
}

/// One endpoint of a connection: the voxel it is attached to plus the
/// attachment point inside that voxel, in [0, 1) per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WireEnd {
    pub voxel: VoxelPos,
    pub offset: Vec3,
}

impl WireEnd {
    pub fn new(voxel: VoxelPos, offset: Vec3) -> Self {
        Self { voxel, offset }
    }

    /// Attachment point centered in the voxel
    pub fn centered(voxel: VoxelPos) -> Self {
        Self::new(voxel, Vec3::splat(0.5))
    }

    /// World-space position of the attachment point
    pub fn position(&self) -> Vec3 {
        self.voxel.min_corner() + self.offset
    }
}

/// One wire edge between two endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    id: ConnectionId,
    end_a: WireEnd,
    end_b: WireEnd,
    internal: bool,
}

impl Connection {
    /// Create a connection that occupies voxel space between its endpoints.
    ///
    /// Fails if an attachment offset is non-finite or the two attachment
    /// points coincide.
    pub fn new(id: ConnectionId, end_a: WireEnd, end_b: WireEnd) -> WireGridResult<Self> {
        Self::build(id, end_a, end_b, false)
    }

    /// Create an internal connection (e.g. between two terminals of one
    /// machine). Internal connections never occupy voxel space and are
    /// excluded from both spatial indices.
    pub fn internal(id: ConnectionId, end_a: WireEnd, end_b: WireEnd) -> WireGridResult<Self> {
        Self::build(id, end_a, end_b, true)
    }

    fn build(
        id: ConnectionId,
        end_a: WireEnd,
        end_b: WireEnd,
        internal: bool,
    ) -> WireGridResult<Self> {
        if !end_a.offset.is_finite() || !end_b.offset.is_finite() {
            return Err(degenerate_wire(format!(
                "{} has a non-finite attachment offset",
                id
            )));
        }
        if end_a.position() == end_b.position() {
            return Err(degenerate_wire(format!("{} endpoints coincide", id)));
        }
        Ok(Self {
            id,
            end_a,
            end_b,
            internal,
        })
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn end_a(&self) -> WireEnd {
        self.end_a
    }

    pub fn end_b(&self) -> WireEnd {
        self.end_b
    }

    pub fn is_internal(&self) -> bool {
        self.internal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_coincident_endpoints() {
        let end = WireEnd::centered(VoxelPos::new(0, 0, 0));
        assert!(Connection::new(ConnectionId(1), end, end).is_err());
    }

    #[test]
    fn test_rejects_non_finite_offset() {
        let a = WireEnd::centered(VoxelPos::new(0, 0, 0));
        let b = WireEnd::new(VoxelPos::new(3, 0, 0), Vec3::new(f32::NAN, 0.5, 0.5));
        assert!(Connection::new(ConnectionId(1), a, b).is_err());
    }

    #[test]
    fn test_end_position_is_voxel_plus_offset() {
        let end = WireEnd::new(VoxelPos::new(2, -1, 0), Vec3::new(0.25, 0.5, 0.75));
        assert_eq!(end.position(), Vec3::new(2.25, -0.5, 0.75));
    }
}
