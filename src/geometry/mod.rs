//! Wire curve geometry
//!
//! Producers of the two sequences the spatial indices consume: voxel
//! traversals for collision data and ordered render samples for section
//! partitioning. Sequences are finite and restartable: sampling the same
//! connection twice yields identical output, which is what lets removal
//! re-derive exactly what insertion produced.

mod catenary;

pub use catenary::{CatenarySampler, CatenaryShape};

use glam::Vec3;

use crate::coords::{SectionPos, VoxelPos};
use crate::wire::Connection;

/// How a curve passes through a voxel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalKind {
    /// The curve crosses the voxel interior
    Full,
    /// The curve only clips the voxel near a boundary
    Partial,
}

/// One voxel the curve geometrically intersects
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoxelTraversal {
    pub voxel: VoxelPos,
    /// Point where the curve enters the voxel
    pub entry: Vec3,
    /// Point where the curve leaves the voxel
    pub exit: Vec3,
    pub kind: TraversalKind,
}

/// One ordered curve sample for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSample {
    pub index: u32,
    pub point: Vec3,
    pub section: SectionPos,
}

/// Produces the geometric sequences for a connection's curve.
///
/// Implementations must be deterministic per connection: both indices rely
/// on removal replaying the exact sequence insertion consumed.
pub trait GeometrySampler {
    /// Every voxel the curve intersects, in curve order
    fn ray_trace(&self, conn: &Connection) -> Vec<VoxelTraversal>;

    /// The ordered render sample sequence, indices contiguous from 0
    fn sample_for_render(&self, conn: &Connection) -> Vec<RenderSample>;
}
