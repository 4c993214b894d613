//! Wire spatial indices
//!
//! Two structurally different indices over the same wires, one per running
//! mode. The server keeps a fine-grained voxel → collision-record map for
//! interaction queries; the client keeps a coarse section → render-segment
//! map for batching. An instance is one mode for its whole lifetime: the
//! mode is the concrete type picked at construction, and nothing branches
//! on it afterwards.

mod collision;
mod partition;
mod render;

pub use collision::{CollisionIndex, CollisionRecord};
pub use partition::partition_sections;
pub use render::{RenderSegment, RenderSegmentIndex};

use crate::geometry::GeometrySampler;
use crate::wire::Connection;

/// Capability shared by both index modes.
///
/// Adding an already-indexed connection and removing a never-indexed one are
/// both silent no-ops; each index tracks which connections it has generated
/// data for and enforces the add/remove cycle itself.
pub trait WireIndex {
    fn add_connection(&mut self, conn: &Connection, geometry: &dyn GeometrySampler);
    fn remove_connection(&mut self, conn: &Connection, geometry: &dyn GeometrySampler);
}
