//! Spatial indexing for cable-like wire connections in a voxel world.
//!
//! Wires hang between two attachment points as catenary curves. This crate
//! tracks which voxels and which sections (16³ voxel clusters) each wire's
//! curve physically occupies, keeping two incremental indices consistent as
//! wires come and go:
//!
//! - [`CollisionIndex`] (server mode) — voxel → collision records, for
//!   interaction and hit testing;
//! - [`RenderSegmentIndex`] (client mode) — section → contiguous sample
//!   runs, for render batching.
//!
//! A running instance owns exactly one of the two; both implement the
//! [`WireIndex`] capability trait. Curve geometry enters through the
//! [`GeometrySampler`] seam; [`CatenarySampler`] is the hanging-wire
//! implementation.

pub mod constants;
pub mod coords;
pub mod error;
pub mod geometry;
pub mod index;
pub mod network;
pub mod wire;

pub use coords::{SectionPos, VoxelPos};
pub use error::{WireGridError, WireGridResult};
pub use geometry::{CatenarySampler, CatenaryShape, GeometrySampler, RenderSample, TraversalKind, VoxelTraversal};
pub use index::{
    partition_sections, CollisionIndex, CollisionRecord, RenderSegment, RenderSegmentIndex,
    WireIndex,
};
pub use network::{NetworkId, NetworkProvider};
pub use wire::{Connection, ConnectionId, WireEnd};
