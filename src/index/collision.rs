//! Server-mode collision index
//!
//! Maps each voxel a wire's curve passes through to the collision records of
//! the wires inside it. Populated only on the server; the client keeps the
//! section-level render index instead.

use std::sync::Arc;

use glam::Vec3;
use log::info;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::coords::VoxelPos;
use crate::geometry::{GeometrySampler, TraversalKind};
use crate::network::NetworkProvider;
use crate::wire::{Connection, ConnectionId};

use super::WireIndex;

/// Collision data for one wire inside one voxel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionRecord {
    /// Point where the curve enters the voxel
    pub entry: Vec3,
    /// Point where the curve leaves the voxel
    pub exit: Vec3,
    pub connection: ConnectionId,
    /// True when the curve crosses the voxel interior rather than clipping
    /// a boundary
    pub inside_block: bool,
}

/// Server-mode index: voxel → collision records
pub struct CollisionIndex {
    voxel_records: FxHashMap<VoxelPos, Vec<CollisionRecord>>,
    /// Connections whose collision data is currently present
    generated: FxHashSet<ConnectionId>,
    net: Arc<dyn NetworkProvider>,
}

impl CollisionIndex {
    pub fn new(net: Arc<dyn NetworkProvider>) -> Self {
        Self {
            voxel_records: FxHashMap::default(),
            generated: FxHashSet::default(),
            net,
        }
    }

    /// Collision records of the wires passing through `voxel`; empty if none
    pub fn collision_info(&self, voxel: VoxelPos) -> &[CollisionRecord] {
        self.voxel_records
            .get(&voxel)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl WireIndex for CollisionIndex {
    fn add_connection(&mut self, conn: &Connection, geometry: &dyn GeometrySampler) {
        if conn.is_internal() || self.generated.contains(&conn.id()) {
            return;
        }
        let net_a = self.net.local_network(conn.end_a());
        let net_b = self.net.local_network(conn.end_b());
        assert_eq!(
            net_a, net_b,
            "{} spans two local networks, connectivity graph is inconsistent",
            conn.id()
        );
        info!("Adding collision data for {}", conn.id());
        for traversal in geometry.ray_trace(conn) {
            let record = CollisionRecord {
                entry: traversal.entry,
                exit: traversal.exit,
                connection: conn.id(),
                inside_block: traversal.kind == TraversalKind::Full,
            };
            let records = self.voxel_records.entry(traversal.voxel).or_default();
            if !records.contains(&record) {
                records.push(record);
            }
        }
        self.generated.insert(conn.id());
    }

    fn remove_connection(&mut self, conn: &Connection, geometry: &dyn GeometrySampler) {
        if !self.generated.remove(&conn.id()) {
            return;
        }
        info!("Removing collision data for {}", conn.id());
        for traversal in geometry.ray_trace(conn) {
            if let Some(records) = self.voxel_records.get_mut(&traversal.voxel) {
                records.retain(|record| record.connection != conn.id());
                if records.is_empty() {
                    self.voxel_records.remove(&traversal.voxel);
                }
            }
        }
    }
}
