//! Client-mode render segment index
//!
//! Maps each section to the contiguous wire-sample runs inside it, the
//! granularity the render-batch builder works at. Populated only on the
//! client.

use log::info;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::coords::SectionPos;
use crate::geometry::GeometrySampler;
use crate::wire::{Connection, ConnectionId};

use super::partition::partition_sections;
use super::WireIndex;

/// One contiguous run of a wire's render samples within a single section.
/// Sample bounds are inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSegment {
    pub connection: ConnectionId,
    pub first_sample: u32,
    pub last_sample: u32,
}

/// Client-mode index: section → render segments
pub struct RenderSegmentIndex {
    section_segments: FxHashMap<SectionPos, Vec<RenderSegment>>,
    /// Connections whose segments are currently present
    generated: FxHashSet<ConnectionId>,
}

impl RenderSegmentIndex {
    pub fn new() -> Self {
        Self {
            section_segments: FxHashMap::default(),
            generated: FxHashSet::default(),
        }
    }

    /// Snapshot of the wire segments in `section`, or None if the section
    /// has never been populated. The returned list is an independent copy:
    /// a batched render pass can hold it across later mutations.
    pub fn wires_in(&self, section: SectionPos) -> Option<Vec<RenderSegment>> {
        self.section_segments.get(&section).cloned()
    }
}

impl Default for RenderSegmentIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl WireIndex for RenderSegmentIndex {
    fn add_connection(&mut self, conn: &Connection, geometry: &dyn GeometrySampler) {
        if conn.is_internal() || self.generated.contains(&conn.id()) {
            return;
        }
        info!("Adding render segments for {}", conn.id());
        for (section, segment) in
            partition_sections(conn.id(), geometry.sample_for_render(conn))
        {
            self.section_segments.entry(section).or_default().push(segment);
        }
        self.generated.insert(conn.id());
    }

    fn remove_connection(&mut self, conn: &Connection, geometry: &dyn GeometrySampler) {
        if !self.generated.remove(&conn.id()) {
            return;
        }
        info!("Removing render segments for {}", conn.id());
        for (section, segment) in
            partition_sections(conn.id(), geometry.sample_for_render(conn))
        {
            if let Some(segments) = self.section_segments.get_mut(&section) {
                if let Some(found) = segments.iter().position(|s| *s == segment) {
                    segments.remove(found);
                }
                if segments.is_empty() {
                    self.section_segments.remove(&section);
                }
            }
        }
    }
}
