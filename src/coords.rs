use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::grid::SECTION_SIZE;

/// Position of a voxel in the world (world coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoxelPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Create VoxelPos from a world-space point
    pub fn from_point(point: Vec3) -> Self {
        Self {
            x: point.x.floor() as i32,
            y: point.y.floor() as i32,
            z: point.z.floor() as i32,
        }
    }

    /// Get the section this voxel belongs to
    pub fn to_section(&self) -> SectionPos {
        SectionPos::containing(*self)
    }

    /// World-space corner of this voxel with the smallest coordinates
    pub fn min_corner(&self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    /// Create a new voxel position offset by the given amounts
    pub fn offset(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }
}

/// Position of a section in the world (section coordinates)
///
/// A section is a `SECTION_SIZE`³ cluster of voxels, the granularity used
/// for render batching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl SectionPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Section containing the given voxel
    pub fn containing(voxel: VoxelPos) -> Self {
        let size = SECTION_SIZE as i32;
        Self::new(
            voxel.x.div_euclid(size),
            voxel.y.div_euclid(size),
            voxel.z.div_euclid(size),
        )
    }

    /// Section containing the given world-space point
    pub fn from_point(point: Vec3) -> Self {
        Self::containing(VoxelPos::from_point(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_containing_negative_voxels() {
        assert_eq!(
            SectionPos::containing(VoxelPos::new(-1, 0, 17)),
            SectionPos::new(-1, 0, 1)
        );
        assert_eq!(
            SectionPos::containing(VoxelPos::new(-16, -17, 15)),
            SectionPos::new(-1, -2, 0)
        );
    }

    #[test]
    fn test_voxel_from_point_floors() {
        assert_eq!(
            VoxelPos::from_point(Vec3::new(1.9, -0.1, 0.0)),
            VoxelPos::new(1, -1, 0)
        );
    }
}
