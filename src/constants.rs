// Wire Grid Constants - SINGLE SOURCE OF TRUTH
//
// All tuning constants for the wire spatial indices live here.
// Do NOT define constants anywhere else in the crate.

/// Grid dimensions
pub mod grid {
    /// Edge length of one section, in voxels. Many voxels map to one section.
    pub const SECTION_SIZE: u32 = 16;
}

/// Wire geometry sampling
pub mod wire {
    /// Number of curve segments sampled per wire for rendering; the sample
    /// sequence carries `RENDER_POINTS_PER_WIRE + 1` points (both endpoints
    /// included).
    pub const RENDER_POINTS_PER_WIRE: u32 = 16;

    /// Subdivisions of each render segment used when walking the curve
    /// through the voxel grid for collision traversals.
    pub const WALK_SUBDIVISIONS: u32 = 8;

    /// A voxel traversal whose chord is shorter than this is a boundary
    /// clip, not an interior crossing.
    pub const GRAZE_EPSILON: f32 = 0.05;

    /// Default wire length as a multiple of the straight endpoint distance.
    pub const DEFAULT_SLACK: f64 = 1.05;
}
