//! Hanging-wire curve shapes and the sampler built on them
//!
//! A wire between two anchors hangs as a catenary `y = a cosh((x - b)/a) + c`
//! over its horizontal span. The solve works in f64 for stability and falls
//! back to straight interpolation for taut or vertical wires.

use glam::{DVec3, Vec3};
use log::warn;

use crate::constants::wire::{
    DEFAULT_SLACK, GRAZE_EPSILON, RENDER_POINTS_PER_WIRE, WALK_SUBDIVISIONS,
};
use crate::coords::{SectionPos, VoxelPos};
use crate::error::{catenary_solve_error, degenerate_wire, WireGridResult};
use crate::wire::Connection;

use super::{GeometrySampler, RenderSample, TraversalKind, VoxelTraversal};

/// Solved hanging-curve shape between two fixed points
#[derive(Debug, Clone)]
pub struct CatenaryShape {
    from: DVec3,
    to: DVec3,
    /// Unit direction of the horizontal span; zero for vertical wires
    horizontal_dir: DVec3,
    horizontal_span: f64,
    form: CurveForm,
}

#[derive(Debug, Clone, Copy)]
enum CurveForm {
    /// y(x) = a cosh((x - b)/a) + c over the horizontal span
    Catenary { a: f64, b: f64, c: f64 },
    /// Taut and vertical wires degrade to straight interpolation
    Straight,
}

impl CatenaryShape {
    /// Solve the hanging shape for a wire of length `slack ×` the straight
    /// endpoint distance.
    pub fn solve(from: Vec3, to: Vec3, slack: f64) -> WireGridResult<Self> {
        let from = from.as_dvec3();
        let to = to.as_dvec3();
        if !from.is_finite() || !to.is_finite() {
            return Err(degenerate_wire("non-finite wire endpoint"));
        }
        let delta = to - from;
        let straight = delta.length();
        if straight == 0.0 {
            return Err(degenerate_wire("zero-length wire"));
        }
        if !slack.is_finite() || slack < 1.0 {
            return Err(catenary_solve_error(
                straight,
                format!("slack {} must be at least 1", slack),
            ));
        }

        let horizontal = DVec3::new(delta.x, 0.0, delta.z);
        let d = horizontal.length();
        let mut shape = Self {
            from,
            to,
            horizontal_dir: if d > 0.0 { horizontal / d } else { DVec3::ZERO },
            horizontal_span: d,
            form: CurveForm::Straight,
        };
        if d < 1e-6 {
            // Vertical drop, no horizontal span to hang over
            return Ok(shape);
        }

        let h = delta.y;
        let length = straight * slack;
        let excess = length * length - h * h;
        if excess <= 0.0 {
            return Ok(shape);
        }
        let k = excess.sqrt() / d;
        if k <= 1.0 + 1e-9 {
            // Wire is taut, sag is below numeric noise
            return Ok(shape);
        }

        let u = solve_sinh_ratio(k).ok_or_else(|| {
            catenary_solve_error(straight, format!("sinh(u)/u = {} did not converge", k))
        })?;
        let a = d / (2.0 * u);
        let b = d * 0.5 - a * (h / (2.0 * a * u.sinh())).asinh();
        let c = from.y - a * (b / a).cosh();
        shape.form = CurveForm::Catenary { a, b, c };
        Ok(shape)
    }

    /// Straight interpolation between the endpoints, used as the fallback
    /// shape when no catenary exists.
    pub fn straight(from: Vec3, to: Vec3) -> Self {
        let from = from.as_dvec3();
        let to = to.as_dvec3();
        let horizontal = DVec3::new(to.x - from.x, 0.0, to.z - from.z);
        let d = horizontal.length();
        Self {
            from,
            to,
            horizontal_dir: if d > 0.0 { horizontal / d } else { DVec3::ZERO },
            horizontal_span: d,
            form: CurveForm::Straight,
        }
    }

    /// Point on the curve at parameter `t` in [0, 1]
    pub fn point_at(&self, t: f64) -> Vec3 {
        match self.form {
            CurveForm::Straight => self.from.lerp(self.to, t).as_vec3(),
            CurveForm::Catenary { a, b, c } => {
                let x = t * self.horizontal_span;
                let base = self.from + self.horizontal_dir * x;
                let y = a * ((x - b) / a).cosh() + c;
                DVec3::new(base.x, y, base.z).as_vec3()
            }
        }
    }
}

/// Solve `sinh(u) / u = k` for `u > 0` by bisection; `k > 1` required.
fn solve_sinh_ratio(k: f64) -> Option<f64> {
    let f = |u: f64| u.sinh() / u - k;
    let mut lo = 1e-9;
    let mut hi = 1.0;
    // sinh(u)/u is increasing, so grow hi until the root is bracketed
    while f(hi) < 0.0 {
        hi *= 2.0;
        if hi > 700.0 {
            // sinh overflows past ~710
            return None;
        }
    }
    for _ in 0..100 {
        let mid = 0.5 * (lo + hi);
        if f(mid) < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Some(0.5 * (lo + hi))
}

/// Geometry sampler for catenary-hanging wires
#[derive(Debug, Clone)]
pub struct CatenarySampler {
    slack: f64,
    render_points: u32,
}

impl CatenarySampler {
    pub fn new(slack: f64) -> WireGridResult<Self> {
        if !slack.is_finite() || slack < 1.0 {
            return Err(degenerate_wire(format!(
                "slack {} must be a finite value of at least 1",
                slack
            )));
        }
        Ok(Self {
            slack,
            render_points: RENDER_POINTS_PER_WIRE,
        })
    }

    fn shape_for(&self, conn: &Connection) -> CatenaryShape {
        let from = conn.end_a().position();
        let to = conn.end_b().position();
        match CatenaryShape::solve(from, to, self.slack) {
            Ok(shape) => shape,
            Err(err) => {
                warn!("{}: {}, sampling straight segments instead", conn.id(), err);
                CatenaryShape::straight(from, to)
            }
        }
    }
}

impl Default for CatenarySampler {
    fn default() -> Self {
        Self {
            slack: DEFAULT_SLACK,
            render_points: RENDER_POINTS_PER_WIRE,
        }
    }
}

impl GeometrySampler for CatenarySampler {
    fn ray_trace(&self, conn: &Connection) -> Vec<VoxelTraversal> {
        let shape = self.shape_for(conn);
        let steps = self.render_points * WALK_SUBDIVISIONS;
        let points: Vec<Vec3> = (0..=steps)
            .map(|i| shape.point_at(f64::from(i) / f64::from(steps)))
            .collect();
        trace_polyline(&points)
    }

    fn sample_for_render(&self, conn: &Connection) -> Vec<RenderSample> {
        let shape = self.shape_for(conn);
        (0..=self.render_points)
            .map(|index| {
                let point = shape.point_at(f64::from(index) / f64::from(self.render_points));
                RenderSample {
                    index,
                    point,
                    section: SectionPos::from_point(point),
                }
            })
            .collect()
    }
}

/// Walk a polyline through the voxel grid, emitting one traversal per
/// contiguous visit with exact boundary crossing points.
fn trace_polyline(points: &[Vec3]) -> Vec<VoxelTraversal> {
    let mut out = Vec::new();
    let Some(&first) = points.first() else {
        return out;
    };
    let mut voxel = VoxelPos::from_point(first);
    let mut entry = first;
    let mut cursor = first;
    for &target in &points[1..] {
        while let Some((crossing, next_voxel)) = clip_to_voxel(cursor, target, voxel) {
            out.push(make_traversal(voxel, entry, crossing));
            voxel = next_voxel;
            entry = crossing;
            cursor = crossing;
        }
        cursor = target;
    }
    out.push(make_traversal(voxel, entry, cursor));
    out
}

/// First face crossing of the segment `p → q` out of `voxel`, or None if the
/// segment ends inside it.
fn clip_to_voxel(p: Vec3, q: Vec3, voxel: VoxelPos) -> Option<(Vec3, VoxelPos)> {
    let dir = q - p;
    let lo = voxel.min_corner();
    let hi = lo + Vec3::ONE;

    let mut t_min = f32::INFINITY;
    let mut step = (0, 0, 0);
    for axis in 0..3 {
        let (d, p_a, lo_a, hi_a) = match axis {
            0 => (dir.x, p.x, lo.x, hi.x),
            1 => (dir.y, p.y, lo.y, hi.y),
            _ => (dir.z, p.z, lo.z, hi.z),
        };
        let (t, s) = if d > 0.0 {
            ((hi_a - p_a) / d, 1)
        } else if d < 0.0 {
            ((lo_a - p_a) / d, -1)
        } else {
            continue;
        };
        if t < t_min {
            t_min = t;
            step = match axis {
                0 => (s, 0, 0),
                1 => (0, s, 0),
                _ => (0, 0, s),
            };
        }
    }
    if t_min > 1.0 {
        return None;
    }
    let crossing = p + dir * t_min.max(0.0);
    Some((crossing, voxel.offset(step.0, step.1, step.2)))
}

fn make_traversal(voxel: VoxelPos, entry: Vec3, exit: Vec3) -> VoxelTraversal {
    let kind = if entry.distance(exit) < GRAZE_EPSILON {
        TraversalKind::Partial
    } else {
        TraversalKind::Full
    };
    VoxelTraversal {
        voxel,
        entry,
        exit,
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{ConnectionId, WireEnd};

    fn wire(ax: i32, ay: i32, az: i32, bx: i32, by: i32, bz: i32) -> Connection {
        Connection::new(
            ConnectionId(7),
            WireEnd::centered(VoxelPos::new(ax, ay, az)),
            WireEnd::centered(VoxelPos::new(bx, by, bz)),
        )
        .unwrap()
    }

    #[test]
    fn test_solve_recovers_endpoints() {
        let from = Vec3::new(0.5, 10.5, 0.5);
        let to = Vec3::new(8.5, 12.5, 0.5);
        let shape = CatenaryShape::solve(from, to, 1.2).unwrap();
        assert!(shape.point_at(0.0).distance(from) < 1e-3);
        assert!(shape.point_at(1.0).distance(to) < 1e-3);
    }

    #[test]
    fn test_wire_sags_below_chord() {
        let from = Vec3::new(0.5, 10.5, 0.5);
        let to = Vec3::new(8.5, 10.5, 0.5);
        let shape = CatenaryShape::solve(from, to, 1.2).unwrap();
        let mid = shape.point_at(0.5);
        assert!(mid.y < 10.5 - 0.5, "midpoint {} should sag", mid.y);
    }

    #[test]
    fn test_vertical_wire_is_straight() {
        let from = Vec3::new(0.5, 0.5, 0.5);
        let to = Vec3::new(0.5, 9.5, 0.5);
        let shape = CatenaryShape::solve(from, to, 1.1).unwrap();
        let mid = shape.point_at(0.5);
        assert!(mid.distance(Vec3::new(0.5, 5.0, 0.5)) < 1e-4);
    }

    #[test]
    fn test_invalid_slack_rejected() {
        assert!(CatenarySampler::new(0.9).is_err());
        assert!(CatenarySampler::new(f64::NAN).is_err());
        let from = Vec3::new(0.0, 0.0, 0.0);
        let to = Vec3::new(1.0, 0.0, 0.0);
        assert!(CatenaryShape::solve(from, to, 0.5).is_err());
    }

    #[test]
    fn test_ray_trace_is_deterministic() {
        let sampler = CatenarySampler::default();
        let conn = wire(0, 8, 0, 6, 8, 4);
        assert_eq!(sampler.ray_trace(&conn), sampler.ray_trace(&conn));
        assert_eq!(
            sampler.sample_for_render(&conn),
            sampler.sample_for_render(&conn)
        );
    }

    #[test]
    fn test_ray_trace_spans_endpoint_voxels() {
        let sampler = CatenarySampler::default();
        let conn = wire(0, 8, 0, 6, 8, 0);
        let traversals = sampler.ray_trace(&conn);
        assert_eq!(traversals.first().unwrap().voxel.x, 0);
        assert_eq!(traversals.last().unwrap().voxel.x, 6);
        // Entry of each traversal continues from the previous exit
        for pair in traversals.windows(2) {
            assert!(pair[0].exit.distance(pair[1].entry) < 1e-4);
        }
    }

    #[test]
    fn test_render_samples_ordered_and_contiguous() {
        let sampler = CatenarySampler::default();
        let conn = wire(0, 8, 0, 3, 8, 3);
        let samples = sampler.sample_for_render(&conn);
        assert_eq!(samples.len() as u32, RENDER_POINTS_PER_WIRE + 1);
        for (i, sample) in samples.iter().enumerate() {
            assert_eq!(sample.index, i as u32);
        }
    }
}
