//! Run-length partitioning of render samples into per-section segments

use crate::coords::SectionPos;
use crate::geometry::RenderSample;
use crate::wire::ConnectionId;

use super::render::RenderSegment;

/// Group an ordered sample sequence into minimal contiguous per-section runs.
///
/// A run stays open while consecutive samples share a section; a section
/// change closes it, emitting a segment spanning the run's first and last
/// sample indices (inclusive), and sequence end flushes the final run. The
/// emitted segments are non-overlapping, cover the whole index range with no
/// gaps, and are each homogeneous in section. Pure and deterministic, so
/// removal re-derives exactly the segments insertion produced.
pub fn partition_sections(
    conn: ConnectionId,
    samples: impl IntoIterator<Item = RenderSample>,
) -> Vec<(SectionPos, RenderSegment)> {
    let mut out = Vec::new();
    let mut open: Option<(SectionPos, u32)> = None;
    let mut last_index = 0;
    for sample in samples {
        match open {
            Some((section, run_start)) if section != sample.section => {
                out.push((
                    section,
                    RenderSegment {
                        connection: conn,
                        first_sample: run_start,
                        last_sample: last_index,
                    },
                ));
                open = Some((sample.section, sample.index));
            }
            None => open = Some((sample.section, sample.index)),
            Some(_) => {}
        }
        last_index = sample.index;
    }
    if let Some((section, run_start)) = open {
        out.push((
            section,
            RenderSegment {
                connection: conn,
                first_sample: run_start,
                last_sample: last_index,
            },
        ));
    }
    out
}
