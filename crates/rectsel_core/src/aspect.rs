//! Fixed-aspect resize from a corner handle.
//!
//! The corner's two adjacent edges follow the pointer while the opposite edges stay put.
//! The candidate size is fitted to the ratio, clamped to `[minimum, room toward the
//! container boundary]`, then fitted again: clamping one axis can break the ratio, and the
//! second pass is what keeps the result both inside the container and on ratio.

use log::trace;
use rectsel_geometry::{Axis, HandleId, Point, Rect, Side, Size};

use crate::clamp::{Constraints, clamp_between, fit_aspect, normalize};
use crate::session::Resolution;

/// Resolve one drag sample for a corner under a fixed `ratio` (width / height).
///
/// Non-corner handles leave the rectangle as it is.
pub fn resolve(
    handle: HandleId,
    pointer: Point,
    anchor: Point,
    rect: Rect,
    ratio: f64,
    constraints: &Constraints,
) -> Resolution {
    let rect = normalize(rect, constraints);
    let (Some(h_side), Some(v_side)) = handle.axis_projection() else {
        return Resolution { rect, anchor };
    };

    let target = pointer.offset_from(anchor);
    let min = constraints.minimum_size();
    let extent = constraints.extent();

    let candidate = Size::new(
        candidate_span(&rect, Axis::Horizontal, h_side, target.x),
        candidate_span(&rect, Axis::Vertical, v_side, target.y),
    );
    let adjusted = fit_aspect(candidate, ratio);

    let max = Size::new(
        room(&rect, Axis::Horizontal, h_side, extent.width),
        room(&rect, Axis::Vertical, v_side, extent.height),
    );
    let clamped = Size::new(
        clamp_between(adjusted.width, min.width, max.width),
        clamp_between(adjusted.height, min.height, max.height),
    );
    let size = fit_aspect(clamped, ratio);

    trace!(
        "aspect {:?}: candidate={:?} adjusted={:?} clamped={:?} final={:?}",
        handle, candidate, adjusted, clamped, size
    );

    let resolved = place(&rect, Axis::Horizontal, h_side, size.width);
    let resolved = place(&resolved, Axis::Vertical, v_side, size.height);
    Resolution {
        rect: resolved,
        anchor,
    }
}

/// Span from the fixed opposite edge to `target`. Negative when the pointer crossed over.
fn candidate_span(rect: &Rect, axis: Axis, side: Side, target: f64) -> f64 {
    let fixed = rect.edge(axis, side.opposite());
    match side {
        Side::Min => fixed - target,
        Side::Max => target - fixed,
    }
}

/// Largest span available between the fixed opposite edge and the container boundary.
fn room(rect: &Rect, axis: Axis, side: Side, extent: f64) -> f64 {
    let fixed = rect.edge(axis, side.opposite());
    match side {
        Side::Min => fixed,
        Side::Max => extent - fixed,
    }
}

/// Re-derive the moving edge so the opposite edge stays where it was.
fn place(rect: &Rect, axis: Axis, side: Side, span: f64) -> Rect {
    let fixed = rect.edge(axis, side.opposite());
    match side {
        Side::Min => rect.with_span(axis, fixed - span, span),
        Side::Max => rect.with_span(axis, fixed, span),
    }
}
