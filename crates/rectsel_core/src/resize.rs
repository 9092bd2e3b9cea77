//! Free-mode resize: each edge a handle drives follows the pointer independently.

use log::trace;
use rectsel_geometry::{Axis, HandleId, Point, Rect, Side};

use crate::clamp::{Constraints, normalize};
use crate::session::Resolution;
use crate::translate;

/// Resolve one drag sample for `handle` without an aspect constraint.
///
/// `anchor` is the pointer offset from the handle's anchor point recorded at drag start.
/// The minimum size check runs before the boundary check, so the minimum always wins.
pub fn resolve(
    handle: HandleId,
    pointer: Point,
    anchor: Point,
    rect: Rect,
    constraints: &Constraints,
) -> Resolution {
    if handle.is_center() {
        return translate::resolve(pointer, anchor, rect, constraints);
    }

    let min = constraints.minimum_size();
    let extent = constraints.extent();
    let mut resolved = normalize(rect, constraints);

    for axis in Axis::ALL {
        let Some(side) = handle.side(axis) else {
            continue;
        };
        let target = pointer.along(axis) - anchor.along(axis);
        resolved = resolve_edge(resolved, axis, side, target, min.along(axis), extent.along(axis));
    }

    Resolution {
        rect: resolved,
        anchor,
    }
}

/// Move the edge on `side` of `axis` toward `target`, keeping the opposite edge fixed.
pub(crate) fn resolve_edge(
    rect: Rect,
    axis: Axis,
    side: Side,
    target: f64,
    min_span: f64,
    extent: f64,
) -> Rect {
    let (start, span) = rect.span(axis);
    let end = start + span;
    trace!(
        "resize {:?}/{:?}: target={} delta={}",
        axis,
        side,
        target,
        target - rect.edge(axis, side)
    );

    match side {
        Side::Min => {
            let new_start = if end - target < min_span {
                end - min_span
            } else if target < 0.0 {
                0.0
            } else {
                target
            };
            rect.with_span(axis, new_start, end - new_start)
        }
        Side::Max => {
            let new_end = if target - start < min_span {
                start + min_span
            } else if target > extent {
                extent
            } else {
                target
            };
            rect.with_span(axis, start, new_end - start)
        }
    }
}
