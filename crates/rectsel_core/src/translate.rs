//! Body / center-handle drag: pure translation with anchor correction.

use log::trace;
use rectsel_geometry::{Axis, Point, Rect};

use crate::clamp::{Constraints, normalize};
use crate::session::Resolution;

/// Move the rectangle so its origin follows `pointer - anchor`, one axis at a time.
///
/// An axis that would leave the container is pinned to the boundary instead, and the anchor
/// on that axis is reset to the pointer's current offset inside the pinned rectangle. Moving
/// the pointer back then moves the rectangle right away instead of first eating up the
/// overshoot.
pub fn resolve(pointer: Point, anchor: Point, rect: Rect, constraints: &Constraints) -> Resolution {
    let rect = normalize(rect, constraints);
    let extent = constraints.extent();

    let mut resolved = rect;
    let mut anchor = anchor;
    for axis in Axis::ALL {
        let (start, span) = rect.span(axis);
        let limit = extent.along(axis);
        let target = pointer.along(axis) - anchor.along(axis);

        let (new_start, pinned) = if target < 0.0 {
            (0.0, true)
        } else if target + span > limit {
            (limit - span, true)
        } else {
            (target, false)
        };
        trace!(
            "translate {:?}: delta={} pinned={}",
            axis,
            target - start,
            pinned
        );

        resolved = resolved.with_span(axis, new_start, span);
        if pinned {
            anchor = anchor.with_along(axis, pointer.along(axis) - new_start);
        }
    }

    Resolution {
        rect: resolved,
        anchor,
    }
}
