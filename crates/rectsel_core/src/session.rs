use rectsel_geometry::{HandleId, Point, Rect};

use crate::clamp::Constraints;
use crate::{aspect, resize, translate};

/// Phase of a pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragPhase {
    Begin,
    Move,
    End,
    Cancel,
}

/// One pointer sample routed to a handle. `position` is in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    pub handle: HandleId,
    pub position: Point,
    pub phase: DragPhase,
}

impl DragSample {
    pub fn begin(handle: HandleId, position: Point) -> Self {
        Self {
            handle,
            position,
            phase: DragPhase::Begin,
        }
    }

    pub fn moved(handle: HandleId, position: Point) -> Self {
        Self {
            handle,
            position,
            phase: DragPhase::Move,
        }
    }

    pub fn end(handle: HandleId, position: Point) -> Self {
        Self {
            handle,
            position,
            phase: DragPhase::End,
        }
    }

    pub fn cancel(handle: HandleId, position: Point) -> Self {
        Self {
            handle,
            position,
            phase: DragPhase::Cancel,
        }
    }
}

/// Output of a resolver: the rectangle to commit and the anchor for the next sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub rect: Rect,
    pub anchor: Point,
}

/// Transient state of an in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub handle: HandleId,
    /// Pointer offset from the handle's anchor point.
    pub anchor: Point,
}

impl DragSession {
    /// Start a drag on `handle` with the pointer at `pointer`.
    pub fn start(handle: HandleId, pointer: Point, rect: &Rect) -> Self {
        Self {
            handle,
            anchor: pointer.offset_from(handle.anchor_point(rect)),
        }
    }

    /// Route a pointer position to the resolver for this handle and aspect mode.
    pub fn resolve(&self, pointer: Point, rect: Rect, constraints: &Constraints) -> Resolution {
        if self.handle.is_center() {
            return translate::resolve(pointer, self.anchor, rect, constraints);
        }

        match constraints.fixed_ratio() {
            Some(ratio) => {
                aspect::resolve(self.handle, pointer, self.anchor, rect, ratio, constraints)
            }
            None => resize::resolve(self.handle, pointer, self.anchor, rect, constraints),
        }
    }

    /// Adopt the anchor a resolver handed back.
    #[inline]
    pub fn apply(&mut self, resolution: &Resolution) {
        self.anchor = resolution.anchor;
    }
}
