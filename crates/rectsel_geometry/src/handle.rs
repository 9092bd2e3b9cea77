use crate::{AspectMode, Axis, Point, Rect, Side};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Draggable control points of the selection.
///
/// `Center` also stands for a drag started on the selection body; both translate the
/// rectangle without resizing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HandleId {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

/// Handle classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// Corner handle, drives two edges.
    Vertex,
    /// Edge midpoint handle, drives one edge.
    Edge,
    /// Moves the whole rectangle.
    Center,
}

impl HandleId {
    pub const ALL: [HandleId; 9] = [
        HandleId::TopLeft,
        HandleId::TopRight,
        HandleId::BottomLeft,
        HandleId::BottomRight,
        HandleId::Top,
        HandleId::Bottom,
        HandleId::Left,
        HandleId::Right,
        HandleId::Center,
    ];

    pub const VERTICES: [HandleId; 4] = [
        HandleId::TopLeft,
        HandleId::TopRight,
        HandleId::BottomLeft,
        HandleId::BottomRight,
    ];

    pub const EDGES: [HandleId; 4] = [
        HandleId::Top,
        HandleId::Bottom,
        HandleId::Left,
        HandleId::Right,
    ];

    pub fn kind(&self) -> HandleKind {
        match self {
            Self::TopLeft | Self::TopRight | Self::BottomLeft | Self::BottomRight => {
                HandleKind::Vertex
            }
            Self::Top | Self::Bottom | Self::Left | Self::Right => HandleKind::Edge,
            Self::Center => HandleKind::Center,
        }
    }

    #[inline]
    pub fn is_vertex(&self) -> bool {
        self.kind() == HandleKind::Vertex
    }

    #[inline]
    pub fn is_edge(&self) -> bool {
        self.kind() == HandleKind::Edge
    }

    #[inline]
    pub fn is_center(&self) -> bool {
        self.kind() == HandleKind::Center
    }

    /// Axis projection table: which edge this handle drives on the horizontal and vertical
    /// axis. `None` leaves that axis alone.
    pub fn axis_projection(&self) -> (Option<Side>, Option<Side>) {
        match self {
            Self::TopLeft => (Some(Side::Min), Some(Side::Min)),
            Self::TopRight => (Some(Side::Max), Some(Side::Min)),
            Self::BottomLeft => (Some(Side::Min), Some(Side::Max)),
            Self::BottomRight => (Some(Side::Max), Some(Side::Max)),
            Self::Top => (None, Some(Side::Min)),
            Self::Bottom => (None, Some(Side::Max)),
            Self::Left => (Some(Side::Min), None),
            Self::Right => (Some(Side::Max), None),
            Self::Center => (None, None),
        }
    }

    /// Edge driven on `axis`, if any.
    #[inline]
    pub fn side(&self, axis: Axis) -> Option<Side> {
        let (horizontal, vertical) = self.axis_projection();
        match axis {
            Axis::Horizontal => horizontal,
            Axis::Vertical => vertical,
        }
    }

    /// Whether the handle can be dragged under `aspect`.
    ///
    /// Edge handles cannot keep a fixed ratio, so they are hidden in fixed mode.
    pub fn is_available(&self, aspect: AspectMode) -> bool {
        !(aspect.is_fixed() && self.is_edge())
    }

    /// The point of `rect` this handle sits on. Drag anchors are measured from it.
    ///
    /// Corners and edge midpoints sit on the outline; `Center` reports the rectangle origin
    /// because translation tracks the pointer offset from the top-left corner.
    pub fn anchor_point(&self, rect: &Rect) -> Point {
        if self.is_center() {
            return rect.origin();
        }

        let mid = rect.center();
        let along = |axis: Axis, fallback: f64| {
            self.side(axis)
                .map_or(fallback, |side| rect.edge(axis, side))
        };
        Point::new(along(Axis::Horizontal, mid.x), along(Axis::Vertical, mid.y))
    }
}

/// Handles the user may drag under `aspect`, in display order.
pub fn available_handles(aspect: AspectMode) -> Vec<HandleId> {
    HandleId::ALL
        .into_iter()
        .filter(|h| h.is_available(aspect))
        .collect()
}

/// Visual centre of each handle, for host layout. Mirrors [`HandleId::ALL`] order.
pub fn handle_positions(rect: &Rect) -> [(HandleId, Point); 9] {
    HandleId::ALL.map(|h| {
        let p = match h {
            HandleId::Center => rect.center(),
            _ => h.anchor_point(rect),
        };
        (h, p)
    })
}
