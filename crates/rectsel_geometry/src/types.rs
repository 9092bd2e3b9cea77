#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in container-local coordinates (origin at the top-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point::new(0.0, 0.0);

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinate along `axis`.
    #[inline]
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Copy of this point with the coordinate along `axis` replaced.
    #[inline]
    pub fn with_along(self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::Horizontal => Self { x: value, ..self },
            Axis::Vertical => Self { y: value, ..self },
        }
    }

    #[inline]
    pub fn offset_from(&self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Width/height pair. Used for the container, minimum sizes and rectangle extents.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size::new(0.0, 0.0);

    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    #[inline]
    pub fn with_along(self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::Horizontal => Self {
                width: value,
                ..self
            },
            Axis::Vertical => Self {
                height: value,
                ..self
            },
        }
    }

    /// Componentwise maximum.
    #[inline]
    pub fn max(self, other: Size) -> Size {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Componentwise minimum.
    #[inline]
    pub fn min(self, other: Size) -> Size {
        Size::new(self.width.min(other.width), self.height.min(other.height))
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}

/// The selection rectangle, stored as origin plus extent like the control reports it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Construct from the four edge positions.
    #[inline]
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            top,
            left,
            width: right - left,
            height: bottom - top,
        }
    }

    #[inline]
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.y, origin.x, size.width, size.height)
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right() && p.y >= self.top && p.y <= self.bottom()
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.origin().is_finite() && self.size().is_finite()
    }

    /// `(start, span)` of the rectangle projected onto `axis`.
    #[inline]
    pub fn span(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::Horizontal => (self.left, self.width),
            Axis::Vertical => (self.top, self.height),
        }
    }

    /// Replace the projection onto `axis`, leaving the other axis untouched.
    #[inline]
    pub fn with_span(self, axis: Axis, start: f64, span: f64) -> Self {
        match axis {
            Axis::Horizontal => Self {
                left: start,
                width: span,
                ..self
            },
            Axis::Vertical => Self {
                top: start,
                height: span,
                ..self
            },
        }
    }

    /// Position of the edge on `side` of `axis`.
    #[inline]
    pub fn edge(&self, axis: Axis, side: Side) -> f64 {
        let (start, span) = self.span(axis);
        match side {
            Side::Min => start,
            Side::Max => start + span,
        }
    }

    /// True if the rectangle lies fully inside a container of `container` size.
    pub fn is_within(&self, container: Size) -> bool {
        self.top >= 0.0
            && self.left >= 0.0
            && self.bottom() <= container.height
            && self.right() <= container.width
    }
}

/// One of the two coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];
}

/// Which edge of an axis a handle drives: `Min` is left/top, `Max` is right/bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Min,
    Max,
}

impl Side {
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Min => Side::Max,
            Side::Max => Side::Min,
        }
    }
}

/// Aspect constraint. The ratio is width / height: above 1 is wider than tall,
/// below 1 is taller than wide.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AspectMode {
    #[default]
    Free,
    Fixed(f64),
}

impl AspectMode {
    /// Ratio of a fixed mode, `None` when free.
    #[inline]
    pub fn ratio(&self) -> Option<f64> {
        match self {
            AspectMode::Free => None,
            AspectMode::Fixed(r) => Some(*r),
        }
    }

    #[inline]
    pub fn is_fixed(&self) -> bool {
        matches!(self, AspectMode::Fixed(_))
    }

    /// A fixed ratio must be positive and finite; free is always valid.
    pub fn is_valid(&self) -> bool {
        match self {
            AspectMode::Free => true,
            AspectMode::Fixed(r) => r.is_finite() && *r > 0.0,
        }
    }
}
