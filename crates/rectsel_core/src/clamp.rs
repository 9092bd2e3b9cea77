//! Boundary and minimum-size clamping.
//!
//! Everything here is a pure function of its arguments. Every resolver funnels its input
//! through [`normalize`] and its candidate through these helpers before committing.

use rectsel_geometry::{AspectMode, Point, Rect, Size};
use rectsel_settings::HandleConfigs;

/// Tolerance used when deciding whether a size already satisfies a ratio.
pub const ASPECT_EPSILON: f64 = 1e-6;

/// Everything the clamps need to know about the current configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub container: Size,
    pub aspect: AspectMode,
    /// Caller override; combined with the handle-derived default.
    pub minimum: Option<Size>,
    pub handles: HandleConfigs,
}

impl Constraints {
    pub fn new(container: Size) -> Self {
        Self {
            container,
            aspect: AspectMode::Free,
            minimum: None,
            handles: HandleConfigs::default(),
        }
    }

    /// Fixed ratio, ignoring invalid ratios.
    #[inline]
    pub fn fixed_ratio(&self) -> Option<f64> {
        self.aspect.ratio().filter(|_| self.aspect.is_valid())
    }

    /// Container extent with garbage dimensions treated as zero.
    #[inline]
    pub fn extent(&self) -> Size {
        sanitize_size(self.container)
    }

    #[inline]
    pub fn minimum_size(&self) -> Size {
        effective_minimum_size(self)
    }
}

#[inline]
fn sanitize_extent(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

#[inline]
fn sanitize_size(size: Size) -> Size {
    Size::new(sanitize_extent(size.width), sanitize_extent(size.height))
}

/// `v` limited to `[lo, hi]`; `hi` wins if the bounds cross. Never panics on NaN.
#[inline]
pub(crate) fn clamp_between(v: f64, lo: f64, hi: f64) -> f64 {
    v.max(lo).min(hi)
}

/// Minimum size implied by the handle geometry.
///
/// Free mode keeps room for two half corner handles plus the edge handle between them. In
/// fixed mode the edge handles are hidden, so only the corners count, and the floor is
/// stretched along the longer side so it satisfies the ratio itself.
pub fn default_minimum_size(handles: &HandleConfigs, aspect: AspectMode) -> Size {
    let vertex = handles.vertex.effective_size();
    match aspect.ratio().filter(|_| aspect.is_valid()) {
        None => {
            let s = vertex + handles.edge.effective_size();
            Size::new(s, s)
        }
        Some(r) if r >= 1.0 => Size::new(vertex * r, vertex),
        Some(r) => Size::new(vertex, vertex / r),
    }
}

/// Effective minimum: componentwise max of the default and the caller override, made
/// ratio-consistent in fixed mode and never larger than the container.
pub fn effective_minimum_size(constraints: &Constraints) -> Size {
    let mut min = default_minimum_size(&constraints.handles, constraints.aspect);
    if let Some(o) = constraints.minimum {
        min = min.max(sanitize_size(o));
    }

    let container = constraints.extent();
    match constraints.fixed_ratio() {
        None => min.min(container),
        Some(r) => {
            let width = min.width.max(min.height * r);
            let min = Size::new(width, width / r);
            let scale = scale_to_fit(min, container);
            Size::new(min.width * scale, min.height * scale)
        }
    }
}

fn scale_to_fit(size: Size, bounds: Size) -> f64 {
    let mut scale: f64 = 1.0;
    if size.width > bounds.width {
        scale = scale.min(bounds.width / size.width);
    }
    if size.height > bounds.height {
        scale = scale.min(bounds.height / size.height);
    }
    scale
}

/// Shrink the longer dimension so `width / height == ratio`. Never grows either side.
pub fn fit_aspect(size: Size, ratio: f64) -> Size {
    let ideal_height = size.width / ratio;
    if ideal_height < size.height - ASPECT_EPSILON {
        Size::new(size.width, ideal_height)
    } else if ideal_height > size.height + ASPECT_EPSILON {
        Size::new(size.height * ratio, size.height)
    } else {
        size
    }
}

/// Truncate to the container extent, then shift inside it.
pub fn clamp_within_container(rect: Rect, container: Size) -> Rect {
    let container = sanitize_size(container);
    let width = clamp_between(rect.width, 0.0, container.width);
    let height = clamp_between(rect.height, 0.0, container.height);
    let left = clamp_between(rect.left, 0.0, container.width - width);
    let top = clamp_between(rect.top, 0.0, container.height - height);
    Rect::new(top, left, width, height)
}

/// Bring an arbitrary rectangle into a valid state: at least the minimum size, on ratio in
/// fixed mode, inside the container. The origin moves only as far as containment requires.
///
/// Valid rectangles come back unchanged, so `normalize(normalize(r)) == normalize(r)`.
pub fn normalize(rect: Rect, constraints: &Constraints) -> Rect {
    let min = effective_minimum_size(constraints);
    let container = constraints.extent();
    let ratio = constraints.fixed_ratio();

    let mut size = rect.size().max(min);
    if let Some(r) = ratio {
        size = fit_aspect(size, r);
    }
    size = size.min(container);
    if let Some(r) = ratio {
        // Truncation may have broken the ratio again.
        size = fit_aspect(size, r);
    }

    clamp_within_container(Rect::from_origin_size(rect.origin(), size), container)
}

/// Fit `rect` to a (new) fixed ratio around its centre, then normalize.
pub fn refit_to_aspect(rect: Rect, constraints: &Constraints) -> Rect {
    let Some(r) = constraints.fixed_ratio() else {
        return normalize(rect, constraints);
    };

    let center = rect.center();
    let size = fit_aspect(rect.size(), r);
    let origin = Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0);
    normalize(Rect::from_origin_size(origin, size), constraints)
}
