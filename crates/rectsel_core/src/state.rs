use rectsel_geometry::{Rect, Size};

/// The single source of truth for the selection geometry.
///
/// `commit` stores whatever it is given; keeping the rectangle valid is the resolvers' job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleState {
    rect: Rect,
    container: Size,
}

impl RectangleState {
    pub fn new(rect: Rect, container: Size) -> Self {
        Self { rect, container }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn container(&self) -> Size {
        self.container
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.rect.top
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.rect.left
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.rect.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.rect.height
    }

    /// Replace the rectangle verbatim. Returns true if it changed.
    pub fn commit(&mut self, rect: Rect) -> bool {
        let changed = self.rect != rect;
        self.rect = rect;
        changed
    }

    /// Replace the container. The rectangle is re-clamped by the next mutation.
    pub fn set_container(&mut self, container: Size) {
        self.container = container;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_stores_verbatim() {
        let mut s = RectangleState::new(Rect::new(0.0, 0.0, 10.0, 10.0), Size::new(100.0, 100.0));

        // Out of bounds on purpose: the state does not validate.
        let wild = Rect::new(-5.0, 90.0, 50.0, 10.0);
        assert!(s.commit(wild));
        assert_eq!(s.rect(), wild);
        assert_eq!(s.top(), -5.0);
        assert_eq!(s.left(), 90.0);

        assert!(!s.commit(wild));
    }

    #[test]
    fn container_change_keeps_rect() {
        let rect = Rect::new(10.0, 10.0, 80.0, 80.0);
        let mut s = RectangleState::new(rect, Size::new(100.0, 100.0));
        s.set_container(Size::new(50.0, 50.0));
        assert_eq!(s.container(), Size::new(50.0, 50.0));
        assert_eq!(s.rect(), rect);
        assert_eq!((s.width(), s.height()), (80.0, 80.0));
    }
}
