//! Host-facing selector: the selection model plus its listeners.

use log::warn;
use rectsel_geometry::{AspectMode, HandleId, Point, Rect, Size, available_handles};
use rectsel_settings::{HandleConfigs, SelectorSettings};

use crate::error::SelectorError;
use crate::notifier::{ListenerId, Notifier, SelectionListener};
use crate::selection::{Action, Effect, Model};
use crate::session::DragSample;

/// A selection rectangle inside a fixed-size container.
///
/// Feed it pointer samples with [`handle_sample`](Self::handle_sample); it keeps the
/// rectangle inside the container, above the minimum size and on ratio, and notifies
/// subscribed listeners about every change.
#[derive(Debug)]
pub struct RectangleSelector {
    model: Model,
    notifier: Notifier,
}

impl RectangleSelector {
    /// Selector covering the whole container with default settings.
    pub fn new(container: Size) -> Result<Self, SelectorError> {
        Self::with_settings(container, &SelectorSettings::default())
    }

    pub fn with_settings(
        container: Size,
        settings: &SelectorSettings,
    ) -> Result<Self, SelectorError> {
        validate_container(container)?;
        Ok(Self {
            model: Model::with_settings(container, settings),
            notifier: Notifier::new(),
        })
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn rectangle(&self) -> Rect {
        self.model.rect()
    }

    /// Replace the rectangle, normalized into the container. Drag clamps do not apply.
    pub fn set_rectangle(&mut self, rect: Rect) -> Result<(), SelectorError> {
        if !rect.is_finite() {
            return Err(SelectorError::InvalidRectangle(rect));
        }
        self.apply(Action::SetRectangle(rect));
        Ok(())
    }

    pub fn aspect_mode(&self) -> AspectMode {
        self.model.aspect_mode()
    }

    /// Switch between free and fixed aspect. The current rectangle is refitted around its
    /// centre when the ratio changes.
    pub fn set_aspect_mode(&mut self, mode: AspectMode) -> Result<(), SelectorError> {
        if let AspectMode::Fixed(ratio) = mode
            && !mode.is_valid()
        {
            warn!("rejecting aspect ratio {ratio}");
            return Err(SelectorError::InvalidAspectRatio(ratio));
        }
        self.apply(Action::SetAspectMode(mode));
        Ok(())
    }

    pub fn minimum_size(&self) -> Option<Size> {
        self.model.minimum_size()
    }

    /// Negative or non-finite components count as zero.
    pub fn set_minimum_size(&mut self, minimum: Option<Size>) {
        self.apply(Action::SetMinimumSize(minimum));
    }

    pub fn effective_minimum_size(&self) -> Size {
        self.model.effective_minimum_size()
    }

    pub fn handles(&self) -> &HandleConfigs {
        self.model.handles()
    }

    pub fn set_handles(&mut self, handles: HandleConfigs) {
        self.apply(Action::SetHandles(handles));
    }

    pub fn container(&self) -> Size {
        self.model.container()
    }

    pub fn set_container(&mut self, container: Size) -> Result<(), SelectorError> {
        validate_container(container)?;
        self.apply(Action::SetContainer(container));
        Ok(())
    }

    pub fn is_enabled(&self) -> bool {
        self.model.is_enabled()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.apply(Action::SetEnabled(enabled));
    }

    /// Process one pointer sample. Returns false if it was ignored.
    pub fn handle_sample(&mut self, sample: DragSample) -> bool {
        !self.apply(Action::Drag(sample)).is_empty()
    }

    pub fn is_dragging(&self) -> bool {
        self.model.is_dragging()
    }

    pub fn active_handle(&self) -> Option<HandleId> {
        self.model.active_handle()
    }

    /// Handles the host should show for the current aspect mode.
    pub fn available_handles(&self) -> Vec<HandleId> {
        available_handles(self.model.aspect_mode())
    }

    /// Where `handle` sits on the current rectangle, in container coordinates.
    pub fn handle_position(&self, handle: HandleId) -> Point {
        match handle {
            HandleId::Center => self.model.rect().center(),
            _ => handle.anchor_point(&self.model.rect()),
        }
    }

    pub fn subscribe(&mut self, listener: Box<dyn SelectionListener>) -> ListenerId {
        self.notifier.subscribe(listener)
    }

    pub fn subscribe_fn<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&Effect) + 'static,
    {
        self.notifier.subscribe_fn(callback)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.notifier.unsubscribe(id)
    }

    fn apply(&mut self, action: Action) -> Vec<Effect> {
        let effects = self.model.reduce(action);
        self.notifier.dispatch(&effects);
        effects
    }
}

fn validate_container(container: Size) -> Result<(), SelectorError> {
    if container.is_finite() && container.width >= 0.0 && container.height >= 0.0 {
        Ok(())
    } else {
        Err(SelectorError::InvalidContainer {
            width: container.width,
            height: container.height,
        })
    }
}
