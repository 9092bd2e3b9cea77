use log::{debug, trace, warn};
use rectsel_geometry::{AspectMode, HandleId, Rect, Size};
use rectsel_settings::{HandleConfigs, SelectorSettings};

use crate::clamp::{Constraints, normalize, refit_to_aspect};
use crate::session::{DragPhase, DragSample, DragSession};
use crate::state::RectangleState;

/// Input actions (pure).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// A pointer sample for a handle or the selection body.
    Drag(DragSample),

    /// Host-initiated rectangle. Normalized into the container before it is stored.
    SetRectangle(Rect),

    /// Change the aspect constraint. Invalid ratios are ignored.
    SetAspectMode(AspectMode),

    /// Set or clear the caller minimum-size override.
    SetMinimumSize(Option<Size>),

    /// Handle geometry changed (feeds the default minimum size).
    SetHandles(HandleConfigs),

    /// The container was resized. The rectangle is re-clamped by the next mutation.
    SetContainer(Size),

    /// Enable or disable user interaction. Disabling ends an active drag.
    SetEnabled(bool),
}

/// Lifecycle notifications requested by the core (delivered by the host/notifier).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// A drag began; carries the rectangle before any mutation.
    WillStartChanging(Rect),
    /// A sample or programmatic change was applied.
    DidUpdate(Rect),
    /// A drag ended or was cancelled; carries the final rectangle.
    DidEndChanging(Rect),
}

impl Effect {
    pub fn rect(&self) -> Rect {
        match self {
            Effect::WillStartChanging(r) | Effect::DidUpdate(r) | Effect::DidEndChanging(r) => {
                *r
            }
        }
    }
}

/// Selection state machine model.
///
/// Only one drag session can be active. Samples that do not belong to it are dropped.
#[derive(Debug, Clone)]
pub struct Model {
    state: RectangleState,
    aspect: AspectMode,
    minimum: Option<Size>,
    handles: HandleConfigs,
    enabled: bool,
    session: Option<DragSession>,
}

impl Model {
    /// Model selecting the whole container.
    pub fn new(container: Size) -> Self {
        Self::with_settings(container, &SelectorSettings::default())
    }

    pub fn with_settings(container: Size, settings: &SelectorSettings) -> Self {
        let aspect = if settings.aspect_mode.is_valid() {
            settings.aspect_mode
        } else {
            warn!(
                "ignoring invalid aspect mode {:?} from settings",
                settings.aspect_mode
            );
            AspectMode::Free
        };

        let mut model = Self {
            state: RectangleState::new(Rect::default(), container),
            aspect,
            minimum: settings.minimum_size,
            handles: settings.handles,
            enabled: settings.enabled,
            session: None,
        };

        let initial = settings
            .initial_rect
            .filter(Rect::is_finite)
            .unwrap_or_else(|| Rect::from_origin_size(Default::default(), container));
        let rect = refit_to_aspect(initial, &model.constraints());
        model.state.commit(rect);
        model
    }

    pub fn rect(&self) -> Rect {
        self.state.rect()
    }

    pub fn state(&self) -> &RectangleState {
        &self.state
    }

    pub fn container(&self) -> Size {
        self.state.container()
    }

    pub fn aspect_mode(&self) -> AspectMode {
        self.aspect
    }

    pub fn minimum_size(&self) -> Option<Size> {
        self.minimum
    }

    pub fn handles(&self) -> &HandleConfigs {
        &self.handles
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn active_handle(&self) -> Option<HandleId> {
        self.session.map(|s| s.handle)
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn constraints(&self) -> Constraints {
        Constraints {
            container: self.state.container(),
            aspect: self.aspect,
            minimum: self.minimum,
            handles: self.handles,
        }
    }

    pub fn effective_minimum_size(&self) -> Size {
        self.constraints().minimum_size()
    }

    pub fn reduce(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Drag(sample) => self.reduce_drag(sample),

            Action::SetRectangle(rect) => {
                if !rect.is_finite() {
                    warn!("ignoring non-finite rectangle {rect:?}");
                    return Vec::new();
                }
                let rect = normalize(rect, &self.constraints());
                self.state.commit(rect);
                debug!("rectangle set to {rect:?}");
                vec![Effect::DidUpdate(rect)]
            }

            Action::SetAspectMode(mode) => {
                if !mode.is_valid() {
                    warn!("ignoring invalid aspect mode {mode:?}");
                    return Vec::new();
                }
                self.aspect = mode;
                let rect = refit_to_aspect(self.state.rect(), &self.constraints());
                self.commit_programmatic(rect)
            }

            Action::SetMinimumSize(minimum) => {
                self.minimum = minimum;
                let rect = normalize(self.state.rect(), &self.constraints());
                self.commit_programmatic(rect)
            }

            Action::SetHandles(handles) => {
                self.handles = handles;
                let rect = normalize(self.state.rect(), &self.constraints());
                self.commit_programmatic(rect)
            }

            Action::SetContainer(container) => {
                self.state.set_container(container);
                Vec::new()
            }

            Action::SetEnabled(enabled) => {
                self.enabled = enabled;
                if !enabled && let Some(session) = self.session.take() {
                    debug!("drag on {:?} ended by disabling", session.handle);
                    return vec![Effect::DidEndChanging(self.state.rect())];
                }
                Vec::new()
            }
        }
    }

    fn commit_programmatic(&mut self, rect: Rect) -> Vec<Effect> {
        if self.state.commit(rect) {
            debug!("rectangle refitted to {rect:?}");
            vec![Effect::DidUpdate(rect)]
        } else {
            Vec::new()
        }
    }

    fn reduce_drag(&mut self, sample: DragSample) -> Vec<Effect> {
        if !self.enabled {
            trace!("ignoring {:?} while disabled", sample.phase);
            return Vec::new();
        }

        match sample.phase {
            DragPhase::Begin => {
                if let Some(active) = self.session {
                    debug!(
                        "rejecting drag on {:?}: {:?} is already active",
                        sample.handle, active.handle
                    );
                    return Vec::new();
                }
                if !sample.handle.is_available(self.aspect) {
                    debug!("rejecting drag on unavailable handle {:?}", sample.handle);
                    return Vec::new();
                }
                if !sample.position.is_finite() {
                    return Vec::new();
                }

                let rect = self.state.rect();
                self.session = Some(DragSession::start(sample.handle, sample.position, &rect));
                debug!("drag began on {:?} at {:?}", sample.handle, sample.position);
                vec![Effect::WillStartChanging(rect)]
            }

            DragPhase::Move => match self.step(sample) {
                Some(rect) => vec![Effect::DidUpdate(rect)],
                None => Vec::new(),
            },

            DragPhase::End => {
                if !self.owns(&sample) {
                    return Vec::new();
                }
                let mut effects = Vec::new();
                if let Some(rect) = self.step(sample) {
                    effects.push(Effect::DidUpdate(rect));
                }
                self.session = None;
                let rect = self.state.rect();
                debug!("drag on {:?} ended at {rect:?}", sample.handle);
                effects.push(Effect::DidEndChanging(rect));
                effects
            }

            DragPhase::Cancel => {
                if !self.owns(&sample) {
                    return Vec::new();
                }
                // The cancel position is not applied.
                self.session = None;
                let rect = self.state.rect();
                debug!("drag on {:?} cancelled at {rect:?}", sample.handle);
                vec![Effect::DidEndChanging(rect)]
            }
        }
    }

    fn owns(&self, sample: &DragSample) -> bool {
        let owned = self.session.is_some_and(|s| s.handle == sample.handle);
        if !owned {
            trace!(
                "ignoring {:?} for {:?} without an active session",
                sample.phase, sample.handle
            );
        }
        owned
    }

    /// Resolve one sample against the active session and commit the rectangle and anchor
    /// together, before the next sample can be looked at.
    fn step(&mut self, sample: DragSample) -> Option<Rect> {
        if !self.owns(&sample) || !sample.position.is_finite() {
            return None;
        }
        let constraints = self.constraints();
        let session = self.session.as_mut()?;

        let resolution = session.resolve(sample.position, self.state.rect(), &constraints);
        session.apply(&resolution);
        self.state.commit(resolution.rect);
        trace!("{:?} -> {:?}", sample.handle, resolution.rect);
        Some(resolution.rect)
    }
}
