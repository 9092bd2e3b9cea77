//! Lifecycle listener registry.

use log::trace;
use rectsel_geometry::Rect;

use crate::selection::Effect;

/// Receives selection lifecycle events. Every method defaults to a no-op.
pub trait SelectionListener {
    fn will_start_changing(&mut self, _rect: Rect) {}
    fn did_update(&mut self, _rect: Rect) {}
    fn did_end_changing(&mut self, _rect: Rect) {}
}

/// Callback form of a listener: one closure that sees every effect.
pub type EffectCallback = Box<dyn FnMut(&Effect)>;

struct CallbackListener(EffectCallback);

impl SelectionListener for CallbackListener {
    fn will_start_changing(&mut self, rect: Rect) {
        (self.0)(&Effect::WillStartChanging(rect))
    }

    fn did_update(&mut self, rect: Rect) {
        (self.0)(&Effect::DidUpdate(rect))
    }

    fn did_end_changing(&mut self, rect: Rect) {
        (self.0)(&Effect::DidEndChanging(rect))
    }
}

/// Handle returned by [`Notifier::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Default)]
pub struct Notifier {
    listeners: Vec<(ListenerId, Box<dyn SelectionListener>)>,
    next_id: u64,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: Box<dyn SelectionListener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub fn subscribe_fn<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&Effect) + 'static,
    {
        self.subscribe(Box::new(CallbackListener(Box::new(callback))))
    }

    /// Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(other, _)| *other != id);
        self.listeners.len() != before
    }

    /// Deliver effects in order, each to every listener in subscription order.
    pub fn dispatch(&mut self, effects: &[Effect]) {
        for effect in effects {
            trace!("dispatch {effect:?} to {} listener(s)", self.listeners.len());
            for (_, listener) in &mut self.listeners {
                match *effect {
                    Effect::WillStartChanging(r) => listener.will_start_changing(r),
                    Effect::DidUpdate(r) => listener.did_update(r),
                    Effect::DidEndChanging(r) => listener.did_end_changing(r),
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Counter {
        started: usize,
        updated: usize,
        ended: usize,
    }

    struct Shared(Rc<RefCell<Counter>>);

    impl SelectionListener for Shared {
        fn will_start_changing(&mut self, _rect: Rect) {
            self.0.borrow_mut().started += 1;
        }

        fn did_update(&mut self, _rect: Rect) {
            self.0.borrow_mut().updated += 1;
        }

        fn did_end_changing(&mut self, _rect: Rect) {
            self.0.borrow_mut().ended += 1;
        }
    }

    #[test]
    fn dispatches_to_every_listener_in_order() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let log = Rc::new(RefCell::new(Vec::new()));
        let counter = Rc::new(RefCell::new(Counter::default()));

        let mut n = Notifier::new();
        n.subscribe(Box::new(Shared(counter.clone())));
        let sink = log.clone();
        n.subscribe_fn(move |e| sink.borrow_mut().push(*e));

        let effects = [
            Effect::WillStartChanging(rect),
            Effect::DidUpdate(rect),
            Effect::DidEndChanging(rect),
        ];
        n.dispatch(&effects);

        assert_eq!(*log.borrow(), effects.to_vec());
        let c = counter.borrow();
        assert_eq!((c.started, c.updated, c.ended), (1, 1, 1));
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let hits = Rc::new(RefCell::new(0));
        let mut n = Notifier::new();
        let sink = hits.clone();
        let id = n.subscribe_fn(move |_| *sink.borrow_mut() += 1);

        n.dispatch(&[Effect::DidUpdate(Rect::default())]);
        assert!(n.unsubscribe(id));
        assert!(!n.unsubscribe(id));
        assert!(n.is_empty());
        n.dispatch(&[Effect::DidUpdate(Rect::default())]);
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn default_methods_are_noops() {
        struct Quiet;
        impl SelectionListener for Quiet {}

        let mut n = Notifier::new();
        n.subscribe(Box::new(Quiet));
        n.dispatch(&[Effect::DidEndChanging(Rect::default())]);
        assert_eq!(n.len(), 1);
    }
}
