use std::cell::RefCell;
use std::rc::Rc;

use rectsel_core::{
    AspectMode, DragSample, Effect, HandleId, Point, Rect, RectangleSelector, SelectionListener,
    Size,
};

#[derive(Debug, Default)]
struct Recorder {
    events: Vec<Effect>,
}

impl Recorder {
    fn count(&self, f: impl Fn(&Effect) -> bool) -> usize {
        self.events.iter().filter(|e| f(e)).count()
    }

    fn begins(&self) -> usize {
        self.count(|e| matches!(e, Effect::WillStartChanging(_)))
    }

    fn updates(&self) -> usize {
        self.count(|e| matches!(e, Effect::DidUpdate(_)))
    }

    fn ends(&self) -> usize {
        self.count(|e| matches!(e, Effect::DidEndChanging(_)))
    }
}

struct Listener(Rc<RefCell<Recorder>>);

impl SelectionListener for Listener {
    fn will_start_changing(&mut self, rect: Rect) {
        self.0.borrow_mut().events.push(Effect::WillStartChanging(rect));
    }

    fn did_update(&mut self, rect: Rect) {
        self.0.borrow_mut().events.push(Effect::DidUpdate(rect));
    }

    fn did_end_changing(&mut self, rect: Rect) {
        self.0.borrow_mut().events.push(Effect::DidEndChanging(rect));
    }
}

fn setup() -> (RectangleSelector, Rc<RefCell<Recorder>>) {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut s = RectangleSelector::new(Size::new(300.0, 200.0)).unwrap();
    s.set_rectangle(Rect::new(50.0, 50.0, 100.0, 100.0)).unwrap();

    let recorder = Rc::new(RefCell::new(Recorder::default()));
    s.subscribe(Box::new(Listener(recorder.clone())));
    (s, recorder)
}

#[test]
fn one_begin_and_one_end_per_session() {
    let (mut s, rec) = setup();
    let h = HandleId::BottomRight;

    s.handle_sample(DragSample::begin(h, Point::new(150.0, 150.0)));
    for x in [160.0, 170.0, 170.0, 180.0] {
        s.handle_sample(DragSample::moved(h, Point::new(x, 150.0)));
    }
    s.handle_sample(DragSample::end(h, Point::new(180.0, 150.0)));

    let rec = rec.borrow();
    assert_eq!(rec.begins(), 1);
    // Four moves plus the end sample, unchanged ones included.
    assert_eq!(rec.updates(), 5);
    assert_eq!(rec.ends(), 1);
    assert_eq!(
        rec.events.first(),
        Some(&Effect::WillStartChanging(Rect::new(50.0, 50.0, 100.0, 100.0)))
    );
    assert_eq!(
        rec.events.last(),
        Some(&Effect::DidEndChanging(Rect::new(50.0, 50.0, 130.0, 100.0)))
    );
}

#[test]
fn stray_samples_are_rejected_silently() {
    let (mut s, rec) = setup();

    assert!(!s.handle_sample(DragSample::moved(HandleId::Left, Point::new(0.0, 0.0))));
    assert!(!s.handle_sample(DragSample::end(HandleId::Left, Point::new(0.0, 0.0))));
    assert!(!s.handle_sample(DragSample::cancel(HandleId::Left, Point::new(0.0, 0.0))));

    assert!(s.handle_sample(DragSample::begin(HandleId::Left, Point::new(50.0, 100.0))));
    assert!(!s.handle_sample(DragSample::begin(HandleId::Top, Point::new(100.0, 50.0))));
    assert!(!s.handle_sample(DragSample::moved(HandleId::Top, Point::new(100.0, 0.0))));
    assert_eq!(s.active_handle(), Some(HandleId::Left));

    assert_eq!(rec.borrow().events.len(), 1);
    assert_eq!(s.rectangle(), Rect::new(50.0, 50.0, 100.0, 100.0));
}

#[test]
fn cancel_ends_without_applying() {
    let (mut s, rec) = setup();
    let h = HandleId::Center;

    s.handle_sample(DragSample::begin(h, Point::new(100.0, 100.0)));
    s.handle_sample(DragSample::moved(h, Point::new(110.0, 100.0)));
    assert!(s.handle_sample(DragSample::cancel(h, Point::new(250.0, 10.0))));

    let moved = Rect::new(50.0, 60.0, 100.0, 100.0);
    assert_eq!(s.rectangle(), moved);
    assert!(!s.is_dragging());
    assert_eq!(rec.borrow().events.last(), Some(&Effect::DidEndChanging(moved)));
    assert_eq!(rec.borrow().ends(), 1);
}

#[test]
fn programmatic_changes_only_update() {
    let (mut s, rec) = setup();

    s.set_rectangle(Rect::new(10.0, 10.0, 80.0, 80.0)).unwrap();
    s.set_aspect_mode(AspectMode::Fixed(2.0)).unwrap();
    s.set_minimum_size(Some(Size::new(10.0, 10.0)));

    let rec = rec.borrow();
    assert_eq!(rec.begins(), 0);
    assert_eq!(rec.ends(), 0);
    // set_rectangle always updates; the aspect refit changed the rect; the small minimum did not.
    assert_eq!(rec.updates(), 2);
}

#[test]
fn disabled_selector_ignores_samples() {
    let (mut s, rec) = setup();
    s.set_enabled(false);

    assert!(!s.handle_sample(DragSample::begin(HandleId::Center, Point::new(60.0, 60.0))));
    assert!(rec.borrow().events.is_empty());

    s.set_enabled(true);
    assert!(s.handle_sample(DragSample::begin(HandleId::Center, Point::new(60.0, 60.0))));
    s.set_enabled(false);
    assert!(!s.is_dragging());
    assert_eq!(rec.borrow().begins(), 1);
    assert_eq!(rec.borrow().ends(), 1);
}

#[test]
fn unsubscribed_listener_hears_nothing() {
    let (mut s, _) = setup();
    let hits = Rc::new(RefCell::new(0usize));
    let sink = hits.clone();
    let id = s.subscribe_fn(move |_| *sink.borrow_mut() += 1);

    s.set_rectangle(Rect::new(0.0, 0.0, 100.0, 100.0)).unwrap();
    assert!(s.unsubscribe(id));
    s.set_rectangle(Rect::new(10.0, 10.0, 100.0, 100.0)).unwrap();
    assert_eq!(*hits.borrow(), 1);
}
