//! Property sweeps over pseudo-random drag sequences.

use rectsel_core::{
    AspectMode, DragSample, HandleConfig, HandleConfigs, HandleId, Point, Rect,
    RectangleSelector, SelectorSettings, Size,
};

const EPS: f64 = 1e-6;

/// Small deterministic generator so failures are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    fn point(&mut self) -> Point {
        Point::new(self.range(-200.0, 500.0), self.range(-200.0, 400.0))
    }
}

fn selector(aspect: AspectMode, minimum: Option<Size>) -> RectangleSelector {
    let _ = env_logger::builder().is_test(true).try_init();
    let settings = SelectorSettings {
        handles: HandleConfigs::all(HandleConfig {
            size: 12.0,
            ..HandleConfig::default()
        }),
        aspect_mode: aspect,
        minimum_size: minimum,
        initial_rect: Some(Rect::new(40.0, 60.0, 120.0, 90.0)),
        ..SelectorSettings::default()
    };
    RectangleSelector::with_settings(Size::new(300.0, 200.0), &settings).unwrap()
}

fn check(s: &RectangleSelector, context: &str) {
    let r = s.rectangle();
    let c = s.container();
    assert!(
        r.top >= -EPS && r.left >= -EPS,
        "{context}: {r:?} leaves the container origin"
    );
    assert!(
        r.bottom() <= c.height + EPS && r.right() <= c.width + EPS,
        "{context}: {r:?} exceeds {c:?}"
    );

    let min = s.effective_minimum_size();
    assert!(
        r.width >= min.width - EPS && r.height >= min.height - EPS,
        "{context}: {r:?} below minimum {min:?}"
    );

    if let AspectMode::Fixed(ratio) = s.aspect_mode() {
        assert!(
            (r.width / r.height - ratio).abs() <= EPS,
            "{context}: {r:?} off ratio {ratio}"
        );
    }
}

fn modes() -> [(AspectMode, Option<Size>); 4] {
    [
        (AspectMode::Free, None),
        (AspectMode::Free, Some(Size::new(50.0, 35.0))),
        (AspectMode::Fixed(2.0), None),
        (AspectMode::Fixed(0.75), Some(Size::new(40.0, 40.0))),
    ]
}

#[test]
fn random_drags_keep_every_invariant() {
    let mut rng = Lcg(0x5eed);

    for (aspect, minimum) in modes() {
        let mut s = selector(aspect, minimum);
        check(&s, "initial");

        for round in 0..40 {
            let handles = s.available_handles();
            let handle = handles[round % handles.len()];
            let from = s.handle_position(handle);
            assert!(s.handle_sample(DragSample::begin(handle, from)));

            for step in 0..15 {
                s.handle_sample(DragSample::moved(handle, rng.point()));
                check(&s, &format!("{aspect:?} {handle:?} round {round} step {step}"));
            }
            s.handle_sample(DragSample::end(handle, rng.point()));
            check(&s, &format!("{aspect:?} {handle:?} round {round} end"));
        }
    }
}

#[test]
fn programmatic_set_is_idempotent() {
    let mut rng = Lcg(42);

    for (aspect, minimum) in modes() {
        let mut s = selector(aspect, minimum);
        for _ in 0..50 {
            let rect = Rect::new(
                rng.range(-100.0, 300.0),
                rng.range(-100.0, 400.0),
                rng.range(0.0, 500.0),
                rng.range(0.0, 400.0),
            );
            s.set_rectangle(rect).unwrap();
            check(&s, "set_rectangle");

            let once = s.rectangle();
            s.set_rectangle(once).unwrap();
            let twice = s.rectangle();
            for (a, b) in [
                (once.top, twice.top),
                (once.left, twice.left),
                (once.width, twice.width),
                (once.height, twice.height),
            ] {
                assert!((a - b).abs() <= 1e-9, "{once:?} became {twice:?}");
            }
        }
    }
}

#[test]
fn translate_preserves_size() {
    let mut rng = Lcg(7);

    for (aspect, minimum) in modes() {
        let mut s = selector(aspect, minimum);
        let size = s.rectangle().size();
        let grab = s.rectangle().center();
        assert!(s.handle_sample(DragSample::begin(HandleId::Center, grab)));
        for _ in 0..100 {
            assert!(s.handle_sample(DragSample::moved(HandleId::Center, rng.point())));
            assert_eq!(s.rectangle().size(), size);
            check(&s, "translate");
        }
    }
}

#[test]
fn container_shrink_is_enforced_on_next_sample() {
    let mut s = selector(AspectMode::Fixed(2.0), None);
    s.set_rectangle(Rect::new(20.0, 20.0, 260.0, 130.0)).unwrap();
    s.set_container(Size::new(150.0, 120.0)).unwrap();

    let handle = HandleId::BottomRight;
    let from = s.handle_position(handle);
    assert!(s.handle_sample(DragSample::begin(handle, from)));
    assert!(s.handle_sample(DragSample::moved(handle, Point::new(100.0, 100.0))));
    check(&s, "after container shrink");
}
