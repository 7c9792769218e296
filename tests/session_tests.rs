//! End-to-end tests for the interactive session
//!
//! These drive the public API the way the event loop does: clicks, slider
//! moves, playback controls, and script replay against a live session.

use svmscope::core::{KernelKind, Label, LabeledPoint, Point, SvmParams};
use svmscope::data;
use svmscope::session::{
    dispatch, AnimationDriver, InputEvent, MouseButton, RetrainPolicy, SessionController,
};
use svmscope::surface::GridSpec;
use svmscope::DecisionModel;

fn coarse_grid() -> GridSpec {
    GridSpec::new(-5.0, 5.0, -5.0, 5.0, 30)
}

fn session_with(points: Vec<LabeledPoint>) -> SessionController {
    SessionController::with_points(points).with_grid(coarse_grid())
}

#[test]
fn test_default_session_separates_seeded_clusters() {
    let session = SessionController::new().with_grid(coarse_grid());
    let model = session.model().expect("startup fit");

    // The seeded clusters sit around (-1.5, -1.5) and (1.5, 1.5); the
    // default RBF fit must classify the cluster centers correctly.
    assert_eq!(
        model.predict(Point::new(-1.5, -1.5)).label,
        Label::Zero,
        "class-zero cluster center"
    );
    assert_eq!(
        model.predict(Point::new(1.5, 1.5)).label,
        Label::One,
        "class-one cluster center"
    );
}

#[test]
fn test_click_sequence_grows_set_and_retrains() {
    let mut session = session_with(Vec::new());
    let mut driver = AnimationDriver::new();

    let clicks = [
        (1.0, 1.0, MouseButton::Right),
        (-1.0, -1.0, MouseButton::Left),
        (2.0, 0.5, MouseButton::Right),
        (-2.0, -0.5, MouseButton::Left),
    ];
    for (i, &(x, y, button)) in clicks.iter().enumerate() {
        dispatch(
            &mut session,
            &mut driver,
            &InputEvent::Click { x, y, button },
        );
        assert_eq!(session.points().len(), i + 1);
    }

    let model = session.model().expect("retrained after clicks");
    assert!(model.n_support_vectors() >= 2);
    assert!(session.surface().is_some());
}

#[test]
fn test_added_point_changes_the_surface() {
    let mut session = session_with(vec![
        LabeledPoint::new(Point::new(1.0, 1.0), Label::One),
        LabeledPoint::new(Point::new(-1.0, -1.0), Label::Zero),
    ]);
    let before = session
        .decision_readout(Point::new(0.0, 3.0))
        .expect("initial fit");

    // A class-zero point right next to the probe pulls the value down
    session.add_point(Point::new(0.0, 3.2), Label::Zero);
    let after = session
        .decision_readout(Point::new(0.0, 3.0))
        .expect("refit after click");

    assert!(after < before);
}

#[test]
fn test_lazy_params_apply_on_next_click() {
    let mut session = session_with(vec![
        LabeledPoint::new(Point::new(1.0, 1.0), Label::One),
        LabeledPoint::new(Point::new(-1.0, -1.0), Label::Zero),
    ]);
    assert_eq!(*session.policy(), RetrainPolicy::default());

    let before = session.decision_readout(Point::new(0.3, 0.7));
    session.set_kernel(KernelKind::Linear);
    // Old model still active until the next point mutation
    assert_eq!(session.decision_readout(Point::new(0.3, 0.7)), before);

    session.add_point(Point::new(2.0, 2.0), Label::One);
    assert_eq!(session.params().kernel, KernelKind::Linear);
    assert!(session.model().is_some());
}

#[test]
fn test_script_replay_matches_manual_dispatch() {
    let script = vec![
        InputEvent::Click {
            x: 1.0,
            y: 1.0,
            button: MouseButton::Right,
        },
        InputEvent::Click {
            x: -1.0,
            y: -1.0,
            button: MouseButton::Left,
        },
        InputEvent::SetGamma { value: 1.0 },
        InputEvent::Click {
            x: 0.5,
            y: 1.5,
            button: MouseButton::Right,
        },
        InputEvent::PointerMoved { x: 1.0, y: 1.0 },
    ];

    let mut scripted = session_with(Vec::new());
    let mut scripted_driver = AnimationDriver::new();
    let mut last = None;
    for event in &script {
        if let Some(value) = dispatch(&mut scripted, &mut scripted_driver, event) {
            last = Some(value);
        }
    }

    let mut manual = session_with(Vec::new());
    manual.add_point(Point::new(1.0, 1.0), Label::One);
    manual.add_point(Point::new(-1.0, -1.0), Label::Zero);
    manual.set_gamma(1.0);
    manual.add_point(Point::new(0.5, 1.5), Label::One);

    let expected = manual.decision_readout(Point::new(1.0, 1.0));
    assert_eq!(last, expected);
    assert_eq!(scripted.points(), manual.points());
}

#[test]
fn test_reset_round_trip() {
    let mut session = SessionController::new().with_grid(coarse_grid());
    let mut driver = AnimationDriver::new();
    let original_points = session.points().to_vec();

    dispatch(
        &mut session,
        &mut driver,
        &InputEvent::Click {
            x: 4.0,
            y: -4.0,
            button: MouseButton::Left,
        },
    );
    dispatch(
        &mut session,
        &mut driver,
        &InputEvent::SelectKernel {
            kernel: KernelKind::Sigmoid,
        },
    );
    dispatch(&mut session, &mut driver, &InputEvent::SetC { value: 1.0 });
    driver.tick();
    driver.tick();
    dispatch(&mut session, &mut driver, &InputEvent::Pause);

    dispatch(&mut session, &mut driver, &InputEvent::Reset);

    assert_eq!(session.points(), original_points.as_slice());
    assert_eq!(*session.params(), SvmParams::default());
    assert!(session.model().is_some());
    assert_eq!(driver.frame(), 0);
    assert!(driver.is_running());
}

#[test]
fn test_pause_play_does_not_touch_the_model() {
    let mut session = session_with(vec![
        LabeledPoint::new(Point::new(1.0, 1.0), Label::One),
        LabeledPoint::new(Point::new(-1.0, -1.0), Label::Zero),
    ]);
    let mut driver = AnimationDriver::new();
    let before = session.decision_readout(Point::new(0.5, 0.5));

    dispatch(&mut session, &mut driver, &InputEvent::Pause);
    assert!(!driver.tick());
    dispatch(&mut session, &mut driver, &InputEvent::Play);
    assert!(driver.tick());

    assert_eq!(session.decision_readout(Point::new(0.5, 0.5)), before);
}

#[test]
fn test_surface_agrees_with_model() {
    let session = session_with(vec![
        LabeledPoint::new(Point::new(1.0, 1.0), Label::One),
        LabeledPoint::new(Point::new(-1.0, -1.0), Label::Zero),
    ]);
    let model = session.model().expect("fit");
    let surface = session.surface().expect("surface");
    let spec = surface.spec();

    for (i, j) in [(0, 0), (5, 20), (15, 15), (29, 29)] {
        let expected = model.decision_value(spec.point_at(i, j));
        assert!((surface.value_at(i, j) - expected).abs() < 1e-12);
    }
}

#[test]
fn test_circles_need_a_nonlinear_kernel() {
    let points = data::circles(60, 0.5, 0.05, 7);
    let session = session_with(points.clone());
    let model = session.model().expect("rbf fit");

    // Inner class at the origin, outer class on the unit circle
    assert_eq!(model.predict(Point::new(0.0, 0.0)).label, Label::One);
    let correct = points
        .iter()
        .filter(|p| model.predict(p.point).label == p.label)
        .count();
    assert!(
        correct * 10 >= points.len() * 9,
        "rbf should fit the rings: {correct}/{}",
        points.len()
    );
}

#[test]
fn test_dataset_generation_is_deterministic() {
    assert_eq!(data::two_clusters(42), data::two_clusters(42));
    assert_ne!(data::two_clusters(42), data::two_clusters(43));
    assert_eq!(
        data::circles(40, 0.4, 0.1, 9),
        data::circles(40, 0.4, 0.1, 9)
    );
}
