// SPDX-License-Identifier: MPL-2.0
use oneui_shell::config::{
    PreferenceStore, Preferences, ThemeChoice, KEY_ANIM_EASING, KEY_ANIM_SPEED, KEY_ONEUI8_MODE,
    KEY_THEME,
};
use oneui_shell::shell::{
    driver, DemoScript, DemoSequencer, EasingProfile, GestureRecognizer, MotionPace, ScreenId,
    SwipeIntent, ViewStateMachine, Visibility,
};
use iced::Point;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;
use tokio::sync::watch;

fn id(name: &str) -> ScreenId {
    ScreenId::new(name)
}

fn machine_from(store: &PreferenceStore) -> ViewStateMachine {
    let preferences = Preferences::resolve(store);
    ViewStateMachine::standard(preferences.transition_config()).expect("standard machine")
}

#[test]
fn preferences_file_drives_transition_timing() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("preferences.toml");
    fs::write(
        &path,
        "anim-speed = \"2\"\nanim-easing = \"standard\"\noneui8-mode = \"false\"\n",
    )
    .expect("Failed to write preferences file");

    let store = PreferenceStore::load_from_path(&path).expect("Failed to load preferences");
    let preferences = Preferences::resolve(&store);
    assert_eq!(preferences.easing, EasingProfile::Standard);
    assert_eq!(preferences.pace(), MotionPace::Classic);

    let machine = machine_from(&store);
    let timing = machine.timing();
    assert_eq!(timing.effective_open(), Duration::from_millis(250));
    assert_eq!(timing.effective_close(), Duration::from_millis(200));
    assert_eq!(timing.close_completion_delay(), Duration::from_millis(250));
}

#[test]
fn malformed_preference_values_fall_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("preferences.toml");
    fs::write(&path, "anim-speed = \"fast\"\nanim-easing = \"bouncy\"\ntheme = \"sepia\"\n")
        .expect("Failed to write preferences file");

    let store = PreferenceStore::load_from_path(&path).expect("Failed to load preferences");
    assert_eq!(Preferences::resolve(&store), Preferences::default());
}

#[test]
fn written_preferences_survive_a_reload() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("preferences.toml");

    let preferences = Preferences {
        theme: ThemeChoice::Dark,
        oneui8_mode: false,
        ..Preferences::default()
    };

    let mut store = PreferenceStore::in_memory();
    for (key, value) in [
        (KEY_THEME, preferences.theme.as_pref().to_string()),
        (KEY_ONEUI8_MODE, preferences.oneui8_mode.to_string()),
        (KEY_ANIM_SPEED, preferences.speed.as_pref()),
        (KEY_ANIM_EASING, preferences.easing.as_pref().to_string()),
    ] {
        store.set(key, value).expect("in-memory set succeeds");
    }
    store.save_to_path(&path).expect("Failed to save preferences");

    let reloaded = PreferenceStore::load_from_path(&path).expect("Failed to reload preferences");
    assert_eq!(reloaded.get(KEY_THEME), Some("dark"));
    assert_eq!(reloaded.get(KEY_ONEUI8_MODE), Some("false"));
    assert!(reloaded.get(KEY_ANIM_SPEED).is_some());
    assert!(reloaded.get(KEY_ANIM_EASING).is_some());
    assert_eq!(Preferences::resolve(&reloaded), preferences);
}

#[test]
fn classic_close_hides_app_after_scaled_delay() {
    let mut store = PreferenceStore::in_memory();
    store
        .set(KEY_ONEUI8_MODE, "false")
        .expect("in-memory set succeeds");
    let mut machine = machine_from(&store);

    machine.open(&id("notes")).expect("notes is installed");
    machine.advance_by(Duration::from_millis(500));
    assert!(machine.close(&id("notes")).expect("known").is_applied());

    // 400 ms close plus the completion buffer.
    machine.advance_by(Duration::from_millis(449));
    assert_eq!(
        machine.visibility(&id("notes")).expect("known"),
        Visibility::Closing
    );
    let hidden = machine.advance_by(Duration::from_millis(1));
    assert_eq!(hidden, vec![id("notes")]);
    assert_eq!(
        machine.visibility(&id("notes")).expect("known"),
        Visibility::Hidden
    );
    assert!(machine.is_home_active());
}

#[test]
fn swipes_open_cycle_and_dismiss_apps() {
    let mut machine = ViewStateMachine::standard(Default::default()).expect("standard machine");
    let mut gestures = GestureRecognizer::default();

    // Right-to-left swipe on home opens the first app in the cycle.
    gestures.pointer_down(Point::new(300.0, 500.0));
    gestures.pointer_move(Point::new(200.0, 510.0));
    let intent = gestures.pointer_up(Some(Point::new(120.0, 505.0)));
    assert_eq!(intent, Some(SwipeIntent::Next));
    machine
        .apply_intent(SwipeIntent::Next)
        .expect("cycle apps are installed");
    assert_eq!(machine.active().map(|s| s.id().as_str()), Some("camera"));

    machine.advance_by(Duration::from_millis(400));

    // Left-to-right swipe wraps back to the last app.
    gestures.pointer_down(Point::new(100.0, 500.0));
    let intent = gestures.pointer_up(Some(Point::new(260.0, 490.0)));
    assert_eq!(intent, Some(SwipeIntent::Previous));
    machine.apply_intent(SwipeIntent::Previous).expect("known");
    assert_eq!(machine.active().map(|s| s.id().as_str()), Some("notes"));
    assert_eq!(
        machine.visibility(&id("camera")).expect("known"),
        Visibility::Closing
    );

    // A downward swipe from the status bar dismisses.
    gestures.pointer_down(Point::new(200.0, 20.0));
    let intent = gestures.pointer_up(Some(Point::new(205.0, 220.0)));
    assert_eq!(intent, Some(SwipeIntent::Dismiss));
    machine.apply_intent(SwipeIntent::Dismiss).expect("known");
    assert!(machine.is_home_active());

    // The same swipe starting mid-screen is not a dismiss.
    gestures.pointer_down(Point::new(200.0, 400.0));
    assert_eq!(gestures.pointer_up(Some(Point::new(200.0, 600.0))), None);
}

#[tokio::test(start_paused = true)]
async fn headless_demo_at_double_speed_returns_home() {
    let mut store = PreferenceStore::in_memory();
    store
        .set(KEY_ANIM_SPEED, "2")
        .expect("in-memory set succeeds");
    let mut machine = machine_from(&store);
    let mut demo =
        DemoSequencer::new(DemoScript::default(), machine.registry()).expect("valid demo");

    let (_cancel_tx, cancel_rx) = watch::channel(false);
    demo.start(&machine);
    let report = driver::run(&mut machine, &mut demo, cancel_rx).await;

    assert!(!report.cancelled);
    assert_eq!(report.demo_steps, 7);
    assert_eq!(report.closes_completed, 6);
    assert!(machine.is_home_active());
    assert!(!machine.is_transitioning());
    assert!(machine.registry().closing().next().is_none());
    for app in ["camera", "gallery", "music"] {
        assert_eq!(
            machine.visibility(&id(app)).expect("known"),
            Visibility::Hidden
        );
    }
}

#[tokio::test(start_paused = true)]
async fn cancelled_demo_keeps_current_app_open() {
    let mut machine = ViewStateMachine::standard(Default::default()).expect("standard machine");
    let mut demo =
        DemoSequencer::new(DemoScript::default(), machine.registry()).expect("valid demo");

    let (cancel_tx, cancel_rx) = watch::channel(false);
    demo.start(&machine);
    let run = driver::run(&mut machine, &mut demo, cancel_rx);
    let cancel = async {
        tokio::time::sleep(Duration::from_millis(700)).await;
        cancel_tx.send(true).expect("driver is listening");
    };
    let (report, ()) = tokio::join!(run, cancel);

    assert!(report.cancelled);
    assert!(!demo.is_running());
    assert!(!machine.is_transitioning());
    // Switches at 0, 300 and 600 ms ran; music stays on screen.
    assert_eq!(report.demo_steps, 3);
    assert_eq!(machine.active().map(|s| s.id().as_str()), Some("music"));
}
