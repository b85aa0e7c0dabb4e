// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the engine and the views.
//!
//! The `App` owns the view-state machine, the demo sequencer, the gesture
//! recognizer and the preference store, and translates messages into engine
//! calls. The timeline the engine runs on is measured from `App` creation.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, PointerEvent};

use crate::config::{PreferenceStore, Preferences};
use crate::error::Result;
use crate::shell::{
    AnimationSpeed, DemoScript, DemoSequencer, GestureRecognizer, ScreenId, ViewStateMachine,
};
use crate::ui::catalog::app_meta;
use crate::ui::theming::{self, ColorScheme};
use iced::{window, Element, Point, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Root Iced application state.
pub struct App {
    machine: ViewStateMachine,
    demo: DemoSequencer,
    gestures: GestureRecognizer,
    preferences: Preferences,
    store: PreferenceStore,
    colors: ColorScheme,
    grid_apps: Vec<ScreenId>,
    /// Origin of the shell timeline.
    epoch: Instant,
    window_size: Size,
    cursor: Option<Point>,
    settings_open: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active", &self.machine.active().map(|s| s.id().to_string()))
            .field("demo_running", &self.demo.is_running())
            .field("settings_open", &self.settings_open)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 420.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 860.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

const APP_TITLE: &str = "One UI Shell";

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(app: App) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the app is handed over once.
    let boot_state = RefCell::new(Some(app));
    let boot = move || {
        let app = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        (app, Task::none())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads preferences and builds the engine.
    ///
    /// An unreadable preference file is logged and replaced by defaults; only
    /// an inconsistent screen setup is an error.
    pub fn new(flags: Flags) -> Result<Self> {
        // Load failures are logged by the store and leave it empty.
        let (store, _warning) =
            PreferenceStore::load_with_override(flags.config_dir.map(PathBuf::from));

        let mut preferences = Preferences::resolve(&store);
        if let Some(speed) = flags.speed {
            preferences.speed = AnimationSpeed::new(speed);
            log::info!("animation speed overridden to {}", preferences.speed);
        }

        let machine = ViewStateMachine::standard(preferences.transition_config())?;
        let demo = DemoSequencer::new(DemoScript::default(), machine.registry())?;
        let grid_apps = update::grid_apps(&machine);

        Ok(Self {
            machine,
            demo,
            gestures: GestureRecognizer::default(),
            colors: ColorScheme::for_choice(preferences.theme),
            preferences,
            store,
            grid_apps,
            epoch: Instant::now(),
            window_size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            cursor: None,
            settings_open: false,
        })
    }

    fn title(&self) -> String {
        match self.machine.registry().active_app() {
            Some(screen) => format!("{} - {APP_TITLE}", app_meta(screen.id()).label),
            None => APP_TITLE.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        theming::iced_theme(self.preferences.theme)
    }

    fn subscription(&self) -> Subscription<Message> {
        let animating = self.machine.is_transitioning() || self.demo.is_running();
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(animating),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = match &message {
            Message::Tick(instant) => self.timeline_at(*instant),
            _ => self.epoch.elapsed(),
        };

        let mut ctx = update::UpdateContext {
            machine: &mut self.machine,
            demo: &mut self.demo,
            gestures: &mut self.gestures,
            preferences: &mut self.preferences,
            store: &mut self.store,
            colors: &mut self.colors,
            window_size: &mut self.window_size,
            cursor: &mut self.cursor,
            settings_open: &mut self.settings_open,
            now,
        };

        match message {
            Message::Tick(_) => update::handle_tick(&mut ctx),
            Message::Home(msg) => update::handle_home(&mut ctx, msg),
            Message::AppScreen(msg) => update::handle_app_screen(&mut ctx, msg),
            Message::Settings(msg) => update::handle_settings(&mut ctx, msg),
            Message::Pointer(event) => update::handle_pointer(&mut ctx, event),
            Message::WindowResized(size) => update::handle_resize(&mut ctx, size),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            machine: &self.machine,
            grid_apps: &self.grid_apps,
            preferences: &self.preferences,
            colors: &self.colors,
            window_size: self.window_size,
            dismiss_pull: self.gestures.dismiss_pull(),
            settings_open: self.settings_open,
            demo_running: self.demo.is_running(),
        })
    }

    /// Timeline position an `Instant` maps to.
    fn timeline_at(&self, instant: Instant) -> Duration {
        instant.saturating_duration_since(self.epoch)
    }
}
