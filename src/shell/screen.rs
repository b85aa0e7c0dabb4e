// SPDX-License-Identifier: MPL-2.0
//! Screens and the registry that owns their visibility.
//!
//! The registry is built once from a static list of screens. Anyone may read
//! it; only the view-state machine can change a screen's visibility.

use crate::error::{Error, Result};
use std::fmt;
use std::time::Duration;

/// Identifier of a screen (`"home"`, `"camera"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScreenId(String);

impl ScreenId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScreenId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Home,
    App,
}

/// Lifecycle: `Hidden -> Active -> Closing -> Hidden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Active,
    Closing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    id: ScreenId,
    kind: ScreenKind,
    visibility: Visibility,
    /// Timeline position of the last visibility change.
    changed_at: Duration,
}

impl Screen {
    #[must_use]
    pub fn id(&self) -> &ScreenId {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> ScreenKind {
        self.kind
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn changed_at(&self) -> Duration {
        self.changed_at
    }

    #[must_use]
    pub fn is_home(&self) -> bool {
        self.kind == ScreenKind::Home
    }
}

/// Every screen known to the shell, home first.
#[derive(Debug, Clone)]
pub struct ScreenRegistry {
    screens: Vec<Screen>,
}

impl ScreenRegistry {
    /// Registers the home screen and the given apps.
    ///
    /// Home starts `Active`, apps start `Hidden`. Empty or duplicate ids are
    /// configuration errors.
    pub fn new<I, S>(home: impl Into<ScreenId>, apps: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<ScreenId>,
    {
        let home = home.into();
        let mut screens = vec![Screen {
            id: home,
            kind: ScreenKind::Home,
            visibility: Visibility::Active,
            changed_at: Duration::ZERO,
        }];

        for app in apps {
            let id = app.into();
            if screens.iter().any(|s| s.id == id) {
                return Err(Error::Config(format!("screen `{id}` registered twice")));
            }
            screens.push(Screen {
                id,
                kind: ScreenKind::App,
                visibility: Visibility::Hidden,
                changed_at: Duration::ZERO,
            });
        }

        if let Some(empty) = screens.iter().find(|s| s.id.as_str().trim().is_empty()) {
            return Err(Error::Config(format!(
                "{:?} screen has an empty identifier",
                empty.kind
            )));
        }

        Ok(Self { screens })
    }

    #[must_use]
    pub fn home(&self) -> &Screen {
        &self.screens[0]
    }

    #[must_use]
    pub fn get(&self, id: &ScreenId) -> Option<&Screen> {
        self.screens.iter().find(|s| &s.id == id)
    }

    /// Looks up a screen, treating an unknown id as an error.
    pub fn require(&self, id: &ScreenId) -> Result<&Screen> {
        self.get(id)
            .ok_or_else(|| Error::UnknownScreen(id.to_string()))
    }

    pub fn visibility(&self, id: &ScreenId) -> Result<Visibility> {
        self.require(id).map(Screen::visibility)
    }

    /// The screen currently `Active`, if any.
    #[must_use]
    pub fn active(&self) -> Option<&Screen> {
        self.screens
            .iter()
            .find(|s| s.visibility == Visibility::Active)
    }

    /// The active screen if it is an app.
    #[must_use]
    pub fn active_app(&self) -> Option<&Screen> {
        self.active().filter(|s| !s.is_home())
    }

    pub fn closing(&self) -> impl Iterator<Item = &Screen> {
        self.screens
            .iter()
            .filter(|s| s.visibility == Visibility::Closing)
    }

    /// All screens, home first then apps in registration order.
    #[must_use]
    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    pub fn apps(&self) -> impl Iterator<Item = &Screen> {
        self.screens.iter().filter(|s| !s.is_home())
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.screens
            .iter()
            .filter(|s| s.visibility == Visibility::Active)
            .count()
    }

    pub(crate) fn set_visibility(&mut self, id: &ScreenId, visibility: Visibility, now: Duration) {
        if let Some(screen) = self.screens.iter_mut().find(|s| &s.id == id) {
            if screen.visibility != visibility {
                log::debug!("{}: {:?} -> {:?}", screen.id, screen.visibility, visibility);
                screen.visibility = visibility;
                screen.changed_at = now;
            }
        }
    }
}
