// SPDX-License-Identifier: MPL-2.0
//! Fixed ordering of apps for swipe cycling.

use super::screen::ScreenId;
use crate::error::{Error, Result};

/// Non-empty, duplicate-free ordered list of app identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppCycle {
    apps: Vec<ScreenId>,
}

impl AppCycle {
    pub fn new<I, S>(apps: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<ScreenId>,
    {
        let mut ids: Vec<ScreenId> = Vec::new();
        for app in apps {
            let id = app.into();
            if ids.contains(&id) {
                return Err(Error::Config(format!("`{id}` appears twice in the app cycle")));
            }
            ids.push(id);
        }
        if ids.is_empty() {
            return Err(Error::Config("app cycle is empty".into()));
        }
        Ok(Self { apps: ids })
    }

    #[must_use]
    pub fn apps(&self) -> &[ScreenId] {
        &self.apps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.apps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    #[must_use]
    pub fn position(&self, id: &ScreenId) -> Option<usize> {
        self.apps.iter().position(|a| a == id)
    }

    /// Entry at `index`, wrapping around.
    #[must_use]
    pub fn get_wrapped(&self, index: usize) -> &ScreenId {
        &self.apps[index % self.apps.len()]
    }

    /// App after `current`; the first app when `current` is not in the cycle.
    #[must_use]
    pub fn next_after(&self, current: Option<&ScreenId>) -> &ScreenId {
        match current.and_then(|id| self.position(id)) {
            Some(index) => self.get_wrapped(index + 1),
            None => &self.apps[0],
        }
    }

    /// App before `current`; the last app when `current` is not in the cycle.
    #[must_use]
    pub fn previous_before(&self, current: Option<&ScreenId>) -> &ScreenId {
        let last = self.apps.len() - 1;
        match current.and_then(|id| self.position(id)) {
            Some(0) | None => &self.apps[last],
            Some(index) => &self.apps[index - 1],
        }
    }
}
