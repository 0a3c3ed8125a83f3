use std::collections::VecDeque;

use super::model::RouteKey;

/// Maximum number of routes kept for `Back`.
const HISTORY_LIMIT: usize = 64;

/// Current route and the routes visited before it.
#[derive(Debug)]
pub(crate) struct RouterState {
    current: RouteKey,
    history: VecDeque<RouteKey>,
}

impl Default for RouterState {
    fn default() -> Self {
        Self {
            current: RouteKey::home(),
            history: VecDeque::new(),
        }
    }
}

impl RouterState {
    pub(crate) fn current(&self) -> &RouteKey {
        &self.current
    }

    pub(crate) fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Make `route` current. Re-entering the current route leaves the
    /// history untouched.
    pub(super) fn push(&mut self, route: RouteKey) {
        if route == self.current {
            return;
        }

        let previous = std::mem::replace(&mut self.current, route);
        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(previous);
    }

    /// Return to the previous route, if there is one.
    pub(super) fn pop(&mut self) -> Option<&RouteKey> {
        let previous = self.history.pop_back()?;
        self.current = previous;
        Some(&self.current)
    }
}
