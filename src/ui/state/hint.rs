// SPDX-License-Identifier: MPL-2.0
//! First-use hint visibility
//!
//! The zoom/pan hint appears whenever a new image is shown and hides after a
//! timeout. Each showing arms a timer tagged with a fresh token; an expiry
//! carrying an older token is ignored, which cancels superseded timers.

use crate::domain::ui::newtypes::HintTimeout;
use tokio::time::Instant;

/// Hint visibility and the token of the only timer allowed to hide it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HintState {
    visible: bool,
    token: u64,
}

/// A pending hide request. Await [`HintTimer::wait`] and feed the returned
/// token back through [`HintState::expire`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintTimer {
    pub token: u64,
    pub deadline: Instant,
}

impl HintTimer {
    /// Sleeps until the deadline, then yields the token.
    pub async fn wait(self) -> u64 {
        tokio::time::sleep_until(self.deadline).await;
        self.token
    }
}

impl HintState {
    /// Shows the hint and arms a new timer, superseding any previous one.
    pub fn show(&mut self, timeout: HintTimeout) -> HintTimer {
        self.visible = true;
        self.token = self.token.wrapping_add(1);
        HintTimer {
            token: self.token,
            deadline: Instant::now() + timeout.as_duration(),
        }
    }

    /// Hides the hint if `token` belongs to the latest timer.
    /// Returns true when the hint was hidden by this call.
    pub fn expire(&mut self, token: u64) -> bool {
        if token == self.token && self.visible {
            self.visible = false;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
