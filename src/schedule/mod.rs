// SPDX-FileCopyrightText: 2026 The Liana Authors
// SPDX-License-Identifier: MIT

//! Recompute scheduling.
//!
//! Routing recomputes on exactly three occasions: once at mount, once per
//! settled burst of resize events, and once more a fixed delay after mount
//! to absorb late layout shifts. [`UpdateSchedule`] tracks those deadlines
//! as plain state; the host drives it from its event loop by reporting
//! events and polling [`UpdateSchedule::take_due`] with the current time.
//! Nothing here spawns timers or threads.

use std::time::{Duration, Instant};

use crate::config::RouterConfig;

/// Coalesces layout-affecting events into discrete recompute deadlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateSchedule {
    debounce: Duration,
    settle_delay: Duration,
    mount_due: bool,
    settle_at: Option<Instant>,
    resize_at: Option<Instant>,
}

impl UpdateSchedule {
    pub fn new(debounce: Duration, settle_delay: Duration) -> Self {
        Self { debounce, settle_delay, mount_due: false, settle_at: None, resize_at: None }
    }

    pub fn from_config(config: &RouterConfig) -> Self {
        Self::new(config.resize_debounce(), config.settle_delay())
    }

    /// Records the initial mount: one recomputation immediately and another
    /// after the settle delay.
    pub fn note_mount(&mut self, now: Instant) {
        self.mount_due = true;
        self.settle_at = Some(now + self.settle_delay);
    }

    /// Records a resize event. The deadline slides forward on every call, so
    /// a burst of events yields a single recomputation once the burst stops.
    pub fn note_resize(&mut self, now: Instant) {
        self.resize_at = Some(now + self.debounce);
    }

    /// Earliest pending deadline, if any. Mount recomputation is due
    /// immediately and reports no deadline of its own.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.settle_at, self.resize_at) {
            (Some(settle), Some(resize)) => Some(settle.min(resize)),
            (settle, resize) => settle.or(resize),
        }
    }

    /// Whether a recomputation is due at `now`.
    ///
    /// Consumes every deadline that has elapsed, so multiple triggers landing
    /// in the same poll coalesce into one recomputation.
    pub fn take_due(&mut self, now: Instant) -> bool {
        let mut due = false;

        if self.mount_due {
            self.mount_due = false;
            due = true;
        }
        if self.settle_at.map_or(false, |at| at <= now) {
            self.settle_at = None;
            due = true;
        }
        if self.resize_at.map_or(false, |at| at <= now) {
            self.resize_at = None;
            due = true;
        }

        due
    }

    pub fn is_idle(&self) -> bool {
        !self.mount_due && self.settle_at.is_none() && self.resize_at.is_none()
    }
}
