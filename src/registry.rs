//! Shared resize observation for tail fragments.
//!
//! One [`ResizeRegistry`] serves every [`TailedEllipsis`](crate::TailedEllipsis)
//! shown by a rendering root. Widgets report the laid-out width of their tail
//! fragment on every pass; reports whose rounded width changed are queued and
//! delivered as one batch by [`ResizeRegistry::end_pass`], which also drops the
//! entries of widgets that were not shown during the pass.
//!
//! The registry is a plain owned value. Hold one per rendering root (for
//! example in the application state) and pass it to the widgets by `&mut`.

use std::collections::HashMap;

use egui::Id;

use crate::layout::ceil_px;

/// Callback receiving the new tail width in whole pixels.
pub type ResizeCallback = Box<dyn FnMut(u32)>;

/// Cleanup run once when a target stops being observed.
pub type UnmountCallback = Box<dyn FnOnce()>;

/// One size report delivered through the observation channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeEntry {
    pub target: Id,
    pub width: f32,
}

struct Registration {
    callback: ResizeCallback,
    /// Last width handed to the callback
    delivered: Option<u32>,
    /// Whether the target was observed during the current pass
    seen: bool,
    on_unmount: Option<UnmountCallback>,
}

impl Registration {
    fn new(callback: ResizeCallback) -> Self {
        Self {
            callback,
            delivered: None,
            seen: true,
            on_unmount: None,
        }
    }

    fn release(self) {
        if let Some(on_unmount) = self.on_unmount {
            on_unmount();
        }
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("delivered", &self.delivered)
            .field("seen", &self.seen)
            .field("on_unmount", &self.on_unmount.is_some())
            .finish_non_exhaustive()
    }
}

/// Maps observed tail fragments to the callbacks that store their width.
#[derive(Debug, Default)]
pub struct ResizeRegistry {
    entries: HashMap<Id, Registration>,
    pending: Vec<ResizeEntry>,
    last_dispatched: usize,
}

impl ResizeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Registration =====

    /// Associates `target` with `callback` and starts observing it.
    ///
    /// Registering an already known target replaces its callback and keeps the
    /// last delivered width. Returns true if the target was not registered yet.
    pub fn register(&mut self, target: Id, callback: ResizeCallback) -> bool {
        match self.entries.get_mut(&target) {
            Some(registration) => {
                registration.callback = callback;
                registration.seen = true;
                false
            }
            None => {
                tracing::debug!(target_id = ?target, "registering tail fragment");
                self.entries.insert(target, Registration::new(callback));
                true
            }
        }
    }

    /// Sets the cleanup to run when `target` is unregistered or swept by
    /// [`end_pass`](Self::end_pass). Unregistered targets are ignored.
    pub fn on_unmount(&mut self, target: Id, cleanup: UnmountCallback) {
        if let Some(registration) = self.entries.get_mut(&target) {
            registration.on_unmount = Some(cleanup);
        }
    }

    /// Removes the association for `target` and drops its queued reports.
    ///
    /// Returns true if the target was registered.
    pub fn unregister(&mut self, target: Id) -> bool {
        let Some(registration) = self.entries.remove(&target) else {
            return false;
        };
        tracing::debug!(target_id = ?target, "unregistering tail fragment");
        self.pending.retain(|entry| entry.target != target);
        registration.release();
        true
    }

    /// Returns true if `target` is currently observed.
    pub fn is_registered(&self, target: Id) -> bool {
        self.entries.contains_key(&target)
    }

    /// Number of observed targets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is observed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of callbacks invoked by the last [`end_pass`](Self::end_pass).
    pub fn last_dispatched(&self) -> usize {
        self.last_dispatched
    }

    /// Last width delivered to the callback of `target`.
    pub fn delivered_width(&self, target: Id) -> Option<u32> {
        self.entries.get(&target).and_then(|r| r.delivered)
    }

    // ===== Observation =====

    /// Measures `target` right away, invoking its callback synchronously.
    ///
    /// Used on mount so the first painted frame already knows the tail width.
    /// Unregistered targets are ignored.
    pub fn measure_now(&mut self, target: Id, width: f32) {
        let Some(registration) = self.entries.get_mut(&target) else {
            return;
        };

        let px = ceil_px(width);
        registration.seen = true;
        registration.delivered = Some(px);
        self.pending.retain(|entry| entry.target != target);
        (registration.callback)(px);
    }

    /// Reports the current width of `target` for this pass.
    ///
    /// Marks the target as still mounted and queues a report when the rounded
    /// width differs from the last delivered one. Returns true if a report
    /// was queued; the caller's current layout is then stale. Unregistered
    /// targets are ignored.
    pub fn observe(&mut self, target: Id, width: f32) -> bool {
        let Some(registration) = self.entries.get_mut(&target) else {
            return false;
        };

        registration.seen = true;
        if registration.delivered == Some(ceil_px(width)) {
            return false;
        }

        match self.pending.iter_mut().find(|entry| entry.target == target) {
            Some(entry) => entry.width = width,
            None => self.pending.push(ResizeEntry { target, width }),
        }
        true
    }

    /// Delivers a batch of size reports.
    ///
    /// Each report is routed to the callback registered for its target with
    /// the width rounded up. Reports for unknown targets are skipped; they
    /// happen when a widget goes away while its report is in flight.
    /// Returns the number of callbacks invoked.
    pub fn dispatch(&mut self, batch: impl IntoIterator<Item = ResizeEntry>) -> usize {
        let mut invoked = 0;

        for entry in batch {
            let Some(registration) = self.entries.get_mut(&entry.target) else {
                tracing::trace!(target_id = ?entry.target, "skipping report for unregistered fragment");
                continue;
            };

            let px = ceil_px(entry.width);
            registration.delivered = Some(px);
            (registration.callback)(px);
            invoked += 1;
        }

        invoked
    }

    /// Finishes one pass.
    ///
    /// Drops every entry that was not observed since the previous call, then
    /// delivers the queued reports. Call once per frame after all widgets
    /// sharing this registry have been shown.
    pub fn end_pass(&mut self) -> usize {
        let unmounted: Vec<Id> = self
            .entries
            .iter()
            .filter(|(_, registration)| !registration.seen)
            .map(|(target, _)| *target)
            .collect();
        if !unmounted.is_empty() {
            tracing::debug!(unmounted = unmounted.len(), "dropped unmounted tail fragments");
        }
        for target in unmounted {
            if let Some(registration) = self.entries.remove(&target) {
                registration.release();
            }
        }

        let batch = std::mem::take(&mut self.pending);
        let invoked = self.dispatch(batch);
        if invoked > 0 {
            tracing::trace!(invoked, "delivered resize batch");
        }

        for registration in self.entries.values_mut() {
            registration.seen = false;
        }

        self.last_dispatched = invoked;
        invoked
    }
}
