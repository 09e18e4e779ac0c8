//! Fire-and-forget removals scheduled on the logical clock.

use std::time::Duration;

use nash_core::EffectId;

/// Which collection a scheduled removal targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    Ripple,
    Wave,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PendingRemoval {
    pub due: Duration,
    pub kind: EffectKind,
    pub id: EffectId,
}

/// Queue of removals waiting for their due time. Entries cannot be
/// cancelled once scheduled.
#[derive(Debug, Clone, Default)]
pub(crate) struct DeferredRemovals {
    pending: Vec<PendingRemoval>,
}

impl DeferredRemovals {
    pub fn schedule(&mut self, due: Duration, kind: EffectKind, id: EffectId) {
        self.pending.push(PendingRemoval { due, kind, id });
    }

    /// Take every removal due at or before `now`, in scheduling order.
    pub fn take_due(&mut self, now: Duration) -> Vec<PendingRemoval> {
        let (due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|r| r.due <= now);
        self.pending = pending;
        due
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
