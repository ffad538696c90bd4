//! The watcher interface shared by every backend.

use std::fmt::Debug;

use crate::entry::VisibilityEntry;

/// Starting and stopping observation of targets.
///
/// Implemented by the headless watcher and by the Web backend. Callbacks receive the watcher
/// that produced the batch through this trait, so a callback can be written once for both.
pub trait Observe {
    type Target;

    /// Starts watching `target`. Watching a target twice is a no-op.
    fn observe(&self, target: &Self::Target);

    /// Stops watching `target`. Unknown targets are ignored.
    fn unobserve(&self, target: &Self::Target);

    /// Stops watching every target.
    fn disconnect(&self);
}

/// Logs every entry whose target became visible and stops watching that target.
///
/// Entries with an intersection ratio of zero are skipped. Returns how many targets were
/// unobserved.
pub fn unobserve_revealed<O>(entries: &[VisibilityEntry<O::Target>], observer: &O) -> usize
where
    O: Observe + ?Sized,
    O::Target: Debug,
{
    let mut revealed = 0;
    for entry in entries {
        if !entry.is_revealed() {
            tracing::trace!(observed = ?entry.target, "target out of view");
            continue;
        }

        tracing::info!(
            time = ?entry.time,
            root_bounds = ?entry.root_bounds,
            bounding_client_rect = ?entry.bounding_client_rect,
            intersection_rect = ?entry.intersection_rect,
            is_intersecting = entry.is_intersecting,
            intersection_ratio = entry.intersection_ratio,
            observed = ?entry.target,
            "target revealed"
        );

        observer.unobserve(&entry.target);
        revealed += 1;
    }

    revealed
}
