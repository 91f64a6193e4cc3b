//! Capacity policy and eviction planning
//!
//! Admission decides whether a window-open request is accepted, and
//! which existing windows must close first when the capacity tier is
//! exceeded. The planning step here is pure; the manager executes the
//! resulting plan against the registry on the owner thread.

use crate::capability::CapacityTier;
use crate::lifecycle::WindowId;

/// Outcome of a window-open request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// The window was registered (possibly after evictions).
    Admitted(WindowId),
    /// The request was refused; no state changed.
    Rejected(RejectReason),
    /// A reconnect confirmation is in flight; the request may be
    /// re-submitted once the user answers.
    PendingReconnect,
}

/// Why a request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The window class is not unlocked by current progression.
    FeatureLocked,
}

/// Windows to close, oldest first, so that after eviction and after
/// admitting the candidate exactly `tier` non-dialog windows are open.
///
/// `open` must be the current open non-dialog windows in ascending
/// creation order; dialogs are never candidates and must not appear.
pub fn select_victims(open: &[WindowId], tier: CapacityTier) -> Vec<WindowId> {
    let Some(limit) = tier.limit() else {
        return Vec::new();
    };
    if open.len() < limit {
        return Vec::new();
    }
    // Keep limit - 1 survivors; the candidate takes the last slot.
    let victim_count = open.len() - (limit - 1);
    open[..victim_count].to_vec()
}
