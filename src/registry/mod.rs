//! Ordered registry of open windows
//!
//! The registry is the single source of truth for "what is open".
//! Insertion order is admission order; the oldest window is always at
//! the front. Closed windows are removed outright, never kept as
//! tombstones.

use log::debug;
use thiserror::Error;

use crate::lifecycle::{Window, WindowId};

/// Registry-level errors. Duplicate identities indicate caller misuse
/// and are never silently overwritten.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("window {0} is already registered")]
    DuplicateIdentity(WindowId),
}

/// The authoritative, insertion-ordered list of open windows.
///
/// Mutated only by admission (insert) and lifecycle close (remove).
#[derive(Debug, Default)]
pub struct WindowRegistry {
    windows: Vec<Window>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a window. Fails if the identity is already present.
    pub fn add(&mut self, window: Window) -> Result<(), RegistryError> {
        if self.contains(window.id) {
            return Err(RegistryError::DuplicateIdentity(window.id));
        }
        debug!("Registered window {} ({})", window.id, window.class);
        self.windows.push(window);
        Ok(())
    }

    /// Remove a window by identity. No-op when absent, so closing an
    /// already-closed window stays idempotent.
    pub fn remove(&mut self, id: WindowId) -> Option<Window> {
        let pos = self.windows.iter().position(|w| w.id == id)?;
        let window = self.windows.remove(pos);
        debug!("Removed window {} from registry", id);
        Some(window)
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.iter().any(|w| w.id == id)
    }

    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// All open windows in admission order.
    pub fn windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.iter()
    }

    /// Open non-dialog windows in admission order, oldest first. This
    /// is the set that counts against capacity and gets tiled.
    pub fn open_regular(&self) -> impl Iterator<Item = &Window> {
        self.windows.iter().filter(|w| w.is_open() && !w.is_dialog())
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

#[cfg(test)]
mod tests;
