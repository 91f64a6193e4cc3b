//! Window records and their state machine
//!
//! A window in Paneshift is a plain data record: an identity, a kind
//! (regular or dialog), a rectangle, and an open/closed state. The
//! presentation layer subscribes to lifecycle events rather than being
//! the source of truth for window state.

use std::fmt;

/// Opaque window handle, unique for the window's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Window kind classification.
///
/// Dialogs bypass the capacity limit and are never tiled or evicted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    Regular,
    Dialog,
}

/// Lifecycle state of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    /// Submitted to admission but not yet accepted.
    Requested,
    /// Registered and visible on the desktop.
    Open,
    /// Closed and removed from the registry.
    Closed,
}

/// Rectangle for window positioning and sizing, desktop-relative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// What a caller submits to open a window: the catalog class that gates
/// it, a display title, and the kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRequest {
    pub class: String,
    pub title: String,
    pub kind: WindowKind,
}

impl WindowRequest {
    pub fn regular(class: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            title: title.into(),
            kind: WindowKind::Regular,
        }
    }

    pub fn dialog(class: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            title: title.into(),
            kind: WindowKind::Dialog,
        }
    }
}

/// An open window owned by the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    pub id: WindowId,
    pub class: String,
    pub title: String,
    pub kind: WindowKind,
    pub state: WindowState,
    pub maximized: bool,
    pub geometry: Rect,

    /// Monotonic sequence number assigned at admission; eviction order
    /// is ascending by this value.
    pub sequence: u64,
}

impl Window {
    /// Transition a request into an open window record.
    pub fn open(request: WindowRequest, id: WindowId, sequence: u64) -> Self {
        Self {
            id,
            class: request.class,
            title: request.title,
            kind: request.kind,
            state: WindowState::Open,
            maximized: false,
            geometry: Rect::default(),
            sequence,
        }
    }

    pub fn is_dialog(&self) -> bool {
        self.kind == WindowKind::Dialog
    }

    pub fn is_open(&self) -> bool {
        self.state == WindowState::Open
    }

    /// Mark the window closed. Idempotent.
    pub fn close(&mut self) {
        self.state = WindowState::Closed;
    }

    pub fn set_geometry(&mut self, geometry: Rect) {
        self.geometry = geometry;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }
}

/// Lifecycle transition events for presentation-layer subscribers.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowEvent {
    Opened { id: WindowId, class: String },
    Closed { id: WindowId },
    GeometryChanged { id: WindowId, geometry: Rect },
    TitleChanged { id: WindowId, title: String },
}
