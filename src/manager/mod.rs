//! Session-scoped window manager context
//!
//! `WindowManager` owns the registry, holds the collaborator handles,
//! and runs the admission policy end to end: unlock gate, reconnect
//! gate, dialog bypass, eviction, registration, and the tiling pass.
//! It is single-threaded by design; cross-thread callers go through
//! the `dispatch` module, which marshals work onto the owning thread.

use std::sync::Arc;

use anyhow::{Context, Result};
use log::{debug, info, trace, warn};

use crate::admission::{self, Admission, RejectReason};
use crate::capability::{
    AppCatalog, AppSpec, CapabilityOracle, ConnectionWatch, NoticeKind, Notifications,
    Progression, ReconnectPrompt, SharedConnection,
};
use crate::config::PaneshiftConfig;
use crate::lifecycle::{Rect, Window, WindowEvent, WindowId, WindowKind, WindowRequest};
use crate::registry::WindowRegistry;
use crate::tiling::{self, SurfaceRect, SurfaceSource};

/// Notification sink that just logs. Used when the shell has not
/// wired a real one yet.
pub struct LogNotifications;

impl Notifications for LogNotifications {
    fn notify_user(&self, kind: NoticeKind, message: &str) {
        warn!("User notice ({kind:?}): {message}");
    }
}

/// Reconnect prompt that declines every request. Headless default.
pub struct DeclinePrompt;

impl ReconnectPrompt for DeclinePrompt {
    fn confirm_reconnect(&self, on_answer: Box<dyn FnOnce(bool) + Send>) {
        on_answer(false);
    }
}

/// The window manager for one desktop session. Constructed at session
/// start, dropped at session end; there is no process-wide instance.
pub struct WindowManager {
    registry: WindowRegistry,
    oracle: CapabilityOracle,
    surface: Arc<dyn SurfaceSource>,
    notifications: Arc<dyn Notifications>,
    prompt: Arc<dyn ReconnectPrompt>,
    connection: Arc<dyn ConnectionWatch>,

    /// Next window ID
    next_window_id: u64,

    /// Next creation-order sequence number
    next_sequence: u64,

    /// Lifecycle event listeners (presentation layer)
    listeners: Vec<Box<dyn Fn(WindowEvent) + Send + Sync>>,
}

impl WindowManager {
    pub fn new(
        oracle: CapabilityOracle,
        surface: Arc<dyn SurfaceSource>,
        notifications: Arc<dyn Notifications>,
        prompt: Arc<dyn ReconnectPrompt>,
        connection: Arc<dyn ConnectionWatch>,
    ) -> Self {
        Self {
            registry: WindowRegistry::new(),
            oracle,
            surface,
            notifications,
            prompt,
            connection,
            next_window_id: 1,
            next_sequence: 0,
            listeners: Vec::new(),
        }
    }

    /// Build a manager from configuration with logging collaborators.
    /// The shell replaces the defaults via the `set_*` methods.
    pub fn from_config(config: &PaneshiftConfig) -> Self {
        let mut catalog = AppCatalog::builtin();
        for entry in &config.apps {
            catalog.insert(AppSpec {
                class: entry.class.clone(),
                required_upgrade: entry.required_upgrade.clone(),
                multiplayer_only: entry.multiplayer_only,
            });
        }
        let progression = Arc::new(Progression::new(config.progression.installed.iter().cloned()));
        let oracle = CapabilityOracle::new(catalog, progression);

        Self::new(
            oracle,
            Arc::new(config.surface.clone()),
            Arc::new(LogNotifications),
            Arc::new(DeclinePrompt),
            Arc::new(SharedConnection::new(config.progression.connected)),
        )
    }

    pub fn set_notifications(&mut self, notifications: Arc<dyn Notifications>) {
        self.notifications = notifications;
    }

    pub fn set_reconnect_prompt(&mut self, prompt: Arc<dyn ReconnectPrompt>) {
        self.prompt = prompt;
    }

    pub fn set_connection(&mut self, connection: Arc<dyn ConnectionWatch>) {
        self.connection = connection;
    }

    /// Subscribe to lifecycle transitions.
    pub fn add_listener<F>(&mut self, listener: F)
    where
        F: Fn(WindowEvent) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn oracle(&self) -> &CapabilityOracle {
        &self.oracle
    }

    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.registry.get(id)
    }

    pub fn windows(&self) -> impl Iterator<Item = &Window> {
        self.registry.windows()
    }

    pub(crate) fn reconnect_prompt(&self) -> Arc<dyn ReconnectPrompt> {
        Arc::clone(&self.prompt)
    }

    pub(crate) fn connection(&self) -> Arc<dyn ConnectionWatch> {
        Arc::clone(&self.connection)
    }

    /// Run the admission policy for a window-open request.
    pub fn request_open(&mut self, request: WindowRequest) -> Result<Admission> {
        if !self.oracle.is_unlocked(&request.class) {
            info!("Class '{}' is locked; rejecting request", request.class);
            self.notifications.notify_user(
                NoticeKind::FeatureLocked,
                &format!("'{}' is not unlocked yet", request.class),
            );
            return Ok(Admission::Rejected(RejectReason::FeatureLocked));
        }

        if self.oracle.requires_connection(&request.class) && !self.connection.is_connected() {
            info!(
                "Class '{}' needs a live connection; deferring to reconnect prompt",
                request.class
            );
            return Ok(Admission::PendingReconnect);
        }

        // Dialogs bypass capacity and tiling entirely
        if request.kind == WindowKind::Dialog {
            let id = self.admit(request)?;
            return Ok(Admission::Admitted(id));
        }

        let tier = self.oracle.capacity_tier();
        let open: Vec<WindowId> = self.registry.open_regular().map(|w| w.id).collect();
        for victim in admission::select_victims(&open, tier) {
            debug!("Evicting window {victim} to stay within {tier:?}");
            self.close_internal(victim);
        }

        let id = self.admit(request)?;
        self.retile();
        Ok(Admission::Admitted(id))
    }

    /// Open a dialog. Dialogs only pass the unlock gate; capacity and
    /// tiling do not apply.
    pub fn request_dialog(&mut self, mut request: WindowRequest) -> Result<Admission> {
        request.kind = WindowKind::Dialog;

        if !self.oracle.is_unlocked(&request.class) {
            info!("Dialog class '{}' is locked; rejecting", request.class);
            self.notifications.notify_user(
                NoticeKind::FeatureLocked,
                &format!("'{}' is not unlocked yet", request.class),
            );
            return Ok(Admission::Rejected(RejectReason::FeatureLocked));
        }

        let id = self.admit(request)?;
        Ok(Admission::Admitted(id))
    }

    /// Close a window. Idempotent; closing an unknown or already
    /// closed identity is a no-op.
    pub fn close(&mut self, id: WindowId) {
        if let Some(WindowKind::Regular) = self.close_internal(id) {
            self.retile();
        }
    }

    /// Resize a window to the full usable surface, regardless of
    /// tiling mode. Silently ignored when geometry is unavailable.
    pub fn maximize(&mut self, id: WindowId) {
        let surface = match self.surface_rect() {
            Ok(surface) => surface,
            Err(err) => {
                debug!("Maximize of {id} ignored: {err}");
                return;
            }
        };

        let rect = surface.full_rect();
        let Some(window) = self.registry.get_mut(id) else {
            return;
        };
        window.maximized = true;
        window.set_geometry(rect);
        debug!("Maximized window {id} to {rect:?}");
        self.emit(WindowEvent::GeometryChanged { id, geometry: rect });
    }

    /// Reserved; the desktop has no minimized state yet.
    pub fn minimize(&mut self, id: WindowId) {
        trace!("Minimize of {id} ignored");
    }

    /// Update display metadata. No layout effect.
    pub fn set_title(&mut self, id: WindowId, title: impl Into<String>) {
        let title = title.into();
        let Some(window) = self.registry.get_mut(id) else {
            return;
        };
        window.set_title(title.clone());
        self.emit(WindowEvent::TitleChanged { id, title });
    }

    /// Caller-controlled placement, meaningful in free-placement mode.
    pub fn set_geometry(&mut self, id: WindowId, rect: Rect) {
        let Some(window) = self.registry.get_mut(id) else {
            return;
        };
        window.set_geometry(rect);
        self.emit(WindowEvent::GeometryChanged { id, geometry: rect });
    }

    fn admit(&mut self, request: WindowRequest) -> Result<WindowId> {
        let id = WindowId(self.next_window_id);
        self.next_window_id += 1;
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let class = request.class.clone();
        let window = Window::open(request, id, sequence);
        self.registry
            .add(window)
            .context("window admission failed")?;
        info!("Opened window {id} ({class})");
        self.emit(WindowEvent::Opened { id, class });
        Ok(id)
    }

    fn close_internal(&mut self, id: WindowId) -> Option<WindowKind> {
        let mut window = self.registry.remove(id)?;
        window.close();
        info!("Closed window {id} ({})", window.class);
        self.emit(WindowEvent::Closed { id });
        Some(window.kind)
    }

    fn surface_rect(&self) -> Result<SurfaceRect, tiling::GeometryError> {
        SurfaceRect::from_source(self.surface.as_ref(), self.oracle.panel_installed())
    }

    /// Recompute and apply the layout for all open non-dialog windows.
    /// A failed pass leaves every window in its prior geometry.
    fn retile(&mut self) {
        let surface = match self.surface_rect() {
            Ok(surface) => surface,
            Err(err) => {
                warn!("Skipping tiling pass: {err}");
                return;
            }
        };

        let ids: Vec<WindowId> = self.registry.open_regular().map(|w| w.id).collect();
        let Some(layout) = tiling::compute_layout(&ids, surface, self.oracle.free_placement())
        else {
            return;
        };

        let mut events = Vec::new();
        for (id, rect) in layout {
            if let Some(window) = self.registry.get_mut(id) {
                if window.geometry != rect {
                    window.set_geometry(rect);
                    events.push(WindowEvent::GeometryChanged { id, geometry: rect });
                }
            }
        }
        for event in events {
            self.emit(event);
        }
    }

    fn emit(&self, event: WindowEvent) {
        for listener in &self.listeners {
            listener(event.clone());
        }
    }
}
