//! Progression oracle and shell collaborator traits
//!
//! The surrounding game shell gates window classes behind progression
//! upgrades. Rather than inspecting window types at runtime, Paneshift
//! builds a static catalog of (class, required upgrade) pairs at session
//! start and answers unlock and capacity queries against the set of
//! installed upgrades. The shell installs upgrades from its own threads,
//! so the set lives behind a lock.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

/// Progression upgrade names understood by the windowing core.
pub mod upgrades {
    /// Reserves a panel row at the edge of the desktop.
    pub const DESKTOP_PANEL: &str = "desktop_panel";
    /// Raises the window limit from one to two.
    pub const WINDOW_MANAGER: &str = "window_manager";
    /// Raises the window limit to four.
    pub const WM_4_WINDOWS: &str = "wm_4_windows";
    /// Removes the window limit entirely.
    pub const WM_UNLIMITED_WINDOWS: &str = "wm_unlimited_windows";
    /// Disables automatic tiling; windows keep caller-set geometry.
    pub const WM_FREE_PLACEMENT: &str = "wm_free_placement";
}

/// Maximum count of concurrently open non-dialog windows permitted by
/// the current progression state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityTier {
    Unlimited,
    Single,
    Dual,
    Quad,
}

impl CapacityTier {
    /// The concrete limit, or `None` when unconstrained.
    pub fn limit(self) -> Option<usize> {
        match self {
            CapacityTier::Unlimited => None,
            CapacityTier::Single => Some(1),
            CapacityTier::Dual => Some(2),
            CapacityTier::Quad => Some(4),
        }
    }
}

/// Catalog entry describing how one window class is gated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSpec {
    pub class: String,
    /// Upgrade that must be installed before the class can open;
    /// `None` means always available.
    pub required_upgrade: Option<String>,
    /// Whether the class needs a live multiplayer connection.
    pub multiplayer_only: bool,
}

/// Static lookup table of window classes, built once at session start.
#[derive(Debug, Clone, Default)]
pub struct AppCatalog {
    entries: HashMap<String, AppSpec>,
}

impl AppCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The classes shipped with the simulated desktop.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.insert(AppSpec {
            class: "terminal".into(),
            required_upgrade: None,
            multiplayer_only: false,
        });
        catalog.insert(AppSpec {
            class: "shiftorium".into(),
            required_upgrade: None,
            multiplayer_only: false,
        });
        catalog.insert(AppSpec {
            class: "file_skimmer".into(),
            required_upgrade: Some("file_skimmer".into()),
            multiplayer_only: false,
        });
        catalog.insert(AppSpec {
            class: "textpad".into(),
            required_upgrade: Some("textpad".into()),
            multiplayer_only: false,
        });
        catalog.insert(AppSpec {
            class: "pong".into(),
            required_upgrade: Some("pong".into()),
            multiplayer_only: false,
        });
        catalog.insert(AppSpec {
            class: "chat".into(),
            required_upgrade: Some("mud_fundamentals".into()),
            multiplayer_only: true,
        });
        catalog
    }

    pub fn insert(&mut self, spec: AppSpec) {
        self.entries.insert(spec.class.clone(), spec);
    }

    pub fn get(&self, class: &str) -> Option<&AppSpec> {
        self.entries.get(class)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The set of installed progression upgrades, shared with the shell.
#[derive(Debug, Default)]
pub struct Progression {
    installed: RwLock<HashSet<String>>,
}

impl Progression {
    pub fn new(installed: impl IntoIterator<Item = String>) -> Self {
        Self {
            installed: RwLock::new(installed.into_iter().collect()),
        }
    }

    pub fn install(&self, upgrade: &str) {
        self.installed.write().insert(upgrade.to_string());
    }

    pub fn is_installed(&self, upgrade: &str) -> bool {
        self.installed.read().contains(upgrade)
    }
}

/// Answers "may class X open" and "how many windows fit" from the
/// catalog and the installed-upgrade set. Tiers are recomputed on
/// every admission decision; progression may change between calls.
#[derive(Debug, Clone)]
pub struct CapabilityOracle {
    catalog: AppCatalog,
    progression: Arc<Progression>,
}

impl CapabilityOracle {
    pub fn new(catalog: AppCatalog, progression: Arc<Progression>) -> Self {
        Self {
            catalog,
            progression,
        }
    }

    /// Unknown classes are treated as locked.
    pub fn is_unlocked(&self, class: &str) -> bool {
        match self.catalog.get(class) {
            Some(spec) => spec
                .required_upgrade
                .as_deref()
                .map_or(true, |upgrade| self.progression.is_installed(upgrade)),
            None => false,
        }
    }

    pub fn requires_connection(&self, class: &str) -> bool {
        self.catalog
            .get(class)
            .map_or(false, |spec| spec.multiplayer_only)
    }

    /// Resolve the current capacity tier from installed upgrades,
    /// highest tier first.
    pub fn capacity_tier(&self) -> CapacityTier {
        if self.progression.is_installed(upgrades::WM_UNLIMITED_WINDOWS) {
            CapacityTier::Unlimited
        } else if self.progression.is_installed(upgrades::WM_4_WINDOWS) {
            CapacityTier::Quad
        } else if self.progression.is_installed(upgrades::WINDOW_MANAGER) {
            CapacityTier::Dual
        } else {
            CapacityTier::Single
        }
    }

    pub fn free_placement(&self) -> bool {
        self.progression.is_installed(upgrades::WM_FREE_PLACEMENT)
    }

    pub fn panel_installed(&self) -> bool {
        self.progression.is_installed(upgrades::DESKTOP_PANEL)
    }
}

/// User-facing notice categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Requested class is not unlocked yet.
    FeatureLocked,
    /// Multiplayer connection dropped.
    ConnectionLost,
}

/// Sink for user-facing notices, implemented by the shell.
pub trait Notifications: Send + Sync {
    fn notify_user(&self, kind: NoticeKind, message: &str);
}

/// Yes/no confirmation channel for the reconnect flow. The answer
/// arrives asynchronously; the callback re-enters admission through
/// the session handle instead of blocking the owner thread.
pub trait ReconnectPrompt: Send + Sync {
    fn confirm_reconnect(&self, on_answer: Box<dyn FnOnce(bool) + Send>);
}

/// Multiplayer link state shared with the shell's kernel watchdog.
pub trait ConnectionWatch: Send + Sync {
    fn is_connected(&self) -> bool;
    fn set_connected(&self, connected: bool);
}

/// Flag-backed connection watch, suitable for the shell and for tests.
#[derive(Debug, Default)]
pub struct SharedConnection {
    connected: AtomicBool,
}

impl SharedConnection {
    pub fn new(connected: bool) -> Self {
        Self {
            connected: AtomicBool::new(connected),
        }
    }
}

impl ConnectionWatch for SharedConnection {
    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }
}
