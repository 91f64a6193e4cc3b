//! # Paneshift — desktop windowing core
//!
//! Paneshift is the window admission and tiling engine for a simulated
//! desktop environment: it decides how many application windows may be
//! open at once, which windows get evicted to make room for new ones,
//! and how the survivors are tiled across the desktop surface.
//!
//! ## Architecture
//!
//! Paneshift is built on a modular architecture:
//! - `config`: Configuration parsing and management
//! - `capability`: Progression oracle and shell collaborator traits
//! - `registry`: Ordered registry of open windows
//! - `lifecycle`: Window records and their state machine
//! - `tiling`: Deterministic layout computation
//! - `admission`: Capacity policy and eviction planning
//! - `manager`: Session-scoped window manager context
//! - `dispatch`: Single-owner-thread job marshaling
//!
//! ## Usage
//!
//! ```rust,no_run
//! use paneshift::{PaneshiftConfig, Session, WindowRequest};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = PaneshiftConfig::default();
//!     let session = Session::from_config(config)?;
//!     session.handle().request_open(WindowRequest::regular("terminal", "Terminal"));
//!     session.shutdown();
//!     Ok(())
//! }
//! ```

pub mod admission;
pub mod capability;
pub mod config;
pub mod dispatch;
pub mod lifecycle;
pub mod manager;
pub mod registry;
pub mod tiling;

// Re-export main types for easy access
pub use admission::{Admission, RejectReason};
pub use capability::{CapabilityOracle, CapacityTier};
pub use config::PaneshiftConfig;
pub use dispatch::{Session, SessionHandle};
pub use lifecycle::{Rect, Window, WindowId, WindowKind, WindowRequest};
pub use manager::WindowManager;
pub use registry::WindowRegistry;
pub use tiling::SurfaceRect;

// Re-export common error types
pub use anyhow::{Context, Error, Result};

/// Version information for Paneshift
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
