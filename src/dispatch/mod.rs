//! Single-owner-thread job marshaling
//!
//! All window-manager state is owned by one thread. Callers anywhere
//! in the shell submit units of work through a `SessionHandle`; the
//! owning thread executes them in order. Submission is fire-and-forget
//! — callers never block on completion. The reconnect confirmation is
//! the one re-entrant flow: the prompt's answer re-submits the request
//! through the handle instead of blocking the original job.

use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use log::{debug, error, warn};

use crate::admission::Admission;
use crate::config::PaneshiftConfig;
use crate::lifecycle::{WindowId, WindowRequest};
use crate::manager::WindowManager;

type Job = Box<dyn FnOnce(&mut WindowManager) + Send>;

enum Command {
    Run(Job),
    Shutdown,
}

/// Owns the thread that owns the `WindowManager`. Dropping or shutting
/// down the session ends the desktop session; outstanding handles then
/// silently discard submissions.
pub struct Session {
    tx: Sender<Command>,
    thread: Option<JoinHandle<()>>,
}

impl Session {
    /// Move a manager onto its own owner thread.
    pub fn spawn(mut manager: WindowManager) -> Result<Self> {
        let (tx, rx) = mpsc::channel::<Command>();
        let thread = thread::Builder::new()
            .name("paneshift-wm".into())
            .spawn(move || {
                while let Ok(command) = rx.recv() {
                    match command {
                        Command::Run(job) => job(&mut manager),
                        Command::Shutdown => break,
                    }
                }
                debug!("Window-manager owner thread exiting");
            })
            .context("failed to spawn window-manager owner thread")?;

        Ok(Self {
            tx,
            thread: Some(thread),
        })
    }

    /// Convenience constructor: manager built from config with default
    /// collaborators.
    pub fn from_config(config: PaneshiftConfig) -> Result<Self> {
        Self::spawn(WindowManager::from_config(&config))
    }

    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            tx: self.tx.clone(),
        }
    }

    /// Stop the owner thread after the jobs already queued have run.
    pub fn shutdown(mut self) {
        self.shutdown_inner();
    }

    fn shutdown_inner(&mut self) {
        if let Some(thread) = self.thread.take() {
            let _ = self.tx.send(Command::Shutdown);
            if thread.join().is_err() {
                error!("Window-manager owner thread panicked");
            }
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.shutdown_inner();
    }
}

/// Clonable submission handle for shell threads.
#[derive(Clone)]
pub struct SessionHandle {
    tx: Sender<Command>,
}

impl SessionHandle {
    /// Submit a unit of work to the owner thread. Fire-and-forget.
    pub fn submit(&self, job: impl FnOnce(&mut WindowManager) + Send + 'static) {
        if self.tx.send(Command::Run(Box::new(job))).is_err() {
            warn!("Session is shut down; dropping submitted job");
        }
    }

    /// Request a window open. If the class needs a live connection and
    /// it is down, the reconnect prompt is issued; an affirmative
    /// answer reconnects and re-submits the request once.
    pub fn request_open(&self, request: WindowRequest) {
        let handle = self.clone();
        self.submit(move |wm| {
            let retry = request.clone();
            match wm.request_open(request) {
                Ok(Admission::PendingReconnect) => {
                    let connection = wm.connection();
                    wm.reconnect_prompt().confirm_reconnect(Box::new(move |answer| {
                        if !answer {
                            return;
                        }
                        connection.set_connected(true);
                        handle.submit(move |wm| {
                            if let Err(err) = wm.request_open(retry) {
                                error!("Window admission failed: {err:#}");
                            }
                        });
                    }));
                }
                Ok(_) => {}
                Err(err) => error!("Window admission failed: {err:#}"),
            }
        });
    }

    pub fn request_dialog(&self, request: WindowRequest) {
        self.submit(move |wm| {
            if let Err(err) = wm.request_dialog(request) {
                error!("Dialog admission failed: {err:#}");
            }
        });
    }

    pub fn close(&self, id: WindowId) {
        self.submit(move |wm| wm.close(id));
    }

    pub fn maximize(&self, id: WindowId) {
        self.submit(move |wm| wm.maximize(id));
    }

    pub fn minimize(&self, id: WindowId) {
        self.submit(move |wm| wm.minimize(id));
    }

    pub fn set_title(&self, id: WindowId, title: impl Into<String>) {
        let title = title.into();
        self.submit(move |wm| wm.set_title(id, title));
    }
}

#[cfg(test)]
mod tests;
