//! Asset readiness tracking.
//!
//! The core never loads files itself; the embedder's loader reports each
//! named asset as ready or failed, and [`Readiness::ensure_ready`] is the
//! join point the embedder must pass before starting the game loop. Any
//! failure is fatal at startup; there are no retries or placeholders.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::error::{AssetError, GameResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Audio,
}

/// The set of named assets a game requires before it may start.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    entries: Vec<(String, AssetKind)>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require(mut self, name: impl Into<String>, kind: AssetKind) -> Self {
        self.entries.push((name.into(), kind));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(String, AssetKind)] {
        &self.entries
    }
}

/// Outcome of one asset load, reported by the embedder's loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadReport {
    Ready(String),
    Failed { name: String, reason: String },
}

/// Tracks which manifest entries have loaded.
#[derive(Debug, Clone)]
pub struct Readiness {
    pending: BTreeSet<String>,
    failures: Vec<(String, String)>,
}

impl Readiness {
    pub fn new(manifest: &Manifest) -> Self {
        Self {
            pending: manifest
                .entries()
                .iter()
                .map(|(name, _)| name.clone())
                .collect(),
            failures: Vec::new(),
        }
    }

    pub fn report(&mut self, report: LoadReport) {
        match report {
            LoadReport::Ready(name) => {
                if self.pending.remove(&name) {
                    debug!(asset = %name, remaining = self.pending.len(), "asset ready");
                } else {
                    warn!(asset = %name, "ready report for unknown or duplicate asset");
                }
            }
            LoadReport::Failed { name, reason } => {
                self.pending.remove(&name);
                warn!(asset = %name, reason = %reason, "asset failed to load");
                self.failures.push((name, reason));
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.pending.is_empty() && self.failures.is_empty()
    }

    /// Fails with the first load failure, or with the pending count if
    /// loads are still outstanding.
    pub fn ensure_ready(&self) -> GameResult<()> {
        if let Some((name, reason)) = self.failures.first() {
            return Err(AssetError::LoadFailed {
                name: name.clone(),
                reason: reason.clone(),
            }
            .into());
        }
        if !self.pending.is_empty() {
            return Err(AssetError::NotReady {
                pending: self.pending.len(),
            }
            .into());
        }
        Ok(())
    }
}
