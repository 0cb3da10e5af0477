//! Process-wide access to the policy.
//!
//! [`install`] sets the policy once at startup. [`SharedCors`] is for
//! deployments that reload configuration: readers take a snapshot without
//! locking and a reload swaps in a whole new [`Cors`].

use crate::cors::Cors;
use arc_swap::ArcSwap;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

static INSTALLED: OnceCell<Cors> = OnceCell::new();

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("a CORS policy has already been installed for this process")]
pub struct AlreadyInstalled;

/// Installs the process-wide policy. Only the first call succeeds.
pub fn install(cors: Cors) -> Result<&'static Cors, AlreadyInstalled> {
    let mut installed = false;
    let current = INSTALLED.get_or_init(|| {
        installed = true;
        cors
    });

    if installed {
        info!(origins = current.allow_list().len(), "CORS policy installed");
        Ok(current)
    } else {
        Err(AlreadyInstalled)
    }
}

pub fn installed() -> Option<&'static Cors> {
    INSTALLED.get()
}

/// Atomically replaceable policy snapshot.
#[derive(Debug)]
pub struct SharedCors {
    current: ArcSwap<Cors>,
}

impl SharedCors {
    pub fn new(cors: Cors) -> Self {
        Self {
            current: ArcSwap::from_pointee(cors),
        }
    }

    /// The snapshot in effect now. Later replacements do not affect it.
    pub fn load(&self) -> Arc<Cors> {
        self.current.load_full()
    }

    /// Swaps in `cors` for every subsequent [`load`](Self::load) and returns
    /// the previous snapshot.
    pub fn replace(&self, cors: Cors) -> Arc<Cors> {
        let origins = cors.allow_list().len();
        let previous = self.current.swap(Arc::new(cors));
        info!(origins, "CORS policy replaced");
        previous
    }
}

impl From<Cors> for SharedCors {
    fn from(cors: Cors) -> Self {
        Self::new(cors)
    }
}

#[cfg(test)]
#[path = "shared_test.rs"]
mod shared_test;
