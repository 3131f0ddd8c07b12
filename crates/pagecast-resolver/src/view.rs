//! View-readiness handshake.
//!
//! Emissions for cache hits and resolution misses must not reach the view
//! layer before it has mounted for the new navigation. The gate makes that
//! ordering explicit: the resolver arms it when a navigation starts, the
//! rendering layer signals readiness once mounted, and the gated emission
//! paths wait in between.

use tokio::sync::watch;

/// Readiness gate between the resolver and the rendering layer.
///
/// A gate starts open. [`ContentResolver::navigate`](crate::ContentResolver::navigate)
/// arms it for each navigation event; a rendering layer that holds the gate
/// must call [`signal_ready`](Self::signal_ready) after every mount, or
/// gated emissions for that navigation never fire. Headless callers with no
/// rendering layer should use [`detached`](Self::detached), which never
/// closes.
#[derive(Debug)]
pub struct ViewGate {
    ready: watch::Sender<bool>,
    detached: bool,
}

impl ViewGate {
    /// Create a gate wired to a rendering layer.
    #[must_use]
    pub fn new() -> Self {
        let (ready, _) = watch::channel(true);
        Self {
            ready,
            detached: false,
        }
    }

    /// Create a gate that is permanently open.
    #[must_use]
    pub fn detached() -> Self {
        let mut gate = Self::new();
        gate.detached = true;
        gate
    }

    /// Close the gate for a new navigation event.
    pub(crate) fn arm(&self) {
        if !self.detached {
            self.ready.send_replace(false);
        }
    }

    /// Signal that the view has mounted and emissions may flow.
    pub fn signal_ready(&self) {
        self.ready.send_replace(true);
    }

    /// Wait until the gate is open.
    pub(crate) async fn wait_ready(&self) {
        if self.detached {
            return;
        }
        let mut ready = self.ready.subscribe();
        // Cannot fail: the sender lives in self for the whole wait.
        let _ = ready.wait_for(|open| *open).await;
    }
}

impl Default for ViewGate {
    fn default() -> Self {
        Self::new()
    }
}
