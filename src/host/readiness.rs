//! Waiting for the host runtime.
//!
//! # Responsibilities
//! - Hold the runtime once the embedding environment installs it
//! - Let callers wait for it with an upper bound
//!
//! # Design Decisions
//! - Installation is a one-shot event on a watch channel; waiters wake on it
//! - Bounded polling remains for accessors without an event
//! - Waits never fail: a timeout just means "not hosted", and the UI carries
//!   on unauthenticated

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;

use crate::host::runtime::{HostRuntime, HostRuntimeAccessor};

/// Outcome of a readiness wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    TimedOut,
}

impl Readiness {
    pub fn is_ready(self) -> bool {
        self == Readiness::Ready
    }
}

type RuntimeCell = Option<Arc<dyn HostRuntime>>;

/// Runtime holder whose installation wakes every waiter.
#[derive(Clone)]
pub struct HostSlot {
    tx: Arc<watch::Sender<RuntimeCell>>,
}

impl HostSlot {
    /// A slot with no runtime yet.
    pub fn empty() -> Self {
        let (tx, _) = watch::channel::<RuntimeCell>(None);
        Self { tx: Arc::new(tx) }
    }

    /// A slot that is ready from the start.
    pub fn with_runtime(runtime: Arc<dyn HostRuntime>) -> Self {
        let slot = Self::empty();
        slot.install(runtime);
        slot
    }

    /// Make the runtime available. Called by the embedding environment once
    /// the host has finished initializing.
    pub fn install(&self, runtime: Arc<dyn HostRuntime>) {
        self.tx.send_replace(Some(runtime));
        tracing::info!("Host runtime installed");
    }

    /// Wait until a runtime is installed or `timeout` elapses.
    pub async fn await_ready(&self, timeout: Duration) -> Readiness {
        let mut rx = self.tx.subscribe();
        let wait = async move { rx.wait_for(Option::is_some).await.map(|_| ()) };

        match time::timeout(timeout, wait).await {
            Ok(Ok(())) => Readiness::Ready,
            Ok(Err(_)) | Err(_) => {
                tracing::info!(timeout_ms = timeout.as_millis() as u64, "Host runtime not available, continuing unhosted");
                Readiness::TimedOut
            }
        }
    }
}

impl Default for HostSlot {
    fn default() -> Self {
        Self::empty()
    }
}

impl HostRuntimeAccessor for HostSlot {
    fn runtime(&self) -> Option<Arc<dyn HostRuntime>> {
        self.tx.borrow().clone()
    }
}

/// Check `accessor` every `interval` until the runtime appears or `timeout`
/// elapses.
pub async fn poll_until_ready(
    accessor: &dyn HostRuntimeAccessor,
    interval: Duration,
    timeout: Duration,
) -> Readiness {
    let interval = interval.max(Duration::from_millis(1));
    let mut ticker = time::interval(interval);

    let poll = async {
        loop {
            // First tick completes immediately.
            ticker.tick().await;
            if accessor.runtime().is_some() {
                return;
            }
        }
    };

    match time::timeout(timeout, poll).await {
        Ok(()) => Readiness::Ready,
        Err(_) => {
            tracing::debug!(timeout_ms = timeout.as_millis() as u64, "Gave up polling for host runtime");
            Readiness::TimedOut
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::runtime::{NoHost, StaticHostRuntime};
    use std::time::Instant;

    #[tokio::test]
    async fn test_ready_immediately_when_installed() {
        let slot = HostSlot::with_runtime(Arc::new(StaticHostRuntime::new(None)));
        assert_eq!(slot.await_ready(Duration::from_millis(10)).await, Readiness::Ready);
        assert!(slot.runtime().is_some());
    }

    #[tokio::test]
    async fn test_wakes_on_install() {
        let slot = HostSlot::empty();
        let installer = slot.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(30)).await;
            installer.install(Arc::new(StaticHostRuntime::new(Some("abc".into()))));
        });

        let started = Instant::now();
        let readiness = slot.await_ready(Duration::from_secs(5)).await;
        assert!(readiness.is_ready());
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_times_out_without_failing() {
        let slot = HostSlot::empty();
        let started = Instant::now();
        assert_eq!(slot.await_ready(Duration::from_millis(50)).await, Readiness::TimedOut);
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(50));
        assert!(elapsed < Duration::from_millis(500));
        assert!(slot.runtime().is_none());
    }

    #[tokio::test]
    async fn test_polling_bounded() {
        let started = Instant::now();
        let readiness = poll_until_ready(&NoHost, Duration::from_millis(10), Duration::from_millis(60)).await;
        assert_eq!(readiness, Readiness::TimedOut);
        assert!(started.elapsed() < Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_polling_sees_late_runtime() {
        let slot = HostSlot::empty();
        let installer = slot.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(25)).await;
            installer.install(Arc::new(StaticHostRuntime::new(None)));
        });

        let readiness = poll_until_ready(&slot, Duration::from_millis(5), Duration::from_secs(5)).await;
        assert_eq!(readiness, Readiness::Ready);
    }
}
