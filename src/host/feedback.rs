//! Lifecycle hooks and user feedback through the host runtime.
//!
//! Every helper degrades to a log line (or nothing) when no runtime is
//! present, so callers never branch on hosting themselves.

use crate::host::runtime::{HapticFeedback, HostRuntimeAccessor};

/// Tell the host the UI is ready and should take the full viewport.
///
/// Returns whether a runtime received the calls.
pub fn launch(accessor: &dyn HostRuntimeAccessor) -> bool {
    match accessor.runtime() {
        Some(runtime) => {
            runtime.ready();
            runtime.expand();
            tracing::info!(color_scheme = ?runtime.color_scheme(), "Launched inside host");
            true
        }
        None => {
            tracing::info!("Host runtime not available, running standalone");
            false
        }
    }
}

/// Show a modal alert, or log it when unhosted.
pub fn alert_or_log(accessor: &dyn HostRuntimeAccessor, message: &str) {
    match accessor.runtime() {
        Some(runtime) => runtime.show_alert(message),
        None => tracing::warn!(message, "Alert (no host runtime)"),
    }
}

/// Ask for confirmation; `default` when unhosted.
pub fn confirm_or(accessor: &dyn HostRuntimeAccessor, message: &str, default: bool) -> bool {
    match accessor.runtime() {
        Some(runtime) => runtime.show_confirm(message),
        None => default,
    }
}

pub fn haptic(accessor: &dyn HostRuntimeAccessor, feedback: HapticFeedback) {
    if let Some(runtime) = accessor.runtime() {
        runtime.haptic(feedback);
    }
}

/// Open an external link through the host. Returns false when unhosted.
pub fn open_link(accessor: &dyn HostRuntimeAccessor, url: &str) -> bool {
    match accessor.runtime() {
        Some(runtime) => {
            runtime.open_link(url);
            true
        }
        None => false,
    }
}

/// Open a `t.me` link inside the host. Returns false when unhosted.
pub fn open_telegram_link(accessor: &dyn HostRuntimeAccessor, url: &str) -> bool {
    match accessor.runtime() {
        Some(runtime) => {
            runtime.open_telegram_link(url);
            true
        }
        None => {
            tracing::info!(url, "Telegram link (no host runtime)");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::readiness::HostSlot;
    use crate::host::runtime::{HostEvent, NoHost, NotificationKind, StaticHostRuntime};
    use std::sync::Arc;

    #[test]
    fn test_launch_calls_ready_then_expand() {
        let runtime = Arc::new(StaticHostRuntime::new(None));
        let slot = HostSlot::with_runtime(runtime.clone());

        assert!(launch(&slot));
        assert_eq!(runtime.events(), vec![HostEvent::Ready, HostEvent::Expand]);
    }

    #[test]
    fn test_unhosted_helpers_are_inert() {
        assert!(!launch(&NoHost));
        alert_or_log(&NoHost, "nothing to see");
        haptic(&NoHost, HapticFeedback::Selection);
        assert!(confirm_or(&NoHost, "sure?", true));
        assert!(!open_link(&NoHost, "https://example.org"));
        assert!(!open_telegram_link(&NoHost, "https://t.me/ada"));
    }

    #[test]
    fn test_feedback_reaches_runtime() {
        let runtime = Arc::new(StaticHostRuntime::new(None).with_confirm_answer(false));
        let slot = HostSlot::with_runtime(runtime.clone());

        alert_or_log(&slot, "Saved");
        haptic(&slot, HapticFeedback::Notification(NotificationKind::Success));
        assert!(!confirm_or(&slot, "sure?", true));

        assert_eq!(
            runtime.events(),
            vec![
                HostEvent::Alert("Saved".into()),
                HostEvent::Haptic(HapticFeedback::Notification(NotificationKind::Success)),
                HostEvent::Confirm("sure?".into()),
            ]
        );
    }
}
