//! User-interaction capability traits.
//!
//! The executor performs its user-visible side effects through two narrow
//! traits so it stays independent of any UI runtime. Implementations are
//! injected per platform: a native dialog on device, `window.confirm` on
//! web, the no-op pair for headless hosts and tests.

use async_trait::async_trait;

/// Platform notification primitive.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show a confirmation dialog.
    ///
    /// The future resolves when the user dismisses the dialog; callers
    /// sequence follow-up actions (such as navigation) after that point.
    async fn confirm(&self, message: &str);

    /// Show an error dialog. Fire-and-forget.
    fn alert_error(&self, message: &str);
}

/// Navigation primitive.
pub trait Navigator: Send + Sync {
    fn redirect(&self, target: &str);
}

/// Notifier that renders nothing; confirmations resolve immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn confirm(&self, _message: &str) {}

    fn alert_error(&self, _message: &str) {}
}

/// Navigator that goes nowhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn redirect(&self, _target: &str) {}
}

/// Notifier that logs dialogs instead of rendering them.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    async fn confirm(&self, message: &str) {
        tracing::info!(target: "takaful::ui", message = %message, "confirmation dialog");
    }

    fn alert_error(&self, message: &str) {
        tracing::warn!(target: "takaful::ui", message = %message, "error dialog");
    }
}

/// Navigator that logs redirects instead of navigating.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn redirect(&self, target: &str) {
        tracing::info!(target: "takaful::ui", to = %target, "redirect");
    }
}
