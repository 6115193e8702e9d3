//! Toast notifications.
//!
//! Fire-and-forget toasts with fixed display options: top-right, 5 second
//! auto-close, dark theme. Call sites vary only the message text. Expired
//! toasts are pruned on each UI tick.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Where toasts are anchored on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastPosition {
    #[default]
    TopRight,
    BottomRight,
}

/// Toast color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastTheme {
    #[default]
    Dark,
    Light,
}

/// Fixed display options shared by every toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastOptions {
    pub position: ToastPosition,
    pub auto_close: Duration,
    pub theme: ToastTheme,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            position: ToastPosition::TopRight,
            auto_close: Duration::from_millis(5000),
            theme: ToastTheme::Dark,
        }
    }
}

/// Success or failure styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One toast on screen.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    raised_at: Instant,
}

impl Toast {
    fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            raised_at: Instant::now(),
        }
    }

    /// Whether the toast has outlived `auto_close` as of `now`.
    fn expired_at(&self, now: Instant, auto_close: Duration) -> bool {
        now.duration_since(self.raised_at) >= auto_close
    }
}

/// Queue of active toasts.
#[derive(Debug, Default)]
pub struct Notifier {
    toasts: VecDeque<Toast>,
    options: ToastOptions,
}

impl Notifier {
    /// Create a notifier with the default display options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a notifier with explicit options.
    pub fn with_options(options: ToastOptions) -> Self {
        Self {
            toasts: VecDeque::new(),
            options,
        }
    }

    /// Raise a success toast.
    pub fn success(&mut self, message: impl Into<String>) {
        self.toasts.push_back(Toast::new(ToastKind::Success, message));
    }

    /// Raise an error toast.
    pub fn error(&mut self, message: impl Into<String>) {
        self.toasts.push_back(Toast::new(ToastKind::Error, message));
    }

    /// Drop toasts past their auto-close deadline. Called on each tick.
    pub fn prune(&mut self) {
        self.prune_at(Instant::now());
    }

    fn prune_at(&mut self, now: Instant) {
        let auto_close = self.options.auto_close;
        self.toasts.retain(|t| !t.expired_at(now, auto_close));
    }

    /// Toasts currently on screen, oldest first.
    pub fn active(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Number of active toasts.
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Whether any toast is on screen.
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// The fixed display options.
    pub fn options(&self) -> ToastOptions {
        self.options
    }
}
