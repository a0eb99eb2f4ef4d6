// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::diagnostics::{ErrorType, WarningType};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green, 3s duration).
    #[default]
    Success,
    /// Warning that doesn't block operation (orange, 5s duration).
    Warning,
    /// Error requiring attention (red, manual dismiss).
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns `None` for errors, which stay until dismissed.
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Severity::Success => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// i18n key resolved at render time.
    message_key: String,
    message_args: Vec<(String, String)>,
    created_at: Instant,
    warning_type: Option<WarningType>,
    error_type: Option<ErrorType>,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
            warning_type: None,
            error_type: None,
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds a `{ $key }` argument for the message.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    /// Category recorded in diagnostics when a warning is pushed.
    #[must_use]
    pub fn with_warning_type(mut self, warning_type: WarningType) -> Self {
        self.warning_type = Some(warning_type);
        self
    }

    /// Category recorded in diagnostics when an error is pushed.
    #[must_use]
    pub fn with_error_type(mut self, error_type: ErrorType) -> Self {
        self.error_type = Some(error_type);
        self
    }

    /// Overrides the creation time.
    #[must_use]
    pub fn created(mut self, at: Instant) -> Self {
        self.created_at = at;
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    #[must_use]
    pub fn warning_type(&self) -> Option<WarningType> {
        self.warning_type
    }

    #[must_use]
    pub fn error_type(&self) -> Option<ErrorType> {
        self.error_type
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns whether the notification has outlived its display time at `now`.
    #[must_use]
    pub fn should_auto_dismiss_at(&self, now: Instant) -> bool {
        self.severity
            .auto_dismiss_duration()
            .is_some_and(|d| now.saturating_duration_since(self.created_at) >= d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn error_severity_has_no_auto_dismiss() {
        assert!(Severity::Error.auto_dismiss_duration().is_none());
    }

    #[test]
    fn warning_duration_is_longer_than_success() {
        assert!(Severity::Warning.auto_dismiss_duration() > Severity::Success.auto_dismiss_duration());
    }

    #[test]
    fn success_dismisses_after_three_seconds() {
        let start = Instant::now();
        let n = Notification::success("notification-download-saved").created(start);

        assert!(!n.should_auto_dismiss_at(start + Duration::from_millis(2900)));
        assert!(n.should_auto_dismiss_at(start + Duration::from_secs(3)));
    }

    #[test]
    fn builder_sets_args_and_types() {
        let n = Notification::warning("notification-config-load-error")
            .with_arg("file", "settings.toml")
            .with_warning_type(WarningType::ConfigurationIssue);

        assert_eq!(n.severity(), Severity::Warning);
        assert_eq!(n.message_args().len(), 1);
        assert_eq!(n.warning_type(), Some(WarningType::ConfigurationIssue));
        assert_eq!(n.error_type(), None);
    }

    #[test]
    fn error_builder_records_error_type() {
        let n = Notification::error("notification-catalog-load-error")
            .with_error_type(ErrorType::Catalog);

        assert_eq!(n.severity(), Severity::Error);
        assert_eq!(n.error_type(), Some(ErrorType::Catalog));
        assert!(!n.should_auto_dismiss_at(n.created_at() + Duration::from_secs(60)));
    }
}
