//! Error notifications for the modal surface of a calculator window.
//!
//! The machine never shows anything itself. When it recovers from an error
//! by clearing, it hands back a [`Notification`]; a shell forwards it to
//! whatever implements [`Notifier`].

use crate::error::CalcError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Title of every error notification.
pub const ERROR_TITLE: &str = "Error";

/// Message shown when a division by zero is refused.
pub const DIVIDE_BY_ZERO_MESSAGE: &str = "Cannot divide by zero!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    DivideByZero,
    InvalidNumber,
}

/// A user-visible error, raised after the session was cleared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

impl Notification {
    pub fn divide_by_zero() -> Self {
        Self::raise(NotificationKind::DivideByZero, DIVIDE_BY_ZERO_MESSAGE.to_string())
    }

    pub fn invalid_number(input: &str) -> Self {
        Self::raise(
            NotificationKind::InvalidNumber,
            format!("Invalid number: '{input}'"),
        )
    }

    /// Build the notification matching an error the machine recovered from.
    pub fn from_error(err: &CalcError) -> Self {
        match err {
            CalcError::DivideByZero => Self::divide_by_zero(),
            CalcError::InvalidNumberFormat { input, .. } => Self::invalid_number(input),
        }
    }

    fn raise(kind: NotificationKind, message: String) -> Self {
        Self {
            kind,
            title: ERROR_TITLE.to_string(),
            message,
            raised_at: Utc::now(),
        }
    }
}

/// The surface that displays notifications to the user.
pub trait Notifier {
    fn notify(&mut self, notification: &Notification);
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, notification: &Notification) {
        (**self).notify(notification);
    }
}

/// Notifier that keeps every notification it receives.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    notifications: Vec<Notification>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn last(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    /// Drain everything recorded so far.
    pub fn take(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: &Notification) {
        self.notifications.push(notification.clone());
    }
}
