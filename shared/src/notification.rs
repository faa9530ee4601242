//! Notification payloads
//!
//! Transient, severity-tagged outcome messages emitted by the desk
//! controller and consumed by a presentation layer (toast stack).

use serde::{Deserialize, Serialize};

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// Notification payload
///
/// `seq` identifies one logical toast: a pending notification and the
/// resolved one that follows reuse the same `seq`, so the consumer swaps
/// the toast in place instead of stacking a second one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub seq: u64,
    pub level: NotificationLevel,
    pub message: String,
    /// Operation still in flight; a resolved notification with the same
    /// `seq` follows
    pub pending: bool,
}

impl Notification {
    pub fn info(seq: u64, message: impl Into<String>) -> Self {
        Self {
            seq,
            level: NotificationLevel::Info,
            message: message.into(),
            pending: false,
        }
    }

    pub fn success(seq: u64, message: impl Into<String>) -> Self {
        Self {
            seq,
            level: NotificationLevel::Success,
            message: message.into(),
            pending: false,
        }
    }

    pub fn error(seq: u64, message: impl Into<String>) -> Self {
        Self {
            seq,
            level: NotificationLevel::Error,
            message: message.into(),
            pending: false,
        }
    }

    /// In-flight marker for a mutation; resolved by a later notification
    /// with the same `seq`
    pub fn pending(seq: u64, message: impl Into<String>) -> Self {
        Self {
            seq,
            level: NotificationLevel::Info,
            message: message.into(),
            pending: true,
        }
    }
}
