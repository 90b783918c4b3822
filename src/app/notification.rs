// ABOUTME: Transient notices shown under the chat view (login failures, missing key, reset confirmation)
// Notices expire on their own after a fixed duration

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
            duration: Duration::from_secs(5),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Info)
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_notification_is_not_expired() {
        let notification = Notification::error("boom");
        assert_eq!(notification.notification_type, NotificationType::Error);
        assert!(!notification.is_expired());
    }

    #[test]
    fn test_zero_duration_expires() {
        let mut notification = Notification::info("hi");
        notification.duration = Duration::ZERO;
        std::thread::sleep(Duration::from_millis(2));
        assert!(notification.is_expired());
    }
}
