// ── User-facing notifications ──
//
// Toast-style messages published on a broadcast channel. Publishing
// never blocks and never fails: with no subscribers the message is
// simply dropped.

use serde::Serialize;
use strum::Display;
use tokio::sync::broadcast;

use crate::validation::ValidationError;

const CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A toast notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Notification {
    pub fn new(level: NotificationLevel, title: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            detail: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, title)
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl From<&ValidationError> for Notification {
    fn from(err: &ValidationError) -> Self {
        let notification = Self::new(NotificationLevel::Warning, err.user_message());
        match err.user_detail() {
            Some(detail) => notification.with_detail(detail),
            None => notification,
        }
    }
}

/// Fan-out publisher for [`Notification`]s.
#[derive(Clone)]
pub struct Notifier {
    tx: broadcast::Sender<Notification>,
}

impl Notifier {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    pub fn publish(&self, notification: Notification) {
        // Err only means nobody is listening.
        let _ = self.tx.send(notification);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::validation::Field;

    #[test]
    fn publish_without_subscribers_is_fine() {
        Notifier::new().publish(Notification::info("hola"));
    }

    #[tokio::test]
    async fn subscribers_receive_published() {
        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();
        notifier.publish(Notification::success("Producto creado correctamente"));

        let got = rx.recv().await.unwrap();
        assert_eq!(got.level, NotificationLevel::Success);
        assert_eq!(got.title, "Producto creado correctamente");
        assert_eq!(got.detail, None);
    }

    #[test]
    fn validation_errors_become_warnings() {
        let n = Notification::from(&ValidationError::Required { field: Field::Name });
        assert_eq!(n.level, NotificationLevel::Warning);
        assert_eq!(n.title, "El campo nombre es obligatorio");
    }
}
