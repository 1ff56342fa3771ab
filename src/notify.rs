use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A toast. Times are seconds from `util::time::current_time_secs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    pub expires_at: f64,
}

/// Toasts plus the "copied" indicators of copy buttons. Every method takes
/// the current time so expiry can be tested without a clock.
#[derive(Debug, Default)]
pub struct Notifier {
    notifications: Vec<Notification>,
    /// Copy-button key and when its indicator goes back to "Copy"
    copied: Vec<(String, f64)>,
    notification_secs: f64,
    copied_secs: f64,
}

impl Notifier {
    pub fn new(notification_secs: f64, copied_secs: f64) -> Self {
        Self {
            notifications: Vec::new(),
            copied: Vec::new(),
            notification_secs,
            copied_secs,
        }
    }

    pub fn set_durations(&mut self, notification_secs: f64, copied_secs: f64) {
        self.notification_secs = notification_secs;
        self.copied_secs = copied_secs;
    }

    pub fn success(&mut self, message: impl Into<String>, now: f64) -> Uuid {
        self.push(NotificationKind::Success, message.into(), now)
    }

    pub fn error(&mut self, message: impl Into<String>, now: f64) -> Uuid {
        self.push(NotificationKind::Error, message.into(), now)
    }

    fn push(&mut self, kind: NotificationKind, message: String, now: f64) -> Uuid {
        let id = Uuid::new_v4();
        log::debug!("Notification {id}: {message}");
        self.notifications.push(Notification {
            id,
            kind,
            message,
            expires_at: now + self.notification_secs,
        });
        id
    }

    /// Marks a copy button as copied until the indicator duration elapses.
    pub fn mark_copied(&mut self, key: &str, now: f64) {
        let until = now + self.copied_secs;
        match self.copied.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = until,
            None => self.copied.push((key.to_owned(), until)),
        }
    }

    pub fn is_copied(&self, key: &str, now: f64) -> bool {
        self.copied.iter().any(|(k, until)| k == key && now < *until)
    }

    /// Drops everything that has expired.
    pub fn prune(&mut self, now: f64) {
        self.notifications.retain(|n| now < n.expires_at);
        self.copied.retain(|(_, until)| now < *until);
    }

    pub fn active(&self) -> &[Notification] {
        &self.notifications
    }

    /// Seconds until the next expiry, so the UI can schedule a repaint.
    pub fn next_expiry(&self, now: f64) -> Option<f64> {
        self.notifications
            .iter()
            .map(|n| n.expires_at)
            .chain(self.copied.iter().map(|(_, until)| *until))
            .map(|t| (t - now).max(0.0))
            .reduce(f64::min)
    }

    /// Paints the toasts in the bottom right corner.
    pub fn show(&self, ctx: &egui::Context) {
        if self.notifications.is_empty() {
            return;
        }
        egui::Area::new(egui::Id::new("notifications"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for notification in &self.notifications {
                    let fill = match notification.kind {
                        NotificationKind::Success => egui::Color32::from_rgb(22, 163, 74),
                        NotificationKind::Error => egui::Color32::from_rgb(220, 38, 38),
                    };
                    egui::Frame::none()
                        .fill(fill)
                        .rounding(6.0)
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                        .show(ui, |ui| {
                            ui.colored_label(egui::Color32::WHITE, &notification.message);
                        });
                    ui.add_space(6.0);
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifications_expire() {
        let mut notifier = Notifier::new(1.0, 2.0);
        notifier.success("Copied to clipboard!", 10.0);
        notifier.error("Failed to copy", 10.5);
        assert_eq!(notifier.active().len(), 2);

        notifier.prune(11.2);
        assert_eq!(notifier.active().len(), 1);
        assert_eq!(notifier.active()[0].kind, NotificationKind::Error);

        notifier.prune(11.5);
        assert!(notifier.active().is_empty());
    }

    #[test]
    fn test_copied_indicator() {
        let mut notifier = Notifier::new(1.0, 2.0);
        notifier.mark_copied("gradient", 0.0);
        assert!(notifier.is_copied("gradient", 1.9));
        assert!(!notifier.is_copied("shadow", 1.0));
        assert!(!notifier.is_copied("gradient", 2.0));

        notifier.mark_copied("gradient", 1.5);
        assert!(notifier.is_copied("gradient", 3.0));
        assert_eq!(notifier.next_expiry(3.0), Some(0.5));
    }

    #[test]
    fn test_ids_are_unique() {
        let mut notifier = Notifier::new(1.0, 2.0);
        let a = notifier.success("a", 0.0);
        let b = notifier.success("b", 0.0);
        assert_ne!(a, b);
    }
}
