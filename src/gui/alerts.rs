//! Modal alert dialogs for warnings and per-file errors
//!
//! Alerts queue up and are shown one at a time in a centered window, so a
//! batch with several unreadable files walks the user through each failure
//! the way the per-file error boxes did.

use eframe::egui::{self, RichText, Stroke, Vec2};

use super::theme::{ACCENT_RED, BG_SECONDARY, STATUS_RUNNING, TEXT_PRIMARY};

/// Severity of an alert; decides title and trim color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// Recoverable input problem ("Please enter a search term.").
    Warning,
    /// A per-file read failure.
    Error,
}

impl AlertKind {
    fn title(self) -> &'static str {
        match self {
            AlertKind::Warning => "Warning",
            AlertKind::Error => "Error",
        }
    }
}

/// One queued dialog.
#[derive(Debug, Clone)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }
}

/// Queue of pending alerts; only the front one is rendered.
#[derive(Debug, Default)]
pub struct AlertQueue {
    current: Option<Alert>,
    pending: Vec<Alert>,
}

impl AlertQueue {
    /// Add an alert, showing it immediately if nothing is on screen.
    pub fn push(&mut self, alert: Alert) {
        if self.current.is_none() {
            self.current = Some(alert);
        } else {
            self.pending.push(alert);
        }
    }

    /// Dismiss the visible alert and move to the next queued one.
    pub fn dismiss_current(&mut self) {
        self.current = if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        };
    }

    /// Total alerts still to be acknowledged (including the visible one).
    pub fn len(&self) -> usize {
        let current = if self.current.is_some() { 1 } else { 0 };
        current + self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

/// Render the front alert, if any. OK or Escape dismisses it.
pub fn render_alerts(ctx: &egui::Context, queue: &mut AlertQueue) {
    let Some(alert) = queue.current.clone() else {
        return;
    };

    let trim_color = match alert.kind {
        AlertKind::Warning => STATUS_RUNNING,
        AlertKind::Error => ACCENT_RED,
    };

    let frame = egui::Frame::window(&ctx.style())
        .fill(BG_SECONDARY)
        .stroke(Stroke::new(2.0, trim_color));

    let mut dismissed = false;

    egui::Window::new(alert.kind.title())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(frame)
        .show(ctx, |ui| {
            ui.set_max_width(420.0);
            ui.add_space(4.0);
            ui.label(RichText::new(&alert.message).color(TEXT_PRIMARY));

            let remaining = queue.len().saturating_sub(1);
            if remaining > 0 {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("{} more message(s) pending", remaining))
                        .small()
                        .color(super::theme::TEXT_DIM),
                );
            }

            ui.add_space(8.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add(
                        egui::Button::new(RichText::new("OK").color(BG_SECONDARY))
                            .fill(trim_color)
                            .min_size(Vec2::new(80.0, 28.0)),
                    )
                    .clicked()
                {
                    dismissed = true;
                }
            });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        dismissed = true;
    }

    if dismissed {
        queue.dismiss_current();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_shows_first_alert_immediately() {
        let mut queue = AlertQueue::default();
        assert!(queue.is_empty());

        queue.push(Alert::warning("first"));
        queue.push(Alert::error("second"));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current.as_ref().unwrap().message, "first");
    }

    #[test]
    fn test_dismiss_advances_to_next_alert() {
        let mut queue = AlertQueue::default();
        queue.push(Alert::warning("first"));
        queue.push(Alert::error("second"));

        queue.dismiss_current();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.current.as_ref().unwrap().kind, AlertKind::Error);

        queue.dismiss_current();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }
}
